
use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;

/// The closed set of measurement categories supported by the
/// converter. Every [`Unit`](super::unit::Unit) belongs to exactly
/// one category, and conversions never cross category boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
  Length,
  Area,
  Angle,
}

pub const NCATEGORIES: usize = 3;

/// Error produced when parsing a string which does not name a known
/// [`UnitCategory`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown unit category '{input}'")]
pub struct UnknownCategoryError {
  pub input: String,
}

impl UnitCategory {
  /// All categories, in the order they are presented to the user.
  pub const ALL: [UnitCategory; NCATEGORIES] = [
    UnitCategory::Length,
    UnitCategory::Area,
    UnitCategory::Angle,
  ];

  /// The lowercase name of this category, as accepted by the
  /// [`FromStr`] implementation.
  pub fn name(self) -> &'static str {
    match self {
      UnitCategory::Length => "length",
      UnitCategory::Area => "area",
      UnitCategory::Angle => "angle",
    }
  }

  pub(crate) fn category_index(self) -> usize {
    match self {
      UnitCategory::Length => 0,
      UnitCategory::Area => 1,
      UnitCategory::Angle => 2,
    }
  }
}

impl UnknownCategoryError {
  pub fn new(input: impl Into<String>) -> Self {
    Self { input: input.into() }
  }
}

impl Display for UnitCategory {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for UnitCategory {
  type Err = UnknownCategoryError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    UnitCategory::ALL.into_iter()
      .find(|category| s.eq_ignore_ascii_case(category.name()))
      .ok_or_else(|| UnknownCategoryError::new(s))
  }
}
