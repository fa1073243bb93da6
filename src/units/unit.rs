
use super::category::UnitCategory;

use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};

/// A unit is a named quantity in some [`UnitCategory`] which can be
/// converted to the "base" unit of that category.
///
/// The base unit of each category is the unit whose conversion factor
/// is exactly one: the meter for length, the square meter for area,
/// and the radian for angles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
  symbol: String,
  name: String,
  category: UnitCategory,
  /// The amount of the base unit that is equal to one of this unit.
  amount_of_base: f64,
}

impl Unit {
  /// Constructs a new unit, given the unit's display symbol, spelled
  /// out name, category, and conversion factor to get to the base
  /// unit for the category.
  pub fn new(
    symbol: impl Into<String>,
    name: impl Into<String>,
    category: UnitCategory,
    amount_of_base: f64,
  ) -> Self {
    Self {
      symbol: symbol.into(),
      name: name.into(),
      category,
      amount_of_base,
    }
  }

  /// The short symbol used when rendering measurements, such as "cm"
  /// or "rad".
  pub fn symbol(&self) -> &str {
    &self.symbol
  }

  /// The spelled out unit name, such as "centimeters".
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn category(&self) -> UnitCategory {
    self.category
  }

  pub fn amount_of_base(&self) -> f64 {
    self.amount_of_base
  }

  /// Converts a scalar quantity from this unit to the base unit
  /// corresponding to this category.
  pub fn to_base(&self, amount: f64) -> f64 {
    amount * self.amount_of_base
  }

  /// Converts a scalar quantity from the base unit of this category
  /// into this unit.
  pub fn from_base(&self, amount: f64) -> f64 {
    amount / self.amount_of_base
  }
}

impl Display for Unit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol)
  }
}
