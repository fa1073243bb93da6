
//! Conversion engine mapping a quantity expressed in a source unit to
//! the equivalent quantity in a target unit of the same category.

use crate::display::format_measurement;
use crate::units::category::UnitCategory;
use crate::units::unit::Unit;

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// A fully specified conversion to perform: the category being
/// converted within, the source and target units, and the input
/// quantity expressed in the source unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
  pub category: UnitCategory,
  pub source_unit: Unit,
  pub target_unit: Unit,
  pub input_value: f64,
}

/// The outcome of a successful conversion: the numerical value in the
/// target unit, together with its rendered form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
  pub value: f64,
  pub display: String,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum ConvertError {
  #[error("Cannot convert {source_unit} ({src}) to {target_unit} ({dst}); unit categories do not match",
          src = .source_unit.category(), dst = .target_unit.category())]
  CrossCategory { source_unit: Unit, target_unit: Unit },
  #[error("Input value {value} is not a finite number")]
  NonFiniteInput { value: f64 },
}

impl ConversionRequest {
  pub fn new(category: UnitCategory, source_unit: Unit, target_unit: Unit, input_value: f64) -> Self {
    Self { category, source_unit, target_unit, input_value }
  }
}

/// Converts the requested quantity into the target unit, passing
/// through the base unit of the category.
///
/// Fails if either unit disagrees with the request's category, or if
/// the input value is NaN or infinite. A finite input whose converted
/// value exceeds the range of f64 yields an infinite result rather
/// than an error.
pub fn convert(request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
  let categories_agree = request.source_unit.category() == request.category &&
    request.target_unit.category() == request.category;
  if !categories_agree {
    return Err(ConvertError::CrossCategory {
      source_unit: request.source_unit.clone(),
      target_unit: request.target_unit.clone(),
    });
  }
  if !request.input_value.is_finite() {
    return Err(ConvertError::NonFiniteInput { value: request.input_value });
  }
  let value = request.target_unit.from_base(request.source_unit.to_base(request.input_value));
  let display = format_measurement(value, &request.target_unit);
  Ok(ConversionResult { value, display })
}
