
//! Rendering of converted quantities as user-facing text.

pub mod number;

use crate::units::unit::Unit;

pub use number::format_number;

/// Renders a quantity together with its unit symbol, such as
/// "2,500 m".
pub fn format_measurement(value: f64, unit: &Unit) -> String {
  format!("{} {}", format_number(value), unit)
}
