
//! Mutable selection state for an interactive conversion: the active
//! category, the chosen source and target units, and the input value.

use crate::engine::{self, ConversionRequest, ConversionResult, ConvertError};
use crate::units::catalog::UnitCatalog;
use crate::units::category::UnitCategory;
use crate::units::unit::Unit;

/// Tracks the selections behind a single converter view. Changing the
/// category resets both unit selections to the category's defaults,
/// while the input value carries over.
#[derive(Debug, Clone)]
pub struct ConverterSession {
  category: UnitCategory,
  source_unit: Unit,
  target_unit: Unit,
  input_value: f64,
}

impl ConverterSession {
  /// A fresh session starts on the first category, with that
  /// category's default units selected and an input value of zero.
  pub fn new() -> Self {
    Self::with_category(UnitCategory::ALL[0])
  }

  /// A fresh session starting on the given category.
  pub fn with_category(category: UnitCategory) -> Self {
    let catalog = UnitCatalog::standard();
    Self {
      category,
      source_unit: catalog.default_source_unit(category).clone(),
      target_unit: catalog.default_target_unit(category).clone(),
      input_value: 0.0,
    }
  }

  pub fn category(&self) -> UnitCategory {
    self.category
  }

  pub fn source_unit(&self) -> &Unit {
    &self.source_unit
  }

  pub fn target_unit(&self) -> &Unit {
    &self.target_unit
  }

  pub fn input_value(&self) -> f64 {
    self.input_value
  }

  /// Switches to the given category and resets the source and target
  /// units to that category's defaults. Re-selecting the current
  /// category also resets the units.
  pub fn select_category(&mut self, category: UnitCategory) {
    let catalog = UnitCatalog::standard();
    self.category = category;
    self.source_unit = catalog.default_source_unit(category).clone();
    self.target_unit = catalog.default_target_unit(category).clone();
  }

  pub fn set_source_unit(&mut self, unit: Unit) {
    self.source_unit = unit;
  }

  pub fn set_target_unit(&mut self, unit: Unit) {
    self.target_unit = unit;
  }

  pub fn set_input_value(&mut self, value: f64) {
    self.input_value = value;
  }

  /// The conversion request described by the current selections.
  pub fn request(&self) -> ConversionRequest {
    ConversionRequest::new(
      self.category,
      self.source_unit.clone(),
      self.target_unit.clone(),
      self.input_value,
    )
  }

  /// Converts the current input value into the target unit. The
  /// result is recomputed on every call; nothing is cached.
  pub fn result(&self) -> Result<ConversionResult, ConvertError> {
    engine::convert(&self.request())
  }
}

impl Default for ConverterSession {
  fn default() -> Self {
    Self::new()
  }
}
