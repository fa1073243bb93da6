
use super::category::{UnitCategory, NCATEGORIES};
use super::unit::Unit;

use once_cell::sync::Lazy;

use std::f64::consts::PI;

/// A catalog of the units available for conversion, organized by
/// [`UnitCategory`]. The catalog is total over the category enum, so
/// every category always has at least one unit available, and lookups
/// by category cannot fail.
#[derive(Debug, Clone)]
pub struct UnitCatalog {
  // Indexed by UnitCategory::category_index.
  entries: [CatalogEntry; NCATEGORIES],
}

/// The units belonging to a single category, in presentation order.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
  category: UnitCategory,
  units: Vec<Unit>,
}

impl UnitCatalog {
  /// Constructs a catalog from one entry per category.
  ///
  /// Panics if the entries are not in the same order as
  /// [`UnitCategory::ALL`].
  pub fn new(entries: [CatalogEntry; NCATEGORIES]) -> Self {
    for (entry, category) in entries.iter().zip(UnitCategory::ALL) {
      assert!(
        entry.category == category,
        "Catalog entries must follow UnitCategory::ALL order; expected {category} but got {}",
        entry.category,
      );
    }
    Self { entries }
  }

  /// The standard catalog used by the converter, constructed on first
  /// access.
  pub fn standard() -> &'static UnitCatalog {
    static STANDARD: Lazy<UnitCatalog> = Lazy::new(standard_catalog);
    Lazy::force(&STANDARD)
  }

  /// All categories available in the catalog, in presentation order.
  pub fn categories(&self) -> &'static [UnitCategory] {
    &UnitCategory::ALL
  }

  /// The units belonging to the given category, in presentation
  /// order. The returned slice is always non-empty.
  pub fn units_for(&self, category: UnitCategory) -> &[Unit] {
    &self.entries[category.category_index()].units
  }

  /// The unit initially selected as the conversion source for the
  /// given category. This is the first unit in presentation order.
  pub fn default_source_unit(&self, category: UnitCategory) -> &Unit {
    &self.units_for(category)[0]
  }

  /// The unit initially selected as the conversion target for the
  /// given category. This is the last unit in presentation order.
  pub fn default_target_unit(&self, category: UnitCategory) -> &Unit {
    let units = self.units_for(category);
    &units[units.len() - 1]
  }

  /// Finds a unit in the given category whose symbol matches `text`
  /// exactly, or whose spelled out name matches `text` up to ASCII
  /// case.
  pub fn find_unit(&self, category: UnitCategory, text: &str) -> Option<&Unit> {
    self.units_for(category).iter()
      .find(|unit| unit.symbol() == text || unit.name().eq_ignore_ascii_case(text))
  }
}

impl CatalogEntry {
  /// Constructs a catalog entry from the units of a single category.
  ///
  /// Panics if `units` is empty, contains a unit from a different
  /// category, or contains two units with the same symbol.
  pub fn new(category: UnitCategory, units: Vec<Unit>) -> Self {
    assert!(!units.is_empty(), "Catalog entry for {category} must contain at least one unit");
    for unit in &units {
      assert!(
        unit.category() == category,
        "Unit {unit} belongs to category {} but was placed under {category}",
        unit.category(),
      );
    }
    for (i, unit) in units.iter().enumerate() {
      assert!(
        units[i + 1..].iter().all(|other| other.symbol() != unit.symbol()),
        "Duplicate unit symbol {unit} in category {category}",
      );
    }
    Self { category, units }
  }

  pub fn category(&self) -> UnitCategory {
    self.category
  }

  pub fn units(&self) -> &[Unit] {
    &self.units
  }
}

/// The standard units table. Conversion factors are expressed as the
/// amount of the category's base unit equal to one of the named unit.
pub fn standard_catalog() -> UnitCatalog {
  use UnitCategory::*;
  UnitCatalog::new([
    // Length units (base: meter)
    CatalogEntry::new(Length, vec![
      Unit::new("cm", "centimeters", Length, 0.01),
      Unit::new("m", "meters", Length, 1.0),
      Unit::new("km", "kilometers", Length, 1000.0),
    ]),
    // Area units (base: square meter)
    CatalogEntry::new(Area, vec![
      Unit::new("cm²", "square centimeters", Area, 1e-4),
      Unit::new("m²", "square meters", Area, 1.0),
      Unit::new("km²", "square kilometers", Area, 1e6),
    ]),
    // Angular units (base: radian)
    CatalogEntry::new(Angle, vec![
      Unit::new("′", "arcminutes", Angle, PI / 10_800.0), // Minute of arc
      Unit::new("rad", "radians", Angle, 1.0),
      Unit::new("grad", "gradians", Angle, PI / 200.0),
    ]),
  ])
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_relative_eq;

  fn symbols_for(category: UnitCategory) -> Vec<&'static str> {
    UnitCatalog::standard().units_for(category).iter()
      .map(Unit::symbol)
      .collect()
  }

  #[test]
  fn test_standard_catalog_categories() {
    let catalog = UnitCatalog::standard();
    assert_eq!(
      catalog.categories(),
      &[UnitCategory::Length, UnitCategory::Area, UnitCategory::Angle],
    );
  }

  #[test]
  fn test_standard_catalog_unit_ordering() {
    assert_eq!(symbols_for(UnitCategory::Length), vec!["cm", "m", "km"]);
    assert_eq!(symbols_for(UnitCategory::Area), vec!["cm²", "m²", "km²"]);
    assert_eq!(symbols_for(UnitCategory::Angle), vec!["′", "rad", "grad"]);
  }

  #[test]
  fn test_default_units_are_first_and_last() {
    let catalog = UnitCatalog::standard();
    for category in UnitCategory::ALL {
      let units = catalog.units_for(category);
      assert_eq!(catalog.default_source_unit(category), &units[0]);
      assert_eq!(catalog.default_target_unit(category), &units[units.len() - 1]);
    }
  }

  #[test]
  fn test_default_units_for_length() {
    let catalog = UnitCatalog::standard();
    assert_eq!(catalog.default_source_unit(UnitCategory::Length).symbol(), "cm");
    assert_eq!(catalog.default_target_unit(UnitCategory::Length).symbol(), "km");
  }

  #[test]
  fn test_every_category_has_a_base_unit() {
    let catalog = UnitCatalog::standard();
    for category in UnitCategory::ALL {
      let base_units = catalog.units_for(category).iter()
        .filter(|unit| unit.amount_of_base() == 1.0)
        .count();
      assert_eq!(base_units, 1, "Category {category} must have exactly one base unit");
    }
  }

  #[test]
  fn test_units_carry_their_own_category() {
    let catalog = UnitCatalog::standard();
    for category in UnitCategory::ALL {
      for unit in catalog.units_for(category) {
        assert_eq!(unit.category(), category);
      }
    }
  }

  #[test]
  fn test_length_conversion_factors() {
    let factors: Vec<f64> = UnitCatalog::standard().units_for(UnitCategory::Length).iter()
      .map(Unit::amount_of_base)
      .collect();
    assert_eq!(factors, vec![0.01, 1.0, 1000.0]);
  }

  #[test]
  fn test_area_conversion_factors() {
    let factors: Vec<f64> = UnitCatalog::standard().units_for(UnitCategory::Area).iter()
      .map(Unit::amount_of_base)
      .collect();
    assert_eq!(factors, vec![1e-4, 1.0, 1e6]);
  }

  #[test]
  fn test_angle_conversion_factors() {
    let catalog = UnitCatalog::standard();
    let arcminute = catalog.find_unit(UnitCategory::Angle, "′").unwrap();
    assert_relative_eq!(arcminute.amount_of_base(), 1.0 / 3437.746_770_784_939, max_relative = 1e-12);
    let radian = catalog.find_unit(UnitCategory::Angle, "rad").unwrap();
    assert_eq!(radian.amount_of_base(), 1.0);
    let gradian = catalog.find_unit(UnitCategory::Angle, "grad").unwrap();
    assert_eq!(gradian.amount_of_base(), PI / 200.0);
  }

  #[test]
  fn test_find_unit_by_symbol() {
    let catalog = UnitCatalog::standard();
    let unit = catalog.find_unit(UnitCategory::Length, "km").unwrap();
    assert_eq!(unit.name(), "kilometers");
  }

  #[test]
  fn test_find_unit_by_name_ignores_ascii_case() {
    let catalog = UnitCatalog::standard();
    let unit = catalog.find_unit(UnitCategory::Area, "Square Kilometers").unwrap();
    assert_eq!(unit.symbol(), "km²");
  }

  #[test]
  fn test_find_unit_does_not_cross_categories() {
    let catalog = UnitCatalog::standard();
    assert!(catalog.find_unit(UnitCategory::Area, "km").is_none());
    assert!(catalog.find_unit(UnitCategory::Length, "rad").is_none());
  }

  #[test]
  fn test_catalog_entry_accessors() {
    let entry = CatalogEntry::new(UnitCategory::Length, vec![
      Unit::new("m", "meters", UnitCategory::Length, 1.0),
    ]);
    assert_eq!(entry.category(), UnitCategory::Length);
    assert_eq!(entry.units().len(), 1);
    assert_eq!(entry.units()[0].symbol(), "m");
  }

  #[test]
  #[should_panic]
  fn test_catalog_entry_panics_on_empty_units() {
    CatalogEntry::new(UnitCategory::Length, vec![]);
  }

  #[test]
  #[should_panic]
  fn test_catalog_entry_panics_on_category_mismatch() {
    CatalogEntry::new(UnitCategory::Length, vec![
      Unit::new("rad", "radians", UnitCategory::Angle, 1.0),
    ]);
  }

  #[test]
  #[should_panic]
  fn test_catalog_entry_panics_on_duplicate_symbol() {
    CatalogEntry::new(UnitCategory::Length, vec![
      Unit::new("m", "meters", UnitCategory::Length, 1.0),
      Unit::new("m", "miles", UnitCategory::Length, 1609.344),
    ]);
  }

  #[test]
  #[should_panic]
  fn test_catalog_panics_on_out_of_order_entries() {
    let catalog = standard_catalog();
    let mut entries: Vec<CatalogEntry> = UnitCategory::ALL.into_iter()
      .map(|category| CatalogEntry::new(category, catalog.units_for(category).to_vec()))
      .collect();
    entries.swap(0, 1);
    UnitCatalog::new(entries.try_into().unwrap());
  }
}
