
use clap::{Parser, Subcommand};
use itertools::Itertools;
use serde::Serialize;

use unitconv::session::ConverterSession;
use unitconv::units::catalog::UnitCatalog;
use unitconv::units::category::UnitCategory;
use unitconv::units::unit::Unit;

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(about = "Convert quantities between units of length, area, and angle", long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List the available unit categories
  Categories,

  /// List the units available in a category
  Units {
    /// Category name (length, area, or angle)
    category: String,
  },

  /// Convert a value between two units of a category
  #[command(allow_negative_numbers = true)]
  Convert {
    /// Category name (length, area, or angle)
    category: String,

    /// The value to convert, expressed in the source unit
    value: f64,

    /// Source unit symbol or name (default: the category's first unit)
    #[arg(short, long)]
    from: Option<String>,

    /// Target unit symbol or name (default: the category's last unit)
    #[arg(short, long)]
    to: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
  },
}

/// JSON payload printed by the `convert` subcommand.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConversionReport<'a> {
  category: UnitCategory,
  source_unit: &'a str,
  target_unit: &'a str,
  input_value: f64,
  value: f64,
  display: &'a str,
}

fn main() {
  let cli = Cli::parse();
  let result = match cli.command {
    Commands::Categories => list_categories(),
    Commands::Units { category } => list_units(&category),
    Commands::Convert { category, value, from, to, json } => {
      run_convert(&category, value, from.as_deref(), to.as_deref(), json)
    }
  };
  if let Err(e) = result {
    eprintln!("Error: {}", e);
    std::process::exit(1);
  }
}

fn list_categories() -> anyhow::Result<()> {
  let catalog = UnitCatalog::standard();
  println!("Categories ({}):", catalog.categories().len());
  for category in catalog.categories() {
    println!("  - {}", category);
  }
  Ok(())
}

fn list_units(category: &str) -> anyhow::Result<()> {
  let category: UnitCategory = category.parse()?;
  let catalog = UnitCatalog::standard();
  println!("Units for {}:", category);
  for unit in catalog.units_for(category) {
    println!("  - {} ({})", unit.symbol(), unit.name());
  }
  Ok(())
}

fn run_convert(
  category: &str,
  value: f64,
  from: Option<&str>,
  to: Option<&str>,
  json: bool,
) -> anyhow::Result<()> {
  let category: UnitCategory = category.parse()?;
  let mut session = ConverterSession::with_category(category);
  if let Some(from) = from {
    session.set_source_unit(resolve_unit(category, from)?);
  }
  if let Some(to) = to {
    session.set_target_unit(resolve_unit(category, to)?);
  }
  session.set_input_value(value);
  let result = session.result()?;
  if json {
    let report = ConversionReport {
      category,
      source_unit: session.source_unit().symbol(),
      target_unit: session.target_unit().symbol(),
      input_value: session.input_value(),
      value: result.value,
      display: &result.display,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    println!("{}", result.display);
  }
  Ok(())
}

fn resolve_unit(category: UnitCategory, text: &str) -> anyhow::Result<Unit> {
  let catalog = UnitCatalog::standard();
  match catalog.find_unit(category, text) {
    Some(unit) => Ok(unit.clone()),
    None => {
      let known = catalog.units_for(category).iter().map(Unit::symbol).join(", ");
      anyhow::bail!("No unit '{}' in category {}; known units are {}", text, category, known)
    }
  }
}
