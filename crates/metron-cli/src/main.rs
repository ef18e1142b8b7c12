//! metron - Unit conversion from the command line
//!
//! Usage:
//!   metron convert 1.1 m/s km/h          # 3.96 km/h
//!   metron convert 100 degF degC -f F2   # 37.78°C
//!   metron list --dimension L^2          # Catalog units of area
//!   metron describe acre                 # What a unit is made of

use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use metron_core::systems::{self, CatalogEntry};
use metron_core::{Formatter, Quantity, QuantityFormat, Unit};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "metron")]
#[command(about = "Convert quantities between units", long_about = None)]
struct Args {
    /// Log conversion steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a value from one unit to another
    Convert {
        value: String,
        from: String,
        to: String,

        /// Quantity format specifier, e.g. `F2` or `F3;N`
        #[arg(short, long, default_value = "")]
        format: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List catalog units
    List {
        /// Only units of this dimension formula, e.g. `L^2` or `L.T^-1`
        #[arg(short, long, value_name = "FORMULA")]
        dimension: Option<String>,
    },
    /// Show what a unit is made of
    Describe { unit: String },
}

#[derive(Serialize, Debug)]
struct Report {
    value: String,
    from: String,
    to: String,
    result: String,
    formatted: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Convert {
            value,
            from,
            to,
            format,
            json,
        } => convert(&value, &from, &to, &format, json),
        Command::List { dimension } => {
            list(dimension.as_deref());
            Ok(())
        }
        Command::Describe { unit } => describe(&unit),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn find_unit(text: &str) -> Result<&'static Unit> {
    systems::lookup(text).ok_or_else(|| anyhow!("Unknown unit '{}'", text))
}

fn convert(value: &str, from: &str, to: &str, format: &str, json: bool) -> Result<()> {
    let value =
        Decimal::from_str(value.trim()).with_context(|| format!("Invalid number '{}'", value))?;
    let from = find_unit(from)?;
    let to = find_unit(to)?;
    let format = QuantityFormat::from_str(format)?;

    let result = Quantity::new(value, from.clone())
        .convert_to(to)
        .with_context(|| format!("Cannot convert {} to {}", from.name(), to.name()))?;
    debug!(%value, from = %from, to = %to, result = %result.value(), "converted");

    let formatted = Formatter::new().quantity(&result, format);
    if json {
        let report = Report {
            value: value.to_string(),
            from: from.symbol().to_string(),
            to: to.symbol().to_string(),
            result: result.value().to_string(),
            formatted,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", formatted);
    }
    Ok(())
}

fn list(dimension: Option<&str>) {
    for entry in systems::CATALOG {
        let unit = entry.unit();
        let formula = unit.dimension().formula_string();
        if dimension.is_some_and(|wanted| wanted != formula) {
            continue;
        }
        println!("{:<8} {:<20} {}", unit.symbol(), unit.name(), formula);
    }
}

fn describe(text: &str) -> Result<()> {
    let unit = find_unit(text)?;
    let entry = systems::entry_of(unit);

    println!("name:      {}", unit.name());
    println!("symbol:    {}", unit.symbol());
    println!("dimension: {}", describe_dimension(unit));
    println!("formula:   {}", unit.dimension().formula_string());
    if let Some(CatalogEntry {
        system, aliases, ..
    }) = entry
    {
        println!("system:    {}", system);
        if !aliases.is_empty() {
            println!("aliases:   {}", aliases.join(", "));
        }
    }
    Ok(())
}

fn describe_dimension(unit: &Unit) -> String {
    if unit.is_none() {
        "none".to_string()
    } else {
        unit.dimension().to_string()
    }
}
