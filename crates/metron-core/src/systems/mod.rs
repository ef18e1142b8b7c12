//! Ready-made unit catalogs
//!
//! Every unit is a lazily built, process-wide static. To add a unit, define
//! it in its system module and add an entry to [`CATALOG`]; lookup and the
//! command line pick it up from there.

pub mod aliases;
pub mod dimensionless;
pub mod imperial;
pub mod prefix;
pub mod si;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::error::UnitError;
use crate::types::{Conversion, Unit};

pub use prefix::SiPrefix;

/// The system a catalog unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum System {
    Si,
    Imperial,
    Dimensionless,
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            System::Si => write!(f, "SI"),
            System::Imperial => write!(f, "Imperial"),
            System::Dimensionless => write!(f, "Dimensionless"),
        }
    }
}

/// Catalog metadata for one unit
pub struct CatalogEntry {
    pub unit: &'static LazyLock<Unit>,
    pub system: System,
    /// Extra names accepted by [`lookup`]
    pub aliases: &'static [&'static str],
}

impl CatalogEntry {
    pub fn unit(&self) -> &'static Unit {
        self.unit
    }
}

const fn entry(
    unit: &'static LazyLock<Unit>,
    system: System,
    aliases: &'static [&'static str],
) -> CatalogEntry {
    CatalogEntry {
        unit,
        system,
        aliases,
    }
}

/// Every catalog unit, grouped by system
pub static CATALOG: &[CatalogEntry] = &[
    // SI length
    entry(&si::METRE, System::Si, &["meter"]),
    entry(&si::CENTIMETRE, System::Si, &["centimeter"]),
    entry(&si::MILLIMETRE, System::Si, &["millimeter"]),
    entry(&si::MICROMETRE, System::Si, &["micron", "um"]),
    entry(&si::KILOMETRE, System::Si, &["kilometer"]),
    // SI time
    entry(&si::SECOND, System::Si, &["sec"]),
    entry(&si::MILLISECOND, System::Si, &[]),
    entry(&si::MINUTE, System::Si, &["mn"]),
    entry(&si::HOUR, System::Si, &["hr"]),
    // SI mass
    entry(&si::GRAM, System::Si, &[]),
    entry(&si::KILOGRAM, System::Si, &[]),
    entry(&si::MILLIGRAM, System::Si, &[]),
    entry(&si::TONNE, System::Si, &[]),
    // SI electric current
    entry(&si::AMPERE, System::Si, &[]),
    entry(&si::MILLIAMPERE, System::Si, &[]),
    // SI temperature
    entry(&si::KELVIN, System::Si, &[]),
    entry(&si::CELSIUS, System::Si, &["C", "degC"]),
    entry(&si::FAHRENHEIT, System::Si, &["F", "degF"]),
    // SI amount of substance, luminous intensity
    entry(&si::MOLE, System::Si, &[]),
    entry(&si::CANDELA, System::Si, &[]),
    // SI area
    entry(&si::area::SQUARE_METRE, System::Si, &["sqm", "m^2"]),
    entry(&si::area::SQUARE_CENTIMETRE, System::Si, &["sqcm", "cm^2"]),
    entry(&si::area::SQUARE_MILLIMETRE, System::Si, &["sqmm", "mm^2"]),
    entry(&si::area::SQUARE_MICROMETRE, System::Si, &["um^2"]),
    entry(&si::area::SQUARE_KILOMETRE, System::Si, &["sqkm", "km^2"]),
    entry(&si::area::ARE, System::Si, &[]),
    entry(&si::area::HECTARE, System::Si, &[]),
    // SI volume
    entry(&si::volume::CUBIC_METRE, System::Si, &["ccm", "m^3"]),
    entry(&si::volume::CUBIC_CENTIMETRE, System::Si, &["cccm", "cm^3"]),
    entry(&si::volume::CUBIC_MILLIMETRE, System::Si, &["ccmm", "mm^3"]),
    entry(&si::volume::CUBIC_MICROMETRE, System::Si, &["um^3"]),
    entry(&si::volume::LITRE, System::Si, &["liter"]),
    entry(&si::volume::HECTOLITRE, System::Si, &[]),
    entry(&si::volume::DECILITRE, System::Si, &[]),
    entry(&si::volume::CENTILITRE, System::Si, &[]),
    entry(&si::volume::MILLILITRE, System::Si, &[]),
    entry(&si::volume::MICROLITRE, System::Si, &["uL"]),
    // SI velocity
    entry(&si::velocity::METRE_PER_SECOND, System::Si, &["mps"]),
    entry(&si::velocity::KILOMETRE_PER_HOUR, System::Si, &["kmph"]),
    // Imperial length
    entry(&imperial::THOU, System::Imperial, &[]),
    entry(&imperial::INCH, System::Imperial, &[]),
    entry(&imperial::FOOT, System::Imperial, &[]),
    entry(&imperial::YARD, System::Imperial, &[]),
    entry(&imperial::CHAIN, System::Imperial, &[]),
    entry(&imperial::FURLONG, System::Imperial, &[]),
    entry(&imperial::MILE, System::Imperial, &[]),
    entry(&imperial::LEAGUE, System::Imperial, &[]),
    entry(&imperial::LINK, System::Imperial, &[]),
    entry(&imperial::ROD, System::Imperial, &[]),
    entry(&imperial::FATHOM, System::Imperial, &[]),
    entry(&imperial::CABLE, System::Imperial, &[]),
    entry(&imperial::NAUTICAL_MILE, System::Imperial, &["nmi"]),
    // Imperial area
    entry(&imperial::PERCH, System::Imperial, &[]),
    entry(&imperial::ROOD, System::Imperial, &[]),
    entry(&imperial::ACRE, System::Imperial, &[]),
    // Imperial mass
    entry(&imperial::GRAIN, System::Imperial, &[]),
    entry(&imperial::POUND, System::Imperial, &[]),
    entry(&imperial::OUNCE, System::Imperial, &[]),
    entry(&imperial::DRACHM, System::Imperial, &[]),
    entry(&imperial::STONE, System::Imperial, &[]),
    entry(&imperial::QUARTER, System::Imperial, &[]),
    entry(&imperial::HUNDREDWEIGHT, System::Imperial, &[]),
    entry(&imperial::TON, System::Imperial, &[]),
    // Imperial volume
    entry(&imperial::FLUID_OUNCE, System::Imperial, &["floz"]),
    entry(&imperial::GILL, System::Imperial, &[]),
    entry(&imperial::PINT, System::Imperial, &[]),
    entry(&imperial::QUART, System::Imperial, &[]),
    entry(&imperial::GALLON, System::Imperial, &[]),
    entry(&imperial::CUBIC_INCH, System::Imperial, &["in^3"]),
    // Angles
    entry(&dimensionless::RADIAN, System::Dimensionless, &[]),
    entry(&dimensionless::DEGREE, System::Dimensionless, &["deg"]),
    entry(&dimensionless::TURN, System::Dimensionless, &[]),
    // Proportions
    entry(&dimensionless::PERCENT, System::Dimensionless, &[]),
    entry(&dimensionless::PERMILLE, System::Dimensionless, &[]),
    entry(&dimensionless::PARTS_PER_MILLION, System::Dimensionless, &[]),
];

/// Every catalog unit, in catalog order
pub fn all() -> impl Iterator<Item = &'static Unit> {
    CATALOG.iter().map(CatalogEntry::unit)
}

/// Find a catalog unit by symbol, then by name (case-insensitive), then by alias
pub fn lookup(text: &str) -> Option<&'static Unit> {
    let text = text.trim();
    find_entry(|entry| entry.unit.symbol() == text)
        .or_else(|| find_entry(|entry| entry.unit.name().eq_ignore_ascii_case(text)))
        .or_else(|| find_entry(|entry| entry.aliases.iter().any(|alias| *alias == text)))
        .map(CatalogEntry::unit)
}

/// The catalog entry of a unit
pub fn entry_of(unit: &Unit) -> Option<&'static CatalogEntry> {
    find_entry(|entry| **entry.unit == *unit)
}

fn find_entry(predicate: impl Fn(&CatalogEntry) -> bool) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| predicate(entry))
}

/// A unit worth `factor` times `based_on`; catalog factors are never zero
pub(crate) fn scaled(
    name: impl Into<String>,
    symbol: impl Into<String>,
    based_on: &Unit,
    factor: Decimal,
) -> Unit {
    Unit::derived(
        name,
        symbol,
        based_on,
        Conversion::scale(factor),
        Conversion::divide(factor),
    )
}

/// Unwrap a compound built from catalog units
pub(crate) fn catalog_unit(result: Result<Unit, UnitError>) -> Unit {
    result.expect("Catalog units must share their base units")
}
