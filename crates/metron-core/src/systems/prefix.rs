//! SI prefixes (<https://en.wikipedia.org/wiki/Metric_prefix>)

use rust_decimal::Decimal;
use std::fmt;

use super::scaled;
use crate::types::Unit;

/// A decimal prefix such as `kilo` or `milli`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiPrefix {
    pub name: &'static str,
    pub symbol: &'static str,
    pub ten_exponent: i32,
}

pub const YOTTA: SiPrefix = SiPrefix::new("yotta", "Y", 24);
pub const ZETTA: SiPrefix = SiPrefix::new("zetta", "Z", 21);
pub const EXA: SiPrefix = SiPrefix::new("exa", "E", 18);
pub const PETA: SiPrefix = SiPrefix::new("peta", "P", 15);
pub const TERA: SiPrefix = SiPrefix::new("tera", "T", 12);
pub const GIGA: SiPrefix = SiPrefix::new("giga", "G", 9);
pub const MEGA: SiPrefix = SiPrefix::new("mega", "M", 6);
pub const KILO: SiPrefix = SiPrefix::new("kilo", "k", 3);
pub const HECTO: SiPrefix = SiPrefix::new("hecto", "h", 2);
pub const DECA: SiPrefix = SiPrefix::new("deca", "da", 1);
pub const DECI: SiPrefix = SiPrefix::new("deci", "d", -1);
pub const CENTI: SiPrefix = SiPrefix::new("centi", "c", -2);
pub const MILLI: SiPrefix = SiPrefix::new("milli", "m", -3);
pub const MICRO: SiPrefix = SiPrefix::new("micro", "μ", -6);
pub const NANO: SiPrefix = SiPrefix::new("nano", "n", -9);
pub const PICO: SiPrefix = SiPrefix::new("pico", "p", -12);
pub const FEMTO: SiPrefix = SiPrefix::new("femto", "f", -15);
pub const ATTO: SiPrefix = SiPrefix::new("atto", "a", -18);
pub const ZEPTO: SiPrefix = SiPrefix::new("zepto", "z", -21);
pub const YOCTO: SiPrefix = SiPrefix::new("yocto", "y", -24);

/// Every prefix, largest first
pub const PREFIXES: &[SiPrefix] = &[
    YOTTA, ZETTA, EXA, PETA, TERA, GIGA, MEGA, KILO, HECTO, DECA, DECI, CENTI, MILLI, MICRO,
    NANO, PICO, FEMTO, ATTO, ZEPTO, YOCTO,
];

impl SiPrefix {
    const fn new(name: &'static str, symbol: &'static str, ten_exponent: i32) -> Self {
        SiPrefix {
            name,
            symbol,
            ten_exponent,
        }
    }

    /// `10^ten_exponent`, computed exactly
    pub fn factor(&self) -> Decimal {
        let mut factor = Decimal::ONE;
        for _ in 0..self.ten_exponent.unsigned_abs() {
            if self.ten_exponent > 0 {
                factor *= Decimal::TEN;
            } else {
                factor /= Decimal::TEN;
            }
        }
        factor
    }

    /// The prefixed unit (`kilo` applied to `metre` is `kilometre`, `km`).
    /// Dimensionless units cannot be prefixed and give [`Unit::none`].
    pub fn apply(&self, unit: &Unit) -> Unit {
        if unit.is_none() {
            return Unit::none().clone();
        }
        scaled(
            format!("{}{}", self.name, unit.name()),
            format!("{}{}", self.symbol, unit.symbol()),
            unit,
            self.factor(),
        )
    }
}

impl fmt::Display for SiPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}
