//! Text rendering of units and quantities
//!
//! Unit format specifiers are `S` (symbol, the default) and `N` (name).
//! Quantity format specifiers are `number;unit`, where the number part is
//! empty (plain decimal) or `F<n>` (fixed, `n` decimal places). A specifier
//! with a single component is a unit specifier if it can be one, a number
//! specifier otherwise.

mod translation;

pub use translation::{TranslationError, TranslationProvider, TranslationTable};

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use tracing::warn;

use crate::error::FormatError;
use crate::types::{join_number_and_unit, Quantity, Unit};

/// How a unit is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitFormat {
    #[default]
    Symbol,
    Name,
}

impl FromStr for UnitFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "S" | "s" => Ok(UnitFormat::Symbol),
            "N" | "n" => Ok(UnitFormat::Name),
            _ => Err(FormatError::InvalidFormatSpecifier(s.to_string())),
        }
    }
}

/// How the number of a quantity is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// `Decimal`'s own representation
    #[default]
    General,
    /// Fixed number of decimal places, midpoints rounded away from zero
    Fixed(u32),
}

impl NumberFormat {
    pub fn format(&self, value: Decimal) -> String {
        match *self {
            NumberFormat::General => value.to_string(),
            NumberFormat::Fixed(places) => {
                let rounded =
                    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
                format!("{:.*}", places as usize, rounded)
            }
        }
    }
}

impl FromStr for NumberFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::InvalidFormatSpecifier(s.to_string());
        match s.chars().next() {
            None => Ok(NumberFormat::General),
            Some('G' | 'g') if s.len() == 1 => Ok(NumberFormat::General),
            Some('F' | 'f') => {
                let digits = &s[1..];
                if digits.is_empty() {
                    return Ok(NumberFormat::Fixed(2));
                }
                let places: u32 = digits.parse().map_err(|_| invalid())?;
                if places > 28 {
                    return Err(invalid());
                }
                Ok(NumberFormat::Fixed(places))
            }
            _ => Err(invalid()),
        }
    }
}

/// A parsed `number;unit` specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuantityFormat {
    pub number: NumberFormat,
    pub unit: UnitFormat,
}

impl FromStr for QuantityFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |_| FormatError::InvalidFormatSpecifier(s.to_string());
        let mut parts = s.split(';');
        let first = parts.next().unwrap_or_default();

        // Components after the second one are ignored
        match parts.next() {
            None => match first.parse::<UnitFormat>() {
                Ok(unit) if !first.is_empty() => Ok(QuantityFormat {
                    number: NumberFormat::General,
                    unit,
                }),
                _ => Ok(QuantityFormat {
                    number: first.parse().map_err(invalid)?,
                    unit: UnitFormat::Symbol,
                }),
            },
            Some(second) => Ok(QuantityFormat {
                number: first.parse().map_err(invalid)?,
                unit: second.parse().map_err(invalid)?,
            }),
        }
    }
}

/// Renders units and quantities for a locale
///
/// Everything a rendering depends on travels with the formatter, there is no
/// process-wide provider. Without a provider, units keep their own labels.
#[derive(Clone, Copy, Default)]
pub struct Formatter<'a> {
    provider: Option<&'a dyn TranslationProvider>,
    locale: &'a str,
    right_to_left: bool,
}

impl<'a> Formatter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, provider: &'a dyn TranslationProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_locale(mut self, locale: &'a str) -> Self {
        self.locale = locale;
        self
    }

    /// Put the unit before the number
    pub fn with_right_to_left(mut self, right_to_left: bool) -> Self {
        self.right_to_left = right_to_left;
        self
    }

    pub fn locale(&self) -> &str {
        self.locale
    }

    /// Translated name, or the unit's own name if translation fails
    pub fn unit_name(&self, unit: &Unit) -> String {
        match self.provider {
            None => unit.name().to_string(),
            Some(provider) => provider
                .translate_name(unit, self.locale)
                .unwrap_or_else(|error| {
                    warn!(unit = %unit.symbol(), locale = self.locale, %error, "falling back to unit name");
                    unit.name().to_string()
                }),
        }
    }

    /// Translated symbol, or the unit's own symbol if translation fails
    pub fn unit_symbol(&self, unit: &Unit) -> String {
        match self.provider {
            None => unit.symbol().to_string(),
            Some(provider) => provider
                .translate_symbol(unit, self.locale)
                .unwrap_or_else(|error| {
                    warn!(unit = %unit.symbol(), locale = self.locale, %error, "falling back to unit symbol");
                    unit.symbol().to_string()
                }),
        }
    }

    pub fn unit(&self, unit: &Unit, format: UnitFormat) -> String {
        match format {
            UnitFormat::Symbol => self.unit_symbol(unit),
            UnitFormat::Name => self.unit_name(unit),
        }
    }

    /// Render a unit with an `S`/`N` specifier
    pub fn format_unit(&self, unit: &Unit, specifier: &str) -> Result<String, FormatError> {
        Ok(self.unit(unit, specifier.parse()?))
    }

    pub fn quantity(&self, quantity: &Quantity, format: QuantityFormat) -> String {
        let number = format.number.format(quantity.value());
        let unit = self.unit(quantity.unit(), format.unit);
        if self.right_to_left && !unit.is_empty() {
            format!("{unit} {number}")
        } else {
            join_number_and_unit(&number, &unit)
        }
    }

    /// Render a quantity with a `number;unit` specifier
    pub fn format_quantity(
        &self,
        quantity: &Quantity,
        specifier: &str,
    ) -> Result<String, FormatError> {
        Ok(self.quantity(quantity, specifier.parse()?))
    }
}
