//! Error types

use thiserror::Error;

use crate::types::Axis;

/// Error type for unit definition, algebra and conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("Units {from} and {to} are not compatible")]
    IncompatibleDimensions { from: String, to: String },

    #[error("Incompatible units: could not find a common base unit for dimension '{axis}'")]
    NoCommonBaseUnit { axis: Axis },

    #[error("Converting from {from} to {to} overflows a decimal")]
    Overflow { from: String, to: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result is out of decimal range")]
    OutOfRange,

    #[error("Unit {name} cannot be defined with a zero factor")]
    ZeroFactor { name: String },
}

/// Error type for format specifiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid format specifier: '{0}'")]
    InvalidFormatSpecifier(String),
}

/// Any error raised by this crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
