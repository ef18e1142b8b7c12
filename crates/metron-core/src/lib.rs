//! metron-core: Dimensional analysis and unit conversion
//!
//! Units carry a dimension (exponents over the seven SI base dimensions) and,
//! per dimension axis, the base unit they are expressed against. Units built
//! from a common ancestor convert into each other, compound units come out of
//! unit algebra, and mixing unrelated definitions is reported instead of
//! silently approximated.
//!
//! # Example
//!
//! ```
//! use metron_core::systems::aliases::{kmph, mps};
//! use metron_core::systems::si::{CELSIUS, KELVIN};
//! use metron_core::Unit;
//! use rust_decimal::Decimal;
//!
//! // 1.1 m/s is 3.96 km/h
//! let speed = mps.convert_to(Decimal::new(11, 1), &kmph).unwrap();
//! assert_eq!(speed, Decimal::new(396, 2));
//!
//! // 0 °C is 273.15 K
//! let kelvin = Unit::convert(Decimal::ZERO, &CELSIUS, &KELVIN).unwrap();
//! assert_eq!(kelvin, Decimal::new(27315, 2));
//!
//! // Compound units
//! let distance = mps.multiply_by(&metron_core::systems::si::SECOND).unwrap();
//! assert_eq!(distance.dimension().formula_string(), "L");
//! ```

pub mod error;
pub mod format;
pub mod systems;
pub mod types;

pub use error::{Error, FormatError, UnitError};
pub use format::{Formatter, QuantityFormat, TranslationProvider, UnitFormat};
pub use types::{
    combine_pow, Axis, Conversion, Dimension, DimensionFormula, Quantity, Unit, UnitId,
};
