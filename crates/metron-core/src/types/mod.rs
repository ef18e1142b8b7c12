//! Dimensions, units and quantities

mod conversion;
mod dimension;
mod formula;
mod quantity;
mod unit;

pub use conversion::{combine_pow, Conversion};
pub use dimension::Dimension;
pub use formula::{Axis, DimensionFormula, AXIS_COUNT};
pub use quantity::Quantity;
pub use unit::{Unit, UnitId};

pub(crate) use quantity::join_number_and_unit;
