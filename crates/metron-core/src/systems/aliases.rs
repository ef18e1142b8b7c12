//! Common units under their short symbol
//!
//! `use metron_core::systems::aliases::*;` brings `m`, `km`, `kmph`, ... into
//! scope.

#![allow(non_upper_case_globals)]

pub use super::dimensionless::{
    DEGREE as deg, PARTS_PER_MILLION as ppm, RADIAN as rad, TURN as tr,
};
pub use super::si::area::{
    SQUARE_CENTIMETRE as sqcm, SQUARE_KILOMETRE as sqkm, SQUARE_METRE as sqm,
    SQUARE_MILLIMETRE as sqmm,
};
pub use super::si::velocity::{KILOMETRE_PER_HOUR as kmph, METRE_PER_SECOND as mps};
pub use super::si::volume::{
    CENTILITRE as cL, CUBIC_CENTIMETRE as cccm, CUBIC_METRE as ccm, CUBIC_MILLIMETRE as ccmm,
    LITRE as L, MILLILITRE as mL,
};
pub use super::si::{
    AMPERE as A, CELSIUS as C, CENTIMETRE as cm, FAHRENHEIT as F, GRAM as g, HOUR as h,
    KELVIN as K, KILOGRAM as kg, KILOMETRE as km, METRE as m, MICROMETRE as micron,
    MILLIAMPERE as mA, MILLIGRAM as mg, MILLIMETRE as mm, MILLISECOND as ms, MINUTE as mn,
    SECOND as s, TONNE as t,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::si;

    #[test]
    fn test_aliases_are_the_same_units() {
        assert_eq!(&*km, &*si::KILOMETRE);
        assert_eq!(kmph.symbol(), "km/h");
        assert_eq!(C.symbol(), "°C");
        assert_eq!(mn.name(), "minute");
    }
}
