//! Units of the International System
//!
//! We use the UK `metre` and `litre` spellings, as the SI brochure does.

use rust_decimal::Decimal;
use std::sync::LazyLock;

use super::prefix::{CENTI, DECI, HECTO, KILO, MICRO, MILLI};
use super::{catalog_unit, scaled};
use crate::types::{Conversion, Dimension, Unit};

// Length

pub static METRE: LazyLock<Unit> = LazyLock::new(|| Unit::base("metre", "m", Dimension::LENGTH));
pub static CENTIMETRE: LazyLock<Unit> = LazyLock::new(|| CENTI.apply(&METRE));
pub static MILLIMETRE: LazyLock<Unit> = LazyLock::new(|| MILLI.apply(&METRE));
pub static MICROMETRE: LazyLock<Unit> = LazyLock::new(|| MICRO.apply(&METRE));
pub static KILOMETRE: LazyLock<Unit> = LazyLock::new(|| KILO.apply(&METRE));

// Time

pub static SECOND: LazyLock<Unit> = LazyLock::new(|| Unit::base("second", "s", Dimension::TIME));
pub static MILLISECOND: LazyLock<Unit> = LazyLock::new(|| MILLI.apply(&SECOND));
pub static MINUTE: LazyLock<Unit> =
    LazyLock::new(|| scaled("minute", "min", &SECOND, Decimal::from(60)));
pub static HOUR: LazyLock<Unit> = LazyLock::new(|| scaled("hour", "h", &MINUTE, Decimal::from(60)));

// Mass: the gram is the base so that the kilogram comes out of the prefix

pub static GRAM: LazyLock<Unit> = LazyLock::new(|| Unit::base("gram", "g", Dimension::MASS));
pub static KILOGRAM: LazyLock<Unit> = LazyLock::new(|| KILO.apply(&GRAM));
pub static MILLIGRAM: LazyLock<Unit> = LazyLock::new(|| MILLI.apply(&GRAM));
pub static TONNE: LazyLock<Unit> =
    LazyLock::new(|| scaled("tonne", "t", &KILOGRAM, Decimal::from(1000)));

// Electric current

pub static AMPERE: LazyLock<Unit> =
    LazyLock::new(|| Unit::base("ampere", "A", Dimension::ELECTRIC_CURRENT));
pub static MILLIAMPERE: LazyLock<Unit> = LazyLock::new(|| MILLI.apply(&AMPERE));

// Temperature

const ABSOLUTE_ZERO_CELSIUS: Decimal = Decimal::from_parts(27315, 0, 0, false, 2);

pub static KELVIN: LazyLock<Unit> =
    LazyLock::new(|| Unit::base("kelvin", "K", Dimension::THERMODYNAMIC_TEMPERATURE));

/// `K = °C + 273.15`
pub static CELSIUS: LazyLock<Unit> = LazyLock::new(|| {
    Unit::derived(
        "celsius",
        "°C",
        &KELVIN,
        Conversion::offset(ABSOLUTE_ZERO_CELSIUS),
        Conversion::offset(-ABSOLUTE_ZERO_CELSIUS),
    )
});

/// `°C = (°F - 32) * 5 / 9`
pub static FAHRENHEIT: LazyLock<Unit> = LazyLock::new(|| {
    let five = Decimal::from(5);
    let nine = Decimal::from(9);
    let offset = Decimal::from(32);
    Unit::derived(
        "fahrenheit",
        "°F",
        &CELSIUS,
        Conversion::new(move |f| f.checked_sub(offset)?.checked_mul(five)?.checked_div(nine)),
        Conversion::new(move |c| c.checked_mul(nine)?.checked_div(five)?.checked_add(offset)),
    )
});

// Amount of substance, luminous intensity

pub static MOLE: LazyLock<Unit> =
    LazyLock::new(|| Unit::base("mole", "mol", Dimension::AMOUNT_OF_SUBSTANCE));
pub static CANDELA: LazyLock<Unit> =
    LazyLock::new(|| Unit::base("candela", "cd", Dimension::LUMINOUS_INTENSITY));

/// SI-derived area units
pub mod area {
    use super::*;

    pub static SQUARE_METRE: LazyLock<Unit> =
        LazyLock::new(|| Unit::alias("square metre", "m²", &METRE.pow(2)));
    pub static SQUARE_CENTIMETRE: LazyLock<Unit> =
        LazyLock::new(|| Unit::alias("square centimetre", "cm²", &CENTIMETRE.pow(2)));
    pub static SQUARE_MILLIMETRE: LazyLock<Unit> =
        LazyLock::new(|| Unit::alias("square millimetre", "mm²", &MILLIMETRE.pow(2)));
    pub static SQUARE_MICROMETRE: LazyLock<Unit> =
        LazyLock::new(|| Unit::alias("square micrometre", "μm²", &MICROMETRE.pow(2)));
    pub static SQUARE_KILOMETRE: LazyLock<Unit> =
        LazyLock::new(|| Unit::alias("square kilometre", "km²", &KILOMETRE.pow(2)));

    pub static ARE: LazyLock<Unit> =
        LazyLock::new(|| scaled("are", "a", &SQUARE_METRE, Decimal::ONE_HUNDRED));
    pub static HECTARE: LazyLock<Unit> =
        LazyLock::new(|| scaled("hectare", "ha", &SQUARE_METRE, Decimal::from(10_000)));
}

/// SI-derived volume units
pub mod volume {
    use super::*;

    pub static CUBIC_METRE: LazyLock<Unit> =
        LazyLock::new(|| Unit::alias("cubic metre", "m³", &METRE.pow(3)));
    pub static CUBIC_CENTIMETRE: LazyLock<Unit> =
        LazyLock::new(|| Unit::alias("cubic centimetre", "cm³", &CENTIMETRE.pow(3)));
    pub static CUBIC_MILLIMETRE: LazyLock<Unit> =
        LazyLock::new(|| Unit::alias("cubic millimetre", "mm³", &MILLIMETRE.pow(3)));
    pub static CUBIC_MICROMETRE: LazyLock<Unit> =
        LazyLock::new(|| Unit::alias("cubic micrometre", "μm³", &MICROMETRE.pow(3)));

    pub static LITRE: LazyLock<Unit> =
        LazyLock::new(|| Unit::alias("litre", "L", &DECI.apply(&METRE).pow(3)));

    // https://en.wikipedia.org/wiki/Litre#SI_prefixes_applied_to_the_litre
    pub static HECTOLITRE: LazyLock<Unit> = LazyLock::new(|| HECTO.apply(&LITRE));
    pub static DECILITRE: LazyLock<Unit> = LazyLock::new(|| DECI.apply(&LITRE));
    pub static CENTILITRE: LazyLock<Unit> = LazyLock::new(|| CENTI.apply(&LITRE));
    pub static MILLILITRE: LazyLock<Unit> = LazyLock::new(|| MILLI.apply(&LITRE));
    pub static MICROLITRE: LazyLock<Unit> = LazyLock::new(|| MICRO.apply(&LITRE));
}

/// SI-derived speed units
pub mod velocity {
    use super::*;

    pub static METRE_PER_SECOND: LazyLock<Unit> = LazyLock::new(|| {
        Unit::alias(
            "metre per second",
            "m/s",
            &catalog_unit(METRE.divide_by(&SECOND)),
        )
    });
    pub static KILOMETRE_PER_HOUR: LazyLock<Unit> = LazyLock::new(|| {
        Unit::alias(
            "kilometre per hour",
            "km/h",
            &catalog_unit(KILOMETRE.divide_by(&HOUR)),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_prefixed_names() {
        assert_eq!(KILOMETRE.name(), "kilometre");
        assert_eq!(MICROMETRE.symbol(), "μm");
        assert_eq!(KILOGRAM.symbol(), "kg");
        assert_eq!(volume::MILLILITRE.symbol(), "mL");
    }

    #[test]
    fn test_time() {
        assert_eq!(HOUR.convert_to(Decimal::ONE, &SECOND).unwrap(), dec("3600"));
        assert_eq!(MILLISECOND.convert_to(dec("1500"), &SECOND).unwrap(), dec("1.5"));
    }

    #[test]
    fn test_mass() {
        assert_eq!(TONNE.convert_to(Decimal::ONE, &GRAM).unwrap(), dec("1000000"));
        assert_eq!(MILLIGRAM.convert_to(dec("2500"), &GRAM).unwrap(), dec("2.5"));
    }

    #[test]
    fn test_area() {
        assert_eq!(area::ARE.convert_to(Decimal::ONE, &area::SQUARE_METRE).unwrap(), dec("100"));
        assert_eq!(
            area::SQUARE_KILOMETRE.convert_to(Decimal::ONE, &area::HECTARE).unwrap(),
            dec("100")
        );
        assert_eq!(
            area::SQUARE_CENTIMETRE.convert_to(dec("10000"), &area::SQUARE_METRE).unwrap(),
            Decimal::ONE
        );
    }

    #[test]
    fn test_volume() {
        assert_eq!(
            volume::LITRE.convert_to(Decimal::ONE, &volume::CUBIC_CENTIMETRE).unwrap(),
            dec("1000")
        );
        assert_eq!(
            volume::CUBIC_METRE.convert_to(Decimal::ONE, &volume::LITRE).unwrap(),
            dec("1000")
        );
        assert_eq!(
            volume::CENTILITRE.convert_to(dec("33"), &volume::MILLILITRE).unwrap(),
            dec("330")
        );
    }

    #[test]
    fn test_velocity() {
        assert_eq!(
            velocity::METRE_PER_SECOND
                .convert_to(dec("1.1"), &velocity::KILOMETRE_PER_HOUR)
                .unwrap(),
            dec("3.96")
        );
        assert_eq!(velocity::KILOMETRE_PER_HOUR.dimension().formula_string(), "L.T^-1");
    }
}
