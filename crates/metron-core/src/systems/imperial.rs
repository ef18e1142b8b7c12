//! Imperial units (<https://en.wikipedia.org/wiki/Imperial_units>)
//!
//! Every unit is defined against an SI unit or another imperial unit, so the
//! two systems convert into each other.

use rust_decimal::Decimal;
use std::sync::LazyLock;

use super::si::{volume::MILLILITRE, METRE, MILLIGRAM};
use super::{catalog_unit, scaled};
use crate::types::Unit;

// Length

pub static THOU: LazyLock<Unit> =
    LazyLock::new(|| scaled("thou", "th", &METRE, Decimal::new(254, 7)));
pub static INCH: LazyLock<Unit> = LazyLock::new(|| scaled("inch", "in", &THOU, Decimal::from(1000)));
pub static FOOT: LazyLock<Unit> = LazyLock::new(|| scaled("foot", "ft", &INCH, Decimal::from(12)));
pub static YARD: LazyLock<Unit> = LazyLock::new(|| scaled("yard", "yd", &FOOT, Decimal::from(3)));
pub static CHAIN: LazyLock<Unit> = LazyLock::new(|| scaled("chain", "ch", &YARD, Decimal::from(22)));
pub static FURLONG: LazyLock<Unit> =
    LazyLock::new(|| scaled("furlong", "fur", &CHAIN, Decimal::TEN));
pub static MILE: LazyLock<Unit> = LazyLock::new(|| scaled("mile", "mi", &FURLONG, Decimal::from(8)));
pub static LEAGUE: LazyLock<Unit> =
    LazyLock::new(|| scaled("league", "lea", &MILE, Decimal::from(3)));

// Gunter's survey units

pub static LINK: LazyLock<Unit> =
    LazyLock::new(|| scaled("link", "link", &INCH, Decimal::new(792, 2)));
pub static ROD: LazyLock<Unit> = LazyLock::new(|| scaled("rod", "rod", &LINK, Decimal::from(25)));

// Maritime

pub static FATHOM: LazyLock<Unit> =
    LazyLock::new(|| scaled("fathom", "ftm", &METRE, Decimal::new(1852, 3)));
pub static CABLE: LazyLock<Unit> =
    LazyLock::new(|| scaled("cable", "cable", &FATHOM, Decimal::ONE_HUNDRED));
pub static NAUTICAL_MILE: LazyLock<Unit> =
    LazyLock::new(|| scaled("nautical mile", "nautical mile", &CABLE, Decimal::TEN));

// Area

pub static PERCH: LazyLock<Unit> = LazyLock::new(|| Unit::alias("perch", "perch", &ROD.pow(2)));
pub static ROOD: LazyLock<Unit> =
    LazyLock::new(|| Unit::alias("rood", "rood", &catalog_unit(FURLONG.multiply_by(&ROD))));
pub static ACRE: LazyLock<Unit> =
    LazyLock::new(|| Unit::alias("acre", "acre", &catalog_unit(FURLONG.multiply_by(&CHAIN))));

// Mass (avoirdupois)

pub static GRAIN: LazyLock<Unit> =
    LazyLock::new(|| scaled("grain", "gr", &MILLIGRAM, Decimal::new(6_479_891, 5)));
pub static POUND: LazyLock<Unit> =
    LazyLock::new(|| scaled("pound", "lb", &GRAIN, Decimal::from(7000)));
pub static OUNCE: LazyLock<Unit> =
    LazyLock::new(|| scaled("ounce", "oz", &POUND, Decimal::new(625, 4)));
pub static DRACHM: LazyLock<Unit> =
    LazyLock::new(|| scaled("drachm", "dr", &OUNCE, Decimal::new(625, 4)));
pub static STONE: LazyLock<Unit> =
    LazyLock::new(|| scaled("stone", "st", &POUND, Decimal::from(14)));
pub static QUARTER: LazyLock<Unit> =
    LazyLock::new(|| scaled("quarter", "qr", &STONE, Decimal::TWO));
pub static HUNDREDWEIGHT: LazyLock<Unit> =
    LazyLock::new(|| scaled("hundredweight", "cwt", &QUARTER, Decimal::from(4)));
pub static TON: LazyLock<Unit> =
    LazyLock::new(|| scaled("ton", "ton", &HUNDREDWEIGHT, Decimal::from(20)));

// Volume

pub static FLUID_OUNCE: LazyLock<Unit> = LazyLock::new(|| {
    scaled("fluid ounce", "fl oz", &MILLILITRE, Decimal::new(284_130_625, 7))
});
pub static GILL: LazyLock<Unit> =
    LazyLock::new(|| scaled("gill", "gi", &FLUID_OUNCE, Decimal::from(5)));
pub static PINT: LazyLock<Unit> = LazyLock::new(|| scaled("pint", "pt", &GILL, Decimal::from(4)));
pub static QUART: LazyLock<Unit> = LazyLock::new(|| scaled("quart", "qt", &PINT, Decimal::TWO));
pub static GALLON: LazyLock<Unit> =
    LazyLock::new(|| scaled("gallon", "gal", &QUART, Decimal::from(4)));
pub static CUBIC_INCH: LazyLock<Unit> =
    LazyLock::new(|| Unit::alias("cubic inch", "in³", &INCH.pow(3)));
