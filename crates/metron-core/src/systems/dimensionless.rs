//! Dimensionless units: angles and proportions

use rust_decimal::Decimal;
use std::sync::LazyLock;

use super::si::METRE;
use super::{catalog_unit, scaled};
use crate::types::Unit;

/// π with the 28 decimal places a `Decimal` holds
pub const PI: Decimal = Decimal::from_parts(1_102_470_953, 185_874_565, 1_703_060_790, false, 28);

/// 2π
pub const TAU: Decimal = Decimal::from_parts(2_204_941_906, 371_749_130, 3_406_121_580, false, 28);

/// π / 180, rounded to 28 decimal places
pub const RADIANS_PER_DEGREE: Decimal =
    Decimal::from_parts(3_465_959_605, 3_580_172_049, 9_461_448, false, 28);

// Angles

/// The SI defines the radian as `m/m`
pub static RADIAN: LazyLock<Unit> =
    LazyLock::new(|| Unit::alias("radian", "rad", &catalog_unit(METRE.divide_by(&METRE))));
pub static DEGREE: LazyLock<Unit> =
    LazyLock::new(|| scaled("degree", "°", &RADIAN, RADIANS_PER_DEGREE));
/// <https://en.wikipedia.org/wiki/Turn_(geometry)>
pub static TURN: LazyLock<Unit> = LazyLock::new(|| scaled("turn", "tr", &RADIAN, TAU));

// Proportions

/// Reference for proportions; an alias of the None unit so that proportions
/// convert to plain numbers.
pub(crate) static UNIT: LazyLock<Unit> = LazyLock::new(|| Unit::alias("unit", "u", Unit::none()));

pub static PERCENT: LazyLock<Unit> =
    LazyLock::new(|| scaled("percent", "%", &UNIT, Decimal::new(1, 2)));
pub static PERMILLE: LazyLock<Unit> =
    LazyLock::new(|| scaled("permille", "‰", &UNIT, Decimal::new(1, 3)));
pub static PARTS_PER_MILLION: LazyLock<Unit> =
    LazyLock::new(|| scaled("parts per million", "ppm", &UNIT, Decimal::new(1, 6)));
