//! Affine temperature scales

use metron_core::systems::si::{CELSIUS, FAHRENHEIT, KELVIN, SECOND};
use metron_core::Unit;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn test_zero_celsius_is_273_15_kelvin() {
    let k = (Decimal::ZERO * &*CELSIUS).convert_to(&KELVIN).unwrap();
    assert_eq!(k.value(), dec("273.15"));
}

#[test]
fn test_zero_kelvin_is_minus_273_15_celsius() {
    let c = (Decimal::ZERO * &*KELVIN).convert_to(&CELSIUS).unwrap();
    assert_eq!(c.value(), dec("-273.15"));
}

#[test]
fn test_fahrenheit_to_celsius_is_exact() {
    assert_eq!(FAHRENHEIT.convert_to(dec("33.8"), &CELSIUS).unwrap(), Decimal::ONE);
    assert_eq!(FAHRENHEIT.convert_to(dec("212"), &CELSIUS).unwrap(), dec("100"));
    assert_eq!(FAHRENHEIT.convert_to(dec("-40"), &CELSIUS).unwrap(), dec("-40"));
}

#[test]
fn test_celsius_to_fahrenheit() {
    let f = CELSIUS.convert_to(dec("-17.2222222"), &FAHRENHEIT).unwrap();
    assert_eq!(f.round_dp(6), dec("1.000000"));
    assert_eq!(CELSIUS.convert_to(dec("37"), &FAHRENHEIT).unwrap(), dec("98.6"));
}

#[test]
fn test_fahrenheit_to_kelvin() {
    assert_eq!(FAHRENHEIT.convert_to(dec("32"), &KELVIN).unwrap(), dec("273.15"));
}

#[test]
fn test_temperature_chain_shares_kelvin_base() {
    let axis = metron_core::Axis::ThermodynamicTemperature;
    assert_eq!(FAHRENHEIT.base_unit(axis), Some(KELVIN.id()));
    assert_eq!(CELSIUS.base_unit(axis), Some(KELVIN.id()));
}

/// Compound units convert axis by axis: the offset of an affine axis is
/// applied as if the temperature stood alone.
#[test]
fn test_affine_axis_inside_compound() {
    let celsius_per_second = CELSIUS.divide_by(&SECOND).unwrap();
    let kelvin_per_second = KELVIN.divide_by(&SECOND).unwrap();
    let rate = Unit::convert(Decimal::ONE, &celsius_per_second, &kelvin_per_second).unwrap();
    assert_eq!(rate, dec("274.15"));
}
