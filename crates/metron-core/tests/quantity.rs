//! Quantities and their arithmetic

use metron_core::systems::si::{KILOMETRE, METRE, SECOND};
use metron_core::{Quantity, UnitError};
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn test_scalar_arithmetic() {
    let distance = Decimal::from(42) * &*METRE;

    assert_eq!((distance.clone() + Decimal::TEN).value(), dec("52"));
    assert_eq!((Decimal::TEN + distance.clone()).value(), dec("52"));
    assert_eq!((Decimal::TEN - distance.clone()).value(), dec("-32"));
    assert_eq!((distance.clone() / Decimal::TEN).value(), dec("4.2"));
    assert_eq!((Decimal::TWO * distance.clone()).unit(), &*METRE);
}

#[test]
fn test_sum_keeps_left_unit() {
    let one_metre = METRE.quantity(Decimal::ONE);
    let two_km = KILOMETRE.quantity(Decimal::TWO);

    let sum = one_metre.try_add(&two_km).unwrap();
    assert_eq!(sum.value(), dec("2001"));
    assert_eq!(sum.unit(), &*METRE);

    let difference = two_km.try_sub(&one_metre).unwrap();
    assert_eq!(difference.value(), dec("1.999"));
    assert_eq!(difference.unit(), &*KILOMETRE);
}

#[test]
fn test_sum_of_incompatible_quantities_fails() {
    let length = METRE.quantity(Decimal::ONE);
    let time = SECOND.quantity(Decimal::ONE);
    assert!(matches!(
        length.try_add(&time),
        Err(UnitError::IncompatibleDimensions { .. })
    ));
}

#[test]
fn test_product_and_quotient() {
    let length = METRE.quantity(dec("100"));
    let time = SECOND.quantity(dec("8"));

    let speed = length.try_div(&time).unwrap();
    assert_eq!(speed.value(), dec("12.5"));
    assert_eq!(speed.unit().symbol(), "m/s");

    let area = length.try_mul(&length).unwrap();
    assert_eq!(area.value(), dec("10000"));
    assert_eq!(area.unit().dimension().formula_string(), "L^2");
}

#[test]
fn test_convert_quantity() {
    let q = Quantity::new(dec("1500"), METRE.clone());
    let km = q.convert_to(&KILOMETRE).unwrap();
    assert_eq!(km.value(), dec("1.5"));
    assert_eq!(km.unit().symbol(), "km");
}

#[test]
fn test_display() {
    let q = dec("42.24") * &*METRE;
    assert_eq!(q.to_string(), "42.24 m");
}

#[test]
fn test_division_by_zero_quantity_is_an_error() {
    let length = METRE.quantity(Decimal::ONE);
    let time = SECOND.quantity(Decimal::ZERO);
    assert_eq!(length.try_div(&time), Err(UnitError::DivisionByZero));
}

#[test]
fn test_arithmetic_out_of_range_is_an_error() {
    let huge = METRE.quantity(Decimal::MAX);
    assert_eq!(huge.try_add(&huge), Err(UnitError::OutOfRange));
    assert_eq!(huge.try_mul(&huge), Err(UnitError::OutOfRange));
    // The right operand is converted before adding
    assert!(matches!(
        huge.try_add(&KILOMETRE.quantity(Decimal::MAX)),
        Err(UnitError::Overflow { .. })
    ));
}
