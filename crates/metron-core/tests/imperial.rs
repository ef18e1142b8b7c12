//! Imperial catalog against the SI

use metron_core::systems::imperial::*;
use metron_core::systems::si::{area, volume, GRAM, KILOGRAM, METRE};
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn test_length_definitions() {
    let cases = [
        (&THOU, "0.0000254"),
        (&INCH, "0.0254"),
        (&FOOT, "0.3048"),
        (&YARD, "0.9144"),
        (&CHAIN, "20.1168"),
        (&FURLONG, "201.168"),
        (&MILE, "1609.344"),
        (&LEAGUE, "4828.032"),
        (&LINK, "0.201168"),
        (&FATHOM, "1.852"),
        (&CABLE, "185.2"),
    ];
    for (unit, metres) in cases {
        assert_eq!(
            unit.convert_to(Decimal::ONE, &METRE).unwrap(),
            dec(metres),
            "1 {} in metres",
            unit.name()
        );
    }
}

#[test]
fn test_one_perch_is_25_29285264_square_metres() {
    let sqm = (Decimal::ONE * &*PERCH).convert_to(&area::SQUARE_METRE).unwrap();
    assert_eq!(sqm.value(), dec("25.29285264"));
}

#[test]
fn test_one_rood_is_10_117141056_ares() {
    let ares = (Decimal::ONE * &*ROOD).convert_to(&area::ARE).unwrap();
    assert_eq!(ares.value(), dec("10.117141056"));
}

#[test]
fn test_one_acre_is_0_40468564224_hectares() {
    let hectares = (Decimal::ONE * &*ACRE).convert_to(&area::HECTARE).unwrap();
    assert_eq!(hectares.value(), dec("0.40468564224"));
}

#[test]
fn test_acre_is_ten_square_chains() {
    let square_chain = CHAIN.pow(2);
    assert_eq!(ACRE.convert_to(Decimal::ONE, &square_chain).unwrap(), dec("10"));
}

#[test]
fn test_mass() {
    assert_eq!(OUNCE.convert_to(Decimal::ONE, &GRAM).unwrap(), dec("28.349523125"));
    assert_eq!(TON.convert_to(Decimal::ONE, &KILOGRAM).unwrap(), dec("1016.0469088"));
    assert_eq!(HUNDREDWEIGHT.convert_to(Decimal::ONE, &POUND).unwrap(), dec("112"));
}

#[test]
fn test_one_fluid_ounce_is_0_0284130625_litres() {
    let litres = (Decimal::ONE * &*FLUID_OUNCE).convert_to(&volume::LITRE).unwrap();
    assert_eq!(litres.value(), dec("0.0284130625"));
}

#[test]
fn test_one_fluid_ounce_in_cubic_inches() {
    let cubic_inches = FLUID_OUNCE.convert_to(Decimal::ONE, &CUBIC_INCH).unwrap();
    assert_eq!(cubic_inches.round_dp(14), dec("1.73387145494763"));
}

#[test]
fn test_gallon() {
    assert_eq!(GALLON.convert_to(Decimal::ONE, &volume::LITRE).unwrap(), dec("4.54609"));
    assert_eq!(GALLON.convert_to(Decimal::ONE, &PINT).unwrap(), dec("8"));
}

#[test]
fn test_imperial_is_not_a_separate_system() {
    assert!(YARD.is_compatible_with(&METRE));
    assert_eq!(
        YARD.base_unit(metron_core::Axis::Length),
        Some(METRE.id())
    );
}
