//! Quantities: a value paired with its unit

use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::unit::Unit;
use crate::error::UnitError;

/// A decimal value expressed in a unit
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    value: Decimal,
    unit: Unit,
}

impl Quantity {
    pub fn new(value: Decimal, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// The same quantity expressed in `target`
    pub fn convert_to(&self, target: &Unit) -> Result<Quantity, UnitError> {
        let value = Unit::convert(self.value, &self.unit, target)?;
        Ok(Quantity::new(value, target.clone()))
    }

    /// Sum in the unit of `self`; `other` is converted first
    pub fn try_add(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        let rhs = other.convert_to(&self.unit)?;
        let value = self.value.checked_add(rhs.value).ok_or(UnitError::OutOfRange)?;
        Ok(Quantity::new(value, self.unit.clone()))
    }

    /// Difference in the unit of `self`; `other` is converted first
    pub fn try_sub(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        let rhs = other.convert_to(&self.unit)?;
        let value = self.value.checked_sub(rhs.value).ok_or(UnitError::OutOfRange)?;
        Ok(Quantity::new(value, self.unit.clone()))
    }

    /// Product of values, in the compound unit
    pub fn try_mul(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        let unit = self.unit.multiply_by(&other.unit)?;
        let value = self.value.checked_mul(other.value).ok_or(UnitError::OutOfRange)?;
        Ok(Quantity::new(value, unit))
    }

    /// Quotient of values, in the compound unit
    pub fn try_div(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        if other.value.is_zero() {
            return Err(UnitError::DivisionByZero);
        }
        let unit = self.unit.divide_by(&other.unit)?;
        let value = self.value.checked_div(other.value).ok_or(UnitError::OutOfRange)?;
        Ok(Quantity::new(value, unit))
    }
}

/// Render `number` and `unit` symbol the way quantities print
pub(crate) fn join_number_and_unit(number: &str, unit: &str) -> String {
    if unit.is_empty() {
        number.to_string()
    } else if unit.starts_with('°') {
        format!("{number}{unit}")
    } else {
        format!("{number} {unit}")
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_number_and_unit(
            &self.value.to_string(),
            self.unit.symbol(),
        ))
    }
}

impl Add<Decimal> for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Decimal) -> Quantity {
        Quantity::new(self.value + rhs, self.unit)
    }
}

impl Add<Quantity> for Decimal {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        Quantity::new(self + rhs.value, rhs.unit)
    }
}

impl Sub<Decimal> for Quantity {
    type Output = Quantity;

    fn sub(self, rhs: Decimal) -> Quantity {
        Quantity::new(self.value - rhs, self.unit)
    }
}

impl Sub<Quantity> for Decimal {
    type Output = Quantity;

    fn sub(self, rhs: Quantity) -> Quantity {
        Quantity::new(self - rhs.value, rhs.unit)
    }
}

impl Mul<Decimal> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Decimal) -> Quantity {
        Quantity::new(self.value * rhs, self.unit)
    }
}

impl Mul<Quantity> for Decimal {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity::new(self * rhs.value, rhs.unit)
    }
}

/// Panics on a zero divisor, like `Decimal` division; see [`Quantity::try_div`]
impl Div<Decimal> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: Decimal) -> Quantity {
        Quantity::new(self.value / rhs, self.unit)
    }
}

/// Panics when the quantity's value is zero, like `Decimal` division
impl Div<Quantity> for Decimal {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::new(self / rhs.value, rhs.unit)
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity::new(-self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimension;

    #[test]
    fn test_scalar_ops_keep_unit() {
        let m = Unit::base("metre", "m", Dimension::LENGTH);
        let q = Decimal::from(42) * &m;

        assert_eq!((q.clone() + Decimal::TEN).value(), Decimal::from(52));
        assert_eq!((Decimal::TEN - q.clone()).value(), Decimal::from(-32));
        assert_eq!((q.clone() / Decimal::TEN).value(), Decimal::new(42, 1));
        assert_eq!((-q.clone()).value(), Decimal::from(-42));
        assert_eq!((q * Decimal::TWO).unit(), &m);
    }

    #[test]
    fn test_display() {
        let m = Unit::base("metre", "m", Dimension::LENGTH);
        let c = Unit::base("celsius", "°C", Dimension::THERMODYNAMIC_TEMPERATURE);
        assert_eq!(m.quantity(Decimal::new(15, 1)).to_string(), "1.5 m");
        assert_eq!(c.quantity(Decimal::from(20)).to_string(), "20°C");
        assert_eq!(Unit::none().quantity(Decimal::ONE).to_string(), "1");
    }
}
