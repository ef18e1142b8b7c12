//! Conversion functions and their composition

use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;

/// A shareable `Decimal -> Decimal` conversion function
///
/// Conversions are fallible: `None` means the result does not fit in a
/// `Decimal` (overflow, or a division by zero).
#[derive(Clone)]
pub struct Conversion(Arc<dyn Fn(Decimal) -> Option<Decimal> + Send + Sync>);

impl Conversion {
    pub fn new(f: impl Fn(Decimal) -> Option<Decimal> + Send + Sync + 'static) -> Self {
        Conversion(Arc::new(f))
    }

    pub fn identity() -> Self {
        Conversion::new(Some)
    }

    /// Ignores its input
    pub fn constant(value: Decimal) -> Self {
        Conversion::new(move |_| Some(value))
    }

    /// Multiply by `factor`
    pub fn scale(factor: Decimal) -> Self {
        Conversion::new(move |x| x.checked_mul(factor))
    }

    /// Divide by `divisor`
    pub fn divide(divisor: Decimal) -> Self {
        Conversion::new(move |x| x.checked_div(divisor))
    }

    /// Add `offset`
    pub fn offset(offset: Decimal) -> Self {
        Conversion::new(move |x| x.checked_add(offset))
    }

    pub fn apply(&self, value: Decimal) -> Option<Decimal> {
        (self.0)(value)
    }

    /// `next(self(x))`
    pub fn then(&self, next: &Conversion) -> Conversion {
        let first = self.clone();
        let next = next.clone();
        Conversion::new(move |x| first.apply(x).and_then(|y| next.apply(y)))
    }
}

impl Default for Conversion {
    fn default() -> Self {
        Conversion::identity()
    }
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Conversion(..)")
    }
}

/// Compose two conversions and raise the composition to an integer power.
///
/// Missing functions count as identity. Powers are repeated application,
/// not numeric exponentiation:
///
/// * `pow == 0` gives the constant `1`
/// * `pow > 0` applies `f(g(x))` `pow` times
/// * `pow < 0` applies `g_inv(f_inv(x))` `|pow|` times
///
/// ```
/// use metron_core::{combine_pow, Conversion};
/// use rust_decimal::Decimal;
///
/// let double = Conversion::scale(Decimal::TWO);
/// let halve = Conversion::divide(Decimal::TWO);
/// let cubed = combine_pow(Some(&double), None, Some(&halve), None, 3);
/// assert_eq!(cubed.apply(Decimal::ONE), Some(Decimal::from(8)));
/// ```
pub fn combine_pow(
    f: Option<&Conversion>,
    g: Option<&Conversion>,
    f_inv: Option<&Conversion>,
    g_inv: Option<&Conversion>,
    pow: i32,
) -> Conversion {
    if pow == 0 {
        return Conversion::constant(Decimal::ONE);
    }

    let (outer, inner) = if pow > 0 { (f, g) } else { (g_inv, f_inv) };
    let step = match (inner, outer) {
        (Some(inner), Some(outer)) => inner.then(outer),
        (Some(only), None) | (None, Some(only)) => only.clone(),
        (None, None) => return Conversion::identity(),
    };

    let times = pow.unsigned_abs();
    if times == 1 {
        return step;
    }
    Conversion::new(move |x| (0..times).try_fold(x, |acc, _| step.apply(acc)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_pow_zero_is_constant_one() {
        let f = Conversion::scale(dec("3"));
        let c = combine_pow(Some(&f), None, None, None, 0);
        assert_eq!(c.apply(dec("42")), Some(Decimal::ONE));
        assert_eq!(c.apply(Decimal::ZERO), Some(Decimal::ONE));
    }

    #[test]
    fn test_all_absent_is_identity() {
        for pow in [-3, -1, 1, 2] {
            let c = combine_pow(None, None, None, None, pow);
            assert_eq!(c.apply(dec("12.5")), Some(dec("12.5")));
        }
    }

    #[test]
    fn test_composition_order() {
        let add_one = Conversion::offset(Decimal::ONE);
        let double = Conversion::scale(Decimal::TWO);

        // f(g(x)) = (2x) + 1
        let c = combine_pow(Some(&add_one), Some(&double), None, None, 1);
        assert_eq!(c.apply(dec("5")), Some(dec("11")));
    }

    #[test]
    fn test_repeated_application() {
        let times_ten = Conversion::scale(Decimal::TEN);
        let c = combine_pow(Some(&times_ten), None, None, None, 3);
        assert_eq!(c.apply(dec("2")), Some(dec("2000")));
    }

    #[test]
    fn test_negative_power_uses_inverses() {
        let sub_one = Conversion::offset(-Decimal::ONE);
        let halve = Conversion::divide(Decimal::TWO);

        // g_inv(f_inv(x)) = (x / 2) - 1
        let c = combine_pow(None, None, Some(&halve), Some(&sub_one), -1);
        assert_eq!(c.apply(dec("10")), Some(dec("4")));

        // applied twice: ((10 / 2) - 1) / 2 - 1
        let c = combine_pow(None, None, Some(&halve), Some(&sub_one), -2);
        assert_eq!(c.apply(dec("10")), Some(dec("1")));
    }

    #[test]
    fn test_overflow_is_none() {
        let huge = Conversion::scale(Decimal::MAX);
        assert_eq!(huge.apply(Decimal::TEN), None);
        assert_eq!(Conversion::divide(Decimal::ZERO).apply(Decimal::ONE), None);

        // A failing step fails the whole composition
        let c = combine_pow(Some(&huge), None, None, None, 2);
        assert_eq!(c.apply(Decimal::TWO), None);
        assert_eq!(huge.then(&Conversion::identity()).apply(Decimal::TWO), None);
    }

    #[test]
    fn test_then() {
        let a = Conversion::scale(dec("1000"));
        let b = Conversion::offset(dec("0.5"));
        assert_eq!(a.then(&b).apply(dec("2")), Some(dec("2000.5")));
        assert_eq!(b.then(&a).apply(dec("2")), Some(dec("2500")));
    }
}
