//! Units of measurement
//!
//! A unit records, for every axis of its dimension, the base unit that axis is
//! expressed against plus a pair of conversions to and from that base. Each
//! entry converts the unit's whole contribution on its axis, exponent
//! included, so `km²` stores a single `x * 1_000_000` on the `L` axis.
//! Conversion never needs the exponent again.

use rust_decimal::Decimal;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Mul;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;
use tracing::{debug, trace};

use super::conversion::{combine_pow, Conversion};
use super::dimension::{join_labels, Dimension};
use super::formula::{Axis, AXIS_COUNT};
use super::quantity::Quantity;
use crate::error::UnitError;

/// Stable identity of a unit, shared by its clones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(u64);

impl UnitId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        UnitId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct AxisEntry {
    base: UnitId,
    to_base: Conversion,
    from_base: Conversion,
}

impl AxisEntry {
    fn identity(base: UnitId) -> Self {
        AxisEntry {
            base,
            to_base: Conversion::identity(),
            from_base: Conversion::identity(),
        }
    }

    /// The entry of the reciprocal contribution
    fn inverted(&self) -> Self {
        AxisEntry {
            base: self.base,
            to_base: self.from_base.clone(),
            from_base: self.to_base.clone(),
        }
    }

    /// Both contributions applied one after the other (`self` first)
    fn combined_with(&self, other: &AxisEntry) -> Self {
        AxisEntry {
            base: self.base,
            to_base: combine_pow(
                Some(&other.to_base),
                Some(&self.to_base),
                Some(&other.from_base),
                Some(&self.from_base),
                1,
            ),
            from_base: combine_pow(
                Some(&other.to_base),
                Some(&self.to_base),
                Some(&other.from_base),
                Some(&self.from_base),
                -1,
            ),
        }
    }

    fn pow(&self, exponent: i32) -> Self {
        AxisEntry {
            base: self.base,
            to_base: combine_pow(Some(&self.to_base), None, Some(&self.from_base), None, exponent),
            from_base: combine_pow(Some(&self.from_base), None, Some(&self.to_base), None, exponent),
        }
    }
}

type Axes = [Option<AxisEntry>; AXIS_COUNT];

const Z: usize = Axis::None.index();

static NONE: LazyLock<Unit> = LazyLock::new(|| Unit::base("", "", Dimension::NONE));

#[derive(Debug, Clone, Copy)]
enum Operation {
    Multiply,
    Divide,
}

/// A unit of measurement
///
/// Units compare and hash by identity: two units defined separately are
/// different even when every field matches, while clones stay equal.
#[derive(Debug, Clone)]
pub struct Unit {
    id: UnitId,
    name: String,
    symbol: String,
    dimension: Dimension,
    axes: Axes,
}

impl Unit {
    /// The dimensionless unit
    pub fn none() -> &'static Unit {
        &NONE
    }

    /// Define a base unit: every axis of `dimension` is expressed against
    /// the new unit itself.
    pub fn base(name: impl Into<String>, symbol: impl Into<String>, dimension: Dimension) -> Unit {
        Unit::make(name.into(), symbol.into(), dimension, true)
    }

    /// Another name and symbol for `based_on`
    pub fn alias(name: impl Into<String>, symbol: impl Into<String>, based_on: &Unit) -> Unit {
        Unit::derived(
            name,
            symbol,
            based_on,
            Conversion::identity(),
            Conversion::identity(),
        )
    }

    /// A unit worth `factor` times `based_on`
    pub fn scaled(
        name: impl Into<String>,
        symbol: impl Into<String>,
        based_on: &Unit,
        factor: Decimal,
    ) -> Result<Unit, UnitError> {
        let name = name.into();
        if factor.is_zero() {
            return Err(UnitError::ZeroFactor { name });
        }
        Ok(Unit::derived(
            name,
            symbol,
            based_on,
            Conversion::scale(factor),
            Conversion::divide(factor),
        ))
    }

    /// A unit with the dimension of `based_on`, converted into it by
    /// `to_based_on` and back by `from_based_on`.
    ///
    /// Affine units (temperatures) are defined this way. The conversions are
    /// chained with those of `based_on`, so a unit always converts straight to
    /// its canonical base.
    pub fn derived(
        name: impl Into<String>,
        symbol: impl Into<String>,
        based_on: &Unit,
        to_based_on: Conversion,
        from_based_on: Conversion,
    ) -> Unit {
        let mut unit = Unit::make(name.into(), symbol.into(), based_on.dimension.clone(), false);
        unit.axes = based_on.axes.clone();

        // The own conversion lands on one axis only; every other axis keeps the
        // contribution of `based_on` untouched.
        let leading = unit.axes.iter().position(Option::is_some).unwrap_or(Z);
        let entry = match unit.axes[leading].take() {
            Some(entry) => entry,
            None => AxisEntry::identity(Unit::none().id),
        };
        unit.axes[leading] = Some(AxisEntry {
            base: entry.base,
            to_base: to_based_on.then(&entry.to_base),
            from_base: entry.from_base.then(&from_based_on),
        });
        unit
    }

    fn make(name: String, symbol: String, dimension: Dimension, is_base_unit: bool) -> Unit {
        trace!(
            name = %name,
            symbol = %symbol,
            formula = %dimension.formula_string(),
            is_base_unit,
            "defining unit"
        );

        let id = UnitId::next();
        let mut axes: Axes = Default::default();
        if is_base_unit {
            for (slot, (_, exponent)) in axes.iter_mut().zip(dimension.formula().iter()) {
                if exponent != 0 {
                    *slot = Some(AxisEntry::identity(id));
                }
            }
        }

        Unit {
            id,
            name,
            symbol,
            dimension,
            axes,
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the unit, e.g. for localisation. The symbol never changes.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// True for dimensionless units
    pub fn is_none(&self) -> bool {
        self.dimension.is_none()
    }

    /// Id of the base unit the given axis is expressed against
    ///
    /// Units with no explicit `Z` entry share the one of [`Unit::none`].
    pub fn base_unit(&self, axis: Axis) -> Option<UnitId> {
        self.entry(axis).map(|entry| entry.base)
    }

    fn entry(&self, axis: Axis) -> Option<&AxisEntry> {
        let index = axis.index();
        match &self.axes[index] {
            Some(entry) => Some(entry),
            None if index == Z => Unit::none().axes[Z].as_ref(),
            None => None,
        }
    }

    /// This unit raised to `exponent`
    pub fn pow(&self, exponent: i32) -> Unit {
        let (name, symbol) = if self.is_none() {
            (String::new(), String::new())
        } else {
            (
                format!("{} ^ {}", self.name, exponent),
                format!("{}^{}", self.symbol, exponent),
            )
        };

        let mut unit = Unit::make(name, symbol, self.dimension.pow(exponent), false);
        if exponent == 0 {
            unit.axes[Z] = Some(AxisEntry::identity(Unit::none().id));
        } else {
            for (slot, entry) in unit.axes.iter_mut().zip(&self.axes) {
                *slot = entry.as_ref().map(|entry| entry.pow(exponent));
            }
        }
        unit
    }

    /// Product of two units
    pub fn multiply_by(&self, other: &Unit) -> Result<Unit, UnitError> {
        Unit::combine(self, other, Operation::Multiply)
    }

    /// Quotient of two units
    pub fn divide_by(&self, other: &Unit) -> Result<Unit, UnitError> {
        Unit::combine(self, other, Operation::Divide)
    }

    fn combine(left: &Unit, right: &Unit, operation: Operation) -> Result<Unit, UnitError> {
        let (name_separator, symbol_separator, dimension) = match operation {
            Operation::Multiply => (" * ", ".", left.dimension.multiply_by(&right.dimension)),
            Operation::Divide => (" / ", "/", left.dimension.divide_by(&right.dimension)),
        };
        let name = join_labels(
            &left.name,
            left.is_none(),
            &right.name,
            right.is_none(),
            name_separator,
        );
        let symbol = join_labels(
            &left.symbol,
            left.is_none(),
            &right.symbol,
            right.is_none(),
            symbol_separator,
        );

        let mut unit = Unit::make(name, symbol, dimension, false);
        unit.axes = Unit::combine_axes(left, right, operation, &unit.dimension)?;
        Ok(unit)
    }

    fn combine_axes(
        left: &Unit,
        right: &Unit,
        operation: Operation,
        target: &Dimension,
    ) -> Result<Axes, UnitError> {
        let mut axes: Axes = Default::default();
        // Dimensionless results must stay convertible to Unit::none()
        if target.is_none() {
            axes[Z] = Some(AxisEntry::identity(Unit::none().id));
        }

        let mut cancelled: Option<AxisEntry> = None;
        for axis in Axis::ALL {
            let index = axis.index();
            let right_entry = right.axes[index].as_ref().map(|entry| match operation {
                Operation::Multiply => entry.clone(),
                Operation::Divide => entry.inverted(),
            });

            let entry = match (&left.axes[index], right_entry) {
                (Some(l), Some(r)) => {
                    if l.base != r.base {
                        return Err(UnitError::NoCommonBaseUnit { axis });
                    }
                    let combined = l.combined_with(&r);
                    if axis.is_physical() && target.formula().get(axis) == 0 {
                        // km / m: the axis vanishes but its factor must survive
                        cancelled = Some(match cancelled {
                            Some(previous) => previous.combined_with(&combined),
                            None => combined,
                        });
                        continue;
                    }
                    combined
                }
                (Some(l), None) => l.clone(),
                (None, Some(r)) => r,
                (None, None) => continue,
            };
            axes[index] = Some(entry);
        }

        if let Some(cancelled) = cancelled {
            let z = match axes[Z].take() {
                Some(z) => z,
                None => AxisEntry::identity(Unit::none().id),
            };
            axes[Z] = Some(z.combined_with(&cancelled));
        }

        trace!(
            left = %left.symbol,
            right = %right.symbol,
            ?operation,
            formula = %target.formula_string(),
            "combined units"
        );
        Ok(axes)
    }

    /// True when both units measure the same dimension
    pub fn are_compatible(left: &Unit, right: &Unit) -> bool {
        left.dimension == right.dimension
    }

    pub fn is_compatible_with(&self, other: &Unit) -> bool {
        Unit::are_compatible(self, other)
    }

    /// Convert `value` expressed in `from` into `to`
    ///
    /// Axes are converted one after the other, so an affine axis inside a
    /// compound unit (`°C/s`) shifts by its offset like a lone temperature.
    pub fn convert(value: Decimal, from: &Unit, to: &Unit) -> Result<Decimal, UnitError> {
        if !Unit::are_compatible(from, to) {
            return Err(UnitError::IncompatibleDimensions {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let mut pairs = Vec::with_capacity(AXIS_COUNT);
        for axis in Axis::ALL {
            match (from.entry(axis), to.entry(axis)) {
                (Some(f), Some(t)) if f.base == t.base => pairs.push((f, t)),
                (None, None) => {}
                _ => return Err(UnitError::NoCommonBaseUnit { axis }),
            }
        }

        let result = pairs
            .into_iter()
            .try_fold(value, |acc, (f, t)| {
                f.to_base.apply(acc).and_then(|base| t.from_base.apply(base))
            })
            .ok_or_else(|| UnitError::Overflow {
                from: from.to_string(),
                to: to.to_string(),
            })?;

        debug!(%value, from = %from.symbol, to = %to.symbol, %result, "converted");
        Ok(result)
    }

    /// Convert `value` expressed in this unit into `other`
    pub fn convert_to(&self, value: Decimal, other: &Unit) -> Result<Decimal, UnitError> {
        Unit::convert(value, self, other)
    }

    /// A quantity of `value` of this unit
    pub fn quantity(&self, value: Decimal) -> Quantity {
        Quantity::new(value, self.clone())
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::none().clone()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

impl Mul<&Unit> for Decimal {
    type Output = Quantity;

    fn mul(self, unit: &Unit) -> Quantity {
        unit.quantity(self)
    }
}

impl Mul<Decimal> for &Unit {
    type Output = Quantity;

    fn mul(self, value: Decimal) -> Quantity {
        self.quantity(value)
    }
}
