//! Dimension formulas
//!
//! A formula stores one integer exponent per base dimension, always in this order:
//!
//! * **L** (Length)
//! * **M** (Mass)
//! * **T** (Time)
//! * **I** (Electric Current)
//! * **Θ** (Thermodynamic Temperature)
//! * **N** (Amount of Substance)
//! * **J** (Luminous Intensity)
//! * **Z** (not an SI dimension, tags dimensionless quantities)
//!
//! Velocity is `[1, 0, -1, 0, 0, 0, 0, 0]` (`L.T^-1`), the None formula is
//! `[0, 0, 0, 0, 0, 0, 0, 1]`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Index, Sub};

/// Number of axes in a formula: the 7 SI base dimensions plus `Z`
pub const AXIS_COUNT: usize = 8;

/// One axis of a dimension formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    Length,
    Mass,
    Time,
    ElectricCurrent,
    ThermodynamicTemperature,
    AmountOfSubstance,
    LuminousIntensity,
    /// Bookkeeping axis for dimensionless quantities
    None,
}

impl Axis {
    /// All axes, in formula order
    pub const ALL: [Axis; AXIS_COUNT] = [
        Axis::Length,
        Axis::Mass,
        Axis::Time,
        Axis::ElectricCurrent,
        Axis::ThermodynamicTemperature,
        Axis::AmountOfSubstance,
        Axis::LuminousIntensity,
        Axis::None,
    ];

    /// The physical axes (everything but `Z`)
    pub const PHYSICAL: [Axis; AXIS_COUNT - 1] = [
        Axis::Length,
        Axis::Mass,
        Axis::Time,
        Axis::ElectricCurrent,
        Axis::ThermodynamicTemperature,
        Axis::AmountOfSubstance,
        Axis::LuminousIntensity,
    ];

    /// Position of this axis in a formula
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol used when printing formulas
    pub const fn symbol(self) -> &'static str {
        match self {
            Axis::Length => "L",
            Axis::Mass => "M",
            Axis::Time => "T",
            Axis::ElectricCurrent => "I",
            Axis::ThermodynamicTemperature => "Θ",
            Axis::AmountOfSubstance => "N",
            Axis::LuminousIntensity => "J",
            Axis::None => "Z",
        }
    }

    pub const fn is_physical(self) -> bool {
        !matches!(self, Axis::None)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Exponents of a dimension over the base axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionFormula {
    exponents: [i32; AXIS_COUNT],
}

impl DimensionFormula {
    pub const LENGTH: DimensionFormula = DimensionFormula::single(Axis::Length);
    pub const MASS: DimensionFormula = DimensionFormula::single(Axis::Mass);
    pub const TIME: DimensionFormula = DimensionFormula::single(Axis::Time);
    pub const ELECTRIC_CURRENT: DimensionFormula = DimensionFormula::single(Axis::ElectricCurrent);
    pub const THERMODYNAMIC_TEMPERATURE: DimensionFormula =
        DimensionFormula::single(Axis::ThermodynamicTemperature);
    pub const AMOUNT_OF_SUBSTANCE: DimensionFormula =
        DimensionFormula::single(Axis::AmountOfSubstance);
    pub const LUMINOUS_INTENSITY: DimensionFormula =
        DimensionFormula::single(Axis::LuminousIntensity);

    /// The canonical None formula (`Z = 1`, everything else 0)
    pub const NONE: DimensionFormula = DimensionFormula::single(Axis::None);

    /// Create a formula from raw exponents, in [`Axis::ALL`] order
    pub const fn new(exponents: [i32; AXIS_COUNT]) -> Self {
        DimensionFormula { exponents }
    }

    const fn single(axis: Axis) -> Self {
        let mut exponents = [0; AXIS_COUNT];
        exponents[axis.index()] = 1;
        DimensionFormula { exponents }
    }

    /// Exponent of the given axis
    pub fn get(&self, axis: Axis) -> i32 {
        self.exponents[axis.index()]
    }

    pub fn exponents(&self) -> &[i32; AXIS_COUNT] {
        &self.exponents
    }

    /// Iterate over `(axis, exponent)` pairs, zero exponents included
    pub fn iter(&self) -> impl Iterator<Item = (Axis, i32)> + '_ {
        Axis::ALL.iter().map(|&axis| (axis, self.get(axis)))
    }

    /// True when every exponent, `Z` included, is zero
    pub fn is_zero(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// True when the physical axes are all zero and the `Z` axis is set
    pub fn is_none(&self) -> bool {
        self.is_dimensionless() && self.get(Axis::None) != 0
    }

    /// True when all physical axes are zero, whatever `Z` holds
    pub fn is_dimensionless(&self) -> bool {
        Axis::PHYSICAL.iter().all(|&axis| self.get(axis) == 0)
    }

    /// Compare physical exponents only; `Z` is bookkeeping
    pub fn same_dimension(&self, other: &DimensionFormula) -> bool {
        Axis::PHYSICAL
            .iter()
            .all(|&axis| self.get(axis) == other.get(axis))
    }

    /// Multiply every exponent by `exponent`
    pub fn pow(&self, exponent: i32) -> DimensionFormula {
        let mut exponents = self.exponents;
        for e in exponents.iter_mut() {
            *e *= exponent;
        }
        DimensionFormula { exponents }
    }

    /// Replace an all-zero formula by the canonical None formula
    pub fn normalized(self) -> DimensionFormula {
        if self.is_zero() {
            DimensionFormula::NONE
        } else {
            self
        }
    }

    /// Human readable formula, e.g. `L.T^-1`
    ///
    /// The `Z` axis never shows up next to physical axes; a formula holding
    /// nothing but `Z` renders as the single token `Z`.
    pub fn formula_string(&self) -> String {
        let joined = self
            .iter()
            .filter(|(_, exp)| *exp != 0)
            .map(|(axis, exp)| {
                if exp == 1 {
                    axis.symbol().to_string()
                } else {
                    format!("{}^{}", axis.symbol(), exp)
                }
            })
            .collect::<Vec<_>>()
            .join(".");

        if joined.starts_with(Axis::None.symbol()) {
            return Axis::None.symbol().to_string();
        }

        match joined.find(".Z") {
            Some(location) => joined[..location].to_string(),
            None => joined,
        }
    }
}

impl Index<Axis> for DimensionFormula {
    type Output = i32;

    fn index(&self, axis: Axis) -> &i32 {
        &self.exponents[axis.index()]
    }
}

impl Add for DimensionFormula {
    type Output = DimensionFormula;

    fn add(self, rhs: DimensionFormula) -> DimensionFormula {
        let mut exponents = self.exponents;
        for (e, r) in exponents.iter_mut().zip(rhs.exponents) {
            *e += r;
        }
        DimensionFormula { exponents }
    }
}

impl Sub for DimensionFormula {
    type Output = DimensionFormula;

    fn sub(self, rhs: DimensionFormula) -> DimensionFormula {
        let mut exponents = self.exponents;
        for (e, r) in exponents.iter_mut().zip(rhs.exponents) {
            *e -= r;
        }
        DimensionFormula { exponents }
    }
}

impl fmt::Display for DimensionFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula_string())
    }
}
