//! Named dimensions and their algebra

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Div, Mul};

use super::formula::{Axis, DimensionFormula};

/// A dimension: a formula plus a human readable name and symbol.
///
/// Two dimensions are equal when their physical exponents match; names and
/// symbols are informative only, and the `Z` bookkeeping axis is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawDimension")]
pub struct Dimension {
    name: Cow<'static, str>,
    symbol: Cow<'static, str>,
    formula: DimensionFormula,
}

/// Wire form of [`Dimension`]; deserialised values go through
/// [`Dimension::new`] so the formula is normalised.
#[derive(Deserialize)]
struct RawDimension {
    name: String,
    symbol: String,
    formula: DimensionFormula,
}

impl From<RawDimension> for Dimension {
    fn from(raw: RawDimension) -> Self {
        Dimension::new(raw.name, raw.symbol, raw.formula)
    }
}

impl Dimension {
    pub const LENGTH: Dimension = Dimension::base("Length", Axis::Length, DimensionFormula::LENGTH);
    pub const MASS: Dimension = Dimension::base("Mass", Axis::Mass, DimensionFormula::MASS);
    pub const TIME: Dimension = Dimension::base("Time", Axis::Time, DimensionFormula::TIME);
    pub const ELECTRIC_CURRENT: Dimension = Dimension::base(
        "Electric Current",
        Axis::ElectricCurrent,
        DimensionFormula::ELECTRIC_CURRENT,
    );
    pub const THERMODYNAMIC_TEMPERATURE: Dimension = Dimension::base(
        "Thermodynamic Temperature",
        Axis::ThermodynamicTemperature,
        DimensionFormula::THERMODYNAMIC_TEMPERATURE,
    );
    pub const AMOUNT_OF_SUBSTANCE: Dimension = Dimension::base(
        "Amount of Substance",
        Axis::AmountOfSubstance,
        DimensionFormula::AMOUNT_OF_SUBSTANCE,
    );
    pub const LUMINOUS_INTENSITY: Dimension = Dimension::base(
        "Luminous Intensity",
        Axis::LuminousIntensity,
        DimensionFormula::LUMINOUS_INTENSITY,
    );

    /// Tags dimensionless quantities (angles, proportions, `Time / Time`, ...)
    pub const NONE: Dimension = Dimension::base("None", Axis::None, DimensionFormula::NONE);

    /// Base dimensions in formula order
    pub const ALL: [Dimension; 8] = [
        Dimension::LENGTH,
        Dimension::MASS,
        Dimension::TIME,
        Dimension::ELECTRIC_CURRENT,
        Dimension::THERMODYNAMIC_TEMPERATURE,
        Dimension::AMOUNT_OF_SUBSTANCE,
        Dimension::LUMINOUS_INTENSITY,
        Dimension::NONE,
    ];

    const fn base(name: &'static str, axis: Axis, formula: DimensionFormula) -> Self {
        Dimension {
            name: Cow::Borrowed(name),
            symbol: Cow::Borrowed(axis.symbol()),
            formula,
        }
    }

    /// Create a dimension; an all-zero formula becomes the None formula
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        symbol: impl Into<Cow<'static, str>>,
        formula: DimensionFormula,
    ) -> Self {
        Dimension {
            name: name.into(),
            symbol: symbol.into(),
            formula: formula.normalized(),
        }
    }

    /// The base dimension for an axis
    pub fn of(axis: Axis) -> &'static Dimension {
        &BASE_DIMENSIONS[axis.index()]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn formula(&self) -> &DimensionFormula {
        &self.formula
    }

    /// True for dimensionless quantities
    pub fn is_none(&self) -> bool {
        self.formula.is_none()
    }

    /// This dimension raised to `exponent`
    pub fn pow(&self, exponent: i32) -> Dimension {
        let (name, symbol) = if self.is_none() {
            (String::new(), String::new())
        } else {
            (
                format!("{} ^ {}", self.name, exponent),
                format!("{}^{}", self.symbol, exponent),
            )
        };
        Dimension::new(name, symbol, self.formula.pow(exponent))
    }

    /// Product of two dimensions (exponents are added)
    pub fn multiply_by(&self, other: &Dimension) -> Dimension {
        Dimension::new(
            join_labels(&self.name, self.is_none(), &other.name, other.is_none(), " * "),
            join_labels(&self.symbol, self.is_none(), &other.symbol, other.is_none(), "."),
            self.formula + other.formula,
        )
    }

    /// Quotient of two dimensions (exponents are subtracted)
    pub fn divide_by(&self, other: &Dimension) -> Dimension {
        Dimension::new(
            join_labels(&self.name, self.is_none(), &other.name, other.is_none(), " / "),
            join_labels(&self.symbol, self.is_none(), &other.symbol, other.is_none(), "/"),
            self.formula - other.formula,
        )
    }

    /// Formula as text, e.g. `L.T^-1`, or `Z` for dimensionless quantities
    pub fn formula_string(&self) -> String {
        self.formula.formula_string()
    }
}

static BASE_DIMENSIONS: [Dimension; 8] = Dimension::ALL;

/// Join two labels with `separator`, leaving out dimensionless operands
pub(crate) fn join_labels(
    left: &str,
    left_is_none: bool,
    right: &str,
    right_is_none: bool,
    separator: &str,
) -> String {
    match (left_is_none, right_is_none) {
        (true, true) => String::new(),
        (true, false) => right.to_string(),
        (false, true) => left.to_string(),
        (false, false) => format!("{left}{separator}{right}"),
    }
}

impl PartialEq for Dimension {
    fn eq(&self, other: &Self) -> bool {
        self.formula.same_dimension(&other.formula)
    }
}

impl Eq for Dimension {}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for axis in Axis::PHYSICAL {
            self.formula.get(axis).hash(state);
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::NONE
    }
}

impl Mul for &Dimension {
    type Output = Dimension;

    fn mul(self, rhs: &Dimension) -> Dimension {
        self.multiply_by(rhs)
    }
}

impl Div for &Dimension {
    type Output = Dimension;

    fn div(self, rhs: &Dimension) -> Dimension {
        self.divide_by(rhs)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            Ok(())
        } else {
            write!(f, "{} ({})", self.symbol, self.name)
        }
    }
}
