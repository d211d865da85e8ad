//! Coercion of right-hand operands.
//!
//! Every binary operation starts by turning its operand into an [`Operand`]:
//! either a scalar that broadcasts across all components or a full vector.
//! Raw arrays, tuples and slices of three numbers become vectors here, so the
//! arithmetic kernels only ever see these two shapes.

use crate::error::VecError;
use crate::numeric::round_to_f64;
use crate::vec::Vector3;

/// A coerced operand for a vector operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    /// A single number broadcast across all components.
    Scalar(f64),
    /// A full vector applied component-wise.
    Vector(Vector3),
}

impl Operand {
    /// Name of the operand kind, as reported in unsupported-operand errors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "float",
            Self::Vector(_) => "Vector3",
        }
    }

    /// The operand expanded to three components.
    #[must_use]
    pub const fn broadcast(self) -> Vector3 {
        match self {
            Self::Scalar(value) => Vector3::splat(value),
            Self::Vector(v) => v,
        }
    }

    /// Coerce a slice of numbers into a vector operand.
    ///
    /// # Errors
    /// Returns [`VecError::InvalidArgument`] unless `values` has exactly
    /// three elements.
    pub fn from_sequence(values: &[f64]) -> Result<Self, VecError> {
        Vector3::from_sequence(values).map(Self::Vector)
    }
}

impl From<Vector3> for Operand {
    fn from(v: Vector3) -> Self {
        Self::Vector(v)
    }
}

impl From<&Vector3> for Operand {
    fn from(v: &Vector3) -> Self {
        Self::Vector(*v)
    }
}

impl From<[f64; 3]> for Operand {
    fn from(values: [f64; 3]) -> Self {
        Self::Vector(values.into())
    }
}

impl From<(f64, f64, f64)> for Operand {
    fn from(values: (f64, f64, f64)) -> Self {
        Self::Vector(values.into())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Self::Scalar(f64::from(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Scalar(f64::from(value))
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Self::Scalar(f64::from(value))
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Scalar(round_to_f64(value))
    }
}

impl TryFrom<&[f64]> for Operand {
    type Error = VecError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_sequence(values)
    }
}
