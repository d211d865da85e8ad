//! Dynamically typed operands and host-style operator dispatch.
//!
//! [`Value`] stands in for an operand whose type is only known at runtime,
//! such as one read from JSON. [`dispatch`] resolves `lhs op rhs` the way a
//! dynamic language resolves an overloaded operator: the left operand's
//! forward slot first, then the right operand's reflected slot, and only
//! then an unsupported-operand error.

use log::trace;
use serde::Deserialize;

use crate::error::VecError;
use crate::operand::Operand;
use crate::ops::OpKind;
use crate::vec::Vector3;

/// An operand of unknown type.
///
/// JSON input deserialises untagged: numbers become [`Value::Number`],
/// arrays [`Value::Sequence`], strings [`Value::Text`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// JSON `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// Any number; integers are widened to `f64`.
    Number(f64),
    /// A string.
    Text(String),
    /// An ordered sequence of values.
    Sequence(Vec<Value>),
    /// An already-constructed vector.
    #[serde(skip_deserializing)]
    Vector(Vector3),
}

impl Value {
    /// Name of the value's type, as reported in unsupported-operand errors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "float",
            Self::Text(_) => "str",
            Self::Sequence(_) => "sequence",
            Self::Vector(_) => "Vector3",
        }
    }

    /// Coerce the value into an arithmetic operand.
    ///
    /// # Errors
    /// [`VecError::InvalidArgument`] for a sequence that is not exactly three
    /// numbers. [`VecError::UnsupportedOperand`] (tagged with `op`) for
    /// values that are neither numbers, vectors, nor sequences.
    pub fn coerce(&self, op: OpKind) -> Result<Operand, VecError> {
        match self {
            Self::Number(n) => Ok(Operand::Scalar(*n)),
            Self::Vector(v) => Ok(Operand::Vector(*v)),
            Self::Sequence(items) => {
                let numbers = items
                    .iter()
                    .map(|item| match item {
                        Self::Number(n) => Ok(*n),
                        other => Err(VecError::invalid(format!(
                            "sequence element of type '{}' is not a number",
                            other.kind()
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Operand::from_sequence(&numbers)
            }
            Self::Null | Self::Bool(_) | Self::Text(_) => Err(VecError::UnsupportedOperand {
                op,
                lhs: "Vector3",
                rhs: self.kind(),
            }),
        }
    }

    /// The vector held by this value, if it is one.
    #[must_use]
    pub const fn as_vector(&self) -> Option<Vector3> {
        match self {
            Self::Vector(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<Vector3> for Value {
    fn from(v: Vector3) -> Self {
        Self::Vector(v)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

/// Evaluate `lhs op rhs` with reflected fallback.
///
/// Only [`VecError::UnsupportedOperand`] triggers the fallback; invalid
/// arguments and zero divisors surface immediately.
///
/// # Errors
/// Any error from the slot that handled the pair, or
/// [`VecError::UnsupportedOperand`] when neither side handles it.
///
/// ```
/// use srcvec::{dispatch, OpKind, Value, Vector3};
/// let out = dispatch(OpKind::Sub, &Value::Number(5.0), &Vector3::new(1.0, 2.0, 3.0).into());
/// assert_eq!(out, Ok(Vector3::new(4.0, 3.0, 2.0)));
/// ```
pub fn dispatch(op: OpKind, lhs: &Value, rhs: &Value) -> Result<Vector3, VecError> {
    if let Some(vector) = lhs.as_vector() {
        match rhs.coerce(op).and_then(|operand| op.forward(vector, operand)) {
            Err(err) if err.is_unsupported() => {
                trace!("{} {op} {} unsupported; trying reflected", lhs.kind(), rhs.kind());
            }
            result => return result,
        }
    }

    if let Some(vector) = rhs.as_vector() {
        return match lhs.coerce(op) {
            Ok(operand) => op.reflected(vector, operand),
            Err(err) if err.is_unsupported() => Err(unsupported(op, lhs, rhs)),
            Err(err) => Err(err),
        };
    }

    Err(unsupported(op, lhs, rhs))
}

const fn unsupported(op: OpKind, lhs: &Value, rhs: &Value) -> VecError {
    VecError::UnsupportedOperand {
        op,
        lhs: lhs.kind(),
        rhs: rhs.kind(),
    }
}
