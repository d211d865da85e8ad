//! Error taxonomy shared by every vector operation.

use thiserror::Error;

use crate::ops::OpKind;

/// Failure raised by a vector construction or arithmetic operation.
///
/// Errors surface synchronously at the call site; nothing is retried or
/// recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VecError {
    /// Operand has the wrong arity or holds a non-numeric element.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable description of the rejected input.
        reason: String,
    },
    /// A scalar or component used as a divisor or modulus was zero.
    #[error("division by zero in {op}")]
    DivisionByZero {
        /// Operator that attempted the division.
        op: OpKind,
    },
    /// The operator does not handle this operand pairing.
    ///
    /// Dispatchers treat this variant as a signal to try the reflected
    /// operator of the other operand before giving up.
    #[error("unsupported operand type(s) for {op}: '{lhs}' and '{rhs}'")]
    UnsupportedOperand {
        /// Operator that was attempted.
        op: OpKind,
        /// Kind of the left-hand operand.
        lhs: &'static str,
        /// Kind of the right-hand operand.
        rhs: &'static str,
    },
}

impl VecError {
    /// Convenience constructor for [`VecError::InvalidArgument`].
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Returns `true` when a dispatcher may fall back to the reflected slot.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedOperand { .. })
    }
}
