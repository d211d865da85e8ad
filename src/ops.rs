//! Operator table for [`Vector3`] arithmetic.
//!
//! Each [`OpKind`] has three slots: `forward` (`vector op operand`),
//! `reflected` (`operand op vector`) and `in_place` (mutates the receiver).
//! Every fallible entry point on [`Vector3`] routes through these slots.
//! Scalars broadcast across all components for every operator; vector
//! operands are only accepted by the additive, floor-division and modulo
//! operators.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::VecError;
use crate::numeric::{floor_div, floor_mod};
use crate::operand::Operand;
use crate::vec::Vector3;

/// The arithmetic operators supported by [`Vector3`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication by a scalar.
    Mul,
    /// True division by a scalar.
    TrueDiv,
    /// Floored division.
    FloorDiv,
    /// Floored modulo.
    Mod,
}

impl OpKind {
    /// Every operator, in table order.
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::TrueDiv,
        Self::FloorDiv,
        Self::Mod,
    ];

    /// Infix symbol for the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::TrueDiv => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
        }
    }

    /// Short lowercase name of the operator.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::TrueDiv => "truediv",
            Self::FloorDiv => "floordiv",
            Self::Mod => "mod",
        }
    }

    /// Whether a full vector is accepted as the other operand.
    #[must_use]
    pub const fn accepts_vector(self) -> bool {
        !matches!(self, Self::Mul | Self::TrueDiv)
    }

    const fn divides(self) -> bool {
        matches!(self, Self::TrueDiv | Self::FloorDiv | Self::Mod)
    }

    /// Apply the operator to a single pair of components.
    ///
    /// # Errors
    /// Returns [`VecError::DivisionByZero`] when a dividing operator receives
    /// a zero `rhs`.
    pub fn apply_scalar(self, lhs: f64, rhs: f64) -> Result<f64, VecError> {
        if self.divides() && rhs == 0.0 {
            return Err(VecError::DivisionByZero { op: self });
        }
        Ok(match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::TrueDiv => lhs / rhs,
            Self::FloorDiv => floor_div(lhs, rhs),
            Self::Mod => floor_mod(lhs, rhs),
        })
    }

    fn combine(self, lhs: Vector3, rhs: Vector3) -> Result<Vector3, VecError> {
        Ok(Vector3::new(
            self.apply_scalar(lhs.x, rhs.x)?,
            self.apply_scalar(lhs.y, rhs.y)?,
            self.apply_scalar(lhs.z, rhs.z)?,
        ))
    }

    fn check(
        self,
        lhs: &'static str,
        operand: Operand,
        rhs: &'static str,
    ) -> Result<Vector3, VecError> {
        match operand {
            Operand::Vector(_) if !self.accepts_vector() => {
                Err(VecError::UnsupportedOperand { op: self, lhs, rhs })
            }
            _ => Ok(operand.broadcast()),
        }
    }

    /// Compute `vector op rhs`.
    ///
    /// # Errors
    /// [`VecError::UnsupportedOperand`] when the operator rejects a vector
    /// operand, [`VecError::DivisionByZero`] for a zero divisor.
    ///
    /// ```
    /// use srcvec::{OpKind, Vector3};
    /// let v = OpKind::FloorDiv.forward(Vector3::splat(10.0), 3).unwrap();
    /// assert_eq!(v, Vector3::splat(3.0));
    /// ```
    pub fn forward(self, vector: Vector3, rhs: impl Into<Operand>) -> Result<Vector3, VecError> {
        let operand = rhs.into();
        let rhs = self.check("Vector3", operand, operand.kind())?;
        self.combine(vector, rhs)
    }

    /// Compute `lhs op vector`, the form used when the left operand does not
    /// know how to combine with a vector.
    ///
    /// # Errors
    /// As for [`OpKind::forward`].
    ///
    /// ```
    /// use srcvec::{OpKind, Vector3};
    /// let v = OpKind::Sub.reflected(Vector3::new(1.0, 2.0, 3.0), 5).unwrap();
    /// assert_eq!(v, Vector3::new(4.0, 3.0, 2.0));
    /// ```
    pub fn reflected(self, vector: Vector3, lhs: impl Into<Operand>) -> Result<Vector3, VecError> {
        let operand = lhs.into();
        let lhs = self.check(operand.kind(), operand, "Vector3")?;
        self.combine(lhs, vector)
    }

    /// Compute `vector op= rhs`, storing the result in `vector`.
    ///
    /// On error `vector` is left untouched.
    ///
    /// # Errors
    /// As for [`OpKind::forward`].
    pub fn in_place(
        self,
        vector: &mut Vector3,
        rhs: impl Into<Operand>,
    ) -> Result<&mut Vector3, VecError> {
        *vector = self.forward(*vector, rhs)?;
        Ok(vector)
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for OpKind {
    type Err = VecError;

    /// Accepts either the infix symbol or the short name.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == token || op.name() == token)
            .ok_or_else(|| VecError::invalid(format!("unknown operator '{token}'")))
    }
}

/// Generates the three slot methods for one operator on [`Vector3`].
macro_rules! op_methods {
    ($op:expr, $forward:ident, $reflected:ident, $in_place:ident, $desc:literal) => {
        #[doc = concat!("Non-mutating ", $desc, ".")]
        ///
        /// # Errors
        /// See [`OpKind::forward`].
        pub fn $forward(self, rhs: impl Into<Operand>) -> Result<Self, VecError> {
            $op.forward(self, rhs)
        }

        #[doc = concat!("Reflected ", $desc, ", with `lhs` on the left.")]
        ///
        /// # Errors
        /// See [`OpKind::reflected`].
        pub fn $reflected(self, lhs: impl Into<Operand>) -> Result<Self, VecError> {
            $op.reflected(self, lhs)
        }

        #[doc = concat!("In-place ", $desc, "; returns the receiver for chaining.")]
        ///
        /// # Errors
        /// See [`OpKind::in_place`].
        pub fn $in_place(&mut self, rhs: impl Into<Operand>) -> Result<&mut Self, VecError> {
            $op.in_place(self, rhs)
        }
    };
}

impl Vector3 {
    op_methods!(OpKind::Add, try_add, radd, iadd, "addition");
    op_methods!(OpKind::Sub, try_sub, rsub, isub, "subtraction");
    op_methods!(OpKind::Mul, try_mul, rmul, imul, "scalar multiplication");
    op_methods!(OpKind::TrueDiv, try_truediv, rtruediv, itruediv, "true division");
    op_methods!(OpKind::FloorDiv, try_floordiv, rfloordiv, ifloordiv, "floor division");
    op_methods!(OpKind::Mod, try_mod, rmod, imod, "floored modulo");

    fn zip_with(self, rhs: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(f(self.x, rhs.x), f(self.y, rhs.y), f(self.z, rhs.z))
    }
}

impl_broadcast_ops!(Vector3, f64, [f64; 3], (f64, f64, f64));

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.map(|c| c * rhs)
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Add<Vector3> for f64 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        rhs + self
    }
}

impl Sub<Vector3> for f64 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::splat(self) - rhs
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[rstest]
    #[case(OpKind::Add, v(5.0, 7.0, 9.0))]
    #[case(OpKind::Sub, v(-3.0, -3.0, -3.0))]
    #[case(OpKind::FloorDiv, v(0.0, 0.0, 0.0))]
    #[case(OpKind::Mod, v(1.0, 2.0, 3.0))]
    fn vector_operands_combine_componentwise(#[case] op: OpKind, #[case] expected: Vector3) {
        assert_eq!(op.forward(v(1.0, 2.0, 3.0), v(4.0, 5.0, 6.0)), Ok(expected));
    }

    #[rstest]
    #[case(OpKind::Mul)]
    #[case(OpKind::TrueDiv)]
    fn vector_operands_unsupported_for_scaling(#[case] op: OpKind) {
        let err = op
            .forward(v(1.0, 2.0, 3.0), [1.0, 1.0, 1.0])
            .expect_err("vector operand rejected");
        assert_eq!(
            err,
            VecError::UnsupportedOperand {
                op,
                lhs: "Vector3",
                rhs: "Vector3"
            }
        );
        assert!(op.reflected(v(1.0, 2.0, 3.0), v(1.0, 1.0, 1.0)).is_err());
    }

    #[rstest]
    #[case(OpKind::Add, v(13.0, 13.0, 13.0))]
    #[case(OpKind::Sub, v(7.0, 7.0, 7.0))]
    #[case(OpKind::Mul, v(30.0, 30.0, 30.0))]
    #[case(OpKind::FloorDiv, v(3.0, 3.0, 3.0))]
    #[case(OpKind::Mod, v(1.0, 1.0, 1.0))]
    fn scalars_broadcast(#[case] op: OpKind, #[case] expected: Vector3) {
        assert_eq!(op.forward(Vector3::splat(10.0), 3), Ok(expected));
    }

    #[rstest]
    fn true_division_by_scalar() {
        let out = OpKind::TrueDiv
            .forward(v(1.0, 2.0, 3.0), 4)
            .expect("nonzero divisor");
        assert_relative_eq!(out.x, 0.25);
        assert_relative_eq!(out.y, 0.5);
        assert_relative_eq!(out.z, 0.75);
    }

    #[rstest]
    #[case(OpKind::TrueDiv)]
    #[case(OpKind::FloorDiv)]
    #[case(OpKind::Mod)]
    fn zero_divisors_rejected(#[case] op: OpKind) {
        let zero = VecError::DivisionByZero { op };
        assert_eq!(op.forward(v(1.0, 2.0, 3.0), 0), Err(zero.clone()));
        assert_eq!(op.reflected(v(1.0, 0.0, 3.0), 6), Err(zero.clone()));
        if op.accepts_vector() {
            assert_eq!(op.forward(v(1.0, 2.0, 3.0), v(1.0, 0.0, 1.0)), Err(zero));
        }
    }

    #[rstest]
    #[case(OpKind::Add, v(6.0, 7.0, 8.0))]
    #[case(OpKind::Sub, v(4.0, 3.0, 2.0))]
    #[case(OpKind::Mul, v(5.0, 10.0, 15.0))]
    #[case(OpKind::FloorDiv, v(5.0, 2.0, 1.0))]
    #[case(OpKind::Mod, v(0.0, 1.0, 2.0))]
    fn reflected_puts_operand_on_the_left(#[case] op: OpKind, #[case] expected: Vector3) {
        assert_eq!(op.reflected(v(1.0, 2.0, 3.0), 5), Ok(expected));
    }

    #[rstest]
    fn reflected_true_division() {
        let out = v(1.0, 2.0, 4.0).rtruediv(8).expect("nonzero components");
        assert_eq!(out, v(8.0, 4.0, 2.0));
    }

    #[rstest]
    fn in_place_returns_receiver() {
        let mut a = Vector3::splat(1.0);
        let r = a.iadd(Vector3::splat(1.0)).expect("add");
        assert_eq!(*r, Vector3::splat(2.0));
        r.imul(3).expect("mul").isub(1.0).expect("sub");
        assert_eq!(a, Vector3::splat(5.0));
    }

    #[rstest]
    fn in_place_failure_leaves_receiver() {
        let mut a = v(4.0, 5.0, 6.0);
        assert!(a.imod(v(1.0, 1.0, 0.0)).is_err());
        assert!(a.imul([2.0, 2.0, 2.0]).is_err());
        assert_eq!(a, v(4.0, 5.0, 6.0));
    }

    #[rstest]
    fn sequences_act_as_vectors() {
        let a = v(1.0, 2.0, 3.0);
        assert_eq!(a.try_add((1.0, 1.0, 1.0)), a.try_add(Vector3::splat(1.0)));
        assert_eq!(a.rsub([3.0, 3.0, 3.0]), Ok(v(2.0, 1.0, 0.0)));
    }

    #[rstest]
    fn std_operators_match_table() {
        let a = v(1.0, 2.0, 3.0);
        let b = v(4.0, 5.0, 6.0);
        assert_eq!(Ok(a + b), a.try_add(b));
        assert_eq!(Ok(a - 2.0), a.try_sub(2.0));
        assert_eq!(Ok(5.0 - a), a.rsub(5.0));
        assert_eq!(Ok(a * 2.0), a.try_mul(2.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(2.0 + a, a + 2.0);
        assert_eq!(a + [1.0, 1.0, 1.0], a + 1.0);
        assert_eq!(a - (1.0, 1.0, 1.0), a - 1.0);
        assert_eq!(-a, v(-1.0, -2.0, -3.0));
    }

    #[rstest]
    fn assign_operators_mutate() {
        let mut a = v(1.0, 2.0, 3.0);
        a += 1.0;
        a -= [0.0, 1.0, 2.0];
        a *= 2.0;
        a += v(1.0, 1.0, 1.0);
        a -= (1.0, 1.0, 1.0);
        assert_eq!(a, v(4.0, 4.0, 4.0));
    }

    #[rstest]
    #[case("+", OpKind::Add)]
    #[case("sub", OpKind::Sub)]
    #[case("//", OpKind::FloorDiv)]
    #[case("/", OpKind::TrueDiv)]
    #[case("mod", OpKind::Mod)]
    fn parses_operator_tokens(#[case] token: &str, #[case] expected: OpKind) {
        assert_eq!(token.parse::<OpKind>(), Ok(expected));
    }

    #[rstest]
    fn unknown_operator_token() {
        assert!(matches!(
            "**".parse::<OpKind>(),
            Err(VecError::InvalidArgument { .. })
        ));
    }
}
