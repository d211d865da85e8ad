//! Macros for reducing operator boilerplate on [`crate::Vector3`].
//!
//! Provides `impl_broadcast_ops!`, which implements `Add`, `Sub`,
//! `AddAssign` and `SubAssign` for every listed right-hand type. Each type
//! must convert into [`crate::Operand`]; scalars broadcast across all
//! components and three-element values apply component-wise.
//!
//! ```rust,ignore
//! impl_broadcast_ops!(Vector3, f64, [f64; 3]);
//! ```
macro_rules! impl_broadcast_ops {
    ($($rhs:ty),* $(,)?) => {
        $(
            impl Add<$rhs> for Vector3 {
                type Output = Self;

                fn add(self, rhs: $rhs) -> Self {
                    self.zip_with(Operand::from(rhs).broadcast(), |a, b| a + b)
                }
            }

            impl Sub<$rhs> for Vector3 {
                type Output = Self;

                fn sub(self, rhs: $rhs) -> Self {
                    self.zip_with(Operand::from(rhs).broadcast(), |a, b| a - b)
                }
            }

            impl AddAssign<$rhs> for Vector3 {
                fn add_assign(&mut self, rhs: $rhs) {
                    *self = *self + rhs;
                }
            }

            impl SubAssign<$rhs> for Vector3 {
                fn sub_assign(&mut self, rhs: $rhs) {
                    *self = *self - rhs;
                }
            }
        )*
    };
}
