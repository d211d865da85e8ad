//! Scalar kernels used by the component-wise operators.
//!
//! Floor division and modulo use floored semantics: the remainder carries
//! the sign of the divisor, so `a == b * floor_div(a, b) + floor_mod(a, b)`
//! holds for every finite pair with a nonzero divisor. Callers reject zero
//! divisors before reaching these helpers.

use ordered_float::OrderedFloat;

/// Quotient and remainder of a floored division.
///
/// `divisor` must be nonzero.
///
/// # Examples
/// ```
/// use srcvec::numeric::floor_divmod;
/// assert_eq!(floor_divmod(10.0, 3.0), (3.0, 1.0));
/// assert_eq!(floor_divmod(-7.0, 2.0), (-4.0, 1.0));
/// assert_eq!(floor_divmod(7.0, -2.0), (-4.0, -1.0));
/// ```
#[must_use]
pub fn floor_divmod(dividend: f64, divisor: f64) -> (f64, f64) {
    debug_assert!(divisor != 0.0, "floor_divmod called with a zero divisor");
    let mut rem = dividend % divisor;
    let mut div = (dividend - rem) / divisor;
    if rem == 0.0 {
        rem = 0.0_f64.copysign(divisor);
    } else if (divisor < 0.0) != (rem < 0.0) {
        rem += divisor;
        div -= 1.0;
    }

    let quot = if div == 0.0 {
        0.0_f64.copysign(dividend / divisor)
    } else {
        // `div` is already integral up to rounding error in the subtraction.
        let floored = div.floor();
        if div - floored > 0.5 {
            floored + 1.0
        } else {
            floored
        }
    };
    (quot, rem)
}

/// Floored quotient of `dividend / divisor`.
#[must_use]
pub fn floor_div(dividend: f64, divisor: f64) -> f64 {
    floor_divmod(dividend, divisor).0
}

/// Remainder of a floored division; takes the sign of `divisor`.
#[must_use]
pub fn floor_mod(dividend: f64, divisor: f64) -> f64 {
    floor_divmod(dividend, divisor).1
}

/// Wrap each component in [`OrderedFloat`] to obtain a hashable, totally
/// ordered key.
#[must_use]
pub fn ordered_components(components: [f64; 3]) -> [OrderedFloat<f64>; 3] {
    components.map(OrderedFloat)
}

/// Convert an integer into `f64`, rounding to the nearest representable value.
///
/// Integers up to 2^53 in magnitude convert exactly.
#[expect(
    clippy::cast_precision_loss,
    reason = "Components are f64; large integers round like any f64 input."
)]
#[must_use]
pub fn round_to_f64(value: i64) -> f64 {
    value as f64
}
