//! Vector fixtures and tolerance assertions shared by integration tests.

use approx::relative_eq;
use srcvec::Vector3;

/// Vectors covering signs, fractions and the origin.
pub const SAMPLE_VECTORS: [Vector3; 5] = [
    Vector3::new(0.0, 0.0, 0.0),
    Vector3::new(1.0, 2.0, 3.0),
    Vector3::new(-4.5, 0.25, 9.0),
    Vector3::new(10.0, -10.0, 10.0),
    Vector3::new(1e6, -3.0e-3, 42.0),
];

/// Nonzero scalars of both signs.
pub const SAMPLE_SCALARS: [f64; 5] = [1.0, -2.0, 0.5, 3.0, -7.25];

/// Shorthand constructor.
///
/// # Examples
/// ```
/// use test_utils::v3;
/// assert_eq!(v3(1.0, 2.0, 3.0), srcvec::Vector3::new(1.0, 2.0, 3.0));
/// ```
pub fn v3(x: f64, y: f64, z: f64) -> Vector3 {
    Vector3::new(x, y, z)
}

/// Assert that every component of `actual` is relatively close to `expected`.
///
/// # Panics
/// Panics with both vectors in the message if any component differs.
pub fn assert_vec_close(actual: Vector3, expected: Vector3) {
    let close = actual
        .iter()
        .zip(expected.iter())
        .all(|(a, e)| relative_eq!(a, e, epsilon = 1e-9, max_relative = 1e-12));
    assert!(close, "expected {expected:?}, got {actual:?}");
}
