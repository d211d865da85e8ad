//! Geometry on [`Vector3`]: magnitudes, normalised vectors and products,
//! computed through `glam::DVec3`.
use glam::DVec3;

use crate::vec::Vector3;

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<DVec3> for Vector3 {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Vector3 {
    /// Euclidean length.
    #[must_use]
    pub fn mag(self) -> f64 {
        DVec3::from(self).length()
    }

    /// Squared length; avoids the square root when only comparing.
    #[must_use]
    pub fn mag_sq(self) -> f64 {
        DVec3::from(self).length_squared()
    }

    /// Unit vector in the same direction.
    ///
    /// The zero vector, and any vector with a non-finite component, yields
    /// the zero vector.
    #[must_use]
    pub fn norm(self) -> Self {
        let v = DVec3::from(self);
        if !v.is_finite() {
            return Self::ZERO;
        }
        v.try_normalize().unwrap_or(DVec3::ZERO).into()
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        DVec3::from(self).dot(other.into())
    }

    /// Cross product, right-handed.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        DVec3::from(self).cross(other.into()).into()
    }

    /// `true` when every component is exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Component-wise absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        self.map(f64::abs)
    }

    /// Component-wise minimum.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        DVec3::from(self).min(other.into()).into()
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        DVec3::from(self).max(other.into()).into()
    }

    /// Linear interpolation: `self` at `t == 0`, `other` at `t == 1`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        DVec3::from(self).lerp(other.into(), t).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    fn magnitude_of_pythagorean_quadruple() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_relative_eq!(v.mag(), 7.0);
        assert_relative_eq!(v.mag_sq(), 49.0);
    }

    #[rstest]
    #[case(Vector3::ZERO)]
    #[case(Vector3::new(f64::NAN, 1.0, 0.0))]
    #[case(Vector3::new(f64::INFINITY, 0.0, 0.0))]
    fn degenerate_vectors_normalise_to_zero(#[case] v: Vector3) {
        assert_eq!(v.norm(), Vector3::ZERO);
    }

    #[rstest]
    fn normalised_vector_has_unit_length() {
        let n = Vector3::new(-4.0, 2.0, 9.0).norm();
        assert_relative_eq!(n.mag(), 1.0, epsilon = 1e-12);
    }

    #[rstest]
    fn products_follow_right_hand_rule() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(Vector3::new(1.0, 2.0, 3.0).dot(Vector3::new(4.0, 5.0, 6.0)), 32.0);
    }

    #[rstest]
    fn componentwise_helpers() {
        let a = Vector3::new(-1.0, 5.0, 2.0);
        let b = Vector3::new(3.0, -2.0, 2.0);
        assert_eq!(a.abs(), Vector3::new(1.0, 5.0, 2.0));
        assert_eq!(a.min(b), Vector3::new(-1.0, -2.0, 2.0));
        assert_eq!(a.max(b), Vector3::new(3.0, 5.0, 2.0));
        assert_eq!(a.lerp(b, 0.5), Vector3::new(1.0, 1.5, 2.0));
        assert!(Vector3::ZERO.is_zero());
        assert!(!a.is_zero());
    }
}
