//! The [`Vector3`] value type.
//!
//! A vector is three `f64` components with value semantics. Construction
//! from a scalar broadcasts it to every axis, construction from a sequence
//! assigns components positionally and rejects any arity other than three.
//! Arithmetic lives in [`crate::ops`].

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::VecError;
use crate::numeric::ordered_components;

/// A three-component double-precision vector.
///
/// # Examples
/// ```
/// use srcvec::Vector3;
/// let v = Vector3::new(1.0, 2.0, 3.0) + Vector3::new(4.0, 5.0, 6.0);
/// assert_eq!(v, Vector3::new(5.0, 7.0, 9.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vector3 {
    /// Component along the X axis.
    pub x: f64,
    /// Component along the Y axis.
    pub y: f64,
    /// Component along the Z axis.
    pub z: f64,
}

/// Names one of the three axes of a [`Vector3`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self::splat(0.0);

    /// Create a vector from its three components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a vector with every component set to `value`.
    ///
    /// ```
    /// use srcvec::Vector3;
    /// assert_eq!(Vector3::splat(5.0), Vector3::new(5.0, 5.0, 5.0));
    /// ```
    #[must_use]
    pub const fn splat(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Create a vector from an ordered sequence of exactly three numbers.
    ///
    /// # Errors
    /// Returns [`VecError::InvalidArgument`] when `values` does not hold
    /// exactly three elements.
    ///
    /// ```
    /// use srcvec::Vector3;
    /// assert_eq!(
    ///     Vector3::from_sequence(&[1.0, 2.0, 3.0]).unwrap(),
    ///     Vector3::new(1.0, 2.0, 3.0)
    /// );
    /// assert!(Vector3::from_sequence(&[1.0, 2.0]).is_err());
    /// ```
    pub fn from_sequence(values: &[f64]) -> Result<Self, VecError> {
        match *values {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(VecError::invalid(format!(
                "expected 3 components, got {}",
                values.len()
            ))),
        }
    }

    /// Components as an array in `x, y, z` order.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Components as a tuple in `x, y, z` order.
    #[must_use]
    pub const fn to_tuple(self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Component at position `index`, or `None` past the third.
    #[must_use]
    pub const fn get(&self, index: usize) -> Option<f64> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    /// Iterate over the components in `x, y, z` order.
    pub fn iter(&self) -> impl Iterator<Item = f64> {
        self.to_array().into_iter()
    }

    /// A hashable, totally ordered key for this vector.
    ///
    /// `NaN` components compare equal to each other and greater than every
    /// other value.
    #[must_use]
    pub fn ordered_key(&self) -> [OrderedFloat<f64>; 3] {
        ordered_components(self.to_array())
    }

    /// Apply `f` to every component.
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<f64> for Vector3 {
    fn from(value: f64) -> Self {
        Self::splat(value)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<Vector3> for (f64, f64, f64) {
    fn from(v: Vector3) -> Self {
        v.to_tuple()
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = VecError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_sequence(values)
    }
}

impl TryFrom<Vec<f64>> for Vector3 {
    type Error = VecError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_sequence(&values)
    }
}

impl Index<Axis> for Vector3 {
    type Output = f64;

    fn index(&self, axis: Axis) -> &f64 {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl IndexMut<Axis> for Vector3 {
    fn index_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl IntoIterator for Vector3 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}

/// Writes one component, dropping a redundant fractional part.
fn write_component(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    // Normalise -0 so the editor never sees "-0".
    if value == 0.0 {
        return f.write_str("0");
    }
    write!(f, "{value}")
}

impl fmt::Display for Vector3 {
    /// Space-separated components, as written into entity keyvalues.
    ///
    /// ```
    /// use srcvec::Vector3;
    /// assert_eq!(Vector3::new(1.0, 2.5, -3.0).to_string(), "1 2.5 -3");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_component(f, self.x)?;
        f.write_str(" ")?;
        write_component(f, self.y)?;
        f.write_str(" ")?;
        write_component(f, self.z)
    }
}

impl FromStr for Vector3 {
    type Err = VecError;

    /// Parse three numbers separated by whitespace or commas, optionally
    /// wrapped in matching brackets.
    ///
    /// ```
    /// use srcvec::Vector3;
    /// let v: Vector3 = "(1, 2.5, -3)".parse().unwrap();
    /// assert_eq!(v, Vector3::new(1.0, 2.5, -3.0));
    /// ```
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let inner = [('(', ')'), ('[', ']'), ('{', '}')]
            .iter()
            .find_map(|&(open, close)| {
                trimmed
                    .strip_prefix(open)
                    .and_then(|rest| rest.strip_suffix(close))
            })
            .unwrap_or(trimmed);

        let values = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<f64>()
                    .map_err(|_| VecError::invalid(format!("'{part}' is not a number")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_sequence(&values)
    }
}
