use std::{f64::consts::PI, fmt, slice};

use itertools::Itertools;

use crate::{
    approx::{is_near_zero, EPSILON},
    Error,
};

mod ops;

/// The unit in which [`Vector::angle_between`] reports angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// A column vector of [`f64`] elements whose dimension is determined at runtime.
///
/// # Construction
///
/// - [`Vector::new`] takes any sequence of coordinates and rejects empty ones.
/// - [`vec2`] and [`vec3`] directly create 2- and 3-dimensional vectors.
/// - Vectors can be created from (non-empty) arrays via their [`From`] implementation.
/// - [`Vector::zero`], [`Vector::unit`] and [`Vector::from_fn`] create vectors of a given
///   dimension.
///
/// # Immutability
///
/// A [`Vector`] never changes after construction. There is no mutable element access; every
/// operation returns a new vector.
///
/// # Errors
///
/// Operations combining two vectors return [`Error::DimensionMismatch`] when the dimensions differ.
/// Operations that need a direction return [`Error::ZeroVector`] for vectors whose magnitude is
/// below [`EPSILON`].
#[derive(Clone, PartialEq)]
pub struct Vector(Box<[f64]>);

impl Vector {
    /// Creates a vector from its coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if `coordinates` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let v = Vector::new(vec![1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v, vec3(1.0, 2.0, 3.0));
    /// assert_eq!(Vector::new(Vec::new()), Err(Error::Empty));
    /// ```
    pub fn new(coordinates: impl Into<Vec<f64>>) -> Result<Self, Error> {
        let coordinates = coordinates.into();
        if coordinates.is_empty() {
            return Err(Error::Empty);
        }
        Ok(Self(coordinates.into_boxed_slice()))
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is 0.
    pub fn from_fn<F>(dimension: usize, cb: F) -> Self
    where
        F: FnMut(usize) -> f64,
    {
        assert!(dimension > 0, "vectors need at least one dimension");
        Self((0..dimension).map(cb).collect())
    }

    /// Creates a `dimension`-dimensional vector with every element set to 0.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is 0.
    pub fn zero(dimension: usize) -> Self {
        Self::from_fn(dimension, |_| 0.0)
    }

    /// Creates the unit vector pointing along axis `index`.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is 0 or `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// assert_eq!(Vector::unit(3, 1), vec3(0.0, 1.0, 0.0));
    /// ```
    pub fn unit(dimension: usize, index: usize) -> Self {
        assert!(
            index < dimension,
            "axis {index} out of bounds for dimension {dimension}"
        );
        Self::from_fn(dimension, |i| if i == index { 1.0 } else { 0.0 })
    }

    /// Returns the number of coordinates of this vector (always at least 1).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    /// Returns the coordinates as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns an iterator over the coordinates.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Converts this vector into a [`Vec`] of its coordinates.
    pub fn into_vec(self) -> Vec<f64> {
        self.0.into_vec()
    }

    fn check_dimension(&self, other: &Self) -> Result<(), Error> {
        if self.dimension() == other.dimension() {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            })
        }
    }

    fn zip_with(&self, other: &Self, f: impl FnMut((&f64, &f64)) -> f64) -> Result<Self, Error> {
        self.check_dimension(other)?;
        Ok(Self(self.iter().zip_eq(other.iter()).map(f).collect()))
    }

    /// Computes the element-wise sum of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let v = vec2(8.218, -9.341).plus(&vec2(-1.129, 2.111)).unwrap();
    /// assert_approx_eq!(v, vec2(7.089, -7.23));
    /// ```
    pub fn plus(&self, other: &Self) -> Result<Self, Error> {
        self.zip_with(other, |(a, b)| a + b)
    }

    /// Computes the element-wise difference `self - other`.
    pub fn minus(&self, other: &Self) -> Result<Self, Error> {
        self.zip_with(other, |(a, b)| a - b)
    }

    /// Scales every element by `scalar`.
    pub fn times_scalar(&self, scalar: f64) -> Self {
        Self(self.iter().map(|c| c * scalar).collect())
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let a = vec3(1.0, 3.0, -5.0);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot_product(&b), Ok(3.0));
    /// ```
    pub fn dot_product(&self, other: &Self) -> Result<f64, Error> {
        self.check_dimension(other)?;
        Ok(self
            .iter()
            .zip_eq(other.iter())
            .fold(0.0, |acc, (a, b)| acc + a * b))
    }

    /// Returns the length of this vector.
    pub fn magnitude(&self) -> f64 {
        self.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Returns whether the magnitude of this vector is below [`EPSILON`].
    pub fn is_zero(&self) -> bool {
        self.magnitude() < EPSILON
    }

    /// Divides this vector by its magnitude, resulting in a unit vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroVector`] if `self` [is zero][Self::is_zero].
    pub fn normalization(&self) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::ZeroVector);
        }
        Ok(self.times_scalar(1.0 / self.magnitude()))
    }

    /// Computes the smallest positive angle between `self` and `other`.
    ///
    /// The cosine is rounded to 6 decimal places and clamped to `[-1, 1]` before taking the
    /// arccosine, so vectors that are parallel up to round-off yield exactly 0 or π instead of
    /// `NaN`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroVector`] if either vector is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let angle = vec2(0.0, 2.0).angle_between(&vec2(1.0, 0.0), AngleUnit::Degrees).unwrap();
    /// assert_approx_eq!(angle, 90.0);
    /// ```
    pub fn angle_between(&self, other: &Self, unit: AngleUnit) -> Result<f64, Error> {
        self.check_dimension(other)?;
        if self.is_zero() || other.is_zero() {
            return Err(Error::ZeroVector);
        }

        let cosine = self.dot_product(other)? / (self.magnitude() * other.magnitude());
        let cosine = ((cosine * 1e6).round() / 1e6).clamp(-1.0, 1.0);
        let angle = cosine.acos();
        Ok(match unit {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => angle.to_degrees(),
        })
    }

    /// Returns whether `self` and `other` are orthogonal.
    ///
    /// The zero vector is orthogonal to every vector.
    pub fn is_orthogonal(&self, other: &Self) -> Result<bool, Error> {
        self.check_dimension(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }
        Ok(is_near_zero(self.dot_product(other)?))
    }

    /// Returns whether `self` and `other` point along the same line (in the same or in opposite
    /// directions).
    ///
    /// The zero vector is parallel to every vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let a = vec2(-7.579, -7.88);
    /// assert!(a.is_parallel(&vec2(22.737, 23.64)).unwrap());
    /// assert!(a.is_parallel(&Vector::zero(2)).unwrap());
    /// assert!(!a.is_parallel(&vec2(7.88, -7.579)).unwrap());
    /// ```
    pub fn is_parallel(&self, other: &Self) -> Result<bool, Error> {
        self.check_dimension(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }
        let angle = self.angle_between(other, AngleUnit::Radians)?;
        Ok(angle < EPSILON || PI - angle < EPSILON)
    }

    /// Projects `self` onto `basis`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroVector`] if `basis` is zero, since it has no direction to project onto.
    pub fn component_parallel_to(&self, basis: &Self) -> Result<Self, Error> {
        self.check_dimension(basis)?;
        let unit = basis.normalization()?;
        let weight = self.dot_product(&unit)?;
        Ok(unit.times_scalar(weight))
    }

    /// Returns the component of `self` that is orthogonal to `basis`.
    ///
    /// Adding this to [`Vector::component_parallel_to`] yields `self` again.
    pub fn component_orthogonal_to(&self, basis: &Self) -> Result<Self, Error> {
        self.minus(&self.component_parallel_to(basis)?)
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both operands. Swapping the operands inverts its direction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongDimension`] unless both vectors are 3-dimensional.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let x = vec3(1.0, 0.0, 0.0);
    /// let y = vec3(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross_product(&y), Ok(vec3(0.0, 0.0, 1.0)));
    /// assert_eq!(y.cross_product(&x), Ok(vec3(0.0, 0.0, -1.0)));
    /// ```
    pub fn cross_product(&self, other: &Self) -> Result<Self, Error> {
        let (&[a1, a2, a3], &[b1, b2, b3]) = (self.as_slice(), other.as_slice()) else {
            let found = if self.dimension() != 3 {
                self.dimension()
            } else {
                other.dimension()
            };
            return Err(Error::WrongDimension { required: 3, found });
        };

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        Ok(cross)
    }

    /// Returns the area of the parallelogram spanned by `self` and `other` (3D only).
    pub fn area_of_parallelogram(&self, other: &Self) -> Result<f64, Error> {
        Ok(self.cross_product(other)?.magnitude())
    }

    /// Returns the area of the triangle spanned by `self` and `other` (3D only).
    pub fn area_of_triangle(&self, other: &Self) -> Result<f64, Error> {
        Ok(self.area_of_parallelogram(other)? * 0.5)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    /// Creates a vector from a non-empty array.
    ///
    /// Converting an empty array fails to compile.
    fn from(value: [f64; N]) -> Self {
        struct NonEmpty<const N: usize>;
        impl<const N: usize> NonEmpty<N> {
            const CHECK: () = assert!(N > 0, "vectors need at least one dimension");
        }
        #[allow(clippy::let_unit_value)]
        let () = NonEmpty::<N>::CHECK;

        Self(Box::new(value))
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = Error;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Vector> for Vec<f64> {
    #[inline]
    fn from(value: Vector) -> Self {
        value.into_vec()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in self {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.iter().format(", "))
    }
}

/// Constructs a 2-dimensional [`Vector`].
#[inline]
pub fn vec2(x: f64, y: f64) -> Vector {
    Vector::from([x, y])
}

/// Constructs a 3-dimensional [`Vector`].
#[inline]
pub fn vec3(x: f64, y: f64, z: f64) -> Vector {
    Vector::from([x, y, z])
}
