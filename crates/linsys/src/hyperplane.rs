//! Linear equations `n · x = c`.

use linsys_linalg::{
    approx::{is_near_zero, EPSILON},
    vec2, vec3, Error, Vector,
};

use crate::NoNonzeroElements;

pub(crate) mod fmt;

/// A single linear equation `normal_vector · x = constant_term`.
///
/// Geometrically, this is the set of points `x` satisfying the equation: a line in 2 dimensions,
/// a plane in 3 dimensions, and a hyperplane in general. Use [`Hyperplane::line`] and
/// [`Hyperplane::plane`] to construct the common low-dimensional cases.
///
/// A hyperplane whose normal vector is (near-)zero is *degenerate*: it describes either every point
/// (`0 = 0`) or no point at all (`0 = c`, `c ≠ 0`). Such equations have no
/// [basepoint][Self::basepoint]. They are valid values, and show up as the trailing rows of a
/// reduced [`LinearSystem`][crate::LinearSystem].
///
/// # Equality
///
/// [`PartialEq`] compares the *point sets*, not the coefficients: `x + y = 1` and `2x + 2y = 2` are
/// equal. Two hyperplanes are equal if
///
/// - both are degenerate and their constant terms agree within [`EPSILON`], or
/// - neither is degenerate, their normal vectors are parallel, and the vector connecting their
///   basepoints is orthogonal to the normal vector.
///
/// Hyperplanes of different dimensions are never equal.
#[derive(Debug, Clone)]
pub struct Hyperplane {
    normal_vector: Vector,
    constant_term: f64,
    basepoint: Option<Vector>,
}

/// The result of intersecting two lines with [`Hyperplane::intersection`].
#[derive(Debug, Clone, PartialEq)]
pub enum LineIntersection {
    /// The lines cross in exactly one point.
    Point(Vector),
    /// Both equations describe the same line.
    Coincident,
    /// The lines are parallel and distinct.
    Disjoint,
}

impl Hyperplane {
    /// Creates the hyperplane `normal_vector · x = constant_term`.
    pub fn new(normal_vector: Vector, constant_term: f64) -> Self {
        let basepoint = basepoint_of(&normal_vector, constant_term);
        Self {
            normal_vector,
            constant_term,
            basepoint,
        }
    }

    /// Creates the degenerate equation `0 = 0` in `dimension` dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is 0.
    pub fn zero(dimension: usize) -> Self {
        Self::new(Vector::zero(dimension), 0.0)
    }

    /// Creates the line `a·x + b·y = c`.
    pub fn line(a: f64, b: f64, c: f64) -> Self {
        Self::new(vec2(a, b), c)
    }

    /// Creates the plane `a·x + b·y + c·z = d`.
    pub fn plane(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::new(vec3(a, b, c), d)
    }

    #[inline]
    pub fn normal_vector(&self) -> &Vector {
        &self.normal_vector
    }

    #[inline]
    pub fn constant_term(&self) -> f64 {
        self.constant_term
    }

    /// Returns the number of variables in this equation.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.normal_vector.dimension()
    }

    /// Returns a point on this hyperplane, or [`None`] if the hyperplane is degenerate.
    ///
    /// The basepoint is zero in every coordinate except the one belonging to the first non-zero
    /// coefficient `k`, which is `constant_term / normal_vector[k]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys::{Hyperplane, linalg::vec3};
    /// let plane = Hyperplane::plane(0.0, 2.0, 1.0, 4.0);
    /// assert_eq!(plane.basepoint(), Some(&vec3(0.0, 2.0, 0.0)));
    /// assert_eq!(Hyperplane::zero(3).basepoint(), None);
    /// ```
    #[inline]
    pub fn basepoint(&self) -> Option<&Vector> {
        self.basepoint.as_ref()
    }

    /// Returns the index of the first coefficient whose magnitude is at least [`EPSILON`].
    ///
    /// # Errors
    ///
    /// Returns [`NoNonzeroElements`] if every coefficient is near zero.
    pub fn first_nonzero_index(coefficients: &[f64]) -> Result<usize, NoNonzeroElements> {
        coefficients
            .iter()
            .position(|&c| !is_near_zero(c))
            .ok_or(NoNonzeroElements)
    }

    /// Returns the index of the leading variable of this equation, or [`None`] if it is
    /// degenerate.
    pub fn pivot(&self) -> Option<usize> {
        Self::first_nonzero_index(self.normal_vector.as_slice()).ok()
    }

    /// Returns whether the normal vectors of `self` and `other` are parallel.
    ///
    /// Degenerate hyperplanes are parallel to everything.
    pub fn is_parallel(&self, other: &Self) -> Result<bool, Error> {
        self.normal_vector.is_parallel(&other.normal_vector)
    }

    /// Returns whether `point` satisfies this equation.
    ///
    /// The residual `n · point - c` is compared against [`EPSILON`], scaled by the magnitude of
    /// the terms involved so that large coefficients do not make the check impossible to pass.
    pub fn contains(&self, point: &Vector) -> Result<bool, Error> {
        let lhs = self.normal_vector.dot_product(point)?;
        let scale = 1.0 + self.normal_vector.magnitude() * point.magnitude() + self.constant_term.abs();
        Ok((lhs - self.constant_term).abs() < EPSILON * scale)
    }

    /// Intersects two lines (2-dimensional hyperplanes).
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongDimension`] unless both equations are 2-dimensional, and
    /// [`Error::ZeroVector`] if either is degenerate (and therefore not a line).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys::{Hyperplane, LineIntersection};
    /// let a = Hyperplane::line(1.0, 1.0, 2.0);
    /// let b = Hyperplane::line(1.0, -1.0, 0.0);
    /// let LineIntersection::Point(p) = a.intersection(&b)? else { unreachable!() };
    /// assert_eq!(p.as_slice(), &[1.0, 1.0]);
    ///
    /// let c = Hyperplane::line(2.0, 2.0, 4.0);
    /// assert_eq!(a.intersection(&c)?, LineIntersection::Coincident);
    /// # Ok::<_, linsys::linalg::Error>(())
    /// ```
    pub fn intersection(&self, other: &Self) -> Result<LineIntersection, Error> {
        for line in [self, other] {
            if line.dimension() != 2 {
                return Err(Error::WrongDimension {
                    required: 2,
                    found: line.dimension(),
                });
            }
            if line.normal_vector.is_zero() {
                return Err(Error::ZeroVector);
            }
        }

        if self.is_parallel(other)? {
            return Ok(if self == other {
                LineIntersection::Coincident
            } else {
                LineIntersection::Disjoint
            });
        }

        // Cramer's rule.
        let (a, b) = (self.normal_vector[0], self.normal_vector[1]);
        let (c, d) = (other.normal_vector[0], other.normal_vector[1]);
        let (k1, k2) = (self.constant_term, other.constant_term);
        let det = a * d - b * c;
        let x = (d * k1 - b * k2) / det;
        let y = (a * k2 - c * k1) / det;
        Ok(LineIntersection::Point(vec2(x, y)))
    }

    /// Multiplies both sides of the equation by `coefficient`.
    pub(crate) fn times_scalar(&self, coefficient: f64) -> Self {
        Self::new(
            self.normal_vector.times_scalar(coefficient),
            self.constant_term * coefficient,
        )
    }

    /// Divides both sides of the equation by `divisor`.
    ///
    /// Unlike `times_scalar(1.0 / divisor)`, this makes the coefficient equal to `divisor` exactly 1.
    pub(crate) fn divided_by(&self, divisor: f64) -> Self {
        let normal_vector = Vector::from_fn(self.dimension(), |i| self.normal_vector[i] / divisor);
        Self::new(normal_vector, self.constant_term / divisor)
    }

    /// Adds `coefficient` times `other` to this equation.
    pub(crate) fn plus_multiple_of(&self, coefficient: f64, other: &Self) -> Result<Self, Error> {
        let normal_vector = other
            .normal_vector
            .times_scalar(coefficient)
            .plus(&self.normal_vector)?;
        let constant_term = other.constant_term * coefficient + self.constant_term;
        Ok(Self::new(normal_vector, constant_term))
    }
}

fn basepoint_of(normal_vector: &Vector, constant_term: f64) -> Option<Vector> {
    let index = Hyperplane::first_nonzero_index(normal_vector.as_slice()).ok()?;
    let value = constant_term / normal_vector[index];
    Some(Vector::from_fn(normal_vector.dimension(), |i| {
        if i == index {
            value
        } else {
            0.0
        }
    }))
}

impl PartialEq for Hyperplane {
    fn eq(&self, other: &Self) -> bool {
        if self.dimension() != other.dimension() {
            return false;
        }

        match (self.normal_vector.is_zero(), other.normal_vector.is_zero()) {
            (true, true) => is_near_zero(self.constant_term - other.constant_term),
            (true, false) | (false, true) => false,
            (false, false) => {
                // A normal vector with magnitude above EPSILON whose coordinates are all below it
                // has no basepoint. Such an equation cannot be compared geometrically.
                let (Some(x0), Some(y0)) = (&self.basepoint, &other.basepoint) else {
                    return false;
                };
                if !matches!(self.is_parallel(other), Ok(true)) {
                    return false;
                }

                matches!(
                    x0.minus(y0)
                        .and_then(|diff| diff.is_orthogonal(&self.normal_vector)),
                    Ok(true)
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use linsys_linalg::{assert_approx_eq, Vector};

    use super::*;

    #[test]
    fn basepoint() {
        let plane = Hyperplane::plane(0.0, 0.0, 4.0, 2.0);
        assert_eq!(plane.basepoint(), Some(&vec3(0.0, 0.0, 0.5)));

        let plane = Hyperplane::plane(1e-12, -2.0, 1.0, 3.0);
        assert_eq!(plane.basepoint(), Some(&vec3(0.0, -1.5, 0.0)));
        assert_eq!(plane.pivot(), Some(1));

        let degenerate = Hyperplane::new(Vector::zero(4), 5.0);
        assert_eq!(degenerate.basepoint(), None);
        assert_eq!(degenerate.pivot(), None);
        assert_eq!(degenerate.dimension(), 4);
    }

    #[test]
    fn first_nonzero_index() {
        assert_eq!(Hyperplane::first_nonzero_index(&[0.0, 3.0, 1.0]), Ok(1));
        assert_eq!(Hyperplane::first_nonzero_index(&[-1e-3, 3.0]), Ok(0));
        assert_eq!(
            Hyperplane::first_nonzero_index(&[0.0, 1e-11, -1e-12]),
            Err(NoNonzeroElements)
        );
        assert_eq!(Hyperplane::first_nonzero_index(&[]), Err(NoNonzeroElements));
    }

    #[test]
    fn parallel_planes() {
        let a = Hyperplane::plane(-0.412, 3.806, 0.728, -3.46);
        let b = Hyperplane::plane(1.03, -9.515, -1.82, 8.65);
        assert!(a.is_parallel(&b).unwrap());
        assert_eq!(a, b);

        let a = Hyperplane::plane(2.611, 5.528, 0.283, 4.6);
        let b = Hyperplane::plane(7.715, 8.306, 5.342, 3.76);
        assert!(!a.is_parallel(&b).unwrap());
        assert_ne!(a, b);

        let a = Hyperplane::plane(-7.926, 8.625, -7.212, -7.952);
        let b = Hyperplane::plane(-2.642, 2.875, -2.404, -2.443);
        assert!(a.is_parallel(&b).unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn coincident_planes() {
        let a = Hyperplane::plane(1.0, 1.0, 1.0, 1.0);
        let b = Hyperplane::plane(2.0, 2.0, 2.0, 2.0);
        let c = Hyperplane::plane(-3.0, -3.0, -3.0, -3.0);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(a, c);
        assert_ne!(a, Hyperplane::plane(1.0, 1.0, 1.0, 2.0));
    }

    #[test]
    fn degenerate_equality() {
        let zero = Hyperplane::zero(3);
        assert_eq!(zero, Hyperplane::new(Vector::zero(3), 1e-12));
        assert_ne!(zero, Hyperplane::new(Vector::zero(3), 1.0));
        assert_ne!(zero, Hyperplane::plane(1.0, 0.0, 0.0, 0.0));
        assert_ne!(Hyperplane::plane(1.0, 0.0, 0.0, 0.0), zero);
        assert_ne!(zero, Hyperplane::zero(2));
    }

    #[test]
    fn line_intersection() {
        let a = Hyperplane::line(4.046, 2.836, 1.21);
        let b = Hyperplane::line(10.115, 7.09, 3.025);
        assert_eq!(a.intersection(&b).unwrap(), LineIntersection::Coincident);

        let a = Hyperplane::line(7.204, 3.182, 8.68);
        let b = Hyperplane::line(8.172, 4.114, 9.883);
        let LineIntersection::Point(p) = a.intersection(&b).unwrap() else {
            panic!("lines should cross");
        };
        assert_approx_eq!(p, vec2(1.172777, 0.072696)).abs(1e-6);
        assert!(a.contains(&p).unwrap());
        assert!(b.contains(&p).unwrap());

        let a = Hyperplane::line(1.182, 5.562, 6.744);
        let b = Hyperplane::line(1.773, 8.343, 9.525);
        assert_eq!(a.intersection(&b).unwrap(), LineIntersection::Disjoint);
    }

    #[test]
    fn line_intersection_errors() {
        let line = Hyperplane::line(1.0, 2.0, 3.0);
        assert_eq!(
            line.intersection(&Hyperplane::plane(1.0, 2.0, 3.0, 4.0)),
            Err(Error::WrongDimension {
                required: 2,
                found: 3
            })
        );
        assert_eq!(
            line.intersection(&Hyperplane::zero(2)),
            Err(Error::ZeroVector)
        );
    }

    #[test]
    fn contains() {
        let plane = Hyperplane::plane(1.0, 2.0, 3.0, 6.0);
        assert!(plane.contains(&vec3(1.0, 1.0, 1.0)).unwrap());
        assert!(plane.contains(plane.basepoint().unwrap()).unwrap());
        assert!(!plane.contains(&vec3(1.0, 1.0, 1.001)).unwrap());
        assert_eq!(
            plane.contains(&vec2(1.0, 1.0)),
            Err(Error::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );

        assert!(Hyperplane::zero(2).contains(&vec2(5.0, -3.0)).unwrap());
        assert!(!Hyperplane::new(Vector::zero(2), 1.0)
            .contains(&vec2(5.0, -3.0))
            .unwrap());
    }

    #[test]
    fn row_arithmetic() {
        let a = Hyperplane::plane(1.0, 2.0, 3.0, 4.0);
        let b = Hyperplane::plane(0.0, 1.0, -1.0, 2.0);

        let scaled = a.times_scalar(-2.0);
        assert_eq!(scaled.normal_vector(), &vec3(-2.0, -4.0, -6.0));
        assert_eq!(scaled.constant_term(), -8.0);
        assert_eq!(scaled, a);

        let sum = a.plus_multiple_of(-2.0, &b).unwrap();
        assert_eq!(sum.normal_vector(), &vec3(1.0, 0.0, 5.0));
        assert_eq!(sum.constant_term(), 0.0);
        assert_eq!(sum.basepoint(), Some(&vec3(0.0, 0.0, 0.0)));

        assert!(a.plus_multiple_of(1.0, &Hyperplane::line(1.0, 1.0, 1.0)).is_err());

        let divided = Hyperplane::plane(0.0, 3.0, 1.0, 7.0).divided_by(3.0);
        assert_eq!(divided.normal_vector()[1], 1.0);
        assert_eq!(divided.constant_term(), 7.0 / 3.0);
    }
}
