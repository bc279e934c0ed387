//! Implementations of `std::ops` and [`ApproxEq`].
//!
//! Only the infallible operations get operator impls. Addition and subtraction can fail on
//! mismatched dimensions, so they are only available as [`Vector::plus`] and [`Vector::minus`].

use std::ops::{Index, Mul, Neg};

use crate::approx::ApproxEq;

use super::Vector;

impl Index<usize> for Vector {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Vectors of different dimensions are never approximately equal.
impl ApproxEq for Vector {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }
}

/// Element-wise negation.
impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.times_scalar(-1.0)
    }
}

/// Element-wise negation.
impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.times_scalar(-1.0)
    }
}

/// Vector-Scalar multiplication (scaling).
impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.times_scalar(rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.times_scalar(rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, assert_approx_ne, vec2, vec3, Vector};

    #[test]
    fn index() {
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let _ = vec2(1.0, 2.0)[2];
    }

    #[test]
    fn scalar_ops() {
        assert_eq!(-vec2(1.0, -2.0), vec2(-1.0, 2.0));
        assert_eq!(-&vec2(1.0, -2.0), vec2(-1.0, 2.0));
        assert_eq!(vec2(1.0, -2.0) * 3.0, vec2(3.0, -6.0));
        assert_eq!(&vec2(1.0, -2.0) * 0.5, vec2(0.5, -1.0));
    }

    #[test]
    fn approx() {
        assert_approx_eq!(vec2(1.0, 2.0), vec2(1.0, 2.0 + 1e-12));
        assert_approx_ne!(vec2(1.0, 2.0), vec2(1.0, 2.1));
        assert_approx_ne!(vec2(0.0, 0.0), Vector::zero(3));
    }
}
