//! Tolerances and approximate equality.
//!
//! All near-zero decisions in this crate and in `linsys` go through [`EPSILON`]. Elimination
//! accumulates floating-point noise in every row operation, and a coefficient that should be zero
//! routinely comes out as something like `1e-16`. Treating such values as non-zero would produce
//! bogus pivots, so everything below [`EPSILON`] in magnitude is considered to be zero.

mod impls;

use std::{fmt, panic::Location};

/// Magnitude below which a value is considered to be zero.
pub const EPSILON: f64 = 1e-10;

/// Returns whether `value` is within [`EPSILON`] of zero.
///
/// # Examples
///
/// ```
/// # use linsys_linalg::approx::is_near_zero;
/// assert!(is_near_zero(0.1 + 0.2 - 0.3));
/// assert!(!is_near_zero(0.001));
/// ```
#[inline]
pub fn is_near_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of their elements are, and
/// if they have the same shape (eg. vectors of different dimensions are never equal).
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to `abs_tolerance`,
    /// the values are considered to be equal.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: f64) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to the largest of
    /// the two values times `rel_tolerance`, the values are considered to be equal.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: f64) -> bool;
}

/// Default tolerance for absolute comparisons done by [`assert_approx_eq!`][crate::assert_approx_eq].
pub const DEFAULT_ABS_TOLERANCE: f64 = EPSILON;
/// Default tolerance for relative comparisons done by [`assert_approx_eq!`][crate::assert_approx_eq].
pub const DEFAULT_REL_TOLERANCE: f64 = EPSILON;

/// Assertion guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped. Before that, [`Asserter::abs`] and
/// [`Asserter::rel`] can be used to pick the comparison and its tolerance. If both are called, the
/// values are equal if *either* comparison says so.
///
/// Without any configuration, the values compare equal if they are within
/// [`DEFAULT_ABS_TOLERANCE`] of each other, or within a relative tolerance of
/// [`DEFAULT_REL_TOLERANCE`].
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug + ?Sized,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<f64>,
    rel: Option<f64>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug + ?Sized,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
        }
    }

    /// Compare the values by their absolute difference.
    ///
    /// This is the right choice for values that are close to zero, such as the residual of an
    /// equation or a dot product that is expected to vanish.
    pub fn abs(&mut self, abs: f64) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compare the values by their difference relative to the larger of the two.
    ///
    /// Any non-zero number only compares equal to 0.0 with a relative tolerance of at least 1.0, so
    /// this is a poor choice for values near zero.
    pub fn rel(&mut self, rel: f64) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    fn equal(&self) -> bool {
        let abs = self
            .abs
            .map_or(false, |abs| self.left.abs_diff_eq(self.right, abs));
        let rel = self
            .rel
            .map_or(false, |rel| self.left.rel_diff_eq(self.right, rel));
        abs || rel
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug + ?Sized,
{
    // `#[track_caller]` has no effect on `drop`, so the location is captured in `new` instead.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() {
            self.abs = Some(DEFAULT_ABS_TOLERANCE);
            self.rel = Some(DEFAULT_REL_TOLERANCE);
        }

        let equal = self.equal();
        let failed = match self.kind {
            AssertionKind::Eq => !equal,
            AssertionKind::Ne => equal,
        };
        if failed {
            assert_failed_inner(&self.left, &self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed_inner(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    // The panic location points into `drop`, so the real one is part of the message.
    match args {
        Some(args) => panic!(
            r#"assertion `left {op} right` failed at {location}: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`][approx::Asserter] that can be used to
/// choose the comparison and tolerance.
///
/// # Examples
///
/// ```
/// # use linsys_linalg::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// assert_approx_eq!(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.05)).abs(0.1);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// ```
///
/// [approx::Asserter]: crate::approx::Asserter
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// Also see [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use linsys_linalg::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(vec2(1.0, 0.0), vec2(0.0, 1.0));
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "rows differ")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "rows differ");
    }

    #[test]
    fn near_zero() {
        assert!(is_near_zero(0.0));
        assert!(is_near_zero(-0.0));
        assert!(is_near_zero(9e-11));
        assert!(is_near_zero(-9e-11));
        assert!(!is_near_zero(1e-10));
        assert!(!is_near_zero(-1e-9));
        assert!(!is_near_zero(f64::NAN));
    }

    #[test]
    fn default_tolerance() {
        assert_approx_eq!(1.0, 1.0 + 1e-12);
        assert_approx_eq!(1e12, 1e12 + 1.0);
        assert_approx_ne!(1.0, 1.0 + 1e-8);
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
        assert_approx_ne!(0.0, 0.00001).rel(0.5);
    }

    #[test]
    fn negative() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_ne!(1.0, -1.0).abs(1.0);
        assert_approx_eq!(1.0, -1.0).abs(2.0);
        assert_approx_eq!(-1.0, -1.0).abs(0.0);
        assert_approx_eq!(-1.0, -1.0).rel(0.0);
    }

    #[test]
    fn nan_and_inf() {
        assert_approx_ne!(f64::NAN, f64::NAN).abs(1.0);
        assert_approx_ne!(f64::NAN, 0.0).rel(1.0);
        assert_approx_eq!(f64::INFINITY, f64::INFINITY).abs(0.0);
        assert_approx_ne!(f64::INFINITY, f64::NEG_INFINITY).abs(1.0);
        assert_approx_ne!(f64::INFINITY, f64::MAX).rel(10000.0);
    }

    #[test]
    fn slices() {
        assert_approx_eq!(vec![1.0, 2.0], vec![1.0, 2.0 + 1e-12]);
        assert_approx_ne!(vec![1.0, 2.0], vec![1.0, 2.0, 3.0]);
        assert_approx_eq!(Some(1.0), Some(1.0 + 1e-12));
        assert_approx_ne!(Some(1.0), None);
    }
}
