use super::ApproxEq;

impl ApproxEq for f64 {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
            return self == other;
        }

        (self - other).abs() <= abs_tolerance
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        if !self.is_finite() || !other.is_finite() {
            return self == other;
        }

        let largest = self.abs().max(other.abs());
        (self - other).abs() <= largest * rel_tolerance
    }
}

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    fn abs_diff_eq(&self, other: &U, abs_tolerance: f64) -> bool {
        T::abs_diff_eq(self, other, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &U, rel_tolerance: f64) -> bool {
        T::rel_diff_eq(self, other, rel_tolerance)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    fn abs_diff_eq(&self, other: &[U], abs_tolerance: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], rel_tolerance: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<Vec<U>> for Vec<T> {
    fn abs_diff_eq(&self, other: &Vec<U>, abs_tolerance: f64) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Vec<U>, rel_tolerance: f64) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }
}

/// `None` is only equal to `None`.
impl<T: ApproxEq<U>, U> ApproxEq<Option<U>> for Option<T> {
    fn abs_diff_eq(&self, other: &Option<U>, abs_tolerance: f64) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.abs_diff_eq(b, abs_tolerance),
            (None, None) => true,
            _ => false,
        }
    }

    fn rel_diff_eq(&self, other: &Option<U>, rel_tolerance: f64) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.rel_diff_eq(b, rel_tolerance),
            (None, None) => true,
            _ => false,
        }
    }
}
