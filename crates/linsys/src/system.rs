//! Systems of linear equations and their elementary row operations.

use std::{fmt, ops::Index, slice};

use itertools::Itertools;
use linsys_linalg::{Error, Vector};

use crate::Hyperplane;

mod solve;

pub use solve::*;

/// An ordered list of [`Hyperplane`]s of the same dimension.
///
/// The system can be modified through the three *elementary row operations*
/// ([`swap_rows`][Self::swap_rows], [`multiply_coefficient_and_row`][Self::multiply_coefficient_and_row]
/// and [`add_multiple_times_row_to_row`][Self::add_multiple_times_row_to_row]), none of which
/// change its set of solutions. The solver methods ([`compute_triangular_form`][Self::compute_triangular_form],
/// [`compute_rref`][Self::compute_rref], [`compute_solution`][Self::compute_solution]) work on a
/// copy and leave `self` untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    planes: Vec<Hyperplane>,
    dimension: usize,
}

impl LinearSystem {
    /// Creates a system from a list of equations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if `planes` is empty, and [`Error::DimensionMismatch`] if the
    /// equations do not all have the same dimension.
    pub fn new(planes: Vec<Hyperplane>) -> Result<Self, Error> {
        let dimension = planes.first().ok_or(Error::Empty)?.dimension();
        for plane in &planes {
            check_dimension(dimension, plane)?;
        }

        Ok(Self { planes, dimension })
    }

    /// Returns the number of equations.
    #[inline]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Always `false`, since a system contains at least one equation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Returns the number of variables of every equation in the system.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn rows(&self) -> &[Hyperplane] {
        &self.planes
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Hyperplane> {
        self.planes.iter()
    }

    /// Replaces the equation at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `plane` does not have the dimension of the system.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_row(&mut self, index: usize, plane: Hyperplane) -> Result<(), Error> {
        check_dimension(self.dimension, &plane)?;
        self.planes[index] = plane;
        Ok(())
    }

    /// Swaps the equations at `row1` and `row2`.
    pub fn swap_rows(&mut self, row1: usize, row2: usize) {
        log::trace!("swap rows {row1} and {row2}");
        self.planes.swap(row1, row2);
    }

    /// Multiplies the equation at `row` by `coefficient`.
    ///
    /// `coefficient` should not be zero, as that would discard the equation.
    pub fn multiply_coefficient_and_row(&mut self, coefficient: f64, row: usize) {
        log::trace!("multiply row {row} by {coefficient}");
        self.planes[row] = self.planes[row].times_scalar(coefficient);
    }

    /// Adds `coefficient` times the equation at `row_to_add` to the one at `row_to_be_added_to`.
    pub fn add_multiple_times_row_to_row(
        &mut self,
        coefficient: f64,
        row_to_add: usize,
        row_to_be_added_to: usize,
    ) -> Result<(), Error> {
        log::trace!("add {coefficient} times row {row_to_add} to row {row_to_be_added_to}");
        let sum = self.planes[row_to_be_added_to]
            .plus_multiple_of(coefficient, &self.planes[row_to_add])?;
        self.planes[row_to_be_added_to] = sum;
        Ok(())
    }

    /// Returns whether `point` satisfies every equation of the system.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `point` does not have the dimension of the system.
    pub fn is_satisfied_by(&self, point: &Vector) -> Result<bool, Error> {
        for plane in &self.planes {
            if !plane.contains(point)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns the coefficient of variable `col` in the equation at `row`.
    fn coefficient(&self, row: usize, col: usize) -> f64 {
        self.planes[row].normal_vector()[col]
    }
}

fn check_dimension(dimension: usize, plane: &Hyperplane) -> Result<(), Error> {
    if plane.dimension() == dimension {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            expected: dimension,
            found: plane.dimension(),
        })
    }
}

impl Index<usize> for LinearSystem {
    type Output = Hyperplane;

    #[inline]
    fn index(&self, index: usize) -> &Hyperplane {
        &self.planes[index]
    }
}

impl<'a> IntoIterator for &'a LinearSystem {
    type Item = &'a Hyperplane;
    type IntoIter = slice::Iter<'a, Hyperplane>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for LinearSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Linear System:")?;
        write!(
            f,
            "{}",
            self.planes
                .iter()
                .enumerate()
                .format_with("\n", |(i, plane), g| g(&format_args!(
                    "Equation {}: {}",
                    i + 1,
                    plane
                )))
        )
    }
}
