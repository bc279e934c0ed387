//! Gaussian elimination and solution parametrization.

use std::fmt;

use linsys_linalg::{approx::is_near_zero, Error, Vector};

use crate::{LinearSystem, Parametrization, SolveError};

/// Configures [`LinearSystem::compute_solution_with`].
///
/// # Examples
///
/// ```
/// # use linsys::{Hyperplane, LinearSystem, Solution, SolveOptions};
/// let system = LinearSystem::new(vec![Hyperplane::plane(1.0, 1.0, 1.0, 1.0)])?;
/// assert!(matches!(system.compute_solution()?, Solution::Parametrized(_)));
///
/// let options = SolveOptions::default().reject_free_variables(true);
/// assert_eq!(system.compute_solution_with(options)?, Solution::InfiniteSolutions);
/// # Ok::<_, linsys::linalg::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    reject_free_variables: bool,
}

impl SolveOptions {
    /// Sets whether systems with free variables are reported as
    /// [`Solution::InfiniteSolutions`] instead of being parametrized.
    ///
    /// By default, free variables are parametrized.
    pub fn reject_free_variables(self, reject: bool) -> Self {
        Self {
            reject_free_variables: reject,
        }
    }
}

/// The outcome of solving a [`LinearSystem`].
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// The system is consistent; its solutions are described by the [`Parametrization`].
    Parametrized(Parametrization),
    /// The system contains contradictory equations.
    NoSolutions,
    /// The system has free variables and [`SolveOptions::reject_free_variables`] was set.
    InfiniteSolutions,
}

impl Solution {
    pub fn parametrization(&self) -> Option<&Parametrization> {
        match self {
            Self::Parametrized(p) => Some(p),
            Self::NoSolutions | Self::InfiniteSolutions => None,
        }
    }

    pub fn into_parametrization(self) -> Option<Parametrization> {
        match self {
            Self::Parametrized(p) => Some(p),
            Self::NoSolutions | Self::InfiniteSolutions => None,
        }
    }

    /// Returns whether the system has exactly one solution.
    pub fn is_unique(&self) -> bool {
        self.parametrization().map_or(false, Parametrization::is_unique)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parametrized(p) => fmt::Display::fmt(p, f),
            Self::NoSolutions => f.write_str("No solutions"),
            Self::InfiniteSolutions => f.write_str("Infinitely many solutions"),
        }
    }
}

impl LinearSystem {
    /// Brings a copy of the system into triangular (row-echelon) form.
    ///
    /// Every row's first non-zero coefficient is strictly to the right of the previous row's.
    /// Equations that are eliminated entirely become degenerate rows at the bottom of the system.
    pub fn compute_triangular_form(&self) -> Result<Self, Error> {
        let mut system = self.clone();
        let mut col = 0;

        for row in 0..system.len() {
            while col < system.dimension() {
                if is_near_zero(system.coefficient(row, col))
                    && !system.swap_with_row_below_for_nonzero_coefficient_if_able(row, col)
                {
                    col += 1;
                    continue;
                }

                system.clear_coefficients_below(row, col)?;
                col += 1;
                break;
            }
        }

        Ok(system)
    }

    /// Brings a copy of the system into reduced row-echelon form.
    ///
    /// In addition to the triangular form, every pivot is exactly 1 and is the only non-zero
    /// coefficient in its column.
    pub fn compute_rref(&self) -> Result<Self, Error> {
        let mut system = self.compute_triangular_form()?;
        let pivots = system.pivot_indices();

        for (row, pivot) in pivots.into_iter().enumerate().rev() {
            let Some(col) = pivot else { continue };
            system.scale_row_to_make_coefficient_equal_one(row, col);
            system.clear_coefficients_above(row, col)?;
        }

        Ok(system)
    }

    /// Returns the column of the first non-zero coefficient of every row, or [`None`] for
    /// degenerate rows.
    pub fn pivot_indices(&self) -> Vec<Option<usize>> {
        self.planes.iter().map(|plane| plane.pivot()).collect()
    }

    /// Solves the system, parametrizing any free variables.
    ///
    /// Equivalent to `compute_solution_with(SolveOptions::default())`.
    pub fn compute_solution(&self) -> Result<Solution, Error> {
        self.compute_solution_with(SolveOptions::default())
    }

    /// Solves the system.
    ///
    /// Free variables are taken in ascending column order, and each contributes one direction
    /// vector to the resulting [`Parametrization`].
    pub fn compute_solution_with(&self, options: SolveOptions) -> Result<Solution, Error> {
        match self.do_gaussian_elimination_and_parametrization(options) {
            Ok(parametrization) => Ok(Solution::Parametrized(parametrization)),
            Err(SolveError::NoSolutions) => Ok(Solution::NoSolutions),
            Err(SolveError::InfiniteSolutions) => Ok(Solution::InfiniteSolutions),
            Err(SolveError::Linalg(e)) => Err(e),
        }
    }

    fn do_gaussian_elimination_and_parametrization(
        &self,
        options: SolveOptions,
    ) -> Result<Parametrization, SolveError> {
        let rref = self.compute_rref()?;
        rref.raise_if_contradictory_equation()?;

        let pivots = rref.pivot_indices();
        if options.reject_free_variables {
            rref.raise_if_too_few_pivots(&pivots)?;
        }

        rref.extract_parametrization(&pivots).map_err(Into::into)
    }

    fn swap_with_row_below_for_nonzero_coefficient_if_able(
        &mut self,
        row: usize,
        col: usize,
    ) -> bool {
        match (row + 1..self.len()).find(|&k| !is_near_zero(self.coefficient(k, col))) {
            Some(k) => {
                self.swap_rows(row, k);
                true
            }
            None => false,
        }
    }

    fn clear_coefficients_below(&mut self, row: usize, col: usize) -> Result<(), Error> {
        let beta = self.coefficient(row, col);
        for k in row + 1..self.len() {
            let gamma = self.coefficient(k, col);
            self.add_multiple_times_row_to_row(-gamma / beta, row, k)?;
        }
        Ok(())
    }

    fn scale_row_to_make_coefficient_equal_one(&mut self, row: usize, col: usize) {
        let beta = self.coefficient(row, col);
        log::trace!("divide row {row} by {beta}");
        self.planes[row] = self.planes[row].divided_by(beta);
    }

    /// Requires the pivot at (`row`, `col`) to be 1.
    fn clear_coefficients_above(&mut self, row: usize, col: usize) -> Result<(), Error> {
        for k in 0..row {
            let alpha = -self.coefficient(k, col);
            self.add_multiple_times_row_to_row(alpha, row, k)?;
        }
        Ok(())
    }

    fn raise_if_contradictory_equation(&self) -> Result<(), SolveError> {
        for (row, plane) in self.planes.iter().enumerate() {
            if plane.pivot().is_none() && !is_near_zero(plane.constant_term()) {
                log::debug!("row {row} is contradictory: {plane}");
                return Err(SolveError::NoSolutions);
            }
        }
        Ok(())
    }

    fn raise_if_too_few_pivots(&self, pivots: &[Option<usize>]) -> Result<(), SolveError> {
        let pivot_count = pivots.iter().flatten().count();
        if pivot_count < self.dimension() {
            log::debug!(
                "{pivot_count} pivots for {} variables, rejecting free variables",
                self.dimension()
            );
            return Err(SolveError::InfiniteSolutions);
        }
        Ok(())
    }

    /// Requires `self` to be in reduced row-echelon form and consistent.
    fn extract_parametrization(&self, pivots: &[Option<usize>]) -> Result<Parametrization, Error> {
        let dimension = self.dimension();

        // pivot_rows[col] is the row whose pivot is in column `col`.
        let mut pivot_rows = vec![None; dimension];
        for (row, pivot) in pivots.iter().enumerate() {
            if let Some(col) = *pivot {
                pivot_rows[col] = Some(row);
            }
        }

        let free_variables = (0..dimension)
            .filter(|&col| pivot_rows[col].is_none())
            .collect::<Vec<_>>();
        log::debug!("pivots: {pivots:?}, free variables: {free_variables:?}");

        let direction_vectors = free_variables
            .iter()
            .map(|&free| {
                Vector::from_fn(dimension, |i| {
                    if i == free {
                        1.0
                    } else {
                        pivot_rows[i].map_or(0.0, |row| -self.coefficient(row, free))
                    }
                })
            })
            .collect();
        let basepoint = Vector::from_fn(dimension, |i| {
            pivot_rows[i].map_or(0.0, |row| self.planes[row].constant_term())
        });

        Parametrization::new(basepoint, direction_vectors)
    }
}

#[cfg(test)]
mod tests {
    use linsys_linalg::{assert_approx_eq, vec3};

    use crate::Hyperplane;

    use super::*;

    fn system(planes: &[([f64; 3], f64)]) -> LinearSystem {
        LinearSystem::new(
            planes
                .iter()
                .map(|&(normal, constant)| Hyperplane::new(normal.into(), constant))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn pivot_indices() {
        let s = system(&[
            ([1.0, 1.0, 1.0], 1.0),
            ([0.0, 1.0, 0.0], 2.0),
            ([1.0, 1.0, -1.0], 3.0),
            ([1.0, 0.0, -2.0], 2.0),
            ([0.0, 0.0, 1e-11], 2.0),
        ]);
        assert_eq!(
            s.pivot_indices(),
            [Some(0), Some(1), Some(0), Some(0), None]
        );
    }

    #[test]
    fn triangular_form() {
        let s = system(&[([1.0, 1.0, 1.0], 1.0), ([0.0, 1.0, 1.0], 2.0)]);
        let t = s.compute_triangular_form().unwrap();
        assert_eq!(t, s);

        let s = system(&[
            ([1.0, 1.0, 1.0], 1.0),
            ([0.0, 1.0, 1.0], 2.0),
            ([1.0, 1.0, 1.0], 2.0),
        ]);
        let t = s.compute_triangular_form().unwrap();
        assert_eq!(t[0], s[0]);
        assert_eq!(t[1], s[1]);
        assert_eq!(t[2], Hyperplane::new(Vector::zero(3), 1.0));

        let s = system(&[
            ([0.0, 1.0, 1.0], 1.0),
            ([1.0, -1.0, 1.0], 2.0),
            ([1.0, 2.0, -5.0], 3.0),
        ]);
        let t = s.compute_triangular_form().unwrap();
        assert_eq!(t[0], Hyperplane::plane(1.0, -1.0, 1.0, 2.0));
        assert_eq!(t[1], Hyperplane::plane(0.0, 1.0, 1.0, 1.0));
        assert_eq!(t[2], Hyperplane::plane(0.0, 0.0, -9.0, -2.0));
        assert_eq!(t.pivot_indices(), [Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn swap_scans_all_rows_below() {
        let s = system(&[
            ([0.0, 1.0, 0.0], 1.0),
            ([0.0, 0.0, 1.0], 2.0),
            ([3.0, 0.0, 0.0], 3.0),
        ]);
        let t = s.compute_triangular_form().unwrap();
        assert_eq!(t.pivot_indices(), [Some(0), Some(1), Some(2)]);
        assert_eq!(t[0], Hyperplane::plane(3.0, 0.0, 0.0, 3.0));
    }

    #[track_caller]
    fn assert_row(plane: &Hyperplane, normal: [f64; 3], constant: f64) {
        assert_approx_eq!(*plane.normal_vector(), Vector::from(normal));
        assert_approx_eq!(plane.constant_term(), constant);
    }

    #[test]
    fn rref() {
        let s = system(&[([1.0, 1.0, 1.0], 1.0), ([0.0, 1.0, 1.0], 2.0)]);
        let r = s.compute_rref().unwrap();
        assert_row(&r[0], [1.0, 0.0, 0.0], -1.0);
        assert_row(&r[1], [0.0, 1.0, 1.0], 2.0);

        let s = system(&[([1.0, 1.0, 1.0], 1.0), ([1.0, 1.0, 1.0], 2.0)]);
        let r = s.compute_rref().unwrap();
        assert_row(&r[0], [1.0, 1.0, 1.0], 1.0);
        assert_row(&r[1], [0.0, 0.0, 0.0], 1.0);

        let s = system(&[
            ([1.0, 1.0, 1.0], 1.0),
            ([0.0, 1.0, 0.0], 2.0),
            ([1.0, 1.0, -1.0], 3.0),
            ([1.0, 0.0, -2.0], 2.0),
        ]);
        let r = s.compute_rref().unwrap();
        assert_row(&r[0], [1.0, 0.0, 0.0], 0.0);
        assert_row(&r[1], [0.0, 1.0, 0.0], 2.0);
        assert_row(&r[2], [0.0, 0.0, 1.0], -1.0);
        assert_row(&r[3], [0.0, 0.0, 0.0], 0.0);
        // Same plane as `-2·x_3 = 2`, but only the scaled row is in reduced form.
        assert_eq!(r[2], Hyperplane::plane(0.0, 0.0, -2.0, 2.0));
        assert_eq!(r[2].normal_vector()[2], 1.0);

        let s = system(&[
            ([0.0, 1.0, 1.0], 1.0),
            ([1.0, -1.0, 1.0], 2.0),
            ([1.0, 2.0, -5.0], 3.0),
        ]);
        let r = s.compute_rref().unwrap();
        assert_row(&r[0], [1.0, 0.0, 0.0], 23.0 / 9.0);
        assert_row(&r[1], [0.0, 1.0, 0.0], 7.0 / 9.0);
        assert_row(&r[2], [0.0, 0.0, 1.0], 2.0 / 9.0);
    }

    #[test]
    fn rref_pivots_are_one() {
        let s = system(&[
            ([3.0, 1.0, 1.0], 1.0),
            ([0.0, 7.0, 1.0], 2.0),
            ([0.0, 0.0, 0.3], 3.0),
        ]);
        let r = s.compute_rref().unwrap();
        for (row, pivot) in r.pivot_indices().into_iter().enumerate() {
            let col = pivot.unwrap();
            assert_eq!(r[row].normal_vector()[col], 1.0);
            for other in 0..r.len() {
                if other != row {
                    assert_approx_eq!(r[other].normal_vector()[col], 0.0);
                }
            }
        }
    }

    #[test]
    fn rref_is_idempotent() {
        let s = system(&[
            ([5.862, 1.178, -10.366], -8.15),
            ([-2.931, -0.589, 5.183], -4.075),
            ([1.0, 2.0, 3.0], 4.0),
            ([2.0, 4.0, 6.0], 8.0),
        ]);
        let r = s.compute_rref().unwrap();
        let rr = r.compute_rref().unwrap();
        assert_eq!(r.pivot_indices(), rr.pivot_indices());
        for (a, b) in r.iter().zip(&rr) {
            assert_approx_eq!(a.constant_term(), b.constant_term());
        }
    }

    #[test]
    fn unique_solution() {
        let s = system(&[
            ([0.0, 1.0, 1.0], 1.0),
            ([1.0, -1.0, 1.0], 2.0),
            ([1.0, 2.0, -5.0], 3.0),
        ]);
        let solution = s.compute_solution().unwrap();
        assert!(solution.is_unique());
        let p = solution.into_parametrization().unwrap();
        assert_approx_eq!(*p.basepoint(), vec3(23.0 / 9.0, 7.0 / 9.0, 2.0 / 9.0));
        assert!(s.is_satisfied_by(p.basepoint()).unwrap());

        let s = system(&[
            ([1.0, 1.0, 1.0], 1.0),
            ([0.0, 1.0, 0.0], 2.0),
            ([1.0, 1.0, -1.0], 3.0),
            ([1.0, 0.0, -2.0], 2.0),
        ]);
        let p = s.compute_solution().unwrap().into_parametrization().unwrap();
        assert!(p.is_unique());
        assert_approx_eq!(*p.basepoint(), vec3(0.0, 2.0, -1.0));
    }

    #[test]
    fn no_solutions() {
        let s = system(&[([1.0, 1.0, 1.0], 1.0), ([1.0, 1.0, 1.0], 2.0)]);
        let solution = s.compute_solution().unwrap();
        assert_eq!(solution, Solution::NoSolutions);
        assert_eq!(solution.parametrization(), None);
        assert!(!solution.is_unique());
        assert_eq!(solution.to_string(), "No solutions");

        let options = SolveOptions::default().reject_free_variables(true);
        assert_eq!(s.compute_solution_with(options).unwrap(), Solution::NoSolutions);
    }

    #[test]
    fn free_variables() {
        let s = system(&[([1.0, 1.0, 1.0], 1.0)]);
        let p = s.compute_solution().unwrap().into_parametrization().unwrap();
        assert_eq!(p.basepoint(), &vec3(1.0, 0.0, 0.0));
        assert_eq!(
            p.direction_vectors(),
            &[vec3(-1.0, 1.0, 0.0), vec3(-1.0, 0.0, 1.0)]
        );
        for params in [[0.0, 0.0], [1.0, -1.0], [2.5, 7.0]] {
            assert!(s.is_satisfied_by(&p.point_at(&params).unwrap()).unwrap());
        }

        let options = SolveOptions::default().reject_free_variables(true);
        let solution = s.compute_solution_with(options).unwrap();
        assert_eq!(solution, Solution::InfiniteSolutions);
        assert_eq!(solution.to_string(), "Infinitely many solutions");
    }

    #[test]
    fn free_variable_in_the_middle() {
        let s = system(&[([1.0, 2.0, 0.0], 3.0), ([0.0, 0.0, 1.0], 4.0)]);
        let p = s.compute_solution().unwrap().into_parametrization().unwrap();
        assert_eq!(p.basepoint(), &vec3(3.0, 0.0, 4.0));
        assert_eq!(p.direction_vectors(), &[vec3(-2.0, 1.0, 0.0)]);
    }

    #[test]
    fn input_is_unchanged() {
        let s = system(&[
            ([0.0, 1.0, 1.0], 1.0),
            ([1.0, -1.0, 1.0], 2.0),
            ([1.0, 2.0, -5.0], 3.0),
        ]);
        let copy = s.clone();
        s.compute_triangular_form().unwrap();
        s.compute_rref().unwrap();
        s.compute_solution().unwrap();
        for (a, b) in s.iter().zip(&copy) {
            assert_eq!(a.normal_vector(), b.normal_vector());
            assert_eq!(a.constant_term(), b.constant_term());
        }
    }
}
