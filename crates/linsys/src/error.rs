use thiserror::Error;

/// Signals that a sequence of coefficients contains no element whose magnitude exceeds
/// [`EPSILON`][crate::linalg::approx::EPSILON].
///
/// Returned by [`Hyperplane::first_nonzero_index`][crate::Hyperplane::first_nonzero_index]. The
/// rest of the API turns it into domain state instead (a missing basepoint, a row without a pivot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no nonzero elements found")]
pub struct NoNonzeroElements;

/// Reasons why solving a [`LinearSystem`][crate::LinearSystem] did not produce a
/// [`Parametrization`][crate::Parametrization].
///
/// [`LinearSystem::compute_solution`][crate::LinearSystem::compute_solution] reports the first two
/// variants as a [`Solution`][crate::Solution] and only propagates [`SolveError::Linalg`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The system contains a contradictory equation (`0 = c` with `c ≠ 0`).
    #[error("no solutions")]
    NoSolutions,

    /// The system has free variables, and the caller asked for those to be rejected.
    #[error("infinitely many solutions")]
    InfiniteSolutions,

    #[error(transparent)]
    Linalg(#[from] linsys_linalg::Error),
}
