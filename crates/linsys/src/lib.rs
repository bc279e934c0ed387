//! Hyperplanes and a solver for systems of linear equations.
//!
//! A system is built from [`Hyperplane`]s (one equation `n · x = c` each), reduced to
//! [reduced row-echelon form] by Gaussian elimination, and its solution set is described as a
//! [`Parametrization`]: a basepoint plus one direction vector per free variable.
//!
//! ```
//! use linsys::{Hyperplane, LinearSystem, Solution};
//!
//! let system = LinearSystem::new(vec![
//!     Hyperplane::plane(0.0, 1.0, 1.0, 1.0),
//!     Hyperplane::plane(1.0, -1.0, 1.0, 2.0),
//!     Hyperplane::plane(1.0, 2.0, -5.0, 3.0),
//! ])?;
//!
//! let Solution::Parametrized(solution) = system.compute_solution()? else {
//!     panic!("system has a unique solution");
//! };
//! assert!(solution.is_unique());
//! assert!(system.is_satisfied_by(solution.basepoint())?);
//! # Ok::<_, linsys::linalg::Error>(())
//! ```
//!
//! The vector primitives live in the [`linsys_linalg`] crate and are re-exported as [`linalg`].
//!
//! [reduced row-echelon form]: https://en.wikipedia.org/wiki/Row_echelon_form#Reduced_row_echelon_form

use log::LevelFilter;

pub use linsys_linalg as linalg;

mod error;
mod hyperplane;
mod parametrization;
mod system;

pub use error::*;
pub use hyperplane::*;
pub use parametrization::*;
pub use system::*;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and `linsys` will log at *debug* level. Individual row operations are logged
/// at *trace* level and can be enabled with `RUST_LOG=linsys=trace`.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
