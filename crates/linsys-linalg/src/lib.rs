//! Vectors with a runtime dimension, plus the tolerance and approximate-comparison tools shared by
//! the `linsys` solver.
//!
//! # Goals & Non-Goals
//!
//! - Vectors are dynamically-sized. The number of variables of a system of equations is a runtime
//!   property, and mixing dimensions is reported as an [`Error`] instead of being rejected by the
//!   type checker.
//! - Only [`f64`] elements are supported. The solver's tolerance ([`approx::EPSILON`]) is far below
//!   what `f32` can represent around 1.0, so being generic over the element type would be a trap.
//! - Vectors are immutable values. Every operation returns a new vector.
//! - Fallible operations return [`Result`]; nothing in this crate panics on well-typed input,
//!   except for explicitly documented preconditions (such as asking for a 0-dimensional vector).

pub mod approx;
mod error;
mod vector;

pub use error::*;
pub use vector::*;
