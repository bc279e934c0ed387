use thiserror::Error;

/// Errors returned by fallible vector operations.
///
/// These indicate misuse by the caller (mixing vectors of different sizes, asking for the direction
/// of a zero vector, ...) and are never produced by well-formed inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// Two operands that must share a dimension do not.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The operation needs a direction, but the vector has (near-)zero magnitude.
    #[error("the zero vector has no direction")]
    ZeroVector,

    /// The operation is only defined in a specific dimension (eg. the cross product).
    #[error("operation requires {required}-dimensional vectors, found {found} dimensions")]
    WrongDimension { required: usize, found: usize },

    /// Attempted to create a vector (or a collection of equations) without any elements.
    #[error("coordinates must be nonempty")]
    Empty,
}
