//! # Linear algebra primitives
//!
//! Offset indexed vectors and the upper triangular matrices built from them.

pub mod error;
pub mod matrix;
pub mod traits;
pub mod vector;

/// Upper bound on the length of any vector, and strict upper bound on its start index.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;
/// Upper bound on the dimension of a matrix.
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Length of a vector created through `Default`.
pub const DEFAULT_VECTOR_LENGTH: usize = 10;
/// Dimension of a matrix created through `Default`.
pub const DEFAULT_MATRIX_DIMENSION: usize = 10;
