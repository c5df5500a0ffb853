//! # Errors raised by the linear algebra containers
//!
//! Every fallible operation on an `OffsetVector` or a `TriangularMatrix` reports one of these
//! variants. They signal misuse by the caller: the operation that detected the problem is
//! abandoned and none of the operands are modified.
use std::error::Error;
use std::fmt;
use std::ops::Range;

use crate::data::linear_algebra::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};

/// A `LinearAlgebraError` describes why a container operation could not be carried out.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LinearAlgebraError {
    /// A vector length outside of `[1, MAX_VECTOR_SIZE]` was requested.
    InvalidSize {
        /// The rejected length.
        length: usize,
    },
    /// A start index outside of `[0, MAX_VECTOR_SIZE)` was requested.
    InvalidStartIndex {
        /// The rejected start index.
        start: usize,
    },
    /// A matrix dimension outside of `[1, MAX_MATRIX_SIZE]` was requested.
    InvalidMatrixSize {
        /// The rejected dimension.
        dimension: usize,
    },
    /// An element was accessed outside of the valid index window.
    IndexOutOfRange {
        /// The index that was used.
        index: usize,
        /// The indices that are valid for the container that was accessed.
        valid: Range<usize>,
    },
    /// Two operands don't cover the same upper bound (or, for matrices, differ in dimension).
    DimensionMismatch {
        /// Covered upper bound of the left operand.
        left: usize,
        /// Covered upper bound of the right operand.
        right: usize,
    },
}

impl fmt::Display for LinearAlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinearAlgebraError::InvalidSize { length } => write!(
                f,
                "Invalid vector length {}, should be between 1 and {}",
                length, MAX_VECTOR_SIZE,
            ),
            LinearAlgebraError::InvalidStartIndex { start } => write!(
                f,
                "Invalid start index {}, should be smaller than {}",
                start, MAX_VECTOR_SIZE,
            ),
            LinearAlgebraError::InvalidMatrixSize { dimension } => write!(
                f,
                "Invalid matrix dimension {}, should be between 1 and {}",
                dimension, MAX_MATRIX_SIZE,
            ),
            LinearAlgebraError::IndexOutOfRange { index, valid } => write!(
                f,
                "Index {} out of range, valid indices are {}..{}",
                index, valid.start, valid.end,
            ),
            LinearAlgebraError::DimensionMismatch { left, right } => write!(
                f,
                "Dimensions don't match: {} and {}",
                left, right,
            ),
        }
    }
}

impl Error for LinearAlgebraError {}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::error::LinearAlgebraError;

    #[test]
    fn display() {
        let error = LinearAlgebraError::IndexOutOfRange { index: 0, valid: 1..2 };
        assert_eq!(error.to_string(), "Index 0 out of range, valid indices are 1..2");

        let error = LinearAlgebraError::DimensionMismatch { left: 3, right: 6 };
        assert_eq!(error.to_string(), "Dimensions don't match: 3 and 6");
    }
}
