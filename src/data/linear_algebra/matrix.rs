//! # Upper triangular matrix
//!
//! A square matrix of which only the entries on or above the diagonal are stored. Row `i` of a
//! matrix of dimension `n` is an `OffsetVector` of length `n - i` starting at index `i`, so that
//! nothing is stored below the diagonal.
//!
//! All operations work row by row on those vectors.
use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use itertools::Itertools;
use num_traits::Zero;

use crate::data::linear_algebra::{DEFAULT_MATRIX_DIMENSION, MAX_MATRIX_SIZE};
use crate::data::linear_algebra::error::LinearAlgebraError;
use crate::data::linear_algebra::traits::{Element, Scalar};
use crate::data::linear_algebra::vector::OffsetVector;

/// Uses a `Vec` of row vectors as underlying data structure. The dimension is fixed at creation
/// and only changes by assigning another matrix.
///
/// Column `c` of row `r` is only valid if `r <= c`; accessing an entry below the diagonal is an
/// out of range access on that row.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TriangularMatrix<T> {
    rows: Vec<OffsetVector<T>>,
}

impl<T: Zero + Clone> TriangularMatrix<T> {
    /// Create a matrix of zeros.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Number of rows and columns, between `1` and `MAX_MATRIX_SIZE`.
    ///
    /// # Errors
    ///
    /// `InvalidMatrixSize` if the dimension is out of bounds.
    pub fn new(dimension: usize) -> Result<Self, LinearAlgebraError> {
        if !(1..=MAX_MATRIX_SIZE).contains(&dimension) {
            return Err(LinearAlgebraError::InvalidMatrixSize { dimension, });
        }

        Ok(Self::zeros(dimension))
    }

    fn zeros(dimension: usize) -> Self {
        log::debug!("Creating upper triangular matrix of dimension {}", dimension);

        Self {
            rows: (0..dimension)
                .map(|i| OffsetVector::constant(T::zero(), dimension - i, i))
                .collect(),
        }
    }
}

impl<T: Zero + Clone> Default for TriangularMatrix<T> {
    fn default() -> Self {
        Self::zeros(DEFAULT_MATRIX_DIMENSION)
    }
}

impl<T> TriangularMatrix<T> {
    /// Reinterpret a sequence of rows as a matrix.
    ///
    /// The shape of the rows is not validated: row `i` should start at `i` and all rows should
    /// end at the same upper bound. Operations on a matrix violating this fail or compare the way
    /// the row operations do.
    pub fn from_rows(rows: Vec<OffsetVector<T>>) -> Self {
        Self { rows, }
    }

    /// Number of rows, which equals the number of columns.
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Row `i`, covering columns `i..dimension`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if there is no such row.
    pub fn row(&self, i: usize) -> Result<&OffsetVector<T>, LinearAlgebraError> {
        let valid = 0..self.rows.len();
        self.rows.get(i).ok_or(LinearAlgebraError::IndexOutOfRange { index: i, valid, })
    }

    /// Mutable access to row `i`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if there is no such row.
    pub fn row_mut(&mut self, i: usize) -> Result<&mut OffsetVector<T>, LinearAlgebraError> {
        let valid = 0..self.rows.len();
        self.rows.get_mut(i).ok_or(LinearAlgebraError::IndexOutOfRange { index: i, valid, })
    }

    /// Get the value at coordinate (`i`, `j`).
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if there is no row `i`, or if `j` is not a valid column of that row,
    /// which includes all columns below the diagonal.
    pub fn get(&self, i: usize, j: usize) -> Result<&T, LinearAlgebraError> {
        self.row(i)?.get(j)
    }

    /// Get a mutable reference to the value at coordinate (`i`, `j`).
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T, LinearAlgebraError> {
        self.row_mut(i)?.get_mut(j)
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<(), LinearAlgebraError> {
        self.row_mut(i)?.set(j, value)
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> Iter<'_, OffsetVector<T>> {
        self.rows.iter()
    }

    /// Consume the matrix, keeping the rows.
    pub fn into_rows(self) -> Vec<OffsetVector<T>> {
        self.rows
    }

    fn check_dimension(&self, other: &Self) -> Result<(), LinearAlgebraError> {
        if self.dimension() == other.dimension() {
            Ok(())
        } else {
            Err(LinearAlgebraError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            })
        }
    }
}

impl<T: Element> TriangularMatrix<T> {
    /// Replace the contents of this matrix by those of `other`, including its dimension.
    ///
    /// Nothing happens when both are already equal.
    pub fn assign(&mut self, other: &Self) {
        if self == other {
            return;
        }

        if self.dimension() != other.dimension() {
            log::trace!(
                "Replacing matrix of dimension {} by one of dimension {}",
                self.dimension(), other.dimension(),
            );
        }
        self.rows.clone_from(&other.rows);
    }
}

impl<T: Scalar> TriangularMatrix<T> {
    /// Sum of two matrices of equal dimension.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the dimensions differ, or if corresponding rows don't cover the same
    /// upper bound.
    pub fn try_add(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.check_dimension(other)?;

        let rows = self.rows.iter()
            .zip_eq(&other.rows)
            .map(|(left, right)| left.try_add(right))
            .collect::<Result<_, _>>()?;

        Ok(Self { rows, })
    }

    /// Difference of two matrices of equal dimension.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the dimensions differ, or if corresponding rows don't cover the same
    /// upper bound.
    pub fn try_sub(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.check_dimension(other)?;

        let rows = self.rows.iter()
            .zip_eq(&other.rows)
            .map(|(left, right)| left.try_sub(right))
            .collect::<Result<_, _>>()?;

        Ok(Self { rows, })
    }
}

impl<T> From<Vec<OffsetVector<T>>> for TriangularMatrix<T> {
    fn from(rows: Vec<OffsetVector<T>>) -> Self {
        Self::from_rows(rows)
    }
}

/// A vector of vectors is taken to be a matrix; its own start index is dropped.
impl<T> From<OffsetVector<OffsetVector<T>>> for TriangularMatrix<T> {
    fn from(rows: OffsetVector<OffsetVector<T>>) -> Self {
        Self::from_rows(rows.into_values())
    }
}

impl<T> Index<usize> for TriangularMatrix<T> {
    type Output = OffsetVector<T>;

    fn index(&self, i: usize) -> &Self::Output {
        match self.row(i) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<usize> for TriangularMatrix<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        match self.row_mut(i) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

/// Writes one row per line, rows formatted like an `OffsetVector`.
impl<T: fmt::Display> fmt::Display for TriangularMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
