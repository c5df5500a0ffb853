//! # Offset vector
//!
//! Wrapping a `Vec` such that it has a fixed size and is indexed from a start index onwards,
//! rather than from zero. The positions in front of the start index are not stored; arithmetic
//! treats them as zero.
use std::fmt;
use std::ops::{Index, IndexMut, Neg, Range};
use std::slice::{Iter, IterMut};

use num_traits::Zero;

use crate::data::linear_algebra::{DEFAULT_VECTOR_LENGTH, MAX_VECTOR_SIZE};
use crate::data::linear_algebra::error::LinearAlgebraError;
use crate::data::linear_algebra::traits::{Element, Scalar};

/// Uses a `Vec` as underlying data structure. Length and start index are fixed at creation and
/// only change by assigning another vector.
///
/// The valid indices are `start..start + len`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Offset<T> {
    data: Vec<T>,
    start: usize,
}

impl<T: Zero + Clone> Offset<T> {
    /// Create a vector of zeros.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of elements, between `1` and `MAX_VECTOR_SIZE`.
    /// * `start`: Index of the first element, smaller than `MAX_VECTOR_SIZE`.
    ///
    /// # Errors
    ///
    /// `InvalidSize` or `InvalidStartIndex` when the arguments are out of bounds.
    pub fn new(len: usize, start: usize) -> Result<Self, LinearAlgebraError> {
        validate_shape(len, start)?;

        Ok(Self::constant(T::zero(), len, start))
    }
}

impl<T: Clone> Offset<T> {
    /// Create a vector with all values being equal to a given value.
    ///
    /// The shape is not validated; callers are expected to have done so.
    pub(crate) fn constant(value: T, len: usize, start: usize) -> Self {
        debug_assert!(validate_shape(len, start).is_ok());

        Self { data: vec![value; len], start, }
    }
}

impl<T: Zero + Clone> Default for Offset<T> {
    fn default() -> Self {
        Self::constant(T::zero(), DEFAULT_VECTOR_LENGTH, 0)
    }
}

impl<T> Offset<T> {
    /// Create a vector from the provided data.
    ///
    /// The length of the vector is the number of values; the same bounds as for `new` apply.
    pub fn from_values(data: Vec<T>, start: usize) -> Result<Self, LinearAlgebraError> {
        validate_shape(data.len(), start)?;

        Ok(Self { data, start, })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`, a vector holds at least one element.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Index of the first element.
    pub fn start_index(&self) -> usize {
        self.start
    }

    /// The first index past the valid range, `start + len`.
    ///
    /// Two vectors can only be combined when this value is equal for both.
    pub fn upper_bound(&self) -> usize {
        self.start + self.data.len()
    }

    /// The valid indices.
    pub fn indices(&self) -> Range<usize> {
        self.start..self.upper_bound()
    }

    /// Retrieve the value at an index.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index` is not in `start..start + len`.
    pub fn get(&self, index: usize) -> Result<&T, LinearAlgebraError> {
        let data_index = self.data_index(index)?;

        Ok(&self.data[data_index])
    }

    /// Retrieve a mutable reference to the value at an index, to write through.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index` is not in `start..start + len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, LinearAlgebraError> {
        let data_index = self.data_index(index)?;

        Ok(&mut self.data[data_index])
    }

    /// Set the value at an index.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index` is not in `start..start + len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), LinearAlgebraError> {
        *self.get_mut(index)? = value;

        Ok(())
    }

    /// Iterate over the values in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the values in index order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Iterate over `(index, value)` pairs, using the logical indices.
    pub fn iter_indexed(&self) -> impl Iterator<Item=(usize, &T)> {
        self.indices().zip(self.data.iter())
    }

    /// Consume the vector, keeping the values.
    pub fn into_values(self) -> Vec<T> {
        self.data
    }

    fn data_index(&self, index: usize) -> Result<usize, LinearAlgebraError> {
        if self.indices().contains(&index) {
            Ok(index - self.start)
        } else {
            Err(LinearAlgebraError::IndexOutOfRange { index, valid: self.indices(), })
        }
    }

    fn check_upper_bound(&self, other: &Self) -> Result<(), LinearAlgebraError> {
        if self.upper_bound() == other.upper_bound() {
            Ok(())
        } else {
            Err(LinearAlgebraError::DimensionMismatch {
                left: self.upper_bound(),
                right: other.upper_bound(),
            })
        }
    }
}

impl<T: Element> Offset<T> {
    /// Replace the contents of this vector by those of `other`.
    ///
    /// Nothing happens when both are already equal. The buffer is only reallocated when the
    /// lengths differ.
    pub fn assign(&mut self, other: &Self) {
        if self == other {
            return;
        }

        if self.len() != other.len() {
            log::trace!("Reallocating vector of length {} to length {}", self.len(), other.len());
        }
        self.data.clone_from(&other.data);
        self.start = other.start;
    }

    /// Combine two vectors that cover the same upper bound.
    ///
    /// The result has the shape of the operand starting first. Where both operands hold a value,
    /// `combine(left, right)` is stored; in front of that, the values of the operand starting
    /// first are kept as they are.
    fn zip_aligned(
        &self,
        other: &Self,
        combine: impl Fn(&T, &T) -> T,
    ) -> Result<Self, LinearAlgebraError> {
        self.check_upper_bound(other)?;

        let result = if self.start <= other.start {
            let mut result = self.clone();
            let offset = other.start - self.start;
            for (value, right) in result.data[offset..].iter_mut().zip(&other.data) {
                *value = combine(&*value, right);
            }
            result
        } else {
            let mut result = other.clone();
            let offset = self.start - other.start;
            for (value, left) in result.data[offset..].iter_mut().zip(&self.data) {
                *value = combine(left, &*value);
            }
            result
        };

        Ok(result)
    }
}

impl<T: Scalar> Offset<T> {
    /// Add a scalar to every position from zero up to the upper bound.
    ///
    /// The result starts at index zero. Positions in front of this vector's start index count as
    /// zero and hold `value` afterwards.
    ///
    /// Adding zero returns an unchanged copy, keeping the original start index.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if the upper bound exceeds `MAX_VECTOR_SIZE`.
    pub fn add_scalar(&self, value: &T) -> Result<Self, LinearAlgebraError> {
        self.extend_to_zero(value, value.clone(), |element| element.clone() + value.clone())
    }

    /// Multiply each element by a scalar.
    pub fn mul_scalar(&self, value: &T) -> Self {
        Self {
            data: self.data.iter().map(|element| element.clone() * value.clone()).collect(),
            start: self.start,
        }
    }

    /// Sum of two vectors covering the same upper bound.
    ///
    /// If the start indices differ, the values of the vector starting first are kept unchanged
    /// in front of the other's start index.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the upper bounds differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.zip_aligned(other, |left, right| left.clone() + right.clone())
    }

    /// Difference of two vectors covering the same upper bound.
    ///
    /// Where both vectors hold a value the result is `self - other`. In front of that, the values
    /// of the vector starting first are kept unchanged, whichever operand that is.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the upper bounds differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.zip_aligned(other, |left, right| left.clone() - right.clone())
    }

    /// Calculate the inner product between two vectors covering the same upper bound.
    ///
    /// Only the positions where both vectors hold a value contribute.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the upper bounds differ.
    pub fn inner_product(&self, other: &Self) -> Result<T, LinearAlgebraError> {
        self.check_upper_bound(other)?;

        let overlap_start = self.start.max(other.start);
        let left = &self.data[overlap_start - self.start..];
        let right = &other.data[overlap_start - other.start..];

        Ok(left.iter().zip(right).fold(T::zero(), |total, (left, right)| {
            total + left.clone() * right.clone()
        }))
    }

    fn extend_to_zero(
        &self,
        value: &T,
        in_front: T,
        shift: impl Fn(&T) -> T,
    ) -> Result<Self, LinearAlgebraError> {
        if value.is_zero() {
            return Ok(self.clone());
        }

        let len = self.upper_bound();
        if len > MAX_VECTOR_SIZE {
            return Err(LinearAlgebraError::InvalidSize { length: len, });
        }

        let mut data = vec![in_front; self.start];
        data.reserve(self.data.len());
        data.extend(self.data.iter().map(shift));

        Ok(Self { data, start: 0, })
    }
}

impl<T: Scalar + Neg<Output=T>> Offset<T> {
    /// Subtract a scalar from every position from zero up to the upper bound.
    ///
    /// See `add_scalar`; positions in front of the start index hold `-value` afterwards.
    pub fn sub_scalar(&self, value: &T) -> Result<Self, LinearAlgebraError> {
        self.extend_to_zero(value, -value.clone(), |element| element.clone() - value.clone())
    }
}

impl<T> Index<usize> for Offset<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<usize> for Offset<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

/// Writes the values in index order, each followed by a space. The start index is not written.
impl<T: fmt::Display> fmt::Display for Offset<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for value in &self.data {
            write!(f, "{} ", value)?;
        }
        Ok(())
    }
}

fn validate_shape(len: usize, start: usize) -> Result<(), LinearAlgebraError> {
    if !(1..=MAX_VECTOR_SIZE).contains(&len) {
        return Err(LinearAlgebraError::InvalidSize { length: len, });
    }
    if start >= MAX_VECTOR_SIZE {
        return Err(LinearAlgebraError::InvalidStartIndex { start, });
    }

    Ok(())
}
