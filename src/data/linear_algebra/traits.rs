//! # Requirements on the values stored in vectors and matrices
//!
//! The containers themselves only need to clone and compare their values. The arithmetic
//! operations additionally need the usual operators and an additive identity, used for the
//! implicitly zero region in front of a vector's start index.
//!
//! Both traits are implemented automatically for all types satisfying their bounds. Negation is
//! not part of `Scalar`; only subtracting a scalar needs it, and that operation asks for it on its
//! own so that unsigned types can still be added and multiplied.
use std::fmt::Debug;
use std::ops::{Mul, Sub};

use num_traits::Zero;

/// Element of an `OffsetVector` or `TriangularMatrix`.
pub trait Element: PartialEq + Clone + Debug {
}
impl<T: PartialEq + Clone + Debug> Element for T {
}

/// Element that the arithmetic operations are defined for.
///
/// `Zero` brings in addition; the built-in integers, the floats and exact rationals all qualify.
pub trait Scalar:
    Element +
    Zero +
    Sub<Output=Self> +
    Mul<Output=Self>
{
}
impl<T> Scalar for T
where
    T: Element + Zero + Sub<Output=T> + Mul<Output=T>,
{
}
