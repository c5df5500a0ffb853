//! # Vector types
//!
//! Vectors that are indexed over an arbitrary contiguous range `start..start + len`. The rows of
//! an upper triangular matrix are vectors of this kind.
pub use offset::Offset as OffsetVector;

mod offset;
