//! # Offset indexed vectors and upper triangular matrices
//!
//! A vector in this crate is indexed over an arbitrary range `start..start + len` instead of
//! `0..len`. Positions in front of the start index are not stored and count as zero in
//! arithmetic. An upper triangular matrix is a sequence of such vectors, row `i` starting at
//! column `i`, so that nothing below the diagonal is stored.
//!
//! All containers own their values and are copied deeply. Operations that can fail return a
//! `LinearAlgebraError` and leave their operands unchanged.
#![warn(missing_docs)]

pub mod data;
pub mod io;
