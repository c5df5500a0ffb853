//! # Storing of vectors and matrices in memory
//!
//! This module provides the container types and the requirements on the values they hold.

pub mod linear_algebra;
