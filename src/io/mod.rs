//! # Reading and writing of vectors and matrices
//!
//! Values are written through `Display`: a vector as its values in index order, each followed by
//! a space, and a matrix as one such line per row. Reading is the inverse: whitespace-separated
//! values are read into a vector or matrix of which the shape is already known. The start indices
//! are part of that shape and are never written or read.
use std::collections::VecDeque;
use std::fmt::Display;
use std::io::BufRead;
use std::str::FromStr;

use crate::data::linear_algebra::matrix::TriangularMatrix;
use crate::data::linear_algebra::vector::OffsetVector;
use crate::io::error::ReadError;

pub mod error;

/// Whitespace separated tokens from a reader, across line breaks.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    line_number: u64,
}

impl<R: BufRead> Tokens<R> {
    /// Wrap a reader; nothing is read until values are requested.
    pub fn new(reader: R) -> Self {
        Self { reader, pending: VecDeque::new(), line_number: 0, }
    }

    /// Parse the next token.
    ///
    /// # Errors
    ///
    /// `UnexpectedEnd` when there are no tokens left, `Parse` when the token is not a valid `T`
    /// and `IO` when reading fails.
    pub fn next_value<T>(&mut self) -> Result<T, ReadError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.next_token()? {
            Some(token) => token.parse().map_err(|error: T::Err| ReadError::Parse {
                description: error.to_string(),
                token,
                line_number: self.line_number,
            }),
            None => Err(ReadError::UnexpectedEnd { missing: 1, }),
        }
    }

    /// Parse the next `count` tokens.
    ///
    /// # Errors
    ///
    /// As `next_value`; `UnexpectedEnd` reports how many values were still missing.
    pub fn next_values<T>(&mut self, count: usize) -> Result<Vec<T>, ReadError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let mut values = Vec::with_capacity(count);
        for read in 0..count {
            match self.next_value() {
                Ok(value) => values.push(value),
                Err(ReadError::UnexpectedEnd { .. }) => {
                    return Err(ReadError::UnexpectedEnd { missing: count - read, });
                },
                Err(error) => return Err(error),
            }
        }

        Ok(values)
    }

    fn next_token(&mut self) -> Result<Option<String>, ReadError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Containers of which the values can be read from text.
pub trait ReadValues {
    /// Read exactly as many values as the container holds, in index order.
    ///
    /// The values are only stored once all of them were read; on error, `self` is unchanged.
    fn read_values<R: BufRead>(&mut self, tokens: &mut Tokens<R>) -> Result<(), ReadError>;
}

impl<T> ReadValues for OffsetVector<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn read_values<R: BufRead>(&mut self, tokens: &mut Tokens<R>) -> Result<(), ReadError> {
        let values = tokens.next_values(self.len())?;
        for (target, value) in self.iter_mut().zip(values) {
            *target = value;
        }

        Ok(())
    }
}

impl<T> ReadValues for TriangularMatrix<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn read_values<R: BufRead>(&mut self, tokens: &mut Tokens<R>) -> Result<(), ReadError> {
        let count = self.rows().map(OffsetVector::len).sum();
        let mut values = tokens.next_values(count)?.into_iter();
        for i in 0..self.dimension() {
            let row = &mut self[i];
            for (target, value) in row.iter_mut().zip(values.by_ref()) {
                *target = value;
            }
        }

        Ok(())
    }
}
