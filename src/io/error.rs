//! # Error reporting for reading of vectors and matrices
//!
//! Describes the problems encountered while reading values from text.
use std::error::Error;
use std::fmt;
use std::io;

/// A `ReadError` is created when an error was encountered during IO or parsing.
#[derive(Debug)]
pub enum ReadError {
    /// The underlying reader failed.
    IO(io::Error),
    /// A token could not be parsed as a value of the element type.
    Parse {
        /// The offending text.
        token: String,
        /// Line on which the token was found, counting from one.
        line_number: u64,
        /// Why parsing failed, as reported by the element type.
        description: String,
    },
    /// The input ended before all values were read.
    UnexpectedEnd {
        /// Number of values that were still expected.
        missing: usize,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReadError::IO(error) => error.fmt(f),
            ReadError::Parse { token, line_number, description } => write!(
                f,
                "Could not parse \"{}\" at line {}: {}",
                token, line_number, description,
            ),
            ReadError::UnexpectedEnd { missing } => write!(
                f,
                "Input ended while {} more values were expected",
                missing,
            ),
        }
    }
}

impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReadError::IO(error) => Some(error),
            ReadError::Parse { .. } | ReadError::UnexpectedEnd { .. } => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(error: io::Error) -> Self {
        ReadError::IO(error)
    }
}
