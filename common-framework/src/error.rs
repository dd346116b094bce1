//! Errors shared by the parsing primitives.

use thiserror::Error;

/// Result type used across the framework crates.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An element access or substring start fell outside `[0, length)`.
    #[error("index {index} is out of range for length {length}")]
    IndexOutOfRange { index: isize, length: usize },

    /// An [`IdSequence`](crate::IdSequence) has issued `i32::MAX`.
    #[error("id sequence exhausted after issuing {last}")]
    IdsExhausted { last: i32 },
}

impl Error {
    pub fn out_of_range(index: isize, length: usize) -> Self {
        Error::IndexOutOfRange { index, length }
    }
}

/// Checks `index` against `length`, returning it as a `usize` when valid.
pub fn check_index(index: isize, length: usize) -> Result<usize> {
    if index < 0 || index as usize >= length {
        return Err(Error::out_of_range(index, length));
    }
    Ok(index as usize)
}
