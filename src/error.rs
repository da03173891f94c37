//! Error types shared by the distance routines.

use thiserror::Error;

/// Why a bit-level Hamming distance could not be computed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitHammingError {
    #[error("Undefined for sequences of unequal length")]
    UnequalLength { left: usize, right: usize },

    /// Only characters with a single-byte UTF-8 encoding expand to 8 bits.
    #[error("Undefined for multi-byte character {ch:?} at position {position}")]
    MultiByteChar { ch: char, position: usize },
}

#[derive(Error, Debug)]
pub enum StrDistError {
    #[error("Histogram needs at least one bucket")]
    InvalidBins,

    #[error("Unknown text distance algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown text distance method: {0}")]
    UnknownMethod(String),

    #[error("{algorithm} failed: {reason}")]
    Computation {
        algorithm: &'static str,
        reason: String,
    },
}

pub type StrDistResult<T> = Result<T, StrDistError>;
