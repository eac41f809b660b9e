use std::io;

use thiserror::Error;

use crate::layout::region::RegionKind;

/// Errors raised while checking a memory configuration, before any output exists.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// The regions need more words than the memory provides.
    #[error(
        "Insufficient memory depth: the layout requires {total_needed} words, but the memory only has {depth}."
    )]
    InsufficientDepth { total_needed: usize, depth: usize },

    /// An input vector does not hold exactly the declared vector length.
    #[error("Region '{region}' holds {actual} values, but the declared vector length is {expected}.")]
    VectorLengthMismatch {
        region: RegionKind,
        expected: usize,
        actual: usize,
    },

    #[error("Memory depth must be at least one word.")]
    ZeroDepth,

    #[error("Memory word width must be at least one bit.")]
    ZeroWidth,
}

/// Errors raised while producing a memory-initialization file.
#[derive(Debug, Error)]
pub enum MifError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The output sink rejected a write.
    #[error("Failed to write memory-initialization output: {0}")]
    Io(#[from] io::Error),
}
