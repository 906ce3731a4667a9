//! Error handling utilities shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::codec::TokenId;

/// Convenient result type used throughout the crate.
pub type Result<T, E = ChartokError> = std::result::Result<T, E>;

/// Domain-specific error describing failures while loading a corpus or running the codec.
#[derive(Debug, Error)]
pub enum ChartokError {
    /// The corpus file does not exist or could not be read.
    #[error("corpus file {path:?} not found or unreadable: {source}")]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying IO error returned by the standard library.
        source: std::io::Error,
    },
    /// The corpus bytes are not valid UTF-8.
    #[error("corpus file {path:?} is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    Decode {
        /// Path of the offending corpus.
        path: PathBuf,
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
    /// `encode` received a character that is not part of the vocabulary.
    #[error("unknown character {character:?} at position {position}")]
    UnknownCharacter {
        /// The character missing from the vocabulary.
        character: char,
        /// Character offset within the encoded text.
        position: usize,
    },
    /// `decode` received an id outside `[0, vocab_size)`.
    #[error("token id {index} at position {position} is out of range for vocab size {vocab_size}")]
    IndexOutOfRange {
        /// The rejected token id.
        index: TokenId,
        /// Offset within the decoded id sequence.
        position: usize,
        /// Size of the vocabulary the codec was built from.
        vocab_size: usize,
    },
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ChartokError {
    /// Helper constructor for a corpus path that could not be read.
    pub fn not_found(source: std::io::Error, path: PathBuf) -> Self {
        Self::NotFound { path, source }
    }

    /// Returns `true` for the two lookup failures raised by the codec.
    #[must_use]
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Self::UnknownCharacter { .. } | Self::IndexOutOfRange { .. }
        )
    }
}
