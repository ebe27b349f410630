//! Error types for card decoding.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for card operations.
pub type CardResult<T> = Result<T, CardError>;

/// Errors that can occur while loading or decoding a card image.
///
/// Every component hands the first error it hits to its caller unchanged,
/// so the kind seen by the CLI is the kind raised at the failing read.
#[derive(Debug, Error)]
pub enum CardError {
    /// The card file could not be opened or read.
    #[error("failed to read card image '{}': {source}", path.display())]
    Io {
        /// Path of the card file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A read position or resolved address lies beyond the image.
    #[error("position out of bounds: offset 0x{offset:06X} is outside the image (length 0x{len:06X})")]
    OutOfBounds {
        /// Offending byte offset.
        offset: usize,
        /// Image length in bytes.
        len: usize,
    },

    /// Not enough bytes remain for the requested record.
    #[error("buffer too small: {record} needs {needed} bytes at offset 0x{offset:06X}, only {available} remain")]
    TooSmall {
        /// Name of the record being read.
        record: &'static str,
        /// Byte offset of the read.
        offset: usize,
        /// Record size in bytes.
        needed: usize,
        /// Bytes left in the image from `offset`.
        available: usize,
    },

    /// A sample's begin address is not before its end address.
    #[error("invalid sample range: begin 0x{begin:06X} is not before end 0x{end:06X}")]
    InvalidRange {
        /// Resolved begin byte offset.
        begin: usize,
        /// Resolved end byte offset.
        end: usize,
    },
}

impl CardError {
    /// Creates an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            CardError::Io { .. } => "CARD_001",
            CardError::OutOfBounds { .. } => "CARD_002",
            CardError::TooSmall { .. } => "CARD_003",
            CardError::InvalidRange { .. } => "CARD_004",
        }
    }

    /// Error category used to group related errors.
    pub fn category(&self) -> &'static str {
        "card"
    }
}
