//! Error types for tinylz operations.

use std::io;
use thiserror::Error;

/// The error type for tinylz encode, decode, and stream operations.
#[derive(Debug, Error)]
pub enum TinyLzError {
    /// Token field outside the packable 5-bit/3-bit range.
    ///
    /// Unreachable from a correct encoder; seeing this indicates a
    /// programming defect, not a runtime condition to recover from.
    #[error("Token field out of range: offset {offset} (max 31), length {length} (max 7)")]
    FieldOutOfRange {
        /// The rejected offset value.
        offset: usize,
        /// The rejected length value.
        length: usize,
    },

    /// Back-reference pointing before the start of the decoded output.
    ///
    /// The token stream is corrupt or was produced with a larger window;
    /// decoding stops immediately rather than reading out of bounds.
    #[error("Invalid back-reference distance: {distance} exceeds history size {history_size}")]
    InvalidDistance {
        /// The invalid distance value.
        distance: usize,
        /// Number of bytes decoded so far.
        history_size: usize,
    },

    /// Persisted token stream is not a whole number of 2-byte tokens.
    #[error("Truncated token stream: {len} bytes is not a multiple of 2")]
    TruncatedStream {
        /// Byte length of the malformed stream.
        len: usize,
    },

    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for tinylz operations.
pub type Result<T> = std::result::Result<T, TinyLzError>;

impl TinyLzError {
    /// Create a field-out-of-range error.
    pub fn field_out_of_range(offset: usize, length: usize) -> Self {
        Self::FieldOutOfRange { offset, length }
    }

    /// Create an invalid distance error.
    pub fn invalid_distance(distance: usize, history_size: usize) -> Self {
        Self::InvalidDistance {
            distance,
            history_size,
        }
    }

    /// Create a truncated stream error.
    pub fn truncated_stream(len: usize) -> Self {
        Self::TruncatedStream { len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TinyLzError::field_out_of_range(40, 3);
        assert!(err.to_string().contains("out of range"));

        let err = TinyLzError::invalid_distance(12, 4);
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("4"));

        let err = TinyLzError::truncated_stream(7);
        assert!(err.to_string().contains("multiple of 2"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: TinyLzError = io_err.into();
        assert!(matches!(err, TinyLzError::Io(_)));
    }
}
