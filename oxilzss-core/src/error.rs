//! Error types for OxiLzss operations.
//!
//! This module provides the error type shared by the encoder and decoder,
//! covering I/O failures from the underlying stream, use of a closed
//! instance, and malformed compressed data.

use std::io;
use thiserror::Error;

/// The main error type for LZSS operations.
#[derive(Debug, Error)]
pub enum LzssError {
    /// I/O error from the underlying source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Operation attempted on a closed encoder or decoder.
    #[error("stream is closed")]
    Closed,

    /// A match token referenced a position outside the window.
    #[error("invalid match offset: {offset} not below window size {window_size}")]
    InvalidOffset {
        /// The out-of-range offset value.
        offset: usize,
        /// Size of the sliding window.
        window_size: usize,
    },

    /// The source ended in the middle of a token.
    #[error("unexpected end of stream: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },
}

/// Result type alias for OxiLzss operations.
pub type Result<T> = std::result::Result<T, LzssError>;

impl LzssError {
    /// Create an invalid offset error.
    pub fn invalid_offset(offset: usize, window_size: usize) -> Self {
        Self::InvalidOffset {
            offset,
            window_size,
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }
}

impl From<LzssError> for io::Error {
    fn from(err: LzssError) -> Self {
        match err {
            LzssError::Io(err) => err,
            LzssError::InvalidOffset { .. } | LzssError::UnexpectedEof { .. } => {
                io::Error::new(io::ErrorKind::InvalidData, err)
            }
            LzssError::Closed => io::Error::other(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LzssError::invalid_offset(5000, 4096);
        assert!(err.to_string().contains("5000"));
        assert!(err.to_string().contains("4096"));

        let err = LzssError::unexpected_eof(2);
        assert!(err.to_string().contains("2 more bytes"));

        let err = LzssError::Closed;
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LzssError = io_err.into();
        assert!(matches!(err, LzssError::Io(_)));

        // Round back into io::Error without wrapping.
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_corruption_maps_to_invalid_data() {
        let io_err: io::Error = LzssError::invalid_offset(9999, 4096).into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);

        let io_err: io::Error = LzssError::unexpected_eof(1).into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
