//! Sticky terminal state for the encoder and decoder.

use oxilzss_core::error::LzssError;
use oxilzss_core::window::WINDOW_SIZE;
use std::io;

/// Terminal condition recorded by an encoder or decoder.
///
/// Once set, the owning instance replays an equivalent error on every
/// subsequent call without touching the underlying stream again.
/// `io::Error` is not `Clone`, so only the error kind is retained; the
/// original error is propagated verbatim when it first occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fault {
    /// `close` was called.
    Closed,
    /// The underlying source or sink failed.
    Io(io::ErrorKind),
    /// A match token referenced a position outside the window.
    InvalidOffset(usize),
    /// The source ended in the middle of a match token.
    Truncated(usize),
}

impl Fault {
    pub(crate) fn to_error(self) -> LzssError {
        match self {
            Fault::Closed => LzssError::Closed,
            Fault::Io(kind) => LzssError::Io(kind.into()),
            Fault::InvalidOffset(offset) => LzssError::invalid_offset(offset, WINDOW_SIZE),
            Fault::Truncated(expected) => LzssError::unexpected_eof(expected),
        }
    }
}
