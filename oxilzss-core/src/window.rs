//! Sliding window dictionary for LZSS compression.
//!
//! This module provides the circular history buffer shared by the encoder
//! and decoder. Match tokens address the window by absolute position, so
//! both sides must run an identically seeded window and feed it the same
//! byte sequence for back-references to resolve correctly.

use crate::error::{LzssError, Result};

/// Minimum representable match length.
pub const MIN_MATCH: usize = 3;
/// Maximum representable match length.
pub const MAX_MATCH: usize = 18;
/// Size of the sliding window (4 KB, must stay a power of 2).
pub const WINDOW_SIZE: usize = 1 << 12;

/// Mask for efficient modulo (`WINDOW_SIZE - 1`).
const WINDOW_MASK: usize = WINDOW_SIZE - 1;

/// Initial write position.
///
/// The classic LZSS layout starts `MAX_MATCH` bytes short of the end of the
/// zero-filled buffer. Encoder and decoder must agree on this value for
/// absolute match offsets to line up.
const INIT_POSITION: usize = WINDOW_SIZE - MAX_MATCH;

/// A sliding window (circular buffer) holding the most recent
/// `WINDOW_SIZE` bytes of the stream.
///
/// The window doubles as the compression dictionary: the encoder searches
/// it for the longest prefix of the upcoming bytes, and the decoder replays
/// match tokens out of it.
#[derive(Debug, Clone)]
pub struct Window {
    /// The underlying buffer.
    buffer: Vec<u8>,
    /// Current write position (next byte will be written here).
    position: usize,
}

impl Default for Window {
    fn default() -> Self {
        Self::new()
    }
}

impl Window {
    /// Create a new, zero-filled window.
    pub fn new() -> Self {
        Self {
            buffer: vec![0; WINDOW_SIZE],
            position: INIT_POSITION,
        }
    }

    /// Get the current write position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Find the longest match for `lookahead` in the window.
    ///
    /// Returns `(length, offset)` where `offset` is the absolute window
    /// position the match starts at. A `(0, 0)` result means the lookahead
    /// was empty; callers treat any length below [`MIN_MATCH`] as "emit a
    /// literal instead".
    ///
    /// Candidates are scanned most-recent-first, so equal-length matches
    /// resolve to the most recently written occurrence. The comparison for
    /// a candidate stops as soon as it would read the write position
    /// itself, with one exception: when the best match runs right up to
    /// the write position, it is extended by re-reading the matched span
    /// modulo its own length. The extension covers runs and periodic
    /// patterns whose period is shorter than the lookahead, the same way a
    /// run-length coder would, using an ordinary match token.
    pub fn find_match(&self, lookahead: &[u8]) -> (usize, usize) {
        if lookahead.is_empty() {
            return (0, 0);
        }
        let lookahead = &lookahead[..lookahead.len().min(MAX_MATCH)];

        let mut best_len = 0;
        let mut best_offset = 0;

        let mut candidate = self.position;
        loop {
            candidate = candidate.wrapping_sub(1) & WINDOW_MASK;
            if candidate == self.position {
                break;
            }

            if self.buffer[candidate] != lookahead[0] {
                continue;
            }

            let mut len = 1;
            while len < lookahead.len() {
                let probe = (candidate + len) & WINDOW_MASK;
                if probe == self.position || self.buffer[probe] != lookahead[len] {
                    break;
                }
                len += 1;
            }

            if len > best_len {
                best_offset = candidate;

                if candidate == (self.position.wrapping_sub(len) & WINDOW_MASK) {
                    // The matched span touches the write position, so the
                    // match may continue through bytes it is itself about
                    // to produce. Read the span cyclically to extend it.
                    let period = len;
                    while len < lookahead.len()
                        && lookahead[len] == self.buffer[(candidate + len % period) & WINDOW_MASK]
                    {
                        len += 1;
                    }
                }

                best_len = len;
                if best_len >= MAX_MATCH {
                    break;
                }
            }
        }

        (best_len, best_offset)
    }

    /// Read the byte at `offset`, advancing `offset` modulo the window
    /// size.
    ///
    /// The in-out offset lets a match replay loop walk the window one byte
    /// at a time, interleaved with [`write_byte`](Self::write_byte) calls
    /// for the bytes it produces.
    pub fn read_at(&self, offset: &mut usize) -> Result<u8> {
        if *offset >= WINDOW_SIZE {
            return Err(LzssError::invalid_offset(*offset, WINDOW_SIZE));
        }

        let byte = self.buffer[*offset];
        *offset = (*offset + 1) & WINDOW_MASK;

        Ok(byte)
    }

    /// Write a single byte at the current position, overwriting the oldest
    /// entry once the window has wrapped.
    pub fn write_byte(&mut self, byte: u8) {
        self.buffer[self.position] = byte;
        self.position = (self.position + 1) & WINDOW_MASK;
    }

    /// Write multiple bytes to the window.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }
}
