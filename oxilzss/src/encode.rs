//! Streaming LZSS compression (encoding).
//!
//! The encoder consumes plain bytes and writes the compressed block stream
//! to an underlying [`io::Write`] sink. Output is produced one block at a
//! time: a flag byte announcing up to eight tokens, followed by the token
//! payload bytes.

use crate::fault::Fault;
use oxilzss_core::error::Result;
use oxilzss_core::window::{MAX_MATCH, MIN_MATCH, Window};
use std::io::{self, Write};

/// Staging capacity for one block: a flag byte plus eight two-byte match
/// tokens is the most that can be pending before a flush.
const BLOCK_CAPACITY: usize = 17;

/// Streaming LZSS encoder over an [`io::Write`] sink.
///
/// Data fed to [`write`](Self::write) is compressed and written to the
/// sink. Up to one block (17 bytes) is buffered internally, so callers
/// must invoke [`close`](Self::close) to flush the final partial block.
/// Closing does not flush or close the sink itself.
pub struct LzssEncoder<W: Write> {
    /// The underlying sink.
    sink: W,
    /// Sliding window dictionary, fed every encoded byte.
    window: Window,
    /// Flag bits for the current block, accumulated LSB-first.
    flags: u8,
    /// Number of tokens in the current block.
    flag_count: u32,
    /// Staged block: slot 0 is reserved for the flag byte.
    block: [u8; BLOCK_CAPACITY],
    /// Number of staged bytes, including the reserved flag slot.
    len: usize,
    /// Sticky terminal state.
    fault: Option<Fault>,
}

impl<W: Write> LzssEncoder<W> {
    /// Create a new encoder writing compressed data to `sink`.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            window: Window::new(),
            flags: 0,
            flag_count: 0,
            block: [0; BLOCK_CAPACITY],
            len: 1,
            fault: None,
        }
    }

    /// Compress `buf` and write the result to the underlying sink.
    ///
    /// Returns the number of input bytes consumed, which on success is
    /// always `buf.len()`. Matches are only found within a single call's
    /// buffer plus the window history, so larger buffers compress better.
    ///
    /// # Errors
    ///
    /// Propagates sink errors, and [`LzssError::Closed`] once the encoder
    /// has been closed. Either failure is sticky.
    ///
    /// [`LzssError::Closed`]: oxilzss_core::error::LzssError::Closed
    pub fn write(&mut self, buf: &[u8]) -> Result<usize> {
        if let Some(fault) = self.fault {
            return Err(fault.to_error());
        }

        let mut pos = 0;
        while pos < buf.len() {
            let end = (pos + MAX_MATCH).min(buf.len());
            let (length, offset) = self.window.find_match(&buf[pos..end]);

            let consumed = if length < MIN_MATCH {
                self.block[self.len] = buf[pos];
                self.len += 1;
                self.flags |= 1 << self.flag_count;
                1
            } else {
                self.block[self.len] = (offset & 0xff) as u8;
                self.block[self.len + 1] = (((offset & 0xf00) >> 4) | (length - MIN_MATCH)) as u8;
                self.len += 2;
                length
            };
            self.flag_count += 1;

            if self.flag_count == 8 {
                self.flush_block()?;
            }

            self.window.write_bytes(&buf[pos..pos + consumed]);
            pos += consumed;
        }

        Ok(buf.len())
    }

    /// Close the encoder, flushing any pending partial block.
    ///
    /// If no tokens are pending, nothing is written: the empty input
    /// compresses to the empty stream. After closing, every operation
    /// including a second `close` fails with [`LzssError::Closed`].
    ///
    /// [`LzssError::Closed`]: oxilzss_core::error::LzssError::Closed
    pub fn close(&mut self) -> Result<()> {
        if let Some(fault) = self.fault {
            return Err(fault.to_error());
        }

        if self.flag_count > 0 {
            self.flush_block()?;
        }
        self.fault = Some(Fault::Closed);

        Ok(())
    }

    /// Consume the encoder and return the underlying sink, discarding any
    /// pending partial block.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Flush the staged block to the sink and reset the block state.
    fn flush_block(&mut self) -> Result<()> {
        // Unused flag slots read as literals. No token bytes follow them,
        // so a decoder reaches end of input before consuming any.
        self.block[0] = (u32::from(self.flags) | (0xff_u32 << self.flag_count)) as u8;

        if let Err(err) = self.sink.write_all(&self.block[..self.len]) {
            self.fault = Some(Fault::Io(err.kind()));
            return Err(err.into());
        }

        self.flags = 0;
        self.flag_count = 0;
        self.len = 1;

        Ok(())
    }
}

impl<W: Write> Write for LzssEncoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        LzssEncoder::write(self, buf).map_err(io::Error::from)
    }

    /// Flush the underlying sink.
    ///
    /// A partially filled block stays buffered until [`close`]: its flag
    /// byte is not final, so emitting it early would corrupt the stream.
    ///
    /// [`close`]: LzssEncoder::close
    fn flush(&mut self) -> io::Result<()> {
        if let Some(fault) = self.fault {
            return Err(fault.to_error().into());
        }
        self.sink.flush()
    }
}

/// Compress `data` in one shot, returning the compressed bytes.
///
/// # Errors
///
/// Never fails for an in-memory sink; the `Result` mirrors the streaming
/// API.
///
/// # Example
///
/// ```rust
/// let compressed = oxilzss::encode_lzss(b"hello, hello, world\n").unwrap();
/// assert_eq!(compressed, b"\x7fhello, \xee\xf4\xffworld\n");
/// ```
pub fn encode_lzss(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = LzssEncoder::new(Vec::new());
    encoder.write(data)?;
    encoder.close()?;
    Ok(encoder.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxilzss_core::error::LzssError;

    /// Sink that fails every write with the same error kind.
    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink failed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_encode_known_vector() {
        // Seven literals, one match seven bytes back, six literals.
        let compressed = encode_lzss(b"hello, hello, world\n").unwrap();
        assert_eq!(compressed, b"\x7fhello, \xee\xf4\xffworld\n");
    }

    #[test]
    fn test_encode_empty_input_is_empty_stream() {
        let compressed = encode_lzss(b"").unwrap();
        assert!(compressed.is_empty());
    }

    #[test]
    fn test_encode_run_uses_overlapping_matches() {
        // One literal, then self-overlapping matches of up to 18 bytes:
        // 1 flag byte + 1 literal + 6 match tokens.
        let compressed = encode_lzss(&[b'a'; 100]).unwrap();
        assert_eq!(compressed.len(), 14);
        assert_eq!(compressed[1], b'a');
    }

    #[test]
    fn test_write_returns_input_count() {
        let mut encoder = LzssEncoder::new(Vec::new());
        let n = encoder.write(b"abcabcabc").unwrap();
        assert_eq!(n, 9);
    }

    #[test]
    fn test_close_twice_fails_closed() {
        let mut encoder = LzssEncoder::new(Vec::new());
        encoder.write(b"data").unwrap();
        encoder.close().unwrap();

        assert!(matches!(encoder.close(), Err(LzssError::Closed)));
        assert!(matches!(encoder.write(b"more"), Err(LzssError::Closed)));
    }

    #[test]
    fn test_close_without_tokens_writes_nothing() {
        let mut encoder = LzssEncoder::new(Vec::new());
        encoder.close().unwrap();
        assert!(encoder.into_inner().is_empty());
    }

    #[test]
    fn test_sink_error_is_sticky() {
        let mut encoder = LzssEncoder::new(FailingSink);

        // Eight distinct literals force a block flush.
        let data: Vec<u8> = (1..=8).collect();
        let err = encoder.write(&data).unwrap_err();
        assert!(matches!(err, LzssError::Io(_)));

        // The failure replays without re-attempting the sink write.
        let err = encoder.write(b"y").unwrap_err();
        assert!(matches!(err, LzssError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        let err = encoder.close().unwrap_err();
        assert!(matches!(err, LzssError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_io_write_trait() {
        let mut encoder = LzssEncoder::new(Vec::new());
        io::Write::write_all(&mut encoder, b"hello, hello, world\n").unwrap();
        io::Write::flush(&mut encoder).unwrap();
        encoder.close().unwrap();

        assert_eq!(encoder.into_inner(), b"\x7fhello, \xee\xf4\xffworld\n");
    }
}
