//! Streaming LZSS decompression (decoding).
//!
//! The decoder pulls compressed bytes from an underlying [`io::Read`]
//! source and reconstructs the original stream, keeping its own window in
//! lockstep with the encoder's by feeding it every byte it emits.

use crate::fault::Fault;
use oxilzss_core::error::{LzssError, Result};
use oxilzss_core::window::{MAX_MATCH, MIN_MATCH, Window};
use std::io::{self, BufReader, Read};

/// Streaming LZSS decoder over an [`io::Read`] source.
///
/// The source is read one byte at a time, so wrap sources that are not
/// cheap to read byte-wise (files, sockets) with [`BufReader`] or use
/// [`buffered`](Self::buffered).
pub struct LzssDecoder<R: Read> {
    /// The underlying source.
    source: R,
    /// Sliding window dictionary, fed every emitted byte.
    window: Window,
    /// Flag register. Bit 8 is a sentinel marking how many flag bits
    /// remain: when the register shifts down to exactly 1, all eight have
    /// been consumed and a new flag byte is due. The sentinel is what
    /// distinguishes a fresh register from a flag byte of value zero.
    flags: u16,
    /// Carry-over for match bytes that overflowed the caller's buffer.
    carry: [u8; MAX_MATCH],
    /// Number of valid carry-over bytes.
    carry_len: usize,
    /// Read position within the carry-over.
    carry_pos: usize,
    /// The source reported end of data at a token boundary.
    finished: bool,
    /// Sticky terminal state.
    fault: Option<Fault>,
}

impl<R: Read> LzssDecoder<R> {
    /// Create a new decoder reading compressed data from `source`.
    pub fn new(source: R) -> Self {
        Self {
            source,
            window: Window::new(),
            flags: 1,
            carry: [0; MAX_MATCH],
            carry_len: 0,
            carry_pos: 0,
            finished: false,
            fault: None,
        }
    }

    /// Consume the decoder and return the underlying source, discarding
    /// any buffered carry-over bytes.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Decompress into `buf`, returning the number of bytes produced.
    ///
    /// `Ok(0)` means end of stream (or an empty `buf`). A single match
    /// token can expand to more bytes than `buf` has room for; the excess
    /// is held back and returned by the next call before any further
    /// decoding.
    ///
    /// # Errors
    ///
    /// Propagates source errors; fails with [`LzssError::UnexpectedEof`]
    /// when the source ends inside a match token,
    /// [`LzssError::InvalidOffset`] when a match references a position
    /// outside the window, and [`LzssError::Closed`] after
    /// [`close`](Self::close). All failures are sticky.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if let Some(fault) = self.fault {
            return Err(fault.to_error());
        }

        if self.carry_pos < self.carry_len {
            let n = (self.carry_len - self.carry_pos).min(buf.len());
            buf[..n].copy_from_slice(&self.carry[self.carry_pos..self.carry_pos + n]);
            self.carry_pos += n;
            if self.carry_pos == self.carry_len {
                self.carry_pos = 0;
                self.carry_len = 0;
            }
            return Ok(n);
        }

        if self.finished || buf.is_empty() {
            return Ok(0);
        }

        self.fill(buf)
    }

    /// Close the decoder. It owns no flushable state; closing only marks
    /// the instance unusable. A second `close` or any later `read` fails
    /// with [`LzssError::Closed`].
    pub fn close(&mut self) -> Result<()> {
        if let Some(fault) = self.fault {
            return Err(fault.to_error());
        }

        self.fault = Some(Fault::Closed);

        Ok(())
    }

    /// Decode tokens until `buf` is full or the source ends.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut n = 0;

        while n < buf.len() {
            if self.flags == 1 {
                match self.source_byte()? {
                    Some(byte) => self.flags = 0x100 | u16::from(byte),
                    None => {
                        self.finished = true;
                        return Ok(n);
                    }
                }
            }

            if self.flags & 1 == 1 {
                let Some(byte) = self.source_byte()? else {
                    // A 1-bit with no byte behind it is block padding.
                    self.finished = true;
                    return Ok(n);
                };

                buf[n] = byte;
                n += 1;

                self.window.write_byte(byte);
            } else {
                let (mut offset, length) = self.match_token()?;

                for _ in 0..length {
                    let byte = match self.window.read_at(&mut offset) {
                        Ok(byte) => byte,
                        Err(err) => {
                            if let LzssError::InvalidOffset { offset, .. } = &err {
                                self.fault = Some(Fault::InvalidOffset(*offset));
                            }
                            return Err(err);
                        }
                    };

                    if n < buf.len() {
                        buf[n] = byte;
                        n += 1;
                    } else {
                        self.carry[self.carry_len] = byte;
                        self.carry_len += 1;
                    }

                    // Feed the byte back before reading the next one, so a
                    // match overlapping its own output replays correctly.
                    self.window.write_byte(byte);
                }
            }

            self.flags >>= 1;
        }

        Ok(n)
    }

    /// Read and unpack a two-byte match token.
    fn match_token(&mut self) -> Result<(usize, usize)> {
        let Some(low) = self.source_byte()? else {
            self.fault = Some(Fault::Truncated(2));
            return Err(LzssError::unexpected_eof(2));
        };
        let Some(high) = self.source_byte()? else {
            self.fault = Some(Fault::Truncated(1));
            return Err(LzssError::unexpected_eof(1));
        };

        let offset = (usize::from(high & 0xf0) << 4) | usize::from(low);
        let length = usize::from(high & 0x0f) + MIN_MATCH;

        Ok((offset, length))
    }

    /// Read one byte from the source. `None` means end of data.
    fn source_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.source.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    self.fault = Some(Fault::Io(err.kind()));
                    return Err(err.into());
                }
            }
        }
    }
}

impl<R: Read> LzssDecoder<BufReader<R>> {
    /// Create a decoder with a [`BufReader`] between it and `source`, for
    /// sources without cheap byte-at-a-time reads.
    pub fn buffered(source: R) -> Self {
        LzssDecoder::new(BufReader::new(source))
    }
}

impl<R: Read> Read for LzssDecoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        LzssDecoder::read(self, buf).map_err(io::Error::from)
    }
}

/// Decompress `data` in one shot, returning the reconstructed bytes.
///
/// # Errors
///
/// Fails when `data` is not a well-formed LZSS stream.
///
/// # Example
///
/// ```rust
/// let restored = oxilzss::decode_lzss(b"\x7fhello, \xee\xf4\xffworld\n").unwrap();
/// assert_eq!(restored, b"hello, hello, world\n");
/// ```
pub fn decode_lzss(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = LzssDecoder::new(data);
    let mut output = Vec::new();
    let mut chunk = [0u8; 512];

    loop {
        let n = decoder.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        output.extend_from_slice(&chunk[..n]);
    }

    Ok(output)
}
