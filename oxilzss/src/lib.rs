//! # OxiLzss
//!
//! Pure Rust streaming LZSS (Lempel-Ziv-Storer-Szymanski) compression.
//!
//! LZSS is a sliding-window dictionary coder: repeated byte runs are
//! replaced with compact back-references into a 4 KB window of recent
//! output, interleaved with literal bytes. Every group of eight tokens is
//! prefixed by a flag byte whose bits (LSB-first) tell literals and
//! matches apart:
//!
//! ```text
//! stream := block*
//! block  := flag_byte token{0..8}
//! token  := literal_byte                  -- flag bit 1
//!         | match_low match_high          -- flag bit 0
//!
//! match_low  = offset & 0xFF
//! match_high = ((offset & 0xF00) >> 4) | (length - 3)
//! ```
//!
//! with `length` in `[3, 18]` and `offset` an absolute window position in
//! `[0, 4096)`. Streams carry no length or checksum trailer; they end when
//! the underlying source ends.
//!
//! Both sides run in constant memory: one window plus a few bytes of
//! block/carry staging, independent of stream length.
//!
//! ## Example
//!
//! ```rust
//! use oxilzss::{decode_lzss, encode_lzss};
//!
//! let data = b"hello, hello, world\n";
//! let compressed = encode_lzss(data).unwrap();
//! let restored = decode_lzss(&compressed).unwrap();
//! assert_eq!(restored, data);
//! ```
//!
//! ## Streaming
//!
//! [`LzssEncoder`] wraps any [`std::io::Write`] sink and [`LzssDecoder`]
//! any [`std::io::Read`] source:
//!
//! ```rust
//! use oxilzss::{LzssDecoder, LzssEncoder};
//!
//! let mut encoder = LzssEncoder::new(Vec::new());
//! encoder.write(b"to be or not to be, that is the question\n").unwrap();
//! encoder.close().unwrap();
//! let compressed = encoder.into_inner();
//!
//! let mut decoder = LzssDecoder::new(compressed.as_slice());
//! let mut restored = Vec::new();
//! std::io::Read::read_to_end(&mut decoder, &mut restored).unwrap();
//! assert_eq!(restored, b"to be or not to be, that is the question\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod decode;
pub mod encode;

mod fault;

// Re-exports
pub use decode::{LzssDecoder, decode_lzss};
pub use encode::{LzssEncoder, encode_lzss};
pub use oxilzss_core::error::{LzssError, Result};
pub use oxilzss_core::window::{MAX_MATCH, MIN_MATCH, WINDOW_SIZE};
