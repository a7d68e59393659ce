//! # OxiLzss Core
//!
//! Core components for the OxiLzss compression library.
//!
//! This crate provides the building blocks shared by the LZSS encoder and
//! decoder:
//!
//! - [`window`]: the 4 KB sliding window dictionary and longest-match search
//! - [`error`]: error types
//!
//! ## Example
//!
//! ```rust
//! use oxilzss_core::Window;
//!
//! let mut window = Window::new();
//! window.write_bytes(b"hello, ");
//!
//! // The second "hello, " matches the first one in full.
//! let (length, offset) = window.find_match(b"hello, world");
//! assert_eq!(length, 7);
//! assert_eq!(offset, window.position().wrapping_sub(7) & 0xfff);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod window;

// Re-exports for convenience
pub use error::{LzssError, Result};
pub use window::{MAX_MATCH, MIN_MATCH, WINDOW_SIZE, Window};
