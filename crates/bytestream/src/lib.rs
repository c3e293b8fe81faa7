//! A growable, explicitly sized byte buffer.
//!
//! [`Buffer`] keeps its capacity separate from its length so repeated
//! shrink/grow cycles do not reallocate, and can temporarily operate on
//! caller-owned memory. On top of it the crate provides:
//!
//! - text codecs (`hex`, `base64`, `base64url`) looked up by name,
//! - a streaming engine that feeds arbitrarily long input through the buffer
//!   as a fixed-size window,
//! - map, filter, fold, compare and combine passes.
//!
//! ```rust
//! use bytestream::Buffer;
//!
//! let mut buf = Buffer::new();
//! buf.decode("hex", "48656c6c6f")?;
//! buf.map_uppercase();
//! assert_eq!(buf.encode_to_string("base64")?, "SEVMTE8=");
//! # Ok::<(), bytestream::Error>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
pub mod codec;
mod error;
mod options;
mod stream;
mod traverse;

#[cfg(test)]
mod tests;

pub use buffer::Buffer;
pub use error::{DecodeError, Error, Result, StreamError};
pub use options::BufferOptions;
