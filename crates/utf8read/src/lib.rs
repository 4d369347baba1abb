//! Decode one Unicode code point at a time from a UTF-8 byte source.
//!
//! The decoder reads a leading byte, works out how many continuation bytes
//! follow it, reads exactly that many and assembles the code point. Nothing is
//! buffered between calls, so a caller decodes a whole stream by calling
//! [`decode`] in a loop until it returns `Ok(None)`.
//!
//! ```rust
//! use utf8read::{CodePoint, decode};
//!
//! let mut input: &[u8] = "本!".as_bytes();
//! assert_eq!(decode(&mut input).unwrap(), Some(CodePoint::new(0x672C)));
//! assert_eq!(decode(&mut input).unwrap(), Some(CodePoint::from('!')));
//! assert_eq!(decode(&mut input).unwrap(), None);
//! ```
//!
//! Byte sources are anything implementing [`ByteSource`]: byte slices out of
//! the box, and any [`std::io::Read`] through [`IoSource`] when the `std`
//! feature is enabled.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod code_point;
mod decoder;
mod error;
mod lead;
mod options;
mod source;

#[cfg(test)]
mod tests;

pub use code_point::{CodePoint, MAX_SEQUENCE_LEN};
pub use decoder::{Decoder, decode};
pub use error::DecodeError;
pub use lead::{LeadByte, is_continuation};
pub use options::DecoderOptions;
#[cfg(feature = "std")]
pub use source::IoSource;
pub use source::ByteSource;
