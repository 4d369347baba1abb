//! Byte sources the decoder reads from.
//!
//! A source hands out one byte at a time, or fills a small buffer, and keeps
//! end-of-stream distinct from failure: `Ok(None)` from
//! [`ByteSource::read_byte`] and a short count from [`ByteSource::fill`] mean
//! the stream ended, `Err` means the read itself failed.

use core::convert::Infallible;

/// A blocking source of bytes.
pub trait ByteSource {
    /// Failure reported by the underlying medium.
    type Error;

    /// Read one byte, or `Ok(None)` at end-of-stream.
    ///
    /// # Errors
    ///
    /// Returns the source's error if the read fails.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Fill `buf` from the source and return how many bytes were written.
    ///
    /// Reading stops early only at end-of-stream, so a count below
    /// `buf.len()` means the stream ended.
    ///
    /// # Errors
    ///
    /// Returns the source's error if any read fails. Bytes already written to
    /// `buf` are lost to the caller.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        for (filled, slot) in buf.iter_mut().enumerate() {
            match self.read_byte()? {
                Some(b) => *slot = b,
                None => return Ok(filled),
            }
        }
        Ok(buf.len())
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        (**self).read_byte()
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).fill(buf)
    }
}

/// Reading advances the slice past the consumed bytes, like `std::io::Read`
/// does for `&[u8]`.
impl ByteSource for &[u8] {
    type Error = Infallible;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let Some((&first, rest)) = self.split_first() else {
            return Ok(None);
        };
        *self = rest;
        Ok(Some(first))
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let n = buf.len().min(self.len());
        let (head, rest) = self.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = rest;
        Ok(n)
    }
}

#[cfg(feature = "std")]
pub use io::IoSource;

#[cfg(feature = "std")]
mod io {
    use std::io::{ErrorKind, Read};

    use super::ByteSource;

    /// Adapts any [`Read`] into a [`ByteSource`].
    ///
    /// `Ok(0)` from the reader is end-of-stream and
    /// [`ErrorKind::Interrupted`] is retried. The adapter does no buffering of
    /// its own; wrap slow readers in a [`std::io::BufReader`] first.
    #[derive(Debug)]
    pub struct IoSource<R> {
        inner: R,
    }

    impl<R: Read> IoSource<R> {
        /// Wrap a reader.
        pub fn new(inner: R) -> Self {
            Self { inner }
        }

        /// Borrow the reader.
        pub fn get_ref(&self) -> &R {
            &self.inner
        }

        /// Mutably borrow the reader.
        pub fn get_mut(&mut self) -> &mut R {
            &mut self.inner
        }

        /// Unwrap the reader.
        pub fn into_inner(self) -> R {
            self.inner
        }
    }

    impl<R: Read> From<R> for IoSource<R> {
        fn from(value: R) -> Self {
            Self::new(value)
        }
    }

    impl<R: Read> ByteSource for IoSource<R> {
        type Error = std::io::Error;

        fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
            let mut byte = [0u8; 1];
            Ok((self.fill(&mut byte)? == 1).then_some(byte[0]))
        }

        fn fill(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            let mut filled = 0;
            while filled < buf.len() {
                match self.inner.read(&mut buf[filled..]) {
                    Ok(0) => break,
                    Ok(n) => filled += n,
                    Err(e) if e.kind() == ErrorKind::Interrupted => {}
                    Err(e) => return Err(e),
                }
            }
            Ok(filled)
        }
    }
}
