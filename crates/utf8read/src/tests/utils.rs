use alloc::{string::String, vec::Vec};

use crate::{ByteSource, CodePoint, DecodeError, Decoder};

/// Decode `bytes` until end-of-stream or the first error.
///
/// Returns the code points decoded so far together with the number of bytes
/// each call consumed and the terminating error, if any.
pub fn decode_all(
    decoder: Decoder,
    bytes: &[u8],
) -> (Vec<(CodePoint, usize)>, Option<DecodeError<core::convert::Infallible>>) {
    let mut src = bytes;
    let mut out = Vec::new();
    loop {
        let before = src.len();
        match decoder.decode(&mut src) {
            Ok(Some(cp)) => out.push((cp, before - src.len())),
            Ok(None) => return (out, None),
            Err(e) => return (out, Some(e)),
        }
    }
}

/// Decode a whole slice with the default decoder and render it back to text.
///
/// # Panics
///
/// Panics on any decode error or on a value that is not a scalar value.
pub fn decode_to_string(bytes: &[u8]) -> String {
    let (cps, err) = decode_all(Decoder::default(), bytes);
    assert_eq!(err, None);
    cps.into_iter()
        .map(|(cp, _)| cp.to_char().expect("scalar value"))
        .collect()
}

/// A source that fails every read.
pub struct Broken;

impl ByteSource for Broken {
    type Error = &'static str;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Err("broken")
    }
}

/// Yields `bytes`, then fails instead of reporting end-of-stream.
pub struct FailAfter<'a> {
    pub bytes: &'a [u8],
}

impl ByteSource for FailAfter<'_> {
    type Error = &'static str;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        match self.bytes.read_byte() {
            Ok(Some(b)) => Ok(Some(b)),
            _ => Err("disconnected"),
        }
    }
}
