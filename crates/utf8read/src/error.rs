use thiserror::Error;

/// Why a single decode call failed.
///
/// `E` is the error type of the [`ByteSource`](crate::ByteSource) being read.
/// End-of-stream at a code point boundary is not an error; it is reported as
/// `Ok(None)` by the decoder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError<E> {
    /// The byte source failed for a reason other than end-of-stream.
    #[error("source read failed: {0}")]
    SourceRead(E),
    /// The stream ended after the leading byte but before the last
    /// continuation byte.
    #[error("truncated sequence: expected {expected} bytes, stream ended after {received}")]
    TruncatedSequence {
        /// Length the leading byte announced.
        expected: usize,
        /// Bytes actually read, including the leading byte.
        received: usize,
    },
    /// The first byte of a sequence matches none of the 1 to 4 byte patterns.
    #[error("invalid leading byte 0x{0:02X}")]
    InvalidLeadingByte(u8),
    /// A byte after the lead does not match `10xxxxxx`.
    #[error("invalid continuation byte 0x{byte:02X} at position {position}")]
    InvalidContinuationByte {
        /// The offending byte.
        byte: u8,
        /// Index within the sequence; the leading byte is position 0.
        position: usize,
    },
    /// The value fits in fewer bytes than were used to encode it.
    #[error("overlong encoding of {code_point:#X} in {len} bytes")]
    OverlongEncoding {
        /// The decoded value.
        code_point: u32,
        /// Bytes used to encode it.
        len: usize,
    },
    /// The value lies in U+D800..=U+DFFF.
    #[error("surrogate code point {0:#X}")]
    SurrogateCodePoint(u32),
    /// The value is above U+10FFFF.
    #[error("code point {0:#X} is above U+10FFFF")]
    OutOfRange(u32),
}

impl<E> DecodeError<E> {
    /// Convert the source error, leaving every other variant untouched.
    pub fn map_source<F>(self, f: impl FnOnce(E) -> F) -> DecodeError<F> {
        match self {
            DecodeError::SourceRead(e) => DecodeError::SourceRead(f(e)),
            DecodeError::TruncatedSequence { expected, received } => {
                DecodeError::TruncatedSequence { expected, received }
            }
            DecodeError::InvalidLeadingByte(b) => DecodeError::InvalidLeadingByte(b),
            DecodeError::InvalidContinuationByte { byte, position } => {
                DecodeError::InvalidContinuationByte { byte, position }
            }
            DecodeError::OverlongEncoding { code_point, len } => {
                DecodeError::OverlongEncoding { code_point, len }
            }
            DecodeError::SurrogateCodePoint(cp) => DecodeError::SurrogateCodePoint(cp),
            DecodeError::OutOfRange(cp) => DecodeError::OutOfRange(cp),
        }
    }

    /// `true` if the failure came from the byte source rather than the data.
    #[must_use]
    pub fn is_source_error(&self) -> bool {
        matches!(self, DecodeError::SourceRead(_))
    }
}
