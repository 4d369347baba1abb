use tracing::{debug, trace};

use crate::{
    CodePoint, DecodeError, DecoderOptions,
    code_point::MAX_SEQUENCE_LEN,
    lead::{LeadByte, is_continuation},
    source::ByteSource,
};

/// Decode one code point from `source` with the default options.
///
/// Returns `Ok(None)` when the stream ends before the first byte of a new
/// code point. Invalid leading bytes and continuation bytes without the `10`
/// prefix are errors; the assembled value is not range-checked.
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode<S: ByteSource + ?Sized>(
    source: &mut S,
) -> Result<Option<CodePoint>, DecodeError<S::Error>> {
    Decoder::default().decode(source)
}

/// A configured, stateless code point decoder.
///
/// `Decoder` holds only its [`DecoderOptions`]; every call to
/// [`Decoder::decode`] is independent of the previous ones, so one decoder
/// can serve any number of sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder {
    options: DecoderOptions,
}

impl Decoder {
    /// Create a decoder with the given options.
    #[must_use]
    pub const fn new(options: DecoderOptions) -> Self {
        Self { options }
    }

    /// The options this decoder was built with.
    #[must_use]
    pub const fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Read exactly one code point from `source`.
    ///
    /// On success `1 + n` bytes have been consumed, where `n` is the number of
    /// continuation bytes the leading byte announced. Bytes consumed before a
    /// failure are not returned to the source. With
    /// [`DecoderOptions::resynchronize`] set, skipped bytes are consumed too.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::SourceRead`] if the source fails.
    /// - [`DecodeError::TruncatedSequence`] if the stream ends inside a
    ///   sequence.
    /// - [`DecodeError::InvalidLeadingByte`] if the first byte cannot start a
    ///   sequence and resynchronization is off.
    /// - [`DecodeError::InvalidContinuationByte`] if a continuation byte lacks
    ///   its `10` prefix and validation is on.
    /// - [`DecodeError::OverlongEncoding`], [`DecodeError::SurrogateCodePoint`]
    ///   or [`DecodeError::OutOfRange`] when
    ///   [`DecoderOptions::reject_invalid_scalars`] is set.
    pub fn decode<S: ByteSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<Option<CodePoint>, DecodeError<S::Error>> {
        let Some((continuation_len, payload)) = self.read_lead(source)? else {
            return Ok(None);
        };
        if continuation_len == 0 {
            trace!(code_point = payload, len = 1, "decoded code point");
            return Ok(Some(CodePoint::new(u32::from(payload))));
        }

        let mut offset = continuation_len * 6;
        let mut code_point = u32::from(payload) << offset;

        let mut buf = [0u8; MAX_SEQUENCE_LEN - 1];
        let tail = &mut buf[..continuation_len as usize];
        let received = source.fill(tail).map_err(DecodeError::SourceRead)?;
        if received < tail.len() {
            debug!(
                expected = tail.len() + 1,
                received = received + 1,
                "stream ended inside a sequence"
            );
            return Err(DecodeError::TruncatedSequence {
                expected: tail.len() + 1,
                received: received + 1,
            });
        }

        for (i, &byte) in tail.iter().enumerate() {
            if !self.options.skip_continuation_validation && !is_continuation(byte) {
                debug!(byte, position = i + 1, "invalid continuation byte");
                return Err(DecodeError::InvalidContinuationByte {
                    byte,
                    position: i + 1,
                });
            }
            offset -= 6;
            code_point |= u32::from(byte & 0x3F) << offset;
        }

        let len = tail.len() + 1;
        if self.options.reject_invalid_scalars {
            check_scalar(code_point, len)?;
        }

        trace!(code_point, len, "decoded code point");
        Ok(Some(CodePoint::new(code_point)))
    }

    /// Read the leading byte, returning `(continuation_len, payload)`.
    ///
    /// ASCII bytes come back as a sequence with no continuation bytes.
    fn read_lead<S: ByteSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<Option<(u32, u8)>, DecodeError<S::Error>> {
        let mut skipped = 0usize;
        loop {
            let Some(byte) = source.read_byte().map_err(DecodeError::SourceRead)? else {
                if skipped > 0 {
                    debug!(skipped, "stream ended while resynchronizing");
                }
                return Ok(None);
            };

            let lead = match LeadByte::from(byte) {
                LeadByte::Ascii(b) => (0, b),
                LeadByte::Sequence {
                    continuation_len,
                    payload,
                } => (u32::from(continuation_len), payload),
                LeadByte::Continuation(b) | LeadByte::Invalid(b) => {
                    if !self.options.resynchronize {
                        debug!(byte = b, "invalid leading byte");
                        return Err(DecodeError::InvalidLeadingByte(b));
                    }
                    skipped += 1;
                    continue;
                }
            };

            if skipped > 0 {
                debug!(skipped, "resynchronized on leading byte");
            }
            return Ok(Some(lead));
        }
    }
}

fn check_scalar<E>(code_point: u32, len: usize) -> Result<(), DecodeError<E>> {
    let cp = CodePoint::new(code_point);
    if cp.encoded_len() < len {
        return Err(DecodeError::OverlongEncoding { code_point, len });
    }
    if cp.is_surrogate() {
        return Err(DecodeError::SurrogateCodePoint(code_point));
    }
    if cp > CodePoint::MAX {
        return Err(DecodeError::OutOfRange(code_point));
    }
    Ok(())
}
