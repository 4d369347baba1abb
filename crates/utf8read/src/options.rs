#![allow(clippy::struct_excessive_bools)]

/// Configuration options for the code point decoder.
///
/// The defaults give the strict-framing, lenient-value decoder: a byte that
/// cannot start a sequence is an error, continuation bytes are validated, and
/// the assembled value is returned as-is without overlong, surrogate or range
/// checks.
///
/// # Examples
///
/// ```rust
/// use utf8read::{Decoder, DecoderOptions};
///
/// let decoder = Decoder::new(DecoderOptions {
///     resynchronize: true,
///     ..Default::default()
/// });
/// let mut input: &[u8] = b"\x80\xFFa";
/// assert_eq!(decoder.decode(&mut input).unwrap().map(u32::from), Some(0x61));
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Whether to skip bytes that cannot start a sequence.
    ///
    /// When `true`, stray continuation bytes and `11111xxx` bytes are
    /// discarded until a valid leading byte turns up. Reaching end-of-stream
    /// while skipping is reported as a clean end-of-stream. When `false`, the
    /// first such byte fails the call with
    /// [`DecodeError::InvalidLeadingByte`](crate::DecodeError::InvalidLeadingByte).
    ///
    /// # Default
    ///
    /// `false`
    pub resynchronize: bool,

    /// Whether to accept continuation bytes without checking their `10`
    /// prefix.
    ///
    /// When `true`, each byte after the lead contributes its low six bits
    /// whatever its top two bits are, and
    /// [`DecodeError::InvalidContinuationByte`](crate::DecodeError::InvalidContinuationByte)
    /// is never produced.
    ///
    /// # Default
    ///
    /// `false`
    pub skip_continuation_validation: bool,

    /// Whether to reject values RFC 3629 forbids.
    ///
    /// When `true`, overlong encodings, surrogates (U+D800 to U+DFFF) and
    /// values above U+10FFFF fail the call after the whole sequence has been
    /// consumed.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_invalid_scalars: bool,
}
