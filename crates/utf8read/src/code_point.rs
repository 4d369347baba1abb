use core::fmt;

/// Longest sequence RFC 3629 allows: one leading byte and three continuation
/// bytes.
pub const MAX_SEQUENCE_LEN: usize = 4;

/// A decoded code point.
///
/// The wrapped value is exactly what the byte sequence encoded. The lenient
/// decoder never range-checks it, so a 4-byte sequence can produce values up
/// to `0x1F_FFFF` and 3-byte sequences can produce surrogates. Use
/// [`CodePoint::to_char`] to get a Rust `char` when the value is a scalar
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CodePoint(u32);

impl CodePoint {
    /// Highest code point RFC 3629 permits (U+10FFFF).
    pub const MAX: CodePoint = CodePoint(0x10_FFFF);

    /// Wrap a raw value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        CodePoint(value)
    }

    /// The raw value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// `true` when the value is a Unicode scalar value, i.e. not a surrogate
    /// and not above U+10FFFF.
    #[must_use]
    pub const fn is_scalar_value(self) -> bool {
        char::from_u32(self.0).is_some()
    }

    /// `true` for U+D800..=U+DFFF.
    #[must_use]
    pub const fn is_surrogate(self) -> bool {
        matches!(self.0, 0xD800..=0xDFFF)
    }

    /// Convert to a `char`, or `None` if the value is not a scalar value.
    #[must_use]
    pub const fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// Number of bytes the shortest UTF-8 encoding of this value occupies.
    ///
    /// Values above U+10FFFF still report 4, the length of the form they were
    /// decoded from.
    #[must_use]
    pub const fn encoded_len(self) -> usize {
        match self.0 {
            0..=0x7F => 1,
            0x80..=0x7FF => 2,
            0x800..=0xFFFF => 3,
            _ => 4,
        }
    }
}

impl From<char> for CodePoint {
    fn from(value: char) -> Self {
        CodePoint(u32::from(value))
    }
}

impl From<CodePoint> for u32 {
    fn from(value: CodePoint) -> Self {
        value.0
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}
