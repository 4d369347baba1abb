/// What a byte means when it is read where a new sequence should start.
///
/// Build it with `LeadByte::from(u8)`; the payload fields hold only the bits
/// that contribute to the code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadByte {
    /// `0xxxxxxx`: a complete code point.
    Ascii(u8),
    /// `110xxxxx`, `1110xxxx` or `11110xxx`: the start of a multi-byte
    /// sequence.
    Sequence {
        /// How many `10xxxxxx` bytes follow (1 to 3).
        continuation_len: u8,
        /// The low 5, 4 or 3 bits of the leading byte.
        payload: u8,
    },
    /// `10xxxxxx`: a continuation byte with no leading byte before it.
    Continuation(u8),
    /// `11111xxx`: a 5 or 6 byte lead from before RFC 3629, or `0xFF`.
    Invalid(u8),
}

impl From<u8> for LeadByte {
    fn from(value: u8) -> Self {
        if value & 0x80 == 0 {
            Self::Ascii(value)
        } else if value & 0xE0 == 0xC0 {
            Self::Sequence {
                continuation_len: 1,
                payload: value & 0x1F,
            }
        } else if value & 0xF0 == 0xE0 {
            Self::Sequence {
                continuation_len: 2,
                payload: value & 0x0F,
            }
        } else if value & 0xF8 == 0xF0 {
            Self::Sequence {
                continuation_len: 3,
                payload: value & 0x07,
            }
        } else if is_continuation(value) {
            Self::Continuation(value)
        } else {
            Self::Invalid(value)
        }
    }
}

impl LeadByte {
    /// Total length of the sequence this byte starts, including itself.
    ///
    /// `None` if the byte cannot start a sequence.
    #[must_use]
    pub const fn sequence_len(self) -> Option<usize> {
        match self {
            LeadByte::Ascii(_) => Some(1),
            LeadByte::Sequence {
                continuation_len, ..
            } => Some(1 + continuation_len as usize),
            LeadByte::Continuation(_) | LeadByte::Invalid(_) => None,
        }
    }
}

/// `true` if `byte` matches `10xxxxxx`.
#[must_use]
pub const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0x00, Some(1))]
    #[case(0x7F, Some(1))]
    #[case(0x80, None)]
    #[case(0xBF, None)]
    #[case(0xC0, Some(2))]
    #[case(0xDF, Some(2))]
    #[case(0xE0, Some(3))]
    #[case(0xEF, Some(3))]
    #[case(0xF0, Some(4))]
    #[case(0xF7, Some(4))]
    #[case(0xF8, None)]
    #[case(0xFC, None)]
    #[case(0xFF, None)]
    fn sequence_len_by_high_bits(#[case] byte: u8, #[case] len: Option<usize>) {
        assert_eq!(LeadByte::from(byte).sequence_len(), len);
    }

    #[test]
    fn payload_keeps_only_data_bits() {
        assert_eq!(
            LeadByte::from(0xE6),
            LeadByte::Sequence {
                continuation_len: 2,
                payload: 0x06
            }
        );
        assert_eq!(
            LeadByte::from(0xDF),
            LeadByte::Sequence {
                continuation_len: 1,
                payload: 0x1F
            }
        );
        assert_eq!(
            LeadByte::from(0xF4),
            LeadByte::Sequence {
                continuation_len: 3,
                payload: 0x04
            }
        );
    }

    #[test]
    fn classifies_every_byte() {
        for byte in 0..=u8::MAX {
            let class = LeadByte::from(byte);
            match byte {
                0x00..=0x7F => assert_eq!(class, LeadByte::Ascii(byte)),
                0x80..=0xBF => {
                    assert_eq!(class, LeadByte::Continuation(byte));
                    assert!(is_continuation(byte));
                }
                0xC0..=0xF7 => assert!(matches!(class, LeadByte::Sequence { .. })),
                _ => assert_eq!(class, LeadByte::Invalid(byte)),
            }
        }
    }
}
