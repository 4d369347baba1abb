#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8read::{DecodeError, Decoder, DecoderOptions, MAX_SEQUENCE_LEN};

#[derive(Debug, Arbitrary)]
struct Input {
    resynchronize: bool,
    skip_continuation_validation: bool,
    reject_invalid_scalars: bool,
    bytes: Vec<u8>,
}

fn decode(input: &Input) {
    let decoder = Decoder::new(DecoderOptions {
        resynchronize: input.resynchronize,
        skip_continuation_validation: input.skip_continuation_validation,
        reject_invalid_scalars: input.reject_invalid_scalars,
    });

    let mut src: &[u8] = &input.bytes;
    let mut decoded = String::new();
    let mut clean = true;
    loop {
        let before = src.len();
        let result = decoder.decode(&mut src);
        let used = before - src.len();
        if !input.resynchronize {
            assert!(used <= MAX_SEQUENCE_LEN, "consumed {used} bytes in one call");
        }
        match result {
            Ok(Some(cp)) => match cp.to_char() {
                Some(ch) => decoded.push(ch),
                None => clean = false,
            },
            Ok(None) => {
                assert!(src.is_empty(), "end-of-stream left bytes behind");
                break;
            }
            Err(DecodeError::TruncatedSequence { .. }) => {
                assert!(src.is_empty());
                clean = false;
                break;
            }
            Err(_) => {
                clean = false;
                break;
            }
        }
    }

    // Valid UTF-8 must decode to exactly the same text under every policy.
    if let Ok(text) = std::str::from_utf8(&input.bytes) {
        assert!(clean, "valid UTF-8 rejected: {text:?}");
        assert_eq!(decoded, text);
    }
}

fuzz_target!(|input: Input| decode(&input));
