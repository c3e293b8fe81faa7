use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::arbitrary::AnyCodec;
use crate::Buffer;

pub(super) fn tests() -> u64 {
    if cfg!(miri) {
        10
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}

/// Property: decoding what a codec encoded yields the original bytes.
#[test]
fn encode_decode_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, codec: AnyCodec) -> bool {
        let name = codec.0.name();
        let source = Buffer::from(bytes.clone());
        let text = source.encode_to_string(name).unwrap();

        let mut decoded = Buffer::new();
        decoded.decode(name, &text).unwrap();
        decoded.as_slice() == bytes.as_slice()
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, AnyCodec) -> bool);
}

/// Property: the encoded text is exactly one byte shorter than
/// `encode_size`, and `encode` fills it with the same text plus a NUL.
#[test]
fn encode_size_contract_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, codec: AnyCodec) -> bool {
        let name = codec.0.name();
        let source = Buffer::from(bytes);
        let size = source.encode_size(name).unwrap();
        let text = source.encode_to_string(name).unwrap();

        let mut out = alloc::vec![0xFF; size];
        source.encode(name, &mut out).unwrap();

        text.len() == size - 1 && out[..size - 1] == *text.as_bytes() && out[size - 1] == 0
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, AnyCodec) -> bool);
}

/// Property: any odd-length text is rejected by hex, and any text whose
/// length is not a multiple of four is rejected by both base64 variants.
#[test]
fn bad_length_is_rejected_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Vec<u8>) -> bool {
        let mut buf = Buffer::new();
        let hex_ok = buf.decode("hex", &text).is_ok();
        let base64_ok = buf.decode("base64", &text).is_ok();
        let url_ok = buf.decode("base64url", &text).is_ok();

        (text.len() % 2 == 0 || !hex_ok) && (text.len() % 4 == 0 || !(base64_ok || url_ok))
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: a failed decode never leaves bytes behind.
#[test]
fn failed_decode_leaves_buffer_empty_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(previous: Vec<u8>, text: Vec<u8>, codec: AnyCodec) -> bool {
        let mut buf = Buffer::from(previous);
        match buf.decode(codec.0.name(), &text) {
            Ok(()) => true,
            Err(_) => buf.is_empty() && buf.capacity() == 0,
        }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, Vec<u8>, AnyCodec) -> bool);
}
