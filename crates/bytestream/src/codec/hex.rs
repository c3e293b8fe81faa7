use super::Codec;
use crate::error::DecodeError;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Base 16: two digits per byte, high nibble first.
///
/// Decoding accepts either case; encoding emits lowercase.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hex;

fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 0xA),
        b'A'..=b'F' => Some(digit - b'A' + 0xA),
        _ => None,
    }
}

impl Codec for Hex {
    fn name(&self) -> &'static str {
        "hex"
    }

    fn decoded_len(&self, text: &[u8]) -> Result<usize, DecodeError> {
        if text.len() % 2 != 0 {
            return Err(DecodeError::InvalidLength {
                length: text.len(),
                multiple: 2,
            });
        }
        Ok(text.len() / 2)
    }

    fn decode_into(&self, text: &[u8], out: &mut [u8]) -> Result<(), DecodeError> {
        debug_assert_eq!(out.len() * 2, text.len());

        for (i, (pair, byte)) in text.chunks_exact(2).zip(out.iter_mut()).enumerate() {
            let digit = |offset: usize| {
                nibble(pair[offset]).ok_or(DecodeError::InvalidCharacter {
                    index: 2 * i + offset,
                    byte: pair[offset],
                })
            };
            *byte = digit(0)? << 4 | digit(1)?;
        }

        Ok(())
    }

    fn encoded_len(&self, len: usize) -> usize {
        2 * len
    }

    fn encode_into(&self, bytes: &[u8], out: &mut [u8]) {
        debug_assert_eq!(out.len(), 2 * bytes.len());

        for (byte, pair) in bytes.iter().zip(out.chunks_exact_mut(2)) {
            pair[0] = DIGITS[usize::from(byte >> 4)];
            pair[1] = DIGITS[usize::from(byte & 0xF)];
        }
    }
}
