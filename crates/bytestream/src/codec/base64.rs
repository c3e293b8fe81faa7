use super::Codec;
use crate::error::DecodeError;

const INVALID: u8 = 0xFF;
const PAD: u8 = b'=';

/// Padded base 64 over a 64-character alphabet.
///
/// Every four characters carry three bytes. A final block may end in one
/// (`xxx=`) or two (`xx==`) padding characters, carrying two or one bytes.
/// The standard and URL-safe alphabets differ only at values 62 and 63.
#[derive(Debug, Clone, Copy)]
pub struct Base64 {
    name: &'static str,
    alphabet: &'static [u8; 64],
    values: [u8; 256],
}

const fn decoding_table(alphabet: &[u8; 64]) -> [u8; 256] {
    let mut values = [INVALID; 256];
    let mut value = 0;
    while value < alphabet.len() {
        values[alphabet[value] as usize] = value as u8;
        value += 1;
    }
    values
}

impl Base64 {
    /// The standard alphabet, with `+` and `/`.
    pub const STANDARD: Self = Self::new(
        "base64",
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
    );

    /// The URL- and filename-safe alphabet, with `-` and `_`.
    pub const URL_SAFE: Self = Self::new(
        "base64url",
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
    );

    const fn new(name: &'static str, alphabet: &'static [u8; 64]) -> Self {
        Self {
            name,
            alphabet,
            values: decoding_table(alphabet),
        }
    }

    fn symbol(&self, value: u8) -> u8 {
        self.alphabet[usize::from(value & 0x3F)]
    }
}

fn padding(block: &[u8]) -> usize {
    match block {
        [.., PAD, PAD] => 2,
        [.., PAD] => 1,
        _ => 0,
    }
}

impl Codec for Base64 {
    fn name(&self) -> &'static str {
        self.name
    }

    fn decoded_len(&self, text: &[u8]) -> Result<usize, DecodeError> {
        if text.len() % 4 != 0 {
            return Err(DecodeError::InvalidLength {
                length: text.len(),
                multiple: 4,
            });
        }
        Ok(text.len() / 4 * 3 - padding(text))
    }

    fn decode_into(&self, text: &[u8], out: &mut [u8]) -> Result<(), DecodeError> {
        let blocks = text.len() / 4;

        for (i, block) in text.chunks_exact(4).enumerate() {
            let pads = if i + 1 == blocks { padding(block) } else { 0 };

            let mut v = [0u8; 4];
            for (j, &ch) in block[..4 - pads].iter().enumerate() {
                let value = self.values[usize::from(ch)];
                if value == INVALID {
                    let index = 4 * i + j;
                    return Err(if ch == PAD {
                        DecodeError::MisplacedPadding { index }
                    } else {
                        DecodeError::InvalidCharacter { index, byte: ch }
                    });
                }
                v[j] = value;
            }

            let decoded = [v[0] << 2 | v[1] >> 4, v[1] << 4 | v[2] >> 2, v[2] << 6 | v[3]];
            let start = 3 * i;
            let len = 3 - pads;
            out[start..start + len].copy_from_slice(&decoded[..len]);
        }

        Ok(())
    }

    fn encoded_len(&self, len: usize) -> usize {
        len.div_ceil(3) * 4
    }

    fn encode_into(&self, bytes: &[u8], out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.encoded_len(bytes.len()));

        for (chunk, block) in bytes.chunks(3).zip(out.chunks_exact_mut(4)) {
            let b0 = chunk[0];
            let b1 = chunk.get(1).copied().unwrap_or(0);
            let b2 = chunk.get(2).copied().unwrap_or(0);

            block[0] = self.symbol(b0 >> 2);
            block[1] = self.symbol(b0 << 4 | b1 >> 4);
            block[2] = if chunk.len() > 1 {
                self.symbol(b1 << 2 | b2 >> 6)
            } else {
                PAD
            };
            block[3] = if chunk.len() > 2 { self.symbol(b2) } else { PAD };
        }
    }
}
