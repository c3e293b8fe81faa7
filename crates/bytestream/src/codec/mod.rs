//! Binary-to-text codecs and the registry that names them.
//!
//! Codecs are stateless and looked up by exact, case-sensitive name:
//!
//! | name        | alphabet                       | block |
//! |-------------|--------------------------------|-------|
//! | `hex`       | `0-9a-f` (decode accepts `A-F`) | 2     |
//! | `base64`    | RFC 4648 §4, `+` `/`, padded   | 4     |
//! | `base64url` | RFC 4648 §5, `-` `_`, padded   | 4     |
//!
//! Encoded sizes count one extra byte for a NUL terminator, which
//! [`Buffer::encode`] writes after the text.

mod base64;
mod hex;

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

pub use self::base64::Base64;
pub use self::hex::Hex;
use crate::{
    buffer::Buffer,
    error::{DecodeError, Error, Result},
};

/// A named binary-to-text encoding.
pub trait Codec: Sync {
    /// Registry name.
    fn name(&self) -> &'static str;

    /// Number of bytes `text` decodes to.
    ///
    /// # Errors
    ///
    /// Fails if the length of `text` can never be valid.
    fn decoded_len(&self, text: &[u8]) -> Result<usize, DecodeError>;

    /// Decodes `text` into `out`, which is exactly `decoded_len(text)` long.
    ///
    /// On failure `out` may hold partially decoded bytes.
    ///
    /// # Errors
    ///
    /// Fails on any byte outside the alphabet or misplaced padding.
    fn decode_into(&self, text: &[u8], out: &mut [u8]) -> Result<(), DecodeError>;

    /// Length of the text for `len` input bytes, without terminator.
    fn encoded_len(&self, len: usize) -> usize;

    /// Encodes `bytes` into `out`, which is exactly `encoded_len(bytes.len())`
    /// long.
    fn encode_into(&self, bytes: &[u8], out: &mut [u8]);
}

static HEX: Hex = Hex;
static BASE64: Base64 = Base64::STANDARD;
static BASE64URL: Base64 = Base64::URL_SAFE;

static REGISTRY: [&dyn Codec; 3] = [&HEX, &BASE64, &BASE64URL];

/// Every registered codec.
pub fn codecs() -> impl Iterator<Item = &'static dyn Codec> {
    REGISTRY.iter().copied()
}

/// Finds the codec registered under `name`.
///
/// # Errors
///
/// Returns [`Error::UnknownEncoding`] if no codec has that name.
pub fn lookup(name: &str) -> Result<&'static dyn Codec> {
    codecs()
        .find(|codec| codec.name() == name)
        .ok_or_else(|| Error::UnknownEncoding(name.to_string()))
}

impl Buffer<'_> {
    /// Replaces the contents with `text` decoded by the named codec.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownEncoding`]: the buffer is unchanged.
    /// - [`Error::OutOfMemory`]: the buffer is unchanged.
    /// - [`Error::InvalidInput`]: the buffer is left empty and no partially
    ///   decoded bytes survive. Owned storage is released; attached memory
    ///   stays attached and untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytestream::Buffer;
    ///
    /// let mut buf = Buffer::new();
    /// buf.decode("base64", "Zm9vYg==")?;
    /// assert_eq!(buf.as_slice(), b"foob");
    /// # Ok::<(), bytestream::Error>(())
    /// ```
    pub fn decode(&mut self, encoding: &str, text: impl AsRef<[u8]>) -> Result<()> {
        let codec = lookup(encoding)?;
        let text = text.as_ref();

        let len = match codec.decoded_len(text) {
            Ok(len) => len,
            Err(err) => return Err(self.discard_decode(encoding, err)),
        };

        let refused = Error::OutOfMemory { requested: len };
        if !self.can_hold(len) {
            return Err(refused);
        }

        let mut decoded = Vec::new();
        decoded.try_reserve_exact(len).map_err(|_| refused)?;
        decoded.resize(len, 0);

        if let Err(err) = codec.decode_into(text, &mut decoded) {
            return Err(self.discard_decode(encoding, err));
        }

        self.load(&decoded)
    }

    fn discard_decode(&mut self, encoding: &str, err: DecodeError) -> Error {
        log::debug!("{encoding} decode failed: {err}");
        if self.is_external() {
            self.set_len(0);
        } else {
            self.release();
        }
        Error::InvalidInput(err)
    }

    /// Size of the buffer needed by [`Buffer::encode`], terminator included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEncoding`] if no codec has that name.
    pub fn encode_size(&self, encoding: &str) -> Result<usize> {
        Ok(lookup(encoding)?.encoded_len(self.len()) + 1)
    }

    /// Writes the contents as text followed by a NUL terminator.
    ///
    /// `out` must be at least [`Buffer::encode_size`] bytes long; bytes after
    /// the terminator are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEncoding`] if no codec has that name, or
    /// [`Error::InvalidArgument`] if `out` is too short.
    pub fn encode(&self, encoding: &str, out: &mut [u8]) -> Result<()> {
        let codec = lookup(encoding)?;
        let text_len = codec.encoded_len(self.len());
        if out.len() <= text_len {
            return Err(Error::InvalidArgument(
                "output is shorter than the encoded size",
            ));
        }

        codec.encode_into(self.as_slice(), &mut out[..text_len]);
        out[text_len] = 0;
        Ok(())
    }

    /// Returns the contents encoded as an owned string, without terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEncoding`] if no codec has that name, or
    /// [`Error::OutOfMemory`] if the text cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytestream::Buffer;
    ///
    /// let buf = Buffer::from(b"\x01\xAB".to_vec());
    /// assert_eq!(buf.encode_to_string("hex")?, "01ab");
    /// # Ok::<(), bytestream::Error>(())
    /// ```
    pub fn encode_to_string(&self, encoding: &str) -> Result<String> {
        let codec = lookup(encoding)?;
        let len = codec.encoded_len(self.len());
        let mut text = Vec::new();
        text.try_reserve_exact(len)
            .map_err(|_| Error::OutOfMemory { requested: len })?;
        text.resize(len, 0);
        codec.encode_into(self.as_slice(), &mut text);
        Ok(text.into_iter().map(char::from).collect())
    }
}
