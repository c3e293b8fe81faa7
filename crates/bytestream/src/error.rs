use alloc::string::String;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors reported by [`Buffer`](crate::Buffer) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The allocator (or the configured `max_capacity`) refused a request.
    ///
    /// The buffer is left exactly as it was before the call.
    #[error("unable to allocate {requested} bytes")]
    OutOfMemory {
        /// Size of the refused allocation in bytes.
        requested: usize,
    },
    /// Encoded text could not be decoded. The target buffer is left empty.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] DecodeError),
    /// Streaming was attempted against a zero-length window.
    #[error("cannot stream into a zero-length window")]
    InvalidState,
    /// An argument violated the operation's contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// No codec is registered under the requested name.
    #[error("unknown encoding '{0}'")]
    UnknownEncoding(String),
    /// A fold or comparison accumulator exceeded its range.
    #[error("accumulator overflow")]
    Overflow,
    /// Two buffers that must be the same length were not.
    #[error("length mismatch: {left} != {right}")]
    LengthMismatch {
        /// Length of the receiver.
        left: usize,
        /// Length of the other buffer.
        right: usize,
    },
}

/// Why a piece of encoded text was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The text length is not a multiple of the codec's block size.
    #[error("length {length} is not a multiple of {multiple}")]
    InvalidLength {
        /// Length of the rejected text.
        length: usize,
        /// Required block size.
        multiple: usize,
    },
    /// A byte outside the codec's alphabet.
    #[error("invalid character {byte:#04x} at offset {index}")]
    InvalidCharacter {
        /// Offset of the byte within the text.
        index: usize,
        /// The offending byte.
        byte: u8,
    },
    /// A padding character appeared anywhere but the end of the final block.
    #[error("misplaced padding at offset {index}")]
    MisplacedPadding {
        /// Offset of the padding character within the text.
        index: usize,
    },
}

/// Errors reported by the streaming operations.
///
/// Handler failures are carried through untouched so callers can match on
/// their own error type.
#[derive(Error, Debug, PartialEq)]
pub enum StreamError<E> {
    /// The engine itself failed (zero-length window, allocation failure).
    #[error("stream error: {0}")]
    Buffer(#[from] Error),
    /// The handler returned an error.
    #[error("handler error: {0}")]
    Handler(E),
}

impl<E> StreamError<E> {
    /// Returns the handler's error, if that is what this is.
    pub fn into_handler_error(self) -> Option<E> {
        match self {
            StreamError::Handler(err) => Some(err),
            StreamError::Buffer(_) => None,
        }
    }
}
