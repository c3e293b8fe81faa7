//! The growable byte buffer.
//!
//! A [`Buffer`] tracks two sizes: its `capacity`, the number of bytes of
//! storage it holds, and its `len`, the number of those bytes that are
//! currently meaningful. Shrinking only moves `len`, so a buffer that is
//! repeatedly shrunk and regrown within its capacity never reallocates.
//!
//! Storage is either owned by the buffer or borrowed from the caller through
//! [`Buffer::attach_external`]. Borrowed storage is never freed or resized by
//! the buffer; growing past it moves the preserved prefix into owned storage.

use alloc::vec::Vec;
use core::fmt;

use bstr::BStr;

use crate::{
    error::{Error, Result},
    options::BufferOptions,
};

enum Storage<'ext> {
    Owned(Vec<u8>),
    External(&'ext mut [u8]),
}

impl Storage<'_> {
    fn bytes(&self) -> &[u8] {
        match self {
            Storage::Owned(bytes) => bytes.as_slice(),
            Storage::External(bytes) => &**bytes,
        }
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        match self {
            Storage::Owned(bytes) => bytes.as_mut_slice(),
            Storage::External(bytes) => &mut **bytes,
        }
    }
}

/// A growable, explicitly sized byte buffer.
///
/// The `'ext` lifetime is that of any external memory attached with
/// [`Buffer::attach_external`]. Buffers that never attach external memory can
/// use any lifetime, typically `'static`.
///
/// # Examples
///
/// ```rust
/// use bytestream::Buffer;
///
/// let mut buf = Buffer::new();
/// buf.load(b"abc")?;
/// buf.resize(1)?;
/// buf.resize(4)?;
/// assert_eq!(buf.get_byte(0), b'a');
/// assert_eq!(buf.len(), 4);
/// # Ok::<(), bytestream::Error>(())
/// ```
pub struct Buffer<'ext> {
    storage: Storage<'ext>,
    len: usize,
    /// Bytes collected toward the current streaming window.
    pub(crate) queued: usize,
    options: BufferOptions,
}

impl<'ext> Buffer<'ext> {
    /// Creates an empty buffer with no storage.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(BufferOptions::default())
    }

    /// Creates an empty buffer with the given options.
    #[must_use]
    pub fn with_options(options: BufferOptions) -> Self {
        Self {
            storage: Storage::Owned(Vec::new()),
            len: 0,
            queued: 0,
            options,
        }
    }

    /// Creates a buffer of `len` bytes.
    ///
    /// The contents are unspecified and should be written before they are
    /// read; this implementation fills them with zeroes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the storage cannot be allocated.
    pub fn with_len(len: usize) -> Result<Self> {
        Self::with_len_and_options(len, BufferOptions::default())
    }

    /// Creates a buffer of `len` bytes with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the storage cannot be allocated or
    /// `len` exceeds `options.max_capacity`.
    pub fn with_len_and_options(len: usize, options: BufferOptions) -> Result<Self> {
        let mut buf = Self::with_options(options);
        buf.resize(len)?;
        Ok(buf)
    }

    /// Number of meaningful bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no meaningful bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bytes of storage currently held.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.bytes().len()
    }

    /// Number of bytes collected toward the current streaming window.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queued
    }

    /// Whether the storage is borrowed external memory.
    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self.storage, Storage::External(_))
    }

    /// The options this buffer was created with.
    #[must_use]
    pub fn options(&self) -> BufferOptions {
        self.options
    }

    /// The meaningful bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.storage.bytes()[..self.len]
    }

    /// The meaningful bytes, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        let len = self.len;
        &mut self.storage.bytes_mut()[..len]
    }

    /// Changes the number of meaningful bytes to `len`.
    ///
    /// If the current capacity suffices only the length changes. Otherwise the
    /// storage is reallocated to exactly `len` bytes, preserving the first
    /// `min(old_len, len)` bytes. Bytes beyond the preserved prefix are
    /// unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the storage cannot be grown. The
    /// buffer is left unchanged.
    pub fn resize(&mut self, len: usize) -> Result<()> {
        if len > self.capacity() {
            self.reallocate(len)?;
        }

        self.set_len(len);
        Ok(())
    }

    fn reallocate(&mut self, capacity: usize) -> Result<()> {
        let refused = Error::OutOfMemory {
            requested: capacity,
        };
        if !self.options.permits(capacity) {
            log::debug!("refusing {capacity} byte allocation above configured limit");
            return Err(refused);
        }

        log::debug!("growing buffer from {} to {capacity} bytes", self.capacity());

        match &mut self.storage {
            Storage::Owned(bytes) => {
                bytes
                    .try_reserve_exact(capacity - bytes.len())
                    .map_err(|_| refused)?;
                bytes.resize(capacity, 0);
            }
            Storage::External(external) => {
                let mut bytes = Vec::new();
                bytes.try_reserve_exact(capacity).map_err(|_| refused)?;
                bytes.extend_from_slice(&external[..self.len]);
                bytes.resize(capacity, 0);
                self.storage = Storage::Owned(bytes);
            }
        }

        Ok(())
    }

    /// Moves `len` within the current capacity, keeping `queued` below it.
    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        self.len = len;
        if self.queued >= len {
            self.queued = 0;
        }
    }

    /// Whether the buffer could grow to `len` bytes without exceeding its
    /// configured limit.
    pub(crate) fn can_hold(&self, len: usize) -> bool {
        len <= self.capacity() || self.options.permits(len)
    }

    /// Drops all storage, leaving the buffer empty and unallocated.
    pub(crate) fn release(&mut self) {
        self.storage = Storage::Owned(Vec::new());
        self.len = 0;
        self.queued = 0;
    }

    /// Returns the byte at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn get_byte(&self, index: usize) -> u8 {
        self.as_slice()[index]
    }

    /// Sets the byte at `index` and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn set_byte(&mut self, index: usize, byte: u8) -> u8 {
        self.as_mut_slice()[index] = byte;
        byte
    }

    /// Sets every meaningful byte to zero.
    pub fn zero(&mut self) {
        self.as_mut_slice().fill(0);
    }

    /// Replaces the contents with a copy of `data`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the storage cannot be grown. The
    /// buffer is left unchanged.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        self.resize(data.len())?;
        self.as_mut_slice().copy_from_slice(data);
        self.queued = 0;
        Ok(())
    }

    /// Returns a newly allocated copy of the meaningful bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the copy cannot be allocated.
    pub fn save(&self) -> Result<Vec<u8>> {
        let mut copy = Vec::new();
        copy.try_reserve_exact(self.len)
            .map_err(|_| Error::OutOfMemory {
                requested: self.len,
            })?;
        copy.extend_from_slice(self.as_slice());
        Ok(copy)
    }

    /// Points the buffer at caller-owned memory.
    ///
    /// Any owned storage is released first. Afterwards `len` and `capacity`
    /// both equal `external.len()`, and reads and writes go straight to
    /// `external`. The buffer never frees attached memory; use
    /// [`Buffer::detach_external`] to get it back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `external` is empty. The buffer
    /// is left unchanged.
    pub fn attach_external(&mut self, external: &'ext mut [u8]) -> Result<()> {
        if external.is_empty() {
            return Err(Error::InvalidArgument("cannot attach zero-length storage"));
        }

        log::debug!("attaching {} bytes of external storage", external.len());

        self.len = external.len();
        self.queued = 0;
        self.storage = Storage::External(external);
        Ok(())
    }

    /// Resets the buffer to the empty state without freeing attached memory.
    ///
    /// Returns the attached memory, if any, so the caller can use it again.
    /// Owned storage is released.
    pub fn detach_external(&mut self) -> Option<&'ext mut [u8]> {
        let storage = core::mem::replace(&mut self.storage, Storage::Owned(Vec::new()));
        self.len = 0;
        self.queued = 0;

        match storage {
            Storage::External(external) => {
                log::debug!("detaching {} bytes of external storage", external.len());
                Some(external)
            }
            Storage::Owned(_) => None,
        }
    }
}

impl Default for Buffer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Buffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("bytes", &BStr::new(self.as_slice()))
            .field("capacity", &self.capacity())
            .field("queued", &self.queued)
            .field("external", &self.is_external())
            .finish()
    }
}

impl From<Vec<u8>> for Buffer<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            len: bytes.len(),
            storage: Storage::Owned(bytes),
            queued: 0,
            options: BufferOptions::default(),
        }
    }
}

impl AsRef<[u8]> for Buffer<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl PartialEq for Buffer<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Buffer<'_> {}
