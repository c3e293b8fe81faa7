/// Configuration options for a [`Buffer`](crate::Buffer).
///
/// Options are copied into every buffer created with them and into the
/// short buffers handed to a streaming handler by
/// [`Buffer::flush`](crate::Buffer::flush).
///
/// # Examples
///
/// ```rust
/// use bytestream::{Buffer, BufferOptions, Error};
///
/// let mut buf = Buffer::with_options(BufferOptions {
///     max_capacity: Some(4),
/// });
/// assert!(buf.resize(4).is_ok());
/// assert_eq!(buf.resize(5), Err(Error::OutOfMemory { requested: 5 }));
/// assert_eq!(buf.len(), 4);
/// ```
///
/// # Default
///
/// No limits are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub struct BufferOptions {
    /// Largest storage, in bytes, the buffer will allocate.
    ///
    /// A request above this limit fails with
    /// [`Error::OutOfMemory`](crate::Error::OutOfMemory) exactly as if the
    /// allocator had refused it, leaving the buffer untouched. Attaching
    /// external memory is not an allocation and is not limited.
    ///
    /// # Default
    ///
    /// `None`
    #[cfg_attr(any(test, feature = "serde"), serde(default))]
    pub max_capacity: Option<usize>,
}

impl BufferOptions {
    pub(crate) fn permits(&self, capacity: usize) -> bool {
        self.max_capacity.is_none_or(|max| capacity <= max)
    }
}
