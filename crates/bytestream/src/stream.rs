//! Windowed consumption of an unbounded byte stream.
//!
//! A buffer's current length is its window. [`Buffer::consume`] copies input
//! into the window and hands the buffer to a handler each time the window is
//! full. Input that does not fill the window is queued in place and completed
//! by later calls; [`Buffer::flush`] hands over whatever is queued as a short
//! buffer of its own, and [`Buffer::reset_stream`] discards it.
//!
//! The window is either idle (`queued() == 0`) or filling
//! (`0 < queued() < len()`); it is never left full.
//!
//! ```rust
//! use bytestream::{Buffer, StreamError};
//!
//! let mut window = Buffer::with_len(4)?;
//! let mut seen = Vec::new();
//!
//! window.consume(b"abcdef", |buf| {
//!     seen.push(buf.as_slice().to_vec());
//!     Ok::<_, ()>(())
//! })?;
//! assert_eq!(window.queued(), 2);
//!
//! window.flush(|buf| {
//!     seen.push(buf.as_slice().to_vec());
//!     Ok::<_, ()>(())
//! })?;
//! assert_eq!(seen, [b"abcd".to_vec(), b"ef".to_vec()]);
//! # Ok::<(), StreamError<()>>(())
//! ```

use crate::{
    buffer::Buffer,
    error::{Error, StreamError},
};

impl Buffer<'_> {
    /// Streams `input` through the window, calling `handler` with every full
    /// window.
    ///
    /// Input shorter than the room left in the window is queued. Otherwise
    /// the window is topped up and dispatched, whole windows are dispatched
    /// straight from `input`, and any tail shorter than a window is queued at
    /// the start of the window.
    ///
    /// # Errors
    ///
    /// - [`StreamError::Buffer`] with [`Error::InvalidState`] if the window is
    ///   empty and `input` is not.
    /// - [`StreamError::Handler`] with the first error the handler returns.
    ///   Input after the failing window is dropped; the caller resubmits it.
    pub fn consume<E, F>(&mut self, input: &[u8], mut handler: F) -> Result<(), StreamError<E>>
    where
        F: FnMut(&Buffer<'_>) -> Result<(), E>,
    {
        if input.is_empty() {
            return Ok(());
        }

        let window = self.len();
        if window == 0 {
            return Err(Error::InvalidState.into());
        }

        let mut input = input;
        if self.queued > 0 {
            let start = self.queued;
            let room = window - start;
            if input.len() < room {
                self.as_mut_slice()[start..start + input.len()].copy_from_slice(input);
                self.queued += input.len();
                return Ok(());
            }

            let (head, rest) = input.split_at(room);
            self.as_mut_slice()[start..].copy_from_slice(head);
            self.queued = 0;
            self.dispatch(&mut handler)?;
            input = rest;
        }

        let mut windows = input.chunks_exact(window);
        for chunk in windows.by_ref() {
            self.as_mut_slice().copy_from_slice(chunk);
            self.dispatch(&mut handler)?;
        }

        let tail = windows.remainder();
        self.as_mut_slice()[..tail.len()].copy_from_slice(tail);
        self.queued = tail.len();

        Ok(())
    }

    fn dispatch<E, F>(&self, handler: &mut F) -> Result<(), StreamError<E>>
    where
        F: FnMut(&Buffer<'_>) -> Result<(), E>,
    {
        log::trace!("dispatching {} byte window", self.len());
        handler(self).map_err(|err| {
            log::debug!("stream handler failed, dropping unconsumed input");
            StreamError::Handler(err)
        })
    }

    /// Hands any queued bytes to `handler` as a separate buffer of exactly
    /// that length, then clears the queue.
    ///
    /// Does nothing if no bytes are queued.
    ///
    /// # Errors
    ///
    /// - [`StreamError::Buffer`] with [`Error::OutOfMemory`] if the short
    ///   buffer cannot be allocated. The queue is left intact.
    /// - [`StreamError::Handler`] with the handler's error. The queue has
    ///   already been cleared.
    pub fn flush<E, F>(&mut self, mut handler: F) -> Result<(), StreamError<E>>
    where
        F: FnMut(&Buffer<'_>) -> Result<(), E>,
    {
        if self.queued == 0 {
            return Ok(());
        }

        let mut leftover = Buffer::with_options(self.options());
        leftover.load(&self.as_slice()[..self.queued])?;
        self.queued = 0;

        log::trace!("flushing {} queued bytes", leftover.len());
        leftover.dispatch(&mut handler)
    }

    /// Discards any queued bytes without calling a handler.
    pub fn reset_stream(&mut self) {
        self.queued = 0;
    }
}
