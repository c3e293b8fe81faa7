//! Single-pass operations over a buffer's bytes.
//!
//! Each operation takes the per-byte step as a closure and comes with the
//! presets most callers need. Byte arithmetic wraps (`255 + 1 == 0`);
//! `u32` accumulators report [`Error::Overflow`] instead of wrapping.

use crate::{
    buffer::Buffer,
    error::{Error, Result},
};

impl Buffer<'_> {
    /// Replaces every byte with `f(byte)`.
    pub fn map<F>(&mut self, f: F)
    where
        F: FnMut(u8) -> u8,
    {
        let mut f = f;
        for byte in self.as_mut_slice() {
            *byte = f(*byte);
        }
    }

    /// Converts ASCII lowercase letters to uppercase.
    pub fn map_uppercase(&mut self) {
        self.map(|byte| byte.to_ascii_uppercase());
    }

    /// Converts ASCII uppercase letters to lowercase.
    pub fn map_lowercase(&mut self) {
        self.map(|byte| byte.to_ascii_lowercase());
    }

    /// Inverts every bit.
    pub fn map_not(&mut self) {
        self.map(|byte| !byte);
    }

    /// Keeps only the bytes for which `keep` returns `true`, in order.
    ///
    /// The buffer shrinks in place; its capacity is unchanged.
    pub fn filter<F>(&mut self, keep: F)
    where
        F: FnMut(u8) -> bool,
    {
        let mut keep = keep;
        let bytes = self.as_mut_slice();
        let mut write = 0;
        for read in 0..bytes.len() {
            let byte = bytes[read];
            if keep(byte) {
                bytes[write] = byte;
                write += 1;
            }
        }
        self.set_len(write);
    }

    /// Removes space, horizontal tab, line feed and carriage return.
    pub fn filter_whitespace(&mut self) {
        self.filter(|byte| !matches!(byte, b' ' | b'\t' | b'\n' | b'\r'));
    }

    /// Threads `init` through `f` for every byte, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error `f` returns.
    pub fn fold<T, E, F>(&self, init: T, f: F) -> Result<T, E>
    where
        F: FnMut(T, u8) -> Result<T, E>,
    {
        self.as_slice().iter().copied().try_fold(init, f)
    }

    /// Sum of all bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the sum exceeds `u32::MAX`.
    pub fn fold_sum(&self) -> Result<u32> {
        self.fold(0u32, |sum, byte| {
            sum.checked_add(u32::from(byte)).ok_or(Error::Overflow)
        })
    }

    /// Number of set bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the count exceeds `u32::MAX`.
    pub fn fold_bitcount(&self) -> Result<u32> {
        self.fold(0u32, |count, byte| {
            count.checked_add(byte.count_ones()).ok_or(Error::Overflow)
        })
    }

    /// Threads `init` through `f` for each pair of bytes at the same offset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] (converted into `E`) if the buffers
    /// differ in length, otherwise the first error `f` returns.
    pub fn compare<T, E, F>(&self, other: &Buffer<'_>, init: T, f: F) -> Result<T, E>
    where
        E: From<Error>,
        F: FnMut(T, u8, u8) -> Result<T, E>,
    {
        if self.len() != other.len() {
            return Err(Error::LengthMismatch {
                left: self.len(),
                right: other.len(),
            }
            .into());
        }

        let mut f = f;
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .try_fold(init, |acc, (&left, &right)| f(acc, left, right))
    }

    /// Whether both buffers hold the same bytes.
    #[must_use]
    pub fn compare_equal(&self, other: &Buffer<'_>) -> bool {
        self.as_slice() == other.as_slice()
    }

    /// Number of bit positions at which the two buffers differ.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the buffers differ in length, or
    /// [`Error::Overflow`] if the distance exceeds `u32::MAX`.
    pub fn compare_hamming(&self, other: &Buffer<'_>) -> Result<u32> {
        self.compare(other, 0u32, |distance, left, right| {
            distance
                .checked_add((left ^ right).count_ones())
                .ok_or(Error::Overflow)
        })
    }

    /// Replaces every byte with `f(byte, operand_byte)`.
    ///
    /// The operand is repeated or truncated to match this buffer's length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `operand` is empty.
    pub fn combine<F>(&mut self, operand: &Buffer<'_>, f: F) -> Result<()>
    where
        F: FnMut(u8, u8) -> u8,
    {
        if operand.is_empty() {
            return Err(Error::InvalidArgument("combine operand is empty"));
        }

        let mut f = f;
        let repeated = operand.as_slice().iter().cycle();
        for (byte, &other) in self.as_mut_slice().iter_mut().zip(repeated) {
            *byte = f(*byte, other);
        }
        Ok(())
    }

    /// Bitwise XOR with `operand`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `operand` is empty.
    pub fn combine_xor(&mut self, operand: &Buffer<'_>) -> Result<()> {
        self.combine(operand, |left, right| left ^ right)
    }

    /// Bitwise OR with `operand`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `operand` is empty.
    pub fn combine_or(&mut self, operand: &Buffer<'_>) -> Result<()> {
        self.combine(operand, |left, right| left | right)
    }

    /// Bitwise AND with `operand`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `operand` is empty.
    pub fn combine_and(&mut self, operand: &Buffer<'_>) -> Result<()> {
        self.combine(operand, |left, right| left & right)
    }

    /// Wrapping addition of `operand`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `operand` is empty.
    pub fn combine_add(&mut self, operand: &Buffer<'_>) -> Result<()> {
        self.combine(operand, u8::wrapping_add)
    }

    /// Wrapping subtraction of `operand`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `operand` is empty.
    pub fn combine_sub(&mut self, operand: &Buffer<'_>) -> Result<()> {
        self.combine(operand, u8::wrapping_sub)
    }
}
