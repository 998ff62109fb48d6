//! MSB-first bit packing over raw bytes.
//!
//! Pixel groups are at most 8 bits wide, so both ends work on `u8` values.
//! The writer pads the final partial byte with zero bits; the reader leaves
//! any padding bits past the last group unread.

use alloc::vec::Vec;

/// Accumulates fixed-width bit groups into a byte buffer, MSB-first.
pub(crate) struct BitWriter {
    out: Vec<u8>,
    cur: u8,
    filled: u32,
}

impl BitWriter {
    pub(crate) fn with_capacity(bytes: usize) -> Self {
        Self {
            out: Vec::with_capacity(bytes),
            cur: 0,
            filled: 0,
        }
    }

    /// Append the low `width` bits of `value`, most significant first.
    pub(crate) fn push(&mut self, value: u8, width: u32) {
        debug_assert!((1..=8).contains(&width));
        for i in (0..width).rev() {
            let bit = (value >> i) & 1;
            self.cur = (self.cur << 1) | bit;
            self.filled += 1;
            if self.filled == 8 {
                self.out.push(self.cur);
                self.cur = 0;
                self.filled = 0;
            }
        }
    }

    /// Flush, zero-padding the last byte to a full 8 bits.
    pub(crate) fn into_bytes(mut self) -> Vec<u8> {
        if self.filled > 0 {
            self.out.push(self.cur << (8 - self.filled));
        }
        self.out
    }
}

/// Reads fixed-width bit groups from a byte slice, MSB-first.
pub(crate) struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Read the next `width` bits as a value, or `None` past the end.
    pub(crate) fn read(&mut self, width: u32) -> Option<u8> {
        debug_assert!((1..=8).contains(&width));
        let mut value = 0u8;
        for _ in 0..width {
            let byte = *self.data.get(self.pos >> 3)?;
            let bit = (byte >> (7 - (self.pos & 7))) & 1;
            value = (value << 1) | bit;
            self.pos += 1;
        }
        Some(value)
    }
}
