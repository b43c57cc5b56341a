use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;
use tracing::trace;

pub const DEFAULT_CAPACITY: usize = 8;

#[derive(Debug, Error)]
pub enum CharBufError {
    #[error("index {index} is out of bounds for a buffer of length {len}")]
    OutOfBounds { index: usize, len: usize },
    #[error("failed to grow buffer")]
    Alloc(#[from] TryReserveError),
}

/// Growable byte string with capacity doubling.
///
/// One slot past the last byte is always kept free: the buffer grows as soon
/// as `len + 1` would reach `capacity`.
#[derive(Clone)]
pub struct CharBuf {
    // `buf.len()` is the capacity; bytes past `len` are zeroed spare room.
    buf: Vec<u8>,
    len: usize,
}

impl CharBuf {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// `capacity` is clamped to at least 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity.max(1)],
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Appends `byte` and returns the new length.
    pub fn push(&mut self, byte: u8) -> Result<usize, CharBufError> {
        if self.len + 1 == self.capacity() {
            self.grow()?;
        }
        self.buf[self.len] = byte;
        self.len += 1;
        Ok(self.len)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied()
    }

    pub fn pop(&mut self) -> Option<u8> {
        let last = self.len.checked_sub(1)?;
        let byte = self.buf[last];
        self.buf[last] = 0;
        self.len = last;
        Some(byte)
    }

    /// Removes the byte at `index`, shifting the tail left. Capacity is unchanged.
    pub fn remove(&mut self, index: usize) -> Result<u8, CharBufError> {
        if index >= self.len {
            return Err(CharBufError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        let byte = self.buf[index];
        self.buf.copy_within(index + 1..self.len, index);
        self.len -= 1;
        self.buf[self.len] = 0;
        Ok(byte)
    }

    fn grow(&mut self) -> Result<(), CharBufError> {
        let from = self.capacity();
        let to = from * 2;
        self.buf.try_reserve_exact(to - from)?;
        self.buf.resize(to, 0);
        trace!(from, to, "char buffer grown");
        Ok(())
    }
}

impl Default for CharBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&str> for CharBuf {
    type Error = CharBufError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut buf = Self::new();
        for &byte in s.as_bytes() {
            buf.push(byte)?;
        }
        Ok(buf)
    }
}

impl fmt::Display for CharBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for CharBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharBuf")
            .field("text", &String::from_utf8_lossy(self.as_bytes()))
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_empty_with_default_capacity() {
        let buf = CharBuf::new();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), DEFAULT_CAPACITY);
        assert_eq!(buf.get(0), None);
    }

    #[test]
    fn push_doubles_capacity_when_one_slot_is_left() {
        let mut buf = CharBuf::new();
        for (i, byte) in b"abcdefg".iter().enumerate() {
            assert_eq!(buf.push(*byte).unwrap(), i + 1);
        }
        assert_eq!(buf.len(), 7);
        assert_eq!(buf.capacity(), 8);

        buf.push(b'h').unwrap();
        assert_eq!(buf.capacity(), 16);

        for byte in b"ijklmno" {
            buf.push(*byte).unwrap();
        }
        assert_eq!(buf.len(), 15);
        assert_eq!(buf.capacity(), 16);
        assert_eq!(buf.to_string(), "abcdefghijklmno");
    }

    #[test]
    fn capacity_one_still_grows() {
        let mut buf = CharBuf::with_capacity(0);
        assert_eq!(buf.capacity(), 1);
        buf.push(b'x').unwrap();
        assert_eq!(buf.capacity(), 2);
        assert_eq!(buf.get(0), Some(b'x'));
    }

    #[test]
    fn get_and_pop() {
        let mut buf = CharBuf::try_from("hey").unwrap();
        assert_eq!(buf.get(1), Some(b'e'));
        assert_eq!(buf.get(3), None);
        assert_eq!(buf.pop(), Some(b'y'));
        assert_eq!(buf.pop(), Some(b'e'));
        assert_eq!(buf.pop(), Some(b'h'));
        assert_eq!(buf.pop(), None);
        assert!(buf.is_empty());
    }

    #[test]
    fn remove_shifts_tail_and_keeps_capacity() {
        let mut buf = CharBuf::try_from("rust lang").unwrap();
        let capacity = buf.capacity();
        assert_eq!(buf.remove(4).unwrap(), b' ');
        assert_eq!(buf.as_bytes(), b"rustlang");
        assert_eq!(buf.remove(7).unwrap(), b'g');
        assert_eq!(buf.remove(0).unwrap(), b'r');
        assert_eq!(buf.to_string(), "ustlan");
        assert_eq!(buf.capacity(), capacity);
    }

    #[test]
    fn remove_out_of_range_is_reported() {
        let mut buf = CharBuf::try_from("ab").unwrap();
        let err = buf.remove(2).unwrap_err();
        assert!(matches!(err, CharBufError::OutOfBounds { index: 2, len: 2 }));
        assert_eq!(err.to_string(), "index 2 is out of bounds for a buffer of length 2");
        assert_eq!(buf.len(), 2);
    }
}
