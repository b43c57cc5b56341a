use std::ops::{Deref, DerefMut, Range};

use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum RangeError {
    #[error("subrange start {start} is greater than end {end}")]
    Inverted { start: usize, end: usize },
    #[error("subrange end {end} is out of bounds for a sequence of length {len}")]
    OutOfBounds { end: usize, len: usize },
}

/// Mutable view over the half-open range `[start, end)` of a parent slice.
///
/// Derefs to `[T]`, so it can be handed to any sorting entry point to sort
/// only that part of the parent without copying. Elements outside the range
/// are not reachable through the view.
#[derive(Debug)]
pub struct Subrange<'a, T> {
    offset: usize,
    data: &'a mut [T],
}

impl<'a, T> Subrange<'a, T> {
    /// Panics if `range.start > range.end` or `range.end > parent.len()`.
    pub fn new(parent: &'a mut [T], range: Range<usize>) -> Self {
        match Self::try_new(parent, range) {
            Ok(view) => view,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(parent: &'a mut [T], range: Range<usize>) -> Result<Self, RangeError> {
        let Range { start, end } = range;
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        if end > parent.len() {
            return Err(RangeError::OutOfBounds {
                end,
                len: parent.len(),
            });
        }
        Ok(Self {
            offset: start,
            data: &mut parent[start..end],
        })
    }

    /// Index of the first viewed element within the parent.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn into_slice(self) -> &'a mut [T] {
        self.data
    }
}

impl<T> Deref for Subrange<'_, T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.data
    }
}

impl<T> DerefMut for Subrange<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.data
    }
}

/// Shorthand for [`Subrange::new`] over `[start, end)`.
#[inline]
pub fn subrange<T>(parent: &mut [T], start: usize, end: usize) -> Subrange<'_, T> {
    Subrange::new(parent, start..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_covers_requested_range() {
        let mut data = [0, 1, 2, 3, 4, 5, 6, 7];
        let view = subrange(&mut data, 2, 5);
        assert_eq!(view.offset(), 2);
        assert_eq!(view.len(), 3);
        assert_eq!(&*view, &[2, 3, 4]);
    }

    #[test]
    fn empty_ranges_are_valid() {
        let mut data = [1, 2, 3];
        assert!(subrange(&mut data, 3, 3).is_empty());
        assert!(subrange(&mut data, 0, 0).is_empty());
        let mut none: [u8; 0] = [];
        assert!(subrange(&mut none, 0, 0).is_empty());
    }

    #[test]
    fn writes_go_to_parent() {
        let mut data = [9, 8, 7, 6];
        {
            let mut view = subrange(&mut data, 1, 3);
            view.swap(0, 1);
        }
        assert_eq!(data, [9, 7, 8, 6]);
    }

    #[test]
    fn try_new_reports_bad_ranges() {
        let mut data = [1, 2, 3];
        assert_eq!(
            Subrange::try_new(&mut data, Range { start: 2, end: 1 }).unwrap_err(),
            RangeError::Inverted { start: 2, end: 1 }
        );
        assert_eq!(
            Subrange::try_new(&mut data, 1..4).unwrap_err(),
            RangeError::OutOfBounds { end: 4, len: 3 }
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn new_panics_past_end() {
        let mut data = [1, 2, 3];
        let _ = Subrange::new(&mut data, 0..10);
    }
}
