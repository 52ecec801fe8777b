//! A collection of offsets for variable-length data.

use std::ops::Range;

use crate::values::Values;

/// A collection of offsets for variable-length data.
///
/// Stores a sequence of monotonically non-decreasing offsets, where each pair
/// of adjacent offsets defines the byte range of a single item. The first
/// offset is always present and is zero for a freshly built collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offsets(Values);

impl Offsets {
    /// Creates a new empty `Offsets` collection.
    ///
    /// The resulting collection has a single offset at position 0.
    pub fn new() -> Offsets {
        Self::with_capacity(0)
    }

    /// Creates a new `Offsets` collection with space reserved for `capacity`
    /// items.
    pub fn with_capacity(capacity: usize) -> Offsets {
        let mut buf = Values::with_capacity::<u64>(capacity + 1);
        buf.push(0u64);
        Offsets(buf)
    }

    /// Returns the number of items represented by these offsets.
    ///
    /// This is one less than the number of stored offsets.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.0.len::<u64>() - 1
    }

    /// Returns `true` if the collection contains no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Returns a reference to the underlying slice of offsets.
    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        self.0.as_slice()
    }

    /// Returns the last offset, which marks the end of the last item.
    #[inline]
    pub fn last(&self) -> u64 {
        *self.as_slice().last().unwrap()
    }

    /// Returns the byte range of the item at a given logical index.
    #[inline]
    pub fn range_at(&self, index: usize) -> Range<usize> {
        let offsets = self.as_slice();
        offsets[index] as usize..offsets[index + 1] as usize
    }

    /// Adds a new offset by incrementing the last offset by the given length.
    #[inline]
    pub fn push_length(&mut self, len: usize) {
        let last = self.last();
        self.0.push(last + len as u64);
    }

    /// Appends item offsets from a range of another `Offsets` collection.
    ///
    /// The offsets are adjusted to be continuous with the current collection.
    ///
    /// # Arguments
    ///
    /// * `offsets` - The source offsets collection.
    /// * `start` - The starting item index in the source collection.
    /// * `len` - The number of items to append.
    pub fn extend_from_offsets_range(&mut self, offsets: &Offsets, start: usize, len: usize) {
        let src = &offsets.as_slice()[start..start + len + 1];
        let last = self.last();
        let base = src[0];
        for &offset in &src[1..] {
            self.0.push(offset - base + last);
        }
    }
}

impl Default for Offsets {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let offsets = Offsets::new();
        assert_eq!(offsets.item_count(), 0);
        assert!(offsets.is_empty());
        assert_eq!(offsets.as_slice(), &[0]);
    }

    #[test]
    fn test_push_length() {
        let mut offsets = Offsets::new();
        offsets.push_length(5);
        offsets.push_length(0);
        offsets.push_length(3);

        assert_eq!(offsets.item_count(), 3);
        assert_eq!(offsets.as_slice(), &[0, 5, 5, 8]);
        assert_eq!(offsets.range_at(0), 0..5);
        assert_eq!(offsets.range_at(1), 5..5);
        assert_eq!(offsets.range_at(2), 5..8);
    }

    #[test]
    fn test_extend_from_offsets_range() {
        let mut src = Offsets::new();
        src.push_length(4);
        src.push_length(6);
        src.push_length(2);

        let mut dst = Offsets::new();
        dst.push_length(10);
        dst.extend_from_offsets_range(&src, 1, 2);

        // Items of length 6 and 2, rebased after the existing item.
        assert_eq!(dst.as_slice(), &[0, 10, 16, 18]);
    }
}
