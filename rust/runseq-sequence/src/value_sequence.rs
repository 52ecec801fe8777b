//! A basic sequence of values.

use runseq_common::{Result, error::Error, verify_arg};

use crate::{offsets::Offsets, schema::ElementType, values::Values};

/// A sequence of values of a single element type.
///
/// This is the simplest representation of a value sequence, using fully
/// decoded, contiguous buffers for storage.
///
/// For fixed-size types (e.g. `Int32`, `Float64`, `Complex64`), elements are
/// stored directly in the `values` buffer, with no `offsets`.
///
/// Variable-sized `String` values are stored as a concatenated, contiguous
/// byte buffer in `values`, accompanied by `offsets` (containing N+1 offsets
/// for the corresponding values in the `values` buffer). The value at index
/// `i` occupies the byte range `offsets[i]..offsets[i+1]` in the `values`
/// buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSequence {
    pub values: Values,
    pub offsets: Option<Offsets>,
    pub element_type: ElementType,
}

impl ValueSequence {
    /// Creates an empty sequence for a given element type.
    pub fn empty(element_type: ElementType) -> ValueSequence {
        ValueSequence {
            values: Values::new(),
            offsets: element_type.requires_offsets().then(Offsets::new),
            element_type,
        }
    }

    /// Creates an empty sequence with capacity for `capacity` elements
    /// pre-allocated.
    ///
    /// For variable-sized types the data buffer capacity is a guess; it grows
    /// as needed.
    pub fn with_capacity(element_type: ElementType, capacity: usize) -> ValueSequence {
        let elem_size = element_type.primitive_size().unwrap_or(0);
        ValueSequence {
            values: Values::with_byte_capacity(capacity * elem_size),
            offsets: element_type
                .requires_offsets()
                .then(|| Offsets::with_capacity(capacity)),
            element_type,
        }
    }

    /// Creates a sequence of a fixed-size element type from a slice.
    ///
    /// # Panics
    ///
    /// Panics if the size of `T` doesn't match the element type's primitive
    /// size, or if `element_type` is variable-sized.
    pub fn from_slice<T>(element_type: ElementType, values: &[T]) -> ValueSequence
    where
        T: bytemuck::NoUninit,
    {
        assert_eq!(
            element_type.primitive_size(),
            Some(std::mem::size_of::<T>())
        );
        ValueSequence {
            values: Values::from_slice(values),
            offsets: None,
            element_type,
        }
    }

    /// Creates a `String` sequence from string slices.
    pub fn from_strs<S: AsRef<str>>(values: &[S]) -> ValueSequence {
        let mut seq = ValueSequence::with_capacity(ElementType::String, values.len());
        for value in values {
            seq.push_str(value.as_ref());
        }
        seq
    }

    /// Returns the number of elements in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        match &self.offsets {
            Some(offsets) => offsets.item_count(),
            None => {
                let size = self
                    .element_type
                    .primitive_size()
                    .expect("fixed-size element");
                self.values.bytes_len() / size
            }
        }
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pushes a fixed-size value to the end of the sequence.
    ///
    /// # Panics
    ///
    /// * If the size of type `T` doesn't match the sequence's primitive size.
    /// * If the sequence is of a variable-sized type.
    pub fn push_value<T>(&mut self, value: T)
    where
        T: bytemuck::NoUninit,
    {
        assert_eq!(
            self.element_type.primitive_size(),
            Some(std::mem::size_of::<T>())
        );
        assert!(self.offsets.is_none());
        self.values.push(value);
    }

    /// Appends a string value to the sequence.
    ///
    /// # Panics
    ///
    /// Panics if the sequence's element type is not `String`.
    pub fn push_str(&mut self, value: &str) {
        assert_eq!(self.element_type, ElementType::String);
        self.offsets.as_mut().unwrap().push_length(value.len());
        self.values.extend_from_bytes(value.as_bytes());
    }

    /// Returns the raw byte content of the element at the specified index.
    ///
    /// For fixed-size types this is the element's byte representation; for
    /// `String` it is the UTF-8 payload.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn bytes_at(&self, index: usize) -> &[u8] {
        let range = if let Some(offsets) = self.offsets.as_ref() {
            offsets.range_at(index)
        } else {
            let size = self
                .element_type
                .primitive_size()
                .expect("fixed-size element");
            index * size..(index + 1) * size
        };
        &self.values.as_bytes()[range]
    }

    /// Returns the string element at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is not of `String` type, the index is out of
    /// bounds, or the payload is not valid UTF-8.
    pub fn string_at(&self, index: usize) -> &str {
        let offsets = self.offsets.as_ref().expect("missing offsets");
        std::str::from_utf8(&self.values.as_bytes()[offsets.range_at(index)])
            .expect("invalid utf8")
    }

    /// Extends this sequence by appending elements from a range of another
    /// sequence.
    ///
    /// # Arguments
    ///
    /// * `source` - The source sequence to copy elements from.
    /// * `offset` - The starting position in the source sequence (zero-based).
    /// * `len` - The number of elements to copy.
    ///
    /// # Panics
    ///
    /// * If `offset + len > source.len()`.
    /// * If the element types of the sequences don't match.
    pub fn extend_from_sequence(&mut self, source: &ValueSequence, offset: usize, len: usize) {
        assert!(offset + len <= source.len());
        assert_eq!(self.element_type, source.element_type);

        match self.element_type.primitive_size() {
            Some(size) => {
                let bytes = source.values.as_bytes();
                self.values
                    .extend_from_bytes(&bytes[offset * size..(offset + len) * size]);
            }
            None => {
                let src_offsets = source.offsets.as_ref().expect("src offsets are required");
                let data_start = src_offsets.as_slice()[offset] as usize;
                let data_end = src_offsets.as_slice()[offset + len] as usize;
                self.values
                    .extend_from_bytes(&source.values.as_bytes()[data_start..data_end]);
                self.offsets
                    .as_mut()
                    .expect("offsets are required")
                    .extend_from_offsets_range(src_offsets, offset, len);
            }
        }
    }

    /// Gathers multiple contiguous sub-ranges of this sequence into one new
    /// flat sequence.
    ///
    /// `starts` and `widths` are parallel arrays of zero-based `(start, width)`
    /// range descriptors; the output concatenates the requested ranges in
    /// order.
    ///
    /// # Errors
    ///
    /// Fails with `IndexOutOfBounds` if any range exceeds the source length,
    /// before any output is produced.
    pub fn extract_subranges(&self, starts: &[usize], widths: &[usize]) -> Result<ValueSequence> {
        verify_arg!(widths, starts.len() == widths.len());

        let len = self.len();
        for (&start, &width) in starts.iter().zip(widths) {
            if start + width > len {
                return Err(Error::index_out_of_bounds(start + width, len));
            }
        }

        let total = widths.iter().sum();
        let mut target = ValueSequence::with_capacity(self.element_type, total);
        for (&start, &width) in starts.iter().zip(widths) {
            target.extend_from_sequence(self, start, width);
        }
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Complex64;

    #[test]
    fn test_empty_sequence() {
        let seq = ValueSequence::empty(ElementType::Int32);
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());
        assert!(seq.offsets.is_none());

        let seq = ValueSequence::empty(ElementType::String);
        assert_eq!(seq.len(), 0);
        assert!(seq.offsets.is_some());
    }

    #[test]
    fn test_push_value() {
        let mut seq = ValueSequence::empty(ElementType::Int32);
        seq.push_value(42i32);
        seq.push_value(-7i32);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.values.as_slice::<i32>(), &[42, -7]);
    }

    #[test]
    #[should_panic]
    fn test_push_value_wrong_size() {
        let mut seq = ValueSequence::empty(ElementType::Int32);
        seq.push_value(42i64);
    }

    #[test]
    fn test_string_sequence() {
        let seq = ValueSequence::from_strs(&["hello", "", "world"]);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.string_at(0), "hello");
        assert_eq!(seq.string_at(1), "");
        assert_eq!(seq.string_at(2), "world");
        assert_eq!(seq.values.as_bytes(), b"helloworld");
        assert_eq!(seq.offsets.as_ref().unwrap().as_slice(), &[0, 5, 5, 10]);
    }

    #[test]
    fn test_complex_sequence() {
        let seq = ValueSequence::from_slice(
            ElementType::Complex64,
            &[Complex64::new(1.0, 2.0), Complex64::new(3.0, -4.0)],
        );
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.values.as_slice::<Complex64>()[1], Complex64::new(3.0, -4.0));
    }

    #[test]
    fn test_extend_from_sequence_fixed() {
        let source = ValueSequence::from_slice(ElementType::Byte, &[1u8, 2, 3, 4, 5]);
        let mut target = ValueSequence::empty(ElementType::Byte);
        target.extend_from_sequence(&source, 1, 3);
        assert_eq!(target.values.as_bytes(), &[2, 3, 4]);
    }

    #[test]
    fn test_extend_from_sequence_strings() {
        let source = ValueSequence::from_strs(&["first", "second", "third", "fourth"]);
        let mut target = ValueSequence::empty(ElementType::String);
        target.extend_from_sequence(&source, 1, 2);

        assert_eq!(target.len(), 2);
        assert_eq!(target.string_at(0), "second");
        assert_eq!(target.string_at(1), "third");
        assert_eq!(target.offsets.as_ref().unwrap().as_slice(), &[0, 6, 11]);
    }

    #[test]
    fn test_extract_subranges() {
        let source = ValueSequence::from_slice(ElementType::Int32, &[10i32, 20, 30, 40, 50]);
        let gathered = source.extract_subranges(&[0, 3], &[2, 2]).unwrap();
        assert_eq!(gathered.values.as_slice::<i32>(), &[10, 20, 40, 50]);

        let empty = source.extract_subranges(&[], &[]).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_extract_subranges_out_of_bounds() {
        let source = ValueSequence::from_slice(ElementType::Int32, &[1i32, 2, 3]);
        let result = source.extract_subranges(&[2], &[2]);
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_subranges_strings() {
        let source = ValueSequence::from_strs(&["a", "bb", "ccc", "dddd"]);
        let gathered = source.extract_subranges(&[1, 3], &[2, 1]).unwrap();
        assert_eq!(gathered.len(), 3);
        assert_eq!(gathered.string_at(0), "bb");
        assert_eq!(gathered.string_at(1), "ccc");
        assert_eq!(gathered.string_at(2), "dddd");
    }
}
