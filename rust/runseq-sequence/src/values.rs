//! A collection of values stored as bytes with alignment guarantees.

use runseq_bytes::AlignedByteVec;

/// A collection of values stored as bytes with alignment guarantees.
///
/// `Values` wraps an `AlignedByteVec` and provides methods for safely working
/// with byte representations of typed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Values(AlignedByteVec);

impl Values {
    /// Creates a new, empty `Values` instance.
    pub fn new() -> Values {
        Values(AlignedByteVec::new())
    }

    /// Creates a new `Values` instance filled with zeroed bytes for `len`
    /// elements of type `T`.
    pub fn zeroed<T>(len: usize) -> Values
    where
        T: bytemuck::Zeroable,
    {
        Values(AlignedByteVec::zeroed(len * std::mem::size_of::<T>()))
    }

    /// Creates a new `Values` instance with capacity for at least `capacity`
    /// elements of type `T`.
    pub fn with_capacity<T>(capacity: usize) -> Values {
        Values(AlignedByteVec::with_capacity(
            capacity * std::mem::size_of::<T>(),
        ))
    }

    /// Creates a new `Values` instance with a specified byte capacity.
    pub fn with_byte_capacity(capacity: usize) -> Values {
        Values(AlignedByteVec::with_capacity(capacity))
    }

    /// Creates a new `Values` instance from a slice of typed elements.
    pub fn from_slice<T>(values: &[T]) -> Values
    where
        T: bytemuck::NoUninit,
    {
        let mut buf = Values::with_capacity::<T>(values.len());
        buf.extend_from_slice(values);
        buf
    }

    /// Checks if the `Values` container is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of elements of type `T` that fit in the current
    /// byte length.
    #[inline]
    pub fn len<T>(&self) -> usize {
        self.0.len() / std::mem::size_of::<T>()
    }

    /// Returns the number of bytes in the container.
    #[inline]
    pub fn bytes_len(&self) -> usize {
        self.0.len()
    }

    /// Returns a reference to the underlying bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Interprets the underlying bytes as a slice of elements of type `T`.
    #[inline]
    pub fn as_slice<T>(&self) -> &[T]
    where
        T: bytemuck::AnyBitPattern,
    {
        self.0.typed_data()
    }

    /// Interprets the underlying bytes as a mutable slice of elements of
    /// type `T`.
    #[inline]
    pub fn as_mut_slice<T>(&mut self) -> &mut [T]
    where
        T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
    {
        self.0.typed_data_mut()
    }

    /// Resizes the container to hold exactly `new_len` elements of type `T`,
    /// filling any additional space with the given `value`.
    pub fn resize<T>(&mut self, new_len: usize, value: T)
    where
        T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
    {
        self.0.resize_typed(new_len, value);
    }

    /// Appends a single element of type `T` to the end of the container.
    #[inline]
    pub fn push<T>(&mut self, value: T)
    where
        T: bytemuck::NoUninit,
    {
        self.0.push_typed(value);
    }

    /// Extends the container with the contents of a slice of elements of
    /// type `T`.
    #[inline]
    pub fn extend_from_slice<T>(&mut self, values: &[T])
    where
        T: bytemuck::NoUninit,
    {
        self.0.extend_from_typed_slice(values);
    }

    /// Extends the container with raw bytes.
    #[inline]
    pub fn extend_from_bytes(&mut self, bytes: &[u8]) {
        self.0.extend_from_slice(bytes);
    }

    /// Clears the container, removing all elements.
    ///
    /// This does not affect the allocated capacity.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl Default for Values {
    fn default() -> Self {
        Self::new()
    }
}
