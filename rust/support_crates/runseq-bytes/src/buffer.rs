use crate::align::{is_aligned, round_down, round_up};

/// A byte vector that maintains memory alignment guarantees for its underlying
/// storage.
///
/// The payload always starts on a 128-byte boundary, which makes `bytemuck`
/// slice casts of the content valid for every primitive element type stored
/// in it. Capacity grows in 64-byte blocks, doubling on reallocation.
pub struct AlignedByteVec {
    /// The underlying byte vector, may include padding at the start.
    inner: Vec<u8>,
    /// Offset from the start of `inner` to the aligned payload.
    start: u32,
}

impl AlignedByteVec {
    /// Required payload alignment in bytes.
    const ALIGNMENT: usize = 128;
    /// Block size for capacity calculations.
    const BLOCK_SIZE: usize = 64;

    /// Creates a new empty vector with no capacity allocation.
    pub fn new() -> AlignedByteVec {
        AlignedByteVec {
            inner: Vec::new(),
            start: 0,
        }
    }

    /// Creates a new vector with the specified capacity, ensuring alignment
    /// requirements are met.
    pub fn with_capacity(capacity: usize) -> AlignedByteVec {
        if capacity == 0 {
            return AlignedByteVec::new();
        }

        let vec_capacity = round_up(capacity, Self::BLOCK_SIZE)
            .checked_add(Self::ALIGNMENT)
            .expect("add");
        let mut vec = Vec::<u8>::with_capacity(vec_capacity);

        let p = vec.as_ptr() as usize;
        let aligned = round_up(p, Self::ALIGNMENT);
        let start = aligned - p;
        if start != 0 {
            unsafe {
                vec.as_mut_ptr().write_bytes(0, start);
                vec.set_len(start);
            }
        }

        let res = AlignedByteVec {
            inner: vec,
            start: start as u32,
        };
        debug_assert!(res.capacity() >= capacity);
        res
    }

    /// Creates a new vector of specified length, filled with zeros.
    pub fn zeroed(len: usize) -> AlignedByteVec {
        let mut v = AlignedByteVec::with_capacity(len);
        v.resize(len, 0);
        v
    }

    /// Creates a new vector containing a copy of the provided slice.
    pub fn copy_from_slice(data: &[u8]) -> AlignedByteVec {
        let mut vec = AlignedByteVec::with_capacity(data.len());
        vec.extend_from_slice(data);
        vec
    }

    /// Returns the number of bytes in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len() - self.start_offset()
    }

    /// Returns true if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of bytes the vector can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        round_down(
            self.inner.capacity() - self.start_offset(),
            Self::BLOCK_SIZE,
        )
    }

    /// Returns a raw pointer to the vector's payload.
    ///
    /// With no allocation the pointer is dangling but `ALIGNMENT`-aligned,
    /// preserving the payload alignment guarantee for zero-length casts.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        if self.inner.capacity() == 0 {
            return Self::ALIGNMENT as *const u8;
        }
        unsafe { self.inner.as_ptr().add(self.start_offset()) }
    }

    /// Returns a mutable raw pointer to the vector's payload.
    ///
    /// With no allocation the pointer is dangling but `ALIGNMENT`-aligned,
    /// preserving the payload alignment guarantee for zero-length casts.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        if self.inner.capacity() == 0 {
            return Self::ALIGNMENT as *mut u8;
        }
        unsafe { self.inner.as_mut_ptr().add(self.start_offset()) }
    }

    /// Returns a slice containing the entire vector.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.as_ptr(), self.len()) }
    }

    /// Returns a mutable slice containing the entire vector.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        unsafe { std::slice::from_raw_parts_mut(self.as_mut_ptr(), self.len()) }
    }

    /// Reserves capacity for at least `additional` more bytes.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        if self.capacity() - self.len() >= additional {
            return;
        }
        self.grow(additional);
    }

    /// Appends a slice to the vector.
    #[inline]
    pub fn extend_from_slice(&mut self, s: &[u8]) {
        self.reserve(s.len());
        self.inner.extend_from_slice(s);
    }

    /// Resizes the vector to the specified length, filling any new space with
    /// the given value.
    pub fn resize(&mut self, new_len: usize, value: u8) {
        let len = self.len();
        if new_len > len {
            self.reserve(new_len - len);
            unsafe {
                self.as_mut_ptr().add(len).write_bytes(value, new_len - len);
                self.inner.set_len(self.start_offset() + new_len);
            }
        } else {
            self.inner.truncate(self.start_offset() + new_len);
        }
    }

    /// Truncates the vector to the specified length.
    pub fn truncate(&mut self, new_len: usize) {
        self.inner.truncate(self.start_offset() + new_len.min(self.len()));
    }

    /// Clears the vector, removing all values.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Checks if the payload is aligned to the specified alignment at the
    /// given byte offset.
    pub fn is_aligned_at(&self, offset: usize, alignment: usize) -> bool {
        assert!(offset <= self.len());
        is_aligned(unsafe { self.as_ptr().add(offset) }, alignment)
    }

    #[inline]
    fn start_offset(&self) -> usize {
        self.start as usize
    }

    /// Grows the vector's capacity to accommodate at least `additional` more
    /// bytes.
    #[cold]
    fn grow(&mut self, additional: usize) {
        let new_cap = round_up(
            self.len().checked_add(additional).expect("add"),
            Self::BLOCK_SIZE,
        );
        let new_cap = std::cmp::max(self.capacity() * 2, new_cap);
        let mut v = Self::with_capacity(new_cap);
        if !self.is_empty() {
            v.inner.extend_from_slice(self.as_slice());
        }
        *self = v;
    }
}

impl AlignedByteVec {
    /// Appends a value of type `T` to the vector by copying its bytes.
    #[inline]
    pub fn push_typed<T>(&mut self, value: T)
    where
        T: bytemuck::NoUninit,
    {
        self.extend_from_slice(bytemuck::bytes_of(&value));
    }

    /// Appends a slice of values of type `T` to the vector by copying their
    /// bytes.
    #[inline]
    pub fn extend_from_typed_slice<T>(&mut self, values: &[T])
    where
        T: bytemuck::NoUninit,
    {
        self.extend_from_slice(bytemuck::cast_slice(values));
    }

    /// Resizes the vector to the specified count of elements of type `T`,
    /// filling any new space with the given value.
    pub fn resize_typed<T>(&mut self, new_count: usize, value: T)
    where
        T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
    {
        let count = self.len() / std::mem::size_of::<T>();
        let size = count * std::mem::size_of::<T>();
        let new_size = new_count * std::mem::size_of::<T>();
        if new_size > size {
            self.reserve(new_size - size);
            let extra_count = new_count - count;
            unsafe {
                let target = self.as_mut_ptr().add(size) as *mut T;
                for i in 0..extra_count {
                    std::ptr::write(target.add(i), value);
                }
                self.inner.set_len(self.start_offset() + new_size);
            }
        } else {
            self.inner.truncate(self.start_offset() + new_size);
        }
    }

    /// Resizes the vector to the specified count of elements of type `T`,
    /// filling any new space with zeros.
    pub fn resize_zeroed<T>(&mut self, new_count: usize)
    where
        T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
    {
        let new_size = new_count * std::mem::size_of::<T>();
        self.resize(new_size, 0);
    }

    /// Returns a slice of `T` values over the vector's payload.
    #[inline]
    pub fn typed_data<T>(&self) -> &[T]
    where
        T: bytemuck::AnyBitPattern,
    {
        bytemuck::cast_slice(self.as_slice())
    }

    /// Returns a mutable slice of `T` values over the vector's payload.
    #[inline]
    pub fn typed_data_mut<T>(&mut self) -> &mut [T]
    where
        T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
    {
        bytemuck::cast_slice_mut(self.as_mut_slice())
    }
}

impl std::ops::Deref for AlignedByteVec {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl std::ops::DerefMut for AlignedByteVec {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl Default for AlignedByteVec {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for AlignedByteVec {
    fn clone(&self) -> AlignedByteVec {
        AlignedByteVec::copy_from_slice(self.as_slice())
    }
}

impl std::fmt::Debug for AlignedByteVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedByteVec")
            .field("len", &self.len())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl PartialEq for AlignedByteVec {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for AlignedByteVec {}
