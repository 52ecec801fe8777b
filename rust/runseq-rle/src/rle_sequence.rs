//! The run-length encoded sequence entity.

use runseq_sequence::{
    schema::{Complex64, ElementType},
    value_sequence::ValueSequence,
    values::Values,
};

use crate::encoder::RunElement;

/// A run-length encoded sequence.
///
/// Two parallel buffers of equal run count `k`: `values` holds one element
/// per run, `lengths` holds the number of consecutive logical positions each
/// run occupies. Canonical construction via [`RleSequence::encode`]
/// guarantees that no two adjacent values compare equal (with the documented
/// exception of NaN-style markers, which never compare equal to anything and
/// therefore always form singleton runs).
///
/// Window extraction produces derived `RleSequence` instances whose first or
/// last length may be trimmed; they are not re-canonicalized.
#[derive(Debug, Clone, PartialEq)]
pub struct RleSequence {
    /// One element per run, no two adjacent equal for canonical encodings.
    pub values: ValueSequence,
    /// Per-run occupancy counts (`u64`), every entry at least 1.
    pub lengths: Values,
}

impl RleSequence {
    /// Creates an empty encoding for a given element type.
    pub fn empty(element_type: ElementType) -> RleSequence {
        RleSequence {
            values: ValueSequence::empty(element_type),
            lengths: Values::new(),
        }
    }

    /// Returns the element type of the encoded values.
    #[inline]
    pub fn element_type(&self) -> ElementType {
        self.values.element_type
    }

    /// Returns the number of runs.
    #[inline]
    pub fn run_count(&self) -> usize {
        self.lengths.len::<u64>()
    }

    /// Returns the run length buffer as a slice.
    #[inline]
    pub fn run_lengths(&self) -> &[u64] {
        self.lengths.as_slice()
    }

    /// Returns the length of the logical (decompressed) sequence.
    pub fn logical_len(&self) -> u64 {
        self.run_lengths().iter().sum()
    }

    /// Returns `true` if the logical sequence is empty.
    ///
    /// This is equivalent to `run_count() == 0`: a run is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.run_count() == 0
    }

    /// Expands the encoding back into a flat sequence, repeating each value
    /// according to its run length.
    pub fn decode(&self) -> ValueSequence {
        match self.element_type() {
            ElementType::Boolean | ElementType::Byte => self.decode_fixed::<u8>(),
            ElementType::Int32 => self.decode_fixed::<i32>(),
            ElementType::Float64 => self.decode_fixed::<f64>(),
            ElementType::Complex64 => self.decode_fixed::<Complex64>(),
            ElementType::Guid => self.decode_fixed::<[u8; 16]>(),
            ElementType::String => self.decode_strings(),
        }
    }

    fn decode_fixed<T>(&self) -> ValueSequence
    where
        T: RunElement,
    {
        let src = self.values.values.as_slice::<T>();
        let mut values = Values::with_capacity::<T>(self.logical_len() as usize);
        for (&value, &length) in src.iter().zip(self.run_lengths()) {
            let len = values.len::<T>();
            values.resize(len + length as usize, value);
        }
        ValueSequence {
            values,
            offsets: None,
            element_type: self.element_type(),
        }
    }

    fn decode_strings(&self) -> ValueSequence {
        let mut target = ValueSequence::with_capacity(ElementType::String, 0);
        for (index, &length) in self.run_lengths().iter().enumerate() {
            let value = self.values.string_at(index);
            for _ in 0..length {
                target.push_str(value);
            }
        }
        target
    }
}
