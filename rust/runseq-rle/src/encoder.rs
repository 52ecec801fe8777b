//! Construction of the canonical run-length encoding.

use runseq_common::{Result, error::Error};
use runseq_sequence::{
    schema::{Complex64, ElementType},
    value_sequence::ValueSequence,
    values::Values,
};

use crate::rle_sequence::RleSequence;

/// An element that can participate in the run-collapsing scan.
///
/// Run boundaries are decided by `PartialEq`, which gives each kind its exact
/// equality semantics: bitwise value equality for integral kinds (sentinel
/// "missing" values compare equal to themselves), IEEE comparison for
/// floating-point and complex components (NaN is never equal, so NaN markers
/// never merge into a longer run).
pub trait RunElement: Copy + PartialEq + bytemuck::Pod {}

impl RunElement for u8 {}
impl RunElement for i32 {}
impl RunElement for f64 {}
impl RunElement for Complex64 {}
impl RunElement for [u8; 16] {}

impl RleSequence {
    /// Builds the canonical encoding of `x`, optionally folding in
    /// pre-supplied per-element counts.
    ///
    /// The scan compares each element to its predecessor; an unequal pair
    /// opens a new run, and the current run accumulates `counts[i]` (or 1).
    /// Adjacency is always decided by value equality of `x`, never by the
    /// grouping of `counts`: equal neighbors are re-collapsed and their
    /// supplied counts summed.
    ///
    /// # Errors
    ///
    /// * `LengthMismatch` if `counts` is supplied with a length different
    ///   from `x.len()`.
    /// * `UnsupportedElementType` if `x` is not of one of the six encodable
    ///   kinds.
    pub fn encode(x: &ValueSequence, counts: Option<&[u64]>) -> Result<RleSequence> {
        if let Some(counts) = counts {
            if counts.len() != x.len() {
                return Err(Error::length_mismatch(x.len(), counts.len()));
            }
        }

        match x.element_type {
            ElementType::Boolean | ElementType::Byte => encode_fixed::<u8>(x, counts),
            ElementType::Int32 => encode_fixed::<i32>(x, counts),
            ElementType::Float64 => encode_fixed::<f64>(x, counts),
            ElementType::Complex64 => encode_fixed::<Complex64>(x, counts),
            ElementType::String => encode_strings(x, counts),
            ElementType::Guid => Err(Error::unsupported_element_type(x.element_type.name())),
        }
    }
}

#[inline]
fn run_length_at(counts: Option<&[u64]>, index: usize) -> u64 {
    counts.map_or(1, |counts| counts[index])
}

fn encode_fixed<T>(x: &ValueSequence, counts: Option<&[u64]>) -> Result<RleSequence>
where
    T: RunElement,
{
    let src = x.values.as_slice::<T>();
    if src.is_empty() {
        return Ok(RleSequence::empty(x.element_type));
    }

    // Worst case: every element is its own run. The buffers are sized for
    // that up front and trimmed to the discovered run count at the end.
    let mut values = Values::with_capacity::<T>(src.len());
    let mut lengths = Values::zeroed::<u64>(src.len());
    let mut index = 0;

    values.push(src[0]);
    lengths.as_mut_slice::<u64>()[0] = run_length_at(counts, 0);
    for i in 1..src.len() {
        if src[i] != src[i - 1] {
            index += 1;
            values.push(src[i]);
        }
        lengths.as_mut_slice::<u64>()[index] += run_length_at(counts, i);
    }
    lengths.resize(index + 1, 0u64);

    Ok(RleSequence {
        values: ValueSequence {
            values,
            offsets: None,
            element_type: x.element_type,
        },
        lengths,
    })
}

fn encode_strings(x: &ValueSequence, counts: Option<&[u64]>) -> Result<RleSequence> {
    let n = x.len();
    if n == 0 {
        return Ok(RleSequence::empty(ElementType::String));
    }

    let mut values = ValueSequence::with_capacity(ElementType::String, n);
    let mut lengths = Values::zeroed::<u64>(n);
    let mut index = 0;

    values.push_str(x.string_at(0));
    lengths.as_mut_slice::<u64>()[0] = run_length_at(counts, 0);
    for i in 1..n {
        // Exact byte-content comparison of the UTF-8 payloads.
        if x.bytes_at(i) != x.bytes_at(i - 1) {
            index += 1;
            values.push_str(x.string_at(i));
        }
        lengths.as_mut_slice::<u64>()[index] += run_length_at(counts, i);
    }
    lengths.resize(index + 1, 0u64);

    Ok(RleSequence { values, lengths })
}
