//! Aligned byte storage used as the backing buffer for typed value sequences.

pub mod align;
pub mod buffer;

pub use buffer::AlignedByteVec;
