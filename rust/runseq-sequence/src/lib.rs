//! Flat typed sequences: the storage layer underneath the run-length encoding.
//!
//! # Core Concepts
//!
//! A [`value_sequence::ValueSequence`] is an owned, contiguous sequence of
//! elements of a single [`schema::ElementType`]. Fixed-size elements live
//! directly in an aligned [`values::Values`] buffer; variable-sized text
//! elements are stored as one concatenated byte buffer accompanied by
//! [`offsets::Offsets`] (N+1 offsets, value `i` occupying the byte range
//! `offsets[i]..offsets[i + 1]`).
//!
//! Missing data is represented in-band by sentinel element values (e.g. NaN
//! payloads for floating-point), never by a separate null mask, so sequences
//! carry no presence information.
//!
//! The layer also provides the positional gather primitive
//! [`value_sequence::ValueSequence::extract_subranges`], used by the
//! run-length window extraction to slice flat sequences by `(start, width)`
//! ranges.

pub mod offsets;
pub mod schema;
pub mod value_sequence;
pub mod values;
