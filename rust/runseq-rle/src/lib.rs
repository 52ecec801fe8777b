//! Run-length encoded sequences over typed flat sequences.
//!
//! A [`RleSequence`] compresses a long logical sequence into parallel
//! `(values, lengths)` buffers: `values[i]` occupies `lengths[i]` consecutive
//! logical positions. Construction collapses equal adjacent elements
//! ([`RleSequence::encode`]); positional queries extract contiguous logical
//! windows directly from the compressed form
//! ([`RleSequence::select_windows`]), without decompressing.
//!
//! # Main Components
//!
//! - [`rle_sequence::RleSequence`] — the encoding itself, plus `decode`.
//! - [`encoder`] — the generic equal-adjacent-run collapsing scan.
//! - [`locator::RunLocator`] — maps 1-based logical positions to
//!   (run index, intra-run offset) coordinates.
//! - [`window`] / [`select`] — trimmed sub-encoding extraction for run
//!   ranges and batches of `(start, width)` window requests.

pub mod encoder;
pub mod locator;
pub mod rle_sequence;
pub mod select;
pub mod window;

pub use encoder::RunElement;
pub use locator::{RunCoordinate, RunLocator};
pub use rle_sequence::RleSequence;
pub use select::WindowRequest;
