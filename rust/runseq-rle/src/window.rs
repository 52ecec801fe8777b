//! Extraction of a trimmed sub-encoding for a range of runs.

use runseq_common::{Result, verify_arg};
use runseq_sequence::values::Values;

use crate::rle_sequence::RleSequence;

impl RleSequence {
    /// Extracts the sub-encoding spanning run indices `[run_start, run_end]`
    /// (1-based, inclusive), trimming `offset_start` logical positions off
    /// the first run and `offset_end` off the last.
    ///
    /// `run_end == run_start - 1` is the valid empty-window sentinel and
    /// yields the empty encoding; the offsets are ignored in that case. When
    /// the window covers a single run, both trims apply to its one length.
    ///
    /// The caller must supply offsets that leave every trimmed length
    /// positive; this is guaranteed by the coordinates
    /// [`select_windows`](RleSequence::select_windows) computes.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` if `run_start < 1`, `run_end + 1 <
    /// run_start`, or `run_end` exceeds the run count.
    pub fn run_window(
        &self,
        run_start: usize,
        run_end: usize,
        offset_start: u64,
        offset_end: u64,
    ) -> Result<RleSequence> {
        verify_arg!(run_start, run_start >= 1);
        verify_arg!(run_end, run_end + 1 >= run_start && run_end <= self.run_count());

        let run_width = run_end + 1 - run_start;
        if run_width == 0 {
            return Ok(RleSequence::empty(self.element_type()));
        }

        let values = self
            .values
            .extract_subranges(&[run_start - 1], &[run_width])?;

        let mut lengths = Values::from_slice(&self.run_lengths()[run_start - 1..run_end]);
        let trimmed = lengths.as_mut_slice::<u64>();
        trimmed[0] -= offset_start;
        trimmed[run_width - 1] -= offset_end;

        Ok(RleSequence { values, lengths })
    }
}
