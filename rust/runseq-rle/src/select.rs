//! Batch selection of logical windows from a run-length encoded sequence.

use runseq_common::{Result, error::Error, verify_arg};

use crate::{locator::RunLocator, rle_sequence::RleSequence};

/// A requested contiguous logical window: 1-based `start` and a non-negative
/// `width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRequest {
    pub start: u64,
    pub width: u64,
}

impl WindowRequest {
    pub fn new(start: u64, width: u64) -> WindowRequest {
        WindowRequest { start, width }
    }
}

impl RleSequence {
    /// Answers a batch of window requests over this encoding, one result per
    /// request, in request order.
    ///
    /// Each window is located in run space and extracted directly from the
    /// compressed form; a zero-width request yields the empty encoding
    /// regardless of where its start points (the start must still lie within
    /// bounds). Results may carry trimmed first/last run lengths and are not
    /// re-canonicalized.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` if a request's `start` is zero.
    /// * `WindowOutOfBounds` if `start + width - 1` exceeds the logical
    ///   length.
    ///
    /// A single invalid request fails the entire batch; no partial results
    /// are returned.
    pub fn select_windows(&self, requests: &[WindowRequest]) -> Result<Vec<RleSequence>> {
        let locator = RunLocator::new(self.run_lengths());
        let logical_len = locator.logical_len();

        let mut windows = Vec::with_capacity(requests.len());
        for request in requests {
            verify_arg!(start, request.start >= 1);
            let end = request.start + request.width - 1;
            if end > logical_len {
                return Err(Error::window_out_of_bounds(
                    request.start,
                    request.width,
                    logical_len,
                ));
            }

            let window = if request.width == 0 {
                self.run_window(1, 0, 0, 0)?
            } else {
                let first = locator.locate(request.start);
                let last = locator.locate(end);
                // Leading positions of the first run to discard, and trailing
                // positions of the last run beyond the window's end.
                let offset_start = first.intra_run_offset - 1;
                let offset_end = self.run_lengths()[last.run_index - 1] - last.intra_run_offset;
                self.run_window(first.run_index, last.run_index, offset_start, offset_end)?
            };
            windows.push(window);
        }
        Ok(windows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use runseq_common::error::ErrorKind;
    use runseq_sequence::{schema::ElementType, value_sequence::ValueSequence};

    fn sample() -> RleSequence {
        // Logical sequence [1, 1, 2, 2, 2, 3], runs (1 x2, 2 x3, 3 x1).
        let seq = ValueSequence::from_slice(ElementType::Int32, &[1i32, 1, 2, 2, 2, 3]);
        RleSequence::encode(&seq, None).unwrap()
    }

    #[test]
    fn test_mid_run_window() {
        let rle = sample();
        // Window [2, 4] is logical [1, 2, 2].
        let windows = rle.select_windows(&[WindowRequest::new(2, 3)]).unwrap();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].values.values.as_slice::<i32>(), &[1, 2]);
        assert_eq!(windows[0].run_lengths(), &[1, 2]);
    }

    #[test]
    fn test_full_sequence_window() {
        let rle = sample();
        let windows = rle.select_windows(&[WindowRequest::new(1, 6)]).unwrap();
        assert_eq!(windows[0], rle);
    }

    #[test]
    fn test_zero_width_window() {
        let rle = sample();
        let windows = rle
            .select_windows(&[WindowRequest::new(4, 0), WindowRequest::new(1, 0)])
            .unwrap();
        assert!(windows[0].is_empty());
        assert!(windows[1].is_empty());
    }

    #[test]
    fn test_window_out_of_bounds() {
        let rle = sample();
        let err = rle.select_windows(&[WindowRequest::new(5, 5)]).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::WindowOutOfBounds {
                start: 5,
                width: 5,
                len: 6,
            }
        ));

        // A zero-width request must still start within bounds.
        assert!(rle.select_windows(&[WindowRequest::new(8, 0)]).is_err());
    }

    #[test]
    fn test_invalid_start() {
        let rle = sample();
        let err = rle.select_windows(&[WindowRequest::new(0, 1)]).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
    }

    #[test]
    fn test_invalid_request_aborts_batch() {
        let rle = sample();
        let requests = [WindowRequest::new(1, 6), WindowRequest::new(7, 1)];
        assert!(rle.select_windows(&requests).is_err());
    }

    #[test]
    fn test_result_order_matches_request_order() {
        let rle = sample();
        let requests = [
            WindowRequest::new(6, 1),
            WindowRequest::new(1, 2),
            WindowRequest::new(3, 0),
        ];
        let windows = rle.select_windows(&requests).unwrap();
        assert_eq!(windows[0].values.values.as_slice::<i32>(), &[3]);
        assert_eq!(windows[1].values.values.as_slice::<i32>(), &[1]);
        assert_eq!(windows[1].run_lengths(), &[2]);
        assert!(windows[2].is_empty());
    }

    #[test]
    fn test_empty_sequence_zero_width() {
        let rle = RleSequence::empty(ElementType::Int32);
        let windows = rle.select_windows(&[WindowRequest::new(1, 0)]).unwrap();
        assert!(windows[0].is_empty());

        assert!(rle.select_windows(&[WindowRequest::new(1, 1)]).is_err());
    }

    #[test]
    fn test_windows_match_decoded_slices() {
        let mut rng = fastrand::Rng::with_seed(1312);
        let src: Vec<i32> = (0..300).map(|_| rng.i32(0..5)).collect();
        let seq = ValueSequence::from_slice(ElementType::Int32, &src);
        let rle = RleSequence::encode(&seq, None).unwrap();

        let requests = (0..200)
            .map(|_| {
                let start = rng.u64(1..=300);
                let width = rng.u64(0..=300 - start + 1);
                WindowRequest::new(start, width)
            })
            .collect_vec();
        let windows = rle.select_windows(&requests).unwrap();

        for (request, window) in requests.iter().zip(&windows) {
            let start = (request.start - 1) as usize;
            let expected = &src[start..start + request.width as usize];
            assert_eq!(
                window.decode().values.as_slice::<i32>(),
                expected,
                "window (start: {}, width: {})",
                request.start,
                request.width
            );
            assert_eq!(window.logical_len(), request.width);
        }
    }

    #[test]
    fn test_string_windows_match_decoded_slices() {
        let words = ["a", "a", "bb", "bb", "bb", "c", "dd", "dd"];
        let seq = ValueSequence::from_strs(&words);
        let rle = RleSequence::encode(&seq, None).unwrap();

        for start in 1..=words.len() as u64 {
            for width in 0..=(words.len() as u64 - start + 1) {
                let windows = rle
                    .select_windows(&[WindowRequest::new(start, width)])
                    .unwrap();
                let decoded = windows[0].decode();
                assert_eq!(decoded.len() as u64, width);
                for i in 0..width as usize {
                    assert_eq!(decoded.string_at(i), words[(start - 1) as usize + i]);
                }
            }
        }
    }

    #[test]
    fn test_boundary_exactness() {
        let rle = sample();

        // Exactly covering whole runs returns their original lengths.
        let windows = rle.select_windows(&[WindowRequest::new(3, 3)]).unwrap();
        assert_eq!(windows[0].values.values.as_slice::<i32>(), &[2]);
        assert_eq!(windows[0].run_lengths(), &[3]);

        // A window ending mid-run trims only the last run.
        let windows = rle.select_windows(&[WindowRequest::new(1, 4)]).unwrap();
        assert_eq!(windows[0].run_lengths(), &[2, 2]);

        // A window starting mid-run trims only the first run.
        let windows = rle.select_windows(&[WindowRequest::new(2, 5)]).unwrap();
        assert_eq!(windows[0].run_lengths(), &[1, 3, 1]);
    }
}
