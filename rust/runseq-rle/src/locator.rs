//! Mapping of logical positions to run coordinates.

/// The run-space coordinate of a single logical position.
///
/// Both fields are 1-based: `run_index` identifies the run and
/// `intra_run_offset` the position within it (1 is the run's first logical
/// position).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunCoordinate {
    pub run_index: usize,
    pub intra_run_offset: u64,
}

/// Locates logical positions within a sequence of run lengths.
///
/// Built once per query batch from the run lengths; lookups binary-search a
/// cumulative prefix-sum array, which is behavior-identical to a linear scan
/// over the lengths.
#[derive(Debug, Clone)]
pub struct RunLocator {
    /// `cumulative[i]` is the logical position of the last element of run
    /// `i + 1`.
    cumulative: Vec<u64>,
}

impl RunLocator {
    /// Builds a locator from per-run lengths.
    pub fn new(lengths: &[u64]) -> RunLocator {
        let mut cumulative = Vec::with_capacity(lengths.len());
        let mut total = 0u64;
        for &length in lengths {
            total += length;
            cumulative.push(total);
        }
        RunLocator { cumulative }
    }

    /// Returns the length of the logical sequence.
    #[inline]
    pub fn logical_len(&self) -> u64 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Maps a 1-based logical position to its run coordinate.
    ///
    /// The caller must ensure `1 <= position <= logical_len()`.
    pub fn locate(&self, position: u64) -> RunCoordinate {
        debug_assert!(position >= 1 && position <= self.logical_len());
        let index = self.cumulative.partition_point(|&end| end < position);
        let preceding = if index == 0 {
            0
        } else {
            self.cumulative[index - 1]
        };
        RunCoordinate {
            run_index: index + 1,
            intra_run_offset: position - preceding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The straightforward O(k) scan the binary search must agree with.
    fn locate_linear(lengths: &[u64], position: u64) -> RunCoordinate {
        let mut cumulative = 0;
        for (i, &length) in lengths.iter().enumerate() {
            cumulative += length;
            if position <= cumulative {
                return RunCoordinate {
                    run_index: i + 1,
                    intra_run_offset: position - (cumulative - length),
                };
            }
        }
        unreachable!("position out of bounds");
    }

    #[test]
    fn test_locate_basic() {
        let locator = RunLocator::new(&[2, 3, 1]);
        assert_eq!(locator.logical_len(), 6);

        assert_eq!(
            locator.locate(1),
            RunCoordinate {
                run_index: 1,
                intra_run_offset: 1,
            }
        );
        assert_eq!(
            locator.locate(2),
            RunCoordinate {
                run_index: 1,
                intra_run_offset: 2,
            }
        );
        assert_eq!(
            locator.locate(3),
            RunCoordinate {
                run_index: 2,
                intra_run_offset: 1,
            }
        );
        assert_eq!(
            locator.locate(5),
            RunCoordinate {
                run_index: 2,
                intra_run_offset: 3,
            }
        );
        assert_eq!(
            locator.locate(6),
            RunCoordinate {
                run_index: 3,
                intra_run_offset: 1,
            }
        );
    }

    #[test]
    fn test_locate_single_run() {
        let locator = RunLocator::new(&[10]);
        for position in 1..=10 {
            let coord = locator.locate(position);
            assert_eq!(coord.run_index, 1);
            assert_eq!(coord.intra_run_offset, position);
        }
    }

    #[test]
    fn test_empty_lengths() {
        let locator = RunLocator::new(&[]);
        assert_eq!(locator.logical_len(), 0);
    }

    #[test]
    fn test_locate_matches_linear_scan() {
        let mut rng = fastrand::Rng::with_seed(4242);
        let lengths: Vec<u64> = (0..200).map(|_| rng.u64(1..7)).collect();
        let locator = RunLocator::new(&lengths);

        for position in 1..=locator.logical_len() {
            assert_eq!(locator.locate(position), locate_linear(&lengths, position));
        }
    }
}
