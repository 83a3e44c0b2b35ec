//! Memoized range computation keyed on the pagination inputs.

use tracing::trace;

use super::range::{PageMarker, PaginationOptions, PaginationRange, RangeError, compute_range};

/// Caches the most recent range so unchanged inputs skip recomputation.
///
/// Intended for render loops that ask for the same range every frame.
#[derive(Debug, Default)]
pub struct RangeMemo {
    cached: Option<(PaginationOptions, PaginationRange)>,
    recomputations: u64,
}

impl RangeMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the range for `options`, recomputing only when the inputs changed.
    ///
    /// A failed computation leaves the previous entry in place.
    pub fn get(&mut self, options: &PaginationOptions) -> Result<&[PageMarker], RangeError> {
        let range = match self.cached.take() {
            Some((cached_options, range)) if cached_options == *options => {
                trace!(?options, "reusing memoized pagination range");
                range
            }
            previous => match compute_range(options) {
                Ok(range) => {
                    self.recomputations += 1;
                    range
                }
                Err(err) => {
                    self.cached = previous;
                    return Err(err);
                }
            },
        };

        let (_, range) = self.cached.insert((*options, range));
        Ok(range.as_slice())
    }

    /// How many times the range has actually been computed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn clear(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_inputs_reuse_cached_range() {
        let mut memo = RangeMemo::new();
        let options = PaginationOptions::new(500, 10, 25);

        let first = memo.get(&options).unwrap().to_vec();
        let second = memo.get(&options).unwrap().to_vec();

        assert_eq!(first, second);
        assert_eq!(memo.recomputations(), 1);
    }

    #[test]
    fn changed_inputs_recompute() {
        let mut memo = RangeMemo::new();
        memo.get(&PaginationOptions::new(500, 10, 25)).unwrap();
        let moved = memo.get(&PaginationOptions::new(500, 10, 1)).unwrap().to_vec();

        assert_eq!(moved.first(), Some(&PageMarker::Page(1)));
        assert_eq!(moved.get(1), Some(&PageMarker::Page(2)));
        assert_eq!(memo.recomputations(), 2);
    }

    #[test]
    fn failure_keeps_previous_entry() {
        let mut memo = RangeMemo::new();
        let good = PaginationOptions::new(50, 10, 1);
        memo.get(&good).unwrap();

        assert!(memo.get(&PaginationOptions::new(50, 0, 1)).is_err());
        memo.get(&good).unwrap();
        assert_eq!(memo.recomputations(), 1);
    }

    #[test]
    fn cache_hit_matches_fresh_computation() {
        let mut memo = RangeMemo::new();
        let options = PaginationOptions::new(500, 10, 50);
        memo.get(&options).unwrap();

        let expected = compute_range(&options).unwrap();
        assert_eq!(memo.get(&options).unwrap(), expected.as_slice());
        assert_eq!(memo.recomputations(), 1);
    }

    #[test]
    fn clear_forces_recompute() {
        let mut memo = RangeMemo::new();
        let options = PaginationOptions::new(50, 10, 1);
        memo.get(&options).unwrap();
        memo.clear();
        memo.get(&options).unwrap();
        assert_eq!(memo.recomputations(), 2);
    }
}
