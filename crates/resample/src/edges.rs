//! Interval edges of interval-intensity series.

use kairos_calendar::Timestamp;

/// Half-open intervals `(start, end]` in nanoseconds, one per timestamp.
///
/// Each timestamp closes its interval, which opens at the previous
/// timestamp. The first interval has no predecessor and borrows the length
/// of the second. Edges are kept in `i128` so that the first start cannot
/// overflow for timestamps near the ends of the `i64` range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Intervals {
    pub(crate) starts: Vec<i128>,
    pub(crate) ends: Vec<i128>,
}

impl Intervals {
    /// Derives intervals from at least two strictly increasing timestamps.
    pub(crate) fn from_ends(timestamps: &[Timestamp]) -> Self {
        debug_assert!(timestamps.len() >= 2);
        let ends: Vec<i128> = timestamps.iter().map(|t| i128::from(t.nanos())).collect();
        let mut starts = Vec::with_capacity(ends.len());
        starts.push(ends[0] - (ends[1] - ends[0]));
        starts.extend_from_slice(&ends[..ends.len() - 1]);
        Self { starts, ends }
    }

    pub(crate) fn len(&self) -> usize {
        self.ends.len()
    }
}
