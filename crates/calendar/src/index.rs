//! Strictly increasing time indices and regular grid generation.

use chrono::TimeDelta;

use crate::error::CalendarError;
use crate::timestamp::Timestamp;

/// Upper bound on the number of points [`TimeIndex::regular`] generates.
pub const MAX_GRID_POINTS: usize = 100_000_000;

/// An ordered, duplicate-free sequence of timestamps.
///
/// Construction rejects any pair of neighbours that is not strictly
/// increasing, so every `TimeIndex` in circulation satisfies the ordering
/// precondition of the alignment and resampling routines. An empty index is
/// allowed; operations that need data check for it themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TimeIndex(Vec<Timestamp>);

impl TimeIndex {
    /// Creates a new index after checking strict monotonicity.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NotStrictlyIncreasing`] naming the first
    /// position whose timestamp is not later than its predecessor.
    pub fn new(timestamps: Vec<Timestamp>) -> Result<Self, CalendarError> {
        if let Some(pos) = timestamps.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CalendarError::NotStrictlyIncreasing {
                position: pos + 1,
                previous: timestamps[pos],
                current: timestamps[pos + 1],
            });
        }
        Ok(Self(timestamps))
    }

    /// Creates an index from raw nanosecond values.
    ///
    /// # Errors
    ///
    /// Same as [`TimeIndex::new`].
    pub fn from_nanos(nanos: impl IntoIterator<Item = i64>) -> Result<Self, CalendarError> {
        Self::new(nanos.into_iter().map(Timestamp::from_nanos).collect())
    }

    /// Generates the grid `start, start + step, ...` up to and including `end`.
    ///
    /// Returns an empty index when `start > end`. Generation stops early if
    /// the next point would overflow the nanosecond range.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let start = Timestamp::parse("2000-01-01")?;
    /// let end = Timestamp::parse("2000-01-02")?;
    /// let grid = TimeIndex::regular(start, end, TimeDelta::hours(6))?;
    /// assert_eq!(grid.len(), 5);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidStep`] if `step` is not positive or
    /// does not fit in nanoseconds, and [`CalendarError::GridTooLarge`] if
    /// the grid would hold more than [`MAX_GRID_POINTS`] points or cannot be
    /// allocated.
    pub fn regular(
        start: Timestamp,
        end: Timestamp,
        step: TimeDelta,
    ) -> Result<Self, CalendarError> {
        let step_nanos = match step.num_nanoseconds() {
            Some(n) if n > 0 => n,
            _ => return Err(CalendarError::InvalidStep { step }),
        };
        if start > end {
            return Ok(Self::default());
        }
        let span = (i128::from(end.nanos()) - i128::from(start.nanos())) / i128::from(step_nanos);
        let count = span + 1;
        let too_large = || CalendarError::GridTooLarge {
            points: count,
            max: MAX_GRID_POINTS,
        };
        let capacity = usize::try_from(count)
            .ok()
            .filter(|&n| n <= MAX_GRID_POINTS)
            .ok_or_else(too_large)?;
        let mut points: Vec<Timestamp> = Vec::new();
        points.try_reserve_exact(capacity).map_err(|_| too_large())?;
        let mut current = start;
        loop {
            points.push(current);
            match current.checked_add_nanos(step_nanos) {
                Some(next) if next <= end => current = next,
                _ => break,
            }
        }
        Ok(Self(points))
    }

    /// Returns the timestamps as a slice.
    pub fn as_slice(&self) -> &[Timestamp] {
        &self.0
    }

    /// Consumes the index and returns the timestamps.
    pub fn into_vec(self) -> Vec<Timestamp> {
        self.0
    }

    /// Number of timestamps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the index holds no timestamps.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Earliest timestamp, if any.
    pub fn first(&self) -> Option<Timestamp> {
        self.0.first().copied()
    }

    /// Latest timestamp, if any.
    pub fn last(&self) -> Option<Timestamp> {
        self.0.last().copied()
    }

    /// Timestamp at `position`, if in range.
    pub fn get(&self, position: usize) -> Option<Timestamp> {
        self.0.get(position).copied()
    }

    /// Iterates over the timestamps in ascending order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Timestamp> + '_ {
        self.0.iter().copied()
    }

    /// Returns `true` if `timestamp` is an element of this index.
    pub fn contains(&self, timestamp: Timestamp) -> bool {
        self.0.binary_search(&timestamp).is_ok()
    }
}

impl TryFrom<Vec<Timestamp>> for TimeIndex {
    type Error = CalendarError;

    fn try_from(timestamps: Vec<Timestamp>) -> Result<Self, Self::Error> {
        Self::new(timestamps)
    }
}

impl std::ops::Index<usize> for TimeIndex {
    type Output = Timestamp;

    fn index(&self, position: usize) -> &Timestamp {
        &self.0[position]
    }
}
