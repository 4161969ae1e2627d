//! Time bounds of series collections.
//!
//! Any container that can report the first and last timestamp of its data
//! implements [`BoundedSeries`]; [`common_bounds`] then finds the period in
//! which every member has data.

use crate::index::TimeIndex;
use crate::series::TimeSeries;
use crate::timestamp::Timestamp;

/// A closed time interval `[tmin, tmax]` with `tmin <= tmax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeBounds {
    tmin: Timestamp,
    tmax: Timestamp,
}

impl TimeBounds {
    /// Creates bounds, or `None` if `tmin > tmax`.
    pub fn new(tmin: Timestamp, tmax: Timestamp) -> Option<Self> {
        (tmin <= tmax).then_some(Self { tmin, tmax })
    }

    /// Start of the interval.
    pub fn tmin(self) -> Timestamp {
        self.tmin
    }

    /// End of the interval.
    pub fn tmax(self) -> Timestamp {
        self.tmax
    }

    /// Returns `true` if `timestamp` lies within the closed interval.
    pub fn contains(self, timestamp: Timestamp) -> bool {
        (self.tmin..=self.tmax).contains(&timestamp)
    }

    /// Overlap of two intervals, or `None` if they are disjoint.
    pub fn intersect(self, other: Self) -> Option<Self> {
        Self::new(self.tmin.max(other.tmin), self.tmax.min(other.tmax))
    }
}

/// Capability of reporting the time span covered by a series' data.
pub trait BoundedSeries {
    /// First and last timestamp, or `None` when there is no data.
    fn bounds(&self) -> Option<TimeBounds>;
}

impl BoundedSeries for TimeBounds {
    fn bounds(&self) -> Option<TimeBounds> {
        Some(*self)
    }
}

impl BoundedSeries for TimeIndex {
    fn bounds(&self) -> Option<TimeBounds> {
        TimeBounds::new(self.first()?, self.last()?)
    }
}

impl BoundedSeries for TimeSeries {
    fn bounds(&self) -> Option<TimeBounds> {
        self.index().bounds()
    }
}

impl<T: BoundedSeries + ?Sized> BoundedSeries for &T {
    fn bounds(&self) -> Option<TimeBounds> {
        (**self).bounds()
    }
}

impl<T: BoundedSeries + ?Sized> BoundedSeries for Box<T> {
    fn bounds(&self) -> Option<TimeBounds> {
        (**self).bounds()
    }
}

/// Returns the period in which every item has data:
/// `[max(first timestamps), min(last timestamps)]`.
///
/// Returns `None` when `items` is empty, when any item has no data, or when
/// the spans do not overlap.
pub fn common_bounds<I>(items: I) -> Option<TimeBounds>
where
    I: IntoIterator,
    I::Item: BoundedSeries,
{
    let mut items = items.into_iter();
    let mut acc = items.next()?.bounds()?;
    for item in items {
        acc = acc.intersect(item.bounds()?)?;
    }
    Some(acc)
}
