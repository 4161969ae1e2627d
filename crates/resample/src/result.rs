//! Output type for resampling operations.

use kairos_calendar::{TimeSeries, Timestamp};

/// Result of an overlap-weighted resample.
///
/// Target points whose interval overlaps no source interval produce no row;
/// their timestamps are listed in [`ResampleResult::dropped`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResampleResult {
    series: TimeSeries,
    dropped: Vec<Timestamp>,
}

impl ResampleResult {
    /// Creates a new `ResampleResult`.
    pub(crate) fn new(series: TimeSeries, dropped: Vec<Timestamp>) -> Self {
        Self { series, dropped }
    }

    /// Returns the resampled series.
    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    /// Consumes the result and returns the series.
    pub fn into_series(self) -> TimeSeries {
        self.series
    }

    /// Target timestamps left out for lack of overlapping source data.
    pub fn dropped(&self) -> &[Timestamp] {
        &self.dropped
    }

    /// Returns `true` if every target point produced a row.
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }
}
