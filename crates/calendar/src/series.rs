//! Time series: a time index paired with one value per timestamp.

use crate::error::CalendarError;
use crate::index::TimeIndex;
use crate::timestamp::Timestamp;

/// An ordered sequence of `(timestamp, value)` pairs.
///
/// Values are passed through untouched; NaN and infinities are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    index: TimeIndex,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Creates a series from an index and a matching value vector.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::LengthMismatch`] if the lengths differ.
    pub fn new(index: TimeIndex, values: Vec<f64>) -> Result<Self, CalendarError> {
        if index.len() != values.len() {
            return Err(CalendarError::LengthMismatch {
                expected: index.len(),
                got: values.len(),
            });
        }
        Ok(Self { index, values })
    }

    /// Creates a series from `(timestamp, value)` pairs in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NotStrictlyIncreasing`] if the timestamps
    /// are not strictly increasing.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (Timestamp, f64)>,
    ) -> Result<Self, CalendarError> {
        let (timestamps, values): (Vec<Timestamp>, Vec<f64>) = pairs.into_iter().unzip();
        Self::new(TimeIndex::new(timestamps)?, values)
    }

    /// Returns the time index.
    pub fn index(&self) -> &TimeIndex {
        &self.index
    }

    /// Returns the values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Row at `position`, if in range.
    pub fn get(&self, position: usize) -> Option<(Timestamp, f64)> {
        Some((self.index.get(position)?, *self.values.get(position)?))
    }

    /// Iterates over `(timestamp, value)` rows in ascending time order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Timestamp, f64)> + '_ {
        self.index.iter().zip(self.values.iter().copied())
    }

    /// Consumes the series and returns its index and values.
    pub fn into_parts(self) -> (TimeIndex, Vec<f64>) {
        (self.index, self.values)
    }
}
