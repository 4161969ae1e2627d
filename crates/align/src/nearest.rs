//! Nearest-neighbor selection of dense timestamps for a reference grid.

use kairos_calendar::{TimeIndex, TimeSeries, Timestamp};
use tracing::debug;

use crate::error::AlignError;

/// Position in `dense` of the timestamp closest to `target`.
///
/// Targets outside the covered range map to the first or last element. An
/// exact midpoint between two neighbours resolves to the earlier one.
/// `dense` must be non-empty and strictly increasing.
fn nearest(dense: &[Timestamp], target: Timestamp) -> usize {
    let upper = dense.partition_point(|t| *t < target);
    if upper == 0 {
        return 0;
    }
    if upper == dense.len() {
        return dense.len() - 1;
    }
    let lower = upper - 1;
    // i128: differences of extreme i64 nanos overflow i64
    let below = i128::from(target.nanos()) - i128::from(dense[lower].nanos());
    let above = i128::from(dense[upper].nanos()) - i128::from(target.nanos());
    if above < below { upper } else { lower }
}

/// Sorted, de-duplicated positions in `dense` nearest to each point of
/// `reference`.
///
/// A single-element `dense` always yields `[0]`, whatever the reference.
///
/// # Errors
///
/// Returns [`AlignError::EmptyIndex`] if `dense` is empty.
pub fn nearest_positions(
    dense: &TimeIndex,
    reference: &TimeIndex,
) -> Result<Vec<usize>, AlignError> {
    if dense.is_empty() {
        return Err(AlignError::EmptyIndex { field: "dense" });
    }
    if dense.len() == 1 {
        return Ok(vec![0]);
    }
    let dense = dense.as_slice();
    let mut positions: Vec<usize> = reference.iter().map(|t| nearest(dense, t)).collect();
    positions.sort_unstable();
    positions.dedup();
    Ok(positions)
}

/// Thins `dense` so it is no finer than `reference`: keeps, for every
/// reference point, the nearest dense timestamp.
///
/// The result is a strictly increasing subsequence of `dense` with at most
/// one element per reference point. A single-element `dense` is returned
/// unchanged.
///
/// # Errors
///
/// Returns [`AlignError::EmptyIndex`] if `dense` is empty.
#[tracing::instrument(skip_all, fields(n_dense = dense.len(), n_reference = reference.len()))]
pub fn align(dense: &TimeIndex, reference: &TimeIndex) -> Result<TimeIndex, AlignError> {
    let positions = nearest_positions(dense, reference)?;
    debug!(n_selected = positions.len(), "aligned dense index");
    let selected = positions.iter().map(|&p| dense[p]).collect();
    Ok(TimeIndex::new(selected)?)
}

/// Downsamples a series by keeping the rows whose timestamps [`align`]
/// selects.
///
/// # Errors
///
/// Returns [`AlignError::EmptyIndex`] if `series` is empty.
#[tracing::instrument(skip_all, fields(n_series = series.len(), n_reference = reference.len()))]
pub fn sample_series(series: &TimeSeries, reference: &TimeIndex) -> Result<TimeSeries, AlignError> {
    let positions = nearest_positions(series.index(), reference)?;
    let index = positions.iter().map(|&p| series.index()[p]).collect();
    let values = positions.iter().map(|&p| series.values()[p]).collect();
    Ok(TimeSeries::new(TimeIndex::new(index)?, values)?)
}
