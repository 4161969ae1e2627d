//! Overlap-weighted resampling onto an arbitrary target index.

use kairos_calendar::{NANOS_PER_SECOND, TimeIndex, TimeSeries};
use tracing::debug;

use crate::edges::Intervals;
use crate::error::ResampleError;
use crate::result::ResampleResult;

/// Resamples an interval-intensity series onto `target` by overlap-weighted
/// averaging.
///
/// Each source value is the mean intensity over the interval ending at its
/// timestamp; target intervals are derived from `target` the same way. The
/// value of a target interval is the mean of the overlapping source values,
/// weighted by the length of the overlap:
///
/// ```text
///  source   (------10------](------20------](------30------]
///  target   (---------13.33---------](---------26.67---------]
/// ```
///
/// Upsampling therefore spreads a value uniformly over the finer steps (like
/// a backward fill), and downsampling averages. Neither index has to be
/// equidistant and the edges do not have to coincide. Intervals that only
/// touch at an endpoint do not overlap. A target point whose interval
/// overlaps no source interval is left out of the output and reported in
/// [`ResampleResult::dropped`].
///
/// Runs as a single sweep over both sequences.
///
/// # Errors
///
/// Returns [`ResampleError::TooShort`] if `series` or `target` has fewer
/// than two timestamps.
#[tracing::instrument(skip_all, fields(n_source = series.len(), n_target = target.len()))]
pub fn timestep_weighted_resample(
    series: &TimeSeries,
    target: &TimeIndex,
) -> Result<ResampleResult, ResampleError> {
    if series.len() < 2 {
        return Err(ResampleError::TooShort {
            field: "series",
            len: series.len(),
            min: 2,
        });
    }
    if target.len() < 2 {
        return Err(ResampleError::TooShort {
            field: "target",
            len: target.len(),
            min: 2,
        });
    }

    let source = Intervals::from_ends(series.index().as_slice());
    let grid = Intervals::from_ends(target.as_slice());
    let values = series.values();

    let mut kept = Vec::with_capacity(grid.len());
    let mut out = Vec::with_capacity(grid.len());
    let mut dropped = Vec::new();

    // Source and target starts/ends are both increasing, so the first
    // candidate source interval only ever moves forward.
    let mut first = 0;
    for (j, t1e) in target.iter().enumerate() {
        let (lo, hi) = (grid.starts[j], grid.ends[j]);
        while first < source.len() && source.ends[first] <= lo {
            first += 1;
        }

        let mut weighted = 0.0;
        let mut total = 0.0;
        let mut matched = 0;
        let mut i = first;
        while i < source.len() && source.starts[i] < hi {
            let ts = source.starts[i].max(lo);
            let te = source.ends[i].min(hi);
            let dt = (te - ts) as f64 / NANOS_PER_SECOND as f64;
            weighted += dt * values[i];
            total += dt;
            matched += 1;
            i += 1;
        }

        match matched {
            0 => dropped.push(t1e),
            // single overlap: pass the source value through untouched
            1 => {
                kept.push(t1e);
                out.push(values[first]);
            }
            _ => {
                kept.push(t1e);
                out.push(weighted / total);
            }
        }
    }

    debug!(n_out = kept.len(), n_dropped = dropped.len(), "weighted resample complete");
    let series = TimeSeries::new(TimeIndex::new(kept)?, out)?;
    Ok(ResampleResult::new(series, dropped))
}
