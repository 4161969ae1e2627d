//! Normalization of a series onto a regular grid.

use kairos_align::sample_series;
use kairos_calendar::{TimeIndex, TimeSeries, Timestamp};
use kairos_freq::Frequency;
use kairos_resample::timestep_weighted_resample;
use tracing::{debug, warn};

use crate::config::{Method, NormalizeConfig};
use crate::error::KairosError;

/// Builds the regular grid of step `freq` inside `[first, last]`.
///
/// Grid points sit at `phase + k * step` for integer `k`. The grid starts at
/// the first such point at or after `first` and ends at the last one at or
/// before `last`; it is empty when none fits.
pub fn regular_grid(
    first: Timestamp,
    last: Timestamp,
    freq: &Frequency,
    phase: i64,
) -> Result<TimeIndex, KairosError> {
    let step = i128::from(freq.delta_nanos()?);
    let behind = (i128::from(first.nanos()) - i128::from(phase)).rem_euclid(step);
    let start = if behind == 0 {
        i128::from(first.nanos())
    } else {
        i128::from(first.nanos()) + step - behind
    };
    match i64::try_from(start) {
        Ok(start) if start <= last.nanos() => Ok(TimeIndex::regular(
            Timestamp::from_nanos(start),
            last,
            freq.delta()?,
        )?),
        _ => Ok(TimeIndex::default()),
    }
}

/// Brings `series` onto a regular grid with the configured frequency.
///
/// The grid covers the span of the series. With `keep_offset` it keeps the
/// phase of the first timestamp, so the grid starts exactly there; otherwise
/// grid points are whole multiples of the step since the Unix epoch.
///
/// [`Method::Weighted`] treats values as interval intensities and averages
/// them over each grid interval; grid points whose interval misses the
/// series are dropped with a warning. [`Method::Nearest`] keeps, for each
/// grid point, the nearest original sample, so the output timestamps are a
/// subset of the input's.
///
/// An empty series normalizes to an empty series.
///
/// # Errors
///
/// - [`KairosError::Freq`] or [`KairosError::InvalidConfig`] if the
///   configured frequency is malformed or has no fixed step.
/// - [`KairosError::Resample`] if the weighted method gets fewer than two
///   samples or fewer than two grid points.
/// - [`KairosError::Calendar`] if the grid would exceed
///   [`kairos_calendar::MAX_GRID_POINTS`] points.
#[tracing::instrument(skip_all, fields(n = series.len(), freq = config.freq()))]
pub fn normalize(series: &TimeSeries, config: &NormalizeConfig) -> Result<TimeSeries, KairosError> {
    config.validate()?;
    let freq = Frequency::parse(config.freq())?;

    let (Some(first), Some(last)) = (series.index().first(), series.index().last()) else {
        return Ok(TimeSeries::default());
    };

    let phase = if config.keep_offset() {
        freq.offset_nanos(first)?
    } else {
        0
    };
    let grid = regular_grid(first, last, &freq, phase)?;
    debug!(n_grid = grid.len(), phase, "built target grid");

    match config.method() {
        Method::Weighted => {
            let result = timestep_weighted_resample(series, &grid)?;
            if !result.is_complete() {
                warn!(
                    n_dropped = result.dropped().len(),
                    "grid points without overlapping data were dropped"
                );
            }
            Ok(result.into_series())
        }
        Method::Nearest => Ok(sample_series(series, &grid)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kairos_calendar::CalendarError;

    fn freq(s: &str) -> Frequency {
        Frequency::parse(s).unwrap()
    }

    fn nanos(index: &TimeIndex) -> Vec<i64> {
        index.iter().map(Timestamp::nanos).collect()
    }

    #[test]
    fn grid_on_phase() {
        let grid = regular_grid(
            Timestamp::from_nanos(3),
            Timestamp::from_nanos(30),
            &freq("10ns"),
            3,
        )
        .unwrap();
        assert_eq!(nanos(&grid), vec![3, 13, 23]);
    }

    #[test]
    fn grid_epoch_aligned() {
        let grid = regular_grid(
            Timestamp::from_nanos(3),
            Timestamp::from_nanos(30),
            &freq("10ns"),
            0,
        )
        .unwrap();
        assert_eq!(nanos(&grid), vec![10, 20, 30]);
    }

    #[test]
    fn grid_before_epoch() {
        let grid = regular_grid(
            Timestamp::from_nanos(-25),
            Timestamp::from_nanos(-1),
            &freq("10ns"),
            0,
        )
        .unwrap();
        assert_eq!(nanos(&grid), vec![-20, -10]);
    }

    #[test]
    fn grid_empty_when_span_too_short() {
        let grid = regular_grid(
            Timestamp::from_nanos(11),
            Timestamp::from_nanos(19),
            &freq("10ns"),
            0,
        )
        .unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn grid_start_past_i64_is_empty() {
        let grid = regular_grid(
            Timestamp::from_nanos(i64::MAX - 1),
            Timestamp::MAX,
            &freq("D"),
            0,
        )
        .unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn empty_series() {
        let out = normalize(&TimeSeries::default(), &NormalizeConfig::new()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn calendar_frequency_rejected() {
        let index = TimeIndex::from_nanos([0, 1]).unwrap();
        let series = TimeSeries::new(index, vec![1.0, 2.0]).unwrap();
        let err = normalize(&series, &NormalizeConfig::new().with_freq("M")).unwrap_err();
        assert!(matches!(err, KairosError::InvalidConfig { .. }));
    }

    #[test]
    fn nanosecond_grid_over_a_century_is_an_error() {
        let first = Timestamp::parse("2000-01-01").unwrap();
        let last = Timestamp::parse("2100-01-01").unwrap();
        let series = TimeSeries::from_pairs([(first, 1.0), (last, 2.0)]).unwrap();
        for method in [Method::Nearest, Method::Weighted] {
            let config = NormalizeConfig::new().with_freq("N").with_method(method);
            let err = normalize(&series, &config).unwrap_err();
            assert!(
                matches!(
                    err,
                    KairosError::Calendar(CalendarError::GridTooLarge { .. })
                ),
                "{method:?}"
            );
        }
    }
}
