//! Frequency classification and timestep derivation.

use chrono::TimeDelta;
use kairos_calendar::{NANOS_PER_DAY, Timestamp};
use tracing::error;

use crate::error::FreqError;
use crate::frequency::Frequency;

/// Returns the canonical form of an equidistant frequency.
///
/// `"1D"` becomes `"D"`, `"15min"` becomes `"15T"`. Only day and finer units
/// qualify, because simulation steps must be equidistant: use `"7D"`
/// instead of `"W"`.
///
/// # Errors
///
/// Returns [`FreqError::UnsupportedFrequency`] for unknown units and for
/// calendar units. The rejection is also logged at error level.
pub fn classify(freq: &str) -> Result<String, FreqError> {
    let parsed =
        Frequency::parse(freq).inspect_err(|e| error!(freq, %e, "frequency not supported"))?;
    if !parsed.is_exact() {
        let err = FreqError::UnsupportedFrequency {
            freq: freq.to_string(),
            reason: "no fixed timestep, use an equidistant unit such as 7D",
        };
        error!(freq, %err, "frequency not supported");
        return Err(err);
    }
    Ok(parsed.to_string())
}

/// Exact timestep of an equidistant frequency in days, e.g. `"12H"` gives 0.5.
///
/// # Errors
///
/// Returns [`FreqError::UnsupportedFrequency`] for calendar units, which have
/// no fixed step.
pub fn exact_timestep_days(freq: &str) -> Result<f64, FreqError> {
    let parsed = Frequency::parse(freq)?;
    let nanos = parsed
        .delta_nanos()
        .map_err(|e| with_descriptor(e, freq))?;
    Ok(nanos as f64 / NANOS_PER_DAY as f64)
}

/// Approximate timestep in days, for comparing sampling rates of arbitrary
/// input data. Never use it to step a simulation.
///
/// Equidistant units give their exact step. Calendar units use nominal
/// lengths: year 365, quarter 90, month 30, semi-month 15, week 7, business
/// day 1, business hour 1/24, each times the multiplier.
///
/// # Errors
///
/// Returns [`FreqError::UnsupportedFrequency`] for unknown units.
pub fn approximate_timestep_days(freq: &str) -> Result<f64, FreqError> {
    let parsed = Frequency::parse(freq)?;
    if parsed.is_exact() {
        return exact_timestep_days(freq);
    }
    match parsed.unit().nominal_days() {
        Some(days) => Ok(f64::from(parsed.n()) * days),
        None => Err(FreqError::UnsupportedFrequency {
            freq: freq.to_string(),
            reason: "no nominal length",
        }),
    }
}

/// Offset of `timestamp` from the most recent boundary of the `freq` grid:
/// `timestamp - floor(timestamp, freq)`.
///
/// A non-zero offset means a series is out of phase with the target grid.
///
/// # Errors
///
/// Returns [`FreqError::UnsupportedFrequency`] for calendar units, which
/// have no fixed grid.
pub fn period_offset(timestamp: Timestamp, freq: &str) -> Result<TimeDelta, FreqError> {
    let parsed = Frequency::parse(freq)?;
    parsed
        .offset_nanos(timestamp)
        .map(TimeDelta::nanoseconds)
        .map_err(|e| with_descriptor(e, freq))
}

/// Reports errors raised on the parsed form against the caller's descriptor.
fn with_descriptor(err: FreqError, freq: &str) -> FreqError {
    match err {
        FreqError::UnsupportedFrequency { reason, .. } => FreqError::UnsupportedFrequency {
            freq: freq.to_string(),
            reason,
        },
        FreqError::InvalidMultiplier { .. } => FreqError::InvalidMultiplier {
            freq: freq.to_string(),
        },
        other => other,
    }
}
