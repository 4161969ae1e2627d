//! Overlap-weighted resampling for the kairos time-grid tools.
//!
//! Series handled here are interval intensities: each value is the mean rate
//! (precipitation or pumping) over the period that ends at its
//! timestamp. Resampling such a series onto a new index keeps the volume
//! per interval consistent by weighting every source value with the time it
//! overlaps the target interval.
//!
//! # Quick start
//!
//! ```ignore
//! use kairos_calendar::{TimeIndex, TimeSeries, Timestamp};
//! use kairos_resample::timestep_weighted_resample;
//!
//! let series = TimeSeries::from_pairs([
//!     (Timestamp::parse("2000-01-01 01:00")?, 10.0),
//!     (Timestamp::parse("2000-01-01 02:00")?, 20.0),
//!     (Timestamp::parse("2000-01-01 03:00")?, 30.0),
//! ])?;
//! let target = TimeIndex::new(vec![
//!     Timestamp::parse("2000-01-01 01:30")?,
//!     Timestamp::parse("2000-01-01 03:00")?,
//! ])?;
//! let result = timestep_weighted_resample(&series, &target)?;
//! // 13.33.., 26.67..
//! ```

mod edges;
mod error;
mod resample;
mod result;

pub use error::ResampleError;
pub use resample::timestep_weighted_resample;
pub use result::ResampleResult;
