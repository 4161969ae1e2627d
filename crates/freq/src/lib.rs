//! Frequency descriptors for the kairos time-grid tools.
//!
//! A descriptor such as `"D"`, `"12H"` or `"W-MON"` names a sampling grid.
//! Units of a day and finer have a fixed step and can drive a simulation;
//! calendar units (week, month, quarter, year, business variants) only get a
//! nominal length for comparing sampling rates.
//!
//! # Quick start
//!
//! ```ignore
//! use kairos_freq::{classify, exact_timestep_days, approximate_timestep_days};
//!
//! assert_eq!(classify("1D")?, "D");
//! assert_eq!(exact_timestep_days("12H")?, 0.5);
//! assert_eq!(approximate_timestep_days("3M")?, 90.0);
//! assert!(exact_timestep_days("W").is_err());
//! ```

mod error;
mod frequency;
mod timestep;
mod unit;

pub use error::FreqError;
pub use frequency::Frequency;
pub use timestep::{approximate_timestep_days, classify, exact_timestep_days, period_offset};
pub use unit::Unit;
