//! # kairos
//!
//! Frequency classification and time-grid normalization for simulation
//! inputs. Bundles the workspace crates behind one import and adds a
//! configurable pipeline that brings any series onto a regular grid.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NormalizeConfig (TOML)"] -->|"validate()"| B["Frequency"]
//!     S["TimeSeries"] --> N["normalize()"]
//!     B --> N
//!     N -->|"Weighted"| R["timestep_weighted_resample()"]
//!     N -->|"Nearest"| L["sample_series()"]
//!     R --> O["TimeSeries on grid"]
//!     L --> O
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos::{NormalizeConfig, TimeSeries, Timestamp, normalize};
//!
//! kairos::logging::init(1)?;
//! let config = NormalizeConfig::from_toml_str("freq = \"6H\"")?;
//! config.validate()?;
//! let series = TimeSeries::from_pairs([
//!     (Timestamp::parse("2000-01-01 01:00")?, 1.0),
//!     (Timestamp::parse("2000-01-01 02:00")?, 2.0),
//! ])?;
//! let on_grid = normalize(&series, &config)?;
//! ```
//!
//! ## Crates
//!
//! | Crate | Description |
//! |-------|-------------|
//! | `kairos-calendar` | Timestamps, indices, series, common bounds |
//! | `kairos-freq` | Frequency descriptors and timesteps |
//! | `kairos-align` | Nearest-neighbor index alignment |
//! | `kairos-resample` | Overlap-weighted resampling |

mod config;
mod error;
pub mod logging;
mod normalize;

pub use config::{Method, NormalizeConfig};
pub use error::KairosError;
pub use normalize::{normalize, regular_grid};

pub use kairos_align::{AlignError, align, nearest_positions, sample_series};
pub use kairos_calendar::{
    BoundedSeries, CalendarError, NANOS_PER_DAY, NANOS_PER_SECOND, TimeBounds, TimeIndex,
    TimeSeries, Timestamp, common_bounds,
};
pub use kairos_freq::{
    FreqError, Frequency, Unit, approximate_timestep_days, classify, exact_timestep_days,
    period_offset,
};
pub use kairos_resample::{ResampleError, ResampleResult, timestep_weighted_resample};
