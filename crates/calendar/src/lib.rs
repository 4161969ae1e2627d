//! # kairos-calendar
//!
//! Time primitives shared by the frequency, alignment and resampling crates.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDateTime / text"] -->|"Timestamp::parse()"| B["Timestamp (ns since epoch)"]
//!     B -->|"TimeIndex::new()"| C["TimeIndex (strictly increasing)"]
//!     B -->|"TimeIndex::regular()"| C
//!     C -->|"TimeSeries::new()"| D["TimeSeries"]
//!     C -->|".bounds()"| E["TimeBounds"]
//!     D -->|".bounds()"| E
//!     E -->|"common_bounds()"| E
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos_calendar::{Timestamp, TimeIndex, TimeSeries, common_bounds};
//! use chrono::TimeDelta;
//!
//! let start = Timestamp::parse("2000-01-01")?;
//! let end = Timestamp::parse("2000-01-10")?;
//! let grid = TimeIndex::regular(start, end, TimeDelta::days(1))?;
//! let series = TimeSeries::new(grid, vec![0.0; 10])?;
//!
//! let overlap = common_bounds([&series]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `timestamp` | Nanosecond timestamp newtype and parsing |
//! | `index` | Strictly increasing time index, regular grids |
//! | `series` | Index plus values |
//! | `bounds` | Bounded-series capability and common bounds |
//! | `error` | Error types |

mod bounds;
mod error;
mod index;
mod series;
mod timestamp;

pub use bounds::{BoundedSeries, TimeBounds, common_bounds};
pub use error::CalendarError;
pub use index::{MAX_GRID_POINTS, TimeIndex};
pub use series::TimeSeries;
pub use timestamp::{NANOS_PER_DAY, NANOS_PER_SECOND, Timestamp};
