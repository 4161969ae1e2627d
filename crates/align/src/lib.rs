//! Nearest-neighbor alignment for the kairos time-grid tools.
//!
//! Downsampling a densely sampled record onto a coarser grid without
//! interpolating: for every point of the reference grid the closest existing
//! timestamp is kept, so the result only ever contains observed timestamps.
//!
//! # Quick start
//!
//! ```ignore
//! use kairos_align::align;
//! use kairos_calendar::TimeIndex;
//!
//! let dense = TimeIndex::from_nanos(0..100)?;
//! let reference = TimeIndex::from_nanos([0, 10, 20, 30])?;
//! let thinned = align(&dense, &reference)?;
//! assert_eq!(thinned.len(), 4);
//! ```

mod error;
mod nearest;

pub use error::AlignError;
pub use nearest::{align, nearest_positions, sample_series};
