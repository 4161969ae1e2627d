//! Error types for the kairos-freq crate.

use kairos_calendar::Timestamp;

/// Error type for all fallible operations in the kairos-freq crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FreqError {
    /// Returned when the descriptor is empty or only whitespace.
    #[error("empty frequency descriptor")]
    Empty,

    /// Returned when the unit is unknown, or known but not usable by the
    /// requested operation.
    #[error("frequency {freq:?} not supported: {reason}")]
    UnsupportedFrequency {
        /// The descriptor as given by the caller.
        freq: String,
        /// Why the descriptor was rejected.
        reason: &'static str,
    },

    /// Returned when the multiplier is zero or does not fit.
    #[error("frequency {freq:?}: multiplier must be an integer >= 1")]
    InvalidMultiplier {
        /// The descriptor as given by the caller.
        freq: String,
    },

    /// Returned when aligning a timestamp to the grid leaves the nanosecond range.
    #[error("grid boundary of {timestamp} for {freq:?} is out of range")]
    OutOfRange {
        /// The descriptor.
        freq: String,
        /// The timestamp being aligned.
        timestamp: Timestamp,
    },
}
