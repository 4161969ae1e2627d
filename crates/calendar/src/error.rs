//! Error types for the kairos-calendar crate.

use chrono::TimeDelta;

use crate::timestamp::Timestamp;

/// Error type for all fallible operations in the kairos-calendar crate.
///
/// This enum covers ordering violations in time indices, length mismatches
/// between an index and its values, and conversions that fall outside the
/// representable nanosecond range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a time index is not strictly increasing.
    #[error("index not strictly increasing at position {position}: {current} follows {previous}")]
    NotStrictlyIncreasing {
        /// Position of the first offending timestamp.
        position: usize,
        /// Timestamp at `position - 1`.
        previous: Timestamp,
        /// Timestamp at `position`.
        current: Timestamp,
    },

    /// Returned when the number of values does not match the index length.
    #[error("values: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Length of the time index.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },

    /// Returned when a datetime cannot be represented as nanoseconds since the epoch.
    #[error("datetime out of nanosecond range: {datetime}")]
    OutOfRange {
        /// Text form of the offending datetime.
        datetime: String,
    },

    /// Returned when a timestamp string matches none of the accepted formats.
    #[error("cannot parse timestamp: {input:?}")]
    Parse {
        /// The rejected input.
        input: String,
    },

    /// Returned when a grid step is zero or negative.
    #[error("grid step must be positive, got {step}")]
    InvalidStep {
        /// The rejected step.
        step: TimeDelta,
    },

    /// Returned when a regular grid would hold too many points.
    #[error("grid of {points} points exceeds the limit of {max}")]
    GridTooLarge {
        /// Number of points the grid would hold.
        points: i128,
        /// Largest number of points allowed.
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_not_strictly_increasing() {
        let err = CalendarError::NotStrictlyIncreasing {
            position: 3,
            previous: Timestamp::from_nanos(0),
            current: Timestamp::from_nanos(0),
        };
        assert_eq!(
            err.to_string(),
            "index not strictly increasing at position 3: \
             1970-01-01 00:00:00 follows 1970-01-01 00:00:00"
        );
    }

    #[test]
    fn error_length_mismatch() {
        let err = CalendarError::LengthMismatch {
            expected: 4,
            got: 3,
        };
        assert_eq!(err.to_string(), "values: expected 4 elements, got 3");
    }

    #[test]
    fn error_parse() {
        let err = CalendarError::Parse {
            input: "yesterday".to_string(),
        };
        assert_eq!(err.to_string(), "cannot parse timestamp: \"yesterday\"");
    }

    #[test]
    fn error_grid_too_large() {
        let err = CalendarError::GridTooLarge {
            points: 1 << 40,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "grid of 1099511627776 points exceeds the limit of 100"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::LengthMismatch {
            expected: 1,
            got: 0,
        };
        let b = a.clone();
        assert_eq!(a, b);

        let c = CalendarError::LengthMismatch {
            expected: 2,
            got: 0,
        };
        assert_ne!(a, c);
    }
}
