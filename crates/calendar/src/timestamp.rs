//! Nanosecond-resolution timestamps.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::CalendarError;

/// Nanoseconds in one second.
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Nanoseconds in one (calendar) day.
pub const NANOS_PER_DAY: i64 = 86_400 * NANOS_PER_SECOND;

/// Formats accepted by [`Timestamp::parse`], tried in order.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// A naive (timezone-free) instant stored as nanoseconds since
/// 1970-01-01T00:00:00.
///
/// The integer encoding is what the alignment and resampling code works on,
/// so differences between timestamps are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Earliest representable timestamp.
    pub const MIN: Self = Self(i64::MIN);

    /// Latest representable timestamp.
    pub const MAX: Self = Self(i64::MAX);

    /// The Unix epoch.
    pub const EPOCH: Self = Self(0);

    /// Creates a timestamp from nanoseconds since the epoch.
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Returns nanoseconds since the epoch.
    pub const fn nanos(self) -> i64 {
        self.0
    }

    /// Converts a `chrono` datetime.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] outside roughly 1677..=2262.
    pub fn from_datetime(datetime: NaiveDateTime) -> Result<Self, CalendarError> {
        datetime
            .and_utc()
            .timestamp_nanos_opt()
            .map(Self)
            .ok_or_else(|| CalendarError::OutOfRange {
                datetime: datetime.to_string(),
            })
    }

    /// Converts back to a `chrono` datetime.
    pub fn to_datetime(self) -> NaiveDateTime {
        DateTime::from_timestamp_nanos(self.0).naive_utc()
    }

    /// Parses `YYYY-MM-DD`, `YYYY-MM-DD HH:MM` or `YYYY-MM-DD HH:MM:SS[.fff]`
    /// (a `T` separator is accepted as well).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Parse`] if no format matches and
    /// [`CalendarError::OutOfRange`] if the datetime cannot be encoded.
    pub fn parse(input: &str) -> Result<Self, CalendarError> {
        let trimmed = input.trim();
        for format in DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Self::from_datetime(datetime);
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Self::from_datetime(date.and_time(NaiveTime::MIN));
        }
        Err(CalendarError::Parse {
            input: input.to_string(),
        })
    }

    /// Adds `nanos`, returning `None` on overflow.
    pub fn checked_add_nanos(self, nanos: i64) -> Option<Self> {
        self.0.checked_add(nanos).map(Self)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_datetime().format("%Y-%m-%d %H:%M:%S%.f"))
    }
}

impl TryFrom<NaiveDateTime> for Timestamp {
    type Error = CalendarError;

    fn try_from(datetime: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::from_datetime(datetime)
    }
}

impl std::str::FromStr for Timestamp {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
