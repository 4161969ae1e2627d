//! Base units of frequency descriptors and their duration tables.

use kairos_calendar::NANOS_PER_SECOND;

/// Base calendar or clock unit of a frequency descriptor.
///
/// The first seven variants have a fixed duration; the rest depend on where
/// they fall in the calendar and only carry a nominal length in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Calendar day.
    Day,
    /// Hour.
    Hour,
    /// Minute.
    Minute,
    /// Second.
    Second,
    /// Millisecond.
    Milli,
    /// Microsecond.
    Micro,
    /// Nanosecond.
    Nano,
    /// Business day.
    BusinessDay,
    /// Custom business day.
    CustomBusinessDay,
    /// Business hour.
    BusinessHour,
    /// Custom business hour.
    CustomBusinessHour,
    /// Week.
    Week,
    /// Semi-month end (15th and month end).
    SemiMonthEnd,
    /// Semi-month start (1st and 15th).
    SemiMonthStart,
    /// Month end.
    MonthEnd,
    /// Month start.
    MonthStart,
    /// Business month end.
    BusinessMonthEnd,
    /// Business month start.
    BusinessMonthStart,
    /// Custom business month end.
    CustomBusinessMonthEnd,
    /// Custom business month start.
    CustomBusinessMonthStart,
    /// Quarter end.
    QuarterEnd,
    /// Quarter start.
    QuarterStart,
    /// Business quarter end.
    BusinessQuarterEnd,
    /// Business quarter start.
    BusinessQuarterStart,
    /// Year end.
    YearEnd,
    /// Year start.
    YearStart,
    /// Business year end.
    BusinessYearEnd,
    /// Business year start.
    BusinessYearStart,
}

/// Accepted unit codes, aliases included.
#[rustfmt::skip]
const CODES: [(&str, Unit); 39] = [
    ("D", Unit::Day), ("d", Unit::Day),
    ("H", Unit::Hour), ("h", Unit::Hour),
    ("T", Unit::Minute), ("min", Unit::Minute),
    ("S", Unit::Second), ("s", Unit::Second),
    ("L", Unit::Milli), ("ms", Unit::Milli),
    ("U", Unit::Micro), ("us", Unit::Micro),
    ("N", Unit::Nano), ("ns", Unit::Nano),
    ("B", Unit::BusinessDay), ("C", Unit::CustomBusinessDay),
    ("BH", Unit::BusinessHour), ("CBH", Unit::CustomBusinessHour),
    ("W", Unit::Week),
    ("SM", Unit::SemiMonthEnd), ("SMS", Unit::SemiMonthStart),
    ("M", Unit::MonthEnd), ("MS", Unit::MonthStart),
    ("BM", Unit::BusinessMonthEnd), ("BMS", Unit::BusinessMonthStart),
    ("CBM", Unit::CustomBusinessMonthEnd), ("CBMS", Unit::CustomBusinessMonthStart),
    ("Q", Unit::QuarterEnd), ("QS", Unit::QuarterStart),
    ("BQ", Unit::BusinessQuarterEnd), ("BQS", Unit::BusinessQuarterStart),
    ("A", Unit::YearEnd), ("Y", Unit::YearEnd),
    ("AS", Unit::YearStart), ("YS", Unit::YearStart),
    ("BA", Unit::BusinessYearEnd), ("BY", Unit::BusinessYearEnd),
    ("BAS", Unit::BusinessYearStart), ("BYS", Unit::BusinessYearStart),
];

/// Weekday anchors accepted after `W-`.
pub(crate) const WEEKDAY_ANCHORS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

/// Month anchors accepted after quarter and year codes.
pub(crate) const MONTH_ANCHORS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Which anchor table, if any, a unit accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnchorKind {
    None,
    Weekday,
    Month,
}

impl Unit {
    /// Looks up a unit code, aliases included.
    pub fn from_code(code: &str) -> Option<Self> {
        CODES.iter().find(|(c, _)| *c == code).map(|&(_, unit)| unit)
    }

    /// Canonical code used when formatting a frequency.
    pub fn code(self) -> &'static str {
        match self {
            Self::Day => "D",
            Self::Hour => "H",
            Self::Minute => "T",
            Self::Second => "S",
            Self::Milli => "L",
            Self::Micro => "U",
            Self::Nano => "N",
            Self::BusinessDay => "B",
            Self::CustomBusinessDay => "C",
            Self::BusinessHour => "BH",
            Self::CustomBusinessHour => "CBH",
            Self::Week => "W",
            Self::SemiMonthEnd => "SM",
            Self::SemiMonthStart => "SMS",
            Self::MonthEnd => "M",
            Self::MonthStart => "MS",
            Self::BusinessMonthEnd => "BM",
            Self::BusinessMonthStart => "BMS",
            Self::CustomBusinessMonthEnd => "CBM",
            Self::CustomBusinessMonthStart => "CBMS",
            Self::QuarterEnd => "Q",
            Self::QuarterStart => "QS",
            Self::BusinessQuarterEnd => "BQ",
            Self::BusinessQuarterStart => "BQS",
            Self::YearEnd => "A",
            Self::YearStart => "AS",
            Self::BusinessYearEnd => "BA",
            Self::BusinessYearStart => "BAS",
        }
    }

    /// Fixed duration of one unit in nanoseconds, `None` for calendar units.
    pub fn nanos(self) -> Option<i64> {
        match self {
            Self::Day => Some(86_400 * NANOS_PER_SECOND),
            Self::Hour => Some(3_600 * NANOS_PER_SECOND),
            Self::Minute => Some(60 * NANOS_PER_SECOND),
            Self::Second => Some(NANOS_PER_SECOND),
            Self::Milli => Some(1_000_000),
            Self::Micro => Some(1_000),
            Self::Nano => Some(1),
            _ => None,
        }
    }

    /// Returns `true` for units with a fixed duration (day and finer).
    pub fn is_exact(self) -> bool {
        self.nanos().is_some()
    }

    /// Nominal length in days of one calendar unit.
    ///
    /// Year 365, quarter 90, month 30, semi-month 15, week 7, business day 1,
    /// business hour 1/24. `None` for exact units.
    pub fn nominal_days(self) -> Option<f64> {
        match self {
            Self::YearEnd | Self::YearStart | Self::BusinessYearEnd | Self::BusinessYearStart => {
                Some(365.0)
            }
            Self::QuarterEnd
            | Self::QuarterStart
            | Self::BusinessQuarterEnd
            | Self::BusinessQuarterStart => Some(90.0),
            Self::MonthEnd
            | Self::MonthStart
            | Self::BusinessMonthEnd
            | Self::BusinessMonthStart
            | Self::CustomBusinessMonthEnd
            | Self::CustomBusinessMonthStart => Some(30.0),
            Self::SemiMonthEnd | Self::SemiMonthStart => Some(15.0),
            Self::Week => Some(7.0),
            Self::BusinessDay | Self::CustomBusinessDay => Some(1.0),
            Self::BusinessHour | Self::CustomBusinessHour => Some(1.0 / 24.0),
            _ => None,
        }
    }

    pub(crate) fn anchor_kind(self) -> AnchorKind {
        match self {
            Self::Week => AnchorKind::Weekday,
            Self::QuarterEnd
            | Self::QuarterStart
            | Self::BusinessQuarterEnd
            | Self::BusinessQuarterStart
            | Self::YearEnd
            | Self::YearStart
            | Self::BusinessYearEnd
            | Self::BusinessYearStart => AnchorKind::Month,
            _ => AnchorKind::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_round_trips_to_a_unit() {
        for (code, unit) in CODES {
            assert_eq!(Unit::from_code(code), Some(unit), "code {code}");
        }
    }

    #[test]
    fn canonical_code_is_accepted() {
        for (_, unit) in CODES {
            assert_eq!(Unit::from_code(unit.code()), Some(unit));
        }
    }

    #[test]
    fn unknown_code() {
        assert_eq!(Unit::from_code("X"), None);
        assert_eq!(Unit::from_code(""), None);
        assert_eq!(Unit::from_code("m"), None);
    }

    #[test]
    fn lowercase_day_alias() {
        assert_eq!(Unit::from_code("d"), Some(Unit::Day));
        assert_eq!(Unit::Day.code(), "D");
    }

    #[test]
    fn exact_and_nominal_are_disjoint() {
        for (_, unit) in CODES {
            assert_ne!(
                unit.nanos().is_some(),
                unit.nominal_days().is_some(),
                "unit {unit:?}"
            );
        }
    }

    #[test]
    fn exact_durations() {
        assert_eq!(Unit::Day.nanos(), Some(86_400_000_000_000));
        assert_eq!(Unit::Hour.nanos(), Some(3_600_000_000_000));
        assert_eq!(Unit::Nano.nanos(), Some(1));
        assert!(Unit::Minute.is_exact());
        assert!(!Unit::Week.is_exact());
    }

    #[test]
    fn anchors() {
        assert_eq!(Unit::Week.anchor_kind(), AnchorKind::Weekday);
        assert_eq!(Unit::QuarterStart.anchor_kind(), AnchorKind::Month);
        assert_eq!(Unit::YearEnd.anchor_kind(), AnchorKind::Month);
        assert_eq!(Unit::MonthEnd.anchor_kind(), AnchorKind::None);
        assert_eq!(Unit::Day.anchor_kind(), AnchorKind::None);
    }
}
