//! Cross-operation properties of the frequency resolver.

use approx::assert_relative_eq;
use kairos_calendar::Timestamp;
use kairos_freq::{
    FreqError, Frequency, approximate_timestep_days, classify, exact_timestep_days, period_offset,
};

const EXACT: [&str; 16] = [
    "D", "1D", "7D", "H", "12H", "3h", "T", "15min", "S", "30s", "L", "250ms", "U", "us", "N",
    "100ns",
];

const CALENDAR: [&str; 12] = [
    "B", "C", "BH", "CBH", "W", "W-MON", "SM", "M", "BMS", "Q-DEC", "A", "BYS",
];

#[test]
fn classify_is_idempotent() {
    for freq in EXACT {
        let once = classify(freq).unwrap();
        let twice = classify(&once).unwrap();
        assert_eq!(once, twice, "classify not idempotent for {freq}");
    }
}

#[test]
fn exact_and_approximate_agree_on_exact_units() {
    for freq in EXACT {
        let exact = exact_timestep_days(freq).unwrap();
        let approximate = approximate_timestep_days(freq).unwrap();
        assert_eq!(exact, approximate, "{freq}");
    }
}

#[test]
fn calendar_units_only_have_approximate_steps() {
    for freq in CALENDAR {
        assert!(
            matches!(
                exact_timestep_days(freq),
                Err(FreqError::UnsupportedFrequency { .. })
            ),
            "{freq}"
        );
        assert!(approximate_timestep_days(freq).unwrap() > 0.0, "{freq}");
        assert!(classify(freq).is_err(), "{freq}");
    }
}

#[test]
fn multiplier_scales_linearly() {
    for (freq, single) in [("5W", "W"), ("4M", "M"), ("3A", "A"), ("6BH", "BH"), ("48H", "H")] {
        let n = Frequency::parse(freq).unwrap().n() as f64;
        assert_relative_eq!(
            approximate_timestep_days(freq).unwrap(),
            n * approximate_timestep_days(single).unwrap(),
            max_relative = 1e-12
        );
    }
}

#[test]
fn nominal_table_values() {
    assert_eq!(approximate_timestep_days("1W").unwrap(), 7.0);
    assert_eq!(approximate_timestep_days("3M").unwrap(), 90.0);
    assert_eq!(approximate_timestep_days("2Y").unwrap(), 730.0);
}

#[test]
fn unsupported_frequencies_are_rejected() {
    assert!(matches!(
        classify("1X"),
        Err(FreqError::UnsupportedFrequency { .. })
    ));
    assert!(matches!(
        exact_timestep_days("1W"),
        Err(FreqError::UnsupportedFrequency { .. })
    ));
}

#[test]
fn offset_is_within_one_step() {
    let times = [
        "1950-07-04 13:45:12",
        "1969-12-31 23:59:59.999",
        "1970-01-01",
        "2000-02-29 06:30",
        "2024-11-03 01:00:00.5",
    ];
    for t in times {
        let ts = Timestamp::parse(t).unwrap();
        for freq in ["D", "6H", "H", "15min", "S"] {
            let step = Frequency::parse(freq).unwrap().delta().unwrap();
            let offset = period_offset(ts, freq).unwrap();
            assert!(offset >= chrono::TimeDelta::zero(), "{t} {freq}");
            assert!(offset < step, "{t} {freq}");

            let floor = Frequency::parse(freq).unwrap().floor(ts).unwrap();
            assert_eq!(floor.nanos() + offset.num_nanoseconds().unwrap(), ts.nanos());
        }
    }
}
