//! Parsed frequency descriptors.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use kairos_calendar::Timestamp;

use crate::error::FreqError;
use crate::unit::{AnchorKind, MONTH_ANCHORS, Unit, WEEKDAY_ANCHORS};

/// A frequency descriptor parsed into multiplier, unit and optional anchor.
///
/// Grammar: `<multiplier><unit>[-<anchor>]`, e.g. `"D"`, `"12H"`, `"15min"`,
/// `"W-MON"`, `"2Q-DEC"`. The multiplier defaults to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frequency {
    n: u32,
    unit: Unit,
    anchor: Option<&'static str>,
}

impl Frequency {
    /// Creates a frequency from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`FreqError::InvalidMultiplier`] if `n` is zero.
    pub fn new(n: u32, unit: Unit) -> Result<Self, FreqError> {
        if n == 0 {
            return Err(FreqError::InvalidMultiplier {
                freq: format!("0{}", unit.code()),
            });
        }
        Ok(Self {
            n,
            unit,
            anchor: None,
        })
    }

    /// Parses a descriptor.
    ///
    /// # Errors
    ///
    /// - [`FreqError::Empty`] for an empty descriptor.
    /// - [`FreqError::InvalidMultiplier`] for `0` or a multiplier beyond `u32`.
    /// - [`FreqError::UnsupportedFrequency`] for an unknown unit or anchor.
    pub fn parse(descriptor: &str) -> Result<Self, FreqError> {
        let trimmed = descriptor.trim();
        if trimmed.is_empty() {
            return Err(FreqError::Empty);
        }
        let unsupported = |reason| FreqError::UnsupportedFrequency {
            freq: descriptor.to_string(),
            reason,
        };

        let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
        let (multiplier, rest) = trimmed.split_at(digits);
        let n = if multiplier.is_empty() {
            1
        } else {
            match multiplier.parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(FreqError::InvalidMultiplier {
                        freq: descriptor.to_string(),
                    });
                }
            }
        };

        let (code, anchor) = match rest.split_once('-') {
            Some((code, anchor)) => (code, Some(anchor)),
            None => (rest, None),
        };
        if code.is_empty() {
            return Err(unsupported("missing unit"));
        }
        let unit = Unit::from_code(code).ok_or_else(|| unsupported("unknown unit"))?;

        let anchor = match (anchor, unit.anchor_kind()) {
            (None, _) => None,
            (Some(_), AnchorKind::None) => return Err(unsupported("unit takes no anchor")),
            (Some(a), AnchorKind::Weekday) => Some(
                find_anchor(&WEEKDAY_ANCHORS, a)
                    .ok_or_else(|| unsupported("unknown weekday anchor"))?,
            ),
            (Some(a), AnchorKind::Month) => Some(
                find_anchor(&MONTH_ANCHORS, a).ok_or_else(|| unsupported("unknown month anchor"))?,
            ),
        };

        Ok(Self { n, unit, anchor })
    }

    /// Multiplier (>= 1).
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Base unit.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Anchor suffix, e.g. `"MON"` for `W-MON`.
    pub fn anchor(&self) -> Option<&'static str> {
        self.anchor
    }

    /// Returns `true` if the frequency has a fixed, equidistant step.
    pub fn is_exact(&self) -> bool {
        self.unit.is_exact()
    }

    /// Fixed step in nanoseconds.
    ///
    /// # Errors
    ///
    /// Returns [`FreqError::UnsupportedFrequency`] for calendar units and
    /// [`FreqError::InvalidMultiplier`] if the step overflows.
    pub fn delta_nanos(&self) -> Result<i64, FreqError> {
        let unit_nanos = self.unit.nanos().ok_or_else(|| FreqError::UnsupportedFrequency {
            freq: self.to_string(),
            reason: "no fixed timestep",
        })?;
        unit_nanos
            .checked_mul(i64::from(self.n))
            .ok_or_else(|| FreqError::InvalidMultiplier {
                freq: self.to_string(),
            })
    }

    /// Fixed step as a [`TimeDelta`].
    ///
    /// # Errors
    ///
    /// Same as [`Frequency::delta_nanos`].
    pub fn delta(&self) -> Result<TimeDelta, FreqError> {
        self.delta_nanos().map(TimeDelta::nanoseconds)
    }

    /// Aligns `timestamp` down to the most recent grid boundary.
    ///
    /// The grid is `k * step` counted from 1970-01-01T00:00:00, so daily
    /// boundaries fall on midnight and hourly ones on the full hour.
    ///
    /// # Errors
    ///
    /// Returns [`FreqError::UnsupportedFrequency`] for calendar units and
    /// [`FreqError::OutOfRange`] if the boundary precedes [`Timestamp::MIN`].
    pub fn floor(&self, timestamp: Timestamp) -> Result<Timestamp, FreqError> {
        let offset = self.offset_nanos(timestamp)?;
        timestamp
            .nanos()
            .checked_sub(offset)
            .map(Timestamp::from_nanos)
            .ok_or_else(|| FreqError::OutOfRange {
                freq: self.to_string(),
                timestamp,
            })
    }

    /// Distance from the most recent grid boundary to `timestamp`, in
    /// `[0, step)` nanoseconds.
    ///
    /// # Errors
    ///
    /// Same as [`Frequency::delta_nanos`].
    pub fn offset_nanos(&self, timestamp: Timestamp) -> Result<i64, FreqError> {
        Ok(timestamp.nanos().rem_euclid(self.delta_nanos()?))
    }
}

fn find_anchor(table: &[&'static str], anchor: &str) -> Option<&'static str> {
    table.iter().copied().find(|a| *a == anchor)
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.n != 1 {
            write!(f, "{}", self.n)?;
        }
        f.write_str(self.unit.code())?;
        if let Some(anchor) = self.anchor {
            write!(f, "-{anchor}")?;
        }
        Ok(())
    }
}

impl FromStr for Frequency {
    type Err = FreqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
