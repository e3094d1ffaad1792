//! Time granularity and date part types
#![allow(deprecated)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use super::deprecation::{deprecated_type_message, warn_deprecated};

const TIME_GRANULARITY_DEPRECATION: &str = "Since the introduction of custom time granularity, \
     the `TimeGranularity` enum is deprecated. Please just use strings to represent time grains.";

/// A standard time granularity
#[deprecated(note = "custom time granularities are plain strings; use `String` grains instead")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeGranularity {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

/// Part of a date that can be extracted from a time dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DatePart {
    Doy,
    Dow,
    Day,
    Month,
    Quarter,
    Year,
}

/// Error when parsing a granularity or date part string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {kind} '{input}'")]
pub struct ParseTimeError {
    pub kind: &'static str,
    pub input: String,
}

impl TimeGranularity {
    pub const ALL: [TimeGranularity; 11] = [
        TimeGranularity::Nanosecond,
        TimeGranularity::Microsecond,
        TimeGranularity::Millisecond,
        TimeGranularity::Second,
        TimeGranularity::Minute,
        TimeGranularity::Hour,
        TimeGranularity::Day,
        TimeGranularity::Week,
        TimeGranularity::Month,
        TimeGranularity::Quarter,
        TimeGranularity::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeGranularity::Nanosecond => "NANOSECOND",
            TimeGranularity::Microsecond => "MICROSECOND",
            TimeGranularity::Millisecond => "MILLISECOND",
            TimeGranularity::Second => "SECOND",
            TimeGranularity::Minute => "MINUTE",
            TimeGranularity::Hour => "HOUR",
            TimeGranularity::Day => "DAY",
            TimeGranularity::Week => "WEEK",
            TimeGranularity::Month => "MONTH",
            TimeGranularity::Quarter => "QUARTER",
            TimeGranularity::Year => "YEAR",
        }
    }

    /// Log the type-level deprecation warning (once per process)
    pub fn emit_deprecation_warning() -> bool {
        warn_deprecated(
            "TimeGranularity",
            &deprecated_type_message("TimeGranularity", Some(TIME_GRANULARITY_DEPRECATION)),
        )
    }
}

impl fmt::Display for TimeGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeGranularity {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeGranularity::emit_deprecation_warning();
        let upper = s.to_uppercase();
        TimeGranularity::ALL
            .into_iter()
            .find(|g| g.as_str() == upper)
            .ok_or_else(|| ParseTimeError {
                kind: "time granularity",
                input: s.to_string(),
            })
    }
}

impl DatePart {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatePart::Doy => "DOY",
            DatePart::Dow => "DOW",
            DatePart::Day => "DAY",
            DatePart::Month => "MONTH",
            DatePart::Quarter => "QUARTER",
            DatePart::Year => "YEAR",
        }
    }
}

impl fmt::Display for DatePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatePart {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DOY" => Ok(DatePart::Doy),
            "DOW" => Ok(DatePart::Dow),
            "DAY" => Ok(DatePart::Day),
            "MONTH" => Ok(DatePart::Month),
            "QUARTER" => Ok(DatePart::Quarter),
            "YEAR" => Ok(DatePart::Year),
            _ => Err(ParseTimeError {
                kind: "date part",
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_round_trip_strings() {
        for grain in TimeGranularity::ALL {
            assert_eq!(grain.to_string().parse::<TimeGranularity>().unwrap(), grain);
        }
        assert_eq!("day".parse::<TimeGranularity>().unwrap(), TimeGranularity::Day);
        assert!("fortnight".parse::<TimeGranularity>().is_err());
    }

    #[test]
    fn test_granularity_wire_format() {
        let json = serde_json::to_string(&TimeGranularity::Quarter).unwrap();
        assert_eq!(json, "\"QUARTER\"");
    }

    #[test]
    fn test_date_part() {
        assert_eq!("dow".parse::<DatePart>().unwrap(), DatePart::Dow);
        assert_eq!(DatePart::Doy.to_string(), "DOY");
        let err = "week".parse::<DatePart>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid date part 'week'");
    }
}
