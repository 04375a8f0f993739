//! Error types for chart calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from input validation and symbol lookup.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SajuError {
    /// Year outside 1..=9999.
    InvalidYear(i32),
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day outside the valid range for the given year and month.
    InvalidDay { year: i32, month: u32, day: u32 },
    /// Hour outside 0..=23.
    InvalidHour(u32),
    /// Minute outside 0..=59.
    InvalidMinute(u32),
    /// Text or index does not name one of the ten stems.
    UnknownStem(String),
    /// Text or index does not name one of the twelve branches.
    UnknownBranch(String),
    /// Text does not name a pillar position.
    UnknownPosition(String),
    /// Malformed textual input.
    Parse(&'static str),
}

impl Display for SajuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidYear(y) => write!(f, "invalid year {y}: expected 1..=9999"),
            Self::InvalidMonth(m) => write!(f, "invalid month {m}: expected 1..=12"),
            Self::InvalidDay { year, month, day } => {
                write!(f, "invalid day {day} for {year:04}-{month:02}")
            }
            Self::InvalidHour(h) => write!(f, "invalid hour {h}: expected 0..=23"),
            Self::InvalidMinute(m) => write!(f, "invalid minute {m}: expected 0..=59"),
            Self::UnknownStem(s) => write!(f, "unknown stem: {s}"),
            Self::UnknownBranch(s) => write!(f, "unknown branch: {s}"),
            Self::UnknownPosition(s) => write!(f, "unknown pillar position: {s}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for SajuError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_day() {
        let e = SajuError::InvalidDay {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(e.to_string(), "invalid day 29 for 2023-02");
    }

    #[test]
    fn display_unknown_stem() {
        let e = SajuError::UnknownStem("x".to_string());
        assert!(e.to_string().contains("unknown stem"));
    }
}
