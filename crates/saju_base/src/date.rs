//! Local civil date and time of day.
//!
//! Dates are kept as literal proleptic-Gregorian (year, month, day) triples
//! and converted to Julian Day Numbers with integer arithmetic only, so no
//! timezone or epoch-millisecond conversion can shift a day boundary.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SajuError;

/// Earliest accepted year.
pub const MIN_YEAR: i32 = 1;
/// Latest accepted year.
pub const MAX_YEAR: i32 = 9999;

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, or 0 for a month outside 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Local calendar date (proleptic Gregorian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    /// Validated constructor.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, SajuError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(SajuError::InvalidYear(year));
        }
        if !(1..=12).contains(&month) {
            return Err(SajuError::InvalidMonth(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(SajuError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Julian Day Number of this date (JDN 2451545 = 2000-01-01).
    pub fn jdn(&self) -> i64 {
        let month = self.month as i64;
        let a = (14 - month) / 12;
        let y = self.year as i64 + 4800 - a;
        let m = month + 12 * a - 3;
        self.day as i64 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045
    }

    /// Date for a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        let f = jdn + 1401 + (((4 * jdn + 274_277).div_euclid(146_097)) * 3).div_euclid(4) - 38;
        let e = 4 * f + 3;
        let g = e.rem_euclid(1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e.div_euclid(1461) - 4716 + (12 + 2 - month) / 12;
        Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
        }
    }

    /// Date `n` days later (negative `n` goes back).
    pub fn add_days(&self, n: i64) -> Self {
        Self::from_jdn(self.jdn() + n)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &CivilDate) -> i64 {
        other.jdn() - self.jdn()
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl TryFrom<NaiveDate> for CivilDate {
    type Error = SajuError;

    fn try_from(d: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(d.year(), d.month(), d.day())
    }
}

/// Local 24-hour wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocalTime {
    pub hour: u32,
    pub minute: u32,
}

impl LocalTime {
    /// Validated constructor.
    pub fn new(hour: u32, minute: u32) -> Result<Self, SajuError> {
        if hour > 23 {
            return Err(SajuError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(SajuError::InvalidMinute(minute));
        }
        Ok(Self { hour, minute })
    }
}

impl std::fmt::Display for LocalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_jdn() {
        let d = CivilDate::new(2000, 1, 1).unwrap();
        assert_eq!(d.jdn(), 2_451_545);
    }

    #[test]
    fn unix_epoch_jdn() {
        let d = CivilDate::new(1970, 1, 1).unwrap();
        assert_eq!(d.jdn(), 2_440_588);
    }

    #[test]
    fn jdn_roundtrip_across_leap_days() {
        for (y, m, d) in [(2000, 2, 29), (1900, 3, 1), (2024, 12, 31), (1, 1, 1)] {
            let date = CivilDate::new(y, m, d).unwrap();
            assert_eq!(CivilDate::from_jdn(date.jdn()), date);
        }
    }

    #[test]
    fn add_days_crosses_year() {
        let d = CivilDate::new(2023, 12, 31).unwrap();
        assert_eq!(d.add_days(1), CivilDate::new(2024, 1, 1).unwrap());
        assert_eq!(d.add_days(-365), CivilDate::new(2022, 12, 31).unwrap());
    }

    #[test]
    fn days_until_is_signed() {
        let a = CivilDate::new(2024, 1, 1).unwrap();
        let b = CivilDate::new(2024, 3, 1).unwrap();
        assert_eq!(a.days_until(&b), 60);
        assert_eq!(b.days_until(&a), -60);
    }

    #[test]
    fn rejects_invalid_dates() {
        assert_eq!(CivilDate::new(2023, 13, 1), Err(SajuError::InvalidMonth(13)));
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(1900, 2, 29).is_err());
        assert_eq!(CivilDate::new(0, 1, 1), Err(SajuError::InvalidYear(0)));
        assert!(CivilDate::new(2024, 4, 31).is_err());
    }

    #[test]
    fn rejects_invalid_times() {
        assert_eq!(LocalTime::new(24, 0), Err(SajuError::InvalidHour(24)));
        assert_eq!(LocalTime::new(12, 60), Err(SajuError::InvalidMinute(60)));
        assert!(LocalTime::new(23, 59).is_ok());
    }

    #[test]
    fn from_naive_date() {
        let nd = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
        let d = CivilDate::try_from(nd).unwrap();
        assert_eq!(d, CivilDate::new(1990, 5, 15).unwrap());
    }

    #[test]
    fn display_formats() {
        let d = CivilDate::new(987, 3, 4).unwrap();
        assert_eq!(d.to_string(), "0987-03-04");
        assert_eq!(LocalTime::new(7, 5).unwrap().to_string(), "07:05");
    }
}
