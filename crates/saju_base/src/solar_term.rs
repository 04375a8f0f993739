//! Fixed-day approximation of the twelve month-opening solar terms (절기).
//!
//! Each calendar month has a threshold day on which its solar month begins;
//! dates before the threshold belong to the previous solar month. The
//! astrological year begins at Lichun (立春), fixed here at February 4.
//!
//! Boundaries are not computed astronomically; real terms drift by a day
//! or so between years.

use serde::{Deserialize, Serialize};

use crate::date::CivilDate;
use crate::error::SajuError;

/// First day of the solar month opening in each calendar month (index 0 = January).
pub const SOLAR_MONTH_START_DAY: [u32; 12] = [6, 4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7];

/// Calendar month of the spring-start boundary.
pub const SPRING_START_MONTH: u32 = 2;
/// Calendar day of the spring-start boundary.
pub const SPRING_START_DAY: u32 = 4;

/// Month-opening solar terms, indexed by solar month (0 = Lichun, Tiger month).
const TERM_NAMES: [&str; 12] = [
    "Lichun",
    "Jingzhe",
    "Qingming",
    "Lixia",
    "Mangzhong",
    "Xiaoshu",
    "Liqiu",
    "Bailu",
    "Hanlu",
    "Lidong",
    "Daxue",
    "Xiaohan",
];
const TERM_HANZI: [&str; 12] = [
    "立春", "驚蟄", "清明", "立夏", "芒種", "小暑", "立秋", "白露", "寒露", "立冬", "大雪", "小寒",
];

/// Threshold day for a calendar month (1..=12).
pub const fn month_start_day(month: u32) -> u32 {
    SOLAR_MONTH_START_DAY[((month + 11) % 12) as usize]
}

/// Year of the astrological calendar containing `date`.
///
/// Dates in January, or in February before the 4th, belong to the previous year.
pub fn astrological_year(date: &CivilDate) -> i32 {
    if date.month < SPRING_START_MONTH
        || (date.month == SPRING_START_MONTH && date.day < SPRING_START_DAY)
    {
        date.year - 1
    } else {
        date.year
    }
}

/// A solar month located on the civil calendar.
///
/// The opening day is kept as a calendar year and month so that months
/// opening just outside the accepted year range can still be indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarMonth {
    /// 0-based solar month index (0 = month opened by Lichun).
    pub index: u8,
    /// Calendar year of the opening day.
    pub year: i32,
    /// Calendar month of the opening day.
    pub month: u32,
}

impl SolarMonth {
    /// Pinyin name of the opening term.
    pub const fn term_name(&self) -> &'static str {
        TERM_NAMES[self.index as usize]
    }

    pub const fn term_hanzi(&self) -> &'static str {
        TERM_HANZI[self.index as usize]
    }

    /// First civil day of the solar month.
    ///
    /// Fails when that day falls outside the accepted year range, e.g. for
    /// the first days of January in year 1.
    pub fn start(&self) -> Result<CivilDate, SajuError> {
        CivilDate::new(self.year, self.month, month_start_day(self.month))
    }

    /// First civil day of the following solar month.
    pub fn next_start(&self) -> Result<CivilDate, SajuError> {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        CivilDate::new(year, month, month_start_day(month))
    }
}

/// Solar month index for a calendar month in which the threshold has passed.
const fn index_for_calendar_month(month: u32) -> u8 {
    ((month + 10) % 12) as u8
}

/// Solar month containing `date`.
pub fn solar_month(date: &CivilDate) -> SolarMonth {
    let (year, month) = if date.day >= month_start_day(date.month) {
        (date.year, date.month)
    } else if date.month == 1 {
        (date.year - 1, 12)
    } else {
        (date.year, date.month - 1)
    };
    SolarMonth {
        index: index_for_calendar_month(month),
        year,
        month,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> CivilDate {
        CivilDate::new(y, m, day).unwrap()
    }

    #[test]
    fn spring_boundary_belongs_to_new_year() {
        assert_eq!(astrological_year(&d(2000, 2, 3)), 1999);
        assert_eq!(astrological_year(&d(2000, 2, 4)), 2000);
        assert_eq!(astrological_year(&d(2000, 1, 31)), 1999);
        assert_eq!(astrological_year(&d(2000, 12, 31)), 2000);
    }

    #[test]
    fn lichun_opens_month_zero() {
        let sm = solar_month(&d(2024, 2, 4));
        assert_eq!(sm.index, 0);
        assert_eq!(sm.term_name(), "Lichun");
        assert_eq!(sm.start(), Ok(d(2024, 2, 4)));
    }

    #[test]
    fn before_threshold_rolls_back() {
        let sm = solar_month(&d(2024, 3, 5));
        assert_eq!(sm.index, 0);
        let sm = solar_month(&d(2024, 3, 6));
        assert_eq!(sm.index, 1);
    }

    #[test]
    fn early_january_is_daxue_of_previous_year() {
        let sm = solar_month(&d(2024, 1, 5));
        assert_eq!(sm.index, 10);
        assert_eq!(sm.term_hanzi(), "大雪");
        assert_eq!(sm.start(), Ok(d(2023, 12, 7)));
        assert_eq!(sm.next_start(), Ok(d(2024, 1, 6)));
    }

    #[test]
    fn january_after_threshold_is_xiaohan() {
        let sm = solar_month(&d(2024, 1, 6));
        assert_eq!(sm.index, 11);
        assert_eq!(sm.next_start(), Ok(d(2024, 2, 4)));
    }

    #[test]
    fn every_day_of_year_maps_into_range() {
        let mut date = d(2023, 1, 1);
        for _ in 0..365 {
            let sm = solar_month(&date);
            assert!(sm.index < 12);
            assert!(sm.start().unwrap() <= date);
            assert!(sm.next_start().unwrap() > date);
            date = date.add_days(1);
        }
    }

    #[test]
    fn boundaries_outside_year_range_are_errors() {
        let sm = solar_month(&d(1, 1, 3));
        assert_eq!(sm.index, 10);
        assert_eq!(sm.start(), Err(SajuError::InvalidYear(0)));
        assert_eq!(sm.next_start(), Ok(d(1, 1, 6)));

        let sm = solar_month(&d(9999, 12, 20));
        assert_eq!(sm.start(), Ok(d(9999, 12, 7)));
        assert_eq!(sm.next_start(), Err(SajuError::InvalidYear(10000)));
    }
}
