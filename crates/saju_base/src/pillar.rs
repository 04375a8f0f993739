//! Pillar calculator: local date and optional time to the four pillars.
//!
//! - Year: astrological year (spring start at Feb 4), cycle index
//!   `(year - 4) mod 60`.
//! - Month: solar month from the fixed threshold table; stem via the
//!   five-case starting-stem rule keyed on the year stem.
//! - Day: Julian Day Number offset from a Jia-Zi epoch day, mod 60.
//! - Hour: two-hour bucket starting at 23:00; stem via the five-case rule
//!   keyed on the day stem.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::date::{CivilDate, LocalTime};
use crate::error::SajuError;
use crate::sexagenary::{Pillar, SexagenaryPair};
use crate::solar_term::{astrological_year, solar_month};
use crate::stem::Stem;

/// A year known to be cycle index 0 (Jia-Zi). CE 4 and 1984 both qualify.
pub const YEAR_CYCLE_EPOCH: i32 = 4;

/// JDN of 2000-01-07, a Jia-Zi day.
///
/// Cross-checked: 1949-10-01 and 2024-01-01 are also Jia-Zi days.
pub const DAY_CYCLE_EPOCH_JDN: i64 = 2_451_551;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Handling of births between 23:00 and 23:59 (late Zi hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LateZiPolicy {
    /// The day changes at 23:00: all pillars use the following calendar day.
    #[default]
    NextDay,
    /// The day changes at midnight: pillars use the literal calendar day.
    SameDay,
}

impl FromStr for LateZiPolicy {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "next-day" | "nextday" | "next" => Ok(Self::NextDay),
            "same-day" | "sameday" | "same" => Ok(Self::SameDay),
            _ => Err(SajuError::Parse("late-zi policy must be next-day or same-day")),
        }
    }
}

/// Configuration for chart computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Late Zi hour handling. Default: [`LateZiPolicy::NextDay`].
    pub late_zi: LateZiPolicy,
}

impl ChartConfig {
    /// Calendar date whose pillars apply to a birth at `date` / `time`.
    pub fn effective_date(&self, date: &CivilDate, time: Option<LocalTime>) -> CivilDate {
        match (self.late_zi, time) {
            (LateZiPolicy::NextDay, Some(t)) if t.hour == 23 => date.add_days(1),
            _ => *date,
        }
    }
}

// ---------------------------------------------------------------------------
// Positions
// ---------------------------------------------------------------------------

/// A temporal position within a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    Year,
    Month,
    Day,
    Hour,
}

/// All four positions in chart order.
pub const ALL_POSITIONS: [Position; 4] =
    [Position::Year, Position::Month, Position::Day, Position::Hour];

impl Position {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }

    /// Korean label (년주, 월주, ...).
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Year => "년주",
            Self::Month => "월주",
            Self::Day => "일주",
            Self::Hour => "시주",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Position {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_POSITIONS
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SajuError::UnknownPosition(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Five-case starting stem
// ---------------------------------------------------------------------------

/// Which derived cycle a five-case stem lookup is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleKind {
    /// Month stems, anchored on the year stem (甲己 years open with 丙寅).
    Month,
    /// Hour stems, anchored on the day stem (甲己 days open with 甲子).
    Hour,
}

impl CycleKind {
    /// Cycle index of the first term for 甲 and 己 anchors.
    const fn base(self) -> i64 {
        match self {
            Self::Month => 2,
            Self::Hour => 0,
        }
    }
}

/// Pillar at `offset` within a month or hour cycle anchored on `anchor`.
///
/// The ten anchor stems fall into five pairs (甲己, 乙庚, 丙辛, 丁壬, 戊癸).
/// Each pair opens its cycle twelve terms after the previous pair, and the
/// cycle then advances one term per step. Working on the cycle index keeps
/// stem and branch parity matched by construction.
pub const fn five_case_pillar(kind: CycleKind, anchor: Stem, offset: u8) -> Pillar {
    let start = kind.base() + 12 * (anchor.index() % 5) as i64;
    SexagenaryPair::from_index(start + offset as i64)
}

/// Stem of [`five_case_pillar`].
pub const fn five_case_stem(kind: CycleKind, anchor: Stem, offset: u8) -> Stem {
    five_case_pillar(kind, anchor, offset).stem()
}

// ---------------------------------------------------------------------------
// Individual pillars
// ---------------------------------------------------------------------------

/// Year pillar for a civil date.
pub fn year_pillar(date: &CivilDate) -> Pillar {
    let year = astrological_year(date);
    SexagenaryPair::from_index((year - YEAR_CYCLE_EPOCH) as i64)
}

/// Month pillar for a civil date.
pub fn month_pillar(date: &CivilDate) -> Pillar {
    let month_index = solar_month(date).index;
    let year_stem = year_pillar(date).stem();
    five_case_pillar(CycleKind::Month, year_stem, month_index)
}

/// Day pillar for a civil date.
pub fn day_pillar(date: &CivilDate) -> Pillar {
    SexagenaryPair::from_index(date.jdn() - DAY_CYCLE_EPOCH_JDN)
}

/// Hour pillar for a day stem and local hour (0..=23).
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    five_case_pillar(CycleKind::Hour, day_stem, Branch::from_hour(hour).index())
}

// ---------------------------------------------------------------------------
// Four pillars
// ---------------------------------------------------------------------------

/// The year, month, day and optional hour pillars of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    /// Absent when the birth time is unknown.
    pub hour: Option<Pillar>,
}

impl FourPillars {
    /// Pillar at a position, if present.
    pub fn get(&self, position: Position) -> Option<Pillar> {
        match position {
            Position::Year => Some(self.year),
            Position::Month => Some(self.month),
            Position::Day => Some(self.day),
            Position::Hour => self.hour,
        }
    }

    /// Present pillars in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Pillar)> + '_ {
        ALL_POSITIONS
            .iter()
            .filter_map(move |&p| self.get(p).map(|pl| (p, pl)))
    }

    /// Number of present pillars (3 or 4).
    pub fn len(&self) -> usize {
        if self.hour.is_some() { 4 } else { 3 }
    }

    /// Always false; a chart has at least three pillars.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The day stem (day master).
    pub fn day_master(&self) -> Stem {
        self.day.stem()
    }
}

/// Compute the four pillars for a local date and optional local time.
pub fn four_pillars(date: &CivilDate, time: Option<LocalTime>, config: &ChartConfig) -> FourPillars {
    let effective = config.effective_date(date, time);
    let day = day_pillar(&effective);
    FourPillars {
        year: year_pillar(&effective),
        month: month_pillar(&effective),
        day,
        hour: time.map(|t| hour_pillar(day.stem(), t.hour)),
    }
}

// ---------------------------------------------------------------------------
// Hour candidates
// ---------------------------------------------------------------------------

/// One possible hour pillar when the birth time is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourCandidate {
    pub pillar: Pillar,
    /// Window start hour (inclusive).
    pub start_hour: u32,
    /// Window end hour (exclusive, wraps past midnight for Zi).
    pub end_hour: u32,
}

/// All twelve hour pillars for a day stem, in bucket order from Zi.
pub fn hour_candidates(day_stem: Stem) -> [HourCandidate; 12] {
    ALL_BRANCHES.map(|b| {
        let (start_hour, end_hour) = b.hour_window();
        HourCandidate {
            pillar: hour_pillar(day_stem, start_hour),
            start_hour,
            end_hour,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> CivilDate {
        CivilDate::new(y, m, day).unwrap()
    }

    #[test]
    fn year_1984_is_jia_zi() {
        assert_eq!(year_pillar(&d(1984, 6, 1)).index(), 0);
    }

    #[test]
    fn year_2024_is_jia_chen() {
        assert_eq!(year_pillar(&d(2024, 6, 1)).hanzi(), "甲辰");
    }

    #[test]
    fn year_boundary_at_spring_start() {
        assert_eq!(year_pillar(&d(2000, 2, 3)).hanzi(), "己卯");
        assert_eq!(year_pillar(&d(2000, 2, 4)).hanzi(), "庚辰");
        assert_eq!(year_pillar(&d(2000, 2, 5)), year_pillar(&d(2000, 2, 6)));
    }

    #[test]
    fn month_pillar_may_1990() {
        // 庚午 year, solar month 3 (巳) → 辛巳
        assert_eq!(month_pillar(&d(1990, 5, 15)).hanzi(), "辛巳");
    }

    #[test]
    fn month_pillar_tiger_month_by_year_stem() {
        // First solar month opens on 丙寅 in 甲 years, 戊寅 in 乙 years.
        assert_eq!(month_pillar(&d(2024, 2, 10)).hanzi(), "丙寅");
        assert_eq!(month_pillar(&d(2025, 2, 10)).hanzi(), "戊寅");
    }

    #[test]
    fn january_uses_previous_year_stem() {
        // 2024-01-10 is in 癸卯 year, Xiaohan month → 乙丑
        assert_eq!(month_pillar(&d(2024, 1, 10)).hanzi(), "乙丑");
    }

    #[test]
    fn known_day_pillars() {
        assert_eq!(day_pillar(&d(2000, 1, 7)).index(), 0);
        assert_eq!(day_pillar(&d(1949, 10, 1)).index(), 0);
        assert_eq!(day_pillar(&d(2000, 1, 1)).hanzi(), "戊午");
        assert_eq!(day_pillar(&d(1900, 1, 1)).hanzi(), "甲戌");
        assert_eq!(day_pillar(&d(1990, 5, 15)).hanzi(), "庚辰");
    }

    #[test]
    fn day_pillar_steps_by_one() {
        let a = day_pillar(&d(2023, 12, 31));
        let b = day_pillar(&d(2024, 1, 1));
        assert_eq!(a.offset(1), b);
    }

    #[test]
    fn hour_pillar_bucket_and_stem() {
        let h = hour_pillar(Stem::Geng, 14);
        assert_eq!(h.branch(), Branch::Wei);
        assert_eq!(h.hanzi(), "癸未");
        assert_eq!(hour_pillar(Stem::Jia, 0).hanzi(), "甲子");
        assert_eq!(hour_pillar(Stem::Ji, 23).hanzi(), "甲子");
        assert_eq!(hour_pillar(Stem::Wu, 0).hanzi(), "壬子");
    }

    #[test]
    fn five_case_month_starts() {
        let expected = ["丙", "戊", "庚", "壬", "甲"];
        for (i, s) in ["甲", "乙", "丙", "丁", "戊"].iter().enumerate() {
            let anchor: Stem = s.parse().unwrap();
            assert_eq!(five_case_stem(CycleKind::Month, anchor, 0).hanzi(), expected[i]);
            let paired = anchor.offset(5);
            assert_eq!(five_case_stem(CycleKind::Month, paired, 0).hanzi(), expected[i]);
        }
    }

    #[test]
    fn five_case_pillar_agrees_with_stem_rule() {
        for anchor in crate::stem::ALL_STEMS {
            for offset in 0..12u8 {
                let m = five_case_pillar(CycleKind::Month, anchor, offset);
                assert_eq!(m.branch(), Branch::wrapping(offset as i64 + 2));
                assert_eq!(
                    m.stem(),
                    Stem::wrapping(((anchor.index() % 5) * 2 + 2 + offset) as i64)
                );
                let h = five_case_pillar(CycleKind::Hour, anchor, offset);
                assert_eq!(h.branch(), Branch::wrapping(offset as i64));
                assert_eq!(h.stem(), Stem::wrapping(((anchor.index() % 5) * 2 + offset) as i64));
                assert_eq!(SexagenaryPair::new(h.stem(), h.branch()), Some(h));
            }
        }
    }

    #[test]
    fn no_time_means_no_hour() {
        let fp = four_pillars(&d(1990, 5, 15), None, &ChartConfig::default());
        assert_eq!(fp.hour, None);
        assert_eq!(fp.len(), 3);
        assert_eq!(fp.iter().count(), 3);
    }

    #[test]
    fn late_zi_next_day_matches_midnight() {
        let cfg = ChartConfig::default();
        let late = four_pillars(&d(2024, 3, 1), Some(LocalTime::new(23, 30).unwrap()), &cfg);
        let early = four_pillars(&d(2024, 3, 2), Some(LocalTime::new(0, 30).unwrap()), &cfg);
        assert_eq!(late.day, early.day);
        assert_eq!(late.hour, early.hour);
    }

    #[test]
    fn late_zi_same_day_keeps_date() {
        let cfg = ChartConfig {
            late_zi: LateZiPolicy::SameDay,
        };
        let fp = four_pillars(&d(2024, 3, 1), Some(LocalTime::new(23, 30).unwrap()), &cfg);
        assert_eq!(fp.day, day_pillar(&d(2024, 3, 1)));
        assert_eq!(fp.hour.map(|h| h.branch()), Some(Branch::Zi));
    }

    #[test]
    fn late_zi_on_new_year_eve_moves_year() {
        // 2024-02-03 23:30 → charted as 2024-02-04, the new astrological year
        let fp = four_pillars(
            &d(2024, 2, 3),
            Some(LocalTime::new(23, 30).unwrap()),
            &ChartConfig::default(),
        );
        assert_eq!(fp.year.hanzi(), "甲辰");
    }

    #[test]
    fn hour_candidates_cover_all_branches() {
        let c = hour_candidates(Stem::Jia);
        for (i, cand) in c.iter().enumerate() {
            assert_eq!(cand.pillar.branch().index() as usize, i);
        }
        assert_eq!(c[0].pillar.hanzi(), "甲子");
        assert_eq!(c[11].pillar.hanzi(), "乙亥");
        assert_eq!((c[0].start_hour, c[0].end_hour), (23, 1));
    }

    #[test]
    fn position_parse() {
        assert_eq!("hour".parse::<Position>(), Ok(Position::Hour));
        assert!("minute".parse::<Position>().is_err());
    }
}
