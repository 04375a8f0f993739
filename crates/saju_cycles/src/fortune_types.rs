//! Types for daily and monthly fortune scoring.

use saju_base::{CivilDate, Pillar, Position};
use serde::{Deserialize, Serialize};

use crate::balance::ElementAffinity;

/// Configuration for monthly lucky/caution day selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneConfig {
    /// Minimum day score counted as lucky. Default: 75.
    pub lucky_threshold: u8,
    /// Maximum day score counted as a caution day. Default: 40.
    pub caution_threshold: u8,
    /// Lucky days reported per month. Default: 5.
    pub max_lucky_days: usize,
    /// Caution days reported per month. Default: 3.
    pub max_caution_days: usize,
}

impl Default for FortuneConfig {
    fn default() -> Self {
        Self {
            lucky_threshold: 75,
            caution_threshold: 40,
            max_lucky_days: 5,
            max_caution_days: 3,
        }
    }
}

/// Five-step grade of a 20..=95 fortune score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FortuneGrade {
    /// 대길, score >= 80.
    Excellent,
    /// 길, score >= 65.
    Good,
    /// 보통, score >= 50.
    Normal,
    /// 주의, score >= 35.
    Caution,
    /// 흉, below 35.
    Bad,
}

impl FortuneGrade {
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 65 {
            Self::Good
        } else if score >= 50 {
            Self::Normal
        } else if score >= 35 {
            Self::Caution
        } else {
            Self::Bad
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Excellent => "대길",
            Self::Good => "길",
            Self::Normal => "보통",
            Self::Caution => "주의",
            Self::Bad => "흉",
        }
    }
}

/// How a target stem bears on the day master. The first matching rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StemInfluence {
    /// Stem combination with the day master (천간합).
    Combine,
    /// Stem clash with the day master (천간충).
    Clash,
    /// Day master generates the target (설기).
    Drain,
    /// Target generates the day master (생조).
    Support,
    /// Day master controls the target (극출).
    Dominate,
    /// Target controls the day master (극입).
    Pressure,
    /// Same element, no combination or clash.
    Neutral,
}

/// Score of a target pillar against a natal chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationScore {
    pub score: u8,
    pub stem: StemInfluence,
    /// Natal positions whose branch combines with the target branch.
    pub combines_with: Vec<Position>,
    /// Natal positions whose branch clashes with the target branch.
    pub clashes_with: Vec<Position>,
}

/// Fortune for one civil day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFortune {
    pub date: CivilDate,
    pub pillar: Pillar,
    pub relation: RelationScore,
    pub grade: FortuneGrade,
    /// Lucky hours as `(start, end)`, end exclusive.
    pub lucky_hours: (u32, u32),
    /// Affinity of the element that supports the day master.
    pub lucky: ElementAffinity,
}

/// Fortune for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyFortune {
    pub year: i32,
    pub month: u32,
    /// Month pillar of the solar month containing the 15th.
    pub pillar: Pillar,
    pub relation: RelationScore,
    pub grade: FortuneGrade,
    pub lucky_days: Vec<u32>,
    pub caution_days: Vec<u32>,
}

/// One cell of a month calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub day: u32,
    pub pillar: Pillar,
    pub score: u8,
    pub grade: FortuneGrade,
}
