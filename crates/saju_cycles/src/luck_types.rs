//! Types for decade luck pillars (대운) and annual pillars (세운).

use std::str::FromStr;

use saju_base::{Pillar, SajuError, TenGod};
use serde::{Deserialize, Serialize};

/// Default number of decade pillars.
pub const DEFAULT_LUCK_CYCLES: u8 = 8;

/// Maximum number of decade pillars.
pub const MAX_LUCK_CYCLES: u8 = 12;

/// Years covered by one decade pillar.
pub const YEARS_PER_CYCLE: u32 = 10;

/// Gender of the chart holder, which together with the year stem polarity
/// fixes the direction of the decade pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            _ => Err(SajuError::Parse("gender must be male or female")),
        }
    }
}

/// Direction in which decade pillars step from the month pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuckDirection {
    /// 순행: later cycle terms.
    Forward,
    /// 역행: earlier cycle terms.
    Backward,
}

impl LuckDirection {
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Configuration for decade pillar generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckCycleConfig {
    /// Number of decade pillars (1..=12). Default: 8.
    pub count: u8,
}

impl Default for LuckCycleConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_LUCK_CYCLES,
        }
    }
}

/// Qualitative reading of a 20..=95 luck score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreTrend {
    /// Score >= 70.
    Favorable,
    /// Score 50..70.
    Steady,
    /// Score < 50.
    Challenging,
}

impl ScoreTrend {
    pub const fn from_score(score: u8) -> Self {
        if score >= 70 {
            Self::Favorable
        } else if score >= 50 {
            Self::Steady
        } else {
            Self::Challenging
        }
    }
}

/// One decade pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckPillar {
    /// 1-based order.
    pub order: u8,
    pub pillar: Pillar,
    /// First age (East Asian reckoning) covered.
    pub start_age: u32,
    /// Last age covered, inclusive.
    pub end_age: u32,
    /// Calendar year in which `start_age` is reached.
    pub start_year: i32,
    pub ten_god: TenGod,
    pub score: u8,
    pub trend: ScoreTrend,
}

impl LuckPillar {
    pub const fn contains_age(&self, age: u32) -> bool {
        age >= self.start_age && age <= self.end_age
    }
}

/// The full decade sequence for a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckCycles {
    pub direction: LuckDirection,
    /// Age at which the first decade pillar begins.
    pub start_age: u32,
    pub pillars: Vec<LuckPillar>,
}

impl LuckCycles {
    /// Decade pillar active at an age, if any.
    pub fn at_age(&self, age: u32) -> Option<&LuckPillar> {
        self.pillars.iter().find(|p| p.contains_age(age))
    }

    /// First decade pillar starting after an age.
    pub fn next_after(&self, age: u32) -> Option<&LuckPillar> {
        self.pillars.iter().find(|p| p.start_age > age)
    }
}

/// The year pillar of one calendar year, read against a natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualPillar {
    pub year: i32,
    /// East Asian age in that year (may be zero or negative before birth).
    pub age: i32,
    pub pillar: Pillar,
    pub ten_god: TenGod,
    pub score: u8,
    pub trend: ScoreTrend,
}

/// Decade and annual pillars around a reference year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckOverview {
    pub reference_year: i32,
    pub age: i32,
    pub cycles: LuckCycles,
    pub current: Option<LuckPillar>,
    pub next: Option<LuckPillar>,
    /// Two years back through five years ahead.
    pub annual: Vec<AnnualPillar>,
}
