//! Calculations derived from a computed chart.
//!
//! This crate provides:
//! - Decade luck pillars and annual pillars with scores
//! - Daily and monthly fortune, and per-day month calendars
//! - Two-chart compatibility
//! - Auspicious and inauspicious star detection
//! - Scored day-master strength and favorable elements
//!
//! Every function takes a [`saju_base::ChartResult`] and is pure.

pub mod balance;
pub mod compatibility;
pub mod error;
pub mod fortune;
pub mod fortune_types;
pub mod luck;
pub mod luck_types;
pub mod stars;
mod util;

pub use balance::{
    ElementAffinity, ElementBalance, HIDDEN_SUPPORT_THRESHOLD, NEUTRAL_SCORE, Strength,
    StrengthFactor, affinity, element_balance, strength_factors,
};
pub use compatibility::{CompatibilityGrade, CompatibilityResult, compatibility};
pub use error::CycleError;
pub use fortune::{daily_fortune, lucky_hours, month_calendar, monthly_fortune, relation_score};
pub use fortune_types::{
    CalendarDay, DailyFortune, FortuneConfig, FortuneGrade, MonthlyFortune, RelationScore,
    StemInfluence,
};
pub use luck::{
    annual_pillar, annual_pillars, east_asian_age, luck_cycles, luck_direction, luck_overview,
    luck_score, luck_start_age,
};
pub use luck_types::{
    AnnualPillar, DEFAULT_LUCK_CYCLES, Gender, LuckCycleConfig, LuckCycles, LuckDirection,
    LuckOverview, LuckPillar, MAX_LUCK_CYCLES, ScoreTrend,
};
pub use stars::{ALL_STARS, Star, StarBalance, StarFinding, StarKind, StarReport, find_stars};

#[cfg(test)]
pub(crate) mod test_util {
    use chrono::{DateTime, Utc};
    use saju_base::{ChartConfig, ChartResult, CivilDate, LocalTime, compute_chart};

    pub fn chart(y: i32, m: u32, d: u32, time: Option<(u32, u32)>) -> ChartResult {
        compute_chart(
            CivilDate::new(y, m, d).unwrap(),
            time.map(|(h, mi)| LocalTime::new(h, mi).unwrap()),
            &ChartConfig::default(),
            DateTime::<Utc>::UNIX_EPOCH,
        )
    }
}
