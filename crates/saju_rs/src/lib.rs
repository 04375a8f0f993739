//! Convenience wrapper for the saju chart engine.
//!
//! Accepts dates and times as text, stamps charts with the current time,
//! and re-exports every type a caller needs.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use saju_rs::*;
//!
//! let c = chart("1990-05-15", Some("14:30")).unwrap();
//! println!("{} {} {}", c.pillars.year, c.pillars.month, c.pillars.day);
//!
//! let luck = luck_cycles(&c, Gender::Male, &LuckCycleConfig::default()).unwrap();
//! println!("first decade pillar: {}", luck.pillars[0].pillar);
//! ```

pub mod convenience;
pub mod error;
pub mod parse;

// Primary re-exports: users should only need `use saju_rs::*`
pub use convenience::{
    balance, chart, chart_with_config, compatibility, daily_fortune, day_pillar, hour_candidates,
    luck_cycles, luck_overview, month_calendar, monthly_fortune, stars,
};
pub use error::SajuRsError;
pub use parse::{parse_date, parse_time};

// Chart types, so callers don't need to depend on saju_base directly.
pub use saju_base::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_POSITIONS, ALL_STEMS, ALL_TEN_GODS, BirthInput, Branch,
    BranchFinding, BranchPairKind, BranchRelationSet, ChartConfig, ChartHiddenStems, ChartResult,
    CivilDate, DayMaster, Direction, Element, ElementRelation, ElementTally, FourPillars,
    GroupFinding, HiddenStems, HourCandidate, LateZiPolicy, LocalTime, Pillar, Polarity,
    PolarityTally, Position, PunishmentFinding, PunishmentKind, SajuError, SexagenaryPair, Stem,
    TenGod, TenGodClassification,
};

// Derived result types.
pub use saju_cycles::{
    ALL_STARS, AnnualPillar, CalendarDay, CompatibilityGrade, CompatibilityResult, CycleError,
    DailyFortune, ElementAffinity, ElementBalance, FortuneConfig, FortuneGrade, Gender,
    LuckCycleConfig, LuckCycles, LuckDirection, LuckOverview, LuckPillar, MonthlyFortune,
    RelationScore, ScoreTrend, Star, StarBalance, StarFinding, StarKind, StarReport,
    StemInfluence, Strength, StrengthFactor,
};
