//! Four-pillar chart primitives built on the sexagenary calendar.
//!
//! This crate provides:
//! - Stems, branches, elements and the 60-term stem-branch cycle
//! - Fixed-day solar-month boundaries and the spring-start year boundary
//! - Year, month, day and hour pillar derivation from a local civil date
//! - Element/polarity tallies, Ten Gods classification, hidden stems and
//!   branch relations including punishments
//! - Full chart composition ([`compute_chart`])
//!
//! Everything here is pure and table-driven: no I/O, no shared mutable state.

pub mod branch;
pub mod branch_relation;
pub mod chart;
pub mod date;
pub mod element;
pub mod error;
pub mod hidden_stem;
pub mod pillar;
pub mod sexagenary;
pub mod solar_term;
pub mod stem;
pub mod stem_relation;
pub mod tally;
pub mod ten_gods;

pub use branch::{ALL_BRANCHES, Branch};
pub use branch_relation::{
    ALL_PUNISHMENTS, BranchFinding, BranchPairKind, BranchRelationSet, Direction, GroupFinding,
    PunishmentFinding, PunishmentKind, combine_element, detect_branch_relations, is_clash,
    is_combine, is_direction_pair, is_harm, is_resentment, is_self_punishing, is_trine_pair,
    punishment, resentment_partner, trine_element, trine_members,
};
pub use chart::{BirthInput, ChartResult, DayMaster, compute_chart};
pub use date::{CivilDate, LocalTime, days_in_month, is_leap_year};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, Polarity};
pub use error::SajuError;
pub use hidden_stem::{ChartHiddenStems, HiddenStems, hidden_stems};
pub use pillar::{
    ALL_POSITIONS, ChartConfig, CycleKind, FourPillars, HourCandidate, LateZiPolicy, Position,
    day_pillar, five_case_pillar, five_case_stem, four_pillars, hour_candidates, hour_pillar,
    month_pillar, year_pillar,
};
pub use sexagenary::{Pillar, SexagenaryPair, all_pairs};
pub use solar_term::{SolarMonth, astrological_year, solar_month};
pub use stem::{ALL_STEMS, Stem};
pub use stem_relation::{is_stem_clash, is_stem_combine, stem_combine_element};
pub use tally::{ElementTally, PolarityTally, element_tally, polarity_tally};
pub use ten_gods::{ALL_TEN_GODS, TenGod, TenGodClassification, classify, ten_god};
