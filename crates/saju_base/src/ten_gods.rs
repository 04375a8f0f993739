//! Ten Gods (십신 / 十神): relation of a stem to the day master.
//!
//! The label is fixed by the element relation from the day master to the
//! target stem together with whether their polarities match.

use serde::{Deserialize, Serialize};

use crate::element::{ALL_ELEMENT_RELATIONS, ElementRelation};
use crate::pillar::{FourPillars, Position};
use crate::stem::Stem;

/// One of the ten relation labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    /// 비견 比肩: same element, same polarity.
    Parallel,
    /// 겁재 劫財: same element, opposite polarity.
    Rival,
    /// 식신 食神: day master generates target, same polarity.
    OutputAligned,
    /// 상관 傷官: day master generates target, opposite polarity.
    OutputFree,
    /// 편재 偏財: day master controls target, same polarity.
    IndirectWealth,
    /// 정재 正財: day master controls target, opposite polarity.
    DirectWealth,
    /// 편관 偏官: target controls day master, same polarity.
    IndirectAuthority,
    /// 정관 正官: target controls day master, opposite polarity.
    DirectAuthority,
    /// 편인 偏印: target generates day master, same polarity.
    IndirectResource,
    /// 정인 正印: target generates day master, opposite polarity.
    DirectResource,
}

/// All ten labels.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Parallel,
    TenGod::Rival,
    TenGod::OutputAligned,
    TenGod::OutputFree,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::IndirectAuthority,
    TenGod::DirectAuthority,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

impl TenGod {
    /// Label for an element relation and polarity match.
    pub const fn from_parts(relation: ElementRelation, same_polarity: bool) -> Self {
        use ElementRelation::*;
        match (relation, same_polarity) {
            (Same, true) => Self::Parallel,
            (Same, false) => Self::Rival,
            (Generates, true) => Self::OutputAligned,
            (Generates, false) => Self::OutputFree,
            (Controls, true) => Self::IndirectWealth,
            (Controls, false) => Self::DirectWealth,
            (ControlledBy, true) => Self::IndirectAuthority,
            (ControlledBy, false) => Self::DirectAuthority,
            (GeneratedBy, true) => Self::IndirectResource,
            (GeneratedBy, false) => Self::DirectResource,
        }
    }

    /// Inverse of [`TenGod::from_parts`].
    pub const fn parts(self) -> (ElementRelation, bool) {
        use ElementRelation::*;
        match self {
            Self::Parallel => (Same, true),
            Self::Rival => (Same, false),
            Self::OutputAligned => (Generates, true),
            Self::OutputFree => (Generates, false),
            Self::IndirectWealth => (Controls, true),
            Self::DirectWealth => (Controls, false),
            Self::IndirectAuthority => (ControlledBy, true),
            Self::DirectAuthority => (ControlledBy, false),
            Self::IndirectResource => (GeneratedBy, true),
            Self::DirectResource => (GeneratedBy, false),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Parallel => "Parallel",
            Self::Rival => "Rival",
            Self::OutputAligned => "Output (aligned)",
            Self::OutputFree => "Output (free)",
            Self::IndirectWealth => "Wealth (indirect)",
            Self::DirectWealth => "Wealth (direct)",
            Self::IndirectAuthority => "Authority (indirect)",
            Self::DirectAuthority => "Authority (direct)",
            Self::IndirectResource => "Resource (indirect)",
            Self::DirectResource => "Resource (direct)",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Parallel => "비견",
            Self::Rival => "겁재",
            Self::OutputAligned => "식신",
            Self::OutputFree => "상관",
            Self::IndirectWealth => "편재",
            Self::DirectWealth => "정재",
            Self::IndirectAuthority => "편관",
            Self::DirectAuthority => "정관",
            Self::IndirectResource => "편인",
            Self::DirectResource => "정인",
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Parallel => "比肩",
            Self::Rival => "劫財",
            Self::OutputAligned => "食神",
            Self::OutputFree => "傷官",
            Self::IndirectWealth => "偏財",
            Self::DirectWealth => "正財",
            Self::IndirectAuthority => "偏官",
            Self::DirectAuthority => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }
}

impl std::fmt::Display for TenGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify `target` relative to `day_master`.
pub const fn ten_god(day_master: Stem, target: Stem) -> TenGod {
    let relation = day_master.element().relation_to(target.element());
    let same = day_master.index() % 2 == target.index() % 2;
    TenGod::from_parts(relation, same)
}

/// Ten-god labels for the non-day stems of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenGodClassification {
    pub year: TenGod,
    pub month: TenGod,
    /// Absent when the chart has no hour pillar.
    pub hour: Option<TenGod>,
}

impl TenGodClassification {
    /// Label at a position. Always None for the day position.
    pub fn get(&self, position: Position) -> Option<TenGod> {
        match position {
            Position::Year => Some(self.year),
            Position::Month => Some(self.month),
            Position::Day => None,
            Position::Hour => self.hour,
        }
    }
}

/// Classify the year, month and hour stems against the day stem.
pub fn classify(pillars: &FourPillars) -> TenGodClassification {
    let dm = pillars.day_master();
    TenGodClassification {
        year: ten_god(dm, pillars.year.stem()),
        month: ten_god(dm, pillars.month.stem()),
        hour: pillars.hour.map(|h| ten_god(dm, h.stem())),
    }
}

/// Every (relation, polarity match) combination, in label order.
pub fn all_parts() -> impl Iterator<Item = (ElementRelation, bool)> {
    ALL_ELEMENT_RELATIONS
        .iter()
        .flat_map(|&r| [(r, true), (r, false)])
}
