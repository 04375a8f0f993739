//! Two-chart compatibility (궁합).
//!
//! Three partial scores are blended 3:4:3 into a total: the day-master
//! element relation, the branch relations across year, month and day
//! pillars, and the day pillars against each other.

use saju_base::{
    ChartResult, Element, ElementRelation, FourPillars, Position, is_clash, is_combine,
    is_direction_pair, is_harm, is_resentment, is_trine_pair, stem_combine_element,
};
use serde::{Deserialize, Serialize};

use crate::util::clamp_score;

/// Positions compared across the two charts. The hour is left out so that
/// charts without a birth time compare on equal terms.
const COMPARED: [Position; 3] = [Position::Year, Position::Month, Position::Day];

/// Six-step grade of a compatibility total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CompatibilityGrade {
    /// 천생연분, total >= 90.
    Destined,
    /// 매우 좋음, total >= 80.
    VeryGood,
    /// 좋음, total >= 70.
    Good,
    /// 보통, total >= 60.
    Fair,
    /// 노력 필요, total >= 50.
    NeedsEffort,
    /// 어려움, below 50.
    Difficult,
}

impl CompatibilityGrade {
    pub const fn from_score(score: u8) -> Self {
        if score >= 90 {
            Self::Destined
        } else if score >= 80 {
            Self::VeryGood
        } else if score >= 70 {
            Self::Good
        } else if score >= 60 {
            Self::Fair
        } else if score >= 50 {
            Self::NeedsEffort
        } else {
            Self::Difficult
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Destined => "천생연분",
            Self::VeryGood => "매우 좋음",
            Self::Good => "좋음",
            Self::Fair => "보통",
            Self::NeedsEffort => "노력 필요",
            Self::Difficult => "어려움",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Day-master element relation, 50..=90.
    pub element_score: u8,
    /// Cross-chart branch relations, 40..=100.
    pub branch_score: u8,
    /// Day pillar against day pillar, 40..=100.
    pub day_score: u8,
    pub total: u8,
    pub grade: CompatibilityGrade,
    /// Element formed when the two day masters combine.
    pub stem_combination: Option<Element>,
}

/// Element score seen from the first chart's day master.
pub const fn element_score(first: Element, second: Element) -> u8 {
    match first.relation_to(second) {
        ElementRelation::Same => 75,
        ElementRelation::Generates => 85,
        ElementRelation::GeneratedBy => 90,
        ElementRelation::Controls => 55,
        ElementRelation::ControlledBy => 50,
    }
}

/// Branch score over every year/month/day pair across the two charts.
pub fn branch_score(first: &FourPillars, second: &FourPillars) -> u8 {
    let mut score: i32 = 70;
    for a in COMPARED.iter().filter_map(|&p| first.get(p)) {
        for b in COMPARED.iter().filter_map(|&p| second.get(p)) {
            let (x, y) = (a.branch(), b.branch());
            if is_combine(x, y) {
                score += 15;
            }
            if is_trine_pair(x, y) {
                score += 8;
            }
            if is_direction_pair(x, y) {
                score += 5;
            }
            if is_clash(x, y) {
                score -= 12;
            }
            if is_harm(x, y) {
                score -= 8;
            }
            if is_resentment(x, y) {
                score -= 6;
            }
        }
    }
    clamp_score(score, 40, 100)
}

/// Day pillar against day pillar. Only the first matching branch rule applies.
pub fn day_score(first: &FourPillars, second: &FourPillars) -> u8 {
    let (a, b) = (first.day, second.day);
    let mut score: i32 = 70;
    if stem_combine_element(a.stem(), b.stem()).is_some() {
        score += 18;
    }
    let (x, y) = (a.branch(), b.branch());
    score += if is_combine(x, y) {
        20
    } else if is_clash(x, y) {
        -15
    } else if is_trine_pair(x, y) {
        10
    } else if is_resentment(x, y) {
        -8
    } else {
        0
    };
    clamp_score(score, 40, 100)
}

/// Compatibility of two charts. The element score depends on the order of
/// the arguments; the branch and day scores do not.
pub fn compatibility(first: &ChartResult, second: &ChartResult) -> CompatibilityResult {
    let element_score = element_score(first.day_master.element, second.day_master.element);
    let branch_score = branch_score(&first.pillars, &second.pillars);
    let day_score = day_score(&first.pillars, &second.pillars);

    // 0.3 / 0.4 / 0.3, half rounded up
    let weighted = 3 * element_score as u32 + 4 * branch_score as u32 + 3 * day_score as u32;
    let total = ((weighted + 5) / 10) as u8;

    CompatibilityResult {
        element_score,
        branch_score,
        day_score,
        total,
        grade: CompatibilityGrade::from_score(total),
        stem_combination: stem_combine_element(first.day_master.stem, second.day_master.stem),
    }
}
