//! Day-master strength and favorable elements (용신 / 희신 / 기신 / 구신).
//!
//! Strength is a 0..=100 score starting at 50 and adjusted by the month
//! branch, the counts of the day master's own, generating, controlling and
//! controlled elements, and support hidden in the branches. The score maps
//! onto five levels, and the level decides which elements help or hurt.

use saju_base::{ALL_ELEMENTS, ChartResult, Element, ElementTally};
use serde::{Deserialize, Serialize};

use crate::util::clamp_score;

/// Starting strength score.
pub const NEUTRAL_SCORE: i32 = 50;

/// Hidden-stem support, in tenths, needed for the hidden support bonus.
pub const HIDDEN_SUPPORT_THRESHOLD: u32 = 20;

// ---------------------------------------------------------------------------
// Element affinity
// ---------------------------------------------------------------------------

/// Colors, direction and numbers traditionally associated with an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementAffinity {
    pub element: Element,
    pub colors: String,
    pub direction: String,
    pub numbers: [u8; 2],
}

/// Affinity table entry for an element.
pub fn affinity(element: Element) -> ElementAffinity {
    let (colors, direction, numbers) = match element {
        Element::Wood => ("green, teal", "east", [3, 8]),
        Element::Fire => ("red, orange", "south", [2, 7]),
        Element::Earth => ("yellow, brown", "center", [5, 10]),
        Element::Metal => ("white, gold", "west", [4, 9]),
        Element::Water => ("black, blue", "north", [1, 6]),
    };
    ElementAffinity {
        element,
        colors: colors.to_string(),
        direction: direction.to_string(),
        numbers,
    }
}

// ---------------------------------------------------------------------------
// Strength
// ---------------------------------------------------------------------------

/// Five-level day-master strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strength {
    /// 극강: score 75 and above.
    ExtremeStrong,
    /// 신강: 60..=74.
    Strong,
    /// 중화: 40..=59.
    Neutral,
    /// 신약: 25..=39.
    Weak,
    /// 극약: below 25.
    ExtremeWeak,
}

impl Strength {
    pub const fn from_score(score: u8) -> Self {
        match score {
            75.. => Self::ExtremeStrong,
            60..=74 => Self::Strong,
            40..=59 => Self::Neutral,
            25..=39 => Self::Weak,
            _ => Self::ExtremeWeak,
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::ExtremeStrong => "극강",
            Self::Strong => "신강",
            Self::Neutral => "중화",
            Self::Weak => "신약",
            Self::ExtremeWeak => "극약",
        }
    }

    pub const fn is_strong(self) -> bool {
        matches!(self, Self::ExtremeStrong | Self::Strong)
    }

    pub const fn is_weak(self) -> bool {
        matches!(self, Self::Weak | Self::ExtremeWeak)
    }
}

/// One adjustment applied to the strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrengthFactor {
    /// Month branch shares the day master's element (득령).
    MonthSameElement,
    /// Month branch generates the day master.
    MonthGenerates,
    /// Month branch controls the day master (실령).
    MonthControls,
    /// Three or more symbols of the day master's element.
    ManyPeers,
    /// No symbol of the day master's element.
    NoPeers,
    /// Two or more symbols of the generating element.
    StrongResource,
    /// Three or more symbols of the controlling element.
    HeavyAuthority,
    /// Exactly two symbols of the controlling element.
    ModerateAuthority,
    /// Three or more symbols of the element the day master controls, on an
    /// already middling score.
    DrainingWealth,
    /// Hidden stems of the day master's element reach the support threshold.
    HiddenSupport,
}

impl StrengthFactor {
    pub const fn points(self) -> i32 {
        match self {
            Self::MonthSameElement => 15,
            Self::MonthGenerates => 10,
            Self::MonthControls => -15,
            Self::ManyPeers => 10,
            Self::NoPeers => -10,
            Self::StrongResource => 8,
            Self::HeavyAuthority => -12,
            Self::ModerateAuthority => -5,
            Self::DrainingWealth => -8,
            Self::HiddenSupport => 5,
        }
    }
}

/// Strength factors of a chart, in the order they are applied.
pub fn strength_factors(chart: &ChartResult) -> Vec<StrengthFactor> {
    let me = chart.day_master.element;
    let counts = &chart.elements;
    let mut factors = Vec::new();

    let month = chart.pillars.month.branch().element();
    if month == me {
        factors.push(StrengthFactor::MonthSameElement);
    } else if month == me.generated_by() {
        factors.push(StrengthFactor::MonthGenerates);
    } else if month.controls() == me {
        factors.push(StrengthFactor::MonthControls);
    }

    match counts.get(me) {
        3.. => factors.push(StrengthFactor::ManyPeers),
        0 => factors.push(StrengthFactor::NoPeers),
        _ => {}
    }

    if counts.get(me.generated_by()) >= 2 {
        factors.push(StrengthFactor::StrongResource);
    }

    match counts.get(me.controlled_by()) {
        3.. => factors.push(StrengthFactor::HeavyAuthority),
        2 => factors.push(StrengthFactor::ModerateAuthority),
        _ => {}
    }

    if counts.get(me.controls()) >= 3 && raw_score(&factors) < 55 {
        factors.push(StrengthFactor::DrainingWealth);
    }

    if chart.hidden_stems.weight_for(me) >= HIDDEN_SUPPORT_THRESHOLD {
        factors.push(StrengthFactor::HiddenSupport);
    }

    factors
}

fn raw_score(factors: &[StrengthFactor]) -> i32 {
    NEUTRAL_SCORE + factors.iter().map(|f| f.points()).sum::<i32>()
}

// ---------------------------------------------------------------------------
// Balance
// ---------------------------------------------------------------------------

/// Strength of the day master and the elements that help or hinder it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementBalance {
    pub day_element: Element,
    /// Strength score, 0..=100 with 50 balanced.
    pub score: u8,
    pub strength: Strength,
    /// Adjustments behind the score.
    pub factors: Vec<StrengthFactor>,
    /// Elements that restore balance (용신).
    pub favorable: Vec<Element>,
    /// Elements that feed the favorable ones (희신).
    pub supporting: Vec<Element>,
    /// Elements that worsen the imbalance (기신).
    pub unfavorable: Vec<Element>,
    /// Elements that feed the unfavorable ones (구신).
    pub adverse: Vec<Element>,
    /// Element with the highest count.
    pub dominant: Element,
    /// Elements absent from the chart.
    pub missing: Vec<Element>,
}

impl ElementBalance {
    /// Affinities of the favorable elements.
    pub fn recommendations(&self) -> Vec<ElementAffinity> {
        self.favorable.iter().map(|&e| affinity(e)).collect()
    }
}

/// Rarest element other than `me`; ties resolve to the earliest in cycle order.
fn scarcest_other(counts: &ElementTally, me: Element) -> Element {
    ALL_ELEMENTS
        .into_iter()
        .filter(|&e| e != me)
        .min_by_key(|&e| counts.get(e))
        .unwrap_or(me.generates())
}

/// Analyse the element balance of a chart around its day master.
pub fn element_balance(chart: &ChartResult) -> ElementBalance {
    let me = chart.day_master.element;
    let factors = strength_factors(chart);
    let score = clamp_score(raw_score(&factors), 0, 100);
    let strength = Strength::from_score(score);

    let (favorable, supporting, unfavorable, adverse) = if strength.is_strong() {
        (
            vec![me.generates(), me.controls()],
            vec![me.controlled_by()],
            vec![me.generated_by(), me],
            Vec::new(),
        )
    } else if strength.is_weak() {
        (
            vec![me.generated_by(), me],
            vec![me.generated_by().generated_by()],
            vec![me.controlled_by(), me.controls()],
            vec![me.generates()],
        )
    } else {
        let scarce = scarcest_other(&chart.elements, me);
        let dominant = chart.elements.dominant();
        let unfavorable = if dominant != me && chart.elements.get(dominant) >= 3 {
            vec![dominant]
        } else {
            Vec::new()
        };
        (vec![scarce], vec![scarce.generated_by()], unfavorable, Vec::new())
    };

    ElementBalance {
        day_element: me,
        score,
        strength,
        factors,
        favorable,
        supporting,
        unfavorable,
        adverse,
        dominant: chart.elements.dominant(),
        missing: chart.elements.missing(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::chart;

    #[test]
    fn level_thresholds() {
        assert_eq!(Strength::from_score(100), Strength::ExtremeStrong);
        assert_eq!(Strength::from_score(75), Strength::ExtremeStrong);
        assert_eq!(Strength::from_score(74), Strength::Strong);
        assert_eq!(Strength::from_score(60), Strength::Strong);
        assert_eq!(Strength::from_score(59), Strength::Neutral);
        assert_eq!(Strength::from_score(40), Strength::Neutral);
        assert_eq!(Strength::from_score(39), Strength::Weak);
        assert_eq!(Strength::from_score(25), Strength::Weak);
        assert_eq!(Strength::from_score(24), Strength::ExtremeWeak);
        assert_eq!(Strength::from_score(0), Strength::ExtremeWeak);
    }

    #[test]
    fn month_branch_controls_metal_master() {
        // 庚午 辛巳 庚辰 癸未: 巳 fire month, metal 3, earth 2, fire 2
        let b = element_balance(&chart(1990, 5, 15, Some((14, 30))));
        assert_eq!(b.day_element, Element::Metal);
        assert_eq!(
            b.factors,
            vec![
                StrengthFactor::MonthControls,
                StrengthFactor::ManyPeers,
                StrengthFactor::StrongResource,
                StrengthFactor::ModerateAuthority,
            ]
        );
        assert_eq!(b.score, 48);
        assert_eq!(b.strength, Strength::Neutral);
        // neutral: rarest other element is wood, fed by water
        assert_eq!(b.favorable, vec![Element::Wood]);
        assert_eq!(b.supporting, vec![Element::Water]);
        assert!(b.unfavorable.is_empty());
        assert_eq!(b.missing, vec![Element::Wood]);
    }

    #[test]
    fn extreme_strong_earth_master() {
        // 己巳 丁丑 戊寅: 丑 earth month, earth 3, fire 2
        let b = element_balance(&chart(1990, 1, 13, None));
        assert_eq!(b.score, 83);
        assert_eq!(b.strength, Strength::ExtremeStrong);
        assert_eq!(b.favorable, vec![Element::Metal, Element::Water]);
        assert_eq!(b.supporting, vec![Element::Wood]);
        assert_eq!(b.unfavorable, vec![Element::Fire, Element::Earth]);
        assert!(b.adverse.is_empty());
    }

    #[test]
    fn strong_earth_master() {
        // 己巳 丙子 戊辰: earth 3, fire 2, month 子 water
        let b = element_balance(&chart(1990, 1, 3, None));
        assert_eq!(b.score, 68);
        assert_eq!(b.strength, Strength::Strong);
    }

    #[test]
    fn weak_metal_master() {
        // 己巳 丙子 庚午: fire 3 controls metal
        let b = element_balance(&chart(1990, 1, 5, None));
        assert_eq!(b.factors, vec![StrengthFactor::HeavyAuthority]);
        assert_eq!(b.score, 38);
        assert_eq!(b.strength, Strength::Weak);
        assert_eq!(b.favorable, vec![Element::Earth, Element::Metal]);
        assert_eq!(b.supporting, vec![Element::Fire]);
        assert_eq!(b.unfavorable, vec![Element::Fire, Element::Wood]);
        assert_eq!(b.adverse, vec![Element::Water]);
    }

    #[test]
    fn extreme_weak_water_master() {
        // 己巳 丁丑 壬申 丙午: 丑 earth month, fire 4
        let b = element_balance(&chart(1990, 1, 7, Some((12, 0))));
        assert_eq!(
            b.factors,
            vec![
                StrengthFactor::MonthControls,
                StrengthFactor::ModerateAuthority,
                StrengthFactor::DrainingWealth,
            ]
        );
        assert_eq!(b.score, 22);
        assert_eq!(b.strength, Strength::ExtremeWeak);
    }

    #[test]
    fn hidden_support_reaches_threshold() {
        // 庚午 戊寅 丙午: 丁 in both 午, 丙 in 寅 and 午
        let c = chart(1990, 2, 10, None);
        assert_eq!(c.hidden_stems.weight_for(Element::Fire), 31);
        let b = element_balance(&c);
        assert_eq!(
            b.factors,
            vec![
                StrengthFactor::MonthGenerates,
                StrengthFactor::ManyPeers,
                StrengthFactor::HiddenSupport,
            ]
        );
        assert_eq!(b.score, 75);
        assert_eq!(b.strength, Strength::ExtremeStrong);
    }

    #[test]
    fn neutral_dominant_element_is_unfavorable() {
        // 己巳 丙子 丙寅: fire master with fire 3 dominant, metal absent
        let b = element_balance(&chart(1990, 1, 1, None));
        assert_eq!(b.strength, Strength::Neutral);
        assert_eq!(b.favorable, vec![Element::Metal]);
        assert_eq!(b.supporting, vec![Element::Earth]);
        assert!(b.unfavorable.is_empty());
    }

    #[test]
    fn affinity_table() {
        assert_eq!(affinity(Element::Water).direction, "north");
        assert_eq!(affinity(Element::Earth).numbers, [5, 10]);
    }

    #[test]
    fn balance_round_trips_through_json() {
        let b = element_balance(&chart(1990, 5, 15, None));
        let json = serde_json::to_string(&b).unwrap();
        let back: ElementBalance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
        let a = affinity(Element::Fire);
        let back: ElementAffinity = serde_json::from_str(&serde_json::to_string(&a).unwrap()).unwrap();
        assert_eq!(back, a);
    }
}
