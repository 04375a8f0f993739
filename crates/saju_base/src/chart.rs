//! Chart composition: pillars plus every analysis derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::branch_relation::{BranchRelationSet, detect_branch_relations};
use crate::date::{CivilDate, LocalTime};
use crate::element::{Element, Polarity};
use crate::hidden_stem::ChartHiddenStems;
use crate::pillar::{ChartConfig, FourPillars, four_pillars};
use crate::stem::Stem;
use crate::tally::{ElementTally, PolarityTally, element_tally, polarity_tally};
use crate::ten_gods::{TenGodClassification, classify};

/// Birth input as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInput {
    pub date: CivilDate,
    pub time: Option<LocalTime>,
}

/// Identity of the day master (day stem).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMaster {
    pub stem: Stem,
    pub element: Element,
    pub polarity: Polarity,
}

impl From<Stem> for DayMaster {
    fn from(stem: Stem) -> Self {
        Self {
            stem,
            element: stem.element(),
            polarity: stem.polarity(),
        }
    }
}

/// A computed chart. Immutable and recomputed per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartResult {
    pub input: BirthInput,
    pub config: ChartConfig,
    /// Calendar date the pillars were taken from (differs from the input
    /// date only for a late Zi hour under the next-day policy).
    pub effective_date: CivilDate,
    pub pillars: FourPillars,
    /// Stems hidden in each present branch.
    pub hidden_stems: ChartHiddenStems,
    pub elements: ElementTally,
    pub polarities: PolarityTally,
    pub day_master: DayMaster,
    pub ten_gods: TenGodClassification,
    pub branch_relations: BranchRelationSet,
    pub computed_at: DateTime<Utc>,
}

/// Compute a full chart.
///
/// `computed_at` is stamped onto the result unchanged; every other field
/// depends only on the birth input and configuration.
pub fn compute_chart(
    date: CivilDate,
    time: Option<LocalTime>,
    config: &ChartConfig,
    computed_at: DateTime<Utc>,
) -> ChartResult {
    let pillars = four_pillars(&date, time, config);
    ChartResult {
        input: BirthInput { date, time },
        config: *config,
        effective_date: config.effective_date(&date, time),
        elements: element_tally(&pillars),
        polarities: polarity_tally(&pillars),
        day_master: DayMaster::from(pillars.day_master()),
        ten_gods: classify(&pillars),
        branch_relations: detect_branch_relations(&pillars),
        hidden_stems: ChartHiddenStems::of(&pillars),
        pillars,
        computed_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;
    use crate::ten_gods::TenGod;
    use chrono::TimeZone;

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn chart_1990_05_15_with_time() {
        let date = CivilDate::new(1990, 5, 15).unwrap();
        let time = LocalTime::new(14, 30).unwrap();
        let r = compute_chart(date, Some(time), &ChartConfig::default(), stamp());
        assert_eq!(r.pillars.year.hanzi(), "庚午");
        assert_eq!(r.pillars.month.hanzi(), "辛巳");
        assert_eq!(r.pillars.day.hanzi(), "庚辰");
        assert_eq!(r.pillars.hour.map(|h| h.branch()), Some(Branch::Wei));
        assert_eq!(r.day_master.stem, Stem::Geng);
        assert_eq!(r.day_master.element, Element::Metal);
        assert_eq!(r.ten_gods.year, TenGod::Parallel);
        assert_eq!(r.ten_gods.month, TenGod::Rival);
        assert_eq!(r.ten_gods.hour, Some(TenGod::OutputFree));
        assert_eq!(r.elements.total(), 8);
        assert_eq!(r.hidden_stems.day.main, Stem::Wu);
        assert_eq!(r.hidden_stems.hour.map(|h| h.main), Some(Stem::Ji));
        assert!(r.branch_relations.punishments.is_empty());
    }

    #[test]
    fn identical_inputs_compare_equal() {
        let date = CivilDate::new(2024, 1, 1).unwrap();
        let a = compute_chart(date, None, &ChartConfig::default(), stamp());
        let b = compute_chart(date, None, &ChartConfig::default(), stamp());
        assert_eq!(a, b);
    }

    #[test]
    fn serializes_to_json() {
        let date = CivilDate::new(2024, 3, 1).unwrap();
        let r = compute_chart(date, None, &ChartConfig::default(), stamp());
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"day_master\""));
        assert!(json.contains("\"hour\":null"));
        let back: ChartResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
