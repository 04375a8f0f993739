//! Daily and monthly fortune (일진 / 월운).
//!
//! A target pillar is scored against the natal chart from a base of 60:
//! its stem against the day master, its branch against every natal branch,
//! and its branch element against the day-master element.

use saju_base::{
    ChartResult, CivilDate, ElementRelation, FourPillars, Pillar, Position, day_pillar,
    days_in_month, is_clash, is_combine, is_stem_clash, is_stem_combine, month_pillar,
};
use tracing::trace;

use crate::balance::affinity;
use crate::error::CycleError;
use crate::fortune_types::{
    CalendarDay, DailyFortune, FortuneConfig, FortuneGrade, MonthlyFortune, RelationScore,
    StemInfluence,
};
use crate::util::clamp_score;

const BASE_SCORE: i32 = 60;

fn stem_influence(natal: &FourPillars, target: Pillar) -> StemInfluence {
    let dm = natal.day_master();
    let ts = target.stem();
    if is_stem_combine(dm, ts) {
        return StemInfluence::Combine;
    }
    if is_stem_clash(dm, ts) {
        return StemInfluence::Clash;
    }
    match dm.element().relation_to(ts.element()) {
        ElementRelation::Generates => StemInfluence::Drain,
        ElementRelation::GeneratedBy => StemInfluence::Support,
        ElementRelation::Controls => StemInfluence::Dominate,
        ElementRelation::ControlledBy => StemInfluence::Pressure,
        ElementRelation::Same => StemInfluence::Neutral,
    }
}

const fn stem_points(influence: StemInfluence) -> i32 {
    match influence {
        StemInfluence::Combine => 15,
        StemInfluence::Clash => -15,
        StemInfluence::Drain => 5,
        StemInfluence::Support => 10,
        StemInfluence::Dominate => 5,
        StemInfluence::Pressure => -10,
        StemInfluence::Neutral => 0,
    }
}

/// Score a target pillar against natal pillars (20..=95).
pub fn relation_score(natal: &FourPillars, target: Pillar) -> RelationScore {
    let stem = stem_influence(natal, target);
    let tb = target.branch();

    let combines_with: Vec<Position> = natal
        .iter()
        .filter(|(_, p)| is_combine(p.branch(), tb))
        .map(|(pos, _)| pos)
        .collect();
    let clashes_with: Vec<Position> = natal
        .iter()
        .filter(|(_, p)| is_clash(p.branch(), tb))
        .map(|(pos, _)| pos)
        .collect();

    let mut score = BASE_SCORE + stem_points(stem);
    score += 5 * combines_with.len() as i32;
    score -= 5 * clashes_with.len() as i32;
    score += match natal.day_master().element().relation_to(tb.element()) {
        ElementRelation::GeneratedBy => 8,
        ElementRelation::ControlledBy => -8,
        _ => 0,
    };

    RelationScore {
        score: clamp_score(score, 20, 95),
        stem,
        combines_with,
        clashes_with,
    }
}

/// Best two-hour window for a day score, as `(start, end)`.
pub const fn lucky_hours(score: u8) -> (u32, u32) {
    if score >= 70 {
        (9, 11)
    } else if score >= 50 {
        (14, 16)
    } else {
        (19, 21)
    }
}

/// Fortune of one civil day for a chart.
pub fn daily_fortune(chart: &ChartResult, date: CivilDate) -> DailyFortune {
    let pillar = day_pillar(&date);
    let relation = relation_score(&chart.pillars, pillar);
    let grade = FortuneGrade::from_score(relation.score);
    DailyFortune {
        date,
        pillar,
        lucky_hours: lucky_hours(relation.score),
        lucky: affinity(chart.day_master.element.generated_by()),
        relation,
        grade,
    }
}

/// Every day of a month with its pillar, score and grade.
pub fn month_calendar(
    chart: &ChartResult,
    year: i32,
    month: u32,
) -> Result<Vec<CalendarDay>, CycleError> {
    CivilDate::new(year, month, 1)?;
    let days = (1..=days_in_month(year, month))
        .map(|day| {
            let pillar = day_pillar(&CivilDate { year, month, day });
            let score = relation_score(&chart.pillars, pillar).score;
            trace!(year, month, day, score, "scored day");
            CalendarDay {
                day,
                pillar,
                score,
                grade: FortuneGrade::from_score(score),
            }
        })
        .collect();
    Ok(days)
}

/// Fortune of a calendar month: the month pillar covering the 15th plus the
/// first lucky and caution days.
pub fn monthly_fortune(
    chart: &ChartResult,
    year: i32,
    month: u32,
    config: &FortuneConfig,
) -> Result<MonthlyFortune, CycleError> {
    let mid = CivilDate::new(year, month, 15)?;
    let pillar = month_pillar(&mid);
    let relation = relation_score(&chart.pillars, pillar);

    let calendar = month_calendar(chart, year, month)?;
    let lucky_days = calendar
        .iter()
        .filter(|d| d.score >= config.lucky_threshold)
        .map(|d| d.day)
        .take(config.max_lucky_days)
        .collect();
    let caution_days = calendar
        .iter()
        .filter(|d| d.score <= config.caution_threshold)
        .map(|d| d.day)
        .take(config.max_caution_days)
        .collect();

    Ok(MonthlyFortune {
        year,
        month,
        pillar,
        grade: FortuneGrade::from_score(relation.score),
        relation,
        lucky_days,
        caution_days,
    })
}
