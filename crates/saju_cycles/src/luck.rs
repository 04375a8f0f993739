//! Decade luck pillars (대운) and annual pillars (세운).
//!
//! Decade pillars step along the 60-cycle from the month pillar, forwards
//! for a male with a yang year stem or a female with a yin year stem, and
//! backwards otherwise. The first pillar starts at the age given by the
//! distance to the nearest solar-month boundary in the direction of travel,
//! at three days per year.

use saju_base::date::{MAX_YEAR, MIN_YEAR};
use saju_base::pillar::YEAR_CYCLE_EPOCH;
use saju_base::{
    ChartResult, CivilDate, ElementRelation, Pillar, SajuError, SexagenaryPair, Stem, TenGod,
    solar_month, ten_god,
};
use tracing::debug;

use crate::error::CycleError;
use crate::luck_types::{
    AnnualPillar, Gender, LuckCycleConfig, LuckCycles, LuckDirection, LuckOverview, LuckPillar,
    MAX_LUCK_CYCLES, ScoreTrend, YEARS_PER_CYCLE,
};
use crate::util::clamp_score;

/// Longest accepted annual-pillar range, in years.
pub const MAX_ANNUAL_SPAN: i32 = 200;

/// Direction of the decade pillars.
pub const fn luck_direction(gender: Gender, year_stem: Stem) -> LuckDirection {
    let yang = year_stem.polarity().is_yang();
    match (gender, yang) {
        (Gender::Male, true) | (Gender::Female, false) => LuckDirection::Forward,
        _ => LuckDirection::Backward,
    }
}

/// Age at which the first decade pillar begins (1..=10).
///
/// Days to the next solar-month boundary (forward) or since the current one
/// (backward), divided by three and rounded. Fails when that boundary lies
/// outside the accepted year range.
pub fn luck_start_age(birth: &CivilDate, direction: LuckDirection) -> Result<u32, SajuError> {
    let month = solar_month(birth);
    let days = match direction {
        LuckDirection::Forward => birth.days_until(&month.next_start()?),
        LuckDirection::Backward => month.start()?.days_until(birth),
    };
    Ok(((days + 1) / 3).clamp(1, 10) as u32)
}

/// East Asian age: one in the birth year, plus one each new year.
pub const fn east_asian_age(birth_year: i32, year: i32) -> i32 {
    year.saturating_sub(birth_year).saturating_add(1)
}

/// Score a decade or annual pillar against the day master (20..=95).
pub fn luck_score(day_master: Stem, pillar: Pillar) -> u8 {
    let dm = day_master.element();
    let mut score: i32 = 50;

    score += match dm.relation_to(pillar.stem().element()) {
        ElementRelation::Same => 10,
        ElementRelation::GeneratedBy => 20,
        ElementRelation::Generates => 5,
        ElementRelation::ControlledBy => -15,
        ElementRelation::Controls => 15,
    };

    score += match dm.relation_to(pillar.branch().element()) {
        ElementRelation::Same => 8,
        ElementRelation::GeneratedBy => 15,
        ElementRelation::ControlledBy => -10,
        _ => 0,
    };

    score += match ten_god(day_master, pillar.stem()) {
        TenGod::DirectAuthority | TenGod::DirectResource | TenGod::DirectWealth => 10,
        TenGod::IndirectAuthority | TenGod::Rival | TenGod::OutputFree => -5,
        _ => 0,
    };

    clamp_score(score, 20, 95)
}

/// Decade pillars for a chart.
pub fn luck_cycles(
    chart: &ChartResult,
    gender: Gender,
    config: &LuckCycleConfig,
) -> Result<LuckCycles, CycleError> {
    if config.count == 0 || config.count > MAX_LUCK_CYCLES {
        return Err(CycleError::InvalidCycleCount(config.count));
    }

    let day_master = chart.day_master.stem;
    let direction = luck_direction(gender, chart.pillars.year.stem());
    let start_age = luck_start_age(&chart.effective_date, direction)?;
    let birth_year = chart.input.date.year;

    let pillars = (1..=config.count)
        .map(|order| {
            let pillar = chart.pillars.month.offset(direction.step() * order as i64);
            let start = start_age + (order as u32 - 1) * YEARS_PER_CYCLE;
            let score = luck_score(day_master, pillar);
            LuckPillar {
                order,
                pillar,
                start_age: start,
                end_age: start + YEARS_PER_CYCLE - 1,
                start_year: birth_year + start as i32 - 1,
                ten_god: ten_god(day_master, pillar.stem()),
                score,
                trend: ScoreTrend::from_score(score),
            }
        })
        .collect();

    debug!(?direction, start_age, count = config.count, "computed luck cycles");

    Ok(LuckCycles {
        direction,
        start_age,
        pillars,
    })
}

/// Year pillar of a calendar year (from spring start) read against a chart.
pub fn annual_pillar(chart: &ChartResult, year: i32) -> AnnualPillar {
    let day_master = chart.day_master.stem;
    let pillar = SexagenaryPair::from_index(year as i64 - YEAR_CYCLE_EPOCH as i64);
    let score = luck_score(day_master, pillar);
    AnnualPillar {
        year,
        age: east_asian_age(chart.input.date.year, year),
        pillar,
        ten_god: ten_god(day_master, pillar.stem()),
        score,
        trend: ScoreTrend::from_score(score),
    }
}

/// Annual pillars for every year in `start..=end`.
pub fn annual_pillars(
    chart: &ChartResult,
    start: i32,
    end: i32,
) -> Result<Vec<AnnualPillar>, CycleError> {
    if end < start || end as i64 - start as i64 >= MAX_ANNUAL_SPAN as i64 {
        return Err(CycleError::InvalidYearRange { start, end });
    }
    Ok((start..=end).map(|y| annual_pillar(chart, y)).collect())
}

/// Decade pillars plus the current, next and surrounding annual pillars as
/// of `reference_year`, which must lie in the accepted year range.
pub fn luck_overview(
    chart: &ChartResult,
    gender: Gender,
    config: &LuckCycleConfig,
    reference_year: i32,
) -> Result<LuckOverview, CycleError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&reference_year) {
        return Err(CycleError::InvalidYearRange {
            start: reference_year,
            end: reference_year,
        });
    }
    let cycles = luck_cycles(chart, gender, config)?;
    let age = east_asian_age(chart.input.date.year, reference_year);
    let (current, next) = if age >= 1 {
        let age = age as u32;
        (cycles.at_age(age).copied(), cycles.next_after(age).copied())
    } else {
        (None, cycles.pillars.first().copied())
    };
    let annual = annual_pillars(chart, reference_year - 2, reference_year + 5)?;
    Ok(LuckOverview {
        reference_year,
        age,
        cycles,
        current,
        next,
        annual,
    })
}
