use chrono::{Datelike, Utc};
use saju_base::{ChartConfig, ChartResult, HourCandidate, Pillar, compute_chart};
use saju_cycles::{
    CalendarDay, CompatibilityResult, DailyFortune, ElementBalance, FortuneConfig, Gender,
    LuckCycleConfig, LuckCycles, LuckOverview, MonthlyFortune, StarReport,
};
use tracing::{debug, instrument};

use crate::error::SajuRsError;
use crate::parse::{parse_date, parse_time};

/// Compute a chart from `YYYY-MM-DD` and optional `HH:MM` text with the
/// default configuration.
pub fn chart(date: &str, time: Option<&str>) -> Result<ChartResult, SajuRsError> {
    chart_with_config(date, time, &ChartConfig::default())
}

/// Compute a chart with an explicit configuration, stamped with the
/// current UTC time.
#[instrument(level = "debug", skip(config), fields(late_zi = ?config.late_zi))]
pub fn chart_with_config(
    date: &str,
    time: Option<&str>,
    config: &ChartConfig,
) -> Result<ChartResult, SajuRsError> {
    let date = parse_date(date)?;
    let time = time.map(parse_time).transpose()?;
    let chart = compute_chart(date, time, config, Utc::now());
    debug!(
        year = %chart.pillars.year,
        month = %chart.pillars.month,
        day = %chart.pillars.day,
        hour = ?chart.pillars.hour.map(|p| p.hanzi()),
        effective = %chart.effective_date,
        "computed chart"
    );
    Ok(chart)
}

/// Day pillar of a `YYYY-MM-DD` date.
pub fn day_pillar(date: &str) -> Result<Pillar, SajuRsError> {
    Ok(saju_base::day_pillar(&parse_date(date)?))
}

/// The twelve possible hour pillars for a date whose birth time is unknown.
pub fn hour_candidates(date: &str) -> Result<[HourCandidate; 12], SajuRsError> {
    let day = day_pillar(date)?;
    Ok(saju_base::hour_candidates(day.stem()))
}

/// Decade luck pillars.
pub fn luck_cycles(
    chart: &ChartResult,
    gender: Gender,
    config: &LuckCycleConfig,
) -> Result<LuckCycles, SajuRsError> {
    Ok(saju_cycles::luck_cycles(chart, gender, config)?)
}

/// Decade and annual pillars around a reference year (the current UTC year
/// when `None`).
#[instrument(level = "debug", skip(chart, config))]
pub fn luck_overview(
    chart: &ChartResult,
    gender: Gender,
    config: &LuckCycleConfig,
    reference_year: Option<i32>,
) -> Result<LuckOverview, SajuRsError> {
    let year = reference_year.unwrap_or_else(|| Utc::now().year());
    Ok(saju_cycles::luck_overview(chart, gender, config, year)?)
}

/// Fortune of a `YYYY-MM-DD` date for a chart.
pub fn daily_fortune(chart: &ChartResult, date: &str) -> Result<DailyFortune, SajuRsError> {
    let date = parse_date(date)?;
    let fortune = saju_cycles::daily_fortune(chart, date);
    debug!(%date, pillar = %fortune.pillar, score = fortune.relation.score, "daily fortune");
    Ok(fortune)
}

/// Fortune of a calendar month for a chart.
pub fn monthly_fortune(
    chart: &ChartResult,
    year: i32,
    month: u32,
    config: &FortuneConfig,
) -> Result<MonthlyFortune, SajuRsError> {
    let fortune = saju_cycles::monthly_fortune(chart, year, month, config)?;
    debug!(
        year,
        month,
        pillar = %fortune.pillar,
        score = fortune.relation.score,
        lucky = fortune.lucky_days.len(),
        caution = fortune.caution_days.len(),
        "monthly fortune"
    );
    Ok(fortune)
}

/// Per-day scores for a calendar month.
pub fn month_calendar(
    chart: &ChartResult,
    year: i32,
    month: u32,
) -> Result<Vec<CalendarDay>, SajuRsError> {
    Ok(saju_cycles::month_calendar(chart, year, month)?)
}

/// Compatibility of two charts.
pub fn compatibility(first: &ChartResult, second: &ChartResult) -> CompatibilityResult {
    let result = saju_cycles::compatibility(first, second);
    debug!(total = result.total, grade = ?result.grade, "compatibility");
    result
}

/// Stars present in a chart.
pub fn stars(chart: &ChartResult) -> StarReport {
    saju_cycles::find_stars(&chart.pillars)
}

/// Day-master strength and favorable element.
pub fn balance(chart: &ChartResult) -> ElementBalance {
    saju_cycles::element_balance(chart)
}
