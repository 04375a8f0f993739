//! Integration tests across the derived calculators.

use chrono::{DateTime, Utc};
use saju_base::{ChartConfig, ChartResult, CivilDate, LocalTime, Position, compute_chart};
use saju_cycles::{
    CompatibilityGrade, FortuneConfig, FortuneGrade, Gender, LuckCycleConfig, LuckDirection,
    NEUTRAL_SCORE, Star, Strength, StrengthFactor, compatibility, daily_fortune, element_balance,
    find_stars, luck_cycles, luck_overview, month_calendar, monthly_fortune, relation_score,
};

fn chart(y: i32, m: u32, d: u32, time: Option<(u32, u32)>) -> ChartResult {
    compute_chart(
        CivilDate::new(y, m, d).unwrap(),
        time.map(|(h, mi)| LocalTime::new(h, mi).unwrap()),
        &ChartConfig::default(),
        DateTime::<Utc>::UNIX_EPOCH,
    )
}

#[test]
fn daily_fortune_repeats_every_sixty_days() {
    let c = chart(1985, 9, 20, Some((10, 0)));
    let start = CivilDate::new(2025, 1, 1).unwrap();
    for n in 0..60 {
        let d = start.add_days(n);
        let a = daily_fortune(&c, d);
        let b = daily_fortune(&c, d.add_days(60));
        assert_eq!(a.pillar, b.pillar);
        assert_eq!(a.relation, b.relation);
        assert_eq!(a.relation, relation_score(&c.pillars, a.pillar));
    }
}

#[test]
fn calendar_agrees_with_daily_fortune() {
    let c = chart(1985, 9, 20, Some((10, 0)));
    let cal = month_calendar(&c, 2025, 2).unwrap();
    assert_eq!(cal.len(), 28);
    for cell in &cal {
        let f = daily_fortune(&c, CivilDate::new(2025, 2, cell.day).unwrap());
        assert_eq!(cell.pillar, f.pillar);
        assert_eq!(cell.score, f.relation.score);
        assert_eq!(cell.grade, FortuneGrade::from_score(cell.score));
    }
}

#[test]
fn monthly_day_lists_respect_config() {
    let c = chart(1985, 9, 20, Some((10, 0)));
    let cfg = FortuneConfig {
        lucky_threshold: 60,
        caution_threshold: 60,
        max_lucky_days: 2,
        max_caution_days: 4,
    };
    let m = monthly_fortune(&c, 2025, 2, &cfg).unwrap();
    let cal = month_calendar(&c, 2025, 2).unwrap();
    assert!(m.lucky_days.len() <= 2);
    assert!(m.caution_days.len() <= 4);
    for day in &m.lucky_days {
        assert!(cal[*day as usize - 1].score >= 60);
    }
    for day in &m.caution_days {
        assert!(cal[*day as usize - 1].score <= 60);
    }
    assert!(m.lucky_days.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn luck_pillars_step_along_the_cycle() {
    let c = chart(1985, 9, 20, Some((10, 0)));
    // 乙 is yin: a male runs backward
    let lc = luck_cycles(&c, Gender::Male, &LuckCycleConfig { count: 12 }).unwrap();
    assert_eq!(lc.direction, LuckDirection::Backward);
    assert_eq!(lc.pillars.len(), 12);
    let mut prev = c.pillars.month;
    for p in &lc.pillars {
        assert_eq!(p.pillar, prev.offset(-1));
        assert_eq!(p.end_age, p.start_age + 9);
        assert!((20..=95).contains(&p.score));
        prev = p.pillar;
    }
    for w in lc.pillars.windows(2) {
        assert_eq!(w[1].start_age, w[0].start_age + 10);
    }
}

#[test]
fn overview_current_contains_age() {
    let c = chart(1985, 9, 20, None);
    let o = luck_overview(&c, Gender::Female, &LuckCycleConfig::default(), 2025).unwrap();
    assert_eq!(o.age, 41);
    let current = o.current.unwrap();
    assert!(current.contains_age(41));
    assert_eq!(o.next.map(|p| p.order), Some(current.order + 1));
}

#[test]
fn self_compatibility() {
    let c = chart(1985, 9, 20, None);
    let r = compatibility(&c, &c);
    assert_eq!(r.element_score, 75);
    assert_eq!(r.day_score, 70);
    assert_eq!(r.stem_combination, None);
    assert_eq!(r.grade, CompatibilityGrade::from_score(r.total));
}

#[test]
fn kui_gang_day() {
    // 壬戌 day
    let c = chart(1985, 9, 20, Some((10, 0)));
    let r = find_stars(&c.pillars);
    assert_eq!(r.get(Star::KuiGang).map(|f| f.positions.clone()), Some(vec![Position::Day]));
}

#[test]
fn balance_score_is_sum_of_factors() {
    // 乙丑 乙酉 壬戌 乙巳: 酉 metal month feeds the water master, earth 2
    let c = chart(1985, 9, 20, Some((10, 0)));
    let b = element_balance(&c);
    assert_eq!(b.factors, vec![StrengthFactor::MonthGenerates, StrengthFactor::ModerateAuthority]);
    let sum: i32 = b.factors.iter().map(|f| f.points()).sum();
    assert_eq!(b.score as i32, NEUTRAL_SCORE + sum);
    assert_eq!(b.score, 55);
    assert_eq!(b.strength, Strength::from_score(b.score));
    for e in &b.favorable {
        assert!(!b.unfavorable.contains(e));
    }
}
