//! Golden tests for pillar derivation against published calendar values.

use saju_base::{
    Branch, ChartConfig, CivilDate, LateZiPolicy, LocalTime, Position, Stem, compute_chart, day_pillar,
    four_pillars, month_pillar, year_pillar,
};

fn d(y: i32, m: u32, day: u32) -> CivilDate {
    CivilDate::new(y, m, day).unwrap()
}

#[test]
fn spring_boundary_discontinuity() {
    let before = year_pillar(&d(2000, 2, 3));
    let after = year_pillar(&d(2000, 2, 5));
    assert_ne!(before, after);
    assert_eq!(after, year_pillar(&d(2000, 2, 6)));
    assert_eq!(before.offset(1), after);
}

#[test]
fn day_pillar_2024_jan_and_mar_identical() {
    // 60 days apart
    assert_eq!(day_pillar(&d(2024, 1, 1)), day_pillar(&d(2024, 3, 1)));
    assert_eq!(day_pillar(&d(2024, 1, 1)).hanzi(), "甲子");
}

#[test]
fn scenario_1990_05_15_without_time() {
    let fp = four_pillars(&d(1990, 5, 15), None, &ChartConfig::default());
    assert!(fp.hour.is_none());
    assert_eq!(fp.day.stem(), Stem::Geng);
    assert_eq!(fp.day.branch(), Branch::Chen);
}

#[test]
fn scenario_1990_05_15_with_time() {
    let fp = four_pillars(
        &d(1990, 5, 15),
        Some(LocalTime::new(14, 30).unwrap()),
        &ChartConfig::default(),
    );
    let hour = fp.hour.unwrap();
    assert_eq!(hour.branch().index(), 7);
    assert_eq!(hour.branch(), Branch::Wei);
}

fn at(date: CivilDate, hour: u32, minute: u32, late_zi: LateZiPolicy) -> saju_base::FourPillars {
    four_pillars(
        &date,
        Some(LocalTime::new(hour, minute).unwrap()),
        &ChartConfig { late_zi },
    )
}

#[test]
fn zi_hour_edges() {
    // 2024-03-01 is a 甲子 day, 2024-03-02 乙丑
    let day = d(2024, 3, 1);

    let eleven = at(day, 23, 0, LateZiPolicy::NextDay);
    let midnight = at(d(2024, 3, 2), 0, 0, LateZiPolicy::NextDay);
    assert_eq!(eleven.day, midnight.day);
    assert_eq!(eleven.hour, midnight.hour);
    assert_eq!(eleven.day.hanzi(), "乙丑");
    assert_eq!(eleven.hour.map(|h| h.hanzi()).as_deref(), Some("丙子"));

    let before = at(day, 22, 59, LateZiPolicy::NextDay);
    assert_eq!(before.day.hanzi(), "甲子");
    assert_eq!(before.hour.map(|h| h.branch()), Some(Branch::Hai));
    assert_eq!(before.hour.map(|h| h.hanzi()).as_deref(), Some("乙亥"));

    let same = at(day, 23, 0, LateZiPolicy::SameDay);
    assert_eq!(same.day, day_pillar(&day));
    assert_eq!(same.hour.map(|h| h.hanzi()).as_deref(), Some("甲子"));
}

#[test]
fn published_day_pillars() {
    let cases = [
        ((1949, 10, 1), "甲子"),
        ((2000, 1, 1), "戊午"),
        ((1900, 1, 1), "甲戌"),
        ((2026, 2, 7), "壬子"),
        ((1984, 2, 2), "丙寅"),
    ];
    for ((y, m, day), expected) in cases {
        assert_eq!(day_pillar(&d(y, m, day)).hanzi(), expected, "{y}-{m}-{day}");
    }
}

#[test]
fn published_year_and_month_pillars() {
    assert_eq!(year_pillar(&d(1984, 3, 1)).hanzi(), "甲子");
    assert_eq!(year_pillar(&d(2026, 6, 1)).hanzi(), "丙午");
    // 丙 year: Tiger month opens on 庚寅
    assert_eq!(month_pillar(&d(2026, 2, 20)).hanzi(), "庚寅");
    // 2026-01-20: still 乙巳 year, Xiaohan month → 己丑
    assert_eq!(month_pillar(&d(2026, 1, 20)).hanzi(), "己丑");
}

#[test]
fn every_pillar_is_valid_for_a_year_of_days() {
    let mut date = d(2023, 1, 1);
    for _ in 0..365 {
        for hour in [0, 5, 11, 17, 23] {
            let fp = four_pillars(
                &date,
                Some(LocalTime::new(hour, 0).unwrap()),
                &ChartConfig::default(),
            );
            for (_, p) in fp.iter() {
                assert_eq!(p.stem().index() % 2, p.branch().index() % 2);
            }
        }
        date = date.add_days(1);
    }
}

#[test]
fn chart_ten_gods_skip_day_position() {
    let r = compute_chart(
        d(1990, 5, 15),
        None,
        &ChartConfig::default(),
        chrono::DateTime::<chrono::Utc>::UNIX_EPOCH,
    );
    assert!(r.ten_gods.get(Position::Day).is_none());
    assert!(r.ten_gods.get(Position::Hour).is_none());
    assert!(r.ten_gods.get(Position::Year).is_some());
}
