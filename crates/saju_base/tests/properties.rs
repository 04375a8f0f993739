//! Property-based tests for calendar and relation invariants.
//!
//! - Day pillar advances one cycle step per civil day (period 60)
//! - Every derived pillar is a valid stem-branch pair
//! - Tallies cover exactly the present symbols
//! - Branch relation detection is symmetric and ignores identical branches
//! - Literal dates and chrono dates give identical pillars

use chrono::NaiveDate;
use proptest::prelude::*;
use saju_base::*;

/// JDN range 1900-01-01 ..= 2100-12-31.
fn any_date() -> impl Strategy<Value = CivilDate> {
    (2_415_021i64..=2_488_434).prop_map(CivilDate::from_jdn)
}

fn any_time() -> impl Strategy<Value = Option<LocalTime>> {
    prop::option::of((0u32..24, 0u32..60).prop_map(|(h, m)| LocalTime { hour: h, minute: m }))
}

fn any_branch() -> impl Strategy<Value = Branch> {
    (0u8..12).prop_map(|i| ALL_BRANCHES[i as usize])
}

proptest! {
    #[test]
    fn day_pillar_period_sixty(date in any_date()) {
        prop_assert_eq!(day_pillar(&date.add_days(60)), day_pillar(&date));
    }

    #[test]
    fn day_pillar_steps_by_one(date in any_date()) {
        let next = day_pillar(&date.add_days(1)).index();
        prop_assert_eq!(next, (day_pillar(&date).index() + 1) % 60);
    }

    #[test]
    fn pillars_always_valid(date in any_date(), time in any_time()) {
        let fp = four_pillars(&date, time, &ChartConfig::default());
        for (_, p) in fp.iter() {
            prop_assert!(SexagenaryPair::new(p.stem(), p.branch()).is_some());
        }
        prop_assert_eq!(fp.hour.is_some(), time.is_some());
    }

    #[test]
    fn tally_sums_match(date in any_date(), time in any_time()) {
        let fp = four_pillars(&date, time, &ChartConfig::default());
        let expected = if time.is_some() { 8 } else { 6 };
        prop_assert_eq!(element_tally(&fp).total(), expected);
        prop_assert_eq!(polarity_tally(&fp).total(), expected);
    }

    #[test]
    fn year_pillar_constant_after_spring_start(year in 1901i32..2100, offset in 0i64..300) {
        let start = CivilDate::new(year, 2, 4).unwrap();
        let date = start.add_days(offset);
        prop_assume!(date.year == year);
        prop_assert_eq!(year_pillar(&date), year_pillar(&start));
    }

    #[test]
    fn branch_relations_symmetric(a in any_branch(), b in any_branch()) {
        prop_assert_eq!(is_combine(a, b), is_combine(b, a));
        prop_assert_eq!(is_clash(a, b), is_clash(b, a));
        prop_assert_eq!(is_harm(a, b), is_harm(b, a));
        prop_assert_eq!(is_resentment(a, b), is_resentment(b, a));
        if a == b {
            prop_assert!(!is_combine(a, b) && !is_clash(a, b));
        }
    }

    #[test]
    fn detection_never_reports_identical_branches(date in any_date(), time in any_time()) {
        let fp = four_pillars(&date, time, &ChartConfig::default());
        let set = detect_branch_relations(&fp);
        for f in set.combines.iter().chain(&set.clashes).chain(&set.harms).chain(&set.resentments) {
            prop_assert_ne!(f.branches.0, f.branches.1);
            prop_assert!(f.first < f.second);
        }
    }

    #[test]
    fn naive_date_and_literal_agree(date in any_date()) {
        let naive = NaiveDate::from_ymd_opt(date.year, date.month, date.day).unwrap();
        let via_chrono = CivilDate::try_from(naive).unwrap();
        prop_assert_eq!(
            four_pillars(&via_chrono, None, &ChartConfig::default()),
            four_pillars(&date, None, &ChartConfig::default())
        );
    }

    #[test]
    fn ten_gods_identical_stem_same_element(a in 0u8..10, b in 0u8..10) {
        let (sa, sb) = (Stem::from_index(a).unwrap(), Stem::from_index(b).unwrap());
        let g = ten_god(sa, sb);
        if sa.element() == sb.element() {
            prop_assert!(matches!(g, TenGod::Parallel | TenGod::Rival));
        } else {
            prop_assert!(!matches!(g, TenGod::Parallel | TenGod::Rival));
        }
    }
}
