use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;

use liturgy_engine::{
    compute_easter, holy_days_for_year, resolve_collect, resolve_season, upcoming_holy_days,
    Collect, LiturgicalDay,
};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1600-01-01 ..= 2399-12-31 as days from the common era
    (584_023i32..=876_216).prop_map(|n| NaiveDate::from_num_days_from_ce_opt(n).unwrap())
}

proptest! {
    #[test]
    fn easter_is_a_sunday_in_march_or_april(year in 1583i32..=4099) {
        let easter = compute_easter(year);
        prop_assert_eq!(easter.year(), year);
        prop_assert_eq!(easter.weekday(), Weekday::Sun);
        prop_assert!(easter.month() == 3 || easter.month() == 4);
    }

    #[test]
    fn season_window_contains_its_day(d in any_date()) {
        let w = resolve_season(d);
        prop_assert!(w.start <= d && d <= w.end);
        prop_assert_eq!(w.days_elapsed + w.days_remaining + 1, w.total_days);
        prop_assert!(w.progress_percent() < 100);
    }

    #[test]
    fn adjacent_days_share_or_abut_windows(d in any_date()) {
        let today = resolve_season(d);
        let tomorrow = resolve_season(d.succ_opt().unwrap());
        if today.span() != tomorrow.span() {
            prop_assert_eq!(today.end, d);
            prop_assert_eq!(tomorrow.start, d.succ_opt().unwrap());
        }
    }

    #[test]
    fn resolvers_are_pure(d in any_date()) {
        prop_assert_eq!(resolve_season(d), resolve_season(d));
        prop_assert_eq!(resolve_collect(d), resolve_collect(d));
    }

    #[test]
    fn collect_is_always_in_closed_set(d in any_date()) {
        let collect = resolve_collect(d);
        prop_assert!(Collect::all().contains(&collect));
        prop_assert_eq!(collect.slug().parse::<Collect>().unwrap(), collect);
    }

    #[test]
    fn upcoming_is_sorted_future_and_limited(d in any_date(), limit in 0usize..=20) {
        let days = upcoming_holy_days(d, limit);
        prop_assert!(days.len() <= limit);
        prop_assert!(days.iter().all(|h| h.date > d));
        prop_assert!(days.windows(2).all(|w| w[0].date <= w[1].date));
        let candidates = holy_days_for_year(d.year())
            .into_iter()
            .chain(holy_days_for_year(d.year() + 1))
            .filter(|h| h.date > d)
            .count();
        // The following civil year alone always contributes nine.
        prop_assert!(candidates >= 9);
        prop_assert_eq!(days.len(), limit.min(candidates));
    }

    #[test]
    fn snapshot_parts_agree(d in any_date()) {
        let day = LiturgicalDay::for_date(d, 3);
        prop_assert_eq!(day.date, d);
        prop_assert_eq!(day.season.clone(), resolve_season(d));
        prop_assert_eq!(day.collect, resolve_collect(d));
    }
}
