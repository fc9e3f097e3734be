//! A single-day snapshot of the liturgical calendar for display.

use chrono::NaiveDate;
use serde::Serialize;

use crate::collect::{resolve_collect, Collect};
use crate::holy_days::{upcoming_holy_days, HolyDay};
use crate::season::{resolve_season, SeasonWindow};

/// Everything a display needs about one calendar day, computed from that one
/// day so the parts cannot disagree.
#[derive(Debug, Clone, Serialize)]
pub struct LiturgicalDay {
    pub date: NaiveDate,
    pub season: SeasonWindow,
    /// `days_elapsed / total_days × 100` for the season progress bar.
    pub progress_percent: u8,
    pub collect: Collect,
    pub collect_title: String,
    pub upcoming: Vec<HolyDay>,
}

impl LiturgicalDay {
    pub fn for_date(date: NaiveDate, upcoming_limit: usize) -> Self {
        let season = resolve_season(date);
        let collect = resolve_collect(date);
        LiturgicalDay {
            date,
            progress_percent: season.progress_percent(),
            season,
            collect,
            collect_title: collect.title(),
            upcoming: upcoming_holy_days(date, upcoming_limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::Season;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_snapshot_good_friday() {
        let day = LiturgicalDay::for_date(date(2024, 3, 29), 2);
        assert_eq!(day.season.season, Season::HolyWeek);
        assert_eq!(day.collect, Collect::GoodFriday);
        assert_eq!(day.collect_title, "Good Friday");
        assert_eq!(day.upcoming.len(), 2);
        assert_eq!(day.upcoming[0].name, "Easter Sunday");
        assert_eq!(day.progress_percent, 71);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let day = LiturgicalDay::for_date(date(2024, 12, 25), 1);
        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["date"], "2024-12-25");
        assert_eq!(json["season"]["season"], "christmas");
        assert_eq!(json["season"]["color"], "white");
        assert_eq!(json["season"]["end"], "2025-01-05");
        assert_eq!(json["collect"], "collect-christmas-day");
        assert_eq!(json["upcoming"][0]["name"], "Epiphany");
        assert_eq!(json["upcoming"][0]["date"], "2025-01-06");
    }

    #[test]
    fn test_snapshot_is_deterministic() {
        let a = serde_json::to_string(&LiturgicalDay::for_date(date(2026, 10, 19), 6)).unwrap();
        let b = serde_json::to_string(&LiturgicalDay::for_date(date(2026, 10, 19), 6)).unwrap();
        assert_eq!(a, b);
    }
}
