//! Liturgical seasons and the season resolver.
//!
//! A civil year is partitioned into consecutive season spans anchored on three
//! dates: Easter (moveable), Christmas (fixed) and the First Sunday of Advent
//! (derived from Christmas). [`resolve_season`] walks the spans in calendar
//! order and returns the first one containing the given day.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::days::{days_between, fixed, shift};
use crate::easter::compute_easter;

// ── Reference data ──────────────────────────────────────────────────────────

/// Liturgical color of a season or holy day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiturgicalColor {
    Purple,
    White,
    Green,
    Red,
}

impl LiturgicalColor {
    pub fn as_str(self) -> &'static str {
        match self {
            LiturgicalColor::Purple => "purple",
            LiturgicalColor::White => "white",
            LiturgicalColor::Green => "green",
            LiturgicalColor::Red => "red",
        }
    }
}

impl std::fmt::Display for LiturgicalColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of liturgical seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Advent,
    Christmas,
    /// Epiphany and the Ordinary Time that follows it until Ash Wednesday.
    Epiphany,
    Lent,
    HolyWeek,
    Easter,
    /// Ordinary Time after Pentecost, until Advent.
    OrdinaryTime,
}

impl Season {
    pub fn name(self) -> &'static str {
        match self {
            Season::Advent => "Advent",
            Season::Christmas => "Christmas",
            Season::Epiphany => "Epiphany",
            Season::Lent => "Lent",
            Season::HolyWeek => "Holy Week",
            Season::Easter => "Easter",
            Season::OrdinaryTime => "Ordinary Time",
        }
    }

    pub fn color(self) -> LiturgicalColor {
        match self {
            Season::Advent | Season::Lent => LiturgicalColor::Purple,
            Season::Christmas | Season::Easter => LiturgicalColor::White,
            Season::Epiphany | Season::OrdinaryTime => LiturgicalColor::Green,
            Season::HolyWeek => LiturgicalColor::Red,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Season::Advent => {
                "A season of expectant waiting and preparation for the coming of Christ."
            }
            Season::Christmas => "The celebration of the birth of Jesus Christ, the Word made flesh.",
            Season::Epiphany => {
                "The manifestation of Christ to the nations, and the growth of the Church in the world."
            }
            Season::Lent => "Forty days of prayer, fasting and self-examination before Easter.",
            Season::HolyWeek => {
                "The final week of Lent, following Christ from His entry into Jerusalem to the cross."
            }
            Season::Easter => "Fifty days of rejoicing in the resurrection, ending at Pentecost.",
            Season::OrdinaryTime => {
                "The season after Pentecost, devoted to growth in discipleship and the life of the Spirit."
            }
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ── Anchors ─────────────────────────────────────────────────────────────────

/// The First Sunday of Advent in `year`: the fourth Sunday before Christmas.
///
/// With Christmas on weekday `w` (0 = Sunday .. 6 = Saturday), Advent 1 is
/// Christmas − 28 days when `w = 0`, otherwise Christmas − (`w` + 21) days.
pub fn advent_sunday(year: i32) -> NaiveDate {
    let christmas = fixed(year, 12, 25);
    let weekday = i64::from(christmas.weekday().num_days_from_sunday());
    if weekday == 0 {
        shift(christmas, -28)
    } else {
        shift(christmas, -(weekday + 21))
    }
}

/// Every anchor date needed to partition one civil year into seasons.
///
/// Years outside chrono's range do not panic; their unrepresentable anchors
/// collapse to `NaiveDate::MIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonAnchors {
    pub year: i32,
    /// Christmas Day of the previous year.
    pub previous_christmas: NaiveDate,
    pub epiphany: NaiveDate,
    /// Easter − 46 days.
    pub ash_wednesday: NaiveDate,
    /// Easter − 7 days.
    pub palm_sunday: NaiveDate,
    /// Easter − 2 days.
    pub good_friday: NaiveDate,
    pub easter: NaiveDate,
    /// Easter + 39 days.
    pub ascension: NaiveDate,
    /// Easter + 49 days.
    pub pentecost: NaiveDate,
    /// Easter + 56 days.
    pub trinity_sunday: NaiveDate,
    pub advent_sunday: NaiveDate,
    pub christmas: NaiveDate,
    /// Epiphany of the following year.
    pub next_epiphany: NaiveDate,
}

impl SeasonAnchors {
    pub fn for_year(year: i32) -> Self {
        let easter = compute_easter(year);
        SeasonAnchors {
            year,
            previous_christmas: fixed(year.saturating_sub(1), 12, 25),
            epiphany: fixed(year, 1, 6),
            ash_wednesday: shift(easter, -46),
            palm_sunday: shift(easter, -7),
            good_friday: shift(easter, -2),
            easter,
            ascension: shift(easter, 39),
            pentecost: shift(easter, 49),
            trinity_sunday: shift(easter, 56),
            advent_sunday: advent_sunday(year),
            christmas: fixed(year, 12, 25),
            next_epiphany: fixed(year.saturating_add(1), 1, 6),
        }
    }

    /// The season spans touching this civil year, in precedence order.
    ///
    /// The first span starts on the previous Christmas and the last one runs
    /// into the following January; consecutive spans share no day and leave
    /// no gap.
    pub fn spans(&self) -> [SeasonSpan; 8] {
        [
            SeasonSpan::half_open(Season::Christmas, self.previous_christmas, self.epiphany),
            SeasonSpan::half_open(Season::Epiphany, self.epiphany, self.ash_wednesday),
            SeasonSpan::half_open(Season::Lent, self.ash_wednesday, self.palm_sunday),
            SeasonSpan::half_open(Season::HolyWeek, self.palm_sunday, self.easter),
            SeasonSpan::half_open(Season::Easter, self.easter, self.pentecost),
            SeasonSpan::half_open(Season::OrdinaryTime, self.pentecost, self.advent_sunday),
            SeasonSpan::half_open(Season::Advent, self.advent_sunday, self.christmas),
            SeasonSpan::half_open(Season::Christmas, self.christmas, self.next_epiphany),
        ]
    }
}

// ── Spans and windows ───────────────────────────────────────────────────────

/// A season and the inclusive range of days it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonSpan {
    pub season: Season,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SeasonSpan {
    /// Build a span from a `[from, until)` interval.
    fn half_open(season: Season, from: NaiveDate, until: NaiveDate) -> Self {
        SeasonSpan {
            season,
            start: from,
            end: shift(until, -1),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the span, counting both ends.
    pub fn total_days(&self) -> i64 {
        days_between(self.start, self.end) + 1
    }
}

/// The season window covering a particular day, with display metadata and
/// progress counters relative to that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonWindow {
    pub season: Season,
    pub name: &'static str,
    pub color: LiturgicalColor,
    pub description: &'static str,
    /// First day of the season (inclusive).
    pub start: NaiveDate,
    /// Last day of the season (inclusive).
    pub end: NaiveDate,
    /// Days from `start` to the resolved day.
    pub days_elapsed: i64,
    /// Days from the resolved day to `end`.
    pub days_remaining: i64,
    pub total_days: i64,
}

impl SeasonWindow {
    fn new(span: SeasonSpan, today: NaiveDate) -> Self {
        SeasonWindow {
            season: span.season,
            name: span.season.name(),
            color: span.season.color(),
            description: span.season.description(),
            start: span.start,
            end: span.end,
            days_elapsed: days_between(span.start, today),
            days_remaining: days_between(today, span.end),
            total_days: span.total_days(),
        }
    }

    pub fn span(&self) -> SeasonSpan {
        SeasonSpan {
            season: self.season,
            start: self.start,
            end: self.end,
        }
    }

    /// How far through the season the resolved day is, as `elapsed / total × 100`.
    pub fn progress_percent(&self) -> u8 {
        if self.total_days <= 0 {
            return 0;
        }
        (self.days_elapsed.clamp(0, self.total_days) * 100 / self.total_days) as u8
    }
}

/// Resolve the liturgical season window containing `today`.
///
/// Never fails: if no span matches (which the anchor arithmetic rules out for
/// every representable date) the day is reported as a one-day Ordinary Time
/// window.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use liturgy_engine::season::{resolve_season, Season};
///
/// let window = resolve_season(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
/// assert_eq!(window.season, Season::Christmas);
/// assert_eq!(window.end, NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
/// ```
pub fn resolve_season(today: NaiveDate) -> SeasonWindow {
    let anchors = SeasonAnchors::for_year(today.year());

    let span = match anchors.spans().into_iter().find(|span| span.contains(today)) {
        Some(span) => span,
        None => {
            warn!(%today, "no season span matched; falling back to Ordinary Time");
            SeasonSpan {
                season: Season::OrdinaryTime,
                start: today,
                end: today,
            }
        }
    };

    debug!(%today, season = %span.season, start = %span.start, end = %span.end, "resolved season");
    SeasonWindow::new(span, today)
}

/// The season spans intersecting civil `year`, in calendar order.
///
/// The first span begins on Christmas of the previous year and the last ends
/// on January 5 of the next year.
pub fn season_spans(year: i32) -> Vec<SeasonSpan> {
    SeasonAnchors::for_year(year).spans().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── Anchors ─────────────────────────────────────────────────────────

    #[test]
    fn test_advent_when_christmas_is_sunday() {
        // Christmas 2022 fell on a Sunday.
        assert_eq!(date(2022, 12, 25).weekday(), Weekday::Sun);
        assert_eq!(advent_sunday(2022), date(2022, 11, 27));
        assert_eq!(days_between(advent_sunday(2022), date(2022, 12, 25)), 28);
    }

    #[test]
    fn test_advent_when_christmas_is_wednesday() {
        assert_eq!(date(2024, 12, 25).weekday(), Weekday::Wed);
        assert_eq!(advent_sunday(2024), date(2024, 12, 1));
        assert_eq!(days_between(advent_sunday(2024), date(2024, 12, 25)), 24);
    }

    #[test]
    fn test_advent_is_always_sunday() {
        for year in 1900..=2100 {
            let advent = advent_sunday(year);
            assert_eq!(advent.weekday(), Weekday::Sun, "Advent {year}");
            assert!(advent >= date(year, 11, 27) && advent <= date(year, 12, 3));
        }
    }

    #[test]
    fn test_anchors_at_extreme_years_do_not_panic() {
        let a = SeasonAnchors::for_year(i32::MAX);
        assert_eq!(a.year, i32::MAX);
        let a = SeasonAnchors::for_year(i32::MIN);
        assert_eq!(a.year, i32::MIN);
        let spans = season_spans(crate::easter::MAX_YEAR);
        assert_eq!(spans[7].end, date(crate::easter::MAX_YEAR + 1, 1, 5));
    }

    #[test]
    fn test_resolve_last_representable_day() {
        let w = resolve_season(NaiveDate::MAX);
        assert!(w.start <= NaiveDate::MAX);
    }

    #[test]
    fn test_anchors_2024() {
        let a = SeasonAnchors::for_year(2024);
        assert_eq!(a.previous_christmas, date(2023, 12, 25));
        assert_eq!(a.ash_wednesday, date(2024, 2, 14));
        assert_eq!(a.palm_sunday, date(2024, 3, 24));
        assert_eq!(a.good_friday, date(2024, 3, 29));
        assert_eq!(a.ascension, date(2024, 5, 9));
        assert_eq!(a.pentecost, date(2024, 5, 19));
        assert_eq!(a.trinity_sunday, date(2024, 5, 26));
        assert_eq!(a.next_epiphany, date(2025, 1, 6));
    }

    // ── resolve_season ──────────────────────────────────────────────────

    #[test]
    fn test_christmas_day_window_crosses_year() {
        let w = resolve_season(date(2024, 12, 25));
        assert_eq!(w.season, Season::Christmas);
        assert_eq!(w.start, date(2024, 12, 25));
        assert_eq!(w.end, date(2025, 1, 5));
        assert_eq!(w.days_elapsed, 0);
        assert_eq!(w.days_remaining, 11);
        assert_eq!(w.total_days, 12);
    }

    #[test]
    fn test_early_january_uses_previous_christmas() {
        let w = resolve_season(date(2025, 1, 3));
        assert_eq!(w.season, Season::Christmas);
        assert_eq!(w.start, date(2024, 12, 25));
        assert_eq!(w.end, date(2025, 1, 5));
        assert_eq!(w.days_remaining, 2);
    }

    #[test]
    fn test_epiphany_starts_on_january_6() {
        let w = resolve_season(date(2024, 1, 6));
        assert_eq!(w.season, Season::Epiphany);
        assert_eq!(w.start, date(2024, 1, 6));
        assert_eq!(w.end, date(2024, 2, 13));
    }

    #[test]
    fn test_lent_2024() {
        let w = resolve_season(date(2024, 2, 14));
        assert_eq!(w.season, Season::Lent);
        assert_eq!(w.color, LiturgicalColor::Purple);
        assert_eq!(w.start, date(2024, 2, 14));
        assert_eq!(w.end, date(2024, 3, 23));
    }

    #[test]
    fn test_holy_week_2024() {
        let w = resolve_season(date(2024, 3, 29));
        assert_eq!(w.season, Season::HolyWeek);
        assert_eq!(w.start, date(2024, 3, 24));
        assert_eq!(w.end, date(2024, 3, 30));
        assert_eq!(w.name, "Holy Week");
    }

    #[test]
    fn test_easter_season_2025() {
        let w = resolve_season(date(2025, 4, 20));
        assert_eq!(w.season, Season::Easter);
        assert_eq!(w.start, date(2025, 4, 20));
        assert_eq!(w.end, date(2025, 6, 7));
        assert_eq!(w.total_days, 49);
    }

    #[test]
    fn test_ordinary_time_after_pentecost() {
        let w = resolve_season(date(2024, 8, 15));
        assert_eq!(w.season, Season::OrdinaryTime);
        assert_eq!(w.start, date(2024, 5, 19));
        assert_eq!(w.end, date(2024, 11, 30));
        assert_eq!(w.color, LiturgicalColor::Green);
    }

    #[test]
    fn test_advent_2024() {
        let w = resolve_season(date(2024, 12, 24));
        assert_eq!(w.season, Season::Advent);
        assert_eq!(w.start, date(2024, 12, 1));
        assert_eq!(w.end, date(2024, 12, 24));
        assert_eq!(w.days_remaining, 0);
    }

    #[test]
    fn test_leap_day_resolves() {
        let w = resolve_season(date(2024, 2, 29));
        assert_eq!(w.season, Season::Lent);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let d = date(2026, 10, 19);
        assert_eq!(resolve_season(d), resolve_season(d));
    }

    #[test]
    fn test_progress_percent() {
        let w = resolve_season(date(2024, 12, 25));
        assert_eq!(w.progress_percent(), 0);
        let w = resolve_season(date(2024, 12, 31));
        // 6 of 12 days elapsed
        assert_eq!(w.progress_percent(), 50);
        let w = resolve_season(date(2025, 1, 5));
        assert_eq!(w.progress_percent(), 91);
    }

    #[test]
    fn test_season_partition_is_contiguous() {
        for year in [2019, 2022, 2024, 2025, 2038] {
            let mut day = date(year, 1, 1);
            let mut current = resolve_season(day).span();
            while day.year() == year {
                let span = resolve_season(day).span();
                assert!(span.contains(day), "{day} outside {span:?}");
                if span != current {
                    assert_eq!(span.start, shift(current.end, 1), "gap or overlap at {day}");
                    current = span;
                }
                day = shift(day, 1);
            }
        }
    }

    #[test]
    fn test_season_spans_agree_with_resolver() {
        let spans = season_spans(2025);
        assert_eq!(spans.len(), 8);
        assert_eq!(spans[0].start, date(2024, 12, 25));
        assert_eq!(spans[7].end, date(2026, 1, 5));
        for pair in spans.windows(2) {
            assert_eq!(pair[1].start, shift(pair[0].end, 1));
        }
        for span in &spans {
            if span.start.year() == 2025 {
                assert_eq!(resolve_season(span.start).span(), *span);
            }
        }
    }

    #[test]
    fn test_season_serializes_snake_case() {
        let json = serde_json::to_string(&Season::HolyWeek).unwrap();
        assert_eq!(json, "\"holy_week\"");
        let json = serde_json::to_string(&LiturgicalColor::Purple).unwrap();
        assert_eq!(json, "\"purple\"");
    }
}
