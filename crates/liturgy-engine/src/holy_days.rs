//! Named holy days and the upcoming-observances enumerator.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::season::{LiturgicalColor, SeasonAnchors};

/// How many upcoming holy days a display shows when the caller does not say.
pub const DEFAULT_UPCOMING_LIMIT: usize = 6;

/// A named single-day observance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolyDay {
    pub name: &'static str,
    pub date: NaiveDate,
    /// Color hint for rendering the observance.
    pub color: LiturgicalColor,
}

impl HolyDay {
    fn new(name: &'static str, date: NaiveDate, color: LiturgicalColor) -> Self {
        HolyDay { name, date, color }
    }
}

/// The named holy days of civil `year`, in date order.
///
/// Fixed feasts (Epiphany, Christmas Day) are placed directly; the moveable
/// feasts hang off that year's Easter.
pub fn holy_days_for_year(year: i32) -> Vec<HolyDay> {
    let a = SeasonAnchors::for_year(year);
    vec![
        HolyDay::new("Epiphany", a.epiphany, LiturgicalColor::White),
        HolyDay::new("Ash Wednesday", a.ash_wednesday, LiturgicalColor::Purple),
        HolyDay::new("Palm Sunday", a.palm_sunday, LiturgicalColor::Red),
        HolyDay::new("Good Friday", a.good_friday, LiturgicalColor::Red),
        HolyDay::new("Easter Sunday", a.easter, LiturgicalColor::White),
        HolyDay::new("Ascension Day", a.ascension, LiturgicalColor::White),
        HolyDay::new("Pentecost", a.pentecost, LiturgicalColor::Red),
        HolyDay::new("Trinity Sunday", a.trinity_sunday, LiturgicalColor::White),
        HolyDay::new("Christmas Day", a.christmas, LiturgicalColor::White),
    ]
}

/// The next `limit` holy days strictly after `today`, soonest first.
///
/// Candidates come from the current and the following civil year, so the list
/// keeps going across the year boundary.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use liturgy_engine::holy_days::upcoming_holy_days;
///
/// let next = upcoming_holy_days(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 1);
/// assert_eq!(next[0].name, "Epiphany");
/// ```
pub fn upcoming_holy_days(today: NaiveDate, limit: usize) -> Vec<HolyDay> {
    let year = today.year();
    let mut days: Vec<HolyDay> = holy_days_for_year(year)
        .into_iter()
        .chain(holy_days_for_year(year.saturating_add(1)))
        .filter(|day| day.date > today)
        .collect();
    days.sort_by_key(|day| day.date);
    days.truncate(limit);
    days
}
