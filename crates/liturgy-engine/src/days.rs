//! Calendar-day arithmetic shared by the season, holy-day and collect resolvers.
//!
//! Every value here is a [`NaiveDate`]: a calendar day with no time of day,
//! so comparisons can never leak an hour offset into a day count.

use chrono::{Duration, NaiveDate};

/// Whole days from `from` to `to` (negative if `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Shift `date` by `days`, saturating at the ends of the representable range.
pub fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// A fixed-date observance (Christmas, Epiphany) in `year`.
pub(crate) fn fixed(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// Week number of `date` counted from `anchor` as `ceil(days / 7)`.
///
/// The anchor day itself is week 0 and the seventh day after it is still
/// week 1; the eighth day starts week 2. Collect slugs are keyed on this
/// rounding, so it must not be changed to `floor(days / 7) + 1`.
pub fn ceil_week(anchor: NaiveDate, date: NaiveDate) -> i64 {
    let days = days_between(anchor, date);
    -((-days).div_euclid(7))
}
