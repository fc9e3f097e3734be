//! Gregorian Easter computation.

use chrono::NaiveDate;

use crate::error::{LiturgyError, Result};

/// First year of the Gregorian calendar the computus is meaningful for.
pub const MIN_YEAR: i32 = 1583;

/// Last year whose season spans (which reach into January of the next
/// year) are representable as [`NaiveDate`]s.
pub const MAX_YEAR: i32 = 262_141;

/// Check that `year` lies in `MIN_YEAR..=MAX_YEAR`.
///
/// # Errors
///
/// Returns [`LiturgyError::YearOutOfRange`] otherwise.
pub fn check_year(year: i32) -> Result<i32> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(LiturgyError::YearOutOfRange(year))
    }
}

/// Compute the date of Easter Sunday for a Gregorian `year`.
///
/// Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher), a closed-form
/// integer computation. The result always falls between March 22 and April 25.
/// Years before 1583 are computed proleptically and carry no historical meaning.
/// Outside the range chrono can represent the result is `NaiveDate::MIN`;
/// callers taking years from users should validate them with [`check_year`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use liturgy_engine::easter::compute_easter;
///
/// assert_eq!(compute_easter(2024), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
/// assert_eq!(compute_easter(2025), NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
/// ```
pub fn compute_easter(year: i32) -> NaiveDate {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    // month is 3 or 4 and day is 1..=31 for every year chrono can represent.
    NaiveDate::from_ymd_opt(year, month as u32, day as u32).unwrap_or(NaiveDate::MIN)
}
