//! Turning a caller-supplied instant or date string into the calendar day the
//! engine computes on.
//!
//! Nothing in this crate reads the system clock. A caller takes one reading
//! (typically `Utc::now()`) per request and passes it here, so every
//! sub-computation of that request sees the same day even across midnight.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{LiturgyError, Result};

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns [`LiturgyError::InvalidDate`] if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| LiturgyError::InvalidDate(format!("'{}': {}", s, e)))
}

/// Parse an IANA timezone name.
///
/// # Errors
///
/// Returns [`LiturgyError::InvalidTimezone`] for names chrono-tz does not know.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| LiturgyError::InvalidTimezone(format!("'{}'", s)))
}

/// The local calendar date of instant `now` in `timezone`.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use liturgy_engine::clock::today_in;
///
/// // 22:30 UTC on Dec 24 is already Christmas Day in Nairobi (UTC+3).
/// let now = Utc.with_ymd_and_hms(2024, 12, 24, 22, 30, 0).unwrap();
/// let today = today_in(now, "Africa/Nairobi").unwrap();
/// assert_eq!(today, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
/// ```
pub fn today_in(now: DateTime<Utc>, timezone: &str) -> Result<NaiveDate> {
    let tz = parse_timezone(timezone)?;
    Ok(now.with_timezone(&tz).date_naive())
}

/// The explicit date if one is given, otherwise the local date of `now`.
///
/// `timezone` is validated either way, so a bad zone is reported even when
/// the date is given explicitly.
pub fn resolve_today(
    explicit: Option<&str>,
    now: DateTime<Utc>,
    timezone: &str,
) -> Result<NaiveDate> {
    let tz = parse_timezone(timezone)?;
    match explicit {
        Some(s) => parse_date(s),
        None => Ok(now.with_timezone(&tz).date_naive()),
    }
}
