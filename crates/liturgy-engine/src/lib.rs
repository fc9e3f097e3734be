//! # liturgy-engine
//!
//! Deterministic Anglican liturgical calendar computation.
//!
//! Given a calendar day, the engine computes the date of Easter, the
//! liturgical season the day falls in (with its bounds and progress), the
//! upcoming named holy days, and the slug of the collect appointed for the
//! day. Every computation is a pure function of the day passed in; the engine
//! never reads the system clock.
//!
//! ## Modules
//!
//! - [`easter`] - Gregorian Easter (computus)
//! - [`days`] - Calendar-day arithmetic helpers
//! - [`season`] - Season reference data, anchors and the season resolver
//! - [`holy_days`] - Named holy days and the upcoming-observances list
//! - [`collect`] - Collect selection and slugs
//! - [`day`] - One-day snapshot combining all of the above
//! - [`clock`] - Date and timezone parsing for the caller's single clock read
//! - [`content`] - Liturgical-text lookup by collect slug
//! - [`error`] - Error types

pub mod clock;
pub mod collect;
pub mod content;
pub mod day;
pub mod days;
pub mod easter;
pub mod error;
pub mod holy_days;
pub mod season;

pub use clock::{parse_date, parse_timezone, resolve_today, today_in};
pub use collect::{resolve_collect, resolve_collect_slug, Collect};
pub use content::{CollectStore, LineRole, LiturgicalLine, LiturgicalText, MemoryCollectStore};
pub use day::LiturgicalDay;
pub use easter::{check_year, compute_easter, MAX_YEAR, MIN_YEAR};
pub use error::{LiturgyError, Result};
pub use holy_days::{holy_days_for_year, upcoming_holy_days, HolyDay, DEFAULT_UPCOMING_LIMIT};
pub use season::{
    advent_sunday, resolve_season, season_spans, LiturgicalColor, Season, SeasonAnchors,
    SeasonSpan, SeasonWindow,
};
