//! Collect selection: which liturgical text applies to a given day.
//!
//! [`resolve_collect`] is a finer-grained walk than the season resolver.
//! Single-day observances are matched first; everything else is placed in a
//! weekly bucket counted from the season's anchor with [`ceil_week`], clamped
//! to the collects that exist for that season.
//!
//! The slug strings produced here are the keys of the liturgical content
//! store, so their spelling is part of the public contract.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::days::ceil_week;
use crate::error::LiturgyError;
use crate::season::SeasonAnchors;

const EPIPHANY_WEEKS: u8 = 6;
const LENT_WEEKS: u8 = 5;
const EASTER_WEEKS: u8 = 5;
const TRINITY_WEEKS: u8 = 20;
const ADVENT_WEEKS: u8 = 4;

/// A collect from the closed set the content store is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collect {
    ChristmasDay,
    /// The days of Christmastide other than Christmas Day itself.
    ChristmasSeason,
    Epiphany,
    EpiphanyWeek(u8),
    AshWednesday,
    LentWeek(u8),
    PalmSunday,
    GoodFriday,
    EasterDay,
    EasterWeek(u8),
    AscensionDay,
    Pentecost,
    TrinitySunday,
    TrinityWeek(u8),
    AdventWeek(u8),
}

impl Collect {
    /// The content-store key, e.g. `collect-lent-3`.
    pub fn slug(&self) -> String {
        match self {
            Collect::ChristmasDay => "collect-christmas-day".to_string(),
            Collect::ChristmasSeason => "collect-christmas-season".to_string(),
            Collect::Epiphany => "collect-epiphany".to_string(),
            Collect::EpiphanyWeek(n) => format!("collect-epiphany-{n}"),
            Collect::AshWednesday => "collect-ash-wednesday".to_string(),
            Collect::LentWeek(n) => format!("collect-lent-{n}"),
            Collect::PalmSunday => "collect-palm-sunday".to_string(),
            Collect::GoodFriday => "collect-good-friday".to_string(),
            Collect::EasterDay => "collect-easter-day".to_string(),
            Collect::EasterWeek(n) => format!("collect-easter-{n}"),
            Collect::AscensionDay => "collect-ascension-day".to_string(),
            Collect::Pentecost => "collect-pentecost".to_string(),
            Collect::TrinitySunday => "collect-trinity-sunday".to_string(),
            Collect::TrinityWeek(n) => format!("collect-trinity-{n}"),
            Collect::AdventWeek(n) => format!("collect-advent-{n}"),
        }
    }

    /// Human-readable heading for the collect.
    pub fn title(&self) -> String {
        match self {
            Collect::ChristmasDay => "Christmas Day".to_string(),
            Collect::ChristmasSeason => "Christmastide".to_string(),
            Collect::Epiphany => "The Epiphany".to_string(),
            Collect::EpiphanyWeek(n) => format!("{} Week after Epiphany", ordinal(*n)),
            Collect::AshWednesday => "Ash Wednesday".to_string(),
            Collect::LentWeek(n) => format!("{} Week in Lent", ordinal(*n)),
            Collect::PalmSunday => "Palm Sunday".to_string(),
            Collect::GoodFriday => "Good Friday".to_string(),
            Collect::EasterDay => "Easter Day".to_string(),
            Collect::EasterWeek(n) => format!("{} Week of Easter", ordinal(*n)),
            Collect::AscensionDay => "Ascension Day".to_string(),
            Collect::Pentecost => "Pentecost".to_string(),
            Collect::TrinitySunday => "Trinity Sunday".to_string(),
            Collect::TrinityWeek(n) => format!("{} Week after Trinity", ordinal(*n)),
            Collect::AdventWeek(n) => format!("{} Week of Advent", ordinal(*n)),
        }
    }

    /// Every collect the resolver can produce, in liturgical-year order
    /// starting from Advent.
    pub fn all() -> Vec<Collect> {
        let mut all = Vec::new();
        all.extend((1..=ADVENT_WEEKS).map(Collect::AdventWeek));
        all.extend([Collect::ChristmasDay, Collect::ChristmasSeason, Collect::Epiphany]);
        all.extend((1..=EPIPHANY_WEEKS).map(Collect::EpiphanyWeek));
        all.push(Collect::AshWednesday);
        all.extend((1..=LENT_WEEKS).map(Collect::LentWeek));
        all.extend([Collect::PalmSunday, Collect::GoodFriday, Collect::EasterDay]);
        all.extend((1..=EASTER_WEEKS).map(Collect::EasterWeek));
        all.extend([Collect::AscensionDay, Collect::Pentecost, Collect::TrinitySunday]);
        all.extend((1..=TRINITY_WEEKS).map(Collect::TrinityWeek));
        all
    }
}

impl fmt::Display for Collect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug())
    }
}

impl Serialize for Collect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.slug())
    }
}

impl FromStr for Collect {
    type Err = LiturgyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let unknown = || LiturgyError::UnknownCollect(format!("'{s}'"));
        let rest = s.strip_prefix("collect-").ok_or_else(unknown)?;

        let fixed = match rest {
            "christmas-day" => Some(Collect::ChristmasDay),
            "christmas-season" => Some(Collect::ChristmasSeason),
            "epiphany" => Some(Collect::Epiphany),
            "ash-wednesday" => Some(Collect::AshWednesday),
            "palm-sunday" => Some(Collect::PalmSunday),
            "good-friday" => Some(Collect::GoodFriday),
            "easter-day" => Some(Collect::EasterDay),
            "ascension-day" => Some(Collect::AscensionDay),
            "pentecost" => Some(Collect::Pentecost),
            "trinity-sunday" => Some(Collect::TrinitySunday),
            _ => None,
        };
        if let Some(collect) = fixed {
            return Ok(collect);
        }

        let (season, week) = rest.rsplit_once('-').ok_or_else(unknown)?;
        let week: u8 = week.parse().map_err(|_| unknown())?;
        let (constructor, max): (fn(u8) -> Collect, u8) = match season {
            "epiphany" => (Collect::EpiphanyWeek, EPIPHANY_WEEKS),
            "lent" => (Collect::LentWeek, LENT_WEEKS),
            "easter" => (Collect::EasterWeek, EASTER_WEEKS),
            "trinity" => (Collect::TrinityWeek, TRINITY_WEEKS),
            "advent" => (Collect::AdventWeek, ADVENT_WEEKS),
            _ => return Err(unknown()),
        };
        if (1..=max).contains(&week) {
            Ok(constructor(week))
        } else {
            Err(unknown())
        }
    }
}

/// Resolve the collect appointed for `today`.
///
/// Exact-day observances win over week ranges: Ash Wednesday is the Ash
/// Wednesday collect even though it opens the first Lenten range. Days that
/// match nothing fall back to the Trinity Sunday collect.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use liturgy_engine::collect::{resolve_collect, Collect};
///
/// let ash = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
/// assert_eq!(resolve_collect(ash), Collect::AshWednesday);
/// ```
pub fn resolve_collect(today: NaiveDate) -> Collect {
    let a = SeasonAnchors::for_year(today.year());

    let collect = exact_day(today, &a)
        .or_else(|| week_range(today, &a))
        .unwrap_or_else(|| {
            warn!(%today, "no collect rule matched; falling back to Trinity Sunday");
            Collect::TrinitySunday
        });

    debug!(%today, slug = %collect, "resolved collect");
    collect
}

/// [`resolve_collect`] rendered as its content-store slug.
pub fn resolve_collect_slug(today: NaiveDate) -> String {
    resolve_collect(today).slug()
}

fn exact_day(today: NaiveDate, a: &SeasonAnchors) -> Option<Collect> {
    let collect = if today == a.christmas {
        Collect::ChristmasDay
    } else if today == a.epiphany {
        Collect::Epiphany
    } else if today == a.ash_wednesday {
        Collect::AshWednesday
    } else if today == a.good_friday {
        Collect::GoodFriday
    } else if today == a.palm_sunday {
        Collect::PalmSunday
    } else if today == a.easter {
        Collect::EasterDay
    } else if today == a.ascension {
        Collect::AscensionDay
    } else if today == a.pentecost {
        Collect::Pentecost
    } else if today == a.trinity_sunday {
        Collect::TrinitySunday
    } else {
        return None;
    };
    Some(collect)
}

fn week_range(today: NaiveDate, a: &SeasonAnchors) -> Option<Collect> {
    let collect = if today < a.epiphany {
        Collect::ChristmasSeason
    } else if today < a.ash_wednesday {
        Collect::EpiphanyWeek(week_of(a.epiphany, today, EPIPHANY_WEEKS))
    } else if today < a.palm_sunday {
        Collect::LentWeek(week_of(a.ash_wednesday, today, LENT_WEEKS))
    } else if today < a.easter {
        Collect::PalmSunday
    } else if today < a.pentecost {
        Collect::EasterWeek(week_of(a.easter, today, EASTER_WEEKS))
    } else if today < a.trinity_sunday {
        Collect::Pentecost
    } else if today < a.advent_sunday {
        Collect::TrinityWeek(week_of(a.trinity_sunday, today, TRINITY_WEEKS))
    } else if today < a.christmas {
        Collect::AdventWeek(week_of(a.advent_sunday, today, ADVENT_WEEKS))
    } else if today < a.next_epiphany {
        Collect::ChristmasSeason
    } else {
        return None;
    };
    Some(collect)
}

/// `ceil`-rounded week number from `anchor`, clamped to `1..=max`.
fn week_of(anchor: NaiveDate, today: NaiveDate, max: u8) -> u8 {
    ceil_week(anchor, today).clamp(1, i64::from(max)) as u8
}

fn ordinal(n: u8) -> &'static str {
    const ORDINALS: [&str; 20] = [
        "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth",
        "Tenth", "Eleventh", "Twelfth", "Thirteenth", "Fourteenth", "Fifteenth", "Sixteenth",
        "Seventeenth", "Eighteenth", "Nineteenth", "Twentieth",
    ];
    ORDINALS
        .get(usize::from(n).saturating_sub(1))
        .copied()
        .unwrap_or("Last")
}
