//! Text and JSON rendering of command results.

use std::fmt::Write;

use anyhow::Result;
use chrono::NaiveDate;
use liturgy_engine::{HolyDay, LineRole, LiturgicalDay, LiturgicalText, SeasonSpan, SeasonWindow};
use serde::Serialize;

use crate::Format;

#[derive(Debug, Serialize)]
pub struct EasterDate {
    pub year: i32,
    pub easter: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct CollectReport {
    pub slug: String,
    pub title: String,
    /// The text from the content store, when one was given and had the slug.
    pub text: Option<LiturgicalText>,
    /// Whether a content store was consulted at all.
    #[serde(skip)]
    pub store_given: bool,
}

#[derive(Debug, Serialize)]
pub struct CalendarListing {
    pub year: i32,
    pub easter: NaiveDate,
    pub seasons: Vec<SeasonSpan>,
    pub holy_days: Vec<HolyDay>,
}

/// Render `value` as pretty JSON or through its text renderer.
pub fn emit<T: Serialize + ?Sized>(
    format: Format,
    value: &T,
    text: fn(&T) -> String,
) -> Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(value)? + "\n"),
        Format::Text => Ok(text(value)),
    }
}

fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn easter_text(dates: &[EasterDate]) -> String {
    let mut out = String::new();
    for d in dates {
        let _ = writeln!(out, "{}: {}", d.year, long_date(d.easter));
    }
    out
}

pub fn season_text(w: &SeasonWindow) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", w.name, w.color);
    let _ = writeln!(out, "{} to {}", long_date(w.start), long_date(w.end));
    let _ = writeln!(
        out,
        "Day {} of {}, {} remaining ({}%)",
        w.days_elapsed + 1,
        w.total_days,
        w.days_remaining,
        w.progress_percent()
    );
    let _ = writeln!(out, "{}", w.description);
    out
}

pub fn holy_days_text(days: &[HolyDay]) -> String {
    let mut out = String::new();
    for d in days {
        let _ = writeln!(out, "{}  {} ({})", d.date, d.name, d.color);
    }
    out
}

pub fn collect_text(report: &CollectReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", report.title, report.slug);
    match &report.text {
        Some(text) => {
            let _ = writeln!(out);
            for line in &text.lines {
                let _ = writeln!(out, "{}{}", role_prefix(line.role), line.text);
            }
        }
        None if report.store_given => {
            let _ = writeln!(out, "Not found in texts file");
        }
        None => {}
    }
    out
}

fn role_prefix(role: LineRole) -> &'static str {
    match role {
        LineRole::Leader => "Leader: ",
        LineRole::People => "People: ",
        LineRole::All => "All: ",
        LineRole::Rubric => "  ",
        LineRole::Text => "",
    }
}

pub fn day_text(day: &LiturgicalDay) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", long_date(day.date));
    out.push_str(&season_text(&day.season));
    let _ = writeln!(out, "Collect: {} [{}]", day.collect_title, day.collect);
    if !day.upcoming.is_empty() {
        let _ = writeln!(out, "Upcoming:");
        for d in &day.upcoming {
            let _ = writeln!(out, "  {}  {}", d.date, d.name);
        }
    }
    out
}

pub fn calendar_text(listing: &CalendarListing) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (Easter {})", listing.year, listing.easter);
    let _ = writeln!(out, "Seasons:");
    for span in &listing.seasons {
        let _ = writeln!(out, "  {} .. {}  {}", span.start, span.end, span.season);
    }
    let _ = writeln!(out, "Holy days:");
    for d in &listing.holy_days {
        let _ = writeln!(out, "  {}  {}", d.date, d.name);
    }
    out
}
