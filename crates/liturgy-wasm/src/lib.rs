//! WASM bindings for the liturgical calendar engine.
//!
//! The browser reads its clock once, formats the local day as `YYYY-MM-DD`
//! and passes that string to every call for a page render. Results are JSON
//! strings shaped like the engine's `Serialize` output.

use liturgy_engine::{
    check_year, compute_easter, parse_date, resolve_collect_slug, upcoming_holy_days, LiturgicalDay,
    LiturgyError,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, LiturgyError> {
    serde_json::to_string(value).map_err(|e| LiturgyError::Serialization(e.to_string()))
}

/// Easter Sunday of `year` as `YYYY-MM-DD`.
pub fn easter_date_iso(year: i32) -> Result<String, LiturgyError> {
    Ok(compute_easter(check_year(year)?).to_string())
}

/// JSON snapshot of the liturgical day for `date`.
pub fn liturgical_day_json(date: &str, limit: usize) -> Result<String, LiturgyError> {
    let day = LiturgicalDay::for_date(parse_date(date)?, limit);
    to_json(&day)
}

/// Collect slug for `date`.
pub fn collect_slug_for(date: &str) -> Result<String, LiturgyError> {
    Ok(resolve_collect_slug(parse_date(date)?))
}

/// JSON array of the next `limit` holy days after `date`.
pub fn upcoming_holy_days_json(date: &str, limit: usize) -> Result<String, LiturgyError> {
    let days = upcoming_holy_days(parse_date(date)?, limit);
    to_json(days.as_slice())
}

fn js_error(e: LiturgyError) -> JsError {
    JsError::new(&e.to_string())
}

#[wasm_bindgen(js_name = easterDate)]
pub fn easter_date(year: i32) -> Result<String, JsError> {
    easter_date_iso(year).map_err(js_error)
}

#[wasm_bindgen(js_name = liturgicalDay)]
pub fn liturgical_day(date: &str, limit: usize) -> Result<String, JsError> {
    liturgical_day_json(date, limit).map_err(js_error)
}

#[wasm_bindgen(js_name = collectSlug)]
pub fn collect_slug(date: &str) -> Result<String, JsError> {
    collect_slug_for(date).map_err(js_error)
}

#[wasm_bindgen(js_name = upcomingHolyDays)]
pub fn upcoming_holy_days_js(date: &str, limit: usize) -> Result<String, JsError> {
    upcoming_holy_days_json(date, limit).map_err(js_error)
}
