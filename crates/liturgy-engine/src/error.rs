//! Error types for liturgy-engine operations.
//!
//! The calendar computations themselves are total and never fail. Errors only
//! arise at the edges: parsing caller-supplied dates and time zones, and
//! loading liturgical texts.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LiturgyError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Year out of range: {0} (supported: 1583..=262141)")]
    YearOutOfRange(i32),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Unknown collect: {0}")]
    UnknownCollect(String),

    #[error("Content store error: {0}")]
    ContentStore(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, LiturgyError>;
