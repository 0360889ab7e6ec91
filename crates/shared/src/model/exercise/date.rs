use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateParseError {
    #[error("Unrecognised date: {0:?}")]
    Unrecognised(String),
}

/// Parses the date formats clients send for exercises and log bounds.
///
/// Accepts RFC 3339, RFC 2822 (`Fri, 15 May 2020 00:00:00 GMT`),
/// `YYYY-MM-DD HH:MM:SS` and a bare `YYYY-MM-DD`. Values without an offset
/// are taken as UTC and bare dates mean midnight.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>, DateParseError> {
    let value = value.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc));
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(value) {
        return Ok(date.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(date.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
        .ok_or_else(|| DateParseError::Unrecognised(value.to_owned()))
}
