use chrono::{Local, NaiveDate, NaiveDateTime};
use thiserror::Error;

const DATETIME_FORMATS: [&str; 2] = ["%d.%m.%Y %H:%M", "%d.%m.%Y %H:%M:%S"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("timestamp cannot be empty")]
    Empty,
    #[error("invalid date")]
    InvalidDate,
    #[error("invalid datetime format: expected DD.MM.YYYY or DD.MM.YYYY HH:MM")]
    InvalidDateTime,
}

pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parses a reference instant. A bare date means midnight of that day.
pub fn parse_reference_time(input: &str) -> Result<NaiveDateTime, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d.%m.%Y") {
        return date
            .and_hms_opt(0, 0, 0)
            .ok_or(TimeParseError::InvalidDate);
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }

    Err(TimeParseError::InvalidDateTime)
}
