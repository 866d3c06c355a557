//! ISO 8601 input.
//!
//! Accepted forms, all interpreted in UTC unless an offset is given:
//!
//! | Input | Meaning |
//! |-------|---------|
//! | `2024-01-11T00:00:00Z` | RFC 3339 with `Z` |
//! | `2024-01-11T01:00:00+01:00` | RFC 3339 with offset |
//! | `2024-01-11T00:00:00` or `2024-01-11 00:00:00` | naive, taken as UTC |
//! | `2024-01-11T00:00` | naive without seconds |
//! | `2024-01-11` | midnight UTC |

use crate::scales::utc::UTC;
use crate::{TimeError, TimeResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const MAX_ISO8601_LENGTH: usize = 40;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub fn parse_iso8601(s: &str) -> TimeResult<UTC> {
    let s = s.trim();

    if s.len() > MAX_ISO8601_LENGTH {
        return Err(TimeError::ParseError("Input too long".to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(UTC::from(dt.with_timezone(&Utc)));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(UTC::from(naive.and_utc()));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(UTC::from(midnight.and_utc()));
        }
    }

    Err(TimeError::ParseError(format!(
        "Invalid datetime format: '{}'. Expected YYYY-MM-DD[THH:MM[:SS]][Z|±HH:MM]",
        s
    )))
}
