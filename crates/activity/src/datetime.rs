//! Date-time normalisation helpers
//!
//! Everything downstream works in UTC. Free-form date strings are
//! normalised here once, at the boundary, so the decay arithmetic only
//! ever sees `DateTime<Utc>` values.

// external crates
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use log::debug;

// internal modules
use crate::error::{Error, Result};

/// Naive layouts accepted after RFC 3339, interpreted as UTC
const NAIVE_LAYOUTS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Normalise a date string to a canonical `DateTime<Utc>`
///
/// Tries RFC 3339 first, then a short list of common layouts without a
/// timezone (taken as UTC), then a bare date (taken as midnight UTC).
///
/// ```rust
/// # use radtools_activity::normalise_datetime;
/// let a = normalise_datetime("2023-06-01T12:00:00Z").unwrap();
/// let b = normalise_datetime("2023-06-01 12:00:00").unwrap();
/// assert_eq!(a, b);
///
/// assert!(normalise_datetime("not a date").is_err());
/// ```
pub fn normalise_datetime(text: &str) -> Result<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Ok(datetime.with_timezone(&Utc));
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, layout) {
            debug!("\"{text}\" taken as UTC via layout {layout}");
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        debug!("\"{text}\" taken as midnight UTC");
        return Ok(NaiveDateTime::new(date, NaiveTime::MIN).and_utc());
    }

    Err(Error::UnparsedDatetime {
        text: text.to_string(),
    })
}

/// Signed elapsed seconds between two timestamps
pub(crate) fn elapsed_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1.0e3
}
