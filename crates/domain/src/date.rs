use chrono::{Duration, Local, NaiveDate, NaiveDateTime, TimeZone};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseDueError {
    #[error("could not parse time: {0}")]
    Unparseable(String),
}

/// Outcome of parsing a user-supplied due date and optional time.
#[derive(Debug, PartialEq, Eq)]
pub struct DueParse {
    /// Seconds since the epoch of the parsed local wall-clock time.
    pub timestamp: i64,
    /// Set when a time component was supplied but failed to parse and the
    /// date was taken alone at local midnight. Callers should warn.
    pub dropped_time: Option<String>,
}

/// Parses a `YYYY-MM-DD` date and optional `HH:MM` time, interpreted in
/// the local timezone. An unparseable time falls back to local midnight
/// of the date; an unparseable date is an error.
pub fn parse_due(date: &str, time: Option<&str>) -> Result<DueParse, ParseDueError> {
    if let Some(time) = time {
        let combined = format!("{} {}", date, time);
        if let Some(timestamp) = NaiveDateTime::parse_from_str(&combined, "%Y-%m-%d %H:%M")
            .ok()
            .and_then(resolve_local)
        {
            return Ok(DueParse {
                timestamp,
                dropped_time: None,
            });
        }
    }

    let midnight = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .and_then(resolve_local);

    match midnight {
        Some(timestamp) => Ok(DueParse {
            timestamp,
            dropped_time: time.map(String::from),
        }),
        None => Err(ParseDueError::Unparseable(match time {
            Some(time) => format!("{} {}", date, time),
            None => date.to_string(),
        })),
    }
}

/// Resolves a local wall-clock datetime to an instant. Ambiguous times
/// (DST fold) take the earliest instant; nonexistent times (DST gap)
/// skip forward an hour.
pub(crate) fn resolve_local(date: NaiveDateTime) -> Option<i64> {
    match Local.from_local_datetime(&date).earliest() {
        Some(resolved) => Some(resolved.timestamp()),
        None => date
            .checked_add_signed(Duration::hours(1))
            .and_then(|d| Local.from_local_datetime(&d).earliest())
            .map(|d| d.timestamp()),
    }
}
