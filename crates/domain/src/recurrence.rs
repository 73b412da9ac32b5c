use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Days, Local, Months, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::date::resolve_local;

/// How often a reminder repeats. The five schedules are a closed set so
/// that validation and next-occurrence dispatch stay exhaustive.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidRecurrenceError {
    #[error(
        "invalid recurrence schedule: {0}\nvalid schedules: daily, weekly, monthly, quarterly, yearly"
    )]
    Unrecognized(String),
}

impl FromStr for Recurrence {
    type Err = InvalidRecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(InvalidRecurrenceError::Unrecognized(s.to_string())),
        }
    }
}

impl Display for Recurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        };
        write!(f, "{}", s)
    }
}

impl Recurrence {
    /// The next occurrence of `timestamp` strictly after `now` (both in
    /// seconds since the epoch), reached by adding whole units of this
    /// schedule. Day-based units add wall-clock days; month-based units
    /// use calendar arithmetic, so a monthly reminder on Jan 31 lands on
    /// the last day of February rather than a fixed 30 days later.
    ///
    /// `None` when the advanced datetime falls outside the representable
    /// range.
    pub fn next_occurrence(&self, timestamp: i64, now: i64) -> Option<i64> {
        let mut date = local_wall_clock(timestamp)?;
        let now = local_wall_clock(now)?;
        loop {
            date = self.step(date)?;
            if date > now {
                break;
            }
        }
        resolve_local(date)
    }

    fn step(&self, date: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            Self::Daily => date.checked_add_days(Days::new(1)),
            Self::Weekly => date.checked_add_days(Days::new(7)),
            Self::Monthly => date.checked_add_months(Months::new(1)),
            Self::Quarterly => date.checked_add_months(Months::new(3)),
            Self::Yearly => date.checked_add_months(Months::new(12)),
        }
    }
}

fn local_wall_clock(timestamp: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(&Local).naive_local())
}
