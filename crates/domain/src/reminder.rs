use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::recurrence::Recurrence;

/// A `Reminder` is a dated note to the user, optionally repeating on a
/// `Recurrence` schedule. `timestamp` always holds the next occurrence
/// that has not yet been resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reminder {
    /// Positive and unique within the collection. Freed IDs are reused.
    pub id: u32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    /// Seconds since the epoch at which the reminder is next due.
    #[serde(rename = "time")]
    pub timestamp: i64,
}

/// The lowest positive ID not taken by any reminder in the collection.
pub fn find_free_id(reminders: &[Reminder]) -> u32 {
    let used = reminders.iter().map(|r| r.id).collect::<HashSet<_>>();
    let mut candidate = 1;
    while used.contains(&candidate) {
        candidate += 1;
    }
    candidate
}
