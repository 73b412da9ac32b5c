mod date;
mod recurrence;
mod reminder;

pub use date::{parse_due, DueParse, ParseDueError};
pub use recurrence::{InvalidRecurrenceError, Recurrence};
pub use reminder::{find_free_id, Reminder};
