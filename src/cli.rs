use std::str::FromStr;

use clap::Parser;
use crmd_domain::{parse_due, Recurrence};
use tracing::warn;

use crate::error::CrmdError;

/// Personal command-line reminder manager.
///
/// With no flags, prints the reminders that are currently due.
#[derive(Parser, Debug)]
#[command(name = "crmd", version, about)]
pub struct Cli {
    /// Description of a new reminder
    pub description: Vec<String>,

    /// Date of new reminder (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Optional time of new reminder (HH:MM)
    #[arg(short, long)]
    pub time: Option<String>,

    /// Recurrence schedule for new reminder
    #[arg(short, long)]
    pub recur: Option<String>,

    /// ID of reminder to mark complete
    #[arg(short, long)]
    pub complete: Option<u32>,

    /// ID of reminder to delete
    #[arg(short = 'x', long)]
    pub delete: Option<u32>,

    /// List all reminders that currently exist
    #[arg(short = 'a', long = "all")]
    pub list_all: bool,
}

/// A fully validated action, resolved before any I/O happens.
#[derive(Debug, PartialEq)]
pub enum Action {
    Create {
        description: String,
        timestamp: i64,
        recurrence: Option<Recurrence>,
    },
    ListDue,
    ListAll,
    Complete(u32),
    Delete(u32),
}

impl Cli {
    /// Resolves the parsed flags into a single action, enforcing the
    /// one-action-at-a-time contract.
    pub fn action(&self) -> Result<Action, CrmdError> {
        let has_create_flags =
            self.date.is_some() || self.time.is_some() || self.recur.is_some();
        let has_description = !self.description.is_empty();

        let recurrence = self
            .recur
            .as_deref()
            .map(Recurrence::from_str)
            .transpose()
            .map_err(|e| CrmdError::BadUserInput(e.to_string()))?;

        if let Some(id) = self.complete {
            if has_create_flags || has_description || self.delete.is_some() || self.list_all {
                return Err(CrmdError::BadUserInput(
                    "can only use -c flag by itself".into(),
                ));
            }
            return Ok(Action::Complete(id));
        }

        if let Some(id) = self.delete {
            if has_create_flags || has_description || self.complete.is_some() || self.list_all {
                return Err(CrmdError::BadUserInput(
                    "can only use -x flag by itself".into(),
                ));
            }
            return Ok(Action::Delete(id));
        }

        if self.list_all {
            if has_create_flags || has_description || self.complete.is_some() || self.delete.is_some()
            {
                return Err(CrmdError::BadUserInput(
                    "can only use -a flag by itself".into(),
                ));
            }
            return Ok(Action::ListAll);
        }

        if has_description {
            let date = self.date.as_deref().ok_or_else(|| {
                CrmdError::BadUserInput("cannot create reminder: no date provided".into())
            })?;

            let due = parse_due(date, self.time.as_deref())
                .map_err(|e| CrmdError::BadUserInput(e.to_string()))?;
            if let Some(dropped) = &due.dropped_time {
                warn!("Could not parse time component: {}", dropped);
            }

            return Ok(Action::Create {
                description: self.description.join(" "),
                timestamp: due.timestamp,
                recurrence,
            });
        }

        if has_create_flags {
            warn!("Description not found; ignoring flags");
        }

        Ok(Action::ListDue)
    }
}
