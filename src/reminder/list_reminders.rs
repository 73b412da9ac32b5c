use chrono::{DateTime, Local};
use crmd_domain::Reminder;
use crmd_infra::Context;
use tracing::error;

use crate::error::CrmdError;
use crate::shared::usecase::{execute, UseCase};

fn handle_error(e: UseCaseErrors) -> CrmdError {
    match e {
        UseCaseErrors::StorageError => CrmdError::InternalError,
    }
}

pub fn list_reminders_controller(ctx: &Context, list_all: bool) -> Result<String, CrmdError> {
    execute(ListRemindersUseCase { list_all }, ctx)
        .map(format_listing)
        .map_err(handle_error)
}

fn format_listing(res: ListRemindersResponse) -> String {
    if res.no_reminders_exist {
        return "no reminders exist".into();
    }
    res.reminders
        .iter()
        .map(format_reminder)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_reminder(reminder: &Reminder) -> String {
    let date = match DateTime::from_timestamp(reminder.timestamp, 0) {
        Some(utc) => utc.with_timezone(&Local).format("%-d %b %Y").to_string(),
        None => reminder.timestamp.to_string(),
    };

    let mut line = format!(
        "Reminder! #{} - {}: {}",
        reminder.id, date, reminder.description
    );
    if let Some(recurrence) = reminder.recurrence {
        line.push_str(&format!(" - recurs {}", recurrence));
    }
    line
}

#[derive(Debug)]
pub struct ListRemindersUseCase {
    pub list_all: bool,
}

/// An empty collection under `list_all` is a distinct user-visible
/// condition; an empty due-listing stays silent.
#[derive(Debug, PartialEq)]
pub struct ListRemindersResponse {
    pub reminders: Vec<Reminder>,
    pub no_reminders_exist: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    StorageError,
}

impl UseCase for ListRemindersUseCase {
    type Response = ListRemindersResponse;

    type Errors = UseCaseErrors;

    // Read-only: viewing reminders never mutates or re-persists them.
    fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let all = ctx.repos.reminders.find_all().map_err(|e| {
            error!("Could not load reminders: {:?}", e);
            UseCaseErrors::StorageError
        })?;

        let now = ctx.sys.get_timestamp();
        let no_reminders_exist = self.list_all && all.is_empty();
        // the store keeps the collection sorted ascending by timestamp
        let reminders = all
            .into_iter()
            .filter(|r| self.list_all || r.timestamp <= now)
            .collect();

        Ok(ListRemindersResponse {
            reminders,
            no_reminders_exist,
        })
    }
}
