use crmd_domain::{find_free_id, Recurrence, Reminder};
use crmd_infra::Context;
use tracing::error;

use crate::error::CrmdError;
use crate::shared::usecase::{execute, UseCase};

fn handle_error(e: UseCaseErrors) -> CrmdError {
    match e {
        UseCaseErrors::EmptyDescription => {
            CrmdError::BadUserInput("cannot create reminder: no description provided".into())
        }
        UseCaseErrors::StorageError => CrmdError::InternalError,
    }
}

pub fn create_reminder_controller(
    ctx: &Context,
    description: String,
    timestamp: i64,
    recurrence: Option<Recurrence>,
) -> Result<String, CrmdError> {
    let usecase = CreateReminderUseCase {
        description,
        timestamp,
        recurrence,
    };

    execute(usecase, ctx)
        .map(|reminder| format!("Created reminder {}.", reminder.id))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub description: String,
    pub timestamp: i64,
    pub recurrence: Option<Recurrence>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    EmptyDescription,
    StorageError,
}

impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        if self.description.trim().is_empty() {
            return Err(UseCaseErrors::EmptyDescription);
        }

        let mut reminders = ctx.repos.reminders.find_all().map_err(|e| {
            error!("Could not load reminders: {:?}", e);
            UseCaseErrors::StorageError
        })?;

        let reminder = Reminder {
            id: find_free_id(&reminders),
            description: self.description.clone(),
            recurrence: self.recurrence,
            timestamp: self.timestamp,
        };
        reminders.push(reminder.clone());

        ctx.repos.reminders.save_all(reminders).map_err(|e| {
            error!("Could not persist reminders: {:?}", e);
            UseCaseErrors::StorageError
        })?;

        Ok(reminder)
    }
}
