use chrono::{DateTime, Local};
use crmd_infra::Context;
use tracing::error;

use crate::error::CrmdError;
use crate::shared::usecase::{execute, UseCase};

fn handle_error(e: UseCaseErrors) -> CrmdError {
    match e {
        UseCaseErrors::NotFound(id) => CrmdError::NotFound(id),
        UseCaseErrors::UnrepresentableOccurrence => CrmdError::InternalError,
        UseCaseErrors::StorageError => CrmdError::InternalError,
    }
}

pub fn resolve_reminder_controller(
    ctx: &Context,
    reminder_id: u32,
    allow_recurrence: bool,
) -> Result<String, CrmdError> {
    let usecase = ResolveReminderUseCase {
        reminder_id,
        allow_recurrence,
    };

    execute(usecase, ctx)
        .map(|resolution| match resolution {
            Resolution::Deleted(id) => format!("Deleted reminder {}.", id),
            Resolution::Completed(id) => format!("Resolved reminder {}.", id),
            Resolution::Advanced {
                id,
                next_timestamp,
            } => format!(
                "Resolved reminder {}. Next occurrence: {}",
                id,
                format_occurrence(next_timestamp)
            ),
        })
        .map_err(handle_error)
}

fn format_occurrence(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%-d %b %Y %H:%M")
            .to_string(),
        None => timestamp.to_string(),
    }
}

#[derive(Debug)]
pub struct ResolveReminderUseCase {
    pub reminder_id: u32,
    /// `false` forces removal even for recurring reminders (delete);
    /// `true` lets a recurring reminder advance instead (complete).
    pub allow_recurrence: bool,
}

/// Which branch resolution took, so the caller can phrase the
/// confirmation.
#[derive(Debug, PartialEq)]
pub enum Resolution {
    /// Removed by explicit delete.
    Deleted(u32),
    /// Completed with no recurrence to advance; removed.
    Completed(u32),
    /// Recurring and completed; advanced to the next future occurrence.
    Advanced { id: u32, next_timestamp: i64 },
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    NotFound(u32),
    UnrepresentableOccurrence,
    StorageError,
}

impl UseCase for ResolveReminderUseCase {
    type Response = Resolution;

    type Errors = UseCaseErrors;

    fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let mut reminders = ctx.repos.reminders.find_all().map_err(|e| {
            error!("Could not load reminders: {:?}", e);
            UseCaseErrors::StorageError
        })?;

        let position = reminders
            .iter()
            .position(|r| r.id == self.reminder_id)
            .ok_or(UseCaseErrors::NotFound(self.reminder_id))?;

        let recurrence = reminders[position]
            .recurrence
            .filter(|_| self.allow_recurrence);

        let resolution = match recurrence {
            None => {
                let removed = reminders.remove(position);
                if self.allow_recurrence {
                    Resolution::Completed(removed.id)
                } else {
                    Resolution::Deleted(removed.id)
                }
            }
            Some(recurrence) => {
                let now = ctx.sys.get_timestamp();
                let next = recurrence
                    .next_occurrence(reminders[position].timestamp, now)
                    .ok_or(UseCaseErrors::UnrepresentableOccurrence)?;
                reminders[position].timestamp = next;
                Resolution::Advanced {
                    id: self.reminder_id,
                    next_timestamp: next,
                }
            }
        };

        ctx.repos.reminders.save_all(reminders).map_err(|e| {
            error!("Could not persist reminders: {:?}", e);
            UseCaseErrors::StorageError
        })?;

        Ok(resolution)
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use chrono::TimeZone;
    use crmd_domain::{Recurrence, Reminder};
    use crmd_infra::ISys;

    use super::*;

    struct StaticSys(i64);
    impl ISys for StaticSys {
        fn get_timestamp(&self) -> i64 {
            self.0
        }
    }

    fn ts(year: i32, month: u32, day: u32) -> i64 {
        Local
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .unwrap()
            .timestamp()
    }

    fn setup(now: i64, reminders: Vec<Reminder>) -> Context {
        let mut ctx = Context::create_inmemory();
        ctx.sys = Arc::new(StaticSys(now));
        ctx.repos.reminders.save_all(reminders).unwrap();
        ctx
    }

    fn reminder(id: u32, timestamp: i64, recurrence: Option<Recurrence>) -> Reminder {
        Reminder {
            id,
            description: format!("reminder {}", id),
            recurrence,
            timestamp,
        }
    }

    fn resolve(
        ctx: &Context,
        reminder_id: u32,
        allow_recurrence: bool,
    ) -> Result<Resolution, UseCaseErrors> {
        let mut usecase = ResolveReminderUseCase {
            reminder_id,
            allow_recurrence,
        };
        usecase.execute(ctx)
    }

    #[test]
    fn completing_a_one_shot_reminder_removes_it() {
        let ctx = setup(1000, vec![reminder(1, 100, None), reminder(2, 200, None)]);

        let res = resolve(&ctx, 1, true).unwrap();
        assert_eq!(res, Resolution::Completed(1));

        let remaining = ctx.repos.reminders.find_all().unwrap();
        assert_eq!(remaining.iter().map(|r| r.id).collect::<Vec<_>>(), [2]);
    }

    #[test]
    fn deleting_removes_even_a_recurring_reminder() {
        let ctx = setup(1000, vec![reminder(1, 100, Some(Recurrence::Daily))]);

        let res = resolve(&ctx, 1, false).unwrap();
        assert_eq!(res, Resolution::Deleted(1));
        assert!(ctx.repos.reminders.find_all().unwrap().is_empty());
    }

    #[test]
    fn completing_a_recurring_reminder_advances_it() {
        let now = ts(2024, 1, 10);
        let ctx = setup(now, vec![reminder(1, ts(2024, 1, 1), Some(Recurrence::Weekly))]);

        let res = resolve(&ctx, 1, true).unwrap();
        assert_eq!(
            res,
            Resolution::Advanced {
                id: 1,
                next_timestamp: ts(2024, 1, 15),
            }
        );

        let all = ctx.repos.reminders.find_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].timestamp, ts(2024, 1, 15));
        assert_eq!(all[0].recurrence, Some(Recurrence::Weekly));
    }

    #[test]
    fn an_overdue_daily_reminder_lands_strictly_in_the_future() {
        let now = ts(2024, 3, 15);
        let ctx = setup(now, vec![reminder(1, ts(2024, 1, 1), Some(Recurrence::Daily))]);

        resolve(&ctx, 1, true).unwrap();

        let all = ctx.repos.reminders.find_all().unwrap();
        assert!(all[0].timestamp > now);
        assert_eq!(all[0].timestamp, ts(2024, 3, 16));
    }

    #[test]
    fn an_unknown_id_is_not_found_and_nothing_is_persisted() {
        let ctx = setup(1000, vec![reminder(1, 100, None)]);
        let before = ctx.repos.reminders.find_all().unwrap();

        let res = resolve(&ctx, 99, true);
        assert_eq!(res.unwrap_err(), UseCaseErrors::NotFound(99));
        assert_eq!(ctx.repos.reminders.find_all().unwrap(), before);
    }
}
