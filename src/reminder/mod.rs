mod create_reminder;
mod list_reminders;
mod resolve_reminder;

pub use create_reminder::{create_reminder_controller, CreateReminderUseCase};
pub use list_reminders::{list_reminders_controller, ListRemindersUseCase};
pub use resolve_reminder::{resolve_reminder_controller, Resolution, ResolveReminderUseCase};
