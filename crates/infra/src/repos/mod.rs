mod reminder;

use std::sync::Arc;

pub use reminder::{FileReminderRepo, IReminderRepo, InMemoryReminderRepo};

use crate::config::Config;

#[derive(Clone)]
pub struct Repos {
    pub reminders: Arc<dyn IReminderRepo>,
}

impl Repos {
    pub fn create_file(config: &Config) -> Self {
        Self {
            reminders: Arc::new(FileReminderRepo::new(config.storage_file())),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            reminders: Arc::new(InMemoryReminderRepo::new()),
        }
    }
}
