use std::sync::Mutex;

use crmd_domain::Reminder;

use super::IReminderRepo;

/// In-memory reminder collection with the same whole-collection contract
/// as the file store. Used by tests.
pub struct InMemoryReminderRepo {
    reminders: Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryReminderRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl IReminderRepo for InMemoryReminderRepo {
    fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        Ok(self.reminders.lock().unwrap().clone())
    }

    fn save_all(&self, mut reminders: Vec<Reminder>) -> anyhow::Result<()> {
        reminders.sort_by_key(|r| r.timestamp);
        *self.reminders.lock().unwrap() = reminders;
        Ok(())
    }
}
