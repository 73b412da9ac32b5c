mod file;
mod inmemory;

use crmd_domain::Reminder;
pub use file::FileReminderRepo;
pub use inmemory::InMemoryReminderRepo;

/// Whole-collection storage contract for reminders. Every mutation loads
/// the full collection, changes it in memory and writes it back; the
/// persisted collection is the single source of truth.
pub trait IReminderRepo: Send + Sync {
    /// Loads every persisted reminder, bootstrapping empty storage on
    /// first use.
    fn find_all(&self) -> anyhow::Result<Vec<Reminder>>;

    /// Replaces the persisted collection wholesale, sorted ascending by
    /// timestamp so that on-disk order mirrors due-order.
    fn save_all(&self, reminders: Vec<Reminder>) -> anyhow::Result<()>;
}
