use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use crmd_domain::Reminder;
use tracing::debug;

use super::IReminderRepo;

/// JSON-file backed reminder store.
///
/// Two invocations racing on the same file are last-write-wins over the
/// whole collection, which is acceptable for a single-user tool.
pub struct FileReminderRepo {
    path: PathBuf,
}

impl FileReminderRepo {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn bootstrap(&self) -> anyhow::Result<()> {
        if self.path.is_file() {
            return Ok(());
        }
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).with_context(|| {
                format!("could not create storage directory {}", dir.display())
            })?;
        }
        debug!(
            "Bootstrapping empty reminder storage at {}",
            self.path.display()
        );
        fs::write(&self.path, "[]\n")
            .with_context(|| format!("could not create storage file {}", self.path.display()))
    }
}

impl IReminderRepo for FileReminderRepo {
    fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        self.bootstrap()?;
        let bytes = fs::read(&self.path)
            .with_context(|| format!("could not read storage file {}", self.path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| {
            format!(
                "storage file {} does not contain a valid reminder collection",
                self.path.display()
            )
        })
    }

    fn save_all(&self, mut reminders: Vec<Reminder>) -> anyhow::Result<()> {
        reminders.sort_by_key(|r| r.timestamp);
        // Serialize fully in memory before touching the file, so an
        // encode failure never clobbers existing state.
        let bytes = serde_json::to_vec(&reminders).context("could not encode reminders")?;
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).with_context(|| {
                format!("could not create storage directory {}", dir.display())
            })?;
        }
        fs::write(&self.path, bytes)
            .with_context(|| format!("could not write storage file {}", self.path.display()))
    }
}
