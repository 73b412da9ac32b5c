use std::env;
use std::path::{Path, PathBuf};

use tracing::warn;

const STORAGE_DIR_ENV: &str = "CRMD_DIR";
const STORAGE_DIR: &str = ".crmd";
const STORAGE_FILE: &str = "reminders.json";

/// Where reminder state lives on disk. Passed into the store explicitly
/// so tests can redirect storage to a temporary location.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the reminders file, created on first use.
    pub storage_dir: PathBuf,
}

impl Config {
    /// Resolves the storage directory: the `CRMD_DIR` environment
    /// variable when set, otherwise `.crmd` under the home directory.
    pub fn new() -> Self {
        let storage_dir = match env::var(STORAGE_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => match dirs::home_dir() {
                Some(home) => home.join(STORAGE_DIR),
                None => {
                    warn!(
                        "Could not resolve a home directory. Storing reminders relative to the working directory."
                    );
                    PathBuf::from(STORAGE_DIR)
                }
            },
        };
        Self { storage_dir }
    }

    pub fn with_storage_dir(dir: &Path) -> Self {
        Self {
            storage_dir: dir.to_path_buf(),
        }
    }

    pub fn storage_file(&self) -> PathBuf {
        self.storage_dir.join(STORAGE_FILE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
