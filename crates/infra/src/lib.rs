mod config;
mod repos;
mod system;

use std::sync::Arc;

pub use config::Config;
pub use repos::{FileReminderRepo, IReminderRepo, InMemoryReminderRepo, Repos};
pub use system::{ISys, RealSys};

/// Shared dependencies handed to every usecase: storage, configuration
/// and the clock.
#[derive(Clone)]
pub struct Context {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl Context {
    pub fn create(config: Config) -> Self {
        let repos = Repos::create_file(&config);
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> Context {
    Context::create(Config::new())
}
