use thiserror::Error;

/// Boundary error: every failure surfaces to the user as one printed
/// line plus a process exit code.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CrmdError {
    #[error("an internal error occurred")]
    InternalError,
    #[error("{0}")]
    BadUserInput(String),
    #[error("reminder {0} not found")]
    NotFound(u32),
}

impl CrmdError {
    pub fn exit_code(&self) -> i32 {
        match *self {
            Self::InternalError => 2,
            Self::BadUserInput(_) => 1,
            Self::NotFound(_) => 1,
        }
    }
}
