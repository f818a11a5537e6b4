use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid appointment: {0}")]
    InvalidRecord(String),

    #[error("Storage unavailable ({}): {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl SchedulerError {
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SchedulerError::StorageUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Malformed invocations exit with 2, everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            SchedulerError::Usage(_) | SchedulerError::InvalidRecord(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
