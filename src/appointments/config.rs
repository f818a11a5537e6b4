use crate::error::{Result, SchedulerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "appointments.txt";

/// Backend configuration, read from `config.json` in the backend's home
/// directory. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Record file, relative to the home directory unless absolute
    pub data_file: PathBuf,

    /// Refuse to book a staff member twice for the same date and time
    pub reject_staff_conflicts: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            reject_staff_conflicts: false,
        }
    }
}

impl SchedulerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            SchedulerError::Config(format!("cannot read {}: {}", config_path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            SchedulerError::Config(format!("cannot parse {}: {}", config_path.display(), e))
        })
    }

    /// The data file, resolved against `home` when relative.
    pub fn data_path(&self, home: &Path) -> PathBuf {
        home.join(&self.data_file)
    }
}
