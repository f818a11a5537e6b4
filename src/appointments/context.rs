use crate::api::SchedulerApi;
use crate::config::SchedulerConfig;
use crate::error::{Result, SchedulerError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct SchedulerContext {
    pub api: SchedulerApi<FileStore>,
    pub home: PathBuf,
    pub data_file: PathBuf,
}

/// The directory relative paths resolve against.
///
/// The front end launches the backend from arbitrary working directories, so
/// the caller's cwd is never used. In order: the explicit home, the directory
/// holding the executable, then the platform data directory.
pub fn resolve_home(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(home) = explicit {
        return Ok(home.to_path_buf());
    }

    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        return Ok(dir);
    }

    let proj_dirs = ProjectDirs::from("com", "appointments", "appointments").ok_or_else(|| {
        SchedulerError::Config("could not determine a home directory".to_string())
    })?;
    let data_dir = proj_dirs.data_dir().to_path_buf();
    fs::create_dir_all(&data_dir).map_err(|e| SchedulerError::storage(&data_dir, e))?;
    Ok(data_dir)
}

pub fn initialize(home: Option<&Path>, data_file: Option<&Path>) -> Result<SchedulerContext> {
    let home = resolve_home(home)?;
    let config = SchedulerConfig::load(&home)?;

    let data_file = match data_file {
        Some(path) => home.join(path),
        None => config.data_path(&home),
    };
    debug!(home = %home.display(), data_file = %data_file.display(), "resolved storage");

    let store = FileStore::new(&data_file);
    let api = SchedulerApi::new(store, config);

    Ok(SchedulerContext {
        api,
        home,
        data_file,
    })
}
