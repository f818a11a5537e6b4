use super::{RecordStore, StoredRecords};
use crate::error::{Result, SchedulerError};
use crate::format;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub struct FileStore {
    data_file: PathBuf,
}

/// Exclusive lock on the store's lock file; released when dropped.
#[derive(Debug)]
pub struct StoreLock {
    _file: File,
}

impl FileStore {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// `appointments.txt` locks through `appointments.txt.lock`. The lock file
    /// is never renamed, unlike the data file, so every process contends on
    /// the same inode.
    pub fn lock_path(&self) -> PathBuf {
        let mut name = self.data_file.as_os_str().to_owned();
        name.push(".lock");
        PathBuf::from(name)
    }

    fn parent_dir(&self) -> &Path {
        match self.data_file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .data_file
            .file_name()
            .map(|n| n.to_owned())
            .unwrap_or_else(|| OsString::from("appointments"));
        let mut tmp = OsString::from(".");
        tmp.push(file_name);
        tmp.push(format!("-{}.tmp", Uuid::new_v4()));
        self.parent_dir().join(tmp)
    }

    fn storage_err(&self, source: io::Error) -> SchedulerError {
        SchedulerError::storage(&self.data_file, source)
    }

    /// First run: materialize an empty data file. A missing parent directory
    /// is reported rather than created.
    fn create_empty(&self) -> Result<()> {
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.data_file)
            .map_err(|e| self.storage_err(e))?;
        debug!(path = %self.data_file.display(), "created empty data file");
        Ok(())
    }

    fn write_atomically(&self, content: &str) -> io::Result<()> {
        let tmp_path = self.temp_path();

        let written = File::create(&tmp_path).and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        });
        let renamed = written.and_then(|_| fs::rename(&tmp_path, &self.data_file));

        if renamed.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        renamed
    }
}

impl RecordStore for FileStore {
    type Lock = StoreLock;

    fn lock(&self) -> Result<StoreLock> {
        let path = self.lock_path();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| SchedulerError::storage(&path, e))?;
        file.lock().map_err(|e| SchedulerError::storage(&path, e))?;
        debug!(path = %path.display(), "acquired store lock");
        Ok(StoreLock { _file: file })
    }

    fn load(&self) -> Result<StoredRecords> {
        let content = match fs::read_to_string(&self.data_file) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.create_empty()?;
                String::new()
            }
            Err(e) => return Err(self.storage_err(e)),
        };

        let outcome = format::parse_stored(&content);
        for block in &outcome.malformed {
            warn!(
                path = %self.data_file.display(),
                block = block.position,
                reason = %block.reason,
                "skipping malformed record"
            );
        }
        debug!(count = outcome.records.len(), "loaded appointments");
        Ok(StoredRecords {
            records: outcome.records,
            unparsed: outcome.malformed.into_iter().map(|b| b.raw).collect(),
        })
    }

    fn save(&mut self, stored: &StoredRecords) -> Result<()> {
        let content = format::serialize_with_raw(&stored.records, &stored.unparsed);
        self.write_atomically(&content)
            .map_err(|e| self.storage_err(e))?;
        debug!(
            count = stored.records.len(),
            unparsed = stored.unparsed.len(),
            "saved appointments"
        );
        Ok(())
    }
}
