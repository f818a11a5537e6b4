use super::{RecordStore, StoredRecords};
use crate::error::{Result, SchedulerError};
use crate::model::Appointment;
use std::io;

/// In-memory storage for testing. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    stored: StoredRecords,
    saves: usize,
    unavailable: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, for exercising abort paths.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn records(&self) -> &[Appointment] {
        &self.stored.records
    }

    pub fn unparsed(&self) -> &[String] {
        &self.stored.unparsed
    }

    /// Number of times `save` succeeded.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            return Err(SchedulerError::storage(
                "<memory>",
                io::Error::new(io::ErrorKind::PermissionDenied, "store marked unavailable"),
            ));
        }
        Ok(())
    }
}

impl RecordStore for InMemoryStore {
    type Lock = ();

    fn lock(&self) -> Result<()> {
        self.check()
    }

    fn load(&self) -> Result<StoredRecords> {
        self.check()?;
        Ok(self.stored.clone())
    }

    fn save(&mut self, stored: &StoredRecords) -> Result<()> {
        self.check()?;
        self.stored = stored.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---
