//! # Storage Layer
//!
//! Every invocation of the backend is its own process, so nothing survives in
//! memory between commands. A command is one transaction against the store:
//!
//! ```text
//! lock ─► load ─► mutate ─► save (only if changed) ─► unlock
//! ```
//!
//! The [`RecordStore`] trait exposes exactly those steps; the API layer
//! strings them together.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - Records live in one plain text file in the block format (see `format`)
//!   - Blocks that do not parse are kept verbatim after the records
//!   - Saves are atomic: write a temp file in the same directory, then rename
//!   - An exclusive advisory lock on `<data file>.lock` serializes invocations
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Concurrency
//!
//! The lock is advisory. Two invocations of this backend cannot interleave
//! their load/save, but anything that writes the data file without taking the
//! lock (an editor, a second copy of the backend pointed at a different lock
//! path) can still race with it and lose an update.

use crate::error::Result;
use crate::model::Appointment;

pub mod fs;
pub mod memory;

/// The stored collection as loaded.
///
/// Blocks that fail to parse are not records, but they are still somebody's
/// data: `unparsed` keeps their raw text so a later save writes them back
/// instead of dropping them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredRecords {
    pub records: Vec<Appointment>,
    pub unparsed: Vec<String>,
}

impl StoredRecords {
    pub fn new(records: Vec<Appointment>) -> Self {
        Self {
            records,
            unparsed: Vec::new(),
        }
    }
}

pub trait RecordStore {
    /// Held for the duration of a transaction; released on drop.
    type Lock;

    /// Acquire exclusive access to the stored collection. Blocks until granted.
    fn lock(&self) -> Result<Self::Lock>;

    /// Read the full collection in storage order.
    fn load(&self) -> Result<StoredRecords>;

    /// Replace the full collection, unparsed blocks included. Never leaves a
    /// partial write visible to a later `load`.
    fn save(&mut self, stored: &StoredRecords) -> Result<()>;
}
