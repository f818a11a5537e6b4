//! # API Facade
//!
//! The single entry point for appointment operations. Each method is one
//! transaction against the store:
//!
//! 1. take the store lock,
//! 2. hand the store to the command, which loads, mutates and saves,
//! 3. drop the lock.
//!
//! Commands hold the business logic; the facade only owns the transaction
//! boundary and the configuration that shapes command behavior. Nothing here
//! writes to stdout or decides exit codes.
//!
//! `SchedulerApi<S: RecordStore>` is generic so the same facade runs over
//! `FileStore` in production and `InMemoryStore` in tests.

use crate::commands::{self, CmdResult};
use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::model::{Appointment, AppointmentKey};
use crate::store::RecordStore;
use tracing::debug;

pub struct SchedulerApi<S: RecordStore> {
    store: S,
    config: SchedulerConfig,
}

impl<S: RecordStore> SchedulerApi<S> {
    pub fn new(store: S, config: SchedulerConfig) -> Self {
        Self { store, config }
    }

    pub fn add(
        &mut self,
        client: &str,
        service: &str,
        staff: &str,
        date: &str,
        time: &str,
    ) -> Result<CmdResult> {
        let appointment = Appointment::new(client, service, staff, date, time)?;
        let options = commands::add::AddOptions {
            reject_staff_conflicts: self.config.reject_staff_conflicts,
        };

        let _lock = self.store.lock()?;
        debug!(client = %appointment.client, "add");
        commands::add::run(&mut self.store, appointment, options)
    }

    pub fn list(&self, fragment: Option<&str>) -> Result<CmdResult> {
        let fragment = fragment.unwrap_or_default();

        let _lock = self.store.lock()?;
        debug!(fragment, "list");
        commands::list::run(&self.store, fragment)
    }

    pub fn delete(&mut self, client: &str, date: &str, time: &str) -> Result<CmdResult> {
        let key = AppointmentKey::new(client, date, time);

        let _lock = self.store.lock()?;
        debug!(key = %key, "delete");
        commands::delete::run(&mut self.store, &key)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};
