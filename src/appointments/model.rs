use crate::error::{Result, SchedulerError};
use crate::format::DIVIDER;
use chrono::{NaiveDate, NaiveTime};
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// A single appointment record.
///
/// `service` and `staff` are free text: the front end offers a fixed set of
/// labels but the backend never checks membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub client: String,
    pub service: String,
    pub staff: String,
    pub date: String,
    pub time: String,
}

impl Appointment {
    /// Builds a record for storage, trimming every field and rejecting
    /// anything that would not survive the block format.
    pub fn new(
        client: impl AsRef<str>,
        service: impl AsRef<str>,
        staff: impl AsRef<str>,
        date: impl AsRef<str>,
        time: impl AsRef<str>,
    ) -> Result<Self> {
        let appointment = Self {
            client: client.as_ref().trim().to_string(),
            service: service.as_ref().trim().to_string(),
            staff: staff.as_ref().trim().to_string(),
            date: date.as_ref().trim().to_string(),
            time: time.as_ref().trim().to_string(),
        };
        appointment.validate()?;
        Ok(appointment)
    }

    pub fn validate(&self) -> Result<()> {
        for (label, value) in self.fields() {
            check_single_line(label, value)?;
        }

        if self.client.is_empty() {
            return Err(SchedulerError::InvalidRecord(
                "client name cannot be empty".to_string(),
            ));
        }
        check_date(&self.date)?;
        check_time(&self.time)?;
        Ok(())
    }

    pub fn key(&self) -> AppointmentKey {
        AppointmentKey {
            client: self.client.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
        }
    }

    /// Exact, case-sensitive comparison on the `(client, date, time)` triple.
    pub fn matches(&self, key: &AppointmentKey) -> bool {
        self.client == key.client && self.date == key.date && self.time == key.time
    }

    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("client", &self.client),
            ("service", &self.service),
            ("staff", &self.staff),
            ("date", &self.date),
            ("time", &self.time),
        ]
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} with {}) on {} at {}",
            self.client, self.service, self.staff, self.date, self.time
        )
    }
}

/// The composite identity used by `delete`.
///
/// Not unique: two records may share a key and differ only in service or
/// staff. Deletion removes the first one in storage order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentKey {
    pub client: String,
    pub date: String,
    pub time: String,
}

impl AppointmentKey {
    pub fn new(client: impl AsRef<str>, date: impl AsRef<str>, time: impl AsRef<str>) -> Self {
        Self {
            client: client.as_ref().trim().to_string(),
            date: date.as_ref().trim().to_string(),
            time: time.as_ref().trim().to_string(),
        }
    }
}

impl fmt::Display for AppointmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {} at {}", self.client, self.date, self.time)
    }
}

fn check_single_line(label: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(SchedulerError::InvalidRecord(format!(
            "{} must be a single line",
            label
        )));
    }
    if value.contains(DIVIDER) {
        return Err(SchedulerError::InvalidRecord(format!(
            "{} cannot contain the block divider",
            label
        )));
    }
    Ok(())
}

// chrono accepts unpadded numbers, so the parsed value is formatted back and
// compared to keep stored dates and times canonical.
fn check_date(date: &str) -> Result<()> {
    let canonical = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .ok();
    if canonical.as_deref() != Some(date) {
        return Err(SchedulerError::InvalidRecord(format!(
            "date '{}' is not in YYYY-MM-DD form",
            date
        )));
    }
    Ok(())
}

fn check_time(time: &str) -> Result<()> {
    let canonical = NaiveTime::parse_from_str(time, TIME_FORMAT)
        .map(|t| t.format(TIME_FORMAT).to_string())
        .ok();
    if canonical.as_deref() != Some(time) {
        return Err(SchedulerError::InvalidRecord(format!(
            "time '{}' is not in 24-hour HH:MM form",
            time
        )));
    }
    Ok(())
}
