use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Appointment;
use crate::store::RecordStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct AddOptions {
    /// Refuse a record whose staff member is already booked at the same date
    /// and time.
    pub reject_staff_conflicts: bool,
}

pub fn run<S: RecordStore>(
    store: &mut S,
    appointment: Appointment,
    options: AddOptions,
) -> Result<CmdResult> {
    appointment.validate()?;
    let mut stored = store.load()?;

    if options.reject_staff_conflicts {
        if let Some(existing) = stored
            .records
            .iter()
            .find(|r| books_same_slot(r, &appointment))
        {
            return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
                "Conflict: {} is already booked on {} at {}.",
                existing.staff, existing.date, existing.time
            ))));
        }
    }

    stored.records.push(appointment.clone());
    store.save(&stored)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Appointment added: {}",
            appointment
        )))
        .with_affected(vec![appointment]))
}

fn books_same_slot(a: &Appointment, b: &Appointment) -> bool {
    a.staff == b.staff && a.date == b.date && a.time == b.time
}
