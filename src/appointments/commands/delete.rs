use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AppointmentKey;
use crate::store::RecordStore;

/// Removes the first record matching `key`. Records sharing the key but
/// differing in service or staff are left in place.
pub fn run<S: RecordStore>(store: &mut S, key: &AppointmentKey) -> Result<CmdResult> {
    let mut stored = store.load()?;

    let Some(pos) = stored.records.iter().position(|r| r.matches(key)) else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Appointment not found: {}",
            key
        ))));
    };

    let removed = stored.records.remove(pos);
    store.save(&stored)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Appointment deleted: {}",
            removed
        )))
        .with_affected(vec![removed]))
}
