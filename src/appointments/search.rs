use crate::model::Appointment;

/// Case-insensitive substring match across every field.
///
/// An empty fragment matches everything. The result keeps the source order.
pub fn filter(records: &[Appointment], fragment: &str) -> Vec<Appointment> {
    let term = fragment.trim().to_lowercase();
    if term.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| matches(record, &term))
        .cloned()
        .collect()
}

fn matches(record: &Appointment, term_lower: &str) -> bool {
    record
        .fields()
        .iter()
        .any(|(_, value)| value.to_lowercase().contains(term_lower))
}
