//! # Block Format
//!
//! The text format shared by `list` output and the persisted data file:
//!
//! ```text
//! Client: Alice
//! Service: Therapy
//! Staff: Dr. Lee
//! Date: 2024-06-01 | Time: 09:00
//! --------------------------
//! ```
//!
//! Every block is terminated by the divider line. An empty listing is the
//! literal [`EMPTY_LISTING`] with no blocks.
//!
//! The front end parses this output positionally, so the line order, the
//! label prefixes and the divider are a fixed contract. [`parse`] follows the
//! same rules the front end does, which makes it the canonical reader for the
//! data file as well.

use crate::model::Appointment;
use std::fmt::Write;

pub const DIVIDER: &str = "--------------------------";
pub const EMPTY_LISTING: &str = "No appointments found";

const TIME_TOKEN: &str = "| Time:";
const MIN_BLOCK_LINES: usize = 4;

/// A block that was dropped while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedBlock {
    /// 1-based position of the block in the input.
    pub position: usize,
    pub reason: String,
    /// The block's non-blank lines, trimmed and newline-joined.
    pub raw: String,
}

#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub records: Vec<Appointment>,
    pub malformed: Vec<MalformedBlock>,
}

/// Renders records as blocks. Returns an empty string for no records; callers
/// that need the user-facing listing use [`render_listing`].
pub fn serialize(records: &[Appointment]) -> String {
    let mut out = String::new();
    for record in records {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "Client: {}\nService: {}\nStaff: {}\nDate: {} | Time: {}\n{}\n",
            record.client, record.service, record.staff, record.date, record.time, DIVIDER
        );
    }
    out
}

pub fn render_listing(records: &[Appointment]) -> String {
    if records.is_empty() {
        EMPTY_LISTING.to_string()
    } else {
        serialize(records)
    }
}

/// Parses a listing the way the front end does.
pub fn parse(text: &str) -> ParseOutcome {
    parse_with(text, |_| Ok(()))
}

/// Parses the data file. On top of the listing rules, a stored record must
/// carry a client and a date; `time` may be empty when `| Time:` is absent.
pub fn parse_stored(text: &str) -> ParseOutcome {
    parse_with(text, |record| {
        if record.client.is_empty() {
            Err("client is empty".to_string())
        } else if record.date.is_empty() {
            Err("date is empty".to_string())
        } else {
            Ok(())
        }
    })
}

fn parse_with<F>(text: &str, accept: F) -> ParseOutcome
where
    F: Fn(&Appointment) -> Result<(), String>,
{
    let mut outcome = ParseOutcome::default();

    for (i, block) in split_blocks(text).into_iter().enumerate() {
        match parse_block(&block).and_then(|record| accept(&record).map(|_| record)) {
            Ok(record) => outcome.records.push(record),
            Err(reason) => outcome.malformed.push(MalformedBlock {
                position: i + 1,
                reason,
                raw: block.join("\n"),
            }),
        }
    }

    outcome
}

/// Renders records followed by retained raw blocks, each terminated by the
/// divider like any other block.
pub fn serialize_with_raw(records: &[Appointment], raw_blocks: &[String]) -> String {
    let mut out = serialize(records);
    for raw in raw_blocks {
        let _ = write!(out, "{}\n{}\n", raw, DIVIDER);
    }
    out
}

/// Groups trimmed, non-blank lines into blocks at each divider line.
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in text.lines().map(str::trim) {
        if line == DIVIDER {
            blocks.push(std::mem::take(&mut current));
        } else if !line.is_empty() {
            current.push(line);
        }
    }
    blocks.push(current);

    // Empty groups come from leading, trailing or doubled dividers and are
    // not blocks at all.
    blocks.retain(|b| !b.is_empty());
    blocks
}

fn parse_block(lines: &[&str]) -> Result<Appointment, String> {
    if lines.len() < MIN_BLOCK_LINES {
        return Err(format!(
            "expected at least {} lines, found {}",
            MIN_BLOCK_LINES,
            lines.len()
        ));
    }

    let client = field_value(lines[0])?;
    let service = field_value(lines[1])?;
    let staff = field_value(lines[2])?;
    let date_time = field_value(lines[3])?;

    let (date, time) = match date_time.split_once(TIME_TOKEN) {
        Some((date, time)) => (date.trim(), time.trim()),
        None => (date_time.trim(), ""),
    };

    Ok(Appointment {
        client: client.to_string(),
        service: service.to_string(),
        staff: staff.to_string(),
        date: date.to_string(),
        time: time.to_string(),
    })
}

/// Value after the first `": "`. Lines are trimmed before this point, so a
/// label with an empty value arrives as `"Service:"`.
fn field_value(line: &str) -> Result<&str, String> {
    if let Some((_, value)) = line.split_once(": ") {
        return Ok(value.trim());
    }
    if line.ends_with(':') {
        return Ok("");
    }
    Err(format!("line '{}' has no field label", line))
}
