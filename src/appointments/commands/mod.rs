use crate::model::Appointment;

pub mod add;
pub mod delete;
pub mod list;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What a command reports back. Logical outcomes such as "not found" or a
/// booking conflict are messages here, not errors.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created or removed by the command.
    pub affected: Vec<Appointment>,
    /// Records selected for display.
    pub listed: Vec<Appointment>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_affected(mut self, records: Vec<Appointment>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<Appointment>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
