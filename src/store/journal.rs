use chrono::Local;
use serde::Serialize;

/// One line of the internal operation log.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: usize,
    pub date: String, // ISO 8601, local time
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append-only, in-memory operation log. Lives as long as the store.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one log line.
    pub fn push(&mut self, operation: &str, target: &str, message: &str) {
        let id = self.entries.len() + 1;
        self.entries.push(JournalEntry {
            id,
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&JournalEntry> {
        self.entries.last()
    }
}
