use serde::Serialize;

use crate::modules::time_logs::core::time_log_entry::TimeLogEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeLogEntryView {
    pub id: i64,
    pub timestamp: String,
}

impl From<TimeLogEntry> for TimeLogEntryView {
    fn from(entry: TimeLogEntry) -> Self {
        Self {
            id: entry.id,
            timestamp: entry.timestamp.to_rfc3339(),
        }
    }
}
