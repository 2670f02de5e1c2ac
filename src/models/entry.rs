use super::event_kind::EventKind;
use crate::utils::time::{epoch_seconds, from_epoch_seconds};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One row of a day log: `<unix-epoch-float>,"<command>"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub time: f64,          // ⇔ "time" column, seconds since epoch
    pub command: EventKind, // ⇔ "command" column
}

/// Row as read back from disk. The command stays a raw string so that
/// unknown commands can be skipped instead of failing the whole file.
#[derive(Debug, Deserialize)]
pub(crate) struct RawEntry {
    pub time: f64,
    pub command: String,
}

impl LogEntry {
    pub fn new(at: DateTime<Local>, command: EventKind) -> Self {
        Self {
            time: epoch_seconds(at),
            command,
        }
    }

    pub fn timestamp(&self) -> Option<DateTime<Local>> {
        from_epoch_seconds(self.time)
    }
}
