use serde::{Deserialize, Serialize};
use std::fmt;

/// The four punches a day log can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Start,
    End,
    Break,
    Back,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Start,
        EventKind::End,
        EventKind::Break,
        EventKind::Back,
    ];

    /// Parse a command name as written in the log (`"start"`, `"break"`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            "break" => Some(Self::Break),
            "back" => Some(Self::Back),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Start => "start",
            EventKind::End => "end",
            EventKind::Break => "break",
            EventKind::Back => "back",
        }
    }

    /// Past-tense label used in confirmation messages.
    pub fn done_label(&self) -> &'static str {
        match self {
            EventKind::Start => "Clocked in",
            EventKind::End => "Clocked out",
            EventKind::Break => "Break started",
            EventKind::Back => "Back from break",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
