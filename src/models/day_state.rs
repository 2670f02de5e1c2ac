use super::entry::LogEntry;
use super::event_kind::EventKind;
use serde::Serialize;
use std::fmt;

/// Counts gathered from a day log. Only counts are tracked: a `back`
/// written before its `break` goes unnoticed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayState {
    pub started: bool,
    pub ended: bool,
    pub breaks: usize,
    pub backs: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Unopened,
    Started,
    OnBreak,
    Ended,
    /// More breaks than backs + 1, or more backs than breaks.
    Inconsistent,
}

impl DayState {
    pub fn from_entries(entries: &[LogEntry]) -> Self {
        let mut state = DayState::default();
        for e in entries {
            state.record(e.command);
        }
        state
    }

    pub fn record(&mut self, kind: EventKind) {
        match kind {
            EventKind::Start => self.started = true,
            EventKind::End => self.ended = true,
            EventKind::Break => self.breaks += 1,
            EventKind::Back => self.backs += 1,
        }
    }

    pub fn has_open_break(&self) -> bool {
        self.breaks == self.backs + 1
    }

    pub fn breaks_balanced(&self) -> bool {
        self.breaks == self.backs
    }

    pub fn phase(&self) -> Phase {
        if self.ended {
            Phase::Ended
        } else if !self.started {
            Phase::Unopened
        } else if self.has_open_break() {
            Phase::OnBreak
        } else if self.breaks_balanced() {
            Phase::Started
        } else {
            Phase::Inconsistent
        }
    }

    /// `(started, ended, breaks, backs)`
    pub fn as_tuple(&self) -> (bool, bool, usize, usize) {
        (self.started, self.ended, self.breaks, self.backs)
    }
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Unopened => "unopened",
            Phase::Started => "started",
            Phase::OnBreak => "on_break",
            Phase::Ended => "ended",
            Phase::Inconsistent => "inconsistent",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
