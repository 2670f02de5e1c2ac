use crate::config::Layout;
use crate::core::transition::{check_append, check_prior_day};
use crate::errors::{AppError, AppResult};
use crate::models::day_state::DayState;
use crate::models::entry::LogEntry;
use crate::models::event_kind::EventKind;
use crate::store::{ActiveSession, DayLog, PointerStore};
use chrono::{DateTime, Local};
use log::{debug, info};
use std::path::PathBuf;

/// Result of a successful punch.
#[derive(Debug, Clone)]
pub struct Punched {
    pub kind: EventKind,
    pub log_path: PathBuf,
    pub entry: LogEntry,
    /// Day state after the row was written.
    pub state: DayState,
}

/// High-level business logic for the four punch commands.
pub struct PunchLogic;

impl PunchLogic {
    /// Route `kind` to its handler. `active` is the session resolved from the
    /// pointer file before the call; `at` is the time stamped on the row.
    pub fn apply(
        layout: &Layout,
        pointer: &PointerStore,
        kind: EventKind,
        active: Option<&ActiveSession>,
        at: DateTime<Local>,
    ) -> AppResult<Punched> {
        match kind {
            EventKind::Start => Self::start(layout, pointer, active, at),
            _ => {
                let session =
                    active.ok_or_else(|| AppError::ConfigMissing(pointer.path().to_path_buf()))?;
                Self::append(session, kind, at)
            }
        }
    }

    /// Open a new day log and point the pointer file at it.
    pub fn start(
        layout: &Layout,
        pointer: &PointerStore,
        active: Option<&ActiveSession>,
        at: DateTime<Local>,
    ) -> AppResult<Punched> {
        if let Some(session) = active {
            let prior = DayLog::open(&session.log_path).inspect()?;
            check_prior_day(&session.log_path, &prior)?;
        }

        let log_path = layout.day_log_path(at.date_naive());
        if log_path.exists() {
            return Err(AppError::DuplicateDay(log_path));
        }

        let entry = LogEntry::new(at, EventKind::Start);
        let log = DayLog::create(&log_path, &entry)?;
        pointer.save(log.path())?;

        info!("started new day log {}", log_path.display());

        let mut state = DayState::default();
        state.record(EventKind::Start);
        Ok(Punched {
            kind: EventKind::Start,
            log_path,
            entry,
            state,
        })
    }

    /// Append `end`, `break` or `back` to the active log.
    pub fn append(
        session: &ActiveSession,
        kind: EventKind,
        at: DateTime<Local>,
    ) -> AppResult<Punched> {
        let log = DayLog::open(&session.log_path);
        let mut state = log.inspect()?;
        check_append(kind, &state)?;
        if kind == EventKind::Start {
            // a second start on an open day
            return Err(AppError::PriorDayUnclosed(session.log_path.clone()));
        }

        let entry = LogEntry::new(at, kind);
        log.append(&entry)?;
        state.record(kind);

        debug!("{} -> {:?}", kind, state.phase());
        Ok(Punched {
            kind,
            log_path: session.log_path.clone(),
            entry,
            state,
        })
    }
}
