//! Which punches are allowed from a given day state.
//!
//! ```text
//! Unopened --start--> Started --break--> OnBreak --back--> Started
//!                     Started --end----> Ended
//! ```

use crate::errors::{AppError, AppResult};
use crate::models::day_state::DayState;
use crate::models::event_kind::EventKind;
use std::path::Path;

/// Check that `kind` may be appended to an already started log in `state`.
///
/// `start` is not judged here. Opening a day goes through
/// [`check_prior_day`] instead.
pub fn check_append(kind: EventKind, state: &DayState) -> AppResult<()> {
    if state.ended {
        return Err(AppError::AlreadyEnded);
    }

    match kind {
        EventKind::End | EventKind::Break => {
            if !state.breaks_balanced() {
                return Err(AppError::UnclosedBreak);
            }
        }
        EventKind::Back => {
            if !state.has_open_break() {
                return Err(AppError::MissingBreakStart);
            }
        }
        EventKind::Start => {}
    }

    Ok(())
}

/// A new day may only start once the previously active log has ended.
pub fn check_prior_day(prior_log: &Path, state: &DayState) -> AppResult<()> {
    if state.ended {
        Ok(())
    } else {
        Err(AppError::PriorDayUnclosed(prior_log.to_path_buf()))
    }
}
