use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::errors::{AppError, AppResult};
use crate::store::PointerStore;
use crate::ui::messages::success;
use crate::utils::time::format_clock;
use chrono::Local;

/// Handle `start`, `end`, `break` and `back`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let kind = cmd
        .event_kind()
        .ok_or_else(|| AppError::Usage(format!("{cmd:?} is not a punch command")))?;

    let layout = cfg.layout();
    let pointer = PointerStore::new(&layout);

    // resolved once, then handed to the handler
    let active = pointer.load()?;

    let now = Local::now();
    let punched = PunchLogic::apply(&layout, &pointer, kind, active.as_ref(), now)?;

    success(format!(
        "{} at {} ({})",
        punched.kind.done_label(),
        format_clock(now),
        punched.log_path.display()
    ));
    Ok(())
}
