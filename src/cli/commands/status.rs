use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::errors::AppResult;
use crate::models::day_state::Phase;
use crate::store::PointerStore;
use crate::ui::messages::{info, warning};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Status { json } = cmd else {
        return Ok(());
    };

    let pointer = PointerStore::new(&cfg.layout());
    let Some(session) = pointer.load()? else {
        if *json {
            println!("null");
        } else {
            info("No active log. Punch `start` to open one.");
        }
        return Ok(());
    };

    let report = StatusLogic::build(&session, Local::now())?;

    if *json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    StatusLogic::print(&report);
    if report.phase == Phase::Inconsistent {
        warning("Break and back punches do not pair up in this log.");
    }
    Ok(())
}
