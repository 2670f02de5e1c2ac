//! Unified application error type.
//! Every handler returns AppError so that main.rs is the only place
//! where a failure turns into a process exit.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / formats
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Pointer file
    // ---------------------------
    #[error("Pointer file {} does not exist. Run `start` first.", .0.display())]
    ConfigMissing(PathBuf),

    // ---------------------------
    // State machine
    // ---------------------------
    #[error(
        "The previous work day ({}) was never ended. Punch `end` before starting a new day.",
        .0.display()
    )]
    PriorDayUnclosed(PathBuf),

    #[error("A log for this day already exists: {}", .0.display())]
    DuplicateDay(PathBuf),

    #[error("Already clocked out for this day.")]
    AlreadyEnded,

    #[error("A break is still open. Punch `back` first.")]
    UnclosedBreak,

    #[error("No open break to close. Punch `break` first.")]
    MissingBreakStart,

    // ---------------------------
    // Command line
    // ---------------------------
    #[error("'{0}' is not one of start, end, break, back.")]
    UnknownSubcommand(String),

    #[error("Missing command: expected one of start, end, break, back.")]
    MissingSubcommand,

    #[error("{0}")]
    Usage(String),
}

pub type AppResult<T> = Result<T, AppError>;
