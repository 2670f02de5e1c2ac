use crate::errors::{AppError, AppResult};
use crate::models::event_kind::EventKind;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line interface definition for rtimeclock
/// Punch in, out and breaks into per-day CSV logs
#[derive(Parser, Debug)]
#[command(
    name = "rtimeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A tiny time clock: punch start, end, break and back into per-day CSV logs",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (default ./data/)
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Load settings from a YAML file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v debug, -vv trace)
    #[arg(global = true, short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Clock in: open today's log
    Start,

    /// Clock out: close the active log
    End,

    /// Start a break
    Break,

    /// Come back from a break
    Back,

    /// Show the state of the active log
    Status {
        #[arg(long = "json", help = "Print the status as JSON")]
        json: bool,
    },

    /// Print the effective configuration
    Config,
}

impl Commands {
    /// The punch this command records, if any.
    pub fn event_kind(&self) -> Option<EventKind> {
        match self {
            Commands::Start => Some(EventKind::Start),
            Commands::End => Some(EventKind::End),
            Commands::Break => Some(EventKind::Break),
            Commands::Back => Some(EventKind::Back),
            Commands::Status { .. } | Commands::Config => None,
        }
    }
}

/// Parse arguments, turning clap's usage failures into [`AppError`]s.
/// `--help` and `--version` print and exit with 0 as usual.
pub fn parse_args<I, T>(args: I) -> AppResult<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        ErrorKind::InvalidSubcommand => {
            let name = match e.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(s)) => s.clone(),
                _ => String::new(),
            };
            AppError::UnknownSubcommand(name)
        }
        ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            AppError::MissingSubcommand
        }
        _ => AppError::Usage(
            e.to_string()
                .trim_start_matches("error: ")
                .trim_end()
                .to_string(),
        ),
    })
}
