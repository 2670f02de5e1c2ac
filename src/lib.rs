//! rtimeclock library root.
//! Exposes the CLI parser, the high-level run() function and the
//! punch/state machinery so it can be driven without the binary.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use cli::parser::{Cli, Commands, parse_args};
use config::Config;
use errors::AppResult;
use std::ffi::OsString;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Start | Commands::End | Commands::Break | Commands::Back => {
            cli::commands::punch::handle(&cli.command, cfg)
        }
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::Config => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    run_from(std::env::args_os())
}

pub fn run_from<I, T>(args: I) -> AppResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = parse_args(args)?;
    logging::init(cli.verbose);

    let mut cfg = Config::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    log::debug!("effective config: {:?}", cfg);

    dispatch(&cli, &cfg)
}
