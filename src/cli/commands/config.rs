use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Config) {
        let layout = cfg.layout();
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
        println!("# pointer file: {}", layout.pointer_path().display());
        println!("# inbox:        {}", layout.inbox().display());
    }
    Ok(())
}
