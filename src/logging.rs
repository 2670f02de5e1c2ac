//! env_logger setup. Records go to stderr; user-facing output does not use this.

use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Initialize logging based on the `-v` count. `RUST_LOG` wins when set.
pub fn init(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let _ = Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
