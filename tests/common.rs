#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use rtimeclock::config::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The binary, run with `dir` as its working directory so the default
/// `./data/` lands inside the sandbox.
pub fn rtc(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rtimeclock");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

pub fn sandbox() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Config rooted in the sandbox.
pub fn config_in(dir: &Path) -> Config {
    Config {
        data_dir: dir.join("data").to_string_lossy().to_string(),
        ..Config::default()
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("unambiguous local time")
}

/// Path stored in the pointer file, resolved against the sandbox.
pub fn pointed_log(dir: &Path) -> PathBuf {
    let raw = fs::read_to_string(dir.join("data").join(".conf")).expect("read pointer");
    let p = PathBuf::from(raw.lines().next().unwrap_or_default());
    if p.is_absolute() { p } else { dir.join(p) }
}

/// Commands column of a day log, header excluded.
pub fn commands_in(log: &Path) -> Vec<String> {
    fs::read_to_string(log)
        .expect("read day log")
        .lines()
        .skip(1)
        .map(|l| l.rsplit(',').next().unwrap_or_default().trim_matches('"').to_string())
        .collect()
}
