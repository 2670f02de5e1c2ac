//! Per-day append-only event log stored as CSV:
//!
//! ```text
//! "time","command"
//! 1760770800.123456,"start"
//! 1760781600.5,"break"
//! ```

use crate::errors::{AppError, AppResult};
use crate::models::day_state::DayState;
use crate::models::entry::{LogEntry, RawEntry};
use crate::models::event_kind::EventKind;
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use log::{debug, warn};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

const HEADER: [&str; 2] = ["time", "command"];

#[derive(Debug, Clone)]
pub struct DayLog {
    path: PathBuf,
}

fn writer(file: File, with_header: bool) -> csv::Writer<File> {
    WriterBuilder::new()
        .has_headers(with_header)
        .quote_style(QuoteStyle::NonNumeric)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file)
}

impl DayLog {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create a brand new log holding the header and `first`.
    /// Fails with `DuplicateDay` if the file is already there.
    pub fn create(path: impl Into<PathBuf>, first: &LogEntry) -> AppResult<Self> {
        let log = Self::open(path);
        if let Some(dir) = log.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&log.path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => AppError::DuplicateDay(log.path.clone()),
                _ => AppError::Io(e),
            })?;

        let mut wtr = writer(file, true);
        wtr.serialize(first)?;
        wtr.flush()?;

        debug!("created {} with {:?}", log.path.display(), first);
        Ok(log)
    }

    pub fn append(&self, entry: &LogEntry) -> AppResult<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut wtr = writer(file, false);
        wtr.serialize(entry)?;
        wtr.flush()?;

        debug!("appended {:?} to {}", entry, self.path.display());
        Ok(())
    }

    /// All known rows in file order. The `"time","command"` header is skipped
    /// wherever it appears; a file without one still has every row counted.
    /// Rows with an unknown command are skipped.
    pub fn entries(&self) -> AppResult<Vec<LogEntry>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        let mut out = Vec::new();

        for (idx, row) in rdr.records().enumerate() {
            let record = row?;
            if record.iter().map(str::trim).eq(HEADER) {
                continue;
            }

            let raw: RawEntry = record.deserialize(None)?;
            match EventKind::parse(raw.command.trim()) {
                Some(command) => out.push(LogEntry {
                    time: raw.time,
                    command,
                }),
                None => warn!(
                    "{}: ignoring row {} with unknown command '{}'",
                    self.path.display(),
                    idx + 1,
                    raw.command
                ),
            }
        }

        Ok(out)
    }

    /// Scan the log and count its events.
    pub fn inspect(&self) -> AppResult<DayState> {
        let state = DayState::from_entries(&self.entries()?);
        debug!("{}: {:?}", self.path.display(), state);
        Ok(state)
    }
}
