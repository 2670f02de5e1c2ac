//! The pointer file: a single line naming the currently active day log.

use crate::config::Layout;
use crate::errors::{AppError, AppResult};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The day log the pointer file currently refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    pub log_path: PathBuf,
}

pub struct PointerStore {
    path: PathBuf,
}

impl PointerStore {
    pub fn new(layout: &Layout) -> Self {
        Self {
            path: layout.pointer_path(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the active session. `Ok(None)` when no pointer file exists yet.
    pub fn load(&self) -> AppResult<Option<ActiveSession>> {
        if !self.path.is_file() {
            debug!("no pointer file at {}", self.path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let first = content.lines().next().unwrap_or("").trim_end();
        if first.is_empty() {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("pointer file {} is empty", self.path.display()),
            )));
        }

        debug!("pointer {} -> {}", self.path.display(), first);
        Ok(Some(ActiveSession {
            log_path: PathBuf::from(first),
        }))
    }

    /// Point at `log_path`. Written without a trailing newline.
    pub fn save(&self, log_path: &Path) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, log_path.to_string_lossy().as_bytes())?;
        debug!("pointer {} updated -> {}", self.path.display(), log_path.display());
        Ok(())
    }
}
