use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "./data/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_pointer_file")]
    pub pointer_file: String,
    #[serde(default = "default_inbox_dir")]
    pub inbox_dir: String,
}

fn default_data_dir() -> String {
    DEFAULT_DATA_DIR.to_string()
}
fn default_pointer_file() -> String {
    ".conf".to_string()
}
fn default_inbox_dir() -> String {
    "inbox".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            pointer_file: default_pointer_file(),
            inbox_dir: default_inbox_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file, or return defaults when no file is given.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(p) => {
                let content = fs::read_to_string(p)?;
                Ok(serde_yaml::from_str(&content)?)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn layout(&self) -> Layout {
        Layout {
            data_dir: expand_tilde(&self.data_dir),
            pointer_file: self.pointer_file.clone(),
            inbox_dir: self.inbox_dir.clone(),
        }
    }
}

/// Every on-disk location, derived from a [`Config`].
#[derive(Debug, Clone)]
pub struct Layout {
    pub data_dir: PathBuf,
    pointer_file: String,
    inbox_dir: String,
}

impl Layout {
    pub fn pointer_path(&self) -> PathBuf {
        self.data_dir.join(&self.pointer_file)
    }

    pub fn inbox(&self) -> PathBuf {
        self.data_dir.join(&self.inbox_dir)
    }

    /// `<data-dir>/inbox/<YYYY>/<MM>`
    pub fn month_dir(&self, date: NaiveDate) -> PathBuf {
        self.inbox()
            .join(format!("{:04}", date.year()))
            .join(format!("{:02}", date.month()))
    }

    /// `<data-dir>/inbox/<YYYY>/<MM>/<DD>.csv`
    pub fn day_log_path(&self, date: NaiveDate) -> PathBuf {
        self.month_dir(date).join(format!("{:02}.csv", date.day()))
    }
}
