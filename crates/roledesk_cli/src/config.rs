//! Resolved runtime settings for the `roledesk` binary.

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "roledesk.sqlite3";
const APP_DIR_NAME: &str = "roledesk";
const LOG_DIR_NAME: &str = "logs";

/// Paths and levels after applying flags, environment and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl CliConfig {
    /// Relative directories are anchored at the current working directory.
    pub fn resolve(
        data_dir: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        log_level: Option<String>,
    ) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => absolute(&dir)?,
            None => dirs::data_local_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or_else(|| anyhow!("no local data directory; set ROLEDESK_DATA_DIR"))?,
        };
        let log_dir = match log_dir {
            Some(dir) => absolute(&dir)?,
            None => data_dir.join(LOG_DIR_NAME),
        };
        let log_level =
            log_level.unwrap_or_else(|| roledesk_core::default_log_level().to_string());

        Ok(Self {
            db_path: data_dir.join(DB_FILE_NAME),
            data_dir,
            log_dir,
            log_level,
        })
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(cwd.join(path))
}
