//! Runtime settings resolved from flags and environment.
//!
//! # Invariants
//! - Blank values count as unset.
//! - Without an explicit database path the CLI uses a fixed file in the
//!   system temp directory.

use crate::cli::Cli;
use std::path::{Path, PathBuf};

const DEFAULT_DB_FILE_NAME: &str = "notes.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let db_path = cli
            .db
            .as_deref()
            .and_then(non_blank_path)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_level = cli
            .log_level
            .as_deref()
            .map(str::trim)
            .filter(|level| !level.is_empty())
            .unwrap_or_else(|| notes_core::default_log_level())
            .to_string();
        let log_dir = cli.log_dir.as_deref().and_then(non_blank_path);

        Self {
            db_path,
            log_level,
            log_dir,
        }
    }
}

fn non_blank_path(path: &Path) -> Option<PathBuf> {
    let raw = path.to_string_lossy();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}
