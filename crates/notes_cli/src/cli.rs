use clap::{Parser, Subcommand};
use notes_core::NoteId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notes")]
#[command(version, about = "Keep notes in a local SQLite database")]
#[command(propagate_version = true)]
pub struct Cli {
    /// SQLite database file
    #[arg(long, env = "NOTES_DB_PATH", global = true)]
    pub db: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "NOTES_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "NOTES_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new note
    Add {
        /// Note title
        #[arg(long, short = 't')]
        title: String,

        /// Note body
        #[arg(long, short = 'c', default_value = "")]
        content: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes in creation order
    List {
        /// Maximum number of notes to print
        #[arg(long)]
        limit: Option<u32>,

        /// Number of notes to skip
        #[arg(long, default_value_t = 0)]
        offset: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one note
    Show {
        id: NoteId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace the title and/or content of a note
    Edit {
        id: NoteId,

        /// New title (kept when omitted)
        #[arg(long, short = 't')]
        title: Option<String>,

        /// New content (kept when omitted)
        #[arg(long, short = 'c')]
        content: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete { id: NoteId },
}
