//! Command execution over the note service.
//!
//! # Responsibility
//! - Open storage, dispatch one parsed command, render its result.
//! - Keep rendering separate from `main` so it can run against any writer.

use crate::cli::Command;
use crate::config::CliConfig;
use chrono::{DateTime, Utc};
use log::info;
use notes_core::db::{open_db, DbError};
use notes_core::{
    Note, NoteId, NoteRepository, NoteService, NoteServiceError, RepoError, SqliteNoteRepository,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;

#[derive(Debug)]
pub enum CliError {
    Db(DbError),
    Repo(RepoError),
    Service(NoteServiceError),
    NoteNotFound(NoteId),
    Json(serde_json::Error),
    Io(std::io::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "database error: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Service(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Json(err) => write!(f, "failed to encode JSON: {err}"),
            Self::Io(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Service(err) => Some(err),
            Self::NoteNotFound(_) => None,
            Self::Json(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<NoteServiceError> for CliError {
    fn from(value: NoteServiceError) -> Self {
        match value {
            NoteServiceError::NoteNotFound(id) => Self::NoteNotFound(id),
            other => Self::Service(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Opens the configured database and runs `command`, printing to stdout.
pub fn run(config: &CliConfig, command: Command) -> Result<(), CliError> {
    let conn = open_db(&config.db_path)?;
    info!(
        "event=cli_command module=cli status=start db_path={}",
        config.db_path.display()
    );
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn)?);
    let stdout = std::io::stdout();
    execute(&service, command, &mut stdout.lock())
}

/// Runs one command against `service`, rendering into `out`.
pub fn execute<R: NoteRepository>(
    service: &NoteService<R>,
    command: Command,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Command::Add {
            title,
            content,
            json,
        } => {
            let note = service.create_note(title, content)?;
            render_note(out, &note, json)
        }
        Command::List {
            limit,
            offset,
            json,
        } => {
            let listed = service.list_notes(limit, offset)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&listed)?)?;
                return Ok(());
            }
            if listed.items.is_empty() {
                writeln!(out, "No notes.")?;
                return Ok(());
            }
            for note in &listed.items {
                writeln!(out, "{}", summary_line(note))?;
            }
            writeln!(out, "{} of {} note(s).", listed.items.len(), listed.total)?;
            Ok(())
        }
        Command::Show { id, json } => {
            let note = service.get_note(id)?.ok_or(CliError::NoteNotFound(id))?;
            render_note(out, &note, json)
        }
        Command::Edit {
            id,
            title,
            content,
            json,
        } => {
            let current = service.get_note(id)?.ok_or(CliError::NoteNotFound(id))?;
            let title = title.or_else(|| current.title().map(str::to_string));
            let content = content.or_else(|| current.content().map(str::to_string));
            let note = service.update_note(id, title, content)?;
            render_note(out, &note, json)
        }
        Command::Delete { id } => {
            service.delete_note(id)?;
            writeln!(out, "Deleted note {id}.")?;
            Ok(())
        }
    }
}

fn render_note(out: &mut impl Write, note: &Note, json: bool) -> Result<(), CliError> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(note)?)?;
        return Ok(());
    }

    writeln!(out, "{}", summary_line(note))?;
    if let Some(content) = note.content().filter(|content| !content.is_empty()) {
        writeln!(out)?;
        writeln!(out, "{content}")?;
    }
    Ok(())
}

fn summary_line(note: &Note) -> String {
    let id = note
        .id()
        .map_or_else(|| "-".to_string(), |id| id.to_string());
    let created_at = note
        .created_at()
        .map_or_else(|| "-".to_string(), format_created_at);
    format!("#{id} {} (created {created_at})", note.title().unwrap_or(""))
}

/// Renders epoch milliseconds as a UTC date; out-of-range values stay raw.
fn format_created_at(epoch_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms).map_or_else(
        || format!("{epoch_ms}ms"),
        |at| at.format("%Y-%m-%d %H:%M UTC").to_string(),
    )
}
