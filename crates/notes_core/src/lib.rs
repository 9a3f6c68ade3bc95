//! Core domain logic for the notes application.
//! Owns the note record, its storage lifecycle and the SQLite adapter.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{now_epoch_ms, Note, NoteId, NoteState};
pub use repo::note_repo::{
    NoteListQuery, NoteRepository, RepoError, RepoResult, SqliteNoteRepository,
};
pub use service::note_service::{NoteService, NoteServiceError, NotesListResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
