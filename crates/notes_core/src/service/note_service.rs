//! Note use-case service.
//!
//! # Responsibility
//! - Provide create/get/list/update/delete APIs over a `NoteRepository`.
//! - Translate repository not-found results into service errors.
//!
//! # Invariants
//! - `update_note` replaces title and content together; `created_at` stays.
//! - Service APIs never bypass the repository save lifecycle.
//! - Title/content are passed through unvalidated.

use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::{NoteListQuery, NoteRepository, RepoError, RepoResult};
use log::{debug, info};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// List result envelope used by service callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotesListResult {
    /// Page items sorted by `id ASC`.
    pub items: Vec<Note>,
    /// Total number of stored notes, independent of paging.
    pub total: u64,
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and saves one note, returning the stored row.
    pub fn create_note(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Note, NoteServiceError> {
        let mut note = Note::with_text(title, content);
        let id = self.repo.save(&mut note)?;
        info!("event=note_create module=service status=ok note_id={id}");

        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::InconsistentState(
                "created note not found in read-back",
            ))
    }

    /// Gets one note by id.
    pub fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        self.repo.get_note(id)
    }

    /// Lists one page of notes plus the total count.
    pub fn list_notes(
        &self,
        limit: Option<u32>,
        offset: u32,
    ) -> Result<NotesListResult, NoteServiceError> {
        let query = NoteListQuery { limit, offset };
        let items = self.repo.list_notes(&query)?;
        let total = self.repo.count_notes()?;
        debug!(
            "event=note_list module=service status=ok returned={} total={}",
            items.len(),
            total
        );
        Ok(NotesListResult { items, total })
    }

    /// Replaces title and content of an existing note.
    pub fn update_note(
        &self,
        id: NoteId,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Note, NoteServiceError> {
        let mut note = self
            .repo
            .get_note(id)?
            .ok_or(NoteServiceError::NoteNotFound(id))?;
        note.set_title(title);
        note.set_content(content);
        self.repo.save(&mut note)?;
        info!("event=note_update module=service status=ok note_id={id}");

        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::InconsistentState(
                "updated note not found in read-back",
            ))
    }

    /// Deletes one note by id.
    pub fn delete_note(&self, id: NoteId) -> Result<(), NoteServiceError> {
        self.repo.delete_note(id)?;
        info!("event=note_delete module=service status=ok note_id={id}");
        Ok(())
    }
}
