//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record persisted as one `notes` row.
//! - Derive the creation timestamp exactly once, right before first save.
//!
//! # Invariants
//! - `id` is assigned by the storage layer, never by application code.
//! - `created_at` is set iff the note has been saved at least once.
//! - `created_at` is stamped by the pre-save hook on insert only; later saves
//!   never rewrite it.
//! - `title`/`content` are not validated; empty and absent values are legal.
//!
//! # See also
//! - crate::repo::note_repo (the storage layer that drives the lifecycle)

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Storage-generated note identifier.
pub type NoteId = i64;

/// Explicit lifecycle state of a note record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteState {
    /// Not saved yet: `id` or `created_at` is missing.
    Transient,
    /// Saved at least once: `id` and `created_at` are set.
    Persisted,
}

/// One note, mapped one-to-one onto a `notes` table row.
///
/// Serialized with camelCase keys (`createdAt`) to keep the wire shape used
/// by note clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    id: Option<NoteId>,
    title: Option<String>,
    content: Option<String>,
    /// Unix epoch milliseconds.
    created_at: Option<i64>,
}

impl Note {
    /// Creates an empty transient note.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transient note with title and content.
    ///
    /// Text is stored exactly as given; no trimming or validation.
    pub fn with_text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: Some(title.into()),
            content: Some(content.into()),
            created_at: None,
        }
    }

    pub fn id(&self) -> Option<NoteId> {
        self.id
    }

    /// Sets the storage identifier.
    ///
    /// Reserved for the storage layer: id assignment on first save and row
    /// hydration.
    pub fn set_id(&mut self, id: Option<NoteId>) {
        self.id = id;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: Option<String>) {
        self.content = content;
    }

    /// Creation time in Unix epoch milliseconds.
    pub fn created_at(&self) -> Option<i64> {
        self.created_at
    }

    pub fn set_created_at(&mut self, created_at: Option<i64>) {
        self.created_at = created_at;
    }

    /// Pre-save hook, run by the storage layer right before the first write.
    ///
    /// Always stamps `created_at` with the current wall-clock time, replacing
    /// any value set beforehand. Update paths must not call it.
    pub fn on_create(&mut self) {
        self.created_at = Some(now_epoch_ms());
    }

    /// Returns the lifecycle state: `Persisted` once both the storage id and
    /// the creation stamp are present.
    pub fn state(&self) -> NoteState {
        match (self.id, self.created_at) {
            (Some(_), Some(_)) => NoteState::Persisted,
            _ => NoteState::Transient,
        }
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// Clocks set before 1970 collapse to `0`.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
