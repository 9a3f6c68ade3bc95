//! Domain model for persisted notes.
//!
//! # Responsibility
//! - Define the note record and its explicit lifecycle state.
//!
//! # Invariants
//! - Every saved note is identified by a storage-generated `NoteId`.
//! - Creation time is derived once, at first save.

pub mod note;
