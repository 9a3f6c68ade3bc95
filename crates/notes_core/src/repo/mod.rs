//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage-layer contract the note lifecycle relies on.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - The repository, not application code, assigns note ids.
//! - The pre-save hook runs exactly once, right before a note's first insert.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod note_repo;
