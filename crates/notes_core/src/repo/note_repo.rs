//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist notes as rows of the `notes` table.
//! - Drive the `Transient -> Persisted` transition on first save.
//!
//! # Invariants
//! - First save runs `Note::on_create`, inserts, then assigns the generated id.
//! - A failed first save leaves the caller's note transient.
//! - Updates never write `created_at`.
//! - Read paths reject rows without `created_at` instead of masking them.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::note::{Note, NoteId};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    created_at
FROM notes";

const REQUIRED_NOTE_COLUMNS: [&str; 4] = ["id", "title", "content", "created_at"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(NoteId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteListQuery {
    /// Maximum rows to return; `None` returns every remaining row.
    pub limit: Option<u32>,
    /// Number of rows to skip.
    pub offset: u32,
}

/// Storage-layer contract for notes.
pub trait NoteRepository {
    /// Persists a note and returns its id.
    ///
    /// Transient notes are stamped, inserted and given their generated id.
    /// Persisted notes have `title`/`content` written back; `created_at` is
    /// left as first stored.
    fn save(&self, note: &mut Note) -> RepoResult<NoteId>;
    /// Gets one note by id.
    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Lists notes ordered by `id ASC`.
    fn list_notes(&self, query: &NoteListQuery) -> RepoResult<Vec<Note>>;
    /// Deletes one note row.
    fn delete_note(&self, id: NoteId) -> RepoResult<()>;
    /// Counts stored notes.
    fn count_notes(&self) -> RepoResult<u64>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were not applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   does not carry the `notes` shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    fn insert(&self, note: &mut Note) -> RepoResult<NoteId> {
        // Stamp a copy so a failed insert cannot leave a half-saved record.
        let mut staged = note.clone();
        staged.on_create();
        let created_at = staged.created_at().ok_or_else(|| {
            RepoError::InvalidData("pre-save hook did not stamp created_at".to_string())
        })?;

        self.conn.execute(
            "INSERT INTO notes (title, content, created_at) VALUES (?1, ?2, ?3);",
            params![staged.title(), staged.content(), created_at],
        )?;

        let id = self.conn.last_insert_rowid();
        staged.set_id(Some(id));
        *note = staged;
        Ok(id)
    }

    fn update(&self, id: NoteId, note: &mut Note) -> RepoResult<NoteId> {
        let changed = self.conn.execute(
            "UPDATE notes
             SET
                title = ?2,
                content = ?3
             WHERE id = ?1;",
            params![id, note.title(), note.content()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        if note.created_at().is_none() {
            let created_at: Option<i64> = self.conn.query_row(
                "SELECT created_at FROM notes WHERE id = ?1;",
                [id],
                |row| row.get(0),
            )?;
            note.set_created_at(Some(created_at.ok_or_else(|| missing_created_at(id))?));
        }

        Ok(id)
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn save(&self, note: &mut Note) -> RepoResult<NoteId> {
        match note.id() {
            None => self.insert(note),
            Some(id) => self.update(id, note),
        }
    }

    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }

        Ok(None)
    }

    fn list_notes(&self, query: &NoteListQuery) -> RepoResult<Vec<Note>> {
        let mut sql = format!("{NOTE_SELECT_SQL} ORDER BY id ASC");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(query.offset)));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut notes = Vec::new();

        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }

        Ok(notes)
    }

    fn delete_note(&self, id: NoteId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn count_notes(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM notes;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative note count `{count}`")))
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    let id: NoteId = row.get("id")?;
    let created_at: Option<i64> = row.get("created_at")?;

    let mut note = Note::new();
    note.set_id(Some(id));
    note.set_title(row.get("title")?);
    note.set_content(row.get("content")?);
    note.set_created_at(Some(created_at.ok_or_else(|| missing_created_at(id))?));
    Ok(note)
}

fn missing_created_at(id: NoteId) -> RepoError {
    RepoError::InvalidData(format!("note {id} has no created_at in notes.created_at"))
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version < expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "notes")? {
        return Err(RepoError::MissingRequiredTable("notes"));
    }

    for column in REQUIRED_NOTE_COLUMNS {
        if !table_has_column(conn, "notes", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "notes",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
