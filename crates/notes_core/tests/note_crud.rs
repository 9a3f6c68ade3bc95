use notes_core::db::migrations::latest_version;
use notes_core::db::open_db_in_memory;
use notes_core::{
    now_epoch_ms, Note, NoteListQuery, NoteRepository, NoteService, NoteServiceError, NoteState,
    RepoError, SqliteNoteRepository,
};
use rusqlite::Connection;

#[test]
fn first_save_stamps_created_at_and_assigns_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let mut note = Note::with_text("Groceries", "Milk, eggs");
    let before = now_epoch_ms();
    let id = repo.save(&mut note).unwrap();
    let after = now_epoch_ms();

    assert_eq!(note.id(), Some(id));
    assert_eq!(note.state(), NoteState::Persisted);
    let created_at = note.created_at().unwrap();
    assert!(created_at >= before && created_at <= after);

    let loaded = repo.get_note(id).unwrap().unwrap();
    assert_eq!(loaded, note);
}

#[test]
fn generated_ids_increase_with_each_insert() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let first = repo.save(&mut Note::with_text("a", "1")).unwrap();
    let second = repo.save(&mut Note::with_text("b", "2")).unwrap();
    repo.delete_note(second).unwrap();
    let third = repo.save(&mut Note::with_text("c", "3")).unwrap();

    assert!(second > first);
    assert!(third > second);
}

#[test]
fn later_saves_update_text_but_keep_created_at() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let mut note = Note::with_text("draft", "body");
    let id = repo.save(&mut note).unwrap();
    let created_at = note.created_at();

    std::thread::sleep(std::time::Duration::from_millis(5));
    note.set_title(Some("final".to_string()));
    note.set_content(None);
    assert_eq!(repo.save(&mut note).unwrap(), id);

    let loaded = repo.get_note(id).unwrap().unwrap();
    assert_eq!(loaded.title(), Some("final"));
    assert_eq!(loaded.content(), None);
    assert_eq!(loaded.created_at(), created_at);
}

#[test]
fn update_ignores_in_memory_created_at_changes() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let mut note = Note::with_text("t", "c");
    let id = repo.save(&mut note).unwrap();
    let stored_at = note.created_at();

    note.set_created_at(Some(1));
    repo.save(&mut note).unwrap();

    let loaded = repo.get_note(id).unwrap().unwrap();
    assert_eq!(loaded.created_at(), stored_at);
}

#[test]
fn first_save_replaces_preset_stamp_with_now() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let mut note = Note::with_text("t", "c");
    note.set_created_at(Some(1));
    let before = now_epoch_ms();
    let id = repo.save(&mut note).unwrap();

    let loaded = repo.get_note(id).unwrap().unwrap();
    assert!(loaded.created_at().unwrap() >= before);
    assert_eq!(loaded.created_at(), note.created_at());
}

#[test]
fn saving_note_with_cleared_id_inserts_fresh_row_and_stamp() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let mut note = Note::with_text("t", "c");
    let first_id = repo.save(&mut note).unwrap();
    let first_stamp = note.created_at().unwrap();

    std::thread::sleep(std::time::Duration::from_millis(5));
    note.set_id(None);
    let second_id = repo.save(&mut note).unwrap();

    assert_ne!(first_id, second_id);
    assert_eq!(repo.count_notes().unwrap(), 2);
    let copy = repo.get_note(second_id).unwrap().unwrap();
    assert!(copy.created_at().unwrap() > first_stamp);
    let original = repo.get_note(first_id).unwrap().unwrap();
    assert_eq!(original.created_at(), Some(first_stamp));
}

#[test]
fn empty_and_absent_text_round_trip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let mut note = Note::new();
    note.set_title(Some(String::new()));
    let id = repo.save(&mut note).unwrap();

    let loaded = repo.get_note(id).unwrap().unwrap();
    assert_eq!(loaded.title(), Some(""));
    assert_eq!(loaded.content(), None);
    assert!(loaded.created_at().is_some());
}

#[test]
fn saving_unknown_persisted_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let mut note = Note::with_text("ghost", "row");
    note.set_id(Some(404));

    let err = repo.save(&mut note).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(404)));
}

#[test]
fn delete_removes_row_and_reports_missing_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let id = repo.save(&mut Note::with_text("t", "c")).unwrap();
    repo.delete_note(id).unwrap();

    assert!(repo.get_note(id).unwrap().is_none());
    assert!(matches!(
        repo.delete_note(id).unwrap_err(),
        RepoError::NotFound(missing) if missing == id
    ));
}

#[test]
fn list_orders_by_id_and_paginates() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let ids: Vec<_> = ["a", "b", "c", "d"]
        .iter()
        .map(|title| repo.save(&mut Note::with_text(*title, "")).unwrap())
        .collect();

    let all = repo.list_notes(&NoteListQuery::default()).unwrap();
    assert_eq!(all.iter().map(|n| n.id().unwrap()).collect::<Vec<_>>(), ids);

    let page = repo
        .list_notes(&NoteListQuery {
            limit: Some(2),
            offset: 1,
        })
        .unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].title(), Some("b"));
    assert_eq!(page[1].title(), Some("c"));

    let tail = repo
        .list_notes(&NoteListQuery {
            limit: None,
            offset: 3,
        })
        .unwrap();
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].title(), Some("d"));

    assert_eq!(repo.count_notes().unwrap(), 4);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteNoteRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_notes_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteNoteRepository::try_new(&conn),
        Err(RepoError::MissingRequiredTable("notes"))
    ));
}

#[test]
fn repository_rejects_notes_table_missing_created_at() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT,
            content TEXT
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteNoteRepository::try_new(&conn),
        Err(RepoError::MissingRequiredColumn {
            table: "notes",
            column: "created_at"
        })
    ));
}

#[test]
fn service_create_update_delete_flow() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());

    let created = service.create_note("Groceries", "Milk, eggs").unwrap();
    let id = created.id().unwrap();
    assert_eq!(created.title(), Some("Groceries"));
    assert!(created.created_at().is_some());

    let updated = service
        .update_note(
            id,
            Some("Groceries".to_string()),
            Some("Milk, eggs, bread".to_string()),
        )
        .unwrap();
    assert_eq!(updated.id(), Some(id));
    assert_eq!(updated.content(), Some("Milk, eggs, bread"));
    assert_eq!(updated.created_at(), created.created_at());

    service.delete_note(id).unwrap();
    assert!(service.get_note(id).unwrap().is_none());
}

#[test]
fn service_reports_missing_notes() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());

    let update_err = service
        .update_note(7, Some("t".to_string()), None)
        .unwrap_err();
    assert!(matches!(update_err, NoteServiceError::NoteNotFound(7)));

    let delete_err = service.delete_note(7).unwrap_err();
    assert!(matches!(delete_err, NoteServiceError::NoteNotFound(7)));
}

#[test]
fn service_list_returns_page_and_total() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());
    for idx in 0..5 {
        service.create_note(format!("note {idx}"), "").unwrap();
    }

    let listed = service.list_notes(Some(2), 2).unwrap();
    assert_eq!(listed.total, 5);
    assert_eq!(listed.items.len(), 2);
    assert_eq!(listed.items[0].title(), Some("note 2"));
}
