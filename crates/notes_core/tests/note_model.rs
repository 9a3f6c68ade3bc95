use notes_core::{now_epoch_ms, Note, NoteState};

#[test]
fn empty_note_is_transient() {
    let note = Note::new();

    assert_eq!(note.id(), None);
    assert_eq!(note.created_at(), None);
    assert_eq!(note.title(), None);
    assert_eq!(note.content(), None);
    assert_eq!(note.state(), NoteState::Transient);
    assert_eq!(note, Note::default());
}

#[test]
fn with_text_keeps_exact_text_and_leaves_identity_unset() {
    let note = Note::with_text("Groceries", "Milk, eggs");

    assert_eq!(note.title(), Some("Groceries"));
    assert_eq!(note.content(), Some("Milk, eggs"));
    assert_eq!(note.id(), None);
    assert_eq!(note.created_at(), None);
}

#[test]
fn with_text_does_not_trim_or_normalize() {
    let note = Note::with_text("  padded\t", "\nline one\r\nline two  ");

    assert_eq!(note.title(), Some("  padded\t"));
    assert_eq!(note.content(), Some("\nline one\r\nline two  "));
}

#[test]
fn setters_are_visible_to_later_reads() {
    let mut note = Note::with_text("draft", "body");

    note.set_title(Some("final".to_string()));
    note.set_content(Some("new body".to_string()));

    assert_eq!(note.title(), Some("final"));
    assert_eq!(note.content(), Some("new body"));
}

#[test]
fn empty_title_and_absent_content_are_accepted() {
    let mut note = Note::new();

    note.set_title(Some(String::new()));
    note.set_content(None);

    assert_eq!(note.title(), Some(""));
    assert_eq!(note.content(), None);
}

#[test]
fn on_create_stamps_current_time() {
    let mut note = Note::with_text("t", "c");

    let before = now_epoch_ms();
    note.on_create();
    let after = now_epoch_ms();

    let created_at = note.created_at().unwrap();
    assert!(created_at >= before);
    assert!(created_at <= after);
}

#[test]
fn on_create_restamps_on_every_call() {
    let mut note = Note::new();
    note.set_created_at(Some(1));

    note.on_create();
    let first = note.created_at().unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));
    note.on_create();

    assert!(first > 1);
    assert!(note.created_at().unwrap() >= first);
}

#[test]
fn simulated_first_save_sets_identity_and_stamp() {
    let mut note = Note::with_text("Groceries", "Milk, eggs");

    let before = now_epoch_ms();
    note.on_create();
    note.set_id(Some(1));

    assert_eq!(note.id(), Some(1));
    assert_eq!(note.state(), NoteState::Persisted);
    let created_at = note.created_at().unwrap();
    assert!(created_at >= before);
    assert!(created_at - before < 5_000);
}

#[test]
fn serialization_uses_camel_case_wire_fields() {
    let mut note = Note::with_text("Groceries", "Milk, eggs");
    note.set_id(Some(3));
    note.set_created_at(Some(1_700_000_000_000));

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["title"], "Groceries");
    assert_eq!(json["content"], "Milk, eggs");
    assert_eq!(json["createdAt"], 1_700_000_000_000_i64);

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn transient_note_serializes_nulls() {
    let json = serde_json::to_value(Note::new()).unwrap();

    assert!(json["id"].is_null());
    assert!(json["title"].is_null());
    assert!(json["content"].is_null());
    assert!(json["createdAt"].is_null());
}
