use std::sync::Arc;

use notecraft_core::models::note::{ApprovedNote, NoteKind};
use notecraft_storage::approved::ApprovedNotes;
use notecraft_storage::error::StorageError;

#[tokio::test]
async fn append_writes_tagged_sections() {
    let dir = tempfile::tempdir().unwrap();
    let store = ApprovedNotes::new(dir.path().join("approved_notes.txt"));

    store.append(NoteKind::Generated, "HPI: chest pain").await.unwrap();
    store.append(NoteKind::Reformatted, "# HTN").await.unwrap();

    let contents = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(
        contents,
        "\n\n[MAIN AI-GENERATED NOTE]\nHPI: chest pain\n\n[REFORMATTED NOTE]\n# HTN"
    );
}

#[tokio::test]
async fn read_all_returns_entries_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = ApprovedNotes::new(dir.path().join("approved_notes.txt"));

    store.append(NoteKind::NextDayProgress, "Day 2: improving\n").await.unwrap();
    store.append(NoteKind::Generated, "1. CHF\n2. AKI").await.unwrap();

    let notes = store.read_all().await.unwrap();
    assert_eq!(
        notes,
        vec![
            ApprovedNote {
                kind: NoteKind::NextDayProgress,
                text: "Day 2: improving\n".to_string(),
            },
            ApprovedNote {
                kind: NoteKind::Generated,
                text: "1. CHF\n2. AKI".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = ApprovedNotes::new(dir.path().join("never_written.txt"));

    assert!(store.read_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn append_fails_when_parent_directory_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let store = ApprovedNotes::new(dir.path().join("missing").join("approved_notes.txt"));

    let err = store.append(NoteKind::Generated, "text").await.unwrap_err();
    assert!(err.to_string().starts_with("failed to write"));
}

#[tokio::test]
async fn concurrent_appends_do_not_interleave() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(ApprovedNotes::new(dir.path().join("approved_notes.txt")));

    let mut handles = Vec::new();
    for i in 0..20 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .append(NoteKind::Reformatted, &format!("note {i}"))
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let notes = store.read_all().await.unwrap();
    assert_eq!(notes.len(), 20);
    assert!(notes.iter().all(|n| n.text.starts_with("note ")));
}

#[tokio::test]
async fn append_rejects_text_containing_a_section_header() {
    let dir = tempfile::tempdir().unwrap();
    let store = ApprovedNotes::new(dir.path().join("approved_notes.txt"));

    let err = store
        .append(
            NoteKind::Generated,
            "HPI: see prior\n\n[REFORMATTED NOTE]\nold text",
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        StorageError::EmbeddedHeader { tag: "REFORMATTED NOTE" }
    ));
    assert!(!store.path().exists());
}

#[tokio::test]
async fn append_rejects_header_completed_at_either_edge() {
    let dir = tempfile::tempdir().unwrap();
    let store = ApprovedNotes::new(dir.path().join("approved_notes.txt"));

    for text in [
        "\n[NEXT-DAY PROGRESS NOTE]\nDay 3",
        "Day 3 plan\n\n[MAIN AI-GENERATED NOTE]",
    ] {
        let err = store.append(NoteKind::Reformatted, text).await.unwrap_err();
        assert!(matches!(err, StorageError::EmbeddedHeader { .. }), "{text:?}");
    }
}

#[tokio::test]
async fn bracketed_text_that_is_not_a_header_reads_back_whole() {
    let dir = tempfile::tempdir().unwrap();
    let store = ApprovedNotes::new(dir.path().join("approved_notes.txt"));

    let text = "Prior note said [REFORMATTED NOTE] inline\n\n[Labs]\nK 3.1";
    store.append(NoteKind::Generated, text).await.unwrap();
    store.append(NoteKind::Reformatted, "# AKI").await.unwrap();

    let notes = store.read_all().await.unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].kind, NoteKind::Generated);
    assert_eq!(notes[0].text, text);
}
