//! Append-only log of approved notes.
//!
//! Each entry is written as a blank line pair, a bracketed section tag and
//! the note body:
//!
//! ```text
//!
//!
//! [REFORMATTED NOTE]
//! <note text>
//! ```
//!
//! The file is plain text so it can be opened and curated by hand.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::info;

use notecraft_core::models::note::{ApprovedNote, NoteKind};

use crate::error::StorageError;

/// Handle to the approved-notes file. Appends are serialised so concurrent
/// approvals never interleave.
#[derive(Debug)]
pub struct ApprovedNotes {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ApprovedNotes {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a note under the section tag for `kind`, creating the file if
    /// it does not exist.
    ///
    /// Text containing a section header line is rejected; it would read back
    /// as more than one entry.
    pub async fn append(&self, kind: NoteKind, text: &str) -> Result<(), StorageError> {
        if let Some(embedded) = embedded_header(text) {
            return Err(StorageError::EmbeddedHeader {
                tag: embedded.tag(),
            });
        }

        let _guard = self.write_lock.lock().await;

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|source| self.write_error(source))?;

        let entry = format_entry(kind, text);
        file.write_all(entry.as_bytes())
            .await
            .map_err(|source| self.write_error(source))?;
        file.flush().await.map_err(|source| self.write_error(source))?;

        info!(
            path = %self.path.display(),
            kind = kind.tag(),
            bytes = entry.len(),
            "approved note saved"
        );
        Ok(())
    }

    /// Read every approved note back in the order it was saved. A missing
    /// file yields no notes.
    pub async fn read_all(&self) -> Result<Vec<ApprovedNote>, StorageError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        Ok(parse_entries(&contents))
    }

    fn write_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

const ALL_KINDS: [NoteKind; 3] = [
    NoteKind::Generated,
    NoteKind::Reformatted,
    NoteKind::NextDayProgress,
];

/// Find a section header inside `text`, including one completed by the
/// newline that ends the preceding header or starts the next one.
fn embedded_header(text: &str) -> Option<NoteKind> {
    let framed = format!("\n{text}\n");
    ALL_KINDS
        .into_iter()
        .find(|kind| framed.contains(&header(*kind)))
}

fn header(kind: NoteKind) -> String {
    format!("\n\n[{}]\n", kind.tag())
}

fn format_entry(kind: NoteKind, text: &str) -> String {
    format!("{}{text}", header(kind))
}

/// Split file contents on section headers. Text before the first header is
/// not part of any entry and is dropped.
fn parse_entries(contents: &str) -> Vec<ApprovedNote> {
    let mut headers: Vec<(usize, usize, NoteKind)> = Vec::new();
    for kind in ALL_KINDS {
        let marker = header(kind);
        headers.extend(
            contents
                .match_indices(&marker)
                .map(|(start, m)| (start, start + m.len(), kind)),
        );
    }
    headers.sort_by_key(|(start, _, _)| *start);

    headers
        .iter()
        .enumerate()
        .map(|(i, (_, body_start, kind))| {
            let body_end = headers
                .get(i + 1)
                .map(|(next_start, _, _)| *next_start)
                .unwrap_or(contents.len());
            ApprovedNote {
                kind: *kind,
                text: contents[*body_start..body_end].to_string(),
            }
        })
        .collect()
}
