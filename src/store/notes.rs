//! Append-only note log backed by a plain text file, one note per line

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tracing::{debug, warn};

use super::write_atomic;

/// Ordered log of dictated notes
///
/// Notes are only ever appended or read back in full; there is no edit or
/// delete path through the assistant.
#[derive(Debug)]
pub struct NoteStore {
    path: PathBuf,
    notes: Vec<String>,
}

impl NoteStore {
    /// Load the note log from `path`; an absent or unreadable file starts
    /// an empty log.
    pub fn load(path: &Path) -> Self {
        let notes = match std::fs::read_to_string(path) {
            Ok(raw) => raw.lines().map(str::to_string).collect(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!(?e, path = %path.display(), "could not read notes, starting empty");
                Vec::new()
            }
        };
        debug!(count = notes.len(), "note log loaded");
        Self {
            path: path.to_owned(),
            notes,
        }
    }

    /// Append a note to the in-memory log.
    pub fn append(&mut self, text: &str) {
        self.notes.push(text.to_string());
    }

    /// Write the full log back to disk.
    pub fn persist(&self) -> Result<()> {
        let mut contents = self.notes.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        write_atomic(&self.path, &contents)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }

    /// All notes in append order.
    pub fn all(&self) -> &[String] {
        &self.notes
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = NoteStore::load(&dir.path().join("notes.txt"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_persist_reload_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");

        let mut store = NoteStore::load(&path);
        store.append("buy milk");
        store.append("call the dentist");
        store.persist().unwrap();

        let reloaded = NoteStore::load(&path);
        assert_eq!(reloaded.all(), ["buy milk", "call the dentist"]);
    }

    #[test]
    fn test_reading_does_not_mutate() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = NoteStore::load(&dir.path().join("notes.txt"));
        store.append("only note");

        let _ = store.all();
        let _ = store.len();
        assert_eq!(store.all(), ["only note"]);
    }
}
