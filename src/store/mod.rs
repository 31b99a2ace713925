//! Flat-file stores for notes and to-do items
//!
//! Mutators change in-memory state only; callers persist explicitly and
//! decide how to report a failed write. A failed read falls back to an
//! empty store so startup never dies on a damaged file.

mod notes;
mod tasks;

pub use notes::NoteStore;
pub use tasks::{Task, TaskStore};

use std::io;
use std::path::Path;

/// Write `contents` to `path` through a sibling temp file and a rename,
/// so readers never observe a partially written file.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_atomic_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");

        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        assert!(!path.with_extension("tmp").exists());
    }
}
