//! Ordered to-do list backed by a JSON file

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::TaskCompletion;

use super::write_atomic;

/// A single to-do entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// What the user asked to be reminded of
    pub text: String,

    /// Whether the task has been marked complete
    pub done: bool,
}

/// Insertion-ordered task list
///
/// Completion flips the `done` flag in place; tasks are never removed, so
/// positions stay stable for the lifetime of the file.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Load the task list from `path`; an absent or damaged file starts an
    /// empty list.
    pub fn load(path: &Path) -> Self {
        let tasks = match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(tasks) => tasks,
                Err(e) => {
                    warn!(?e, path = %path.display(), "could not parse tasks, starting empty");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!(?e, path = %path.display(), "could not read tasks, starting empty");
                Vec::new()
            }
        };
        debug!(count = tasks.len(), "task list loaded");
        Self {
            path: path.to_owned(),
            tasks,
        }
    }

    /// Append a new pending task.
    pub fn add(&mut self, text: &str) {
        self.tasks.push(Task {
            text: text.to_string(),
            done: false,
        });
    }

    /// Mark one incomplete task done according to `policy`.
    ///
    /// Returns the text of the completed task, or `None` when nothing is
    /// pending. The list itself is never shortened.
    pub fn complete(&mut self, policy: TaskCompletion) -> Option<String> {
        let index = match policy {
            TaskCompletion::MostRecent => self.tasks.iter().rposition(|t| !t.done),
            TaskCompletion::Oldest => self.tasks.iter().position(|t| !t.done),
        }?;
        self.tasks[index].done = true;
        Some(self.tasks[index].text.clone())
    }

    /// Write the full list back to disk.
    pub fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.tasks)?;
        write_atomic(&self.path, &json)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }

    /// All tasks in insertion order.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks not yet done.
    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> TaskStore {
        TaskStore::load(&dir.path().join("todo.json"))
    }

    #[test]
    fn test_add_appends_pending_task() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add("finish homework");

        let tasks = store.all();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "finish homework");
        assert!(!tasks[0].done);
    }

    #[test]
    fn test_complete_most_recent_picks_last_pending() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add("first");
        store.add("second");
        store.add("third");
        store.complete(TaskCompletion::MostRecent);

        let done = store.complete(TaskCompletion::MostRecent);
        assert_eq!(done.as_deref(), Some("second"));
        assert!(store.all()[2].done);
        assert!(store.all()[1].done);
        assert!(!store.all()[0].done);
    }

    #[test]
    fn test_complete_oldest_picks_first_pending() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add("first");
        store.add("second");

        let done = store.complete(TaskCompletion::Oldest);
        assert_eq!(done.as_deref(), Some("first"));
        assert!(!store.all()[1].done);
    }

    #[test]
    fn test_complete_with_nothing_pending() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        assert_eq!(store.complete(TaskCompletion::MostRecent), None);
        assert!(store.is_empty());

        store.add("only");
        store.complete(TaskCompletion::MostRecent);
        // Everything is done now; completion neither loops nor removes.
        assert_eq!(store.complete(TaskCompletion::MostRecent), None);
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn test_persist_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.json");

        let mut store = TaskStore::load(&path);
        store.add("finish homework");
        store.add("water the plants");
        store.complete(TaskCompletion::MostRecent);
        store.persist().unwrap();

        let reloaded = TaskStore::load(&path);
        assert_eq!(reloaded.all().len(), 2);
        assert_eq!(reloaded.all()[0].text, "finish homework");
        assert!(!reloaded.all()[0].done);
        assert!(reloaded.all()[1].done);
    }

    #[test]
    fn test_damaged_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.json");
        std::fs::write(&path, "[{\"text\": truncated").unwrap();

        let store = TaskStore::load(&path);
        assert!(store.is_empty());
    }
}
