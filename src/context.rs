//! Shared handles threaded into every handler invocation
//!
//! Handlers stay stateless between calls; everything they read or mutate
//! lives here and is passed explicitly, which keeps them testable without
//! ambient globals.

use std::path::PathBuf;

use crate::actions::Actions;
use crate::config::{Config, Paths};
use crate::io::Output;
use crate::lookup::WikiClient;
use crate::store::{NoteStore, TaskStore};

/// Everything a handler may touch
pub struct Context {
    /// Live settings; persisted to `config_path` on mutation
    pub config: Config,
    pub config_path: PathBuf,
    pub notes: NoteStore,
    pub tasks: TaskStore,
    pub output: Output,
    pub wiki: WikiClient,
    pub actions: Actions,
}

impl Context {
    /// Assemble the context, loading both stores from disk.
    pub fn new(
        config: Config,
        paths: &Paths,
        output: Output,
        wiki: WikiClient,
        actions: Actions,
    ) -> Self {
        Self {
            notes: NoteStore::load(&paths.notes),
            tasks: TaskStore::load(&paths.tasks),
            config_path: paths.config.clone(),
            config,
            output,
            wiki,
            actions,
        }
    }

    /// A context over temp-dir stores with captured output and inert
    /// system actions.
    #[cfg(test)]
    pub fn for_tests(dir: &std::path::Path) -> Self {
        let paths = Paths::in_dir(dir).unwrap();
        Self::new(
            Config::default(),
            &paths,
            Output::capture(),
            WikiClient::new("en").unwrap(),
            Actions::disabled(),
        )
    }
}
