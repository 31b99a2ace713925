//! The ordered routing table the dispatcher consults
//!
//! Entries are evaluated strictly in registration order with
//! first-match-wins semantics, so a more specific multi-word trigger must
//! be registered before any shorter trigger it contains. Entries are
//! never checked for conflicts; precedence is the table author's
//! responsibility.

use std::future::Future;
use std::pin::Pin;

use crate::context::Context;

/// What the session loop should do after a handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep listening for the next utterance
    Continue,
    /// End the session
    Exit,
}

/// The boxed future every handler returns
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = Flow> + 'a>>;

/// One intent's entry point: full normalized utterance in, side effects out
pub type Handler = for<'a> fn(&'a mut Context, &'a str) -> HandlerFuture<'a>;

/// A routing rule: any trigger phrase occurring in the utterance selects
/// the handler
pub struct CommandEntry {
    /// Intent name, used for logging only
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub handler: Handler,
}

impl CommandEntry {
    /// Whether any trigger phrase occurs in the normalized utterance.
    pub fn matches(&self, utterance: &str) -> bool {
        self.triggers.iter().any(|t| utterance.contains(t))
    }
}

/// Ordered list of command entries plus the terminal fallback
pub struct CommandTable {
    entries: Vec<CommandEntry>,
    fallback: Handler,
}

impl CommandTable {
    pub fn new(fallback: Handler) -> Self {
        Self {
            entries: Vec::new(),
            fallback,
        }
    }

    /// Append an entry. Registration order is precedence order.
    pub fn register(
        &mut self,
        name: &'static str,
        triggers: &'static [&'static str],
        handler: Handler,
    ) {
        self.entries.push(CommandEntry {
            name,
            triggers,
            handler,
        });
    }

    /// First entry, in registration order, matching the utterance.
    pub fn find(&self, utterance: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.matches(utterance))
    }

    /// The handler for anything no entry matches.
    pub fn fallback(&self) -> Handler {
        self.fallback
    }

    /// Number of registered intents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
