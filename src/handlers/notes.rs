//! Note-taking intents

use tracing::warn;

use crate::context::Context;
use crate::dispatch::{Flow, HandlerFuture};

use super::after_trigger;

pub const WRITE_TRIGGERS: &[&str] = &[
    "write a note",
    "take a note",
    "make a note",
    "note that",
    "note down",
];

pub const READ_TRIGGERS: &[&str] = &["read my notes", "show notes", "my notes"];

pub fn write_note<'a>(ctx: &'a mut Context, utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        // Everything after the first colon wins; otherwise everything
        // after the trigger phrase.
        let note = match utterance.split_once(':') {
            Some((_, rest)) if !rest.trim().is_empty() => Some(rest.trim().to_string()),
            _ => after_trigger(utterance, WRITE_TRIGGERS),
        };

        let Some(note) = note else {
            ctx.output.emit("What would you like me to note down?");
            return Flow::Continue;
        };

        ctx.notes.append(&note);
        if let Err(e) = ctx.notes.persist() {
            warn!(?e, "note log write failed");
            ctx.output
                .emit("I'll remember that for now, but I couldn't save it to disk.");
        } else {
            ctx.output.emit("Note saved!");
        }
        Flow::Continue
    })
}

pub fn read_notes<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        if ctx.notes.is_empty() {
            ctx.output.emit("You have no notes saved.");
            return Flow::Continue;
        }

        let heading = format!("You have {} note(s).", ctx.notes.len());
        ctx.output.emit(&heading);
        for (i, note) in ctx.notes.all().iter().enumerate() {
            ctx.output.emit(&format!("Note {}: {}", i + 1, note));
        }
        Flow::Continue
    })
}
