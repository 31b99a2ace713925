//! To-do list intents

use tracing::warn;

use crate::context::Context;
use crate::dispatch::{Flow, HandlerFuture};

use super::after_trigger;

pub const ADD_TRIGGERS: &[&str] = &[
    "add task",
    "add to do",
    "remind me",
    "add reminder",
    "new task",
];

pub const READ_TRIGGERS: &[&str] = &[
    "read my tasks",
    "my tasks",
    "show tasks",
    "to do list",
    "todo list",
];

pub const COMPLETE_TRIGGERS: &[&str] = &["complete task", "mark done", "finished task"];

pub fn add_task<'a>(ctx: &'a mut Context, utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        let Some(text) = after_trigger(utterance, ADD_TRIGGERS) else {
            ctx.output.emit("What task would you like to add?");
            return Flow::Continue;
        };

        ctx.tasks.add(&text);
        if let Err(e) = ctx.tasks.persist() {
            warn!(?e, "task list write failed");
            ctx.output
                .emit("I added it, but couldn't save your to-do list to disk.");
        } else {
            ctx.output.emit(&format!("Added to your to-do list: {text}."));
        }
        Flow::Continue
    })
}

pub fn read_tasks<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        if ctx.tasks.is_empty() {
            ctx.output.emit("Your to-do list is empty.");
            return Flow::Continue;
        }

        let heading = format!(
            "You have {} task(s), {} pending.",
            ctx.tasks.all().len(),
            ctx.tasks.pending()
        );
        ctx.output.emit(&heading);
        for (i, task) in ctx.tasks.all().iter().enumerate() {
            let status = if task.done { "done" } else { "pending" };
            ctx.output
                .emit(&format!("{}. {} ({})", i + 1, task.text, status));
        }
        Flow::Continue
    })
}

/// Marks one task done without asking which: the configured policy picks
/// the most recently added (default) or oldest incomplete task.
pub fn complete_task<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        match ctx.tasks.complete(ctx.config.task_completion) {
            Some(text) => {
                if let Err(e) = ctx.tasks.persist() {
                    warn!(?e, "task list write failed");
                    ctx.output.emit(&format!(
                        "Marked '{text}' as done, but couldn't save the list to disk."
                    ));
                } else {
                    ctx.output.emit(&format!("Great job! Marked '{text}' as done."));
                }
            }
            None => {
                ctx.output.emit("You have no pending tasks.");
            }
        }
        Flow::Continue
    })
}
