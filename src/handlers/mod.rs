//! Intent handlers and the routing table that wires them together
//!
//! `command_table` is the single place registration order is decided.
//! Adding an intent means appending one `register` line; nothing else in
//! the crate changes. Order matters: entries are matched first-come, so
//! the exit intent sits at the top and a longer trigger must precede any
//! shorter trigger that is its substring.

mod clock;
mod knowledge;
mod notes;
mod settings;
mod smalltalk;
mod system;
mod tasks;
mod web;

use crate::context::Context;
use crate::dispatch::{CommandTable, Flow, HandlerFuture};

/// Trigger phrases that end the session.
pub const EXIT_TRIGGERS: &[&str] = &["exit", "quit", "goodbye", "bye", "stop"];

const HELP_TRIGGERS: &[&str] = &["help", "what can you do", "commands", "features"];

const HELP_TEXT: &str = "\
Here are some things I can do:
  Time and date:  'what time is it', 'what's today's date'
  Web:            'open google', 'search for rust tutorials', 'play on youtube'
  Knowledge:      'wikipedia ada lovelace', 'who is grace hopper'
  Notes:          'write a note: buy milk', 'read my notes'
  To-do:          'add task buy groceries', 'read my tasks', 'complete task'
  System:         'shutdown', 'restart', 'lock screen', 'volume up', 'volume down'
  Apps:           'open calculator', 'open notepad'
  Fun:            'tell me a joke', 'how are you'
  Settings:       'change your name', 'change my name to sam'
  Exit:           'exit', 'quit', 'goodbye'";

/// Build the full routing table in precedence order.
pub fn command_table() -> CommandTable {
    let mut table = CommandTable::new(fallback);

    table.register("exit", EXIT_TRIGGERS, exit);

    table.register("time", clock::TIME_TRIGGERS, clock::time);
    table.register("date", clock::DATE_TRIGGERS, clock::date);

    table.register("open-site", web::OPEN_SITE_TRIGGERS, web::open_site);
    table.register("google-search", web::GOOGLE_TRIGGERS, web::search_google);
    table.register("youtube-search", web::YOUTUBE_TRIGGERS, web::search_youtube);

    table.register("wikipedia", knowledge::TRIGGERS, knowledge::wikipedia);

    table.register("write-note", notes::WRITE_TRIGGERS, notes::write_note);
    table.register("read-notes", notes::READ_TRIGGERS, notes::read_notes);

    table.register("add-task", tasks::ADD_TRIGGERS, tasks::add_task);
    table.register("read-tasks", tasks::READ_TRIGGERS, tasks::read_tasks);
    table.register("complete-task", tasks::COMPLETE_TRIGGERS, tasks::complete_task);

    table.register("shutdown", system::SHUTDOWN_TRIGGERS, system::shutdown);
    table.register("restart", system::RESTART_TRIGGERS, system::restart);
    table.register("lock", system::LOCK_TRIGGERS, system::lock);
    table.register("volume-up", system::VOLUME_UP_TRIGGERS, system::volume_up);
    table.register("volume-down", system::VOLUME_DOWN_TRIGGERS, system::volume_down);
    table.register("open-app", system::OPEN_APP_TRIGGERS, system::open_app);

    // The rename intents must precede the identity one: "change your name"
    // contains the "your name" trigger and would be shadowed by it.
    table.register(
        "change-assistant-name",
        settings::ASSISTANT_NAME_TRIGGERS,
        settings::change_assistant_name,
    );
    table.register(
        "change-user-name",
        settings::USER_NAME_TRIGGERS,
        settings::change_user_name,
    );

    table.register("joke", smalltalk::JOKE_TRIGGERS, smalltalk::joke);
    table.register("how-are-you", smalltalk::HOW_TRIGGERS, smalltalk::how_are_you);
    table.register("assistant-name", smalltalk::NAME_TRIGGERS, smalltalk::name);
    table.register("creator", smalltalk::CREATOR_TRIGGERS, smalltalk::creator);

    table.register("help", HELP_TRIGGERS, help);

    table
}

/// Terminal catch-all for anything no trigger matches.
fn fallback<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        ctx.output
            .emit("I didn't understand that command. Try saying 'help' to see what I can do.");
        Flow::Continue
    })
}

fn exit<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        let message = format!(
            "Goodbye, {}! Have a wonderful day.",
            ctx.config.user_name
        );
        ctx.output.emit(&message);
        Flow::Exit
    })
}

fn help<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        println!("{HELP_TEXT}");
        ctx.output
            .emit("I've printed the full command list on the screen for you.");
        Flow::Continue
    })
}

/// Words that commonly connect a trigger to its argument.
const FILLERS: &[&str] = &["to ", "for ", "that ", "saying ", "about ", "on "];

/// Extract the argument following the first trigger phrase found in the
/// utterance, with any leading connective word dropped.
///
/// Returns `None` when no trigger occurs or nothing follows it.
pub(crate) fn after_trigger(utterance: &str, triggers: &[&str]) -> Option<String> {
    for trigger in triggers {
        if let Some(pos) = utterance.find(trigger) {
            let mut rest = utterance[pos + trigger.len()..].trim_start();
            for filler in FILLERS {
                if let Some(stripped) = rest.strip_prefix(filler) {
                    rest = stripped.trim_start();
                    break;
                }
                // A bare connective with nothing after it is no argument.
                if rest == filler.trim_end() {
                    rest = "";
                    break;
                }
            }
            let rest = rest.trim();
            if rest.is_empty() {
                return None;
            }
            return Some(rest.to_string());
        }
    }
    None
}

/// Capitalize each word of a normalized (lowercased) name.
pub(crate) fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
