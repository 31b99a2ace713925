//! Settings-change intents: rename the assistant or the user

use tracing::warn;

use crate::context::Context;
use crate::dispatch::{Flow, HandlerFuture};

use super::{after_trigger, title_case};

pub const ASSISTANT_NAME_TRIGGERS: &[&str] = &["change your name", "rename yourself"];
pub const USER_NAME_TRIGGERS: &[&str] = &["change my name", "my name is"];

pub fn change_assistant_name<'a>(ctx: &'a mut Context, utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        let Some(name) = extract_name(utterance, ASSISTANT_NAME_TRIGGERS) else {
            ctx.output
                .emit("I didn't catch a new name, so I'll keep the one I have.");
            return Flow::Continue;
        };

        ctx.config.assistant_name = name.clone();
        ctx.output.set_name(&name);
        if persist_settings(ctx) {
            ctx.output.emit(&format!("Okay! You can now call me {name}."));
        } else {
            ctx.output.emit(&format!(
                "You can call me {name}, but I couldn't save that for next time."
            ));
        }
        Flow::Continue
    })
}

pub fn change_user_name<'a>(ctx: &'a mut Context, utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        let Some(name) = extract_name(utterance, USER_NAME_TRIGGERS) else {
            ctx.output
                .emit("I didn't catch your name, so I'll keep calling you what I do now.");
            return Flow::Continue;
        };

        ctx.config.user_name = name.clone();
        if persist_settings(ctx) {
            ctx.output
                .emit(&format!("Got it! I'll call you {name} from now on."));
        } else {
            ctx.output.emit(&format!(
                "I'll call you {name} for this session, but I couldn't save it."
            ));
        }
        Flow::Continue
    })
}

/// Remainder after the trigger, title-cased; the utterance reaches us
/// lowercased, so "sam" becomes "Sam".
fn extract_name(utterance: &str, triggers: &[&str]) -> Option<String> {
    let rest = after_trigger(utterance, triggers)?;
    let name = title_case(&rest);
    (!name.is_empty()).then_some(name)
}

/// Save settings, keeping the in-memory value either way.
fn persist_settings(ctx: &Context) -> bool {
    match ctx.config.save(&ctx.config_path) {
        Ok(()) => true,
        Err(e) => {
            warn!(?e, "settings write failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tokio_test::block_on;

    #[test]
    fn test_change_user_name_updates_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::for_tests(dir.path());

        block_on(change_user_name(&mut ctx, "change my name to sam"));

        assert_eq!(ctx.config.user_name, "Sam");
        assert!(ctx.output.emitted()[0].contains("Sam"));

        // The next session sees the new name.
        let reloaded = Config::load_or_create(&ctx.config_path).unwrap();
        assert_eq!(reloaded.user_name, "Sam");
    }

    #[test]
    fn test_my_name_is_form() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::for_tests(dir.path());

        block_on(change_user_name(&mut ctx, "my name is mary jane"));

        assert_eq!(ctx.config.user_name, "Mary Jane");
    }

    #[test]
    fn test_change_assistant_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::for_tests(dir.path());

        block_on(change_assistant_name(&mut ctx, "change your name to nova"));

        assert_eq!(ctx.config.assistant_name, "Nova");
        assert!(ctx.output.emitted()[0].contains("call me Nova"));
    }

    #[test]
    fn test_empty_remainder_keeps_old_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::for_tests(dir.path());

        block_on(change_user_name(&mut ctx, "change my name"));
        block_on(change_user_name(&mut ctx, "change my name to   "));

        assert_eq!(ctx.config.user_name, "User");
        assert_eq!(ctx.output.emitted().len(), 2);
    }
}
