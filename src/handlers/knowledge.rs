//! Wikipedia lookup intent

use tracing::warn;

use crate::context::Context;
use crate::dispatch::{Flow, HandlerFuture};
use crate::lookup::LookupError;

use super::after_trigger;

pub const TRIGGERS: &[&str] = &[
    "wikipedia",
    "wiki",
    "who is",
    "tell me about",
    "what is",
    "explain",
];

pub fn wikipedia<'a>(ctx: &'a mut Context, utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        let Some(topic) = after_trigger(utterance, TRIGGERS) else {
            ctx.output.emit("What topic would you like me to look up?");
            return Flow::Continue;
        };

        ctx.output.emit(&format!("Searching Wikipedia for: {topic}"));
        match ctx.wiki.summary(&topic).await {
            Ok(summary) => ctx.output.emit(&summary),
            Err(LookupError::NotFound(_)) => {
                ctx.output
                    .emit("I couldn't find a Wikipedia page for that topic.");
            }
            Err(e @ LookupError::Network(_)) => {
                warn!(?e, topic, "wikipedia lookup failed");
                ctx.output
                    .emit("I'm having trouble reaching Wikipedia. Please check your connection.");
            }
        }
        Flow::Continue
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn test_missing_topic_asks_instead_of_fetching() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::for_tests(dir.path());

        block_on(wikipedia(&mut ctx, "wikipedia"));

        let emitted = ctx.output.emitted();
        assert_eq!(emitted.len(), 1);
        assert!(emitted[0].contains("What topic"));
    }

    #[test]
    fn test_topic_extraction_from_question_forms() {
        let arg = after_trigger("who is grace hopper", TRIGGERS);
        assert_eq!(arg.as_deref(), Some("grace hopper"));

        let arg = after_trigger("tell me about the moon landing", TRIGGERS);
        assert_eq!(arg.as_deref(), Some("the moon landing"));
    }
}
