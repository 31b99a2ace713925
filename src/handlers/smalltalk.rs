//! Small-talk intents: jokes, pleasantries, identity

use crate::context::Context;
use crate::dispatch::{Flow, HandlerFuture};

pub const JOKE_TRIGGERS: &[&str] = &["tell me a joke", "joke", "make me laugh"];
pub const HOW_TRIGGERS: &[&str] = &["how are you", "how do you do"];
pub const NAME_TRIGGERS: &[&str] = &["your name", "who are you", "what are you called"];
pub const CREATOR_TRIGGERS: &[&str] = &["who made you", "who created you", "your creator"];

const JOKES: &[&str] = &[
    "Why do programmers prefer dark mode? Because light attracts bugs!",
    "Why did the computer go to the doctor? Because it had a virus!",
    "How many programmers does it take to change a lightbulb? None, that's a hardware problem.",
    "I told my computer I needed a break. Now it won't stop sending me Kit-Kat ads.",
    "Why did the borrow checker break up with the garbage collector? It couldn't stand being owned.",
];

pub fn joke<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        let pick = rand::random_range(0..JOKES.len());
        ctx.output.emit(JOKES[pick]);
        Flow::Continue
    })
}

pub fn how_are_you<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        let message = format!(
            "I'm doing great, thank you for asking! Ready to help you, {}.",
            ctx.config.user_name
        );
        ctx.output.emit(&message);
        Flow::Continue
    })
}

pub fn name<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        let message = format!(
            "My name is {}. I'm your personal voice assistant!",
            ctx.config.assistant_name
        );
        ctx.output.emit(&message);
        Flow::Continue
    })
}

pub fn creator<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        ctx.output
            .emit("I was put together by a developer using speech recognition and automation tools.");
        Flow::Continue
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn test_joke_emits_one_from_the_list() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::for_tests(dir.path());

        block_on(joke(&mut ctx, "tell me a joke"));

        let emitted = ctx.output.emitted();
        assert_eq!(emitted.len(), 1);
        assert!(JOKES.contains(&emitted[0].as_str()));
    }

    #[test]
    fn test_how_are_you_addresses_the_user() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::for_tests(dir.path());
        ctx.config.user_name = "Sam".to_string();

        block_on(how_are_you(&mut ctx, "how are you"));

        assert!(ctx.output.emitted()[0].contains("Sam"));
    }

    #[test]
    fn test_name_reports_current_assistant_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::for_tests(dir.path());
        ctx.config.assistant_name = "Nova".to_string();

        block_on(name(&mut ctx, "what is your name"));

        assert!(ctx.output.emitted()[0].contains("Nova"));
    }
}
