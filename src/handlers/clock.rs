//! Time and date intents

use chrono::Local;

use crate::context::Context;
use crate::dispatch::{Flow, HandlerFuture};

pub const TIME_TRIGGERS: &[&str] = &["what time", "current time", "time is it"];
pub const DATE_TRIGGERS: &[&str] = &["what date", "today's date", "what day"];

pub fn time<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        let now = Local::now();
        let message = format!("The current time is {}.", now.format("%I:%M %p"));
        ctx.output.emit(&message);
        Flow::Continue
    })
}

pub fn date<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        let now = Local::now();
        let message = format!("Today is {}.", now.format("%A, %B %d, %Y"));
        ctx.output.emit(&message);
        Flow::Continue
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn test_time_emits_one_response() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::for_tests(dir.path());

        block_on(time(&mut ctx, "what time is it"));

        let emitted = ctx.output.emitted();
        assert_eq!(emitted.len(), 1);
        assert!(emitted[0].starts_with("The current time is"));
    }

    #[test]
    fn test_date_names_the_weekday() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::for_tests(dir.path());

        block_on(date(&mut ctx, "what's today's date"));

        let emitted = ctx.output.emitted();
        assert!(emitted[0].starts_with("Today is"));
        assert!(emitted[0].ends_with("."));
    }
}
