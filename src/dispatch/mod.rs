//! Utterance dispatch: normalize, first match wins, fallback otherwise

mod table;

pub use table::{CommandEntry, CommandTable, Flow, Handler, HandlerFuture};

use tracing::debug;

use crate::context::Context;

/// Case-fold and trim an utterance before matching.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Route one utterance to exactly one handler.
///
/// Entries are scanned in registration order and the first whose trigger
/// phrase occurs in the normalized utterance wins; the handler receives
/// the full normalized utterance so it can extract arguments. Anything
/// unmatched, including empty input, goes to the fallback handler.
pub async fn dispatch(table: &CommandTable, ctx: &mut Context, raw: &str) -> Flow {
    let utterance = normalize(raw);

    match table.find(&utterance) {
        Some(entry) => {
            debug!(intent = entry.name, "dispatching");
            (entry.handler)(ctx, &utterance).await
        }
        None => {
            debug!("no trigger matched, using fallback");
            (table.fallback())(ctx, &utterance).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply_a<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
        Box::pin(async move {
            ctx.output.emit("A");
            Flow::Continue
        })
    }

    fn reply_b<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
        Box::pin(async move {
            ctx.output.emit("B");
            Flow::Continue
        })
    }

    fn reply_exit<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
        Box::pin(async move {
            ctx.output.emit("bye");
            Flow::Exit
        })
    }

    fn reply_fallback<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
        Box::pin(async move {
            ctx.output.emit("fallback");
            Flow::Continue
        })
    }

    fn echo_argument<'a>(ctx: &'a mut Context, utterance: &'a str) -> HandlerFuture<'a> {
        Box::pin(async move {
            ctx.output.emit(utterance);
            Flow::Continue
        })
    }

    fn test_table() -> CommandTable {
        let mut table = CommandTable::new(reply_fallback);
        table.register("a", &["open"], reply_a);
        table.register("b", &["open google"], reply_b);
        table.register("exit", &["goodbye"], reply_exit);
        table
    }

    #[test]
    fn test_normalize_case_folds_and_trims() {
        assert_eq!(normalize("  What TIME is it  "), "what time is it");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_exactly_one_handler_runs() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::for_tests(dir.path());
        let table = test_table();

        let flow = tokio_test::block_on(dispatch(&table, &mut ctx, "please OPEN something"));
        assert_eq!(flow, Flow::Continue);
        assert_eq!(ctx.output.emitted(), ["A"]);
    }

    #[test]
    fn test_registration_order_beats_specificity() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::for_tests(dir.path());
        let table = test_table();

        // "open" is registered before "open google", so the longer trigger
        // is shadowed. Table order is the contract, not trigger length.
        tokio_test::block_on(dispatch(&table, &mut ctx, "open google"));
        assert_eq!(ctx.output.emitted(), ["A"]);
    }

    #[test]
    fn test_unmatched_goes_to_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::for_tests(dir.path());
        let table = test_table();

        tokio_test::block_on(dispatch(&table, &mut ctx, "asdkjasd"));
        assert_eq!(ctx.output.emitted(), ["fallback"]);
    }

    #[test]
    fn test_empty_utterance_goes_to_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::for_tests(dir.path());
        let table = test_table();

        tokio_test::block_on(dispatch(&table, &mut ctx, ""));
        tokio_test::block_on(dispatch(&table, &mut ctx, "   \t "));
        assert_eq!(ctx.output.emitted(), ["fallback", "fallback"]);
    }

    #[test]
    fn test_exit_flow_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::for_tests(dir.path());
        let table = test_table();

        let flow = tokio_test::block_on(dispatch(&table, &mut ctx, "goodbye"));
        assert_eq!(flow, Flow::Exit);
    }

    #[test]
    fn test_handler_receives_normalized_utterance() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::for_tests(dir.path());
        let mut table = CommandTable::new(reply_fallback);
        table.register("echo", &["say"], echo_argument);

        tokio_test::block_on(dispatch(&table, &mut ctx, "  SAY Hello World "));
        assert_eq!(ctx.output.emitted(), ["say hello world"]);
    }
}
