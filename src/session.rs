//! Session loop state machine
//!
//! Handles transitions between Listening, Dispatching, and Terminated
//! based on utterances pulled from the input source. One utterance is
//! processed to completion before the next is requested; recognition
//! failures arrive as empty utterances and fall through to the fallback
//! handler, so the loop itself needs no error recovery.

use chrono::{Local, Timelike};
use tracing::{debug, info};

use crate::context::Context;
use crate::dispatch::{dispatch, CommandTable, Flow};
use crate::io::Input;

/// The three phases of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting on the input source for the next utterance
    Listening,
    /// Routing the current utterance to its handler
    Dispatching,
    /// Exit intent received or input source closed; the loop has ended
    Terminated,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Listening => write!(f, "Listening"),
            Phase::Dispatching => write!(f, "Dispatching"),
            Phase::Terminated => write!(f, "Terminated"),
        }
    }
}

/// Drives listen/dispatch rounds until an exit intent
pub struct Session {
    table: CommandTable,
    ctx: Context,
    input: Input,
    phase: Phase,
}

impl Session {
    pub fn new(table: CommandTable, ctx: Context, input: Input) -> Self {
        Self {
            table,
            ctx,
            input,
            phase: Phase::Listening,
        }
    }

    /// Current phase of the loop
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Greet the user, then listen and dispatch until terminated.
    pub async fn run(&mut self) {
        info!("session started in Listening phase");
        self.greet();

        while self.phase != Phase::Terminated {
            self.phase = Phase::Listening;
            debug!(phase = %self.phase, "awaiting utterance");

            match self.input.utterance().await {
                Some(raw) => self.process(&raw).await,
                None => {
                    info!("input source closed");
                    self.phase = Phase::Terminated;
                }
            }
        }

        info!("session ended");
    }

    /// Dispatch one utterance and advance the phase.
    pub async fn process(&mut self, raw: &str) {
        self.phase = Phase::Dispatching;
        debug!(phase = %self.phase, "processing utterance");

        self.phase = match dispatch(&self.table, &mut self.ctx, raw).await {
            Flow::Continue => Phase::Listening,
            Flow::Exit => {
                info!("exit intent received");
                Phase::Terminated
            }
        };
    }

    /// Time-of-day greeting spoken once at startup.
    fn greet(&mut self) {
        let greeting = match Local::now().hour() {
            5..=11 => "Good morning",
            12..=16 => "Good afternoon",
            17..=20 => "Good evening",
            _ => "Hello",
        };
        let message = format!(
            "{greeting}, {}! I'm {}, your voice assistant. \
             How can I help you today? Say 'help' for a list of commands.",
            self.ctx.config.user_name, self.ctx.config.assistant_name
        );
        self.ctx.output.emit(&message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::command_table;
    use tokio_test::block_on;

    fn test_session() -> (Session, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::for_tests(dir.path());
        let session = Session::new(command_table(), ctx, Input::text());
        (session, dir)
    }

    #[test]
    fn test_initial_phase_is_listening() {
        let (session, _dir) = test_session();
        assert_eq!(session.phase(), Phase::Listening);
    }

    #[test]
    fn test_ordinary_utterance_returns_to_listening() {
        let (mut session, _dir) = test_session();

        block_on(session.process("what time is it"));
        assert_eq!(session.phase(), Phase::Listening);
    }

    #[test]
    fn test_empty_utterance_returns_to_listening() {
        let (mut session, _dir) = test_session();

        block_on(session.process(""));
        assert_eq!(session.phase(), Phase::Listening);
    }

    #[test]
    fn test_exit_utterance_terminates() {
        let (mut session, _dir) = test_session();

        block_on(session.process("goodbye"));
        assert_eq!(session.phase(), Phase::Terminated);
    }

    #[test]
    fn test_greeting_names_both_parties() {
        let (mut session, _dir) = test_session();

        session.greet();
        let emitted = session.ctx.output.emitted();
        assert!(emitted[0].contains("User"));
        assert!(emitted[0].contains("Aria"));
    }
}
