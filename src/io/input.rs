//! Input source: typed lines or an external speech transcriber
//!
//! Voice mode shells out to the configured speech-to-text command and
//! bounds the wait with the configured listen timeout. Timeouts and
//! recognition failures surface as an empty utterance; only a closed
//! source (stdin EOF) returns `None`.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, info, warn};

use crate::config::Config;

/// Produces one utterance per session-loop iteration
pub enum Input {
    Text(TextInput),
    Voice(VoiceInput),
}

impl Input {
    /// Read utterances as lines typed on stdin.
    pub fn text() -> Self {
        Self::Text(TextInput {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        })
    }

    /// Read utterances from the configured transcriber command.
    ///
    /// Returns `None` when no `stt_command` is configured.
    pub fn voice(config: &Config) -> Option<Self> {
        let mut words = config.stt_command.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self::Voice(VoiceInput {
            program,
            args: words.collect(),
            wait: Duration::from_secs(config.timeout + config.phrase_time_limit),
            env: recognizer_env(config),
        }))
    }

    /// Next utterance. `Some("")` means silence, a timeout, or a device
    /// hiccup; `None` means the source is closed for good.
    pub async fn utterance(&mut self) -> Option<String> {
        match self {
            Self::Text(text) => text.next_line().await,
            Self::Voice(voice) => voice.listen().await,
        }
    }
}

/// Line-at-a-time keyboard input
pub struct TextInput {
    lines: Lines<BufReader<Stdin>>,
}

impl TextInput {
    async fn next_line(&mut self) -> Option<String> {
        print!("> ");
        let _ = std::io::Write::flush(&mut std::io::stdout());

        match self.lines.next_line().await {
            Ok(Some(line)) => Some(line),
            Ok(None) => None,
            Err(e) => {
                warn!(?e, "stdin read failed");
                None
            }
        }
    }
}

/// One-shot external transcriber invocation per utterance
pub struct VoiceInput {
    program: String,
    args: Vec<String>,
    wait: Duration,
    env: Vec<(&'static str, String)>,
}

impl VoiceInput {
    async fn listen(&mut self) -> Option<String> {
        info!("listening");

        let mut command = tokio::process::Command::new(&self.program);
        command
            .args(&self.args)
            .envs(self.env.iter().map(|(k, v)| (*k, v.as_str())))
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        match tokio::time::timeout(self.wait, command.output()).await {
            Err(_) => {
                debug!("no speech before timeout");
                Some(String::new())
            }
            Ok(Err(e)) => {
                warn!(?e, program = %self.program, "transcriber failed to run");
                // Pause so a broken command does not spin the loop.
                tokio::time::sleep(Duration::from_secs(1)).await;
                Some(String::new())
            }
            Ok(Ok(out)) if !out.status.success() => {
                warn!(status = ?out.status, "transcriber exited with failure");
                Some(String::new())
            }
            Ok(Ok(out)) => {
                let text = String::from_utf8_lossy(&out.stdout).trim().to_string();
                if text.is_empty() {
                    debug!("no speech recognized");
                }
                Some(text)
            }
        }
    }
}

/// Recognition parameters exported to the transcriber process.
fn recognizer_env(config: &Config) -> Vec<(&'static str, String)> {
    vec![
        ("ARIA_LANGUAGE", config.language.clone()),
        ("ARIA_PAUSE_THRESHOLD", config.pause_threshold.to_string()),
        ("ARIA_ENERGY_THRESHOLD", config.energy_threshold.to_string()),
        ("ARIA_DYNAMIC_ENERGY", config.dynamic_energy.to_string()),
        ("ARIA_PHRASE_TIME_LIMIT", config.phrase_time_limit.to_string()),
    ]
}
