//! Output sink: console responses with best-effort speech
//!
//! Responses always print; speech goes through the platform TTS command
//! and is skipped with a debug log when that command is unavailable, so
//! emitting text can never fail.

use std::process::Command;

use anyhow::Result;
use tracing::debug;

use crate::config::Config;

/// Renders assistant responses to the console and the speakers
pub struct Output {
    name: String,
    rate: u32,
    volume: f32,
    sink: Sink,
}

enum Sink {
    /// Print with the assistant-name prefix and speak aloud
    Speech,
    /// Collect emitted lines for assertions
    #[cfg(test)]
    Capture(std::cell::RefCell<Vec<String>>),
}

impl Output {
    /// Build the console/speech sink from the configured voice parameters.
    pub fn new(config: &Config) -> Self {
        Self {
            name: config.assistant_name.clone(),
            rate: config.voice_rate,
            volume: config.voice_volume,
            sink: Sink::Speech,
        }
    }

    /// Build a sink that records emissions instead of rendering them.
    #[cfg(test)]
    pub fn capture() -> Self {
        Self {
            name: "Aria".to_string(),
            rate: 175,
            volume: 1.0,
            sink: Sink::Capture(std::cell::RefCell::new(Vec::new())),
        }
    }

    /// Update the spoken-as name after a settings change.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Render one response. Never fails; a missing TTS command only
    /// downgrades to console output.
    pub fn emit(&self, text: &str) {
        match &self.sink {
            Sink::Speech => {
                println!("{}: {}", self.name, text);
                if let Err(e) = speak(text, self.rate, self.volume) {
                    debug!(?e, "speech unavailable, printed only");
                }
            }
            #[cfg(test)]
            Sink::Capture(lines) => lines.borrow_mut().push(text.to_string()),
        }
    }

    /// Everything emitted so far, in order.
    #[cfg(test)]
    pub fn emitted(&self) -> Vec<String> {
        match &self.sink {
            Sink::Capture(lines) => lines.borrow().clone(),
            _ => Vec::new(),
        }
    }
}

/// Speak `text` through the platform TTS command, waiting for it to finish
/// so responses do not overlap.
#[cfg(target_os = "macos")]
fn speak(text: &str, rate: u32, _volume: f32) -> Result<()> {
    Command::new("say")
        .arg("-r")
        .arg(rate.to_string())
        .arg(text)
        .output()?;
    Ok(())
}

#[cfg(target_os = "windows")]
fn speak(text: &str, _rate: u32, volume: f32) -> Result<()> {
    let script = format!(
        "$v = New-Object -ComObject SAPI.SpVoice; $v.Volume = {}; $v.Speak('{}')",
        (volume * 100.0) as u32,
        text.replace('\'', ""),
    );
    Command::new("powershell")
        .args(["-NoProfile", "-Command", &script])
        .output()?;
    Ok(())
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn speak(text: &str, rate: u32, volume: f32) -> Result<()> {
    Command::new("espeak")
        .arg("-s")
        .arg(rate.to_string())
        .arg("-a")
        .arg(((volume * 200.0) as u32).to_string())
        .arg(text)
        .output()?;
    Ok(())
}
