//! Configuration loading, validation, and persistence
//!
//! Settings are stored as a flat JSON record. Missing keys fill from
//! defaults on load, out-of-range numerics are clamped, and every save
//! goes through a temp-file-then-rename so a crash mid-write cannot
//! leave a torn file behind.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::store::write_atomic;

/// Which pending task "complete task" marks done when no argument
/// disambiguates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCompletion {
    /// Last-in semantics: the most recently added incomplete task.
    MostRecent,
    /// First-in semantics: the oldest incomplete task.
    Oldest,
}

impl Default for TaskCompletion {
    fn default() -> Self {
        Self::MostRecent
    }
}

/// User-adjustable assistant settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name the assistant answers to and speaks as
    pub assistant_name: String,

    /// Name the assistant addresses the user by
    pub user_name: String,

    /// Speech rate in words per minute, passed to the TTS command
    pub voice_rate: u32,

    /// Speech volume in [0, 1]
    pub voice_volume: f32,

    /// Recognition language tag, e.g. "en-US"
    pub language: String,

    /// Seconds of silence that end a phrase
    pub pause_threshold: f32,

    /// Microphone energy level considered speech
    pub energy_threshold: u32,

    /// Whether the recognizer adapts the energy threshold to ambient noise
    pub dynamic_energy: bool,

    /// Seconds to wait for speech to start before giving up
    pub timeout: u64,

    /// Maximum seconds a single phrase may run
    pub phrase_time_limit: u64,

    /// External speech-to-text command for voice mode; empty disables
    /// voice input
    pub stt_command: String,

    /// Policy for "complete task" without an argument
    pub task_completion: TaskCompletion,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assistant_name: "Aria".to_string(),
            user_name: "User".to_string(),
            voice_rate: 175,
            voice_volume: 1.0,
            language: "en-US".to_string(),
            pause_threshold: 0.8,
            energy_threshold: 300,
            dynamic_energy: true,
            timeout: 5,
            phrase_time_limit: 10,
            stt_command: String::new(),
            task_completion: TaskCompletion::default(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, creating it with defaults when absent.
    ///
    /// Missing keys fill from defaults; out-of-range values are clamped with
    /// a warning. An existing but unparseable file is a startup error.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                warn!(?e, path = %path.display(), "could not write default config");
            } else {
                info!(path = %path.display(), "wrote default config");
            }
            return Ok(config);
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        let clamped = config.sanitize();
        if !clamped.is_empty() {
            warn!(fields = ?clamped, "clamped out-of-range settings");
        }

        Ok(config)
    }

    /// Persist the configuration via write-new-then-replace.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        write_atomic(path, &json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Clamp numeric fields into their documented ranges.
    ///
    /// Returns the names of the fields that were adjusted.
    fn sanitize(&mut self) -> Vec<&'static str> {
        let mut clamped = Vec::new();
        let defaults = Self::default();

        if self.voice_rate == 0 {
            self.voice_rate = defaults.voice_rate;
            clamped.push("voice_rate");
        }
        if !self.voice_volume.is_finite() {
            self.voice_volume = defaults.voice_volume;
            clamped.push("voice_volume");
        } else if !(0.0..=1.0).contains(&self.voice_volume) {
            self.voice_volume = self.voice_volume.clamp(0.0, 1.0);
            clamped.push("voice_volume");
        }
        if !self.pause_threshold.is_finite() || self.pause_threshold <= 0.0 {
            self.pause_threshold = defaults.pause_threshold;
            clamped.push("pause_threshold");
        }
        if self.energy_threshold == 0 {
            self.energy_threshold = defaults.energy_threshold;
            clamped.push("energy_threshold");
        }
        if self.timeout == 0 {
            self.timeout = defaults.timeout;
            clamped.push("timeout");
        }
        if self.phrase_time_limit == 0 {
            self.phrase_time_limit = defaults.phrase_time_limit;
            clamped.push("phrase_time_limit");
        }

        clamped
    }

    /// Primary language subtag for the Wikipedia host ("en-US" -> "en").
    pub fn wiki_lang(&self) -> &str {
        let lang = self.language.split('-').next().unwrap_or_default();
        if lang.is_empty() {
            "en"
        } else {
            lang
        }
    }
}

/// File locations for the assistant's flat-file stores
#[derive(Debug, Clone)]
pub struct Paths {
    /// Settings record
    pub config: PathBuf,

    /// Append-only note log, one note per line
    pub notes: PathBuf,

    /// Ordered to-do list as a JSON array
    pub tasks: PathBuf,
}

impl Paths {
    /// Resolve store paths under `data_dir`, creating the directory.
    pub fn in_dir(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("failed to create {}", data_dir.display()))?;
        Ok(Self {
            config: data_dir.join("config.json"),
            notes: data_dir.join("notes.txt"),
            tasks: data_dir.join("todo.json"),
        })
    }

    /// Default data directory: the platform data dir, else the home
    /// directory, with an `aria` subfolder.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("aria")
    }
}
