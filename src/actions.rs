//! Fire-and-forget system actions
//!
//! Thin wrappers around platform commands for opening URLs and
//! applications, power control, and volume. Callers report failures to
//! the user; nothing here is allowed to take the session down.

use std::process::{Command, Stdio};

use anyhow::{Context as _, Result};
use tracing::{debug, info};

/// Power-management requests the system handler can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    Shutdown,
    Restart,
    Lock,
}

/// Direction for a volume nudge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeDirection {
    Up,
    Down,
}

/// Dispatches OS-level side effects
pub struct Actions {
    enabled: bool,
}

impl Actions {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// An inert variant for tests: every action logs and succeeds.
    #[cfg(test)]
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Open `url` in the default browser.
    pub fn open_url(&self, url: &str) -> Result<()> {
        if !self.enabled {
            debug!(url, "action suppressed");
            return Ok(());
        }
        info!(url, "opening browser");

        #[cfg(target_os = "macos")]
        let spawned = spawn("open", &[url]);
        #[cfg(target_os = "windows")]
        let spawned = spawn("cmd", &["/C", "start", "", url]);
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let spawned = spawn("xdg-open", &[url]);

        spawned.context("failed to open browser")
    }

    /// Launch an application by program name.
    pub fn launch(&self, program: &str) -> Result<()> {
        if !self.enabled {
            debug!(program, "action suppressed");
            return Ok(());
        }
        info!(program, "launching application");
        spawn(program, &[]).with_context(|| format!("failed to launch {program}"))
    }

    /// Issue a power-management command.
    pub fn power(&self, action: PowerAction) -> Result<()> {
        if !self.enabled {
            debug!(?action, "action suppressed");
            return Ok(());
        }
        info!(?action, "issuing power command");

        let (program, args): (&str, &[&str]) = match action {
            #[cfg(target_os = "windows")]
            PowerAction::Shutdown => ("shutdown", &["/s", "/t", "5"]),
            #[cfg(target_os = "windows")]
            PowerAction::Restart => ("shutdown", &["/r", "/t", "5"]),
            #[cfg(target_os = "windows")]
            PowerAction::Lock => ("rundll32.exe", &["user32.dll,LockWorkStation"]),

            #[cfg(not(target_os = "windows"))]
            PowerAction::Shutdown => ("shutdown", &["-h", "now"]),
            #[cfg(not(target_os = "windows"))]
            PowerAction::Restart => ("shutdown", &["-r", "now"]),
            #[cfg(target_os = "macos")]
            PowerAction::Lock => ("pmset", &["displaysleepnow"]),
            #[cfg(not(any(target_os = "macos", target_os = "windows")))]
            PowerAction::Lock => ("xdg-screensaver", &["lock"]),
        };
        spawn(program, args).with_context(|| format!("power command {action:?} failed"))
    }

    /// Nudge the master volume up or down by ten percent.
    pub fn volume(&self, direction: VolumeDirection) -> Result<()> {
        if !self.enabled {
            debug!(?direction, "action suppressed");
            return Ok(());
        }
        info!(?direction, "changing volume");
        volume_step(direction)
    }
}

#[cfg(target_os = "macos")]
fn volume_step(direction: VolumeDirection) -> Result<()> {
    let step = match direction {
        VolumeDirection::Up => "+ 10",
        VolumeDirection::Down => "- 10",
    };
    let script =
        format!("set volume output volume ((output volume of (get volume settings)) {step})");
    spawn("osascript", &["-e", &script]).context("volume change failed")
}

#[cfg(target_os = "windows")]
fn volume_step(_direction: VolumeDirection) -> Result<()> {
    anyhow::bail!("volume control is not supported on this platform")
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn volume_step(direction: VolumeDirection) -> Result<()> {
    let step = match direction {
        VolumeDirection::Up => "10%+",
        VolumeDirection::Down => "10%-",
    };
    spawn("amixer", &["-D", "pulse", "sset", "Master", step]).context("volume change failed")
}

impl Default for Actions {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a detached child and let it run; only a failed spawn is an error.
fn spawn(program: &str, args: &[&str]) -> Result<()> {
    Command::new(program)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("could not start {program}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_actions_always_succeed() {
        let actions = Actions::disabled();
        assert!(actions.open_url("https://example.com").is_ok());
        assert!(actions.launch("definitely-not-a-program").is_ok());
        assert!(actions.power(PowerAction::Shutdown).is_ok());
        assert!(actions.volume(VolumeDirection::Up).is_ok());
    }
}
