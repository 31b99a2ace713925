//! System intents: power control, volume, application launching

use tracing::warn;

use crate::actions::{PowerAction, VolumeDirection};
use crate::context::Context;
use crate::dispatch::{Flow, HandlerFuture};

pub const SHUTDOWN_TRIGGERS: &[&str] = &["shut down", "shutdown", "power off"];
pub const RESTART_TRIGGERS: &[&str] = &["restart", "reboot"];
pub const LOCK_TRIGGERS: &[&str] = &["lock screen", "lock computer", "lock the screen"];
pub const VOLUME_UP_TRIGGERS: &[&str] = &["volume up", "increase volume", "louder"];
pub const VOLUME_DOWN_TRIGGERS: &[&str] = &["volume down", "decrease volume", "quieter"];
pub const OPEN_APP_TRIGGERS: &[&str] = &[
    "open calculator",
    "open notepad",
    "open paint",
    "open file manager",
];

/// Spoken app names mapped to launchable programs.
#[cfg(target_os = "windows")]
const APPS: &[(&str, &str)] = &[
    ("calculator", "calc"),
    ("notepad", "notepad"),
    ("paint", "mspaint"),
    ("file manager", "explorer"),
];

#[cfg(not(target_os = "windows"))]
const APPS: &[(&str, &str)] = &[
    ("calculator", "gnome-calculator"),
    ("notepad", "gedit"),
    ("paint", "kolourpaint"),
    ("file manager", "nautilus"),
];

pub fn shutdown<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        ctx.output.emit("Shutting down. Goodbye!");
        if let Err(e) = ctx.actions.power(PowerAction::Shutdown) {
            warn!(?e, "shutdown failed");
            ctx.output.emit("I couldn't issue the shutdown command.");
        }
        Flow::Continue
    })
}

pub fn restart<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        ctx.output.emit("Restarting. See you soon!");
        if let Err(e) = ctx.actions.power(PowerAction::Restart) {
            warn!(?e, "restart failed");
            ctx.output.emit("I couldn't issue the restart command.");
        }
        Flow::Continue
    })
}

pub fn lock<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        ctx.output.emit("Locking the screen.");
        if let Err(e) = ctx.actions.power(PowerAction::Lock) {
            warn!(?e, "lock failed");
            ctx.output.emit("I couldn't lock the screen.");
        }
        Flow::Continue
    })
}

pub fn volume_up<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        match ctx.actions.volume(VolumeDirection::Up) {
            Ok(()) => ctx.output.emit("Volume increased."),
            Err(e) => {
                warn!(?e, "volume change failed");
                ctx.output.emit("I couldn't change the volume.");
            }
        }
        Flow::Continue
    })
}

pub fn volume_down<'a>(ctx: &'a mut Context, _utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        match ctx.actions.volume(VolumeDirection::Down) {
            Ok(()) => ctx.output.emit("Volume decreased."),
            Err(e) => {
                warn!(?e, "volume change failed");
                ctx.output.emit("I couldn't change the volume.");
            }
        }
        Flow::Continue
    })
}

pub fn open_app<'a>(ctx: &'a mut Context, utterance: &'a str) -> HandlerFuture<'a> {
    Box::pin(async move {
        for (app, program) in APPS {
            if utterance.contains(app) {
                ctx.output.emit(&format!("Opening {app}."));
                if let Err(e) = ctx.actions.launch(program) {
                    warn!(?e, app, "app launch failed");
                    ctx.output.emit(&format!("I couldn't open {app}."));
                }
                return Flow::Continue;
            }
        }
        ctx.output.emit("I don't know how to open that application.");
        Flow::Continue
    })
}
