//! aria: a voice/text command assistant
//!
//! Pulls one utterance at a time from the input source (microphone
//! transcriber or stdin), routes it through an ordered keyword table to
//! exactly one intent handler, and speaks/prints the response. Notes,
//! to-do items, and settings live in flat files under the data
//! directory and survive across sessions.

mod actions;
mod config;
mod context;
mod dispatch;
mod handlers;
mod io;
mod lookup;
mod session;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::actions::Actions;
use crate::config::{Config, Paths};
use crate::context::Context;
use crate::io::{Input, Output};
use crate::lookup::WikiClient;
use crate::session::Session;

/// Voice/text command assistant with keyword dispatch
#[derive(Parser)]
#[command(name = "aria", version)]
struct Cli {
    /// Type commands instead of speaking them
    #[arg(long)]
    text: bool,

    /// Directory for the config, note, and to-do files
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!(version = env!("CARGO_PKG_VERSION"), "aria starting");

    let data_dir = cli.data_dir.unwrap_or_else(Paths::default_dir);
    let paths = Paths::in_dir(&data_dir)?;
    let config = Config::load_or_create(&paths.config)?;
    info!(
        assistant = %config.assistant_name,
        data_dir = %data_dir.display(),
        "configuration loaded"
    );

    // Voice mode needs a configured transcriber; fall back to typed input
    // rather than refusing to start.
    let input = if cli.text {
        Input::text()
    } else {
        match Input::voice(&config) {
            Some(voice) => voice,
            None => {
                warn!("no stt_command configured, falling back to typed input");
                Input::text()
            }
        }
    };

    let output = Output::new(&config);
    let wiki = WikiClient::new(config.wiki_lang())?;
    let ctx = Context::new(config, &paths, output, wiki, Actions::new());

    let table = handlers::command_table();
    info!(intents = table.len(), "command table built");

    let mut session = Session::new(table, ctx, input);
    session.run().await;

    Ok(())
}
