//! perch binary.
//!
//! Loads a timeline config and an offline feed, refreshes every timeline once,
//! then replays navigation commands, printing the pane state after each.
//!
//! Usage:
//!   perch --config perch.ron --feed feed.json next expand-previous status-next
//!
//!   # More logging
//!   RUST_LOG=perch_timeline=debug perch --config perch.ron

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use perch::{Command, Feed, PerchConfig, build_list, render};

/// Replay timeline navigation against an offline feed.
#[derive(Parser, Debug)]
#[command(name = "perch")]
#[command(about = "Replay timeline navigation against an offline feed")]
struct Args {
    /// Timeline config (RON)
    #[arg(short, long)]
    config: PathBuf,

    /// Feed fixture (JSON object of source name → statuses)
    #[arg(short, long)]
    feed: Option<PathBuf>,

    /// Skip the initial refresh of every timeline
    #[arg(long)]
    no_refresh: bool,

    /// Commands to replay, in order (e.g. next, expand-previous, status-last)
    commands: Vec<Command>,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the rendered panes
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();

    let config = PerchConfig::load(&args.config)
        .with_context(|| format!("loading config {}", args.config.display()))?;
    let feed = match &args.feed {
        Some(path) => Feed::load(path).with_context(|| format!("loading feed {}", path.display()))?,
        None => {
            tracing::info!("no feed given, timelines will stay empty");
            Feed::default()
        }
    };

    let mut list = build_list(&config, feed);

    if !args.no_refresh
        && let Err(e) = list.update_all()
    {
        tracing::warn!(error = %e, "initial refresh incomplete");
    }
    print!("{}", render(&list));

    for command in args.commands {
        println!("> {command}");
        if let Err(e) = command.apply(&mut list) {
            tracing::warn!(%command, error = %e, "command failed");
        }
        print!("{}", render(&list));
    }

    tracing::info!("done");
    Ok(())
}
