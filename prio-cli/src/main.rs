//! Prio — priority goal tracker CLI.
//!
//! # Usage
//!
//! ```text
//! prio add <title> --priority <n>
//! prio list [--json]
//! prio done <id>
//! prio priority <id> <n>
//! prio search <term>
//! prio rm <id> [--yes]
//! prio clear [--yes]
//! ```
//!
//! Goals live under `~/.prio/goals/` as two JSON documents. The CLI is a
//! thin presentation layer: it validates input, calls one tracker
//! operation, then re-renders the list from tracker state.

mod commands;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    add::AddArgs, clear::ClearArgs, done::DoneArgs, list::ListArgs, priority::PriorityArgs,
    rm::RmArgs, search::SearchArgs,
};
use prio_core::{GoalStore, Tracker};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "prio",
    version,
    about = "Track short text goals, ordered by priority",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new goal to the pending list.
    Add(AddArgs),

    /// Show pending and completed goals.
    List(ListArgs),

    /// Mark a pending goal as completed.
    Done(DoneArgs),

    /// Change the priority of a pending goal.
    Priority(PriorityArgs),

    /// Search goal titles (case-insensitive substring).
    Search(SearchArgs),

    /// Delete a goal from either list.
    Rm(RmArgs),

    /// Remove all completed goals.
    Clear(ClearArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut tracker = open_tracker().context("failed to open goal store")?;

    match cli.command {
        Commands::Add(args) => args.run(&mut tracker),
        Commands::List(args) => args.run(&tracker),
        Commands::Done(args) => args.run(&mut tracker),
        Commands::Priority(args) => args.run(&mut tracker),
        Commands::Search(args) => args.run(&tracker),
        Commands::Rm(args) => args.run(&mut tracker),
        Commands::Clear(args) => args.run(&mut tracker),
    }
}

/// Construct the tracker over the default store at `~/.prio/goals/`.
fn open_tracker() -> Result<Tracker> {
    let dir = GoalStore::default_dir()?;
    let store = GoalStore::new(&dir)
        .with_context(|| format!("cannot create store directory '{}'", dir.display()))?;
    Ok(Tracker::open(store)?)
}
