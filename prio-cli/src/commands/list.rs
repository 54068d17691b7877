//! `prio list [--json]`

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use prio_core::{Goal, Totals, Tracker};

use crate::render;

/// Show pending and completed goals.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ListJson<'a> {
    totals: Totals,
    pending: &'a [Goal],
    completed: &'a [Goal],
}

impl ListArgs {
    pub fn run(self, tracker: &Tracker) -> Result<()> {
        if self.json {
            let payload = ListJson {
                totals: tracker.totals(),
                pending: tracker.pending(),
                completed: tracker.completed(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).context("failed to serialize list JSON")?
            );
            return Ok(());
        }

        render::render_lists(tracker);
        Ok(())
    }
}
