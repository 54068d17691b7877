//! `prio clear [--yes]`

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::Confirm;

use prio_core::Tracker;

use crate::render;

/// Remove all completed goals. Pending goals are untouched.
#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl ClearArgs {
    pub fn run(self, tracker: &mut Tracker) -> Result<()> {
        let count = tracker.totals().completed;
        if count == 0 {
            println!("No completed goals to clear.");
            return Ok(());
        }

        if !self.yes {
            let confirmed = Confirm::new()
                .with_prompt(format!("Remove {count} completed goal(s)?"))
                .default(false)
                .interact()
                .context("confirmation prompt failed; pass --yes to skip it")?;
            if !confirmed {
                println!("Aborted.");
                return Ok(());
            }
        }

        let removed = tracker
            .clear_completed()
            .context("failed to save goal store")?;

        println!("✓ Cleared {removed} completed goal(s)");
        render::render_lists(tracker);
        Ok(())
    }
}
