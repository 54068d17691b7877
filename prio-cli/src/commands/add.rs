//! `prio add <title> --priority <n>`

use anyhow::{bail, Context, Result};
use clap::Args;

use prio_core::Tracker;

use crate::render;

/// Add a new goal to the pending list.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Goal title (e.g. "Write essay"). Leading/trailing whitespace is
    /// trimmed; an empty title is rejected.
    pub title: String,

    /// Priority rank; 1 is highest. Must be a non-negative integer.
    #[arg(long, short = 'p')]
    pub priority: u32,
}

impl AddArgs {
    pub fn run(self, tracker: &mut Tracker) -> Result<()> {
        let title = self.title.trim();
        if title.is_empty() {
            bail!("goal title must not be empty");
        }

        let goal = tracker
            .add_goal(title, self.priority)
            .context("failed to save new goal")?;

        println!("✓ Added '{}' (priority {}, id {})", goal.title, goal.priority, goal.id);
        render::render_lists(tracker);
        Ok(())
    }
}
