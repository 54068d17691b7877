//! `prio done <id>`

use anyhow::{bail, Context, Result};
use clap::Args;

use prio_core::{GoalId, Tracker};

use crate::render;

/// Mark a pending goal as completed.
#[derive(Args, Debug)]
pub struct DoneArgs {
    /// Id of the pending goal (shown in `prio list`).
    pub id: String,
}

impl DoneArgs {
    pub fn run(self, tracker: &mut Tracker) -> Result<()> {
        let id = GoalId::from(self.id.as_str());
        let moved = tracker
            .complete_goal(&id)
            .context("failed to save goal store")?;

        let Some(goal) = moved else {
            bail!("no pending goal with id '{}'", self.id);
        };

        println!("✓ Completed '{}'", goal.title);
        render::render_lists(tracker);
        Ok(())
    }
}
