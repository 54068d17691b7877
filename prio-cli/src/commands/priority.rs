//! `prio priority <id> <n>`

use anyhow::{bail, Context, Result};
use clap::Args;

use prio_core::{GoalId, Tracker};

use crate::render;

/// Change the priority of a pending goal. Completed goals cannot be
/// reprioritized.
#[derive(Args, Debug)]
pub struct PriorityArgs {
    /// Id of the pending goal (shown in `prio list`).
    pub id: String,

    /// New priority rank; 1 is highest.
    pub priority: u32,
}

impl PriorityArgs {
    pub fn run(self, tracker: &mut Tracker) -> Result<()> {
        let id = GoalId::from(self.id.as_str());
        let updated = tracker
            .update_priority(&id, self.priority)
            .context("failed to save goal store")?;

        let Some(goal) = updated else {
            bail!("no pending goal with id '{}'", self.id);
        };

        println!("✓ '{}' is now priority {}", goal.title, goal.priority);
        render::render_lists(tracker);
        Ok(())
    }
}
