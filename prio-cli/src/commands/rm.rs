//! `prio rm <id> [--yes]`

use anyhow::{bail, Context, Result};
use clap::Args;
use dialoguer::Confirm;

use prio_core::{GoalId, Tracker};

use crate::render;

/// Delete a goal from whichever list holds it.
#[derive(Args, Debug)]
pub struct RmArgs {
    /// Id of the goal (shown in `prio list`).
    pub id: String,

    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl RmArgs {
    pub fn run(self, tracker: &mut Tracker) -> Result<()> {
        if !self.yes {
            let confirmed = Confirm::new()
                .with_prompt(format!("Delete goal '{}'?", self.id))
                .default(false)
                .interact()
                .context("confirmation prompt failed; pass --yes to skip it")?;
            if !confirmed {
                println!("Aborted.");
                return Ok(());
            }
        }

        let id = GoalId::from(self.id.as_str());
        let removed = tracker
            .delete_goal(&id)
            .context("failed to save goal store")?;

        let Some(goal) = removed else {
            bail!("no goal with id '{}'", self.id);
        };

        println!("✓ Deleted '{}'", goal.title);
        render::render_lists(tracker);
        Ok(())
    }
}
