//! `prio search <term>`

use anyhow::Result;
use clap::Args;

use prio_core::Tracker;

use crate::render;

/// Case-insensitive substring search against goal titles. Pending matches
/// are listed before completed matches.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search term. A blank term matches nothing.
    pub term: String,
}

impl SearchArgs {
    pub fn run(self, tracker: &Tracker) -> Result<()> {
        let matches = tracker.search_by_title(&self.term);
        if matches.is_empty() {
            println!("No goals matching '{}'.", self.term.trim());
            return Ok(());
        }

        println!("{} goal(s) matching '{}':", matches.len(), self.term.trim());
        render::render_matches(&matches);
        Ok(())
    }
}
