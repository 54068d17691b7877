//! Table rendering for goal lists.
//!
//! Every mutating command calls [`render_lists`] after its operation so the
//! user always sees the post-mutation state.

use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use prio_core::{Goal, Tracker};

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "prio")]
    priority: u32,
    #[tabled(rename = "title")]
    title: String,
    #[tabled(rename = "created")]
    created: String,
    #[tabled(rename = "id")]
    id: String,
}

impl From<&Goal> for GoalRow {
    fn from(goal: &Goal) -> Self {
        Self {
            priority: goal.priority,
            title: goal.title.clone(),
            created: goal.created_at.format("%Y-%m-%d %H:%M").to_string(),
            id: goal.id.to_string(),
        }
    }
}

/// Summary line plus one table per non-empty collection.
pub fn render_lists(tracker: &Tracker) {
    let totals = tracker.totals();
    println!(
        "prio v{} | {} pending | {} completed",
        env!("CARGO_PKG_VERSION"),
        totals.pending,
        totals.completed,
    );

    if totals.pending == 0 && totals.completed == 0 {
        println!("No goals tracked. Run: prio add <title> --priority <n>");
        return;
    }

    if totals.pending > 0 {
        println!("{}", "PENDING".bold());
        println!("{}", goal_table(tracker.pending().iter()));
    }
    if totals.completed > 0 {
        println!("{}", "COMPLETED".green().bold());
        println!("{}", goal_table(tracker.completed().iter()));
    }
}

/// A single table of goals with a done/pending state column, used by search.
pub fn render_matches(goals: &[&Goal]) {
    #[derive(Tabled)]
    struct MatchRow {
        #[tabled(rename = "state")]
        state: String,
        #[tabled(rename = "prio")]
        priority: u32,
        #[tabled(rename = "title")]
        title: String,
        #[tabled(rename = "id")]
        id: String,
    }

    let rows: Vec<MatchRow> = goals
        .iter()
        .map(|goal| MatchRow {
            state: if goal.completed {
                "done".green().to_string()
            } else {
                "pending".to_string()
            },
            priority: goal.priority,
            title: goal.title.clone(),
            id: goal.id.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

fn goal_table<'a>(goals: impl Iterator<Item = &'a Goal>) -> Table {
    let rows: Vec<GoalRow> = goals.map(GoalRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table
}
