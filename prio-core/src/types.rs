//! Domain types for the prio tracker.
//!
//! All types are serializable/deserializable via serde + serde_json; the
//! persisted field names are the public storage shape (see `store`).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Opaque unique identifier for a [`Goal`]. Generated once at creation and
/// stable for the record's lifetime; the sole lookup/equality key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GoalId(pub String);

impl GoalId {
    /// A fresh random id. UUID v4 gives far more than the required entropy.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for GoalId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for GoalId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A single tracked goal.
///
/// `priority` is an integer rank where a smaller number denotes higher
/// urgency; `created_at` breaks ties between equal priorities. Unparseable
/// or negative priority input never reaches this type — the presentation
/// layer rejects it at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    pub priority: u32,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Construct a new pending goal with a fresh id and the current time.
    ///
    /// `title` non-emptiness (after trimming) is a caller precondition and
    /// is not re-validated here.
    pub fn new(title: &str, priority: u32) -> Self {
        Self {
            id: GoalId::generate(),
            title: title.to_owned(),
            priority,
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// Current collection sizes, as returned by [`Tracker::totals`].
///
/// [`Tracker::totals`]: crate::tracker::Tracker::totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub pending: usize,
    pub completed: usize,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_id_display_and_equality() {
        assert_eq!(GoalId::from("g-1").to_string(), "g-1");
        assert_eq!(GoalId::from("x"), GoalId::from(String::from("x")));
    }

    #[test]
    fn generated_ids_are_unique() {
        let ids: std::collections::HashSet<String> =
            (0..100).map(|_| GoalId::generate().0).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn new_goal_starts_pending() {
        let goal = Goal::new("Read Ch.1", 2);
        assert_eq!(goal.title, "Read Ch.1");
        assert_eq!(goal.priority, 2);
        assert!(!goal.completed);
    }

    #[test]
    fn goal_serde_roundtrip() {
        let goal = Goal::new("Task with émojis & spéçïal chars: <>&\"'", 1);
        let json = serde_json::to_string(&goal).expect("serialize");
        let back: Goal = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(goal, back);
    }
}
