//! Tracker — owner and sole mutator of the pending and completed collections.
//!
//! # Ordering
//!
//! Pending is kept sorted by `(priority ascending, created_at ascending)`
//! after every add or priority update; 1 is the highest priority. Completed
//! is append-only in completion order and never re-sorted.
//!
//! # Persistence
//!
//! Every mutating operation writes through to the injected [`GoalStore`]
//! before returning. Lookup misses are `Ok(None)`, never errors; only I/O
//! and serialization failures surface as [`TrackerError`].

use crate::error::TrackerError;
use crate::store::GoalStore;
use crate::types::{Goal, GoalId, Totals};

/// The goal tracker: two ordered collections plus the store they write
/// through to.
///
/// Constructed by and passed into the presentation layer — there is no
/// process-wide instance, so tests can run any number of independent
/// trackers against `TempDir`-backed stores.
pub struct Tracker {
    pending: Vec<Goal>,
    completed: Vec<Goal>,
    store: GoalStore,
}

impl Tracker {
    /// Open a tracker over `store`, restoring both collections.
    ///
    /// Corrupt store documents have already been reset to empty by
    /// [`GoalStore::load`]; the pending sort order is re-established here
    /// in case the documents were edited by hand.
    pub fn open(store: GoalStore) -> Result<Self, TrackerError> {
        let (pending, completed) = store.load()?;
        let mut tracker = Self {
            pending,
            completed,
            store,
        };
        tracker.sort_pending();
        Ok(tracker)
    }

    /// Pending goals in priority order.
    pub fn pending(&self) -> &[Goal] {
        &self.pending
    }

    /// Completed goals in completion order.
    pub fn completed(&self) -> &[Goal] {
        &self.completed
    }

    /// Add a new goal to pending and return a clone of it.
    pub fn add_goal(&mut self, title: &str, priority: u32) -> Result<Goal, TrackerError> {
        let goal = Goal::new(title, priority);
        self.pending.push(goal.clone());
        self.sort_pending();
        self.save()?;
        Ok(goal)
    }

    /// Move the goal with `id` from pending to the end of completed.
    ///
    /// Returns the moved goal, or `None` (no state change) if `id` is not
    /// in pending — including ids that are already completed.
    pub fn complete_goal(&mut self, id: &GoalId) -> Result<Option<Goal>, TrackerError> {
        let Some(index) = self.pending.iter().position(|g| g.id == *id) else {
            return Ok(None);
        };
        let mut goal = self.pending.remove(index);
        goal.completed = true;
        self.completed.push(goal.clone());
        self.save()?;
        Ok(Some(goal))
    }

    /// Remove the goal with `id` from whichever collection holds it.
    ///
    /// Pending is checked first. Returns the removed goal, or `None` if the
    /// id is unknown to both collections.
    pub fn delete_goal(&mut self, id: &GoalId) -> Result<Option<Goal>, TrackerError> {
        if let Some(index) = self.pending.iter().position(|g| g.id == *id) {
            let goal = self.pending.remove(index);
            self.save()?;
            return Ok(Some(goal));
        }
        if let Some(index) = self.completed.iter().position(|g| g.id == *id) {
            let goal = self.completed.remove(index);
            self.save()?;
            return Ok(Some(goal));
        }
        Ok(None)
    }

    /// Change the priority of a pending goal and re-sort pending.
    ///
    /// Only operates on pending: a completed goal's priority cannot be
    /// updated, by design. Returns the updated goal, or `None` (no state
    /// change) if `id` is not in pending.
    pub fn update_priority(
        &mut self,
        id: &GoalId,
        new_priority: u32,
    ) -> Result<Option<Goal>, TrackerError> {
        let Some(goal) = self.pending.iter_mut().find(|g| g.id == *id) else {
            return Ok(None);
        };
        goal.priority = new_priority;
        let updated = goal.clone();
        self.sort_pending();
        self.save()?;
        Ok(Some(updated))
    }

    /// Case-insensitive substring search against goal titles.
    ///
    /// A blank term (after trimming) matches nothing — search is opt-in,
    /// not a "show all" shortcut. Matching pending goals come first, in
    /// pending order, followed by matching completed goals in completed
    /// order.
    pub fn search_by_title(&self, term: &str) -> Vec<&Goal> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.pending
            .iter()
            .chain(self.completed.iter())
            .filter(|g| g.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Empty the completed collection and return how many goals were
    /// removed. Pending is untouched.
    pub fn clear_completed(&mut self) -> Result<usize, TrackerError> {
        let removed = self.completed.len();
        self.completed.clear();
        self.save()?;
        Ok(removed)
    }

    /// Current collection sizes.
    pub fn totals(&self) -> Totals {
        Totals {
            pending: self.pending.len(),
            completed: self.completed.len(),
        }
    }

    fn sort_pending(&mut self) {
        // Stable sort: ties beyond (priority, created_at) keep their order.
        self.pending.sort_by_key(|g| (g.priority, g.created_at));
    }

    fn save(&self) -> Result<(), TrackerError> {
        self.store.save(&self.pending, &self.completed)
    }
}
