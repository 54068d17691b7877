//! Prio core library — goal domain types, tracker, persistence, errors.
//!
//! Public API surface:
//! - [`types`] — [`Goal`], [`GoalId`], [`Totals`]
//! - [`error`] — [`TrackerError`]
//! - [`store`] — [`GoalStore`] persistence adapter
//! - [`tracker`] — [`Tracker`] CRUD and search operations

pub mod error;
pub mod store;
pub mod tracker;
pub mod types;

pub use error::TrackerError;
pub use store::GoalStore;
pub use tracker::Tracker;
pub use types::{Goal, GoalId, Totals};
