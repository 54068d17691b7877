//! Persistence tests for `prio-core` — state must survive a fresh
//! `Tracker` opened over the same store directory.

use prio_core::{GoalStore, Tracker};
use rstest::rstest;
use tempfile::TempDir;

fn open_tracker(dir: &std::path::Path) -> Tracker {
    let store = GoalStore::new(dir).expect("create store");
    Tracker::open(store).expect("open tracker")
}

#[test]
fn tracker_survives_reopen_with_identical_state() {
    let tmp = TempDir::new().expect("tempdir");
    let dir = tmp.path().join("goals");

    let (ids, done_id) = {
        let mut tracker = open_tracker(&dir);
        let a = tracker.add_goal("Read Ch.1", 2).expect("add");
        let b = tracker.add_goal("Write essay", 1).expect("add");
        let c = tracker.add_goal("Buy groceries", 3).expect("add");
        tracker.complete_goal(&c.id).expect("complete");
        (vec![a.id, b.id, c.id.clone()], c.id)
    };

    let tracker = open_tracker(&dir);

    // Same id set across both collections.
    let mut reloaded_ids: Vec<_> = tracker
        .pending()
        .iter()
        .chain(tracker.completed().iter())
        .map(|g| g.id.clone())
        .collect();
    let mut expected = ids.clone();
    reloaded_ids.sort_by(|a, b| a.0.cmp(&b.0));
    expected.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(reloaded_ids, expected);

    // Pending order and field values survive the round trip.
    let pending_titles: Vec<_> = tracker.pending().iter().map(|g| g.title.as_str()).collect();
    assert_eq!(pending_titles, vec!["Write essay", "Read Ch.1"]);
    assert_eq!(tracker.pending()[0].priority, 1);
    assert_eq!(tracker.pending()[1].priority, 2);

    assert_eq!(tracker.completed().len(), 1);
    assert_eq!(tracker.completed()[0].id, done_id);
    assert!(tracker.completed()[0].completed);
}

#[test]
fn reopen_after_corruption_starts_empty() {
    let tmp = TempDir::new().expect("tempdir");
    let dir = tmp.path().join("goals");

    {
        let mut tracker = open_tracker(&dir);
        tracker.add_goal("Doomed", 1).expect("add");
    }
    std::fs::write(dir.join("pending.json"), "][").expect("corrupt");

    let tracker = open_tracker(&dir);
    assert!(tracker.pending().is_empty());
    assert!(tracker.completed().is_empty());
}

#[test]
fn hand_edited_pending_is_resorted_on_open() {
    let tmp = TempDir::new().expect("tempdir");
    let dir = tmp.path().join("goals");

    {
        let mut tracker = open_tracker(&dir);
        tracker.add_goal("Low", 9).expect("add");
        tracker.add_goal("High", 1).expect("add");
    }

    // Reverse the stored order by hand; open() must restore the sort.
    let raw = std::fs::read_to_string(dir.join("pending.json")).expect("read");
    let mut goals: Vec<serde_json::Value> = serde_json::from_str(&raw).expect("parse");
    goals.reverse();
    std::fs::write(
        dir.join("pending.json"),
        serde_json::to_string(&goals).expect("serialize"),
    )
    .expect("write");

    let tracker = open_tracker(&dir);
    let titles: Vec<_> = tracker.pending().iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["High", "Low"]);
}

#[rstest]
#[case("essay", true)]
#[case("ESSAY", true)]
#[case("say", true)]
#[case("  essay  ", true)]
#[case("chapter", false)]
#[case("", false)]
#[case("   ", false)]
fn search_matching_matrix(#[case] term: &str, #[case] hit: bool) {
    let tmp = TempDir::new().expect("tempdir");
    let mut tracker = open_tracker(&tmp.path().join("goals"));
    tracker.add_goal("Write essay", 1).expect("add");

    assert_eq!(!tracker.search_by_title(term).is_empty(), hit, "term {term:?}");
}
