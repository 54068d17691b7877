//! Goal store — JSON persistence for the tracker's two collections.
//!
//! Persists two independent documents in the store directory:
//!
//! ```text
//! <dir>/
//!   pending.json     (serialized Vec<Goal>, completed = false)
//!   completed.json   (serialized Vec<Goal>, completed = true)
//! ```
//!
//! Writes use an atomic `.tmp` + rename pattern so a crash mid-write never
//! leaves a truncated document. If either document fails to parse at load
//! time, both collections are reset to empty — no partial recovery.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{io_err, TrackerError};
use crate::types::Goal;

const PENDING_FILE: &str = "pending.json";
const COMPLETED_FILE: &str = "completed.json";

/// Persistence adapter for the tracker's pending and completed collections.
///
/// Constructed with an explicit directory so tests can point it at a
/// `TempDir`; the CLI resolves the default location via [`default_dir`].
///
/// [`default_dir`]: GoalStore::default_dir
pub struct GoalStore {
    dir: PathBuf,
}

impl GoalStore {
    /// Create a store backed by `dir`, creating the directory if absent.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, TrackerError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;
        Ok(Self { dir })
    }

    /// `<home>/.prio/goals/` — the default store location.
    pub fn default_dir() -> Result<PathBuf, TrackerError> {
        let home = dirs::home_dir().ok_or(TrackerError::HomeNotFound)?;
        Ok(home.join(".prio").join("goals"))
    }

    /// `<dir>/pending.json` — pure, no I/O.
    pub fn pending_path(&self) -> PathBuf {
        self.dir.join(PENDING_FILE)
    }

    /// `<dir>/completed.json` — pure, no I/O.
    pub fn completed_path(&self) -> PathBuf {
        self.dir.join(COMPLETED_FILE)
    }

    /// Load both collections.
    ///
    /// An absent document is an empty collection. An unparseable document
    /// resets *both* collections to empty (defensive reset, logged as a
    /// warning); only I/O failures surface as errors.
    pub fn load(&self) -> Result<(Vec<Goal>, Vec<Goal>), TrackerError> {
        let pending = match self.load_collection(&self.pending_path())? {
            Some(goals) => goals,
            None => return Ok((Vec::new(), Vec::new())),
        };
        let completed = match self.load_collection(&self.completed_path())? {
            Some(goals) => goals,
            None => return Ok((Vec::new(), Vec::new())),
        };
        Ok((pending, completed))
    }

    /// Write both collections, each via `.tmp` + rename.
    pub fn save(&self, pending: &[Goal], completed: &[Goal]) -> Result<(), TrackerError> {
        self.save_collection(&self.pending_path(), pending)?;
        self.save_collection(&self.completed_path(), completed)?;
        debug!(
            pending = pending.len(),
            completed = completed.len(),
            "saved goal store"
        );
        Ok(())
    }

    /// `Ok(Some(goals))` on success, `Ok(Some(vec![]))` if the file is
    /// absent, `Ok(None)` if the content is unparseable.
    fn load_collection(&self, path: &Path) -> Result<Option<Vec<Goal>>, TrackerError> {
        if !path.exists() {
            return Ok(Some(Vec::new()));
        }
        let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
        match serde_json::from_str::<Vec<Goal>>(&contents) {
            Ok(goals) => Ok(Some(goals)),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "corrupt goal document; resetting store to empty"
                );
                Ok(None)
            }
        }
    }

    fn save_collection(&self, path: &Path, goals: &[Goal]) -> Result<(), TrackerError> {
        let json = serde_json::to_string_pretty(goals)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json).map_err(|e| io_err(&tmp, e))?;
        std::fs::rename(&tmp, path).map_err(|e| io_err(path, e))?;
        Ok(())
    }
}
