//! Best-score persistence.
//!
//! One integer under one fixed key in a small JSON file. The store is
//! strictly best-effort: a missing, unreadable or malformed file loads as
//! zero, and a failed write is logged and forgotten. Gameplay never
//! depends on it.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the score file location.
pub const STORE_PATH_ENV: &str = "TUI_SNAKE_SCORES";

/// Default score file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "tui-snake-scores.json";

#[derive(Debug, Serialize, Deserialize)]
struct ScoreRecord {
    best_score: u32,
}

/// File-backed store for the best score.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the store path from the environment, falling back to the
    /// default file.
    pub fn from_env() -> Self {
        let path = std::env::var(STORE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_FILE));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted best score. Any failure reads as zero.
    pub fn load_best(&self) -> u32 {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!("no score file at {:?}: {}", self.path, err);
                return 0;
            }
        };
        match serde_json::from_str::<ScoreRecord>(&raw) {
            Ok(record) => record.best_score,
            Err(err) => {
                warn!("malformed score file at {:?}: {}", self.path, err);
                0
            }
        }
    }

    /// Persist the best score, fire-and-forget.
    pub fn save_best(&self, best_score: u32) {
        if let Err(err) = self.try_save(best_score) {
            warn!("could not save best score to {:?}: {}", self.path, err);
        }
    }

    fn try_save(&self, best_score: u32) -> std::io::Result<()> {
        let record = ScoreRecord { best_score };
        let raw = serde_json::to_string_pretty(&record)?;
        // Write through a sibling temp file so a crash mid-write cannot
        // truncate the existing record.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> ScoreStore {
        let mut path = std::env::temp_dir();
        path.push(format!("tui-snake-test-{}-{}.json", name, std::process::id()));
        let _ = fs::remove_file(&path);
        ScoreStore::new(path)
    }

    #[test]
    fn test_missing_file_loads_as_zero() {
        let store = temp_store("missing");
        assert_eq!(store.load_best(), 0);
    }

    #[test]
    fn test_round_trip() {
        let store = temp_store("round-trip");
        store.save_best(42);
        assert_eq!(store.load_best(), 42);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_malformed_file_loads_as_zero() {
        let store = temp_store("malformed");
        fs::write(store.path(), "not json at all").unwrap();
        assert_eq!(store.load_best(), 0);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let store = temp_store("overwrite");
        store.save_best(5);
        store.save_best(9);
        assert_eq!(store.load_best(), 9);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_save_to_unwritable_path_is_silent() {
        let store = ScoreStore::new("/nonexistent-dir/scores.json");
        // Must not panic; the failure is logged and swallowed.
        store.save_best(1);
        assert_eq!(store.load_best(), 0);
    }
}
