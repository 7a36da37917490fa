//! Per-level best runs
//!
//! Tracks the furthest distance reached and the fastest completion for each
//! level, persisted as JSON between sessions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Best results for a single level
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BestRun {
    /// Furthest distance reached (metres)
    pub best_distance: f32,
    /// Fastest completion (simulated seconds); `None` until the level is won
    pub best_time: Option<f32>,
}

/// Best runs keyed by level label
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: BTreeMap<String, BestRun>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best run for a level, if any attempt was recorded
    pub fn best(&self, label: &str) -> Option<&BestRun> {
        self.entries.get(label)
    }

    /// Record a finished attempt. `completion` is the elapsed time when the
    /// run was won, `None` for a failed run. Returns true if either the
    /// distance or the time improved.
    pub fn record_run(&mut self, label: &str, distance: f32, completion: Option<f32>) -> bool {
        let entry = self.entries.entry(label.to_string()).or_default();
        let mut improved = false;

        if distance > entry.best_distance {
            entry.best_distance = distance;
            improved = true;
        }
        if let Some(time) = completion {
            if entry.best_time.is_none_or(|best| time < best) {
                entry.best_time = Some(time);
                improved = true;
            }
        }
        improved
    }

    /// Load the leaderboard, starting empty when missing or unreadable
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(scores) => scores,
                Err(err) => {
                    log::warn!("ignoring malformed highscores {}: {err}", path.display());
                    Self::new()
                }
            },
            Err(_) => Self::new(),
        }
    }

    /// Persist the leaderboard
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}
