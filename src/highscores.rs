//! Best runs of the current session
//!
//! Lives only as long as the process; tracks the top 10 finished runs.

use serde::Serialize;

use crate::sim::GameOverCause;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Level reached
    pub level: u32,
    /// Ticks survived
    pub ticks: u64,
    pub cause: GameOverCause,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Index a run with this score would take. Equal scores rank behind
    /// the runs already on the board.
    fn slot_for(&self, score: u64) -> usize {
        self.entries.partition_point(|e| e.score >= score)
    }

    /// Zero-point runs never make the board
    pub fn qualifies(&self, score: u64) -> bool {
        score > 0 && self.slot_for(score) < MAX_HIGH_SCORES
    }

    /// Record a finished run. Returns its 1-based rank, or None when it
    /// falls off the board.
    pub fn add(&mut self, entry: HighScoreEntry) -> Option<usize> {
        if !self.qualifies(entry.score) {
            return None;
        }
        let slot = self.slot_for(entry.score);
        self.entries.insert(slot, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(slot + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}
