//! High score leaderboard and the score persistence boundary
//!
//! The simulation emits a final [`ScoreRecord`] on game over; whatever sits
//! behind [`ScoreSink`] (a remote scoreboard proxy, local storage, a log) is
//! responsible for merging it. Submission is best effort: failures are
//! logged by the caller and never retried, and a failed submit must not
//! block the game-over transition.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// Final result of a run, in the shape the remote scoreboard stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Player name captured before the run started
    pub name: String,
    pub score: u64,
    /// Unix timestamp (ms) when the run ended
    pub timestamp: f64,
}

/// Destination for final score records.
pub trait ScoreSink {
    /// Deliver a record. Implementations report failure; the caller only
    /// logs it and moves on.
    fn submit(&mut self, record: &ScoreRecord) -> Result<(), Box<dyn std::error::Error>>;
}

/// Sink that just logs the record as JSON. Stands in when no remote
/// scoreboard is wired up.
#[derive(Debug, Default)]
pub struct LoggingSink;

impl ScoreSink for LoggingSink {
    fn submit(&mut self, record: &ScoreRecord) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(record)?;
        log::info!("score record: {json}");
        Ok(())
    }
}

/// A single leaderboard entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u64,
    /// Tier reached when the run ended
    pub tier: u8,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
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

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Merge a finished run into the board (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_score(&mut self, name: &str, score: u64, tier: u8, timestamp: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            name: name.to_string(),
            score,
            tier,
            timestamp,
        };

        // Insertion point, sorted descending by score
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}
