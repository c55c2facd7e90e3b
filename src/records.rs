//! Per-difficulty run records, persisted as JSON between sessions.

use crate::constants::RECORDS_FILE;
use crate::game::Difficulty;
use crate::persistence::{load_json_or_default, save_json};
use serde::{Deserialize, Serialize};
use std::io;

/// Lifetime stats for one difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyRecord {
    pub best_score: u32,
    pub runs: u32,
    pub wins: u32,
}

/// All persisted records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Records {
    #[serde(default)]
    pub easy: DifficultyRecord,
    #[serde(default)]
    pub normal: DifficultyRecord,
    #[serde(default)]
    pub hard: DifficultyRecord,
}

impl Records {
    /// Load records from disk, falling back to defaults if missing or corrupt.
    pub fn load() -> Self {
        load_json_or_default(RECORDS_FILE)
    }

    pub fn save(&self) -> io::Result<()> {
        save_json(RECORDS_FILE, self)
    }

    pub fn for_difficulty(&self, difficulty: Difficulty) -> &DifficultyRecord {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Normal => &self.normal,
            Difficulty::Hard => &self.hard,
        }
    }

    fn for_difficulty_mut(&mut self, difficulty: Difficulty) -> &mut DifficultyRecord {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Normal => &mut self.normal,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Record one finished run. Returns true if the score is a new best.
    pub fn record_run(&mut self, difficulty: Difficulty, score: u32, won: bool) -> bool {
        let record = self.for_difficulty_mut(difficulty);
        record.runs += 1;
        if won {
            record.wins += 1;
        }
        if score > record.best_score {
            record.best_score = score;
            true
        } else {
            false
        }
    }
}
