use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Board, Position};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub score: u32,
    /// One of the paths that spells the word
    pub path: Vec<Position>,
}

/// Deduplicated, ordered and scored search results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    /// Board rows as entered, before tile decoding
    pub board: Vec<String>,
    pub words: Vec<ScoredWord>,
    pub word_count: usize,
    pub total_score: u32,
}

impl Report {
    pub fn with_board(mut self, board: &Board) -> Self {
        self.board = board.rows().collect();
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Plain listing: one word per line, then the totals
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for scored in &self.words {
            writeln!(f, "{}", scored.word)?;
        }
        writeln!(f, "Word count: {}", self.word_count)?;
        write!(f, "Score: {}", self.total_score)
    }
}
