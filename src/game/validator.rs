use crate::game::decoder;
use crate::models::{Board, Position};
use std::collections::HashSet;

pub struct PathValidator;

impl PathValidator {
    /// Validate that positions form a valid path on the board
    pub fn is_valid_path(board: &Board, positions: &[Position]) -> bool {
        if positions.is_empty() {
            return false;
        }

        // All positions must be on the board
        if !positions.iter().all(|&pos| board.contains(pos)) {
            return false;
        }

        // Check that each position is adjacent to the previous one
        for window in positions.windows(2) {
            if !Self::are_adjacent(&window[0], &window[1]) {
                return false;
            }
        }

        // Check that no position is used twice
        let unique_positions: HashSet<_> = positions.iter().collect();
        unique_positions.len() == positions.len()
    }

    /// Check if two positions are adjacent (including diagonals)
    pub fn are_adjacent(pos1: &Position, pos2: &Position) -> bool {
        let row_diff = pos1.row.abs_diff(pos2.row);
        let col_diff = pos1.col.abs_diff(pos2.col);

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }

    /// Extract the decoded word from board positions
    pub fn extract_word(board: &Board, positions: &[Position]) -> Option<String> {
        let symbols = positions
            .iter()
            .map(|&pos| board.get(pos))
            .collect::<Option<Vec<char>>>()?;
        Some(decoder::decode_word(symbols))
    }

    /// Check that `positions` is a valid path spelling `word`
    pub fn spells(board: &Board, positions: &[Position], word: &str) -> bool {
        Self::is_valid_path(board, positions)
            && Self::extract_word(board, positions).as_deref() == Some(word)
    }
}
