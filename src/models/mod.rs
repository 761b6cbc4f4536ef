pub mod board;
pub mod report;

pub use board::{Board, BoardError, Position};
pub use report::{Report, ScoredWord};
