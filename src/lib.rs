//! Word grid solver.
//!
//! Finds every dictionary word that can be traced through a square grid of
//! letter tiles, moving between touching cells (diagonals included) and
//! using each tile at most once per word.
//!
//! ```no_run
//! use word_grid_solver::{Board, Dictionary, Scorer, WordSearch};
//!
//! let dictionary = Dictionary::from_words(["word", "words"]);
//! let board = Board::parse("WOXX\nZRDS\nXXXX\nXXXX", 4)?;
//!
//! let found = WordSearch::new(&board, &dictionary).collect();
//! let report = Scorer::tally(found);
//! println!("{}", report);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod dictionary;
pub mod game;
pub mod models;
pub mod utils;

pub use dictionary::{Dictionary, Lookup, PrefixNode, MIN_WORD_LENGTH};
pub use game::{spawn_search, FoundWord, GridGenerator, PathValidator, Scorer, SearchStats, WordSearch};
pub use models::{Board, BoardError, Position, Report, ScoredWord};
