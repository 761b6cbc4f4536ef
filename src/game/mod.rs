pub mod decoder;
pub mod grid;
pub mod scorer;
pub mod solver;
pub mod validator;

pub use grid::GridGenerator;
pub use scorer::Scorer;
pub use solver::{spawn_search, FoundWord, SearchStats, WordSearch};
pub use validator::PathValidator;
