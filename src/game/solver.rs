//! Depth-first word search over the board's adjacency graph.
//!
//! Every cell starts a path. A path is extended one neighbor at a time and
//! the decoded letters are walked down the prefix tree as they grow, so a
//! branch is dropped as soon as its letters stop being a dictionary prefix.

use std::sync::Arc;

use tokio::{sync::mpsc, task::JoinHandle};

use crate::dictionary::{Dictionary, PrefixNode};
use crate::game::{decoder, PathValidator};
use crate::models::{Board, Position};

/// One occurrence of a dictionary word on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<Position>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate paths checked against the dictionary
    pub paths_explored: usize,
    /// Word occurrences reported, duplicates included
    pub words_emitted: usize,
}

pub struct WordSearch<'a> {
    board: &'a Board,
    dictionary: &'a Dictionary,
}

impl<'a> WordSearch<'a> {
    pub fn new(board: &'a Board, dictionary: &'a Dictionary) -> Self {
        Self { board, dictionary }
    }

    /// Run the search to completion, calling `emit` for every word occurrence.
    /// A word reachable along several paths is emitted once per path.
    pub fn run<F>(&self, emit: F) -> SearchStats
    where
        F: FnMut(FoundWord),
    {
        let cells = self.board.size() * self.board.size();
        let mut walk = Walk {
            board: self.board,
            path: Vec::with_capacity(cells),
            visited: vec![false; cells],
            word: String::with_capacity(cells * 2),
            stats: SearchStats::default(),
            emit,
        };

        let root = self.dictionary.root();
        for start in self.board.positions() {
            walk.visit(start, root);
        }

        tracing::debug!(
            "Search explored {} paths and found {} word occurrences",
            walk.stats.paths_explored,
            walk.stats.words_emitted
        );

        walk.stats
    }

    /// Run the search and gather every occurrence
    pub fn collect(&self) -> Vec<FoundWord> {
        let mut found = Vec::new();
        self.run(|word| found.push(word));
        found
    }
}

/// Mutable traversal state shared by the whole search.
/// `path`, `visited` and `word` are rolled back after each branch.
struct Walk<'a, F> {
    board: &'a Board,
    path: Vec<Position>,
    visited: Vec<bool>,
    word: String,
    stats: SearchStats,
    emit: F,
}

impl<F> Walk<'_, F>
where
    F: FnMut(FoundWord),
{
    /// Extend the current path with `pos`, whose predecessor's letters led to `parent`
    fn visit(&mut self, pos: Position, parent: &PrefixNode) {
        let board = self.board;
        let Some(symbol) = board.get(pos) else {
            return;
        };

        let mark = self.word.len();
        decoder::push_decoded(&mut self.word, symbol);
        self.stats.paths_explored += 1;

        // Not a prefix of any word: nothing below this branch can match
        if let Some(node) = parent.descend(&self.word[mark..]) {
            let index = board.index(pos);
            self.visited[index] = true;
            self.path.push(pos);

            if node.is_terminal() {
                self.report();
            }

            for neighbor in board.neighbors(pos) {
                if !self.visited[board.index(neighbor)] {
                    self.visit(neighbor, node);
                }
            }

            self.path.pop();
            self.visited[index] = false;
        }

        self.word.truncate(mark);
    }

    fn report(&mut self) {
        debug_assert!(
            PathValidator::spells(self.board, &self.path, &self.word),
            "search produced an invalid path for {}",
            self.word
        );

        self.stats.words_emitted += 1;
        (self.emit)(FoundWord {
            word: self.word.clone(),
            path: self.path.clone(),
        });
    }
}

/// Run the search on the blocking pool, streaming occurrences as they are found.
/// The receiver yields `None` once every start cell has been exhausted.
pub fn spawn_search(
    board: Arc<Board>,
    dictionary: Arc<Dictionary>,
) -> (mpsc::UnboundedReceiver<FoundWord>, JoinHandle<SearchStats>) {
    let (tx, rx) = mpsc::unbounded_channel();

    let handle = tokio::task::spawn_blocking(move || {
        WordSearch::new(&board, &dictionary).run(|found| {
            if tx.send(found).is_err() {
                tracing::trace!("Result receiver dropped, discarding word");
            }
        })
    });

    (rx, handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn words_of(found: &[FoundWord]) -> BTreeSet<String> {
        found.iter().map(|f| f.word.clone()).collect()
    }

    #[test]
    fn test_finds_single_word() {
        let board = Board::parse("WOX\nZRY\nVDK", 3).unwrap();
        let dict = Dictionary::from_words(["word"]);

        let found = WordSearch::new(&board, &dict).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].word, "WORD");
        assert_eq!(
            found[0].path,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(2, 1)
            ]
        );
    }

    #[test]
    fn test_unknown_letters_are_pruned() {
        let board = Board::parse("ZZZ\nZZZ\nZZZ", 3).unwrap();
        let dict = Dictionary::from_words(["word", "apple", "system"]);

        let mut found = Vec::new();
        let stats = WordSearch::new(&board, &dict).run(|word| found.push(word));

        assert!(found.is_empty());
        // each start cell is checked once and never extended
        assert_eq!(stats.paths_explored, 9);
        assert_eq!(stats.words_emitted, 0);
    }

    #[test]
    fn test_empty_dictionary_finds_nothing() {
        let board = Board::parse("ABCD\nEFGH\nIJKL\nMNOP", 4).unwrap();
        let dict = Dictionary::new();
        assert!(WordSearch::new(&board, &dict).collect().is_empty());
    }

    #[test]
    fn test_every_path_is_reported() {
        let board = Board::parse("TES\nSTX\nXXX", 3).unwrap();
        let dict = Dictionary::from_words(["test"]);

        let found = WordSearch::new(&board, &dict).collect();
        assert_eq!(found.len(), 3);
        assert_eq!(words_of(&found), BTreeSet::from(["TEST".to_string()]));

        let paths: BTreeSet<_> = found.iter().map(|f| f.path.clone()).collect();
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_word_that_continues_into_longer_word() {
        let board = Board::parse("TEN\nXXT\nXXS", 3).unwrap();
        let dict = Dictionary::from_words(["tent", "tents"]);

        let found = WordSearch::new(&board, &dict).collect();
        assert_eq!(
            words_of(&found),
            BTreeSet::from(["TENT".to_string(), "TENTS".to_string()])
        );
    }

    #[test]
    fn test_digraph_tiles_are_decoded() {
        let board = Board::parse("5E\nEN", 2).unwrap();
        let dict = Dictionary::from_words(["queen"]);

        let found = WordSearch::new(&board, &dict).collect();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|f| f.word == "QUEEN" && f.path.len() == 4));
    }

    #[test]
    fn test_tiles_are_not_reused() {
        // BOOB would need the single O twice
        let board = Board::parse("BOX\nXXB\nXXX", 3).unwrap();
        let dict = Dictionary::from_words(["boob"]);
        assert!(WordSearch::new(&board, &dict).collect().is_empty());
    }

    #[test]
    fn test_paths_are_valid_and_results_repeatable() {
        let board = Board::parse("SERS5\nPATLI\nLINEA\nTERSC\n6ANDO", 5).unwrap();
        let dict = Dictionary::from_words([
            "pate", "pates", "plait", "later", "alter", "salter", "rest", "steal", "tale",
            "tales", "lint", "line", "liner", "liners", "stern", "quit", "then", "thane",
            "snore", "scone", "zebra",
        ]);

        let search = WordSearch::new(&board, &dict);
        let first = search.collect();
        let second = search.collect();

        assert!(!first.is_empty());
        for found in &first {
            assert!(
                PathValidator::spells(&board, &found.path, &found.word),
                "bad path for {}",
                found.word
            );
            assert!(dict.contains(&found.word));
        }
        assert_eq!(words_of(&first), words_of(&second));
        assert!(!words_of(&first).contains("ZEBRA"));
    }

    #[tokio::test]
    async fn test_spawned_search_closes_stream() {
        let board = Arc::new(Board::parse("TES\nSTX\nXXX", 3).unwrap());
        let dict = Arc::new(Dictionary::from_words(["test"]));

        let (mut rx, handle) = spawn_search(board, dict);

        let mut received = Vec::new();
        while let Some(found) = rx.recv().await {
            received.push(found);
        }
        let stats = handle.await.unwrap();

        assert_eq!(received.len(), 3);
        assert_eq!(stats.words_emitted, 3);
    }
}
