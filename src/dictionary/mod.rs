use std::collections::HashMap;
use std::path::Path;
use tokio::fs;
use anyhow::{Context, Result};

/// Shortest word a board path can score with
pub const MIN_WORD_LENGTH: usize = 4;

/// Answer to a dictionary query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lookup {
    /// The sequence is a complete word
    pub is_word: bool,
    /// The sequence can still be extended into a word (or is one)
    pub is_prefix: bool,
}

impl Lookup {
    pub const MISS: Lookup = Lookup {
        is_word: false,
        is_prefix: false,
    };
}

/// One symbol position in the prefix tree
#[derive(Debug, Default)]
pub struct PrefixNode {
    terminal: bool,
    children: HashMap<char, PrefixNode>,
}

impl PrefixNode {
    /// True if the path from the root to this node spells an inserted word
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn child(&self, symbol: char) -> Option<&PrefixNode> {
        self.children.get(&symbol)
    }

    /// Walk down one child per char of `symbols`.
    /// `symbols` must already be uppercase.
    pub fn descend(&self, symbols: &str) -> Option<&PrefixNode> {
        symbols.chars().try_fold(self, |node, ch| node.child(ch))
    }
}

/// Prefix tree over uppercase words
#[derive(Debug)]
pub struct Dictionary {
    root: PrefixNode,
    min_length: usize,
    words: usize,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_min_length(MIN_WORD_LENGTH)
    }

    /// Create an empty dictionary that drops words shorter than `min_length`
    pub fn with_min_length(min_length: usize) -> Self {
        Self {
            root: PrefixNode::default(),
            min_length,
            words: 0,
        }
    }

    /// Build a dictionary from an in-memory word list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        dict.extend(words);
        dict
    }

    /// Load dictionary from a file, one word per line
    pub async fn load<P: AsRef<Path>>(path: P, min_length: usize) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read dictionary at {}", path.display()))?;

        let mut dict = Self::with_min_length(min_length);
        dict.extend(content.lines());

        tracing::info!("Loaded {} words into dictionary", dict.len());

        Ok(dict)
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// Insert a word. Words shorter than the minimum length are skipped.
    /// Returns true if the word was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_uppercase();
        if word.is_empty() || word.chars().count() < self.min_length {
            return false;
        }

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }

        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.words += 1;
        true
    }

    /// Check whether `sequence` is a word, and whether it can be extended
    pub fn lookup(&self, sequence: &str) -> Lookup {
        match self.root.descend(&sequence.to_uppercase()) {
            Some(node) => Lookup {
                is_word: node.terminal,
                is_prefix: true,
            },
            None => Lookup::MISS,
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_word
    }

    pub fn is_prefix(&self, sequence: &str) -> bool {
        self.lookup(sequence).is_prefix
    }

    pub fn root(&self) -> &PrefixNode {
        &self.root
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::new();
        assert!(dict.is_empty());
        assert!(!dict.contains("TEST"));
        assert_eq!(dict.lookup("hi"), Lookup::MISS);
    }

    #[test]
    fn test_inserted_words_and_prefixes() {
        let dict = Dictionary::from_words(["word", "Worse", "system"]);
        assert_eq!(dict.len(), 3);

        for word in ["WORD", "worse", "SyStEm"] {
            assert!(dict.contains(word), "{} should be a word", word);
        }

        let word = "SYSTEM";
        for end in 1..word.len() {
            let lookup = dict.lookup(&word[..end]);
            assert!(lookup.is_prefix, "{} should be a prefix", &word[..end]);
            assert!(!lookup.is_word);
        }
    }

    #[test]
    fn test_short_words_are_skipped() {
        let mut dict = Dictionary::new();
        assert!(!dict.insert("cat"));
        assert!(!dict.insert("   "));
        assert!(!dict.contains("CAT"));
        assert!(!dict.is_prefix("C"));
        assert!(dict.is_empty());
    }

    #[test]
    fn test_custom_min_length() {
        let mut dict = Dictionary::with_min_length(2);
        assert!(dict.insert("hi"));
        assert!(dict.contains("HI"));
        assert_eq!(dict.min_length(), 2);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut dict = Dictionary::new();
        assert!(dict.insert("hello"));
        assert!(!dict.insert("HELLO"));
        assert!(!dict.insert(" hello\r"));
        assert_eq!(dict.len(), 1);
        assert!(dict.contains("hello"));
    }

    #[test]
    fn test_word_that_is_also_a_prefix() {
        let dict = Dictionary::from_words(["test", "tests"]);
        assert_eq!(
            dict.lookup("TEST"),
            Lookup {
                is_word: true,
                is_prefix: true
            }
        );
    }

    #[test]
    fn test_no_false_prefix() {
        let dict = Dictionary::from_words(["hello", "help"]);
        assert_eq!(dict.lookup("HEX"), Lookup::MISS);
        assert_eq!(dict.lookup("BE"), Lookup::MISS);
        assert_eq!(dict.lookup("HELLOS"), Lookup::MISS);
    }

    #[test]
    fn test_empty_query_at_root() {
        let dict = Dictionary::from_words(["hello"]);
        assert_eq!(
            dict.lookup(""),
            Lookup {
                is_word: false,
                is_prefix: true
            }
        );
    }

    #[test]
    fn test_descend_matches_lookup() {
        let dict = Dictionary::from_words(["quench", "queen"]);
        let node = dict.root().descend("QU").unwrap();
        let node = node.descend("EE").unwrap();
        assert!(!node.is_terminal());
        assert!(node.descend("N").unwrap().is_terminal());
        assert!(dict.root().descend("QX").is_none());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "word-grid-solver-dict-{}.txt",
            std::process::id()
        ));
        tokio::fs::write(&path, "apple\nBanana\n\nfig\n  cherry  \n").await.unwrap();

        let dict = Dictionary::load(&path, MIN_WORD_LENGTH).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(dict.len(), 3);
        assert!(dict.contains("APPLE"));
        assert!(dict.contains("cherry"));
        assert!(!dict.contains("FIG"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = Dictionary::load("/nonexistent/dictionary.txt", MIN_WORD_LENGTH).await;
        let err = result.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dictionary.txt"));
    }
}
