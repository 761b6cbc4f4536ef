use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::game::FoundWord;
use crate::models::{Report, ScoredWord};

pub struct Scorer;

impl Scorer {
    /// Points for a word, by its length in letters:
    ///
    /// | letters | points |
    /// |---------|--------|
    /// | < 4     | 0      |
    /// | 4       | 1      |
    /// | 5       | 2      |
    /// | 6       | 3      |
    /// | 7       | 5      |
    /// | 8+      | 11     |
    pub fn score_word(word: &str) -> u32 {
        match word.chars().count() {
            0..=3 => 0,
            4 => 1,
            5 => 2,
            6 => 3,
            7 => 5,
            _ => 11,
        }
    }

    /// Sum of word scores, counting each distinct word once
    pub fn total_score<'a, I>(words: I) -> u32
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        words
            .into_iter()
            .filter(|word| seen.insert(*word))
            .map(Self::score_word)
            .sum()
    }

    /// Shorter words first, then alphabetical
    pub fn presentation_order(a: &str, b: &str) -> Ordering {
        a.chars()
            .count()
            .cmp(&b.chars().count())
            .then_with(|| a.cmp(b))
    }

    /// Dedupe found words, order them for presentation and score them.
    /// The first path seen for each word is kept.
    pub fn tally<I>(found: I) -> Report
    where
        I: IntoIterator<Item = FoundWord>,
    {
        let mut unique: HashMap<String, FoundWord> = HashMap::new();
        for occurrence in found {
            unique.entry(occurrence.word.clone()).or_insert(occurrence);
        }

        let mut words: Vec<ScoredWord> = unique
            .into_values()
            .map(|found| ScoredWord {
                score: Self::score_word(&found.word),
                word: found.word,
                path: found.path,
            })
            .collect();
        words.sort_by(|a, b| Self::presentation_order(&a.word, &b.word));

        let total_score = Self::total_score(words.iter().map(|w| w.word.as_str()));

        Report {
            word_count: words.len(),
            total_score,
            words,
            board: Vec::new(),
        }
    }
}
