//! Frequent-word and topic extraction.
//!
//! Ordering is fully determined by the text: descending frequency, then first
//! position of occurrence. Hash iteration order never leaks into results.
//! Tokens are counted by folded form (`río` and `rio` are one word) and
//! reported in the spelling seen first.

use std::collections::HashMap;

use crate::lexicon::WordSet;
use crate::text::{fold, letter_tokens};

/// Tuning for keyword and topic extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordConfig {
    /// Number of frequent words to return (default: 10).
    pub top_words: usize,
    /// Tokens shorter than this many characters are ignored (default: 2).
    pub min_word_length: usize,
    /// Minimum occurrences for a word to become a topic (default: 2).
    pub topic_min_frequency: usize,
    /// Minimum characters for a word to become a topic (default: 4).
    pub topic_min_length: usize,
    /// Maximum number of topics (default: 5).
    pub max_topics: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self { top_words: 10, min_word_length: 2, topic_min_frequency: 2, topic_min_length: 4, max_topics: 5 }
    }
}

/// A counted token and where it first appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
    pub first_index: usize,
}

/// Extracted keywords for one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords {
    pub frequent_words: Vec<String>,
    pub topics: Vec<String>,
}

/// Counts non-stopword tokens, sorted by count desc then first occurrence.
pub fn rank_words(text: &str, stopwords: &WordSet, min_word_length: usize) -> Vec<WordFrequency> {
    let mut ranked: Vec<WordFrequency> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (index, token) in letter_tokens(text).into_iter().enumerate() {
        if token.chars().count() < min_word_length {
            continue;
        }
        let folded = fold(&token);
        if stopwords.contains_folded(&folded) {
            continue;
        }

        match positions.get(&folded) {
            Some(&slot) => ranked[slot].count += 1,
            None => {
                positions.insert(folded, ranked.len());
                ranked.push(WordFrequency { word: token, count: 1, first_index: index });
            }
        }
    }

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.first_index.cmp(&b.first_index)));
    ranked
}

/// Extracts frequent words and topics from `text`.
pub fn extract_keywords(text: &str, stopwords: &WordSet, config: &KeywordConfig) -> Keywords {
    let ranked = rank_words(text, stopwords, config.min_word_length);

    let frequent_words = ranked.iter().take(config.top_words).map(|w| w.word.clone()).collect();

    let topics = ranked
        .iter()
        .filter(|w| w.count >= config.topic_min_frequency && w.word.chars().count() >= config.topic_min_length)
        .take(config.max_topics)
        .map(|w| w.word.clone())
        .collect();

    Keywords { frequent_words, topics }
}
