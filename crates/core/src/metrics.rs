//! Text statistics: words, sentences, averages and reading time.

use std::collections::HashSet;

use crate::text::{fold, letter_tokens, sentence_fragments, words};

/// Default reading speed in words per minute.
pub const DEFAULT_READING_SPEED: usize = 200;

/// Basic counts derived from an article body.
///
/// Computing metrics never fails; an empty body yields all zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct TextMetrics {
    /// Whitespace-delimited tokens.
    pub word_count: usize,
    /// Non-blank fragments between sentence-terminal punctuation runs.
    pub sentences: usize,
    /// `word_count / max(sentences, 1)`, rounded to one decimal.
    pub avg_words_per_sentence: f64,
    /// Minutes at the configured reading speed, rounded up.
    pub estimated_reading_time: usize,
    /// Alphabetic tokens, punctuation and digits stripped.
    pub token_count: usize,
    /// Distinct alphabetic tokens after folding case and diacritics.
    pub unique_words: usize,
}

impl TextMetrics {
    /// Computes metrics for `body` at `reading_speed` words per minute.
    ///
    /// A `reading_speed` of zero is treated as one; validated configs never
    /// pass zero.
    pub fn from_text(body: &str, reading_speed: usize) -> Self {
        let word_count = words(body).count();
        let sentences = count_sentences(body, word_count);
        let tokens = letter_tokens(body);
        let unique_words = tokens.iter().map(|token| fold(token)).collect::<HashSet<_>>().len();

        Self {
            word_count,
            sentences,
            avg_words_per_sentence: round_one_decimal(word_count as f64 / sentences.max(1) as f64),
            estimated_reading_time: reading_time(word_count, reading_speed),
            token_count: tokens.len(),
            unique_words,
        }
    }

    /// Ratio of distinct alphabetic tokens to all of them, in `0.0..=1.0`.
    pub fn lexical_diversity(&self) -> f64 {
        if self.token_count == 0 { 0.0 } else { self.unique_words as f64 / self.token_count as f64 }
    }
}

/// Counts sentences; any text with words has at least one.
fn count_sentences(body: &str, word_count: usize) -> usize {
    let fragments = sentence_fragments(body).count();
    if fragments == 0 && word_count > 0 { 1 } else { fragments }
}

/// Whole minutes needed to read `word_count` words, rounded up.
pub fn reading_time(word_count: usize, reading_speed: usize) -> usize {
    word_count.div_ceil(reading_speed.max(1))
}

/// Rounds half away from zero to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
