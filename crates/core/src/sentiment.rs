//! Sentiment classification.
//!
//! [`SentimentClassifier`] is the pluggable seam; [`LexiconSentiment`] is the
//! default implementation, counting hits against positive and negative word
//! sets.

use crate::lexicon::WordSet;
use crate::record::Sentiment;
use crate::text::{fold, letter_tokens};

/// Maps text to exactly one [`Sentiment`] label.
///
/// Implementations must be total and deterministic: every input, including
/// the empty string, yields a label and the same input always yields the same
/// label.
pub trait SentimentClassifier: Send + Sync + std::fmt::Debug {
    fn classify(&self, text: &str) -> Sentiment;
}

/// Positive and negative lexicon hits for a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentScore {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentScore {
    /// `positive - negative`.
    pub fn score(&self) -> i64 {
        self.positive as i64 - self.negative as i64
    }

    pub fn label(&self) -> Sentiment {
        match self.score() {
            s if s > 0 => Sentiment::Positive,
            s if s < 0 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

/// Lexicon-based scorer, case- and diacritic-insensitive.
#[derive(Debug, Clone)]
pub struct LexiconSentiment {
    positive: WordSet,
    negative: WordSet,
}

impl LexiconSentiment {
    pub fn new(positive: WordSet, negative: WordSet) -> Self {
        Self { positive, negative }
    }

    /// Counts lexicon hits across all alphabetic tokens of `text`.
    pub fn score(&self, text: &str) -> SentimentScore {
        letter_tokens(text).iter().map(|token| fold(token)).fold(SentimentScore::default(), |mut acc, token| {
            if self.positive.contains_folded(&token) {
                acc.positive += 1;
            } else if self.negative.contains_folded(&token) {
                acc.negative += 1;
            }
            acc
        })
    }
}

impl SentimentClassifier for LexiconSentiment {
    fn classify(&self, text: &str) -> Sentiment {
        self.score(text).label()
    }
}
