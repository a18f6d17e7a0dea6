//! Readability classification from average sentence length.

use crate::record::Complexity;
use crate::{Result, WikilensError};

/// Averages strictly below this are [`Complexity::Simple`].
pub const SIMPLE_BELOW: f64 = 12.0;

/// Averages strictly below this (and not simple) are [`Complexity::Moderate`].
pub const MODERATE_BELOW: f64 = 20.0;

/// Upper bounds (exclusive) for the simple and moderate classes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexityThresholds {
    pub simple_below: f64,
    pub moderate_below: f64,
}

impl Default for ComplexityThresholds {
    fn default() -> Self {
        Self { simple_below: SIMPLE_BELOW, moderate_below: MODERATE_BELOW }
    }
}

impl ComplexityThresholds {
    /// Checks `0 < simple_below < moderate_below`, both finite.
    pub fn validate(&self) -> Result<()> {
        let ordered = self.simple_below.is_finite()
            && self.moderate_below.is_finite()
            && self.simple_below > 0.0
            && self.simple_below < self.moderate_below;

        if ordered {
            Ok(())
        } else {
            Err(WikilensError::InvalidThresholds {
                simple_below: self.simple_below,
                moderate_below: self.moderate_below,
            })
        }
    }

    /// Classifies an average words-per-sentence value.
    pub fn classify(&self, avg_words_per_sentence: f64) -> Complexity {
        if avg_words_per_sentence < self.simple_below {
            Complexity::Simple
        } else if avg_words_per_sentence < self.moderate_below {
            Complexity::Moderate
        } else {
            Complexity::Complex
        }
    }
}
