//! Tokenization and normalization helpers shared by the analysis stages.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Runs of sentence-terminal punctuation.
static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence regex"));

/// Runs of letters in any script.
static LETTER_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{L}+").expect("letter regex"));

/// Lowercases a word and strips diacritics, so `Éxito` and `exito` compare equal.
pub fn fold(word: &str) -> String {
    word.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase).collect()
}

/// Whitespace-delimited words of `text`.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Non-blank fragments between runs of `.`, `!` and `?`.
pub fn sentence_fragments(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE_BREAK.split(text).map(str::trim).filter(|s| !s.is_empty())
}

/// Lowercased alphabetic tokens in order of appearance.
///
/// Digits, punctuation and symbols act as separators.
pub fn letter_tokens(text: &str) -> Vec<String> {
    LETTER_RUN.find_iter(text).map(|m| m.as_str().to_lowercase()).collect()
}

/// Collapses whitespace runs to single spaces and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    words(text).collect::<Vec<_>>().join(" ")
}

/// Shortens `text` to at most `max_chars` characters.
///
/// Prefers cutting after the last complete sentence that fits; otherwise cuts
/// at the last word boundary and appends an ellipsis. `max_chars == 0` disables
/// truncation.
pub fn truncate_summary(text: &str, max_chars: usize) -> String {
    let normalized = normalize_whitespace(text);
    if max_chars == 0 || normalized.chars().count() <= max_chars {
        return normalized;
    }

    let head = char_prefix(&normalized, max_chars);
    if let Some(end) = head.rfind(['.', '!', '?'])
        && end > 0
    {
        return head[..=end].to_string();
    }

    // Leave room for the ellipsis.
    let head = char_prefix(&normalized, max_chars - 1);
    match head.rfind(' ') {
        Some(space) if space > 0 => format!("{}…", head[..space].trim_end()),
        _ => format!("{}…", head),
    }
}

/// The first `n` characters of `text`.
fn char_prefix(text: &str, n: usize) -> &str {
    let cut = text.char_indices().nth(n).map(|(i, _)| i).unwrap_or(text.len());
    &text[..cut]
}
