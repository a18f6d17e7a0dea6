use crate::analyzer::AnalyzerConfig;
use crate::complexity::ComplexityThresholds;
use crate::lexicon::{Lexicon, WordSet};

/// A single analyzer directive (`key: value` line).
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Numeric settings
    ReadingSpeed(usize),
    SimpleBelow(f64),
    ModerateBelow(f64),
    TopWords(usize),
    MinWordLength(usize),
    TopicMinFrequency(usize),
    TopicMinLength(usize),
    MaxTopics(usize),
    SummaryMaxChars(usize),

    /// Canonical URL base
    WikiBaseUrl(String),

    /// Word list additions (comma-separated values allowed)
    Stopwords(Vec<String>),
    Positive(Vec<String>),
    Negative(Vec<String>),

    /// Drop a built-in list before applying additions
    Clear(WordList),
}

/// The word lists a directive file can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordList {
    Stopwords,
    Positive,
    Negative,
}

/// Overrides collected from one or more directive files.
///
/// Unset scalars leave the base config untouched; word additions accumulate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzerOverrides {
    pub reading_speed: Option<usize>,
    pub simple_below: Option<f64>,
    pub moderate_below: Option<f64>,
    pub top_words: Option<usize>,
    pub min_word_length: Option<usize>,
    pub topic_min_frequency: Option<usize>,
    pub topic_min_length: Option<usize>,
    pub max_topics: Option<usize>,
    pub summary_max_chars: Option<usize>,
    pub wiki_base_url: Option<String>,

    pub stopwords: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,

    pub clear_stopwords: bool,
    pub clear_positive: bool,
    pub clear_negative: bool,
}

impl AnalyzerOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directive to these overrides
    pub fn add_directive(&mut self, directive: Directive) {
        match directive {
            Directive::ReadingSpeed(value) => self.reading_speed = Some(value),
            Directive::SimpleBelow(value) => self.simple_below = Some(value),
            Directive::ModerateBelow(value) => self.moderate_below = Some(value),
            Directive::TopWords(value) => self.top_words = Some(value),
            Directive::MinWordLength(value) => self.min_word_length = Some(value),
            Directive::TopicMinFrequency(value) => self.topic_min_frequency = Some(value),
            Directive::TopicMinLength(value) => self.topic_min_length = Some(value),
            Directive::MaxTopics(value) => self.max_topics = Some(value),
            Directive::SummaryMaxChars(value) => self.summary_max_chars = Some(value),
            Directive::WikiBaseUrl(url) => self.wiki_base_url = Some(url),

            Directive::Stopwords(words) => self.stopwords.extend(words),
            Directive::Positive(words) => self.positive.extend(words),
            Directive::Negative(words) => self.negative.extend(words),

            Directive::Clear(WordList::Stopwords) => self.clear_stopwords = true,
            Directive::Clear(WordList::Positive) => self.clear_positive = true,
            Directive::Clear(WordList::Negative) => self.clear_negative = true,
        }
    }

    /// Merge another set of overrides into this one.
    /// Scalars set in `other` win; word lists and clear flags accumulate.
    pub fn merge(&mut self, other: &AnalyzerOverrides) {
        self.reading_speed = other.reading_speed.or(self.reading_speed);
        self.simple_below = other.simple_below.or(self.simple_below);
        self.moderate_below = other.moderate_below.or(self.moderate_below);
        self.top_words = other.top_words.or(self.top_words);
        self.min_word_length = other.min_word_length.or(self.min_word_length);
        self.topic_min_frequency = other.topic_min_frequency.or(self.topic_min_frequency);
        self.topic_min_length = other.topic_min_length.or(self.topic_min_length);
        self.max_topics = other.max_topics.or(self.max_topics);
        self.summary_max_chars = other.summary_max_chars.or(self.summary_max_chars);
        if other.wiki_base_url.is_some() {
            self.wiki_base_url = other.wiki_base_url.clone();
        }

        self.stopwords.extend(other.stopwords.iter().cloned());
        self.positive.extend(other.positive.iter().cloned());
        self.negative.extend(other.negative.iter().cloned());

        self.clear_stopwords |= other.clear_stopwords;
        self.clear_positive |= other.clear_positive;
        self.clear_negative |= other.clear_negative;
    }

    /// Returns `base` with these overrides applied. Does not validate.
    pub fn apply(&self, base: AnalyzerConfig) -> AnalyzerConfig {
        let mut config = base;

        config.reading_speed = self.reading_speed.unwrap_or(config.reading_speed);
        config.thresholds = ComplexityThresholds {
            simple_below: self.simple_below.unwrap_or(config.thresholds.simple_below),
            moderate_below: self.moderate_below.unwrap_or(config.thresholds.moderate_below),
        };
        config.keywords.top_words = self.top_words.unwrap_or(config.keywords.top_words);
        config.keywords.min_word_length = self.min_word_length.unwrap_or(config.keywords.min_word_length);
        config.keywords.topic_min_frequency = self.topic_min_frequency.unwrap_or(config.keywords.topic_min_frequency);
        config.keywords.topic_min_length = self.topic_min_length.unwrap_or(config.keywords.topic_min_length);
        config.keywords.max_topics = self.max_topics.unwrap_or(config.keywords.max_topics);
        config.summary_max_chars = self.summary_max_chars.unwrap_or(config.summary_max_chars);
        if let Some(url) = &self.wiki_base_url {
            config.wiki_base_url = url.clone();
        }

        config.lexicon = Lexicon {
            stopwords: apply_words(config.lexicon.stopwords, self.clear_stopwords, &self.stopwords),
            positive: apply_words(config.lexicon.positive, self.clear_positive, &self.positive),
            negative: apply_words(config.lexicon.negative, self.clear_negative, &self.negative),
        };

        config
    }

    /// Check if these overrides change anything
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn apply_words(base: WordSet, clear: bool, additions: &[String]) -> WordSet {
    let mut set = if clear { WordSet::new() } else { base };
    set.extend(additions.iter().map(String::as_str));
    set
}

/// Parse a directive line
///
/// Errors carry a message only; the parser adds the line number.
pub fn parse_directive(line: &str) -> std::result::Result<Directive, String> {
    let line = line.trim();
    let (key, value) = line.split_once(':').ok_or_else(|| format!("Invalid directive format: {}", line))?;
    let key = key.trim();
    let value = value.trim();

    match key {
        "reading_speed" => parse_count(key, value).map(Directive::ReadingSpeed),
        "simple_below" => parse_float(key, value).map(Directive::SimpleBelow),
        "moderate_below" => parse_float(key, value).map(Directive::ModerateBelow),
        "top_words" => parse_count(key, value).map(Directive::TopWords),
        "min_word_length" => parse_count(key, value).map(Directive::MinWordLength),
        "topic_min_frequency" => parse_count(key, value).map(Directive::TopicMinFrequency),
        "topic_min_length" => parse_count(key, value).map(Directive::TopicMinLength),
        "max_topics" => parse_count(key, value).map(Directive::MaxTopics),
        "summary_max_chars" => parse_count(key, value).map(Directive::SummaryMaxChars),

        "wiki_base_url" => {
            if value.is_empty() {
                Err("wiki_base_url needs a value".to_string())
            } else {
                Ok(Directive::WikiBaseUrl(value.to_string()))
            }
        }

        "stopword" | "stopwords" => parse_words(key, value).map(Directive::Stopwords),
        "positive" => parse_words(key, value).map(Directive::Positive),
        "negative" => parse_words(key, value).map(Directive::Negative),

        "clear" => match value {
            "stopwords" => Ok(Directive::Clear(WordList::Stopwords)),
            "positive" => Ok(Directive::Clear(WordList::Positive)),
            "negative" => Ok(Directive::Clear(WordList::Negative)),
            _ => Err(format!("Unknown word list: {}", value)),
        },

        _ => Err(format!("Unknown directive: {}", key)),
    }
}

fn parse_count(key: &str, value: &str) -> std::result::Result<usize, String> {
    value.parse::<usize>().map_err(|_| format!("Invalid value for {}: {}", key, value))
}

fn parse_float(key: &str, value: &str) -> std::result::Result<f64, String> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("Invalid value for {}: {}", key, value)),
    }
}

/// Splits a comma-separated word list; blank entries and inner spaces are errors.
fn parse_words(key: &str, value: &str) -> std::result::Result<Vec<String>, String> {
    let words: Vec<&str> = value.split(',').map(str::trim).collect();

    if words.iter().any(|w| w.is_empty()) {
        return Err(format!("Malformed word list for {}: {:?}", key, value));
    }
    if let Some(word) = words.iter().find(|w| w.contains(char::is_whitespace)) {
        return Err(format!("Word in {} must not contain spaces: {:?}", key, word));
    }

    Ok(words.into_iter().map(str::to_string).collect())
}
