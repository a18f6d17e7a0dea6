//! Main analysis API.
//!
//! [`Analyzer`] turns an article title and plain-text body into an
//! [`AnalysisRecord`]. It holds only immutable configuration, so one instance
//! can be shared across threads and invoked concurrently for different
//! articles.
//!
//! # Example
//!
//! ```rust
//! use wikilens_core::{Analyzer, AnalyzerConfig, Complexity};
//!
//! let config = AnalyzerConfig::builder().reading_speed(250).top_words(5).build();
//! let analyzer = Analyzer::with_config(config)?;
//!
//! let record = analyzer.analyze("Gato", "El gato es feliz. El gato juega mucho. El perro duerme.");
//! assert_eq!(record.sentences, 3);
//! assert_eq!(record.complexity, Complexity::Simple);
//! # Ok::<(), wikilens_core::WikilensError>(())
//! ```

use std::sync::{Arc, LazyLock};

use url::Url;

use crate::complexity::ComplexityThresholds;
use crate::insights::{InsightInput, generate_insights};
use crate::keywords::{KeywordConfig, extract_keywords};
use crate::lexicon::Lexicon;
use crate::metrics::{DEFAULT_READING_SPEED, TextMetrics};
use crate::record::{AnalysisRecord, ArticleText};
use crate::sentiment::{LexiconSentiment, SentimentClassifier};
use crate::text::truncate_summary;
use crate::{Result, WikilensError};

/// Default base for canonical article URLs.
pub const DEFAULT_WIKI_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

/// Configuration for the [`Analyzer`].
///
/// # Example
///
/// ```rust
/// use wikilens_core::AnalyzerConfig;
///
/// let config = AnalyzerConfig::builder()
///     .reading_speed(180)
///     .complexity_thresholds(10.0, 18.0)
///     .max_topics(3)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Words per minute for reading-time estimates (default: 200).
    pub reading_speed: usize,

    /// Complexity class boundaries (default: 12.0 / 20.0).
    pub thresholds: ComplexityThresholds,

    /// Frequent-word and topic extraction settings.
    pub keywords: KeywordConfig,

    /// Maximum summary length in characters, 0 = unlimited (default: 500).
    pub summary_max_chars: usize,

    /// Base URL that article titles are appended to.
    pub wiki_base_url: String,

    /// Stopwords and sentiment word lists.
    pub lexicon: Lexicon,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            reading_speed: DEFAULT_READING_SPEED,
            thresholds: ComplexityThresholds::default(),
            keywords: KeywordConfig::default(),
            summary_max_chars: 500,
            wiki_base_url: DEFAULT_WIKI_BASE_URL.to_string(),
            lexicon: Lexicon::builtin(),
        }
    }
}

impl AnalyzerConfig {
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::new()
    }

    /// Checks the config for values the analyzer cannot work with.
    ///
    /// This is the only place analysis settings can fail; call it once at
    /// startup. [`Analyzer::with_config`] calls it for you.
    pub fn validate(&self) -> Result<()> {
        if self.reading_speed == 0 {
            return Err(WikilensError::Config("reading_speed must be greater than zero".to_string()));
        }

        self.thresholds.validate()?;

        if self.keywords.top_words == 0 {
            return Err(WikilensError::Config("top_words must be greater than zero".to_string()));
        }

        if self.keywords.min_word_length == 0 {
            return Err(WikilensError::Config("min_word_length must be greater than zero".to_string()));
        }

        self.base_url().map(|_| ())
    }

    /// Parses and checks `wiki_base_url`.
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.wiki_base_url)
            .map_err(|e| WikilensError::InvalidUrl(format!("{}: {}", self.wiki_base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(WikilensError::InvalidUrl(format!(
                "{}: base URL must be an http(s) URL",
                self.wiki_base_url
            )));
        }

        Ok(url)
    }
}

/// Builder for AnalyzerConfig.
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    /// Sets the reading speed in words per minute.
    pub fn reading_speed(mut self, value: usize) -> Self {
        self.config.reading_speed = value;
        self
    }

    /// Sets both complexity thresholds.
    pub fn complexity_thresholds(mut self, simple_below: f64, moderate_below: f64) -> Self {
        self.config.thresholds = ComplexityThresholds { simple_below, moderate_below };
        self
    }

    /// Sets how many frequent words to report.
    pub fn top_words(mut self, value: usize) -> Self {
        self.config.keywords.top_words = value;
        self
    }

    /// Sets the minimum token length for keywords.
    pub fn min_word_length(mut self, value: usize) -> Self {
        self.config.keywords.min_word_length = value;
        self
    }

    /// Sets the minimum occurrences for a topic.
    pub fn topic_min_frequency(mut self, value: usize) -> Self {
        self.config.keywords.topic_min_frequency = value;
        self
    }

    /// Sets the minimum length for a topic.
    pub fn topic_min_length(mut self, value: usize) -> Self {
        self.config.keywords.topic_min_length = value;
        self
    }

    /// Sets the maximum number of topics.
    pub fn max_topics(mut self, value: usize) -> Self {
        self.config.keywords.max_topics = value;
        self
    }

    /// Sets the summary length cap.
    pub fn summary_max_chars(mut self, value: usize) -> Self {
        self.config.summary_max_chars = value;
        self
    }

    /// Sets the base URL for canonical article links.
    pub fn wiki_base_url(mut self, value: impl Into<String>) -> Self {
        self.config.wiki_base_url = value.into();
        self
    }

    /// Replaces the word lists.
    pub fn lexicon(mut self, value: Lexicon) -> Self {
        self.config.lexicon = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}

impl Default for AnalyzerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns article text into analysis records.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    base_url: Url,
    sentiment: Arc<dyn SentimentClassifier>,
}

static DEFAULT_ANALYZER: LazyLock<Analyzer> = LazyLock::new(Analyzer::new);

impl Analyzer {
    /// Creates an analyzer with default settings and the built-in lexicon.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default()).expect("default analyzer config is valid")
    }

    /// Creates an analyzer after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`WikilensError::Config`], [`WikilensError::InvalidThresholds`]
    /// or [`WikilensError::InvalidUrl`] when the config is unusable.
    pub fn with_config(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.base_url()?;
        let sentiment =
            Arc::new(LexiconSentiment::new(config.lexicon.positive.clone(), config.lexicon.negative.clone()));

        Ok(Self { config, base_url, sentiment })
    }

    /// Replaces the sentiment classifier.
    pub fn with_classifier(mut self, classifier: Arc<dyn SentimentClassifier>) -> Self {
        self.sentiment = classifier;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Canonical encyclopedia URL for `title`.
    pub fn url_for(&self, title: &str) -> String {
        canonical_url(&self.base_url, title)
    }

    /// Analyzes one article.
    ///
    /// Every stage runs to completion for every input; an empty body yields a
    /// record with zero counts, empty lists and a neutral sentiment.
    pub fn analyze(&self, title: &str, body: &str) -> AnalysisRecord {
        let span = tracing::debug_span!("analyze", title = %title, bytes = body.len());
        let _guard = span.enter();

        let metrics = TextMetrics::from_text(body, self.config.reading_speed);
        let complexity = self.config.thresholds.classify(metrics.avg_words_per_sentence);
        let sentiment = self.sentiment.classify(body);
        let keywords = extract_keywords(body, &self.config.lexicon.stopwords, &self.config.keywords);

        let key_insights = generate_insights(&InsightInput {
            metrics: &metrics,
            complexity,
            sentiment,
            topics: &keywords.topics,
            frequent_words: &keywords.frequent_words,
        });

        tracing::debug!(
            word_count = metrics.word_count,
            sentences = metrics.sentences,
            %complexity,
            %sentiment,
            topics = keywords.topics.len(),
            "analysis complete"
        );

        AnalysisRecord {
            url: self.url_for(title),
            summary: truncate_summary(body, self.config.summary_max_chars),
            word_count: metrics.word_count,
            sentences: metrics.sentences,
            avg_words_per_sentence: metrics.avg_words_per_sentence,
            estimated_reading_time: metrics.estimated_reading_time,
            complexity,
            sentiment,
            topics: keywords.topics,
            frequent_words: keywords.frequent_words,
            key_insights,
        }
    }

    /// Analyzes an [`ArticleText`].
    pub fn analyze_text(&self, article: &ArticleText) -> AnalysisRecord {
        self.analyze(&article.title, &article.body)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyzes `body` with the default configuration.
///
/// # Example
///
/// ```rust
/// let record = wikilens_core::analyze("Rust", "");
/// assert_eq!(record.word_count, 0);
/// assert_eq!(record.estimated_reading_time, 0);
/// ```
pub fn analyze(title: &str, body: &str) -> AnalysisRecord {
    DEFAULT_ANALYZER.analyze(title, body)
}

/// Appends `title` to `base` as a single path segment, spaces as underscores.
///
/// An empty title yields the base URL itself.
pub fn canonical_url(base: &Url, title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        return base.to_string();
    }

    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(&title.replace(' ', "_"));
    }
    url.to_string()
}
