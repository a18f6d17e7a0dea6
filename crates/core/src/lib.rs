pub mod analyzer;
pub mod collection;
pub mod complexity;
pub mod config;
pub mod error;
pub mod formatters;
pub mod input;
pub mod insights;
pub mod keywords;
pub mod lexicon;
pub mod metrics;
pub mod record;
pub mod sentiment;
pub mod text;
#[cfg(feature = "fetch")]
pub mod wiki;

pub use analyzer::{Analyzer, AnalyzerConfig, AnalyzerConfigBuilder, DEFAULT_WIKI_BASE_URL, analyze, canonical_url};
pub use collection::{CollectionStats, CollectionView, NewSavedArticle, NoteUpdate, SavedArticle};
pub use complexity::ComplexityThresholds;
pub use config::{AnalyzerOverrides, ConfigLoader, ConfigLoaderBuilder, ConfigParser, Directive};
pub use error::{Result, WikilensError};
pub use formatters::{JsonConfig, JsonFormatter, OutputFormat, TextConfig, TextFormatter, TomlFormatter};
pub use formatters::{record_to_json, record_to_text, record_to_toml};
pub use input::{article_from_file, read_file, read_stdin};
#[doc(hidden)]
pub use insights::{InsightInput, generate_insights};
pub use keywords::{KeywordConfig, Keywords, extract_keywords};
pub use lexicon::{Lexicon, WordSet};
pub use metrics::{DEFAULT_READING_SPEED, TextMetrics};
pub use record::{AnalysisRecord, ArticleText, Complexity, Sentiment};
pub use sentiment::{LexiconSentiment, SentimentClassifier};
#[cfg(feature = "fetch")]
pub use wiki::{ArticleSummary, SearchHit, Thumbnail, WikiClient, WikiConfig};
