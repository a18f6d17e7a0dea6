//! Analysis input and output types.
//!
//! [`AnalysisRecord`] is the structured bundle the search/storage backend
//! returns for an article. Field names are part of the wire contract: consumers
//! pattern-match on `word_count`, `estimated_reading_time`,
//! `avg_words_per_sentence`, `frequent_words`, `key_insights` and so on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Raw article input: a title plus its plain-text extract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleText {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl ArticleText {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { title: title.into(), body: body.into() }
    }
}

/// Coarse readability classification derived from sentence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polarity label. Serialized with the Spanish names the UI expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "positivo")]
    Positive,
    #[serde(rename = "negativo")]
    Negative,
    #[serde(rename = "neutro")]
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positivo",
            Self::Negative => "negativo",
            Self::Neutral => "neutro",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positivo" | "positive" => Ok(Self::Positive),
            "negativo" | "negative" => Ok(Self::Negative),
            "neutro" | "neutral" => Ok(Self::Neutral),
            _ => Err(format!("Invalid sentiment: {}. Valid options: positivo, negativo, neutro", s)),
        }
    }
}

/// The complete analysis of one article.
///
/// Produced fresh by [`Analyzer::analyze`](crate::Analyzer::analyze) and never
/// mutated afterwards. `url` and `summary` default to empty strings when
/// deserializing, since saved-article payloads nest the metrics without them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Canonical encyclopedia URL for the title.
    #[serde(default)]
    pub url: String,

    /// Whitespace-normalized, length-capped summary text.
    #[serde(default)]
    pub summary: String,

    pub word_count: usize,

    pub sentences: usize,

    /// Rounded to one decimal place.
    pub avg_words_per_sentence: f64,

    /// Minutes, rounded up; zero only for empty text.
    pub estimated_reading_time: usize,

    pub complexity: Complexity,

    pub sentiment: Sentiment,

    /// Salient subject tags in relevance order.
    #[serde(default)]
    pub topics: Vec<String>,

    /// Most frequent non-stopwords, ties broken by first occurrence.
    #[serde(default)]
    pub frequent_words: Vec<String>,

    /// Human-readable highlights in fixed rule order.
    #[serde(default)]
    pub key_insights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisRecord {
        AnalysisRecord {
            url: "https://en.wikipedia.org/wiki/Gato".to_string(),
            summary: "El gato es feliz.".to_string(),
            word_count: 4,
            sentences: 1,
            avg_words_per_sentence: 4.0,
            estimated_reading_time: 1,
            complexity: Complexity::Simple,
            sentiment: Sentiment::Positive,
            topics: vec![],
            frequent_words: vec!["gato".to_string(), "feliz".to_string()],
            key_insights: vec![],
        }
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        for field in [
            "url",
            "summary",
            "word_count",
            "sentences",
            "avg_words_per_sentence",
            "estimated_reading_time",
            "complexity",
            "sentiment",
            "topics",
            "frequent_words",
            "key_insights",
        ] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
        assert_eq!(json["sentiment"], "positivo");
        assert_eq!(json["complexity"], "simple");
    }

    #[test]
    fn test_deserialize_without_url_and_summary() {
        let json = r#"{
            "frequent_words": ["obama"],
            "sentiment": "neutro",
            "topics": [],
            "complexity": "moderate",
            "word_count": 12,
            "sentences": 1,
            "avg_words_per_sentence": 12.0,
            "estimated_reading_time": 1,
            "key_insights": []
        }"#;

        let record: AnalysisRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.url, "");
        assert_eq!(record.summary, "");
        assert_eq!(record.sentiment, Sentiment::Neutral);
        assert_eq!(record.complexity, Complexity::Moderate);
    }

    #[test]
    fn test_sentiment_from_str() {
        assert_eq!("Positivo".parse::<Sentiment>(), Ok(Sentiment::Positive));
        assert_eq!("negative".parse::<Sentiment>(), Ok(Sentiment::Negative));
        assert!("meh".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_article_text_defaults() {
        let text: ArticleText = serde_json::from_str(r#"{"body": "hola"}"#).unwrap();
        assert_eq!(text.title, "");
        assert_eq!(text.body, "hola");
    }
}
