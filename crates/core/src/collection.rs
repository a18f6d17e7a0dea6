//! Saved-article collection model.
//!
//! A saved article pairs the encyclopedia summary with the analysis record
//! computed when it was saved, plus an optional freeform note. Stores hand
//! out their contents as a [`CollectionView`], an immutable snapshot that
//! supports lookup, filtering and summary statistics without holding any
//! store lock.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::record::{AnalysisRecord, Complexity, Sentiment};
use crate::text::fold;
use crate::{Result, WikilensError};

/// A stored article with its analysis snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedArticle {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub summary: String,
    pub analisis: AnalysisRecord,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Payload for saving an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSavedArticle {
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub summary: String,
    pub analisis: AnalysisRecord,
    #[serde(default)]
    pub note: Option<String>,
}

impl NewSavedArticle {
    /// Rejects blank titles and turns blank notes into `None`.
    pub fn validated(mut self) -> Result<Self> {
        self.title = self.title.trim().to_string();
        if self.title.is_empty() {
            return Err(WikilensError::InvalidInput("title must not be empty".to_string()));
        }
        self.note = normalize_note(self.note);
        Ok(self)
    }

    /// Materializes the payload with a fresh id and the current time.
    pub fn into_saved(self) -> SavedArticle {
        self.into_saved_with(Uuid::new_v4(), OffsetDateTime::now_utc())
    }

    pub fn into_saved_with(self, id: Uuid, created_at: OffsetDateTime) -> SavedArticle {
        SavedArticle {
            id,
            title: self.title,
            url: self.url,
            summary: self.summary,
            analisis: self.analisis,
            note: self.note,
            created_at,
        }
    }
}

/// Payload for replacing the note of a saved article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteUpdate {
    #[serde(default)]
    pub note: Option<String>,
}

impl NoteUpdate {
    /// The note to store; blank clears it.
    pub fn normalized(self) -> Option<String> {
        normalize_note(self.note)
    }
}

fn normalize_note(note: Option<String>) -> Option<String> {
    note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

/// Per-label counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positivo: usize,
    pub negativo: usize,
    pub neutro: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityCounts {
    pub simple: usize,
    pub moderate: usize,
    pub complex: usize,
}

/// Aggregate figures over a collection snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionStats {
    pub total: usize,
    pub with_notes: usize,
    pub total_words: usize,
    pub total_reading_time: usize,
    pub sentiment: SentimentCounts,
    pub complexity: ComplexityCounts,
}

/// Immutable snapshot of saved articles, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionView {
    articles: Vec<SavedArticle>,
}

impl CollectionView {
    pub fn new(mut articles: Vec<SavedArticle>) -> Self {
        articles.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Self { articles }
    }

    pub fn articles(&self) -> &[SavedArticle] {
        &self.articles
    }

    pub fn into_articles(self) -> Vec<SavedArticle> {
        self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn find(&self, id: Uuid) -> Option<&SavedArticle> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Articles whose title, note or topics contain `query`.
    ///
    /// Matching ignores case and diacritics; a blank query matches everything.
    pub fn filter(&self, query: &str) -> Vec<&SavedArticle> {
        let needle = fold(query.trim());
        if needle.is_empty() {
            return self.articles.iter().collect();
        }

        self.articles
            .iter()
            .filter(|a| {
                fold(&a.title).contains(&needle)
                    || a.note.as_deref().is_some_and(|n| fold(n).contains(&needle))
                    || a.analisis.topics.iter().any(|t| fold(t).contains(&needle))
            })
            .collect()
    }

    pub fn stats(&self) -> CollectionStats {
        let mut stats = CollectionStats { total: self.articles.len(), ..Default::default() };

        for article in &self.articles {
            if article.note.is_some() {
                stats.with_notes += 1;
            }
            stats.total_words += article.analisis.word_count;
            stats.total_reading_time += article.analisis.estimated_reading_time;

            match article.analisis.sentiment {
                Sentiment::Positive => stats.sentiment.positivo += 1,
                Sentiment::Negative => stats.sentiment.negativo += 1,
                Sentiment::Neutral => stats.sentiment.neutro += 1,
            }
            match article.analisis.complexity {
                Complexity::Simple => stats.complexity.simple += 1,
                Complexity::Moderate => stats.complexity.moderate += 1,
                Complexity::Complex => stats.complexity.complex += 1,
            }
        }

        stats
    }
}

impl From<Vec<SavedArticle>> for CollectionView {
    fn from(articles: Vec<SavedArticle>) -> Self {
        Self::new(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;
    use time::macros::datetime;

    fn saved(title: &str, body: &str, note: Option<&str>, at: OffsetDateTime) -> SavedArticle {
        NewSavedArticle {
            title: title.to_string(),
            url: String::new(),
            summary: String::new(),
            analisis: analyze(title, body),
            note: note.map(str::to_string),
        }
        .into_saved_with(Uuid::new_v4(), at)
    }

    fn sample() -> CollectionView {
        CollectionView::new(vec![
            saved("Perro", "El perro duerme. El perro corre.", None, datetime!(2024-03-02 10:00 UTC)),
            saved(
                "Gato doméstico",
                "El gato es feliz. El gato juega mucho.",
                Some("Leer después"),
                datetime!(2024-03-01 10:00 UTC),
            ),
            saved("Guerra", "Guerra terrible y triste.", Some("  "), datetime!(2024-03-03 10:00 UTC)),
        ])
    }

    #[test]
    fn test_view_is_oldest_first() {
        let view = sample();
        let titles: Vec<_> = view.articles().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Gato doméstico", "Perro", "Guerra"]);
    }

    #[test]
    fn test_find() {
        let view = sample();
        let id = view.articles()[1].id;
        assert_eq!(view.find(id).map(|a| a.title.as_str()), Some("Perro"));
        assert!(view.find(Uuid::nil()).is_none());
    }

    #[test]
    fn test_filter_ignores_case_and_accents() {
        let view = sample();
        let hits = view.filter("DOMESTICO");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Gato doméstico");

        assert_eq!(view.filter("despues").len(), 1);
        assert_eq!(view.filter("perro").len(), 1);
        assert_eq!(view.filter("  ").len(), 3);
        assert!(view.filter("ballena").is_empty());
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(stats.total, 3);
        // raw Some("  ") is kept as-is when built without validation
        assert_eq!(stats.with_notes, 2);
        assert_eq!(stats.sentiment.positivo, 1);
        assert_eq!(stats.sentiment.negativo, 1);
        assert_eq!(stats.sentiment.neutro, 1);
        assert_eq!(stats.complexity.simple, 3);
        assert_eq!(stats.total_reading_time, 3);
    }

    #[test]
    fn test_empty_stats() {
        let stats = CollectionView::default().stats();
        assert_eq!(stats, CollectionStats::default());
    }

    #[test]
    fn test_validated_payload() {
        let new = NewSavedArticle {
            title: "  Gato  ".to_string(),
            url: String::new(),
            summary: String::new(),
            analisis: analyze("Gato", ""),
            note: Some("   ".to_string()),
        };
        let new = new.validated().unwrap();
        assert_eq!(new.title, "Gato");
        assert_eq!(new.note, None);
    }

    #[test]
    fn test_blank_title_rejected() {
        let new = NewSavedArticle {
            title: " ".to_string(),
            url: String::new(),
            summary: String::new(),
            analisis: analyze("", ""),
            note: None,
        };
        assert!(matches!(new.validated(), Err(WikilensError::InvalidInput(_))));
    }

    #[test]
    fn test_note_update_normalized() {
        assert_eq!(NoteUpdate { note: Some(" hola ".to_string()) }.normalized(), Some("hola".to_string()));
        assert_eq!(NoteUpdate { note: Some(String::new()) }.normalized(), None);
        assert_eq!(NoteUpdate { note: None }.normalized(), None);
    }

    #[test]
    fn test_saved_article_json_shape() {
        let article = saved("Gato", "El gato duerme.", Some("nota"), datetime!(2024-03-01 10:00 UTC));
        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["created_at"], "2024-03-01T10:00:00Z");
        assert_eq!(value["analisis"]["word_count"], 3);
        assert_eq!(value["note"], "nota");

        let back: SavedArticle = serde_json::from_value(value).unwrap();
        assert_eq!(back, article);
    }

    #[test]
    fn test_payload_note_defaults_to_none() {
        let json = r#"{"title": "Gato", "analisis": {"word_count": 0, "sentences": 0,
            "avg_words_per_sentence": 0.0, "estimated_reading_time": 0,
            "complexity": "simple", "sentiment": "neutro"}}"#;
        let new: NewSavedArticle = serde_json::from_str(json).unwrap();
        assert!(new.note.is_none());
        assert!(new.analisis.topics.is_empty());
    }
}
