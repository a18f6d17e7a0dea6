//! Human-readable highlights derived from the computed metrics.
//!
//! Rules run in a fixed order and each one decides independently whether it
//! contributes a line. Output text is Spanish, matching the UI that renders it.

use crate::metrics::TextMetrics;
use crate::record::{Complexity, Sentiment};

/// Below this many words an article is considered short.
pub const SHORT_ARTICLE_WORDS: usize = 100;

/// Above this many words an article is considered long.
pub const LONG_ARTICLE_WORDS: usize = 500;

/// Vocabulary diversity is only reported from this many words on.
pub const DIVERSITY_MIN_WORDS: usize = 20;

pub const HIGH_DIVERSITY: f64 = 0.7;
pub const LOW_DIVERSITY: f64 = 0.4;

/// Everything the rules look at.
#[derive(Debug, Clone, Copy)]
pub struct InsightInput<'a> {
    pub metrics: &'a TextMetrics,
    pub complexity: Complexity,
    pub sentiment: Sentiment,
    pub topics: &'a [String],
    pub frequent_words: &'a [String],
}

type Rule = fn(&InsightInput<'_>) -> Option<String>;

const RULES: [Rule; 7] =
    [length_rule, reading_time_rule, complexity_rule, diversity_rule, sentiment_rule, topics_rule, frequent_word_rule];

/// Runs every rule in order and collects the lines they produce.
pub fn generate_insights(input: &InsightInput<'_>) -> Vec<String> {
    RULES.iter().filter_map(|rule| rule(input)).collect()
}

fn length_rule(input: &InsightInput<'_>) -> Option<String> {
    let words = input.metrics.word_count;
    let line = match words {
        0 => "El artículo no contiene texto para analizar.".to_string(),
        w if w < SHORT_ARTICLE_WORDS => format!("Artículo breve de {} palabras.", w),
        w if w > LONG_ARTICLE_WORDS => format!("Artículo extenso de {} palabras, por encima de la media.", w),
        w => format!("Artículo de longitud media con {} palabras.", w),
    };
    Some(line)
}

fn reading_time_rule(input: &InsightInput<'_>) -> Option<String> {
    match input.metrics.estimated_reading_time {
        0 => None,
        1 => Some("Se lee en aproximadamente 1 minuto.".to_string()),
        m => Some(format!("Se lee en aproximadamente {} minutos.", m)),
    }
}

fn complexity_rule(input: &InsightInput<'_>) -> Option<String> {
    if input.metrics.sentences == 0 {
        return None;
    }

    let avg = input.metrics.avg_words_per_sentence;
    let line = match input.complexity {
        Complexity::Simple => format!("Lectura sencilla: frases cortas de {:.1} palabras de media.", avg),
        Complexity::Moderate => format!("Complejidad moderada: {:.1} palabras por frase de media.", avg),
        Complexity::Complex => format!("Texto complejo: frases largas de {:.1} palabras de media.", avg),
    };
    Some(line)
}

fn diversity_rule(input: &InsightInput<'_>) -> Option<String> {
    if input.metrics.word_count < DIVERSITY_MIN_WORDS {
        return None;
    }

    let diversity = input.metrics.lexical_diversity();
    if diversity >= HIGH_DIVERSITY {
        Some(format!("Vocabulario variado: {:.0}% de palabras distintas.", diversity * 100.0))
    } else if diversity < LOW_DIVERSITY {
        Some(format!("Vocabulario repetitivo: {:.0}% de palabras distintas.", diversity * 100.0))
    } else {
        None
    }
}

fn sentiment_rule(input: &InsightInput<'_>) -> Option<String> {
    Some(format!("El tono dominante es {}.", input.sentiment))
}

fn topics_rule(input: &InsightInput<'_>) -> Option<String> {
    if input.topics.is_empty() {
        return None;
    }
    let shown: Vec<&str> = input.topics.iter().take(3).map(String::as_str).collect();
    Some(format!("Temas principales: {}.", shown.join(", ")))
}

fn frequent_word_rule(input: &InsightInput<'_>) -> Option<String> {
    input.frequent_words.first().map(|word| format!("La palabra más frecuente es «{}».", word))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(word_count: usize, sentences: usize, unique_words: usize) -> TextMetrics {
        TextMetrics {
            word_count,
            sentences,
            avg_words_per_sentence: if sentences == 0 { 0.0 } else { word_count as f64 / sentences as f64 },
            estimated_reading_time: word_count.div_ceil(200),
            token_count: word_count,
            unique_words,
        }
    }

    #[test]
    fn test_empty_article() {
        let metrics = metrics(0, 0, 0);
        let insights = generate_insights(&InsightInput {
            metrics: &metrics,
            complexity: Complexity::Simple,
            sentiment: Sentiment::Neutral,
            topics: &[],
            frequent_words: &[],
        });
        assert_eq!(
            insights,
            vec!["El artículo no contiene texto para analizar.", "El tono dominante es neutro."]
        );
    }

    #[test]
    fn test_rule_order() {
        let metrics = metrics(600, 30, 300);
        let topics = vec!["gato".to_string(), "perro".to_string()];
        let words = vec!["gato".to_string()];
        let insights = generate_insights(&InsightInput {
            metrics: &metrics,
            complexity: Complexity::Complex,
            sentiment: Sentiment::Positive,
            topics: &topics,
            frequent_words: &words,
        });

        assert_eq!(insights.len(), 6);
        assert!(insights[0].starts_with("Artículo extenso de 600"));
        assert_eq!(insights[1], "Se lee en aproximadamente 3 minutos.");
        assert!(insights[2].starts_with("Texto complejo"));
        assert!(insights[3].starts_with("El tono dominante es positivo"));
        assert_eq!(insights[4], "Temas principales: gato, perro.");
        assert_eq!(insights[5], "La palabra más frecuente es «gato».");
    }

    #[test]
    fn test_diversity_reported_for_longer_texts() {
        let varied = metrics(40, 4, 36);
        let repetitive = metrics(40, 4, 10);
        let short = metrics(10, 1, 10);

        let run = |m: &TextMetrics| {
            generate_insights(&InsightInput {
                metrics: m,
                complexity: Complexity::Simple,
                sentiment: Sentiment::Neutral,
                topics: &[],
                frequent_words: &[],
            })
        };

        assert!(run(&varied).iter().any(|i| i.starts_with("Vocabulario variado: 90%")));
        assert!(run(&repetitive).iter().any(|i| i.starts_with("Vocabulario repetitivo: 25%")));
        assert!(!run(&short).iter().any(|i| i.starts_with("Vocabulario")));
    }

    #[test]
    fn test_single_minute_wording() {
        let metrics = metrics(10, 1, 10);
        let line = reading_time_rule(&InsightInput {
            metrics: &metrics,
            complexity: Complexity::Simple,
            sentiment: Sentiment::Neutral,
            topics: &[],
            frequent_words: &[],
        });
        assert_eq!(line.as_deref(), Some("Se lee en aproximadamente 1 minuto."));
    }

    #[test]
    fn test_topics_capped_at_three() {
        let metrics = metrics(50, 5, 30);
        let topics: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let line = topics_rule(&InsightInput {
            metrics: &metrics,
            complexity: Complexity::Simple,
            sentiment: Sentiment::Neutral,
            topics: &topics,
            frequent_words: &[],
        });
        assert_eq!(line.as_deref(), Some("Temas principales: a, b, c."));
    }
}
