use crate::Result;
use crate::record::AnalysisRecord;

/// Convert an analysis record to TOML
///
/// Manual TOML serialization to avoid adding the toml crate dependency
pub fn record_to_toml(record: &AnalysisRecord) -> Result<String> {
    let mut toml = String::new();

    if !record.url.is_empty() {
        toml.push_str(&format!("url = {}\n", toml_escape_string(&record.url)));
    }

    if !record.summary.is_empty() {
        toml.push_str(&format!("summary = {}\n", toml_escape_string(&record.summary)));
    }

    toml.push_str(&format!("word_count = {}\n", record.word_count));
    toml.push_str(&format!("sentences = {}\n", record.sentences));
    toml.push_str(&format!("avg_words_per_sentence = {:.1}\n", record.avg_words_per_sentence));
    toml.push_str(&format!("estimated_reading_time = {}\n", record.estimated_reading_time));
    toml.push_str(&format!("complexity = {}\n", toml_escape_string(record.complexity.as_str())));
    toml.push_str(&format!("sentiment = {}\n", toml_escape_string(record.sentiment.as_str())));
    toml.push_str(&format!("topics = {}\n", toml_array(&record.topics)));
    toml.push_str(&format!("frequent_words = {}\n", toml_array(&record.frequent_words)));
    toml.push_str(&format!("key_insights = {}\n", toml_array(&record.key_insights)));

    Ok(toml)
}

/// Escape a string for TOML format
///
/// Basic strings may not hold raw control characters other than tab.
fn toml_escape_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len() + 2);
    escaped.push('"');
    for c in s.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push('\t'),
            c if c < ' ' || c == '\u{7f}' => {
                escaped.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => escaped.push(c),
        }
    }
    escaped.push('"');
    escaped
}

fn toml_array(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| toml_escape_string(item)).collect();
    format!("[{}]", quoted.join(", "))
}

/// TOML formatter for analysis records
#[derive(Debug)]
pub struct TomlFormatter;

impl TomlFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, record: &AnalysisRecord) -> Result<String> {
        record_to_toml(record)
    }
}

impl Default for TomlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;

    #[test]
    fn test_record_to_toml() {
        let record = analyze("Gato", "El gato duerme. El gato come. El gato juega.");
        let toml = record_to_toml(&record).unwrap();

        assert!(toml.contains("url = \"https://en.wikipedia.org/wiki/Gato\""));
        assert!(toml.contains("word_count = 9"));
        assert!(toml.contains("sentences = 3"));
        assert!(toml.contains("avg_words_per_sentence = 3.0"));
        assert!(toml.contains("complexity = \"simple\""));
        assert!(toml.contains("sentiment = \"neutro\""));
        assert!(toml.contains("topics = [\"gato\"]"));
    }

    #[test]
    fn test_empty_lists() {
        let record = analyze("", "");
        let toml = record_to_toml(&record).unwrap();
        assert!(toml.contains("topics = []"));
        assert!(toml.contains("word_count = 0"));
        assert!(!toml.contains("summary ="));
    }

    #[test]
    fn test_toml_escape_string() {
        assert_eq!(toml_escape_string("simple"), "\"simple\"");
        assert_eq!(toml_escape_string("with \"quotes\""), "\"with \\\"quotes\\\"\"");
        assert_eq!(toml_escape_string("with\nnewline"), "\"with\\nnewline\"");
        assert_eq!(toml_escape_string("with\\backslash"), "\"with\\\\backslash\"");
        assert_eq!(toml_escape_string("tab\there"), "\"tab\there\"");
        assert_eq!(toml_escape_string("esc\u{1b}x"), "\"esc\\u001Bx\"");
        assert_eq!(toml_escape_string("nul\0del\u{7f}"), "\"nul\\u0000del\\u007F\"");
        assert_eq!(toml_escape_string("cr\r"), "\"cr\\r\"");
    }

    #[test]
    fn test_control_characters_in_summary() {
        let record = analyze("T", "Hola\u{1b}mundo feliz.");
        let toml = record_to_toml(&record).unwrap();
        assert!(toml.contains("summary = \"Hola\\u001Bmundo feliz.\""));
        assert!(!toml.chars().any(|c| c.is_control() && c != '\n'));
    }

    #[test]
    fn test_toml_formatter() {
        let record = analyze("Gato", "El gato duerme.");
        let toml = TomlFormatter::new().format(&record).unwrap();
        assert!(toml.contains("sentences = 1"));
    }
}
