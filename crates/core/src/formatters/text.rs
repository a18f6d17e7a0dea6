use crate::Result;
use crate::record::AnalysisRecord;

/// Configuration for plain text output
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Wrap summary and insight lines at specified width (0 = no wrapping)
    pub line_width: usize,

    /// Include title header
    pub include_header: bool,

    /// Include the summary paragraph
    pub include_summary: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { line_width: 80, include_header: true, include_summary: true }
    }
}

/// Plain text report formatter
#[derive(Debug, Default)]
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, title: &str, record: &AnalysisRecord) -> Result<String> {
        record_to_text(title, record, &self.config)
    }
}

/// Render a human-readable report of an analysis record
pub fn record_to_text(title: &str, record: &AnalysisRecord, config: &TextConfig) -> Result<String> {
    let mut output = String::new();

    if config.include_header {
        output.push_str(&generate_header(title, record));
        output.push_str("\n\n");
    }

    if config.include_summary && !record.summary.is_empty() {
        output.push_str(&wrap_text(&record.summary, config.line_width));
        output.push_str("\n\n");
    }

    output.push_str(&format!("Words:          {}\n", record.word_count));
    output.push_str(&format!("Sentences:      {}\n", record.sentences));
    output.push_str(&format!("Avg per sent.:  {:.1}\n", record.avg_words_per_sentence));
    output.push_str(&format!("Reading time:   {} min\n", record.estimated_reading_time));
    output.push_str(&format!("Complexity:     {}\n", record.complexity));
    output.push_str(&format!("Sentiment:      {}\n", record.sentiment));

    if !record.topics.is_empty() {
        output.push_str(&format!("Topics:         {}\n", record.topics.join(", ")));
    }

    if !record.frequent_words.is_empty() {
        output.push_str(&format!("Frequent words: {}\n", record.frequent_words.join(", ")));
    }

    if !record.key_insights.is_empty() {
        output.push_str("\nInsights:\n");
        let width = config.line_width.saturating_sub(2);
        for insight in &record.key_insights {
            let wrapped = wrap_text(insight, width);
            for (i, line) in wrapped.lines().enumerate() {
                let bullet = if i == 0 { "- " } else { "  " };
                output.push_str(bullet);
                output.push_str(line);
                output.push('\n');
            }
        }
    }

    Ok(output)
}

fn generate_header(title: &str, record: &AnalysisRecord) -> String {
    let mut header = String::new();
    let title = title.trim();

    if !title.is_empty() {
        header.push_str(title);
        header.push('\n');
        header.push_str(&"=".repeat(title.chars().count()));
    }

    if !record.url.is_empty() {
        if !header.is_empty() {
            header.push('\n');
        }
        header.push_str(&record.url);
    }

    header
}

/// Wrap text to specified line width
fn wrap_text(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    wrap_words(&words, width)
}

/// Wrap a slice of words to specified width
fn wrap_words(words: &[&str], width: usize) -> String {
    let mut lines = Vec::new();
    let mut current_line = Vec::new();
    let mut current_length = 0;

    for &word in words {
        let word_len = word.chars().count();

        if current_length == 0 {
            current_line.push(word);
            current_length = word_len;
        } else if current_length + 1 + word_len <= width {
            current_length += 1 + word_len;
            current_line.push(word);
        } else {
            lines.push(current_line.join(" "));
            current_line = vec![word];
            current_length = word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }

    lines.join("\n")
}
