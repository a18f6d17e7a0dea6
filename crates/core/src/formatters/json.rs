use crate::Result;
use crate::record::AnalysisRecord;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Render an analysis record as JSON using the wire field names
pub fn record_to_json(record: &AnalysisRecord, pretty: bool) -> Result<String> {
    let json = if pretty { serde_json::to_string_pretty(record)? } else { serde_json::to_string(record)? };
    Ok(json)
}

/// JSON formatter for analysis records
#[derive(Debug, Default)]
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, record: &AnalysisRecord) -> Result<String> {
        record_to_json(record, self.config.pretty)
    }
}
