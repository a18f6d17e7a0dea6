pub mod json;
pub mod text;
pub mod toml;

use std::fmt;
use std::str::FromStr;

pub use json::{JsonConfig, JsonFormatter, record_to_json};
pub use text::{TextConfig, TextFormatter, record_to_text};
pub use toml::{TomlFormatter, record_to_toml};

/// Output format for rendered analysis reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
    Toml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
            OutputFormat::Toml => "toml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            "toml" => Ok(OutputFormat::Toml),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("TXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("toml".parse::<OutputFormat>(), Ok(OutputFormat::Toml));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
