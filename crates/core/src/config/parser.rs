use crate::config::directives::{AnalyzerOverrides, parse_directive};
use crate::error::{Result, WikilensError};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Directive file parser
#[derive(Debug)]
pub struct ConfigParser;

impl ConfigParser {
    /// Parse a single directive file
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<AnalyzerOverrides> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(WikilensError::FileNotFound(path.to_path_buf()));
        }

        let file = std::fs::File::open(path)?;
        Self::parse_reader(BufReader::new(file))
    }

    /// Parse directives from a reader
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<AnalyzerOverrides> {
        let mut overrides = AnalyzerOverrides::new();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|e| WikilensError::ConfigParse {
                line: line_number,
                message: format!("Read error: {}", e),
            })?;

            Self::parse_line(&mut overrides, &line, line_number)?;
        }

        Ok(overrides)
    }

    /// Parse directives from a string
    pub fn parse_string(content: &str) -> Result<AnalyzerOverrides> {
        let mut overrides = AnalyzerOverrides::new();

        for (index, line) in content.lines().enumerate() {
            Self::parse_line(&mut overrides, line, index + 1)?;
        }

        Ok(overrides)
    }

    fn parse_line(overrides: &mut AnalyzerOverrides, line: &str, line_number: usize) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let directive =
            parse_directive(line).map_err(|message| WikilensError::ConfigParse { line: line_number, message })?;
        overrides.add_directive(directive);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_string() {
        let content = r#"
# Spanish-leaning setup
reading_speed: 180
wiki_base_url: https://es.wikipedia.org/wiki/

stopword: mucho, muy
positive: genial
"#;

        let overrides = ConfigParser::parse_string(content).unwrap();
        assert_eq!(overrides.reading_speed, Some(180));
        assert_eq!(overrides.wiki_base_url.as_deref(), Some("https://es.wikipedia.org/wiki/"));
        assert_eq!(overrides.stopwords, vec!["mucho".to_string(), "muy".to_string()]);
        assert_eq!(overrides.positive, vec!["genial".to_string()]);
    }

    #[test]
    fn test_error_reports_line_number() {
        let content = "reading_speed: 200\n\n# comment\ntop_words: many\n";
        let err = ConfigParser::parse_string(content).unwrap_err();
        assert!(matches!(err, WikilensError::ConfigParse { line: 4, .. }));
    }

    #[test]
    fn test_parse_reader() {
        let reader = Cursor::new("max_topics: 2\nclear: stopwords\n");
        let overrides = ConfigParser::parse_reader(reader).unwrap();
        assert_eq!(overrides.max_topics, Some(2));
        assert!(overrides.clear_stopwords);
    }

    #[test]
    fn test_parse_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "simple_below: 9\nmoderate_below: 15\n").unwrap();

        let overrides = ConfigParser::parse_file(file.path()).unwrap();
        assert_eq!(overrides.simple_below, Some(9.0));
        assert_eq!(overrides.moderate_below, Some(15.0));
    }

    #[test]
    fn test_parse_missing_file() {
        let result = ConfigParser::parse_file("/nonexistent/analyzer.txt");
        assert!(matches!(result, Err(WikilensError::FileNotFound(_))));
    }

    #[test]
    fn test_empty_content() {
        assert!(ConfigParser::parse_string("").unwrap().is_empty());
        assert!(ConfigParser::parse_string("# only comments\n\n").unwrap().is_empty());
    }
}
