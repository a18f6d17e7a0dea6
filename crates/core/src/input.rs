//! Local text inputs for analysis.

use crate::record::ArticleText;
use crate::{Result, WikilensError};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads article text from a local file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        Err(WikilensError::FileNotFound(path.to_path_buf()))
    } else {
        fs::read_to_string(path).map_err(WikilensError::from)
    }
}

/// Reads all of standard input until EOF.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Builds an [`ArticleText`] from a file, titled after the file stem unless
/// a title is given.
pub fn article_from_file<P: AsRef<Path>>(path: P, title: Option<&str>) -> Result<ArticleText> {
    let path = path.as_ref();
    let body = read_file(path)?;
    let title = match title {
        Some(t) => t.to_string(),
        None => path.file_stem().map(|s| s.to_string_lossy().replace('_', " ")).unwrap_or_default(),
    };
    Ok(ArticleText::new(title, body))
}
