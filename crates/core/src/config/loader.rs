use crate::analyzer::AnalyzerConfig;
use crate::config::directives::AnalyzerOverrides;
use crate::config::parser::ConfigParser;
use crate::error::{Result, WikilensError};
use std::path::{Path, PathBuf};

/// File name looked up inside the user config directory.
pub const USER_CONFIG_FILE: &str = "analyzer.txt";

/// Resolves directive files and produces a validated [`AnalyzerConfig`].
///
/// Files apply in order: the user file (`~/.config/wikilens/analyzer.txt`)
/// when present, then an explicit file, which must exist. Any parse or
/// validation failure is returned; callers treat it as fatal at startup.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Directory holding the optional user file
    user_dir: Option<PathBuf>,
    /// Explicit file, e.g. from `--config`
    file: Option<PathBuf>,
    /// Config the overrides are applied to
    base: AnalyzerConfig,
}

impl ConfigLoader {
    /// Create a loader with no files and default base config
    pub fn new() -> Self {
        Self { user_dir: None, file: None, base: AnalyzerConfig::default() }
    }

    /// Collect overrides from every configured file
    pub fn load_overrides(&self) -> Result<AnalyzerOverrides> {
        let mut overrides = AnalyzerOverrides::new();

        if let Some(user_dir) = &self.user_dir {
            let user_file = user_dir.join(USER_CONFIG_FILE);
            if user_file.exists() {
                tracing::debug!(path = %user_file.display(), "loading user analyzer config");
                overrides.merge(&ConfigParser::parse_file(&user_file)?);
            }
        }

        if let Some(file) = &self.file {
            if !file.exists() {
                return Err(WikilensError::FileNotFound(file.clone()));
            }
            tracing::debug!(path = %file.display(), "loading analyzer config");
            overrides.merge(&ConfigParser::parse_file(file)?);
        }

        Ok(overrides)
    }

    /// Load, apply and validate
    pub fn load(&self) -> Result<AnalyzerConfig> {
        let overrides = self.load_overrides()?;
        let config = overrides.apply(self.base.clone());

        config.validate().inspect_err(|e| tracing::error!(error = %e, "invalid analyzer configuration"))?;

        if !overrides.is_empty() {
            tracing::info!(
                reading_speed = config.reading_speed,
                simple_below = config.thresholds.simple_below,
                moderate_below = config.thresholds.moderate_below,
                "analyzer configuration overridden"
            );
        }

        Ok(config)
    }

    /// Default user config directory (~/.config/wikilens)
    pub fn default_user_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("wikilens"))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        let mut builder = ConfigLoaderBuilder::new();

        if let Some(user_dir) = Self::default_user_dir() {
            builder = builder.user_dir(user_dir);
        }

        builder.build()
    }
}

/// Builder for ConfigLoader
#[derive(Debug)]
pub struct ConfigLoaderBuilder {
    user_dir: Option<PathBuf>,
    file: Option<PathBuf>,
    base: AnalyzerConfig,
}

impl ConfigLoaderBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self { user_dir: None, file: None, base: AnalyzerConfig::default() }
    }

    /// Set the user config directory
    pub fn user_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.user_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set an explicit directive file
    pub fn file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the config that overrides apply to
    pub fn base(mut self, config: AnalyzerConfig) -> Self {
        self.base = config;
        self
    }

    /// Build the ConfigLoader
    pub fn build(self) -> ConfigLoader {
        ConfigLoader { user_dir: self.user_dir, file: self.file, base: self.base }
    }
}

impl Default for ConfigLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
