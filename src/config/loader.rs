use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/folio/config.toml` on Unix/macOS, or the equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("folio").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file is not an error: the built-in sample portfolio is used.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file, using sample portfolio");
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Parses TOML content without validating it.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Typing, deleting, pause and frame intervals are non-zero
    /// - The visibility threshold is within (0, 1]
    /// - Every project has a title
    ///
    /// An empty phrase list is accepted; the hero subtitle stays blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let typewriter = &self.typewriter;
        if typewriter.typing_speed_ms == 0 || typewriter.deleting_speed_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "typing_speed_ms and deleting_speed_ms must be greater than zero"
                    .to_string(),
            });
        }

        if typewriter.pause_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "pause_ms must be greater than zero".to_string(),
            });
        }

        if self.preview.frame_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "frame_ms must be greater than zero".to_string(),
            });
        }

        let threshold = self.preview.visibility_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "visibility_threshold must be within (0, 1], got {}",
                    threshold
                ),
            });
        }

        if let Some(index) = self.projects.iter().position(|p| p.title.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                message: format!("Project #{} has an empty title", index + 1),
            });
        }

        if typewriter.phrases.is_empty() {
            tracing::warn!("typewriter.phrases is empty, hero subtitle will stay blank");
        }

        Ok(())
    }

    /// Directory that relative media paths resolve against.
    pub fn media_base(config_path: &Path) -> PathBuf {
        config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
