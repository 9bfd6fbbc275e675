//! TUI configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal UI.
///
/// Every field has a default, so an empty file (or no file at all) is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File the TUI writes its logs to (stdout belongs to the terminal).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// How long to wait for input before redrawing, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,

    /// Color of X marks.
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color of O marks.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// Background of the winning cells.
    #[serde(default = "default_highlight_color")]
    highlight_color: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind_tui.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_x_color() -> String {
    "blue".to_string()
}

fn default_o_color() -> String {
    "red".to_string()
}

fn default_highlight_color() -> String {
    "green".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            poll_interval_ms: default_poll_interval_ms(),
            x_color: default_x_color(),
            o_color: default_o_color(),
            highlight_color: default_highlight_color(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.theme()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Resolves the configured color names.
    #[instrument(skip(self))]
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Ok(Theme::new(
            parse_color("x_color", &self.x_color)?,
            parse_color("o_color", &self.o_color)?,
            parse_color("highlight_color", &self.highlight_color)?,
        ))
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    value
        .parse::<Color>()
        .map_err(|_| ConfigError::new(format!("Unknown color {value:?} for {field}")))
}

/// Colors used to draw the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Theme {
    /// Color of X marks.
    pub x: Color,
    /// Color of O marks.
    pub o: Color,
    /// Background of the winning cells.
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Color::Blue, Color::Red, Color::Green)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = TuiConfig::default();
        assert_eq!(config.log_file(), &PathBuf::from("rewind_tui.log"));
        assert_eq!(*config.poll_interval_ms(), 100);
        assert_eq!(config.theme().expect("default colors"), Theme::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "x_color = \"magenta\"\npoll_interval_ms = 50").expect("write");

        let config = TuiConfig::from_file(file.path()).expect("valid config");
        assert_eq!(config.x_color(), "magenta");
        assert_eq!(*config.poll_interval_ms(), 50);
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.theme().expect("colors").x, Color::Magenta);
    }

    #[test]
    fn test_unknown_color_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "highlight_color = \"not-a-color\"").expect("write");

        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("highlight_color"));
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "poll_interval_ms = \"soon\"").expect("write");
        assert!(TuiConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = TuiConfig::load(dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, TuiConfig::default());
    }
}
