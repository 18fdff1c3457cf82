//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Configuration for the terminal front end.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Colour for X marks.
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Colour for O marks.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// Colour for the cells of a winning line.
    #[serde(default = "default_highlight_color")]
    highlight_color: String,

    /// File that receives tracing output while the UI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_x_color() -> String {
    "blue".to_string()
}

fn default_o_color() -> String {
    "red".to_string()
}

fn default_highlight_color() -> String {
    "yellow".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_tui.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            x_color: default_x_color(),
            o_color: default_o_color(),
            highlight_color: default_highlight_color(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration, falling back to defaults when the file is absent.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Resolves the configured colour names.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette::new(
            parse_color("x_color", &self.x_color)?,
            parse_color("o_color", &self.o_color)?,
            parse_color("highlight_color", &self.highlight_color)?,
        ))
    }
}

#[track_caller]
fn parse_color(field: &str, name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name)
        .map_err(|_| ConfigError::new(format!("Invalid colour for {}: {:?}", field, name)))
}

/// Resolved colours used when drawing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Palette {
    /// Colour for X marks.
    pub x: Color,
    /// Colour for O marks.
    pub o: Color,
    /// Colour for the cells of a winning line.
    pub highlight: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Color::Blue, Color::Red, Color::Yellow)
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
