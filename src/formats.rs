//! Output formats for parsed servers
//!
//! - `text`: indented human-readable listing (the default display)
//! - `json`, `yaml`: serde serializations of the model
//!
//! The set of formats is closed. [`OutputFormat`] names each one and
//! dispatches to its renderer.

pub mod serialized;
pub mod text;

pub use serialized::{to_json, to_yaml};
pub use text::to_text;

use crate::model::ServerBlock;
use std::fmt;
use std::str::FromStr;

/// Errors that can occur when choosing or rendering a format
#[derive(Debug)]
pub enum FormatError {
    /// No format has this name
    Unknown(String),
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Unknown(name) => write!(f, "unknown format '{}'", name),
            FormatError::Json(err) => write!(f, "JSON serialization failed: {}", err),
            FormatError::Yaml(err) => write!(f, "YAML serialization failed: {}", err),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::Unknown(_) => None,
            FormatError::Json(err) => Some(err),
            FormatError::Yaml(err) => Some(err),
        }
    }
}

/// Output format used to render parsed servers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented listing, one block per server
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Every format, in listing order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml];

    /// Name accepted by `--format`
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    /// One-line summary shown by `--list-formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Indented human-readable listing",
            OutputFormat::Json => "JSON array of servers",
            OutputFormat::Yaml => "YAML sequence of servers",
        }
    }

    /// Names of every format, in listing order
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(OutputFormat::name).collect()
    }

    /// Render servers in this format
    pub fn render(&self, servers: &[ServerBlock]) -> Result<String, FormatError> {
        match self {
            OutputFormat::Text => Ok(to_text(servers)),
            OutputFormat::Json => to_json(servers).map_err(FormatError::Json),
            OutputFormat::Yaml => to_yaml(servers).map_err(FormatError::Yaml),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| FormatError::Unknown(name.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
