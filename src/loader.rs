//! Configuration loading API
//!
//! Primary entry point for turning configuration text into servers. String and
//! reader methods are the core; the file method opens the file and delegates.
//!
//! ```rust,ignore
//! use servconf::formats::OutputFormat;
//! use servconf::ConfigLoader;
//!
//! let loader = ConfigLoader::new();
//!
//! // Parse a string
//! let servers = loader.parse("server {\n    listen 80\n}\n");
//!
//! // Parse a file
//! let servers = loader.load("conf/default.conf")?;
//!
//! // Parse and serialize
//! let json = loader.load_and_format("conf/default.conf", OutputFormat::Json)?;
//! ```

use crate::formats::{FormatError, OutputFormat};
use crate::lexing::LineSource;
use crate::model::ServerBlock;
use crate::parsing::parse_lines;
use std::fmt;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Errors surfaced while loading a configuration
///
/// Parsing itself never fails; only opening the input and rendering the
/// result can.
#[derive(Debug)]
pub enum LoadError {
    /// The configuration file could not be opened for reading
    Open { path: PathBuf, source: io::Error },
    /// The parsed servers could not be rendered
    Format(FormatError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Open { path, source } => {
                write!(f, "Could not open configuration file '{}': {}", path.display(), source)
            }
            LoadError::Format(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Open { source, .. } => Some(source),
            LoadError::Format(err) => Some(err),
        }
    }
}

impl From<FormatError> for LoadError {
    fn from(err: FormatError) -> Self {
        LoadError::Format(err)
    }
}

/// Parses configuration text and renders the result
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        ConfigLoader
    }

    // ===== STRING AND READER PROCESSING =====

    /// Parse configuration text
    pub fn parse(&self, source: &str) -> Vec<ServerBlock> {
        self.parse_reader(source.as_bytes())
    }

    /// Parse everything a buffered reader yields
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Vec<ServerBlock> {
        parse_lines(LineSource::new(reader))
    }

    /// Render servers in the given output format
    pub fn format(&self, servers: &[ServerBlock], format: OutputFormat) -> Result<String, LoadError> {
        Ok(format.render(servers)?)
    }

    // ===== FILE PROCESSING =====

    /// Open and parse a configuration file
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Vec<ServerBlock>, LoadError> {
        let path = path.as_ref();
        let source = LineSource::open(path)?;
        tracing::debug!(path = %path.display(), "loading configuration");
        Ok(parse_lines(source))
    }

    /// Open, parse and render a configuration file
    pub fn load_and_format(
        &self,
        path: impl AsRef<Path>,
        format: OutputFormat,
    ) -> Result<String, LoadError> {
        let servers = self.load(path)?;
        self.format(&servers, format)
    }
}

/// Parse configuration text with the default loader
pub fn parse_str(source: &str) -> Vec<ServerBlock> {
    ConfigLoader::new().parse(source)
}

/// Open and parse a configuration file with the default loader
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<ServerBlock>, LoadError> {
    ConfigLoader::new().load(path)
}
