//! Fixture loader
//!
//! Sample configurations live in `tests/fixtures/<name>.conf`. Loading a
//! fixture that does not exist is a test bug and panics with the path.

use crate::loader::{ConfigLoader, LoadError};
use crate::model::ServerBlock;
use std::fs;
use std::path::PathBuf;

pub struct Fixtures;

impl Fixtures {
    /// Directory holding the sample configurations
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
    }

    pub fn path(name: &str) -> PathBuf {
        Self::dir().join(format!("{}.conf", name))
    }

    /// Raw text of a fixture
    pub fn source(name: &str) -> String {
        let path = Self::path(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Could not read fixture {}: {}", path.display(), e))
    }

    /// Load a fixture through the file path API
    pub fn load(name: &str) -> Result<Vec<ServerBlock>, LoadError> {
        ConfigLoader::new().load(Self::path(name))
    }

    /// Load a fixture, panicking if it cannot be opened
    pub fn parse(name: &str) -> Vec<ServerBlock> {
        Self::load(name).unwrap_or_else(|e| panic!("Fixture '{}': {}", name, e))
    }

    /// Names of every fixture, sorted
    pub fn all() -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(Self::dir())
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .map(|entry| entry.path())
                    .filter(|path| path.extension().is_some_and(|ext| ext == "conf"))
                    .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }
}
