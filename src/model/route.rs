//! Route (location block) entity

use serde::{Deserialize, Serialize};

/// Target of a `return <status> <url>` directive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub status: u16,
    pub url: String,
}

/// Per-path overrides declared by `location <path> { ... }`
///
/// Every field except `path` is optional: an unset field means "use the
/// enclosing server's value" (see [`ServerBlock::effective_root`] and friends).
///
/// [`ServerBlock::effective_root`]: crate::model::ServerBlock::effective_root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoindex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Redirect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<Vec<String>>,
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn set_autoindex(&mut self, value: impl Into<String>) {
        self.autoindex = Some(value.into());
    }

    /// Set status and URL together
    pub fn set_redirect(&mut self, status: u16, url: impl Into<String>) {
        self.redirect = Some(Redirect {
            status,
            url: url.into(),
        });
    }

    pub fn set_root_dir(&mut self, root: impl Into<String>) {
        self.root_dir = Some(root.into());
    }

    pub fn set_index_file(&mut self, index: impl Into<String>) {
        self.index_file = Some(index.into());
    }

    pub fn set_allowed_methods(&mut self, methods: Vec<String>) {
        self.allowed_methods = Some(methods);
    }

    /// Interpret the raw autoindex value as a switch
    ///
    /// `on`, `true`, `yes` and `1` (any case) enable it; anything else, or no
    /// value at all, leaves it off.
    pub fn autoindex_enabled(&self) -> bool {
        self.autoindex.as_deref().is_some_and(|value| {
            matches!(
                value.to_ascii_lowercase().as_str(),
                "on" | "true" | "yes" | "1"
            )
        })
    }

    /// Whether `uri` falls under this route's prefix
    pub fn matches(&self, uri: &str) -> bool {
        uri.starts_with(self.path.as_str())
    }
}
