//! Server block entity

use super::route::Route;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One virtual server, declared by `server { ... }`
///
/// Scalar fields stay `None` until their directive is seen. Error pages are
/// keyed by status code and kept sorted so output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_body_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_file: Option<String>,
    #[serde(default)]
    pub error_pages: BTreeMap<u16, String>,
    #[serde(default)]
    pub allowed_methods: Vec<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl ServerBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_port(&mut self, port: u16) {
        self.port = Some(port);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn set_root_dir(&mut self, root: impl Into<String>) {
        self.root_dir = Some(root.into());
    }

    pub fn set_max_body_size(&mut self, size: u64) {
        self.max_body_size = Some(size);
    }

    pub fn set_default_file(&mut self, file: impl Into<String>) {
        self.default_file = Some(file.into());
    }

    /// Insert or overwrite the page for `code`
    pub fn set_error_page(&mut self, code: u16, path: impl Into<String>) {
        self.error_pages.insert(code, path.into());
    }

    pub fn set_allowed_methods(&mut self, methods: Vec<String>) {
        self.allowed_methods = methods;
    }

    /// Append a finished route; routes keep file order
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn error_page(&self, code: u16) -> Option<&str> {
        self.error_pages.get(&code).map(String::as_str)
    }

    /// Find the route with the longest path that prefixes `uri`
    ///
    /// On equal lengths the route declared first wins.
    pub fn match_route(&self, uri: &str) -> Option<&Route> {
        self.routes
            .iter()
            .filter(|route| route.matches(uri))
            .fold(None, |best: Option<&Route>, route| match best {
                Some(current) if current.path.len() >= route.path.len() => Some(current),
                _ => Some(route),
            })
    }

    /// Root directory for `route`, falling back to the server's
    pub fn effective_root<'a>(&'a self, route: Option<&'a Route>) -> Option<&'a str> {
        route
            .and_then(|r| r.root_dir.as_deref())
            .or(self.root_dir.as_deref())
    }

    /// Index file for `route`, falling back to the server's default file
    pub fn effective_index<'a>(&'a self, route: Option<&'a Route>) -> Option<&'a str> {
        route
            .and_then(|r| r.index_file.as_deref())
            .or(self.default_file.as_deref())
    }

    /// Allowed methods for `route`, falling back to the server's list
    pub fn effective_methods<'a>(&'a self, route: Option<&'a Route>) -> &'a [String] {
        route
            .and_then(|r| r.allowed_methods.as_deref())
            .unwrap_or(&self.allowed_methods)
    }
}
