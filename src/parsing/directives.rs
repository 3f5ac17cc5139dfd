//! Directive dispatch
//!
//! Recognition is by line prefix, tried in a fixed order where the first match
//! wins. Recognized directives mutate the active target; unrecognized lines are
//! left to the caller, which ignores them.
//!
//! Malformed values never fail a directive. A missing or invalid integer is
//! stored as `0` and a missing string as `""`, and a warning is logged.

use super::values::{
    extract_int, extract_int_and_string, extract_string, extract_words, ValueError,
};
use crate::model::{Route, ServerBlock};
use std::fmt;

/// Directives accepted directly inside `server { ... }`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerDirective {
    Listen,
    ServerName,
    Root,
    ClientMaxBodySize,
    Index,
    ErrorPage,
    AllowMethods,
    /// Opens a route block; handled by the block parser, not by [`apply_server`]
    Location,
}

/// Directives accepted inside `location <path> { ... }`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDirective {
    Autoindex,
    Return,
    Root,
    Index,
    AllowMethods,
}

const SERVER_DIRECTIVES: &[(&str, ServerDirective)] = &[
    ("listen", ServerDirective::Listen),
    ("server_name", ServerDirective::ServerName),
    ("root", ServerDirective::Root),
    ("client_max_body_size", ServerDirective::ClientMaxBodySize),
    ("index", ServerDirective::Index),
    ("error_page", ServerDirective::ErrorPage),
    ("allow_methods", ServerDirective::AllowMethods),
    ("location", ServerDirective::Location),
];

const ROUTE_DIRECTIVES: &[(&str, RouteDirective)] = &[
    ("autoindex", RouteDirective::Autoindex),
    ("return", RouteDirective::Return),
    ("root", RouteDirective::Root),
    ("index", RouteDirective::Index),
    ("allow_methods", RouteDirective::AllowMethods),
];

impl ServerDirective {
    pub fn keyword(&self) -> &'static str {
        SERVER_DIRECTIVES
            .iter()
            .find(|(_, directive)| *directive == *self)
            .map(|(keyword, _)| *keyword)
            .unwrap_or_default()
    }
}

impl RouteDirective {
    pub fn keyword(&self) -> &'static str {
        ROUTE_DIRECTIVES
            .iter()
            .find(|(_, directive)| *directive == *self)
            .map(|(keyword, _)| *keyword)
            .unwrap_or_default()
    }
}

impl fmt::Display for ServerDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for RouteDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Match a normalized line against the server-scope keywords
pub fn recognize_server(line: &str) -> Option<ServerDirective> {
    SERVER_DIRECTIVES
        .iter()
        .find(|(keyword, _)| line.starts_with(*keyword))
        .map(|(_, directive)| *directive)
}

/// Match a normalized line against the route-scope keywords
pub fn recognize_route(line: &str) -> Option<RouteDirective> {
    ROUTE_DIRECTIVES
        .iter()
        .find(|(keyword, _)| line.starts_with(*keyword))
        .map(|(_, directive)| *directive)
}

/// Unwrap an extracted value or fall back to the type's default
fn or_default<T: Default>(
    value: Result<T, ValueError>,
    directive: &dyn fmt::Display,
    line_number: usize,
) -> T {
    value.unwrap_or_else(|err| {
        tracing::warn!(
            line = line_number,
            directive = %directive,
            "{}, using default",
            err
        );
        T::default()
    })
}

/// Apply a server-scope directive to `server`
///
/// `ServerDirective::Location` is a no-op here.
pub fn apply_server(
    server: &mut ServerBlock,
    directive: ServerDirective,
    line: &str,
    line_number: usize,
) {
    tracing::trace!(line = line_number, directive = %directive, "server directive");
    match directive {
        ServerDirective::Listen => {
            server.set_port(or_default(extract_int(line), &directive, line_number));
        }
        ServerDirective::ServerName => {
            server.set_name(or_default(extract_string(line), &directive, line_number));
        }
        ServerDirective::Root => {
            server.set_root_dir(or_default(extract_string(line), &directive, line_number));
        }
        ServerDirective::ClientMaxBodySize => {
            server.set_max_body_size(or_default(extract_int(line), &directive, line_number));
        }
        ServerDirective::Index => {
            server.set_default_file(or_default(extract_string(line), &directive, line_number));
        }
        ServerDirective::ErrorPage => {
            let (code, path) = extract_int_and_string(line);
            server.set_error_page(
                or_default(code, &directive, line_number),
                or_default(path, &directive, line_number),
            );
        }
        ServerDirective::AllowMethods => {
            server.set_allowed_methods(extract_words(line));
        }
        ServerDirective::Location => {}
    }
}

/// Apply a route-scope directive to `route`
pub fn apply_route(route: &mut Route, directive: RouteDirective, line: &str, line_number: usize) {
    tracing::trace!(line = line_number, directive = %directive, path = %route.path, "route directive");
    match directive {
        RouteDirective::Autoindex => {
            route.set_autoindex(or_default(extract_string(line), &directive, line_number));
        }
        RouteDirective::Return => {
            let (status, url) = extract_int_and_string(line);
            route.set_redirect(
                or_default(status, &directive, line_number),
                or_default(url, &directive, line_number),
            );
        }
        RouteDirective::Root => {
            route.set_root_dir(or_default(extract_string(line), &directive, line_number));
        }
        RouteDirective::Index => {
            route.set_index_file(or_default(extract_string(line), &directive, line_number));
        }
        RouteDirective::AllowMethods => {
            route.set_allowed_methods(extract_words(line));
        }
    }
}
