//! Fluent assertion API for parsed servers

use crate::model::{Route, ServerBlock};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a list of servers
pub fn assert_servers(servers: &[ServerBlock]) -> ServersAssertion<'_> {
    ServersAssertion { servers }
}

// ============================================================================
// Server List Assertions
// ============================================================================

pub struct ServersAssertion<'a> {
    servers: &'a [ServerBlock],
}

impl<'a> ServersAssertion<'a> {
    /// Assert the number of servers
    pub fn server_count(self, expected: usize) -> Self {
        assert_eq!(
            self.servers.len(),
            expected,
            "Expected {} servers, found {}: [{}]",
            expected,
            self.servers.len(),
            summarize_servers(self.servers)
        );
        self
    }

    /// Assert on a specific server by index
    pub fn server<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ServerAssertion<'a>),
    {
        assert!(
            index < self.servers.len(),
            "Server index {} out of bounds ({} servers)",
            index,
            self.servers.len()
        );
        assertion(ServerAssertion {
            server: &self.servers[index],
            context: format!("servers[{}]", index),
        });
        self
    }
}

fn summarize_servers(servers: &[ServerBlock]) -> String {
    servers
        .iter()
        .map(|s| match (&s.name, s.port) {
            (Some(name), Some(port)) => format!("{}:{}", name, port),
            (Some(name), None) => name.clone(),
            (None, Some(port)) => format!(":{}", port),
            (None, None) => "<unnamed>".to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Server Assertions
// ============================================================================

pub struct ServerAssertion<'a> {
    server: &'a ServerBlock,
    context: String,
}

impl<'a> ServerAssertion<'a> {
    pub fn port(self, expected: u16) -> Self {
        assert_eq!(self.server.port, Some(expected), "{}: port", self.context);
        self
    }

    pub fn no_port(self) -> Self {
        assert_eq!(self.server.port, None, "{}: expected no port", self.context);
        self
    }

    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.server.name.as_deref(), Some(expected), "{}: server_name", self.context);
        self
    }

    pub fn root_dir(self, expected: &str) -> Self {
        assert_eq!(self.server.root_dir.as_deref(), Some(expected), "{}: root", self.context);
        self
    }

    pub fn max_body_size(self, expected: u64) -> Self {
        assert_eq!(
            self.server.max_body_size,
            Some(expected),
            "{}: client_max_body_size",
            self.context
        );
        self
    }

    pub fn default_file(self, expected: &str) -> Self {
        assert_eq!(self.server.default_file.as_deref(), Some(expected), "{}: index", self.context);
        self
    }

    pub fn error_page(self, code: u16, expected: &str) -> Self {
        assert_eq!(
            self.server.error_page(code),
            Some(expected),
            "{}: error_page {}",
            self.context,
            code
        );
        self
    }

    pub fn error_page_count(self, expected: usize) -> Self {
        assert_eq!(
            self.server.error_pages.len(),
            expected,
            "{}: error page count (pages: {:?})",
            self.context,
            self.server.error_pages
        );
        self
    }

    pub fn allowed_methods(self, expected: &[&str]) -> Self {
        assert_eq!(self.server.allowed_methods, expected, "{}: allow_methods", self.context);
        self
    }

    pub fn route_count(self, expected: usize) -> Self {
        let paths: Vec<_> = self.server.routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            self.server.routes.len(),
            expected,
            "{}: expected {} routes, found {:?}",
            self.context,
            expected,
            paths
        );
        self
    }

    /// Assert on a specific route by index
    pub fn route<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(RouteAssertion<'a>),
    {
        assert!(
            index < self.server.routes.len(),
            "{}: route index {} out of bounds ({} routes)",
            self.context,
            index,
            self.server.routes.len()
        );
        assertion(RouteAssertion {
            route: &self.server.routes[index],
            context: format!("{}.routes[{}]", self.context, index),
        });
        self
    }

    /// Assert the server equals `expected` field for field
    pub fn equals(self, expected: &ServerBlock) -> Self {
        assert_eq!(self.server, expected, "{}", self.context);
        self
    }
}

// ============================================================================
// Route Assertions
// ============================================================================

pub struct RouteAssertion<'a> {
    route: &'a Route,
    context: String,
}

impl<'a> RouteAssertion<'a> {
    pub fn path(self, expected: &str) -> Self {
        assert_eq!(self.route.path, expected, "{}: path", self.context);
        self
    }

    pub fn autoindex(self, expected: &str) -> Self {
        assert_eq!(self.route.autoindex.as_deref(), Some(expected), "{}: autoindex", self.context);
        self
    }

    pub fn redirect(self, status: u16, url: &str) -> Self {
        let actual = self.route.redirect.as_ref().map(|r| (r.status, r.url.as_str()));
        assert_eq!(actual, Some((status, url)), "{}: return", self.context);
        self
    }

    pub fn no_redirect(self) -> Self {
        assert_eq!(self.route.redirect, None, "{}: expected no return", self.context);
        self
    }

    pub fn root_dir(self, expected: &str) -> Self {
        assert_eq!(self.route.root_dir.as_deref(), Some(expected), "{}: root", self.context);
        self
    }

    pub fn index_file(self, expected: &str) -> Self {
        assert_eq!(self.route.index_file.as_deref(), Some(expected), "{}: index", self.context);
        self
    }

    pub fn allowed_methods(self, expected: &[&str]) -> Self {
        let actual: Option<Vec<&str>> = self
            .route
            .allowed_methods
            .as_ref()
            .map(|methods| methods.iter().map(String::as_str).collect());
        assert_eq!(actual.as_deref(), Some(expected), "{}: allow_methods", self.context);
        self
    }

    /// Assert the route sets nothing beyond its path
    pub fn is_bare(self) -> Self {
        assert_eq!(
            self.route,
            &Route::new(self.route.path.clone()),
            "{}: expected no directives",
            self.context
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_str;

    #[test]
    fn test_fluent_chain() {
        let servers = parse_str(
            "server {\nlisten 80\nserver_name a\nlocation / {\nautoindex on\n}\nlocation /b {\n}\n}\n",
        );
        assert_servers(&servers).server_count(1).server(0, |server| {
            server
                .port(80)
                .name("a")
                .route_count(2)
                .route(0, |route| {
                    route.path("/").autoindex("on").no_redirect();
                })
                .route(1, |route| {
                    route.path("/b").is_bare();
                });
        });
    }

    #[test]
    #[should_panic(expected = "Expected 2 servers, found 1")]
    fn test_server_count_mismatch_panics() {
        let servers = parse_str("server {\n}\n");
        assert_servers(&servers).server_count(2);
    }

    #[test]
    #[should_panic(expected = "servers[0].routes[0]: index")]
    fn test_route_context_in_message() {
        let servers = parse_str("server {\nlocation / {\nindex a.html\n}\n}\n");
        assert_servers(&servers).server(0, |server| {
            server.route(0, |route| {
                route.index_file("b.html");
            });
        });
    }

    #[test]
    fn test_summarize_servers() {
        let servers = parse_str("server {\nlisten 80\nserver_name a\n}\nserver {\n}\n");
        assert_eq!(summarize_servers(&servers), "a:80, <unnamed>");
    }
}
