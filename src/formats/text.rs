//! Human-readable display of parsed servers
//!
//! ```text
//! server #1
//!   listen:        8080
//!   server_name:   example.com
//!   ...
//!   location /static
//!     index:         static.html
//! ```
//!
//! Fields that were never set print as `-`. Error pages are listed in status
//! code order.

use crate::model::{Route, ServerBlock};
use std::fmt::Write;

const LABEL_WIDTH: usize = 15;

/// Render every server, separated by blank lines
pub fn to_text(servers: &[ServerBlock]) -> String {
    let mut out = String::new();
    for (i, server) in servers.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_server(&mut out, i + 1, server);
    }
    out
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn field(out: &mut String, indent: usize, label: &str, value: &str) {
    let label = format!("{}:", label);
    let _ = writeln!(out, "{:indent$}{:<width$}{}", "", label, value, indent = indent, width = LABEL_WIDTH);
}

fn methods(methods: &[String]) -> String {
    if methods.is_empty() {
        "-".to_string()
    } else {
        methods.join(" ")
    }
}

fn write_server(out: &mut String, number: usize, server: &ServerBlock) {
    let _ = writeln!(out, "server #{}", number);
    field(out, 2, "listen", &or_dash(server.port));
    field(out, 2, "server_name", &or_dash(server.name.as_deref()));
    field(out, 2, "root", &or_dash(server.root_dir.as_deref()));
    field(out, 2, "max_body_size", &or_dash(server.max_body_size));
    field(out, 2, "index", &or_dash(server.default_file.as_deref()));
    if server.error_pages.is_empty() {
        field(out, 2, "error_pages", "-");
    } else {
        let _ = writeln!(out, "  error_pages:");
        for (code, path) in &server.error_pages {
            let _ = writeln!(out, "    {} -> {}", code, path);
        }
    }
    field(out, 2, "allow_methods", &methods(&server.allowed_methods));
    for route in &server.routes {
        write_route(out, route);
    }
}

fn write_route(out: &mut String, route: &Route) {
    let _ = writeln!(out, "  location {}", route.path);
    if let Some(autoindex) = &route.autoindex {
        field(out, 4, "autoindex", autoindex);
    }
    if let Some(redirect) = &route.redirect {
        field(out, 4, "return", &format!("{} {}", redirect.status, redirect.url));
    }
    if let Some(root) = &route.root_dir {
        field(out, 4, "root", root);
    }
    if let Some(index) = &route.index_file {
        field(out, 4, "index", index);
    }
    if let Some(allowed) = &route.allowed_methods {
        field(out, 4, "allow_methods", &methods(allowed));
    }
}
