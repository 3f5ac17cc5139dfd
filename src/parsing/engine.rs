//! Block Parser
//!
//! A two-level state machine over normalized lines:
//!
//! ```text
//!   Outside --"server {"--> InServer --"location ..."--> InLocation
//!      ^                      |    ^                        |
//!      +---------"}"----------+    +----------"}"-----------+
//! ```
//!
//! The open server (and open route) travel inside the state by value, so a
//! route can only ever be attached to the server it was opened in. Location
//! blocks do not nest: a `location` line inside a location is ignored.
//!
//! Nothing here fails. Unknown lines are skipped, and blocks still open at the
//! end of input are closed as they are.

use super::directives::{
    apply_route, apply_server, recognize_route, recognize_server, ServerDirective,
};
use super::values::extract_location_path;
use crate::lexing::{classify_line, normalize, LineType, SourceLine};
use crate::model::{Route, ServerBlock};

const SERVER_OPEN: &str = "server {";
const BLOCK_CLOSE: &str = "}";

/// Where the parser currently is
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ParseState {
    /// Top level, between server blocks
    #[default]
    Outside,
    /// Inside `server { ... }`
    InServer(ServerBlock),
    /// Inside `location <path> { ... }` of the given server
    InLocation(ServerBlock, Route),
}

impl ParseState {
    pub fn name(&self) -> &'static str {
        match self {
            ParseState::Outside => "outside",
            ParseState::InServer(_) => "server",
            ParseState::InLocation(..) => "location",
        }
    }
}

/// Parse context: completed servers plus the current state
#[derive(Debug, Default)]
pub struct Parser {
    servers: Vec<ServerBlock>,
    state: ParseState,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ParseState {
        &self.state
    }

    /// Servers closed so far (not counting the one being parsed)
    pub fn servers(&self) -> &[ServerBlock] {
        &self.servers
    }

    /// Feed one raw line
    pub fn feed(&mut self, line: &SourceLine) {
        let text = normalize(&line.text);
        if classify_line(text) != LineType::ContentLine {
            return;
        }
        let state = std::mem::take(&mut self.state);
        self.state = self.step(state, text, line.number);
    }

    fn step(&mut self, state: ParseState, line: &str, number: usize) -> ParseState {
        match state {
            ParseState::Outside => {
                if line == SERVER_OPEN {
                    tracing::debug!(line = number, "server block opened");
                    ParseState::InServer(ServerBlock::new())
                } else {
                    tracing::debug!(line = number, content = line, "ignoring line outside server block");
                    ParseState::Outside
                }
            }
            ParseState::InServer(mut server) => {
                if line == BLOCK_CLOSE {
                    tracing::debug!(line = number, "server block closed");
                    self.servers.push(server);
                    return ParseState::Outside;
                }
                match recognize_server(line) {
                    Some(ServerDirective::Location) => {
                        let path = extract_location_path(line);
                        tracing::debug!(line = number, path = %path, "location block opened");
                        return ParseState::InLocation(server, Route::new(path));
                    }
                    Some(directive) => apply_server(&mut server, directive, line, number),
                    None => {
                        tracing::debug!(line = number, content = line, "ignoring unrecognized server directive")
                    }
                }
                ParseState::InServer(server)
            }
            ParseState::InLocation(mut server, mut route) => {
                if line == BLOCK_CLOSE {
                    tracing::debug!(line = number, path = %route.path, "location block closed");
                    server.add_route(route);
                    return ParseState::InServer(server);
                }
                match recognize_route(line) {
                    Some(directive) => apply_route(&mut route, directive, line, number),
                    None => {
                        tracing::debug!(line = number, content = line, "ignoring unrecognized location directive")
                    }
                }
                ParseState::InLocation(server, route)
            }
        }
    }

    /// Close whatever is still open and return every server, in file order
    pub fn finish(mut self) -> Vec<ServerBlock> {
        match std::mem::take(&mut self.state) {
            ParseState::Outside => {}
            ParseState::InServer(server) => {
                tracing::warn!("end of input inside a server block, closing it");
                self.servers.push(server);
            }
            ParseState::InLocation(mut server, route) => {
                tracing::warn!(path = %route.path, "end of input inside a location block, closing it");
                server.add_route(route);
                self.servers.push(server);
            }
        }
        self.servers
    }
}

/// Run the parser over a whole line sequence
pub fn parse_lines<I>(lines: I) -> Vec<ServerBlock>
where
    I: IntoIterator<Item = SourceLine>,
{
    let mut parser = Parser::new();
    let mut count = 0;
    for line in lines {
        parser.feed(&line);
        count = line.number;
    }
    let servers = parser.finish();
    tracing::info!(lines = count, servers = servers.len(), "parsed configuration");
    servers
}
