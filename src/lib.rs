//! # servconf
//!
//! A parser for nginx-style virtual server configuration files.
//!
//! The input is a sequence of `server { ... }` blocks, each holding directives and
//! nested `location <path> { ... }` blocks. Parsing produces a list of
//! [`ServerBlock`](model::ServerBlock)s, each owning its [`Route`](model::Route)s.
//!
//! The parser is tolerant: unknown directives, unbalanced braces and malformed
//! numbers never fail a parse. The only error surfaced to callers is a file that
//! cannot be opened ([`LoadError`](loader::LoadError)).
//!
//! ## Module Organization
//!
//! - [`lexing`]: line source, line classification and directive word tokenizing
//! - [`parsing`]: block state machine, directive dispatch and typed value extraction
//! - [`model`]: the server and route entities
//! - [`formats`]: display and serialization of parsed servers
//! - [`loader`]: entry points for strings, readers and files
//! - [`logging`]: subscriber setup for binaries
//! - [`testing`]: fluent assertions and fixture loading for tests
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](testing).

pub mod formats;
pub mod lexing;
pub mod loader;
pub mod logging;
pub mod model;
pub mod parsing;
pub mod testing;

pub use loader::{load_file, parse_str, ConfigLoader, LoadError};
pub use model::{Redirect, Route, ServerBlock};
