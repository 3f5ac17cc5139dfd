//! Parsing
//!
//! Builds [`ServerBlock`](crate::model::ServerBlock)s from lines.
//!
//! - [`engine`]: the block state machine (`Outside` / `InServer` / `InLocation`)
//! - [`directives`]: keyword recognition and mutation of the active target
//! - [`values`]: typed extraction of directive values

pub mod directives;
pub mod engine;
pub mod values;

pub use directives::{RouteDirective, ServerDirective};
pub use engine::{parse_lines, ParseState, Parser};
pub use values::ValueError;
