//! Lexing
//!
//! Turns raw input into classified lines and directive words.
//!
//! - [`line_source`]: lazy, numbered, single-pass line reading
//! - [`line_classification`]: trimming and blank/comment/content classification
//! - [`directive_tokens`]: whitespace-delimited word splitting of directive lines

pub mod directive_tokens;
pub mod line_classification;
pub mod line_source;

pub use directive_tokens::{words, DirectiveToken};
pub use line_classification::{classify_line, normalize, LineType};
pub use line_source::{LineSource, SourceLine};
