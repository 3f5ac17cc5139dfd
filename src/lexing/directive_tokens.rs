//! Directive tokens
//!
//! A directive line is a keyword followed by values, separated by runs of
//! whitespace. There is no quoting and no escaping: every maximal run of
//! non-whitespace characters is one word.
use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum DirectiveToken {
    #[regex(r"[ \t\r\n\x0b\x0c]+")]
    Whitespace,

    #[regex(r"[^ \t\r\n\x0b\x0c]+")]
    Word,
}

/// Split a line into its words, in order
pub fn words(line: &str) -> Vec<&str> {
    let mut lexer = DirectiveToken::lexer(line);
    let mut out = Vec::new();
    while let Some(token) = lexer.next() {
        if let Ok(DirectiveToken::Word) = token {
            out.push(lexer.slice());
        }
    }
    out
}
