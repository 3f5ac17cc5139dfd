//! Line Classification
//!
//! Trims a raw line and decides whether the block parser needs to look at it.

use std::fmt;

/// Classification of a single trimmed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Empty after trimming
    BlankLine,

    /// First non-whitespace character is `#`
    CommentLine,

    /// Anything else: a block opener, a closing brace or a directive
    ContentLine,
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineType::BlankLine => "BLANK_LINE",
            LineType::CommentLine => "COMMENT_LINE",
            LineType::ContentLine => "CONTENT_LINE",
        };
        write!(f, "{}", name)
    }
}

/// Trim ASCII spaces and tabs from both ends of a line
///
/// Other whitespace (form feeds, non-breaking spaces) is kept, so `"server {\x0c"`
/// does not open a block.
pub fn normalize(line: &str) -> &str {
    line.trim_matches(|c| c == ' ' || c == '\t')
}

/// Classify an already normalized line
pub fn classify_line(normalized: &str) -> LineType {
    if normalized.is_empty() {
        LineType::BlankLine
    } else if normalized.starts_with('#') {
        LineType::CommentLine
    } else {
        LineType::ContentLine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_spaces_and_tabs() {
        assert_eq!(normalize(" \t listen 80\t "), "listen 80");
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace() {
        assert_eq!(normalize("  error_page  404   /e.html "), "error_page  404   /e.html");
    }

    #[test]
    fn test_normalize_keeps_other_whitespace() {
        assert_eq!(normalize("}\x0c"), "}\x0c");
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify_line(normalize("   \t")), LineType::BlankLine);
        assert_eq!(classify_line(normalize("  # note")), LineType::CommentLine);
        assert_eq!(classify_line(normalize("listen 80 # not a comment")), LineType::ContentLine);
        assert_eq!(classify_line("}"), LineType::ContentLine);
    }

    #[test]
    fn test_display() {
        assert_eq!(LineType::CommentLine.to_string(), "COMMENT_LINE");
    }
}
