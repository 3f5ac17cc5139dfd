//! Value extraction
//!
//! Each directive line is `keyword value...`. The extractors drop the keyword and
//! read the remaining words positionally. Failures are reported as
//! [`ValueError`]; it is the dispatcher's job to decide what a failure means.

use crate::lexing::words;
use std::fmt;

/// Why a value could not be extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The line ended before the value
    Missing,
    /// The word is not an integer in range for the target field
    InvalidInteger(String),
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::Missing => write!(f, "missing value"),
            ValueError::InvalidInteger(word) => write!(f, "'{}' is not a valid integer", word),
        }
    }
}

impl std::error::Error for ValueError {}

/// The words after the keyword
fn values(line: &str) -> Vec<&str> {
    let mut all = words(line);
    if !all.is_empty() {
        all.remove(0);
    }
    all
}

fn parse_int<T: std::str::FromStr>(word: Option<&str>) -> Result<T, ValueError> {
    let word = word.ok_or(ValueError::Missing)?;
    word.parse()
        .map_err(|_| ValueError::InvalidInteger(word.to_string()))
}

fn parse_string(word: Option<&str>) -> Result<String, ValueError> {
    word.map(str::to_string).ok_or(ValueError::Missing)
}

/// First value as an integer (`listen 8080`)
pub fn extract_int<T: std::str::FromStr>(line: &str) -> Result<T, ValueError> {
    parse_int(values(line).first().copied())
}

/// First value as a string (`root /var/www`)
pub fn extract_string(line: &str) -> Result<String, ValueError> {
    parse_string(values(line).first().copied())
}

/// First value as an integer, second as a string (`error_page 404 /404.html`)
///
/// The two halves are extracted independently so that a bad code does not
/// lose the path. A stream-style reader would stop at the bad code and leave
/// the path empty; here the path is kept.
pub fn extract_int_and_string<T: std::str::FromStr>(
    line: &str,
) -> (Result<T, ValueError>, Result<String, ValueError>) {
    let values = values(line);
    (
        parse_int(values.first().copied()),
        parse_string(values.get(1).copied()),
    )
}

/// Every value, in order (`allow_methods GET POST`); may be empty
pub fn extract_words(line: &str) -> Vec<String> {
    values(line).into_iter().map(str::to_string).collect()
}

/// The path of a `location <path> {` line
///
/// Everything between the keyword and the first `{`, trimmed. Without a brace
/// the rest of the line is the path.
pub fn extract_location_path(line: &str) -> String {
    let rest = line.strip_prefix("location").unwrap_or(line);
    let path = match rest.find('{') {
        Some(brace) => &rest[..brace],
        None => rest,
    };
    crate::lexing::normalize(path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_int() {
        assert_eq!(extract_int::<u16>("listen 8080"), Ok(8080));
        assert_eq!(extract_int::<u64>("client_max_body_size   1048576"), Ok(1_048_576));
    }

    #[test]
    fn test_extract_int_ignores_trailing_words() {
        assert_eq!(extract_int::<u16>("listen 80 default_server"), Ok(80));
    }

    #[test]
    fn test_extract_int_invalid() {
        assert_eq!(
            extract_int::<u16>("listen eighty"),
            Err(ValueError::InvalidInteger("eighty".into()))
        );
        assert_eq!(
            extract_int::<u16>("listen 70000"),
            Err(ValueError::InvalidInteger("70000".into()))
        );
        assert_eq!(
            extract_int::<u64>("client_max_body_size 10M"),
            Err(ValueError::InvalidInteger("10M".into()))
        );
    }

    #[test]
    fn test_extract_int_missing() {
        assert_eq!(extract_int::<u16>("listen"), Err(ValueError::Missing));
    }

    #[test]
    fn test_extract_string() {
        assert_eq!(extract_string("server_name example.com"), Ok("example.com".into()));
        assert_eq!(extract_string("root\t/var/www"), Ok("/var/www".into()));
        assert_eq!(extract_string("index"), Err(ValueError::Missing));
    }

    #[test]
    fn test_extract_int_and_string() {
        assert_eq!(
            extract_int_and_string::<u16>("error_page 404 /404.html"),
            (Ok(404), Ok("/404.html".into()))
        );
        assert_eq!(
            extract_int_and_string::<u16>("return abc /new"),
            (Err(ValueError::InvalidInteger("abc".into())), Ok("/new".into()))
        );
        assert_eq!(
            extract_int_and_string::<u16>("return 301"),
            (Ok(301), Err(ValueError::Missing))
        );
    }

    #[test]
    fn test_bad_code_keeps_path() {
        let (code, path) = extract_int_and_string::<u16>("error_page x /e.html");
        assert_eq!(code, Err(ValueError::InvalidInteger("x".into())));
        assert_eq!(path.as_deref(), Ok("/e.html"));
    }

    #[test]
    fn test_extract_words() {
        assert_eq!(extract_words("allow_methods GET  POST\tDELETE"), vec!["GET", "POST", "DELETE"]);
        assert!(extract_words("allow_methods").is_empty());
    }

    #[rstest::rstest]
    #[case("location /static {", "/static")]
    #[case("location   /api/v1   {", "/api/v1")]
    #[case("location /{", "/")]
    #[case("location /nobrace", "/nobrace")]
    #[case("location {", "")]
    fn test_extract_location_path(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(extract_location_path(line), expected);
    }

    #[test]
    fn test_value_error_display() {
        assert_eq!(ValueError::Missing.to_string(), "missing value");
        assert_eq!(
            ValueError::InvalidInteger("x".into()).to_string(),
            "'x' is not a valid integer"
        );
    }
}
