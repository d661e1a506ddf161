//! Compiled patterns and the `/body/flags` literal form.
//!
//! Rules travel as plain data, so patterns are usually written as strings in
//! delimiter form (`"/^\\d{6}$/i"`). This module turns that form into a
//! compiled [`Regex`] and keeps the literal around for display and
//! serialization.

use crate::text::narrow_classes;
use crate::{Result, RuleError};
use regex::Regex;
use std::fmt;

/// A compiled regular expression together with its literal source.
///
/// # Example
///
/// ```rust
/// use rules_core::Pattern;
///
/// let pattern = Pattern::parse_literal("/^[a-z]+$/i").unwrap();
/// assert!(pattern.is_match("Hello"));
/// assert_eq!(pattern.source(), "/^[a-z]+$/i");
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles a pattern from its body and flag letters.
    ///
    /// `i`, `m` and `s` become inline regex flags. `g`, `y` and `u` are
    /// accepted and have no effect on a single match test. Any other letter,
    /// or a letter given twice, is rejected.
    ///
    /// `\d`, `\w` and `\b` match ASCII only and `\s` matches the
    /// whitespace set of [`crate::text::is_whitespace`]; literal characters
    /// and `\p{..}` classes stay Unicode-aware.
    pub fn new(body: &str, flags: &str) -> Result<Self> {
        Self::compile(body, flags, format!("/{body}/{flags}"))
    }

    /// Parses a delimiter-form literal such as `/^\d+$/i`.
    ///
    /// The body ends at the last `/`, so slashes inside the body need no
    /// escaping.
    pub fn parse_literal(literal: &str) -> Result<Self> {
        let rest = literal.strip_prefix('/').ok_or_else(|| {
            RuleError::invalid_pattern(literal, "pattern literal must start with '/'")
        })?;
        let idx = rest.rfind('/').ok_or_else(|| {
            RuleError::invalid_pattern(literal, "pattern literal has no closing '/'")
        })?;

        Self::compile(&rest[..idx], &rest[idx + 1..], literal.to_string())
    }

    /// Wraps an already compiled regex.
    pub fn from_regex(regex: Regex) -> Self {
        Self {
            source: format!("/{}/", regex.as_str()),
            regex,
        }
    }

    fn compile(body: &str, flags: &str, source: String) -> Result<Self> {
        let mut seen = Vec::new();
        let mut inline = String::new();

        for flag in flags.chars() {
            if seen.contains(&flag) {
                return Err(RuleError::invalid_pattern(
                    source,
                    format!("duplicate flag '{flag}'"),
                ));
            }
            seen.push(flag);

            match flag {
                'i' | 'm' | 's' => inline.push(flag),
                'g' | 'y' | 'u' => {}
                other => {
                    return Err(RuleError::invalid_pattern(
                        source,
                        format!("unsupported flag '{other}'"),
                    ));
                }
            }
        }

        let body = narrow_classes(body);
        let expression = if inline.is_empty() {
            body
        } else {
            format!("(?{inline}){body}")
        };

        let regex =
            Regex::new(&expression).map_err(|e| RuleError::invalid_pattern(&source, e.to_string()))?;

        Ok(Self { source, regex })
    }

    /// Returns true if the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Returns the literal this pattern was built from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the compiled regex.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_literal() {
        let pattern = Pattern::parse_literal(r"/^\d{6}$/").unwrap();
        assert!(pattern.is_match("232342"));
        assert!(!pattern.is_match("23234"));
        assert_eq!(pattern.source(), r"/^\d{6}$/");
    }

    #[test]
    fn test_last_slash_is_delimiter() {
        let pattern = Pattern::parse_literal("/a/b/").unwrap();
        assert!(pattern.is_match("a/b"));
        assert_eq!(pattern.as_regex().as_str(), "a/b");
    }

    #[test]
    fn test_shorthand_classes_are_ascii() {
        let digits = Pattern::parse_literal(r"/^\d{6}$/").unwrap();
        assert!(!digits.is_match("٢٣٢٣٤٢"));

        let word = Pattern::parse_literal(r"/^\w+$/").unwrap();
        assert!(word.is_match("hello_42"));
        assert!(!word.is_match("héllo"));

        let literal = Pattern::parse_literal("/^héllo$/i").unwrap();
        assert!(literal.is_match("HÉLLO"));

        let boundary = Pattern::parse_literal(r"/\bcat\b/").unwrap();
        assert!(boundary.is_match("a cat!"));
        assert!(boundary.is_match("écat"));
        assert!(!boundary.is_match("bobcat"));
    }

    #[test]
    fn test_flags() {
        let pattern = Pattern::parse_literal("/^abc$/i").unwrap();
        assert!(pattern.is_match("ABC"));

        let pattern = Pattern::parse_literal("/^b$/gm").unwrap();
        assert!(pattern.is_match("a\nb"));
    }

    #[test]
    fn test_invalid_literals() {
        assert!(matches!(
            Pattern::parse_literal("abc"),
            Err(RuleError::InvalidPattern { .. })
        ));
        assert!(matches!(
            Pattern::parse_literal("/abc"),
            Err(RuleError::InvalidPattern { .. })
        ));
        assert!(matches!(
            Pattern::parse_literal("/abc/x"),
            Err(RuleError::InvalidPattern { .. })
        ));
        assert!(matches!(
            Pattern::parse_literal("/abc/ii"),
            Err(RuleError::InvalidPattern { .. })
        ));
        assert!(matches!(
            Pattern::parse_literal("/[invalid(regex/"),
            Err(RuleError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_from_regex() {
        let pattern = Pattern::from_regex(Regex::new("^x+$").unwrap());
        assert_eq!(pattern.source(), "/^x+$/");
        assert_eq!(pattern, Pattern::parse_literal("/^x+$/").unwrap());
    }
}
