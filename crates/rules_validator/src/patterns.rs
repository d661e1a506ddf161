//! Fixed patterns behind the `tel`, `email`, `url` and `idcard` assertions.
//!
//! The defaults recognise mainland-China mobile numbers and resident
//! identity card numbers. Every pattern tolerates whitespace around the
//! subject string.

use rules_core::Pattern;
use std::sync::LazyLock;

const TEL: &str = r"^\s*(?:13[0-9]|14[579]|15[0-3,5-9]|16[6]|17[0135678]|18[0-9]|19[89])[0-9]{8}\s*$";

const EMAIL: &str = r"^\s*[A-Za-z0-9_.\-]+@[A-Za-z0-9_.\-]+\.[A-Za-z]{2,4}\s*$";

const URL: &str = r"^\s*(?:(?:ht|f)tps?)://[A-Za-z0-9_\-]+(?:\.[A-Za-z0-9_\-]+)+(?:[A-Za-z0-9_\-.,@?^=%&:/~+#]*[A-Za-z0-9_\-@?^=%&/~+#])?\s*$";

const IDCARD: &str = concat!(
    r"(^\s*[1-9][0-9]{5}(?:18|19|[23][0-9])[0-9]{2}(?:0[1-9]|10|11|12)(?:[0-2][1-9]|10|20|30|31)[0-9]{3}[0-9Xx]\s*$)",
    "|",
    r"(^\s*[1-9][0-9]{5}[0-9]{2}(?:0[1-9]|10|11|12)(?:[0-2][1-9]|10|20|30|31)[0-9]{3}\s*$)",
);

static DEFAULTS: LazyLock<BuiltinPatterns> = LazyLock::new(|| BuiltinPatterns {
    tel: compile(TEL),
    email: compile(EMAIL),
    url: compile(URL),
    idcard: compile(IDCARD),
});

fn compile(source: &str) -> Pattern {
    Pattern::new(source, "").expect("built-in pattern compiles")
}

/// The patterns used by the fixed-format assertions.
///
/// Swap individual patterns to validate other regional formats:
///
/// ```rust
/// use regex::Regex;
/// use rules_core::Pattern;
/// use rules_validator::BuiltinPatterns;
///
/// let patterns = BuiltinPatterns::default()
///     .with_tel(Pattern::from_regex(Regex::new(r"^\s*\+44[0-9]{10}\s*$").unwrap()));
/// assert!(patterns.tel.is_match("+447911123456"));
/// ```
#[derive(Debug, Clone)]
pub struct BuiltinPatterns {
    /// Mobile phone numbers
    pub tel: Pattern,
    /// Email addresses
    pub email: Pattern,
    /// http(s) and ftp(s) URLs
    pub url: Pattern,
    /// Identity card numbers
    pub idcard: Pattern,
}

impl BuiltinPatterns {
    /// Replaces the phone number pattern.
    pub fn with_tel(mut self, pattern: Pattern) -> Self {
        self.tel = pattern;
        self
    }

    /// Replaces the email pattern.
    pub fn with_email(mut self, pattern: Pattern) -> Self {
        self.email = pattern;
        self
    }

    /// Replaces the URL pattern.
    pub fn with_url(mut self, pattern: Pattern) -> Self {
        self.url = pattern;
        self
    }

    /// Replaces the identity card pattern.
    pub fn with_idcard(mut self, pattern: Pattern) -> Self {
        self.idcard = pattern;
        self
    }
}

impl Default for BuiltinPatterns {
    fn default() -> Self {
        DEFAULTS.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel() {
        let patterns = BuiltinPatterns::default();
        assert!(patterns.tel.is_match("13800138000"));
        assert!(patterns.tel.is_match("  18912345678 "));
        assert!(!patterns.tel.is_match("12800138000"));
        assert!(!patterns.tel.is_match("1380013800"));
        assert!(patterns.tel.is_match("\u{3000}13800138000\u{FEFF}"));
        assert!(!patterns.tel.is_match("\u{85}13800138000"));
    }

    #[test]
    fn test_email() {
        let patterns = BuiltinPatterns::default();
        assert!(patterns.email.is_match("someone@example.com"));
        assert!(patterns.email.is_match(" a.b-c@mail.example.org "));
        assert!(!patterns.email.is_match("someone@example"));
        assert!(!patterns.email.is_match("someone.example.com"));
    }

    #[test]
    fn test_url() {
        let patterns = BuiltinPatterns::default();
        assert!(patterns.url.is_match("https://example.com/path?q=1"));
        assert!(patterns.url.is_match("ftp://files.example.org"));
        assert!(!patterns.url.is_match("example.com"));
        assert!(!patterns.url.is_match("https://localhost"));
    }

    #[test]
    fn test_idcard() {
        let patterns = BuiltinPatterns::default();
        assert!(patterns.idcard.is_match("11010519491231002X"));
        assert!(patterns.idcard.is_match("110105491231002"));
        assert!(!patterns.idcard.is_match("01010519491231002X"));
        assert!(!patterns.idcard.is_match("11010519491331002X"));
    }
}
