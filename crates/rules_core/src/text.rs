//! Whitespace and character classes as rule authors write them.
//!
//! Rules are usually written for browser and Node.js validators, where
//! `\d`, `\w` and `\b` are ASCII-only and `\s` and `trim` use the
//! ECMAScript whitespace set. The `regex` crate's classes are Unicode-wide,
//! so pattern bodies are rewritten to the narrower classes before they are
//! compiled.

/// ECMAScript whitespace and line terminators, as regex class members.
const WHITESPACE_MEMBERS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

const DIGIT_MEMBERS: &str = "0-9";

const WORD_MEMBERS: &str = "0-9A-Za-z_";

/// Returns true for the characters `\s` matches in a rule pattern.
///
/// This differs from [`char::is_whitespace`]: U+FEFF counts, U+0085 does not.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strips leading and trailing [`is_whitespace`] characters.
///
/// ```rust
/// use rules_core::text::trim;
///
/// assert_eq!(trim("\u{FEFF} abc \t"), "abc");
/// assert_eq!(trim("\u{85}abc"), "\u{85}abc");
/// ```
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_whitespace)
}

/// Rewrites the shorthand classes of a pattern body to their ASCII (or
/// ECMAScript whitespace) equivalents.
///
/// Escaped backslashes and every other escape are kept as written.
pub(crate) fn narrow_classes(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let Some(escaped) = chars.next() else {
                    out.push('\\');
                    break;
                };
                out.push_str(&shorthand(escaped, in_class).unwrap_or_else(|| {
                    let mut kept = String::from('\\');
                    kept.push(escaped);
                    kept
                }));
            }
            '[' if !in_class => {
                in_class = true;
                out.push(c);
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out
}

fn shorthand(escaped: char, in_class: bool) -> Option<String> {
    let members = match escaped {
        'd' | 'D' => DIGIT_MEMBERS,
        'w' | 'W' => WORD_MEMBERS,
        's' | 'S' => WHITESPACE_MEMBERS,
        'b' if in_class => return Some(r"\x08".to_string()),
        'b' => return Some(r"(?-u:\b)".to_string()),
        'B' if !in_class => return Some(r"(?-u:\B)".to_string()),
        _ => return None,
    };

    Some(match (escaped.is_ascii_uppercase(), in_class) {
        (false, false) => format!("[{members}]"),
        (false, true) => members.to_string(),
        (true, _) => format!("[^{members}]"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_whitespace_set() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\u{3000}'));
        assert!(is_whitespace('\u{FEFF}'));
        assert!(!is_whitespace('\u{85}'));
        assert!(!is_whitespace('a'));
    }

    #[test]
    fn test_narrow_classes() {
        assert_eq!(narrow_classes(r"^\d{6}$"), r"^[0-9]{6}$");
        assert_eq!(narrow_classes(r"[\w.]+"), r"[0-9A-Za-z_.]+");
        assert_eq!(narrow_classes(r"\D"), r"[^0-9]");
        assert_eq!(narrow_classes(r"[\W]"), r"[[^0-9A-Za-z_]]");
        assert_eq!(narrow_classes(r"\bx\B"), r"(?-u:\b)x(?-u:\B)");
    }

    #[test]
    fn test_other_escapes_kept() {
        assert_eq!(narrow_classes(r"\\d\.\/"), r"\\d\.\/");
        assert_eq!(narrow_classes(r"a\"), r"a\");
        assert_eq!(narrow_classes(r"\p{Greek}"), r"\p{Greek}");
    }
}
