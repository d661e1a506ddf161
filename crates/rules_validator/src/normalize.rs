//! Value normalizers shared by the assertions.
//!
//! Numeric and integer recognition follow a strict grammar: an optional
//! sign, no leading zero unless the integer part is exactly `0`, and a
//! fractional part that must end in a non-zero digit. Surrounding whitespace
//! is tolerated. `"1.10"` is therefore not a number while `"1.1"` is.

use rules_core::text::trim;
use rules_core::{DataValue, Pattern, Result, RuleError};
use std::borrow::Cow;
use std::sync::LazyLock;

static NUMBER: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(r"^\s*[+\-]?(?:[1-9][0-9]*|0)(?:\.[0-9]*[1-9])?\s*$", "")
        .expect("valid number grammar")
});

static DIGITS: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(r"^\s*[+\-]?(?:[1-9][0-9]*|0)\s*$", "").expect("valid digits grammar")
});

/// Returns true for finite numbers and strings in numeric form.
pub fn is_numeric(value: &DataValue) -> bool {
    match value {
        DataValue::Int(_) => true,
        DataValue::Float(f) => f.is_finite(),
        DataValue::String(s) => NUMBER.is_match(s),
        _ => false,
    }
}

/// Returns true for integral numbers and strings in integer form.
pub fn is_integer(value: &DataValue) -> bool {
    match value {
        DataValue::Int(_) => true,
        DataValue::Float(f) => f.is_finite() && f.fract() == 0.0,
        DataValue::String(s) => DIGITS.is_match(s),
        _ => false,
    }
}

/// Reads a value that passes [`is_numeric`] as a float.
pub fn numeric_value(value: &DataValue) -> Option<f64> {
    match value {
        DataValue::Int(i) => Some(*i as f64),
        DataValue::Float(f) if f.is_finite() => Some(*f),
        DataValue::String(s) if NUMBER.is_match(s) => trim(s).parse().ok(),
        _ => None,
    }
}

/// Textual reading of a scalar, as used by pattern and substring tests.
///
/// Lists, maps and patterns have no textual reading.
pub fn coerce_text(value: &DataValue) -> Option<Cow<'_, str>> {
    match value {
        DataValue::String(s) => Some(Cow::Borrowed(s)),
        DataValue::Int(i) => Some(Cow::Owned(i.to_string())),
        DataValue::Float(f) if f.is_infinite() => Some(Cow::Borrowed(if *f > 0.0 {
            "Infinity"
        } else {
            "-Infinity"
        })),
        DataValue::Float(f) => Some(Cow::Owned(float_text(*f))),
        DataValue::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        DataValue::Null => Some(Cow::Borrowed("null")),
        DataValue::List(_) | DataValue::Map(_) | DataValue::Pattern(_) => None,
    }
}

/// Number-to-text the way rule authors' tooling prints numbers: shortest
/// round-trip digits, in exponent form (`1e+21`, `1e-7`) outside
/// `1e-6 <= |f| < 1e21`.
fn float_text(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }

    let sign = if f < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", f.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let n = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat(-n as usize))
    } else {
        let e = n - 1;
        let e_sign = if e < 0 { '-' } else { '+' };
        match digits.split_at(1) {
            (head, "") => format!("{head}e{e_sign}{}", e.abs()),
            (head, tail) => format!("{head}.{tail}e{e_sign}{}", e.abs()),
        }
    };

    format!("{sign}{body}")
}

/// Length of a sequence, or character count of a trimmed string.
pub fn length_of(value: &DataValue) -> Option<usize> {
    match value {
        DataValue::List(items) => Some(items.len()),
        DataValue::String(s) => Some(trim(s).chars().count()),
        _ => None,
    }
}

/// Turns a `regular` expected value into a compiled pattern.
///
/// Compiled patterns are used as they are; strings are parsed as
/// `/body/flags` literals.
pub fn compile_pattern<'a>(assertion: &str, expected: &'a DataValue) -> Result<Cow<'a, Pattern>> {
    match expected {
        DataValue::Pattern(pattern) => Ok(Cow::Borrowed(pattern)),
        DataValue::String(literal) => Pattern::parse_literal(literal).map(Cow::Owned),
        other => Err(RuleError::invalid_expected(
            assertion,
            "a pattern or a '/body/flags' string",
            other.type_name(),
        )),
    }
}

/// Membership equality: numbers by value, everything else structurally.
pub fn same_value(a: &DataValue, b: &DataValue) -> bool {
    match (a.as_float(), b.as_float()) {
        (Some(x), Some(y)) => x == y || (x.is_nan() && y.is_nan()),
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_numeric_grammar() {
        for ok in ["-9", "-0.03", "+10.01201", "0", "  42  ", "3.5"] {
            assert!(is_numeric(&DataValue::from(ok)), "{ok:?} should be numeric");
        }
        for bad in ["09", "-.9", ".91", "1.10", "", "1e3", "abc", "1.", "- 1"] {
            assert!(!is_numeric(&DataValue::from(bad)), "{bad:?} should not be numeric");
        }
    }

    #[test]
    fn test_numeric_types() {
        assert!(is_numeric(&DataValue::Int(-3)));
        assert!(is_numeric(&DataValue::Float(0.5)));
        assert!(!is_numeric(&DataValue::Float(f64::NAN)));
        assert!(!is_numeric(&DataValue::Bool(true)));
        assert!(!is_numeric(&DataValue::Null));
    }

    #[test]
    fn test_integer_grammar() {
        assert!(is_integer(&DataValue::from(" -12 ")));
        assert!(is_integer(&DataValue::Int(7)));
        assert!(is_integer(&DataValue::Float(6.0)));
        assert!(!is_integer(&DataValue::Float(6.5)));
        assert!(!is_integer(&DataValue::from("1.5")));
        assert!(!is_integer(&DataValue::from("007")));
    }

    #[test]
    fn test_numeric_value() {
        assert_eq!(numeric_value(&DataValue::from(" +10.5 ")), Some(10.5));
        assert_eq!(numeric_value(&DataValue::Int(3)), Some(3.0));
        assert_eq!(numeric_value(&DataValue::from("1.10")), None);
    }

    #[test]
    fn test_coerce_text() {
        assert_eq!(coerce_text(&DataValue::Int(12)).as_deref(), Some("12"));
        assert_eq!(coerce_text(&DataValue::Float(1.5)).as_deref(), Some("1.5"));
        assert_eq!(coerce_text(&DataValue::Float(2.0)).as_deref(), Some("2"));
        assert_eq!(coerce_text(&DataValue::Bool(false)).as_deref(), Some("false"));
        assert_eq!(coerce_text(&DataValue::Null).as_deref(), Some("null"));
        assert_eq!(coerce_text(&DataValue::from(vec![1])), None);
    }

    #[test]
    fn test_float_text_exponent_thresholds() {
        let text = |f: f64| coerce_text(&DataValue::Float(f)).map(|t| t.into_owned());

        assert_eq!(text(123.456).as_deref(), Some("123.456"));
        assert_eq!(text(1e20).as_deref(), Some("100000000000000000000"));
        assert_eq!(text(1e21).as_deref(), Some("1e+21"));
        assert_eq!(text(1.5e300).as_deref(), Some("1.5e+300"));
        assert_eq!(text(0.000001).as_deref(), Some("0.000001"));
        assert_eq!(text(1e-7).as_deref(), Some("1e-7"));
        assert_eq!(text(-2.5e-9).as_deref(), Some("-2.5e-9"));
        assert_eq!(text(-0.0).as_deref(), Some("0"));
        assert_eq!(text(f64::NEG_INFINITY).as_deref(), Some("-Infinity"));
    }

    #[test]
    fn test_whitespace_follows_rule_authors_set() {
        assert!(is_numeric(&DataValue::from("\u{FEFF}42\u{3000}")));
        assert!(!is_numeric(&DataValue::from("\u{85}42")));
        assert_eq!(length_of(&DataValue::from("\u{FEFF}ab\u{85}")), Some(3));
    }

    #[test]
    fn test_length_of() {
        assert_eq!(length_of(&DataValue::from("  Hel  ")), Some(3));
        assert_eq!(length_of(&DataValue::from(vec![1, 2, 3])), Some(3));
        assert_eq!(length_of(&DataValue::Int(123)), None);
    }

    #[test]
    fn test_compile_pattern() {
        let expected = DataValue::from(r"/^\d+$/");
        assert!(compile_pattern("regular", &expected).unwrap().is_match("123"));

        let err = compile_pattern("regular", &DataValue::Int(1)).unwrap_err();
        assert!(matches!(err, RuleError::InvalidExpected { .. }));
    }

    #[test]
    fn test_same_value() {
        assert!(same_value(&DataValue::Int(1), &DataValue::Float(1.0)));
        assert!(same_value(&DataValue::Float(f64::NAN), &DataValue::Float(f64::NAN)));
        assert!(!same_value(&DataValue::Int(1), &DataValue::from("1")));
        assert!(same_value(&DataValue::from(vec!["a"]), &DataValue::from(vec!["a"])));
    }
}
