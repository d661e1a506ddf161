//! Named assertions and their predicates.
//!
//! Every assertion is a provided method on [`Assertions`], so composite
//! assertions call their building blocks through `self`: `between` is
//! `min` and `max`, `minlength` is `min` over a length, and `equalTo` asks
//! `number` whether two values compare numerically. An implementation only
//! has to supply the fixed-format patterns, and may override any predicate.

use crate::equality::deep_equal;
use crate::normalize::{
    coerce_text, compile_pattern, is_integer, is_numeric, length_of, numeric_value, same_value,
};
use crate::BuiltinPatterns;
use rules_core::text::{is_whitespace, trim};
use rules_core::{DataValue, Pattern, Result, RuleError};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

static NULL: DataValue = DataValue::Null;

static NAMES: LazyLock<HashMap<&'static str, Assertion>> = LazyLock::new(|| {
    Assertion::ALL
        .iter()
        .flat_map(|assertion| {
            std::iter::once(assertion.name())
                .chain(assertion.aliases().iter().copied())
                .map(move |name| (name, *assertion))
        })
        .collect()
});

/// A registered assertion kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assertion {
    Required,
    Number,
    Digits,
    Min,
    Max,
    Between,
    MinLength,
    MaxLength,
    LengthBetween,
    Tel,
    Email,
    Url,
    IdCard,
    Regular,
    EqualTo,
    Includes,
    In,
}

impl Assertion {
    /// Every assertion, in registry order.
    pub const ALL: [Assertion; 17] = [
        Assertion::Required,
        Assertion::Number,
        Assertion::Digits,
        Assertion::Min,
        Assertion::Max,
        Assertion::Between,
        Assertion::MinLength,
        Assertion::MaxLength,
        Assertion::LengthBetween,
        Assertion::Tel,
        Assertion::Email,
        Assertion::Url,
        Assertion::IdCard,
        Assertion::Regular,
        Assertion::EqualTo,
        Assertion::Includes,
        Assertion::In,
    ];

    /// Canonical name, as written in rules.
    pub fn name(self) -> &'static str {
        match self {
            Assertion::Required => "required",
            Assertion::Number => "number",
            Assertion::Digits => "digits",
            Assertion::Min => "min",
            Assertion::Max => "max",
            Assertion::Between => "between",
            Assertion::MinLength => "minlength",
            Assertion::MaxLength => "maxlength",
            Assertion::LengthBetween => "lengthBetween",
            Assertion::Tel => "tel",
            Assertion::Email => "email",
            Assertion::Url => "url",
            Assertion::IdCard => "idcard",
            Assertion::Regular => "regular",
            Assertion::EqualTo => "equalTo",
            Assertion::Includes => "includes",
            Assertion::In => "in",
        }
    }

    /// Alternative names resolving to this assertion.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Assertion::Tel => &["mobile", "phone"],
            Assertion::Email => &["mail"],
            Assertion::Url => &["URL"],
            Assertion::EqualTo => &["eq"],
            Assertion::LengthBetween => &["length"],
            Assertion::Min => &["gte"],
            Assertion::Max => &["lte"],
            _ => &[],
        }
    }

    /// Resolves a canonical name or alias.
    ///
    /// ```rust
    /// use rules_validator::Assertion;
    ///
    /// assert_eq!(Assertion::lookup("phone"), Some(Assertion::Tel));
    /// assert_eq!(Assertion::lookup("betweenLength"), None);
    /// ```
    pub fn lookup(name: &str) -> Option<Self> {
        NAMES.get(name).copied()
    }

    /// Returns true if the assertion reads the rule's expected value.
    pub fn takes_expected(self) -> bool {
        matches!(
            self,
            Assertion::Min
                | Assertion::Max
                | Assertion::Between
                | Assertion::MinLength
                | Assertion::MaxLength
                | Assertion::LengthBetween
                | Assertion::Regular
                | Assertion::EqualTo
                | Assertion::Includes
                | Assertion::In
        )
    }
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The predicate set evaluated by the rule engine.
///
/// Predicates with an expected parameter return `Err` when that parameter
/// is malformed; this is a defect in the rule, not a validation failure.
pub trait Assertions {
    /// Patterns behind `tel`, `email`, `url` and `idcard`.
    fn patterns(&self) -> &BuiltinPatterns;

    /// Fails for null and for strings with no visible character.
    /// `0` and `false` pass.
    fn required(&self, actual: &DataValue) -> bool {
        if actual.is_null() {
            return false;
        }
        actual
            .as_string()
            .is_none_or(|s| s.chars().any(|c| !is_whitespace(c)))
    }

    fn number(&self, actual: &DataValue) -> bool {
        is_numeric(actual)
    }

    fn digits(&self, actual: &DataValue) -> bool {
        is_integer(actual)
    }

    /// `actual >= expected`, both numeric.
    fn min(&self, actual: &DataValue, expected: &DataValue) -> Result<bool> {
        if !self.number(expected) {
            return Err(invalid(Assertion::Min, "a number", expected));
        }
        Ok(self.number(actual) && compare(actual, expected, |a, e| a >= e))
    }

    /// `actual <= expected`, both numeric.
    fn max(&self, actual: &DataValue, expected: &DataValue) -> Result<bool> {
        if !self.number(expected) {
            return Err(invalid(Assertion::Max, "a number", expected));
        }
        Ok(self.number(actual) && compare(actual, expected, |a, e| a <= e))
    }

    /// Inclusive range; the bounds may be given in either order.
    fn between(&self, actual: &DataValue, expected: &DataValue) -> Result<bool> {
        let (lower, upper) = bounds(
            Assertion::Between,
            "a number or a non-empty list of numbers",
            expected,
            |v| self.number(v),
        )?;
        Ok(self.min(actual, &DataValue::Float(lower))?
            && self.max(actual, &DataValue::Float(upper))?)
    }

    /// Item count of a list, or character count of a trimmed string, is at
    /// least `expected`. Other values fail.
    fn min_length(&self, actual: &DataValue, expected: &DataValue) -> Result<bool> {
        if !self.digits(expected) {
            return Err(invalid(Assertion::MinLength, "an integer", expected));
        }
        match length_of(actual) {
            Some(len) => self.min(&DataValue::Int(len as i64), expected),
            None => Ok(false),
        }
    }

    fn max_length(&self, actual: &DataValue, expected: &DataValue) -> Result<bool> {
        if !self.digits(expected) {
            return Err(invalid(Assertion::MaxLength, "an integer", expected));
        }
        match length_of(actual) {
            Some(len) => self.max(&DataValue::Int(len as i64), expected),
            None => Ok(false),
        }
    }

    fn length_between(&self, actual: &DataValue, expected: &DataValue) -> Result<bool> {
        let (lower, upper) = bounds(
            Assertion::LengthBetween,
            "an integer or a non-empty list of integers",
            expected,
            |v| self.digits(v),
        )?;
        Ok(self.min_length(actual, &DataValue::Float(lower))?
            && self.max_length(actual, &DataValue::Float(upper))?)
    }

    fn tel(&self, actual: &DataValue) -> bool {
        self.matches(actual, &self.patterns().tel)
    }

    fn email(&self, actual: &DataValue) -> bool {
        self.matches(actual, &self.patterns().email)
    }

    fn url(&self, actual: &DataValue) -> bool {
        self.matches(actual, &self.patterns().url)
    }

    fn idcard(&self, actual: &DataValue) -> bool {
        self.matches(actual, &self.patterns().idcard)
    }

    /// Pattern test. `expected` is a compiled pattern or a `/body/flags`
    /// string.
    fn regular(&self, actual: &DataValue, expected: &DataValue) -> Result<bool> {
        let pattern = compile_pattern(Assertion::Regular.name(), expected)?;
        Ok(self.matches(actual, &pattern))
    }

    /// Tests the textual reading of `actual` against a compiled pattern.
    fn matches(&self, actual: &DataValue, pattern: &Pattern) -> bool {
        coerce_text(actual).is_some_and(|text| pattern.is_match(&text))
    }

    fn equal_to(&self, actual: &DataValue, expected: &DataValue) -> bool {
        deep_equal(self, actual, expected)
    }

    /// List membership, or substring containment for strings. Strings are
    /// not trimmed.
    fn includes(&self, actual: &DataValue, expected: &DataValue) -> bool {
        match actual {
            DataValue::List(items) => items.iter().any(|item| same_value(item, expected)),
            DataValue::String(s) => coerce_text(expected).is_some_and(|t| s.contains(&*t)),
            _ => false,
        }
    }

    /// Reverse of `includes`: `actual`, trimmed if it is a string, must be
    /// an item of the expected list or a substring of the expected string.
    fn is_in(&self, actual: &DataValue, expected: &DataValue) -> Result<bool> {
        let actual = match actual {
            DataValue::String(s) => Cow::Owned(DataValue::String(trim(s).to_string())),
            other => Cow::Borrowed(other),
        };

        match expected {
            DataValue::List(items) => Ok(items.iter().any(|item| same_value(&actual, item))),
            DataValue::String(s) => {
                Ok(coerce_text(&actual).is_some_and(|t| s.contains(&*t)))
            }
            other => Err(invalid(Assertion::In, "a list or a string", other)),
        }
    }

    /// Runs `assertion`. A missing expected value is read as null.
    fn evaluate(
        &self,
        assertion: Assertion,
        actual: &DataValue,
        expected: Option<&DataValue>,
    ) -> Result<bool> {
        let expected = expected.unwrap_or(&NULL);

        match assertion {
            Assertion::Required => Ok(self.required(actual)),
            Assertion::Number => Ok(self.number(actual)),
            Assertion::Digits => Ok(self.digits(actual)),
            Assertion::Min => self.min(actual, expected),
            Assertion::Max => self.max(actual, expected),
            Assertion::Between => self.between(actual, expected),
            Assertion::MinLength => self.min_length(actual, expected),
            Assertion::MaxLength => self.max_length(actual, expected),
            Assertion::LengthBetween => self.length_between(actual, expected),
            Assertion::Tel => Ok(self.tel(actual)),
            Assertion::Email => Ok(self.email(actual)),
            Assertion::Url => Ok(self.url(actual)),
            Assertion::IdCard => Ok(self.idcard(actual)),
            Assertion::Regular => self.regular(actual, expected),
            Assertion::EqualTo => Ok(self.equal_to(actual, expected)),
            Assertion::Includes => Ok(self.includes(actual, expected)),
            Assertion::In => self.is_in(actual, expected),
        }
    }

    /// Checks a rule's expected value without any data.
    ///
    /// Returns the same error `evaluate` would raise for this expected
    /// value, whatever the actual value.
    fn check_expected(&self, assertion: Assertion, expected: Option<&DataValue>) -> Result<()> {
        let expected = expected.unwrap_or(&NULL);

        match assertion {
            Assertion::Min | Assertion::Max if !self.number(expected) => {
                Err(invalid(assertion, "a number", expected))
            }
            Assertion::MinLength | Assertion::MaxLength if !self.digits(expected) => {
                Err(invalid(assertion, "an integer", expected))
            }
            Assertion::Between => bounds(
                assertion,
                "a number or a non-empty list of numbers",
                expected,
                |v| self.number(v),
            )
            .map(drop),
            Assertion::LengthBetween => bounds(
                assertion,
                "an integer or a non-empty list of integers",
                expected,
                |v| self.digits(v),
            )
            .map(drop),
            Assertion::Regular => compile_pattern(assertion.name(), expected).map(drop),
            Assertion::In if !matches!(expected, DataValue::List(_) | DataValue::String(_)) => {
                Err(invalid(assertion, "a list or a string", expected))
            }
            _ => Ok(()),
        }
    }
}

fn invalid(assertion: Assertion, requirement: &str, found: &DataValue) -> RuleError {
    RuleError::invalid_expected(assertion.name(), requirement, found.type_name())
}

fn compare(actual: &DataValue, expected: &DataValue, op: impl Fn(f64, f64) -> bool) -> bool {
    match (numeric_value(actual), numeric_value(expected)) {
        (Some(a), Some(e)) => op(a, e),
        _ => false,
    }
}

/// Reads a single bound or a list of bounds as `(lower, upper)`.
fn bounds(
    assertion: Assertion,
    requirement: &str,
    expected: &DataValue,
    accepts: impl Fn(&DataValue) -> bool,
) -> Result<(f64, f64)> {
    if accepts(expected) {
        let value =
            numeric_value(expected).ok_or_else(|| invalid(assertion, requirement, expected))?;
        return Ok((value, value));
    }

    let items = expected
        .as_list()
        .filter(|items| !items.is_empty())
        .ok_or_else(|| invalid(assertion, requirement, expected))?;

    items
        .iter()
        .try_fold((f64::INFINITY, f64::NEG_INFINITY), |(lower, upper), item| {
            let value = if accepts(item) { numeric_value(item) } else { None };
            let value = value.ok_or_else(|| invalid(assertion, requirement, item))?;
            Ok::<_, RuleError>((lower.min(value), upper.max(value)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Registry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_aliases() {
        assert_eq!(Assertion::lookup("mobile"), Some(Assertion::Tel));
        assert_eq!(Assertion::lookup("mail"), Some(Assertion::Email));
        assert_eq!(Assertion::lookup("URL"), Some(Assertion::Url));
        assert_eq!(Assertion::lookup("eq"), Some(Assertion::EqualTo));
        assert_eq!(Assertion::lookup("length"), Some(Assertion::LengthBetween));
        assert_eq!(Assertion::lookup("gte"), Some(Assertion::Min));
        assert_eq!(Assertion::lookup("lte"), Some(Assertion::Max));
        assert_eq!(Assertion::lookup("Url"), None);
    }

    #[test]
    fn test_every_name_resolves_to_itself() {
        for assertion in Assertion::ALL {
            assert_eq!(Assertion::lookup(assertion.name()), Some(assertion));
        }
    }

    #[test]
    fn test_bounds_order_independent() {
        let a = bounds(Assertion::Between, "", &DataValue::from(vec![10, 0]), is_numeric).unwrap();
        let b = bounds(Assertion::Between, "", &DataValue::from(vec![0, 10]), is_numeric).unwrap();
        assert_eq!(a, (0.0, 10.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_bounds_rejects_empty_and_mixed() {
        assert!(bounds(Assertion::Between, "", &DataValue::List(vec![]), is_numeric).is_err());
        assert!(bounds(Assertion::Between, "", &DataValue::from(vec!["1", "x"]), is_numeric).is_err());
    }

    #[test]
    fn test_check_expected() {
        let registry = Registry::global();
        assert!(registry.check_expected(Assertion::Required, None).is_ok());
        assert!(registry.check_expected(Assertion::Min, Some(&DataValue::from("5"))).is_ok());
        assert!(registry.check_expected(Assertion::Min, None).is_err());
        assert!(registry.check_expected(Assertion::In, Some(&DataValue::Int(3))).is_err());
        assert!(
            registry
                .check_expected(Assertion::Regular, Some(&DataValue::from("/(/")))
                .is_err()
        );
    }
}
