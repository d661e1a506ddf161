//! Validation rule types.
//!
//! A rule names one field of a record, the assertion that field must
//! satisfy, an optional expected parameter for that assertion, and the
//! message reported when it does not hold.

use crate::{DataValue, RuleError};
use serde::{Deserialize, Serialize};

/// A single validation rule.
///
/// Rules are plain data and can be deserialized from any serde format.
/// Several key spellings are accepted on input:
///
/// | Canonical | Also accepted |
/// |---|---|
/// | `field` | `property`, `prop`, `key` |
/// | `message` | `msg` |
/// | `assert` | `assertion`, `assertionName` |
///
/// When more than one spelling is present, the first non-empty one in the
/// order above wins.
///
/// # Example
///
/// ```rust
/// use rules_core::Rule;
///
/// let rule: Rule = serde_json::from_str(
///     r#"{ "prop": "age", "msg": "must be 0-120", "assert": "between", "expected": [0, 120] }"#,
/// ).unwrap();
///
/// assert_eq!(rule.field, "age");
/// assert_eq!(rule.message, "must be 0-120");
/// assert_eq!(rule.assertion, "between");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRule")]
pub struct Rule {
    /// Name of the record field this rule inspects
    pub field: String,

    /// Message reported when the rule fails
    pub message: String,

    /// Assertion name, possibly an alias
    #[serde(rename = "assert")]
    pub assertion: String,

    /// Parameter handed to the assertion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<DataValue>,
}

impl Rule {
    /// Creates a rule without an expected value.
    pub fn new(
        field: impl Into<String>,
        assertion: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            assertion: assertion.into(),
            expected: None,
        }
    }

    /// Returns the rule with `expected` set.
    pub fn with_expected(mut self, expected: impl Into<DataValue>) -> Self {
        self.expected = Some(expected.into());
        self
    }
}

/// Wire form of a rule, before alias resolution.
#[derive(Debug, Deserialize)]
struct RawRule {
    field: Option<String>,
    property: Option<String>,
    prop: Option<String>,
    key: Option<String>,
    message: Option<String>,
    msg: Option<String>,
    assert: Option<String>,
    assertion: Option<String>,
    #[serde(rename = "assertionName")]
    assertion_name: Option<String>,
    expected: Option<DataValue>,
}

fn first_present(candidates: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

impl TryFrom<RawRule> for Rule {
    type Error = RuleError;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        let field = first_present([raw.field, raw.property, raw.prop, raw.key])
            .ok_or_else(|| RuleError::IncompleteRule("rule has no field name".to_string()))?;

        let assertion = first_present([raw.assert, raw.assertion, raw.assertion_name])
            .ok_or_else(|| {
                RuleError::IncompleteRule(format!("rule for field '{field}' has no assertion"))
            })?;

        let message = first_present([raw.message, raw.msg]).unwrap_or_default();

        Ok(Self {
            field,
            message,
            assertion,
            expected: raw.expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_canonical_keys() {
        let rule: Rule = serde_json::from_str(
            r#"{ "field": "phone", "message": "invalid phone", "assert": "tel" }"#,
        )
        .unwrap();

        assert_eq!(rule, Rule::new("phone", "tel", "invalid phone"));
    }

    #[test]
    fn test_alias_priority() {
        let rule: Rule = serde_json::from_str(
            r#"{ "key": "c", "prop": "b", "property": "a", "msg": "m", "assertionName": "required" }"#,
        )
        .unwrap();

        assert_eq!(rule.field, "a");
        assert_eq!(rule.message, "m");
        assert_eq!(rule.assertion, "required");
    }

    #[test]
    fn test_empty_alias_falls_through() {
        let rule: Rule =
            serde_json::from_str(r#"{ "property": "", "prop": "code", "assert": "digits" }"#)
                .unwrap();
        assert_eq!(rule.field, "code");
        assert_eq!(rule.message, "");
    }

    #[test]
    fn test_missing_field_rejected() {
        let result: Result<Rule, _> =
            serde_json::from_str(r#"{ "message": "oops", "assert": "required" }"#);
        assert!(result.is_err());

        let result: Result<Rule, _> = serde_json::from_str(r#"{ "field": "x" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_expected_value() {
        let rule: Rule = serde_json::from_str(
            r#"{ "field": "age", "assert": "between", "expected": [0, 120] }"#,
        )
        .unwrap();
        assert_eq!(rule.expected, Some(DataValue::from(vec![0, 120])));
    }

    #[test]
    fn test_serialize_canonical() {
        let rule = Rule::new("code", "regular", "bad code").with_expected(r"/^\d{6}$/");
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "field": "code",
                "message": "bad code",
                "assert": "regular",
                "expected": r"/^\d{6}$/",
            })
        );

        let back: Rule = serde_json::from_value(json).unwrap();
        assert_eq!(back, rule);
    }
}
