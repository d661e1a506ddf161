//! Builder pattern for creating validation rules.
//!
//! This module provides ergonomic builders for constructing rules and rule
//! lists with a fluent API.

use crate::{DataValue, Rule};

/// Builder for creating a `Rule`.
///
/// # Example
///
/// ```rust
/// use rules_core::RuleBuilder;
///
/// let rule = RuleBuilder::new("age", "between")
///     .message("must be 0-120")
///     .expected(vec![0, 120])
///     .build();
///
/// assert_eq!(rule.field, "age");
/// ```
#[derive(Debug, Default)]
pub struct RuleBuilder {
    field: String,
    assertion: String,
    message: Option<String>,
    expected: Option<DataValue>,
}

impl RuleBuilder {
    /// Creates a new rule builder.
    ///
    /// # Arguments
    ///
    /// * `field` - Record field the rule inspects
    /// * `assertion` - Assertion name or alias
    pub fn new(field: impl Into<String>, assertion: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            assertion: assertion.into(),
            ..Default::default()
        }
    }

    /// Sets the failure message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the expected value.
    pub fn expected(mut self, expected: impl Into<DataValue>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Builds the rule.
    pub fn build(self) -> Rule {
        Rule {
            field: self.field,
            message: self.message.unwrap_or_default(),
            assertion: self.assertion,
            expected: self.expected,
        }
    }
}

/// Builder for several rules that target the same field.
///
/// Rules keep the order in which they are added, which matters for
/// first-failure evaluation.
///
/// # Example
///
/// ```rust
/// use rules_core::FieldRules;
///
/// let rules = FieldRules::new("code")
///     .assert("required", "code is required")
///     .assert_with("lengthBetween", vec![6, 6], "code has 6 digits")
///     .build();
///
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules[1].assertion, "lengthBetween");
/// ```
#[derive(Debug)]
pub struct FieldRules {
    field: String,
    rules: Vec<Rule>,
}

impl FieldRules {
    /// Creates a builder for rules on `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rules: Vec::new(),
        }
    }

    /// Adds a rule without an expected value.
    pub fn assert(mut self, assertion: impl Into<String>, message: impl Into<String>) -> Self {
        self.rules
            .push(Rule::new(self.field.clone(), assertion, message));
        self
    }

    /// Adds a rule with an expected value.
    pub fn assert_with(
        mut self,
        assertion: impl Into<String>,
        expected: impl Into<DataValue>,
        message: impl Into<String>,
    ) -> Self {
        self.rules.push(
            RuleBuilder::new(self.field.clone(), assertion)
                .message(message)
                .expected(expected)
                .build(),
        );
        self
    }

    /// Builds the rule list.
    pub fn build(self) -> Vec<Rule> {
        self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rule_builder_minimal() {
        let rule = RuleBuilder::new("phone", "required").build();

        assert_eq!(rule.field, "phone");
        assert_eq!(rule.assertion, "required");
        assert_eq!(rule.message, "");
        assert!(rule.expected.is_none());
    }

    #[test]
    fn test_rule_builder_full() {
        let rule = RuleBuilder::new("code", "regular")
            .message("code is invalid")
            .expected(r"/^\d{6}$/")
            .build();

        assert_eq!(rule.message, "code is invalid");
        assert_eq!(rule.expected, Some(DataValue::from(r"/^\d{6}$/")));
    }

    #[test]
    fn test_field_rules_keep_order() {
        let rules = FieldRules::new("phone")
            .assert("required", "phone is required")
            .assert_with("length", vec![11, 11], "phone has 11 digits")
            .assert("tel", "phone is invalid")
            .build();

        let names: Vec<&str> = rules.iter().map(|r| r.assertion.as_str()).collect();
        assert_eq!(names, vec!["required", "length", "tel"]);
        assert!(rules.iter().all(|r| r.field == "phone"));
    }
}
