//! Main rule evaluation engine.
//!
//! This module provides the `Validator` that walks a rule list in order,
//! resolves each rule's assertion, and collects failures according to the
//! evaluation mode.

use crate::{Assertion, Assertions, Registry};
use rules_core::{
    DataValue, EvaluationMode, FieldErrors, Pattern, Record, Result, Rule, RuleError,
    RuleValidator, UnknownAssertionPolicy, ValidationContext, ValidationOutcome,
};
use std::sync::LazyLock;
use tracing::{debug, trace, warn};

static DEFAULT_VALIDATOR: LazyLock<Validator> = LazyLock::new(Validator::new);

/// Rule evaluation engine.
///
/// Evaluation is synchronous and has no side effects beyond logging, so a
/// validator can be shared between threads and called concurrently.
///
/// # Example
///
/// ```rust
/// use rules_core::{DataValue, Record, Rule, RuleValidator};
/// use rules_validator::Validator;
///
/// let mut record = Record::new();
/// record.insert("age".to_string(), DataValue::Int(150));
///
/// let rules = vec![
///     Rule::new("age", "required", "age is required"),
///     Rule::new("age", "between", "must be 0-120").with_expected(vec![0, 120]),
/// ];
///
/// let validator = Validator::new();
/// let message = validator.validate(&record, &rules).unwrap();
/// assert_eq!(message.as_deref(), Some("must be 0-120"));
/// ```
#[derive(Debug, Clone)]
pub struct Validator<A = Registry> {
    assertions: A,
}

impl Validator<Registry> {
    /// Creates a validator backed by the default registry.
    pub fn new() -> Self {
        Self {
            assertions: Registry::global().clone(),
        }
    }
}

impl Default for Validator<Registry> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Assertions> Validator<A> {
    /// Creates a validator backed by a custom assertion set.
    pub fn with_assertions(assertions: A) -> Self {
        Self { assertions }
    }

    /// Returns the assertion set in use.
    pub fn assertions(&self) -> &A {
        &self.assertions
    }

    /// Validates a record given as an arbitrary value.
    ///
    /// Anything other than a map is a configuration error.
    pub fn validate_value(
        &self,
        record: &DataValue,
        rules: &[Rule],
        context: &ValidationContext,
    ) -> Result<ValidationOutcome> {
        match record {
            DataValue::Map(record) => self.validate_with(record, rules, context),
            other => Err(RuleError::invalid_record(other.type_name())),
        }
    }

    /// Reports every configuration defect in `rules` without evaluating
    /// them against data.
    ///
    /// Each entry carries the index of the offending rule.
    pub fn lint(&self, rules: &[Rule]) -> Vec<(usize, RuleError)> {
        rules
            .iter()
            .enumerate()
            .filter_map(|(index, rule)| {
                let checked = match Assertion::lookup(&rule.assertion) {
                    Some(assertion) => self
                        .assertions
                        .check_expected(assertion, rule.expected.as_ref()),
                    None => Err(RuleError::unknown_assertion(&rule.field, &rule.assertion)),
                };
                checked.err().map(|err| (index, err))
            })
            .collect()
    }

    /// Checks `rules` and pre-compiles string-encoded patterns.
    ///
    /// The returned rules evaluate exactly like the input, but `regular`
    /// rules no longer parse their pattern on every call. Unknown assertion
    /// names follow the context's policy.
    pub fn prepare(&self, rules: &[Rule], context: &ValidationContext) -> Result<Vec<Rule>> {
        let mut prepared = Vec::with_capacity(rules.len());

        for rule in rules {
            let Some(assertion) = self.resolve(rule, context)? else {
                prepared.push(rule.clone());
                continue;
            };

            self.assertions
                .check_expected(assertion, rule.expected.as_ref())?;

            let compiled = match (assertion, &rule.expected) {
                (Assertion::Regular, Some(DataValue::String(literal))) => {
                    debug!("Pre-compiling pattern {} for field '{}'", literal, rule.field);
                    Some(Pattern::parse_literal(literal)?)
                }
                _ => None,
            };

            let mut rule = rule.clone();
            if let Some(pattern) = compiled {
                rule.expected = Some(DataValue::Pattern(pattern));
            }
            prepared.push(rule);
        }

        Ok(prepared)
    }

    /// Resolves a rule's assertion name, applying the unknown name policy.
    fn resolve(&self, rule: &Rule, context: &ValidationContext) -> Result<Option<Assertion>> {
        match Assertion::lookup(&rule.assertion) {
            Some(assertion) => Ok(Some(assertion)),
            None => match context.unknown_assertions {
                UnknownAssertionPolicy::Skip => {
                    warn!(
                        "Unsupported assertion '{}' for field '{}', rule skipped",
                        rule.assertion, rule.field
                    );
                    Ok(None)
                }
                UnknownAssertionPolicy::Reject => Err(RuleError::unknown_assertion(
                    &rule.field,
                    &rule.assertion,
                )),
            },
        }
    }
}

impl<A: Assertions> RuleValidator for Validator<A> {
    fn validate_with(
        &self,
        record: &Record,
        rules: &[Rule],
        context: &ValidationContext,
    ) -> Result<ValidationOutcome> {
        let mut errors = FieldErrors::new();

        for rule in rules {
            let Some(assertion) = self.resolve(rule, context)? else {
                continue;
            };

            // Absent fields are skipped; present nulls are evaluated
            let Some(actual) = record.get(&rule.field) else {
                trace!("Field '{}' not in record, skipping {}", rule.field, assertion);
                continue;
            };

            if self
                .assertions
                .evaluate(assertion, actual, rule.expected.as_ref())?
            {
                continue;
            }

            debug!("Field '{}' failed {}: {}", rule.field, assertion, rule.message);

            match context.mode {
                EvaluationMode::FirstFailure => {
                    return Ok(ValidationOutcome::Failed(rule.message.clone()));
                }
                EvaluationMode::AllFailures => {
                    errors.insert(rule.field.clone(), rule.message.clone());
                }
            }
        }

        if errors.is_empty() {
            Ok(ValidationOutcome::Passed)
        } else {
            Ok(ValidationOutcome::FieldErrors(errors))
        }
    }
}

/// Returns the message of the first failing rule, using the default registry.
///
/// # Example
///
/// ```rust
/// use rules_core::{DataValue, Record, Rule};
///
/// let mut record = Record::new();
/// record.insert("phone".to_string(), DataValue::from("   "));
///
/// let rules = vec![Rule::new("phone", "required", "phone is required")];
/// assert_eq!(
///     rules_validator::validate(&record, &rules).unwrap().as_deref(),
///     Some("phone is required"),
/// );
/// ```
pub fn validate(record: &Record, rules: &[Rule]) -> Result<Option<String>> {
    DEFAULT_VALIDATOR.validate(record, rules)
}

/// Returns one message per failing field, using the default registry.
///
/// When several rules on the same field fail, the last one in list order
/// provides the message.
pub fn validate_all(record: &Record, rules: &[Rule]) -> Result<FieldErrors> {
    DEFAULT_VALIDATOR.validate_all(record, rules)
}
