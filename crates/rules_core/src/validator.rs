//! Validation traits and types for rule evaluation.
//!
//! This module defines the evaluation options, the result shapes, and the
//! trait implemented by rule evaluators.

use crate::{Record, Result, Rule};
use std::collections::BTreeMap;

/// Failing field name to failure message.
pub type FieldErrors = BTreeMap<String, String>;

/// How many failures an evaluation reports.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationMode {
    /// Report only the first failing rule in list order
    #[default]
    FirstFailure,
    /// Report one message per failing field
    AllFailures,
}

/// What to do with a rule whose assertion name is not registered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum UnknownAssertionPolicy {
    /// Log a warning and treat the rule as passing
    #[default]
    Skip,
    /// Fail the whole evaluation with a configuration error
    Reject,
}

/// Options for a validation run.
#[derive(Debug, Default, Clone)]
pub struct ValidationContext {
    /// Which failures are reported
    pub mode: EvaluationMode,

    /// Handling of unregistered assertion names
    pub unknown_assertions: UnknownAssertionPolicy,
}

impl ValidationContext {
    /// Creates a new validation context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the evaluation mode.
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Switches between first-failure and all-failures evaluation.
    pub fn with_all_failures(self, all: bool) -> Self {
        self.with_mode(if all {
            EvaluationMode::AllFailures
        } else {
            EvaluationMode::FirstFailure
        })
    }

    /// Sets the unknown assertion policy.
    pub fn with_unknown_assertions(mut self, policy: UnknownAssertionPolicy) -> Self {
        self.unknown_assertions = policy;
        self
    }
}

/// Result of evaluating a rule list against a record.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// Every applicable rule held
    Passed,
    /// Message of the first failing rule (first-failure mode)
    Failed(String),
    /// Message per failing field (all-failures mode)
    FieldErrors(FieldErrors),
}

impl ValidationOutcome {
    /// Returns true if no rule failed.
    pub fn passed(&self) -> bool {
        matches!(self, ValidationOutcome::Passed)
    }

    /// Returns the single failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Returns the per-field failures, if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationOutcome::FieldErrors(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Core trait for evaluating rule lists against records.
///
/// # Example
///
/// ```rust
/// use rules_core::{Record, Rule, RuleValidator, Result, ValidationContext, ValidationOutcome};
///
/// struct PassEverything;
///
/// impl RuleValidator for PassEverything {
///     fn validate_with(
///         &self,
///         _record: &Record,
///         _rules: &[Rule],
///         _context: &ValidationContext,
///     ) -> Result<ValidationOutcome> {
///         Ok(ValidationOutcome::Passed)
///     }
/// }
///
/// assert_eq!(PassEverything.validate(&Record::new(), &[]).unwrap(), None);
/// ```
pub trait RuleValidator {
    /// Evaluates `rules` against `record` using the given options.
    ///
    /// Returns `Err` only for configuration errors; failing values are
    /// reported in the outcome.
    fn validate_with(
        &self,
        record: &Record,
        rules: &[Rule],
        context: &ValidationContext,
    ) -> Result<ValidationOutcome>;

    /// Returns the message of the first failing rule, or `None`.
    fn validate(&self, record: &Record, rules: &[Rule]) -> Result<Option<String>> {
        let outcome = self.validate_with(record, rules, &ValidationContext::new())?;
        Ok(outcome.message().map(str::to_string))
    }

    /// Returns one message per failing field; empty when every rule held.
    fn validate_all(&self, record: &Record, rules: &[Rule]) -> Result<FieldErrors> {
        let context = ValidationContext::new().with_all_failures(true);
        match self.validate_with(record, rules, &context)? {
            ValidationOutcome::FieldErrors(errors) => Ok(errors),
            _ => Ok(FieldErrors::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults() {
        let context = ValidationContext::new();
        assert_eq!(context.mode, EvaluationMode::FirstFailure);
        assert_eq!(context.unknown_assertions, UnknownAssertionPolicy::Skip);
    }

    #[test]
    fn test_context_builders() {
        let context = ValidationContext::new()
            .with_all_failures(true)
            .with_unknown_assertions(UnknownAssertionPolicy::Reject);
        assert_eq!(context.mode, EvaluationMode::AllFailures);
        assert_eq!(context.unknown_assertions, UnknownAssertionPolicy::Reject);
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(ValidationOutcome::Passed.passed());

        let failed = ValidationOutcome::Failed("bad".into());
        assert!(!failed.passed());
        assert_eq!(failed.message(), Some("bad"));
        assert!(failed.field_errors().is_none());
    }
}
