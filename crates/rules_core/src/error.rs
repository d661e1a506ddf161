//! Error types for validation rules.
//!
//! Every error in this module describes a defect in the rule definition
//! itself (or in the shape of the input handed to the engine), never a
//! value that merely fails validation. Failing values are reported through
//! rule messages instead.

use thiserror::Error;

/// Result type for rule operations.
pub type Result<T> = std::result::Result<T, RuleError>;

/// Configuration errors raised while evaluating or preparing rules.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleError {
    /// The rule's expected value has the wrong shape for its assertion
    #[error("{assertion}() expected value must be {requirement}, found {found}")]
    InvalidExpected {
        /// Canonical assertion name
        assertion: String,
        /// What the assertion accepts
        requirement: String,
        /// Type name of the value that was supplied
        found: String,
    },

    /// A pattern literal could not be turned into a regular expression
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as written in the rule
        pattern: String,
        /// Why it was rejected
        reason: String,
    },

    /// The rule names an assertion the registry does not know
    #[error("Unknown assertion '{assertion}' for field '{field}'")]
    UnknownAssertion {
        /// Field the rule targets
        field: String,
        /// Assertion name as written in the rule
        assertion: String,
    },

    /// The value handed in as a record is not a mapping
    #[error("Record must be a mapping, found {found}")]
    InvalidRecord {
        /// Type name of the value that was supplied
        found: String,
    },

    /// A rule is missing one of its mandatory keys
    #[error("Incomplete rule: {0}")]
    IncompleteRule(String),
}

impl RuleError {
    /// Creates a new invalid expected value error.
    pub fn invalid_expected(
        assertion: impl Into<String>,
        requirement: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::InvalidExpected {
            assertion: assertion.into(),
            requirement: requirement.into(),
            found: found.into(),
        }
    }

    /// Creates a new invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new unknown assertion error.
    pub fn unknown_assertion(field: impl Into<String>, assertion: impl Into<String>) -> Self {
        Self::UnknownAssertion {
            field: field.into(),
            assertion: assertion.into(),
        }
    }

    /// Creates a new invalid record error.
    pub fn invalid_record(found: impl Into<String>) -> Self {
        Self::InvalidRecord {
            found: found.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_messages() {
        let err = RuleError::invalid_expected("min", "a number", "boolean");
        assert_eq!(
            err.to_string(),
            "min() expected value must be a number, found boolean"
        );

        let err = RuleError::unknown_assertion("phone", "telephone");
        assert_eq!(
            err.to_string(),
            "Unknown assertion 'telephone' for field 'phone'"
        );
    }
}
