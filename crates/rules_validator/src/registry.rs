//! The concrete assertion registry.

use crate::{Assertion, Assertions, BuiltinPatterns};
use rules_core::{DataValue, Result};
use std::sync::LazyLock;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::default);

/// The default [`Assertions`] implementation.
///
/// A registry is immutable once built and can be shared freely between
/// threads. [`Registry::global`] returns a process-wide instance with the
/// default patterns.
///
/// # Example
///
/// ```rust
/// use rules_core::DataValue;
/// use rules_validator::{Assertions, Registry};
///
/// let registry = Registry::global();
/// assert!(registry.required(&DataValue::Int(0)));
/// assert!(registry.between(&DataValue::from("5"), &DataValue::from(vec![10, 0])).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    patterns: BuiltinPatterns,
}

impl Registry {
    /// Creates a registry with the default patterns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with custom fixed-format patterns.
    pub fn with_patterns(patterns: BuiltinPatterns) -> Self {
        Self { patterns }
    }

    /// Returns the shared process-wide registry.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Runs an assertion by name.
    ///
    /// Returns `Ok(None)` when no assertion is registered under `name`.
    pub fn check(
        &self,
        name: &str,
        actual: &DataValue,
        expected: Option<&DataValue>,
    ) -> Result<Option<bool>> {
        match Assertion::lookup(name) {
            Some(assertion) => self.evaluate(assertion, actual, expected).map(Some),
            None => Ok(None),
        }
    }
}

impl Assertions for Registry {
    fn patterns(&self) -> &BuiltinPatterns {
        &self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regex::Regex;
    use rules_core::Pattern;

    #[test]
    fn test_check_by_alias() {
        let registry = Registry::new();
        let phone = DataValue::from("13800138000");

        assert_eq!(registry.check("mobile", &phone, None), Ok(Some(true)));
        assert_eq!(registry.check("phone", &phone, None), Ok(Some(true)));
        assert_eq!(registry.check("telephone", &phone, None), Ok(None));
    }

    #[test]
    fn test_custom_patterns() {
        let patterns = BuiltinPatterns::default()
            .with_tel(Pattern::from_regex(Regex::new(r"^\s*\+44[0-9]{10}\s*$").unwrap()));
        let registry = Registry::with_patterns(patterns);

        assert!(registry.tel(&DataValue::from("+447911123456")));
        assert!(!registry.tel(&DataValue::from("13800138000")));
        assert!(registry.email(&DataValue::from("a@b.co")));
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(Registry::global(), Registry::global()));
    }
}
