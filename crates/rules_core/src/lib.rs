//! # Validation Rules Core
//!
//! Core data structures and types for the declarative validation engine.
//!
//! Validation rules are data, not code: they can be written in a JSON, YAML
//! or TOML document, shipped to another process, and evaluated there against
//! a record. This crate holds the types shared by everything that reads,
//! writes or evaluates them.
//!
//! ## Key Concepts
//!
//! - **Record**: an open mapping from field name to [`DataValue`]
//! - **Rule**: a field name, an assertion name, an optional expected value and a message
//! - **ValidationContext**: evaluation options (first failure or all failures)
//! - **RuleError**: a defect in the rules themselves, as opposed to a failing value
//!
//! ## Example
//!
//! ```rust
//! use rules_core::{DataValue, Record, Rule};
//!
//! let mut record = Record::new();
//! record.insert("age".to_string(), DataValue::Int(42));
//!
//! let rules = vec![
//!     Rule::new("age", "required", "age is required"),
//!     Rule::new("age", "between", "must be 0-120").with_expected(vec![0, 120]),
//! ];
//! assert_eq!(rules.len(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod pattern;
pub mod rule;
pub mod text;
pub mod validator;
pub mod value;

pub use builder::*;
pub use error::*;
pub use pattern::*;
pub use rule::*;
pub use validator::*;
pub use value::*;
