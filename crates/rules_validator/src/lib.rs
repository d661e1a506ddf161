//! # Validation Rules Engine
//!
//! Evaluates declarative rule lists against records. This crate provides:
//!
//! - The assertion registry (`required`, `number`, `between`, `lengthBetween`,
//!   `regular`, `equalTo`, `in`, ... and their aliases)
//! - Value normalizers for the strict numeric and integer grammars
//! - Structural equality for `equalTo`
//! - The rule evaluator, in first-failure and all-failures modes
//!
//! ## Example
//!
//! ```rust
//! use rules_core::{DataValue, FieldRules, Record};
//!
//! let mut record = Record::new();
//! record.insert("phone".to_string(), DataValue::from("   "));
//! record.insert("code".to_string(), DataValue::from("232342"));
//!
//! let mut rules = FieldRules::new("phone")
//!     .assert("required", "phone is required")
//!     .assert_with("lengthBetween", vec![11, 11], "phone has 11 digits")
//!     .assert("tel", "phone is invalid")
//!     .build();
//! rules.extend(
//!     FieldRules::new("code")
//!         .assert("required", "code is required")
//!         .assert_with("regular", r"/^\d{6}$/", "code is invalid")
//!         .build(),
//! );
//!
//! let message = rules_validator::validate(&record, &rules).unwrap();
//! assert_eq!(message.as_deref(), Some("phone is required"));
//!
//! let errors = rules_validator::validate_all(&record, &rules).unwrap();
//! assert_eq!(errors.get("phone").map(String::as_str), Some("phone is invalid"));
//! assert!(!errors.contains_key("code"));
//! ```

mod assertions;
mod engine;
mod equality;
pub mod normalize;
mod patterns;
mod registry;

pub use assertions::*;
pub use engine::*;
pub use equality::*;
pub use patterns::*;
pub use registry::*;
