//! Parser for validation rule documents and records (JSON/YAML/TOML formats).
//!
//! This module loads rule lists and records from text into the strongly-typed
//! `Rule` and `Record` structures, so rules can live in files or be received
//! over the wire instead of being written in code.
//!
//! # Example
//!
//! ```rust
//! use rules_parser::{DocumentFormat, parse_rules};
//!
//! let yaml = r#"
//! rules:
//!   - field: phone
//!     message: phone is required
//!     assertionName: required
//!   - field: code
//!     message: code is invalid
//!     assertionName: regular
//!     expected: '/^\d{6}$/'
//! "#;
//!
//! let rules = parse_rules(yaml, DocumentFormat::Yaml).expect("Failed to parse rules");
//! assert_eq!(rules.len(), 2);
//! assert_eq!(rules[1].assertion, "regular");
//! ```

use rules_core::{DataValue, Record, Rule};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading rules or records.
#[derive(Debug, Error)]
pub enum ParserError {
    /// JSON parsing failed
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failed
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing failed
    #[error("Failed to parse TOML: {0}")]
    Toml(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// Rules document is neither a list nor a mapping with a `rules` list
    #[error("Rules document must be a list of rules or a mapping with a 'rules' list, found {0}")]
    NotAList(&'static str),

    /// Record document is not a mapping
    #[error("Record document must be a mapping, found {0}")]
    NotAMapping(&'static str),

    /// A single rule could not be read
    #[error("Invalid rule at index {index}: {source}")]
    InvalidRule {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

fn from_str<T: DeserializeOwned>(content: &str, format: DocumentFormat) -> Result<T> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        DocumentFormat::Yaml => Ok(serde_yaml_ng::from_str(content)?),
        DocumentFormat::Toml => {
            toml::from_str(content).map_err(|e| ParserError::Toml(e.to_string()))
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

/// Parse a rule list from a string.
///
/// The document is either a list of rules or a mapping whose `rules` key
/// holds that list. TOML can only express the second shape:
///
/// ```rust
/// use rules_parser::{DocumentFormat, parse_rules};
///
/// let toml = r#"
/// [[rules]]
/// field = "age"
/// message = "must be 0-120"
/// assertionName = "between"
/// expected = [0, 120]
/// "#;
///
/// let rules = parse_rules(toml, DocumentFormat::Toml).unwrap();
/// assert_eq!(rules[0].field, "age");
/// ```
///
/// # Errors
///
/// Returns `ParserError::InvalidRule` with the offending position when an
/// entry has no field name or no assertion name.
pub fn parse_rules(content: &str, format: DocumentFormat) -> Result<Vec<Rule>> {
    let document: Value = from_str(content, format)?;

    let entries = match document {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("rules") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(ParserError::NotAList("mapping without a 'rules' list")),
        },
        other => return Err(ParserError::NotAList(kind_of(&other))),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry).map_err(|source| ParserError::InvalidRule { index, source })
        })
        .collect()
}

/// Parse a record from a string.
///
/// # Example
///
/// ```rust
/// use rules_core::DataValue;
/// use rules_parser::{DocumentFormat, parse_record};
///
/// let record = parse_record(r#"{"phone": "   ", "age": 42}"#, DocumentFormat::Json).unwrap();
/// assert_eq!(record["age"], DataValue::Int(42));
/// ```
pub fn parse_record(content: &str, format: DocumentFormat) -> Result<Record> {
    let document: Value = from_str(content, format)?;

    match DataValue::from(document) {
        DataValue::Map(record) => Ok(record),
        other => Err(ParserError::NotAMapping(other.type_name())),
    }
}

/// Detect the document format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.json` → `DocumentFormat::Json`
/// * `.yaml`, `.yml` → `DocumentFormat::Yaml`
/// * `.toml` → `DocumentFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<DocumentFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "json" => Ok(DocumentFormat::Json),
        "yaml" | "yml" => Ok(DocumentFormat::Yaml),
        "toml" => Ok(DocumentFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a rule list from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use rules_parser::parse_rules_file;
/// use std::path::Path;
///
/// let rules = parse_rules_file(Path::new("rules/signup.yml")).unwrap();
/// println!("Loaded {} rules", rules.len());
/// ```
pub fn parse_rules_file(path: &Path) -> Result<Vec<Rule>> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_rules(&content, format)
}

/// Parse a record from a file with automatic format detection.
pub fn parse_record_file(path: &Path) -> Result<Record> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_record(&content, format)
}
