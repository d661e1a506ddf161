use anyhow::{Context, Result};
use rules_core::{RuleValidator, UnknownAssertionPolicy, ValidationContext};
use rules_parser::{parse_record_file, parse_rules_file};
use rules_validator::Validator;
use std::path::Path;
use tracing::info;

use crate::{OutputFormat, output};

pub fn execute(
    rules_path: &str,
    record_path: &str,
    all: bool,
    strict: bool,
    format: OutputFormat,
) -> Result<()> {
    info!("Validating record {} against {}", record_path, rules_path);
    info!("All failures: {}", all);
    info!("Strict mode: {}", strict);

    let rules = parse_rules_file(Path::new(rules_path))
        .with_context(|| format!("Failed to parse rules file: {}", rules_path))?;
    let record = parse_record_file(Path::new(record_path))
        .with_context(|| format!("Failed to parse record file: {}", record_path))?;

    if format == OutputFormat::Text {
        output::print_info(&format!(
            "Loaded {} rules and a record with {} fields",
            rules.len(),
            record.len()
        ));
    }

    let mut context = ValidationContext::new().with_all_failures(all);
    if strict {
        context = context.with_unknown_assertions(UnknownAssertionPolicy::Reject);
    }

    let outcome = Validator::new()
        .validate_with(&record, &rules, &context)
        .with_context(|| format!("Rules in {} are invalid", rules_path))?;

    output::print_validation_outcome(&outcome, rules.len(), format)?;

    if !outcome.passed() {
        std::process::exit(1);
    }

    Ok(())
}
