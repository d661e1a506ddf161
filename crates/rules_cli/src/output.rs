use anyhow::Result;
use colored::*;
use rules_core::{RuleError, ValidationOutcome};
use serde_json::json;

use crate::OutputFormat;

pub fn print_validation_outcome(
    outcome: &ValidationOutcome,
    rule_count: usize,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json_outcome(outcome, rule_count),
        OutputFormat::Text => {
            print_text_outcome(outcome, rule_count);
            Ok(())
        }
    }
}

fn print_text_outcome(outcome: &ValidationOutcome, rule_count: usize) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if outcome.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    let failing_fields = match outcome {
        ValidationOutcome::Passed => 0,
        ValidationOutcome::Failed(message) => {
            println!("\n{}", "First failure:".red().bold());
            println!("  {}", message.red());
            1
        }
        ValidationOutcome::FieldErrors(errors) => {
            println!("\n{}", "Errors:".red().bold());
            for (i, (field, message)) in errors.iter().enumerate() {
                println!("  {}. {}: {}", i + 1, field.bold(), message.red());
            }
            errors.len()
        }
    };

    println!("\n{}", "Summary:".bold());
    println!("  Rules:          {}", rule_count);
    println!("  Failing fields: {}", failing_fields);
    println!("{}", "═".repeat(60));
}

fn print_json_outcome(outcome: &ValidationOutcome, rule_count: usize) -> Result<()> {
    let errors = outcome.field_errors().cloned().unwrap_or_default();

    let output = json!({
        "passed": outcome.passed(),
        "message": outcome.message(),
        "errors": errors,
        "summary": {
            "rule_count": rule_count,
            "error_count": errors.len(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Rule file overview shown by `check`.
pub struct RulesSummary {
    pub rule_count: usize,
    pub fields: Vec<String>,
    pub assertions: Vec<String>,
}

pub fn print_lint_report(
    summary: &RulesSummary,
    defects: &[(usize, String, RuleError)],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output = json!({
                "valid": defects.is_empty(),
                "summary": {
                    "rule_count": summary.rule_count,
                    "fields": summary.fields,
                    "assertions": summary.assertions,
                },
                "defects": defects
                    .iter()
                    .map(|(index, field, err)| json!({
                        "index": index,
                        "field": field,
                        "error": err.to_string(),
                    }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            if defects.is_empty() {
                print_success("Rules are valid");
            } else {
                println!("\n{}", "Defects:".red().bold());
                for (index, field, err) in defects {
                    println!(
                        "  rule #{} ({}): {}",
                        index,
                        field.bold(),
                        err.to_string().red()
                    );
                }
            }

            println!("\nRules Summary:");
            println!("  Rules:      {}", summary.rule_count);
            println!("  Fields:     {}", summary.fields.join(", "));
            println!("  Assertions: {}", summary.assertions.join(", "));
        }
    }
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
