use anyhow::{Context, Result};
use rules_parser::parse_rules_file;
use rules_validator::Validator;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

use crate::output::{self, RulesSummary};
use crate::OutputFormat;

pub fn execute(rules_path: &str, format: OutputFormat) -> Result<()> {
    info!("Checking rules: {}", rules_path);

    let rules = parse_rules_file(Path::new(rules_path))
        .with_context(|| format!("Failed to parse rules file: {}", rules_path))?;

    if format == OutputFormat::Text {
        output::print_info(&format!("Rules loaded: {} entries", rules.len()));
    }

    let fields: BTreeSet<&str> = rules.iter().map(|rule| rule.field.as_str()).collect();
    let assertions: BTreeSet<&str> = rules.iter().map(|rule| rule.assertion.as_str()).collect();
    let summary = RulesSummary {
        rule_count: rules.len(),
        fields: fields.into_iter().map(String::from).collect(),
        assertions: assertions.into_iter().map(String::from).collect(),
    };

    let defects: Vec<_> = Validator::new()
        .lint(&rules)
        .into_iter()
        .map(|(index, err)| (index, rules[index].field.clone(), err))
        .collect();

    output::print_lint_report(&summary, &defects, format)?;

    if !defects.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
