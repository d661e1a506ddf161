use anyhow::Result;
use colored::*;
use rules_validator::Assertion;

pub fn execute() -> Result<()> {
    println!("{}", "Available assertions:".bold());

    for assertion in Assertion::ALL {
        let mut line = format!("  {}", format!("{:<14}", assertion.name()).green());
        if assertion.takes_expected() {
            line.push_str(" (expected)");
        }
        if !assertion.aliases().is_empty() {
            line.push_str(&format!(" aliases: {}", assertion.aliases().join(", ")));
        }
        println!("{}", line.trim_end());
    }

    Ok(())
}
