mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rulecheck")]
#[command(version, about = "Declarative validation rules CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a record against a rules file
    Validate {
        /// Path to the rules file (JSON, YAML or TOML)
        rules: String,

        /// Path to the record file (JSON, YAML or TOML)
        record: String,

        /// Report every failing field instead of stopping at the first failure
        #[arg(short, long)]
        all: bool,

        /// Treat unknown assertion names as errors instead of skipping them
        #[arg(short, long)]
        strict: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check a rules file for defects without validating data
    Check {
        /// Path to the rules file (JSON, YAML or TOML)
        rules: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the available assertions and their aliases
    Assertions,
}

/// Report format for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG takes precedence over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            rules,
            record,
            all,
            strict,
            format,
        } => commands::validate::execute(&rules, &record, all, strict, format),

        Commands::Check { rules, format } => commands::check::execute(&rules, format),

        Commands::Assertions => commands::assertions::execute(),
    }
}
