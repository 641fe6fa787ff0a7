//! schema-lint CLI tool.
//!
//! Usage:
//! ```bash
//! schema-lint check resolved-program.json [more.json ...]
//! schema-lint list-rules
//! ```
//!
//! `check` consumes resolved-program JSON documents produced by the parse
//! and type-resolution frontend, runs every enabled rule, and exits non-zero
//! when any diagnostic survives suppression filtering.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use schema_lint_core::{Engine, TypeRegistry};
use schema_lint_rules::{all_rules, default_rules, select_rules};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod loader;
mod output;

/// Static linter for declarative resource/attribute schemas
#[derive(Parser)]
#[command(name = "schema-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lint checks over resolved-program documents
    Check {
        /// Resolved-program JSON documents to analyze
        #[arg(required = true)]
        programs: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated codes or names)
        #[arg(long)]
        rules: Option<String>,

        /// Module path of the schema SDK to match against
        #[arg(long)]
        schema_module: Option<String>,
    },

    /// List available rules
    ListRules,
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            programs,
            format,
            rules,
            schema_module,
        } => check(&programs, format, rules.as_deref(), schema_module.as_deref()),
        Commands::ListRules => {
            list_rules();
            Ok(())
        }
    }
}

fn check(
    programs: &[PathBuf],
    format: OutputFormat,
    rules: Option<&str>,
    schema_module: Option<&str>,
) -> Result<()> {
    let program = loader::load_programs(programs).context("loading resolved programs")?;

    let rules = match rules {
        Some(selection) => {
            let names: Vec<&str> = selection.split(',').map(str::trim).collect();
            select_rules(&names)
        }
        None => default_rules(),
    };

    let registry = schema_module.map_or_else(TypeRegistry::default, TypeRegistry::for_module);

    let engine = Engine::builder().registry(registry).rules(rules).build();
    let result = engine.run(&program);

    output::render(&result, format)?;

    if !result.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}

fn list_rules() {
    for rule in all_rules() {
        println!("{}  {}  {}", rule.code(), rule.name(), rule.description());
    }
}
