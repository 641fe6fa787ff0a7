//! Rendering of lint results.

use anyhow::Result;
use schema_lint_core::{LintResult, ViolationDiagnostic};

use crate::OutputFormat;

/// Renders a lint result to stdout in the requested format.
pub fn render(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for violation in &result.violations {
                let diagnostic = ViolationDiagnostic::from(violation);
                let report = miette::Report::new(diagnostic);
                eprintln!("{report:?}");
            }
            println!(
                "Found {} violation(s) in {} file(s)",
                result.violations.len(),
                result.files_checked
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Compact => {
            for violation in &result.violations {
                println!("{violation}");
            }
        }
    }
    Ok(())
}
