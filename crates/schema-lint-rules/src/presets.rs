//! Rule presets for common configurations.

use crate::{AttributeNameUnderscore, ComputedWithDefault};
use schema_lint_core::RuleBox;

/// Returns every built-in rule.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(AttributeNameUnderscore::new()),
        Box::new(ComputedWithDefault::new()),
    ]
}

/// Returns the default rule set used by the CLI.
#[must_use]
pub fn default_rules() -> Vec<RuleBox> {
    all_rules()
}

/// Returns only the rules whose code or name is in `selection`.
#[must_use]
pub fn select_rules(selection: &[&str]) -> Vec<RuleBox> {
    all_rules()
        .into_iter()
        .filter(|rule| selection.contains(&rule.code()) || selection.contains(&rule.name()))
        .collect()
}
