//! Rule trait for defining lint rules over classified schema literals.

use crate::classify::{SchemaLiteral, SchemaMapEntry};
use crate::context::FileContext;
use crate::schema_info::SchemaInfo;
use crate::types::Violation;

/// A stateless lint rule over classified schema literals.
///
/// The engine dispatches by node shape: a rule overrides the hook(s) for the
/// shapes it accepts and leaves the rest as no-ops. Rules must not hold
/// mutable state and must not depend on the execution order of other rules;
/// the engine sorts merged diagnostics by position, so evaluation order never
/// shows in the output. A rule encountering missing data (an unresolved
/// field, a non-literal key) treats it as "predicate does not match", never
/// as a failure.
///
/// # Example
///
/// ```ignore
/// use schema_lint_core::{FileContext, Rule, SchemaLiteral, SchemaInfo, Violation};
///
/// pub struct RequireDescription;
///
/// impl Rule for RequireDescription {
///     fn name(&self) -> &'static str { "require-description" }
///     fn code(&self) -> &'static str { "S900" }
///
///     fn check_schema(
///         &self,
///         ctx: &FileContext,
///         lit: &SchemaLiteral,
///         info: &SchemaInfo,
///     ) -> Vec<Violation> {
///         // ...
///         vec![]
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g. "computed-with-default").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g. "S027"), the identifier used by
    /// `lintignore:` suppression directives.
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks one classified scalar schema literal, whether top-level or
    /// nested as a map entry's value.
    fn check_schema(
        &self,
        _ctx: &FileContext,
        _lit: &SchemaLiteral,
        _info: &SchemaInfo,
    ) -> Vec<Violation> {
        Vec::new()
    }

    /// Checks one classified schema map literal.
    fn check_schema_map(&self, _ctx: &FileContext, _lit: &SchemaLiteral) -> Vec<Violation> {
        Vec::new()
    }

    /// Checks one entry of a classified schema map. `info` is the extraction
    /// of the entry's value when that value is itself a classified scalar
    /// literal.
    fn check_map_entry(
        &self,
        _ctx: &FileContext,
        _entry: &SchemaMapEntry,
        _info: Option<&SchemaInfo>,
    ) -> Vec<Violation> {
        Vec::new()
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
