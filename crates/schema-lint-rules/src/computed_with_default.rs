//! Rule rejecting schemas that only enable Computed and configure Default.
//!
//! # Rationale
//!
//! A purely computed attribute is owned by the provider; a configured
//! `Default` can never take effect unless the attribute is also `Optional`,
//! `Required`, or replaced via `ForceNew`. The combination is either a typo
//! or a misunderstanding of how computed attributes behave.
//!
//! # Detected Patterns
//!
//! ```text
//! Schema{
//!     Computed: true,
//!     Default:  "test",   // flagged
//! }
//! ```

use schema_lint_core::{
    anchor, FieldValue, FileContext, Rule, SchemaField, SchemaInfo, SchemaLiteral, Suggestion,
    Violation,
};

/// Rule code for computed-with-default.
pub const CODE: &str = "S027";

/// Rule name for computed-with-default.
pub const NAME: &str = "computed-with-default";

/// Flags scalar schema literals that enable Computed and configure Default
/// without declaring Optional, Required, or ForceNew.
///
/// Because the engine classifies map-entry values as scalar literals in
/// their own right, this predicate composes across map traversal and emits
/// one diagnostic per offending entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputedWithDefault;

impl ComputedWithDefault {
    /// Creates a new rule instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ComputedWithDefault {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Schemas should not only enable Computed and configure Default"
    }

    fn check_schema(
        &self,
        ctx: &FileContext,
        lit: &SchemaLiteral,
        info: &SchemaInfo,
    ) -> Vec<Violation> {
        // Computed must decode to true; Default counts whether its value
        // resolved or not.
        if info.computed != FieldValue::Value(true) {
            return Vec::new();
        }
        if !info.declares(SchemaField::Default) {
            return Vec::new();
        }
        if info.optional.is_declared()
            || info.required.is_declared()
            || info.force_new.is_declared()
        {
            return Vec::new();
        }

        vec![Violation::new(
            CODE,
            NAME,
            anchor(ctx, lit.lit.span),
            "schema should not only enable Computed and configure Default",
        )
        .with_suggestion(Suggestion::new(
            "declare Optional or Required so the Default can take effect, or remove Default",
        ))]
    }
}
