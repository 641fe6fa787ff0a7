//! # schema-lint-rules
//!
//! Built-in lint rules for schema-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | R013 | `attribute-name-underscore` | Attribute names in schema maps should include at least one underscore |
//! | S027 | `computed-with-default` | Schemas should not only enable Computed and configure Default |
//!
//! ## Usage
//!
//! ```ignore
//! use schema_lint_core::Engine;
//! use schema_lint_rules::{AttributeNameUnderscore, ComputedWithDefault};
//!
//! let engine = Engine::builder()
//!     .rule(AttributeNameUnderscore::new())
//!     .rule(ComputedWithDefault::new())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attribute_name_underscore;
mod computed_with_default;
mod presets;

pub use attribute_name_underscore::AttributeNameUnderscore;
pub use computed_with_default::ComputedWithDefault;
pub use presets::{all_rules, default_rules, select_rules};

/// Re-export core types for convenience.
pub use schema_lint_core::{Rule, RuleBox, Violation};
