//! # schema-lint-core
//!
//! Core framework for linting programs written against a declarative
//! resource/attribute schema API.
//!
//! The loader/parser/type-resolver is an external collaborator: it hands the
//! core a fully resolved [`Program`] (syntax forest plus type identities),
//! and the core runs one forward pass over it:
//!
//! - [`LiteralClassifier`] finds literals whose resolved type is the schema
//!   struct, or a map from string to (pointer-to-)schema-struct, under any
//!   import alias;
//! - [`SchemaInfo`] extracts each scalar literal's fields into a semantic
//!   record, distinguishing absent, declared-but-unresolved, and
//!   constant-folded states;
//! - [`Engine`] dispatches an open set of [`Rule`]s by node shape, applies
//!   `lintignore:` suppression per node, and sorts the merged diagnostics by
//!   source position.
//!
//! ## Example
//!
//! ```ignore
//! use schema_lint_core::Engine;
//!
//! let engine = Engine::builder()
//!     .rule(MyRule::new())
//!     .build();
//!
//! let result = engine.run(&program);
//! for violation in &result.violations {
//!     println!("{violation}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classify;
mod context;
mod engine;
mod registry;
mod rule;
mod schema_info;
mod suppress;
mod types;

/// Resolved-program input model produced by the external loader.
pub mod program;

pub use classify::{map_entries, LiteralClassifier, SchemaKind, SchemaLiteral, SchemaMapEntry};
pub use context::FileContext;
pub use engine::{anchor, Engine, EngineBuilder};
pub use program::{
    Comment, CompositeLit, Element, Expr, Pos, Program, ResolvedType, SourceFile, Span, TypeId,
};
pub use registry::{TypeRegistry, DEFAULT_SCHEMA_MODULE};
pub use rule::{Rule, RuleBox};
pub use schema_info::{FieldEntry, FieldRecord, FieldValue, SchemaField, SchemaInfo, ValueType};
pub use suppress::{SuppressedRegion, SuppressionFilter, DIRECTIVE_PREFIX};
pub use types::{LintResult, Location, Suggestion, Violation, ViolationDiagnostic};
