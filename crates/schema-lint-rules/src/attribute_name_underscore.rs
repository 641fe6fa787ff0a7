//! Rule enforcing the attribute-naming convention in schema maps.
//!
//! # Rationale
//!
//! Attribute names in a resource-level schema map follow the convention of
//! lowercase words separated by underscores; a name with no underscore at
//! all is almost always missing its provider or resource prefix.
//!
//! # Detected Patterns
//!
//! ```text
//! map[string]*Schema{
//!     "thing": {...},          // flagged
//! }
//! ```
//!
//! # Good Patterns
//!
//! ```text
//! map[string]*Schema{
//!     "example_thing": {...},
//! }
//! ```

use schema_lint_core::{
    anchor, FileContext, Rule, SchemaInfo, SchemaMapEntry, Suggestion, Violation,
};

/// Rule code for attribute-name-underscore.
pub const CODE: &str = "R013";

/// Rule name for attribute-name-underscore.
pub const NAME: &str = "attribute-name-underscore";

/// Flags schema map entries whose attribute name lacks an underscore.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeNameUnderscore;

impl AttributeNameUnderscore {
    /// Creates a new rule instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for AttributeNameUnderscore {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Attribute names in schema maps should include at least one underscore"
    }

    fn check_map_entry(
        &self,
        ctx: &FileContext,
        entry: &SchemaMapEntry,
        _info: Option<&SchemaInfo>,
    ) -> Vec<Violation> {
        // Non-literal keys cannot be checked; the predicate does not match.
        let Some(name) = entry.key.str_value() else {
            return Vec::new();
        };

        if name.contains('_') {
            return Vec::new();
        }

        vec![Violation::new(
            CODE,
            NAME,
            anchor(ctx, entry.key.span()),
            format!("attribute name \"{name}\" should include at least one underscore"),
        )
        .with_suggestion(Suggestion::new(
            "prefix the name with its provider or resource name, separated by an underscore",
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema_lint_core::{
        CompositeLit, Element, Engine, Expr, Program, ResolvedType, SourceFile, Span, TypeId,
        TypeRegistry, DEFAULT_SCHEMA_MODULE,
    };

    fn schema_map(keys: &[(&str, usize)]) -> Expr {
        let schema = ResolvedType::Named {
            id: TypeId::new(DEFAULT_SCHEMA_MODULE, "Schema"),
        };
        Expr::Composite(CompositeLit {
            ty: ResolvedType::MapStringTo {
                value: Box::new(ResolvedType::Pointer {
                    elem: Box::new(schema.clone()),
                }),
            },
            elems: keys
                .iter()
                .map(|(name, line)| Element::KeyValue {
                    key: Expr::Str {
                        value: (*name).into(),
                        span: Span::from_coords(*line, 2, *line, 2 + name.len()),
                    },
                    value: Expr::Composite(CompositeLit {
                        ty: ResolvedType::Pointer {
                            elem: Box::new(schema.clone()),
                        },
                        elems: Vec::new(),
                        span: Span::from_coords(*line, 10, *line, 12),
                    }),
                })
                .collect(),
            span: Span::from_coords(1, 1, 99, 1),
        })
    }

    fn run(keys: &[(&str, usize)]) -> Vec<Violation> {
        let program = Program {
            files: vec![SourceFile {
                path: "main.src".into(),
                source: None,
                exprs: vec![schema_map(keys)],
                comments: Vec::new(),
            }],
        };
        Engine::builder()
            .registry(TypeRegistry::default())
            .rule(AttributeNameUnderscore::new())
            .build()
            .run(&program)
            .violations
    }

    #[test]
    fn flags_name_without_underscore() {
        let violations = run(&[("thing", 2)]);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
        assert_eq!(violations[0].location.line, 2);
        assert_eq!(violations[0].location.column, 2);
        assert!(violations[0].message.contains("\"thing\""));
    }

    #[test]
    fn accepts_name_with_underscore() {
        assert!(run(&[("example_thing", 2)]).is_empty());
    }

    #[test]
    fn flags_each_offending_entry() {
        let violations = run(&[("thing", 2), ("example_thing", 3), ("other", 4)]);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].location.line, 2);
        assert_eq!(violations[1].location.line, 4);
    }

    #[test]
    fn duplicate_keys_flag_once_per_occurrence() {
        let violations = run(&[("thing", 2), ("thing", 3)]);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn non_literal_key_is_skipped() {
        let schema = ResolvedType::Named {
            id: TypeId::new(DEFAULT_SCHEMA_MODULE, "Schema"),
        };
        let map = Expr::Composite(CompositeLit {
            ty: ResolvedType::MapStringTo {
                value: Box::new(ResolvedType::Pointer {
                    elem: Box::new(schema.clone()),
                }),
            },
            elems: vec![Element::KeyValue {
                key: Expr::Opaque {
                    ty: None,
                    span: Span::from_coords(2, 2, 2, 10),
                },
                value: Expr::Composite(CompositeLit {
                    ty: ResolvedType::Pointer {
                        elem: Box::new(schema),
                    },
                    elems: Vec::new(),
                    span: Span::from_coords(2, 12, 2, 14),
                }),
            }],
            span: Span::from_coords(1, 1, 3, 1),
        });
        let program = Program {
            files: vec![SourceFile {
                path: "main.src".into(),
                source: None,
                exprs: vec![map],
                comments: Vec::new(),
            }],
        };
        let result = Engine::builder()
            .rule(AttributeNameUnderscore::new())
            .build()
            .run(&program);
        assert!(result.is_clean());
    }
}
