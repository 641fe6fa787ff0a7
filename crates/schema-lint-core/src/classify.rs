//! Type-verified classification of schema-shaped literals.

use crate::program::{CompositeLit, Element, Expr, ResolvedType, SourceFile};
use crate::registry::TypeRegistry;

/// Shape of a classified schema literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// A literal of the schema struct type itself.
    Scalar,
    /// A literal of type map from string to (pointer-to-)schema-struct.
    Map,
}

/// A literal expression classified against the type registry.
#[derive(Debug, Clone, Copy)]
pub struct SchemaLiteral<'p> {
    /// The underlying composite literal.
    pub lit: &'p CompositeLit,
    /// Classification of the literal.
    pub kind: SchemaKind,
}

/// One keyed element of a schema map literal.
///
/// Entries are reported in source order; duplicate attribute names pass
/// through unmodified, one entry per occurrence.
#[derive(Debug, Clone, Copy)]
pub struct SchemaMapEntry<'p> {
    /// Attribute-name expression (a string constant when literal).
    pub key: &'p Expr,
    /// Value expression for the attribute.
    pub value: &'p Expr,
}

/// Walks resolved expression forests and classifies schema-shaped literals.
///
/// Classification is determined solely by resolved static type identity.
/// Expressions whose type the loader could not resolve are silently excluded;
/// partial analysis is preferred over aborting.
#[derive(Debug, Clone)]
pub struct LiteralClassifier<'r> {
    registry: &'r TypeRegistry,
}

impl<'r> LiteralClassifier<'r> {
    /// Creates a classifier over the given registry.
    #[must_use]
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self { registry }
    }

    /// Enumerates every classified literal in a file, in source (pre-)order,
    /// recursing through nested composites. A scalar literal nested as a map
    /// entry's value is enumerated in its own right.
    #[must_use]
    pub fn classify_file<'p>(&self, file: &'p SourceFile) -> Vec<SchemaLiteral<'p>> {
        let mut found = Vec::new();
        for expr in &file.exprs {
            self.walk(expr, &mut found);
        }
        found
    }

    /// Classifies a single composite literal by its resolved type.
    #[must_use]
    pub fn classify(&self, lit: &CompositeLit) -> Option<SchemaKind> {
        match lit.ty.deref() {
            ResolvedType::Named { id } if self.registry.is_schema(id) => Some(SchemaKind::Scalar),
            ResolvedType::MapStringTo { value } => match value.deref() {
                ResolvedType::Named { id } if self.registry.is_schema(id) => Some(SchemaKind::Map),
                _ => None,
            },
            _ => None,
        }
    }

    fn walk<'p>(&self, expr: &'p Expr, found: &mut Vec<SchemaLiteral<'p>>) {
        let Some(lit) = expr.as_composite() else {
            return;
        };

        if let Some(kind) = self.classify(lit) {
            found.push(SchemaLiteral { lit, kind });
        }

        for elem in &lit.elems {
            match elem {
                Element::KeyValue { key, value } => {
                    self.walk(key, found);
                    self.walk(value, found);
                }
                Element::Positional { value } => self.walk(value, found),
            }
        }
    }
}

/// Returns the keyed entries of a schema map literal, in source order.
/// Positional elements are not valid map entries and are skipped.
#[must_use]
pub fn map_entries(lit: &CompositeLit) -> Vec<SchemaMapEntry<'_>> {
    lit.elems
        .iter()
        .filter_map(|elem| match elem {
            Element::KeyValue { key, value } => Some(SchemaMapEntry { key, value }),
            Element::Positional { .. } => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::{Span, TypeId};
    use crate::registry::DEFAULT_SCHEMA_MODULE;

    fn schema_ty() -> ResolvedType {
        ResolvedType::Named {
            id: TypeId::new(DEFAULT_SCHEMA_MODULE, "Schema"),
        }
    }

    fn map_of_schema_ty() -> ResolvedType {
        ResolvedType::MapStringTo {
            value: Box::new(ResolvedType::Pointer {
                elem: Box::new(schema_ty()),
            }),
        }
    }

    fn lit(ty: ResolvedType, elems: Vec<Element>) -> CompositeLit {
        CompositeLit {
            ty,
            elems,
            span: Span::from_coords(1, 1, 1, 40),
        }
    }

    fn file(exprs: Vec<Expr>) -> SourceFile {
        SourceFile {
            path: "main.src".into(),
            source: None,
            exprs,
            comments: Vec::new(),
        }
    }

    #[test]
    fn classifies_scalar_through_pointer() {
        let registry = TypeRegistry::default();
        let classifier = LiteralClassifier::new(&registry);

        let direct = lit(schema_ty(), Vec::new());
        let behind_ptr = lit(
            ResolvedType::Pointer {
                elem: Box::new(schema_ty()),
            },
            Vec::new(),
        );
        assert_eq!(classifier.classify(&direct), Some(SchemaKind::Scalar));
        assert_eq!(classifier.classify(&behind_ptr), Some(SchemaKind::Scalar));
    }

    #[test]
    fn classifies_map_of_schema_pointers() {
        let registry = TypeRegistry::default();
        let classifier = LiteralClassifier::new(&registry);
        let map = lit(map_of_schema_ty(), Vec::new());
        assert_eq!(classifier.classify(&map), Some(SchemaKind::Map));
    }

    #[test]
    fn identity_matching_ignores_spelling() {
        // Two loaders reaching the type through different aliases produce the
        // same TypeId; classification sees only the identity.
        let registry = TypeRegistry::default();
        let classifier = LiteralClassifier::new(&registry);
        let via_alias = lit(schema_ty(), Vec::new());
        assert_eq!(classifier.classify(&via_alias), Some(SchemaKind::Scalar));

        let foreign = lit(
            ResolvedType::Named {
                id: TypeId::new("some.other/module", "Schema"),
            },
            Vec::new(),
        );
        assert_eq!(classifier.classify(&foreign), None);
    }

    #[test]
    fn unresolved_types_are_excluded_not_errors() {
        let registry = TypeRegistry::default();
        let classifier = LiteralClassifier::new(&registry);
        let unresolved = lit(ResolvedType::Unresolved, Vec::new());
        assert_eq!(classifier.classify(&unresolved), None);

        let f = file(vec![Expr::Composite(unresolved)]);
        assert!(classifier.classify_file(&f).is_empty());
    }

    #[test]
    fn walk_finds_nested_scalars_inside_maps() {
        let registry = TypeRegistry::default();
        let classifier = LiteralClassifier::new(&registry);

        let entry_value = lit(
            ResolvedType::Pointer {
                elem: Box::new(schema_ty()),
            },
            Vec::new(),
        );
        let map = lit(
            map_of_schema_ty(),
            vec![Element::KeyValue {
                key: Expr::Str {
                    value: "example_thing".into(),
                    span: Span::from_coords(1, 2, 1, 16),
                },
                value: Expr::Composite(entry_value),
            }],
        );

        let file = file(vec![Expr::Composite(map)]);
        let found = classifier.classify_file(&file);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].kind, SchemaKind::Map);
        assert_eq!(found[1].kind, SchemaKind::Scalar);
    }

    #[test]
    fn map_entries_preserve_order_and_duplicates() {
        let key = |name: &str| Expr::Str {
            value: name.into(),
            span: Span::from_coords(1, 2, 1, 8),
        };
        let value = || Expr::Opaque {
            ty: None,
            span: Span::from_coords(1, 10, 1, 12),
        };
        let map = lit(
            map_of_schema_ty(),
            vec![
                Element::KeyValue {
                    key: key("b_attr"),
                    value: value(),
                },
                Element::KeyValue {
                    key: key("a_attr"),
                    value: value(),
                },
                Element::KeyValue {
                    key: key("b_attr"),
                    value: value(),
                },
                Element::Positional { value: value() },
            ],
        );

        let entries = map_entries(&map);
        let names: Vec<_> = entries
            .iter()
            .filter_map(|e| e.key.str_value())
            .collect();
        assert_eq!(names, vec!["b_attr", "a_attr", "b_attr"]);
    }
}
