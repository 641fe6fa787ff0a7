//! End-to-end pipeline tests: classify, extract, evaluate, suppress, sort.

use schema_lint_core::{
    Comment, CompositeLit, Element, Engine, Expr, LintResult, Program, ResolvedType, SourceFile,
    Span, TypeId, TypeRegistry, DEFAULT_SCHEMA_MODULE,
};
use schema_lint_rules::{all_rules, AttributeNameUnderscore, ComputedWithDefault};

fn schema_named(module: &str) -> ResolvedType {
    ResolvedType::Named {
        id: TypeId::new(module, "Schema"),
    }
}

fn kv(name: &str, line: usize, value: Expr) -> Element {
    Element::KeyValue {
        key: Expr::Str {
            value: name.into(),
            span: Span::from_coords(line, 2, line, 2 + name.len()),
        },
        value,
    }
}

/// A `Schema{Computed: true, Default: "test"}` literal starting at `line`.
fn computed_default_lit(module: &str, line: usize) -> CompositeLit {
    CompositeLit {
        ty: schema_named(module),
        elems: vec![
            kv(
                "Computed",
                line + 1,
                Expr::Bool {
                    value: true,
                    span: Span::from_coords(line + 1, 12, line + 1, 16),
                },
            ),
            kv(
                "Default",
                line + 2,
                Expr::Str {
                    value: "test".into(),
                    span: Span::from_coords(line + 2, 12, line + 2, 18),
                },
            ),
        ],
        span: Span::from_coords(line, 6, line + 3, 1),
    }
}

fn map_of(module: &str, entries: Vec<(&str, usize, CompositeLit)>, span: Span) -> CompositeLit {
    CompositeLit {
        ty: ResolvedType::MapStringTo {
            value: Box::new(ResolvedType::Pointer {
                elem: Box::new(schema_named(module)),
            }),
        },
        elems: entries
            .into_iter()
            .map(|(name, line, mut value)| {
                value.ty = ResolvedType::Pointer {
                    elem: Box::new(value.ty),
                };
                Element::KeyValue {
                    key: Expr::Str {
                        value: name.into(),
                        span: Span::from_coords(line, 2, line, 2 + name.len()),
                    },
                    value: Expr::Composite(value),
                }
            })
            .collect(),
        span,
    }
}

fn run_file(file: SourceFile) -> LintResult {
    Engine::builder()
        .registry(TypeRegistry::default())
        .rules(all_rules())
        .build()
        .run(&Program { files: vec![file] })
}

fn empty_schema(line: usize) -> CompositeLit {
    CompositeLit {
        ty: schema_named(DEFAULT_SCHEMA_MODULE),
        elems: Vec::new(),
        span: Span::from_coords(line, 11, line, 13),
    }
}

#[test]
fn naming_rule_flags_key_without_underscore() {
    // map[string]*Schema{"thing": {}} on lines 2..4
    let map = map_of(
        DEFAULT_SCHEMA_MODULE,
        vec![("thing", 3, empty_schema(3))],
        Span::from_coords(2, 1, 4, 1),
    );
    let result = run_file(SourceFile {
        path: "resource_thing.src".into(),
        source: None,
        exprs: vec![Expr::Composite(map)],
        comments: Vec::new(),
    });

    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].code, "R013");
    assert_eq!(result.violations[0].location.line, 3);
    assert_eq!(result.violations[0].location.column, 2);
}

#[test]
fn naming_rule_accepts_key_with_underscore() {
    let map = map_of(
        DEFAULT_SCHEMA_MODULE,
        vec![("example_thing", 3, empty_schema(3))],
        Span::from_coords(2, 1, 4, 1),
    );
    let result = run_file(SourceFile {
        path: "resource_thing.src".into(),
        source: None,
        exprs: vec![Expr::Composite(map)],
        comments: Vec::new(),
    });
    assert!(result.is_clean());
}

#[test]
fn computed_default_fires_standalone_and_as_map_entry() {
    // Standalone literal on line 2, map entry value on line 8; the alias used
    // to reach the schema package never appears in the model, only the
    // resolved identity does, so any import alias behaves identically.
    let standalone = computed_default_lit(DEFAULT_SCHEMA_MODULE, 2);
    let map = map_of(
        DEFAULT_SCHEMA_MODULE,
        vec![("name_one", 8, computed_default_lit(DEFAULT_SCHEMA_MODULE, 8))],
        Span::from_coords(7, 1, 12, 1),
    );

    let result = run_file(SourceFile {
        path: "alias.src".into(),
        source: None,
        exprs: vec![Expr::Composite(standalone), Expr::Composite(map)],
        comments: Vec::new(),
    });

    let s027: Vec<_> = result
        .violations
        .iter()
        .filter(|v| v.code == "S027")
        .collect();
    assert_eq!(s027.len(), 2);
    assert_eq!(s027[0].location.line, 2);
    assert_eq!(s027[1].location.line, 8);
}

#[test]
fn alias_invariance_comes_from_identity_matching() {
    // A registry pointed at a custom module classifies that module's literals
    // and ignores the default module's, independent of source spelling.
    let custom = "corp.example/sdk/schema";
    let program = Program {
        files: vec![SourceFile {
            path: "main.src".into(),
            source: None,
            exprs: vec![
                Expr::Composite(computed_default_lit(custom, 2)),
                Expr::Composite(computed_default_lit(DEFAULT_SCHEMA_MODULE, 10)),
            ],
            comments: Vec::new(),
        }],
    };

    let result = Engine::builder()
        .registry(TypeRegistry::for_module(custom))
        .rule(ComputedWithDefault::new())
        .build()
        .run(&program);

    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].location.line, 2);
}

#[test]
fn map_level_suppression_scopes_to_one_rule() {
    // lintignore:R013 on line 4, map on lines 5..10 with a "thing" entry
    // whose value violates S027: R013 is silenced, S027 survives.
    let map = map_of(
        DEFAULT_SCHEMA_MODULE,
        vec![("thing", 6, computed_default_lit(DEFAULT_SCHEMA_MODULE, 6))],
        Span::from_coords(5, 1, 10, 1),
    );
    let result = run_file(SourceFile {
        path: "suppressed.src".into(),
        source: None,
        exprs: vec![Expr::Composite(map)],
        comments: vec![Comment {
            text: "lintignore:R013".into(),
            line: 4,
        }],
    });

    let codes: Vec<_> = result.violations.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(codes, vec!["S027"]);
}

#[test]
fn suppression_requires_directive_directly_above() {
    let map = map_of(
        DEFAULT_SCHEMA_MODULE,
        vec![("thing", 6, empty_schema(6))],
        Span::from_coords(5, 1, 7, 1),
    );
    let result = run_file(SourceFile {
        path: "not_suppressed.src".into(),
        source: None,
        exprs: vec![Expr::Composite(map)],
        comments: vec![Comment {
            text: "lintignore:R013".into(),
            line: 2,
        }],
    });
    assert_eq!(result.violations.len(), 1);
}

#[test]
fn diagnostics_sort_by_position_across_files_and_rules() {
    let file_b = SourceFile {
        path: "b.src".into(),
        source: None,
        exprs: vec![Expr::Composite(computed_default_lit(
            DEFAULT_SCHEMA_MODULE,
            2,
        ))],
        comments: Vec::new(),
    };
    let file_a = SourceFile {
        path: "a.src".into(),
        source: None,
        exprs: vec![Expr::Composite(map_of(
            DEFAULT_SCHEMA_MODULE,
            vec![
                ("zeta", 8, empty_schema(8)),
                ("beta", 3, computed_default_lit(DEFAULT_SCHEMA_MODULE, 3)),
            ],
            Span::from_coords(2, 1, 9, 1),
        ))],
        comments: Vec::new(),
    };

    // Registration order is reversed relative to position order on purpose.
    let result = Engine::builder()
        .rule(ComputedWithDefault::new())
        .rule(AttributeNameUnderscore::new())
        .build()
        .run(&Program {
            files: vec![file_b, file_a],
        });

    let order: Vec<_> = result
        .violations
        .iter()
        .map(|v| {
            (
                v.location.file.display().to_string(),
                v.location.line,
                v.code.as_str(),
            )
        })
        .collect();
    assert_eq!(
        order,
        vec![
            ("a.src".to_string(), 3, "R013"),
            ("a.src".to_string(), 3, "S027"),
            ("a.src".to_string(), 8, "R013"),
            ("b.src".to_string(), 2, "S027"),
        ]
    );
    assert_eq!(result.files_checked, 2);
}
