//! Engine orchestrating the classify, extract, evaluate, filter pipeline.

use crate::classify::{map_entries, LiteralClassifier, SchemaKind, SchemaLiteral};
use crate::context::FileContext;
use crate::program::{Program, Span};
use crate::registry::TypeRegistry;
use crate::rule::{Rule, RuleBox};
use crate::schema_info::SchemaInfo;
use crate::suppress::SuppressionFilter;
use crate::types::{LintResult, Location, Violation};

use tracing::{debug, info};

/// Builder for configuring an [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    registry: Option<TypeRegistry>,
    rules: Vec<RuleBox>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the type registry the classifier matches against.
    #[must_use]
    pub fn registry(mut self, registry: TypeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Adds a rule to the engine.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the engine.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple boxed rules to the engine.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Builds the engine.
    #[must_use]
    pub fn build(self) -> Engine {
        Engine {
            registry: self.registry.unwrap_or_default(),
            rules: self.rules,
        }
    }
}

/// The engine running an open set of independent rules over a resolved
/// program.
///
/// The pipeline is one forward pass per file: classify literals, extract
/// schema info, evaluate every rule per classified node, apply the
/// suppression pre-filter, then merge all diagnostics and sort by source
/// position. Rules share no mutable state and consume no other rule's
/// output, so evaluation could fork-join across rules or files; the final
/// sort makes output identical under any schedule.
pub struct Engine {
    registry: TypeRegistry,
    rules: Vec<RuleBox>,
}

impl Engine {
    /// Creates a new builder for configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Runs all rules over the program and returns the sorted result.
    ///
    /// The run is infallible by design: the loader either produced a fully
    /// resolved program or failed before this point, and resolution or
    /// decode gaps inside the program are states, not errors.
    #[must_use]
    pub fn run(&self, program: &Program) -> LintResult {
        info!("starting analysis of {} file(s)", program.files.len());

        let classifier = LiteralClassifier::new(&self.registry);
        let mut result = LintResult::new();

        for file in &program.files {
            debug!("analyzing {}", file.path.display());
            let ctx = FileContext::new(&file.path, file.source.as_deref());
            let literals = classifier.classify_file(file);
            let mut violations = Vec::new();

            for literal in &literals {
                violations.extend(self.check_node(&ctx, &classifier, literal));
            }

            let filter = SuppressionFilter::from_comments(&file.comments);
            if !filter.is_empty() {
                let spans: Vec<Span> = literals.iter().map(|l| l.lit.span).collect();
                let regions = filter.regions(&spans);
                violations.retain(|v| {
                    let anchor =
                        crate::program::Pos::new(v.location.line, v.location.column);
                    !regions.iter().any(|r| r.suppresses(&v.code, anchor))
                });
            }

            for v in &mut violations {
                v.location.offset = ctx.offset_for(v.location.line, v.location.column);
            }

            result.violations.extend(violations);
            result.files_checked += 1;
        }

        result.sort_by_position();

        info!(
            "analysis complete: {} violation(s) in {} file(s)",
            result.violations.len(),
            result.files_checked
        );
        result
    }

    /// Evaluates every rule against one classified node.
    fn check_node(
        &self,
        ctx: &FileContext,
        classifier: &LiteralClassifier,
        literal: &SchemaLiteral,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();

        match literal.kind {
            SchemaKind::Scalar => {
                let info = SchemaInfo::from_literal(literal.lit, &self.registry);
                for rule in &self.rules {
                    violations.extend(rule.check_schema(ctx, literal, &info));
                }
            }
            SchemaKind::Map => {
                for rule in &self.rules {
                    violations.extend(rule.check_schema_map(ctx, literal));
                }
                for entry in map_entries(literal.lit) {
                    let info = entry
                        .value
                        .as_composite()
                        .filter(|lit| classifier.classify(lit) == Some(SchemaKind::Scalar))
                        .map(|lit| SchemaInfo::from_literal(lit, &self.registry));
                    for rule in &self.rules {
                        violations.extend(rule.check_map_entry(ctx, &entry, info.as_ref()));
                    }
                }
            }
        }

        violations
    }
}

/// Builds a [`Location`] anchored at the start of a span.
#[must_use]
pub fn anchor(ctx: &FileContext, span: Span) -> Location {
    Location::new(ctx.path.to_path_buf(), span.start.line, span.start.column)
}
