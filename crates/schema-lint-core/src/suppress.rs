//! Inline suppression directives.
//!
//! A single-line comment of the fixed form:
//! ```text
//! lintignore:S027
//! ```
//! immediately above a classified node suppresses every diagnostic for that
//! rule identifier anchored within the node's span. Whole subtrees, not
//! individual diagnostics, are the unit of exemption: a directive above a
//! schema map silences matching diagnostics from all of its entries. Unknown
//! rule identifiers are inert.

use crate::program::{Comment, Pos, Span};

/// Directive prefix inside the comment text.
pub const DIRECTIVE_PREFIX: &str = "lintignore:";

/// A parsed suppression directive and the line it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Directive {
    rule_id: String,
    line: usize,
}

/// A node-scoped suppression: diagnostics for `rule_id` anchored within
/// `span` are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuppressedRegion {
    /// Suppressed rule identifier.
    pub rule_id: String,
    /// Span of the exempted node.
    pub span: Span,
}

impl SuppressedRegion {
    /// Returns true if a diagnostic for `code` anchored at `anchor` is
    /// suppressed by this region.
    #[must_use]
    pub fn suppresses(&self, code: &str, anchor: Pos) -> bool {
        self.rule_id == code && self.span.contains(anchor)
    }
}

/// Pre-filter applied per node before diagnostics are finalized.
#[derive(Debug, Clone, Default)]
pub struct SuppressionFilter {
    directives: Vec<Directive>,
}

impl SuppressionFilter {
    /// Collects the directives present in a file's comments.
    #[must_use]
    pub fn from_comments(comments: &[Comment]) -> Self {
        let directives = comments
            .iter()
            .filter_map(|c| {
                parse_directive(&c.text).map(|rule_id| Directive {
                    rule_id,
                    line: c.line,
                })
            })
            .collect();
        Self { directives }
    }

    /// Returns true if any directive was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Resolves directives against the classified node spans of the file: a
    /// directive attaches to every classified node starting on the line
    /// directly below it.
    #[must_use]
    pub fn regions(&self, node_spans: &[Span]) -> Vec<SuppressedRegion> {
        let mut regions = Vec::new();
        for directive in &self.directives {
            for span in node_spans {
                if span.start.line == directive.line + 1 {
                    regions.push(SuppressedRegion {
                        rule_id: directive.rule_id.clone(),
                        span: *span,
                    });
                }
            }
        }
        regions
    }
}

/// Parses a suppression directive from a comment's text. Leading comment
/// markers are tolerated since loaders differ on whether they strip them.
fn parse_directive(text: &str) -> Option<String> {
    let text = text.trim();
    let text = text.strip_prefix("//").unwrap_or(text);
    let text = text.strip_prefix('#').unwrap_or(text).trim_start();

    let rule_id = text.strip_prefix(DIRECTIVE_PREFIX)?.trim();
    if rule_id.is_empty() || rule_id.contains(char::is_whitespace) {
        return None;
    }
    Some(rule_id.to_string())
}
