//! Resolved-program input model.
//!
//! The loader/parser/type-resolver is an external collaborator: it parses the
//! program under analysis, resolves static types, and hands the core a fully
//! resolved [`Program`]. The core never consumes a partially resolved program
//! and never reads source itself.
//!
//! The model is deliberately small. The core only needs four capabilities from
//! the loader: enumeration of literal nodes, static type resolution of any
//! expression, retrieval of comments, and mapping of a node to a position.
//! Everything carries `serde` derives so any frontend can produce it (the CLI
//! ships a JSON loader for this model).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A fully resolved program: the unit the engine runs over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Program {
    /// Source files, each with its resolved expression forest.
    pub files: Vec<SourceFile>,
}

/// One source file of the program under analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path of the file, as reported in diagnostics.
    pub path: PathBuf,
    /// Raw source text, when the loader chose to include it. Only used to
    /// compute byte offsets for rich rendering; analysis never reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Top-level expression forest in source order.
    #[serde(default)]
    pub exprs: Vec<Expr>,
    /// Single-line comments, used for suppression directives.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A single-line comment and the line it occupies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment text, with or without the leading comment marker.
    pub text: String,
    /// 1-indexed line number.
    pub line: usize,
}

/// A position in a source file (1-indexed line and column).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Pos {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Pos {
    /// Creates a new position.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A source span, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start position.
    pub start: Pos,
    /// End position.
    pub end: Pos,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    /// Convenience constructor from line/column pairs.
    #[must_use]
    pub fn from_coords(
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
    ) -> Self {
        Self::new(Pos::new(start_line, start_column), Pos::new(end_line, end_column))
    }

    /// Returns true if `pos` lies within this span.
    #[must_use]
    pub fn contains(&self, pos: Pos) -> bool {
        self.start <= pos && pos <= self.end
    }
}

/// Fully-qualified type identity: defining-module path plus type name.
///
/// Produced by the loader post-resolution, so import aliases, type aliases,
/// and re-exports all collapse to the same identity. All type matching in the
/// core compares these, never syntactic spellings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeId {
    /// Defining module path (e.g. `example.com/provider-sdk/helper/schema`).
    pub module: String,
    /// Type name within the module.
    pub name: String,
}

impl TypeId {
    /// Creates a new type identity.
    #[must_use]
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.module, self.name)
    }
}

/// Statically resolved type of an expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedType {
    /// A named type.
    Named {
        /// Identity of the named type.
        id: TypeId,
    },
    /// A pointer/reference to another type.
    Pointer {
        /// Pointed-to type.
        elem: Box<ResolvedType>,
    },
    /// A map from string keys to values of another type.
    MapStringTo {
        /// Value type of the map.
        value: Box<ResolvedType>,
    },
    /// The loader could not determine a static type.
    Unresolved,
}

impl ResolvedType {
    /// Dereferences through any number of pointer wrappers.
    #[must_use]
    pub fn deref(&self) -> &ResolvedType {
        match self {
            Self::Pointer { elem } => elem.deref(),
            other => other,
        }
    }

    /// Returns the named identity after pointer dereference, if any.
    #[must_use]
    pub fn named_id(&self) -> Option<&TypeId> {
        match self.deref() {
            Self::Named { id } => Some(id),
            _ => None,
        }
    }
}

/// An expression node in the resolved forest.
///
/// Scalar constants arrive already folded by the loader; anything it could not
/// fold (function references, calls, variables, arithmetic over non-constants)
/// arrives as [`Expr::Opaque`]. Struct-literal field names and map keys are
/// lowered to string expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    /// A constant-folded boolean.
    Bool {
        /// Folded value.
        value: bool,
        /// Source span.
        span: Span,
    },
    /// A constant-folded integer.
    Int {
        /// Folded value.
        value: i64,
        /// Source span.
        span: Span,
    },
    /// A constant-folded string.
    Str {
        /// Folded value.
        value: String,
        /// Source span.
        span: Span,
    },
    /// A reference to a member of a named enumeration (e.g. a value-type
    /// constant), carrying the enumeration's resolved identity.
    EnumMember {
        /// Resolved identity of the enumeration type.
        ty: TypeId,
        /// Referenced member name.
        member: String,
        /// Source span.
        span: Span,
    },
    /// A composite literal.
    Composite(CompositeLit),
    /// Any expression present in source but not statically decodable.
    Opaque {
        /// Resolved type, when the loader knew it.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ty: Option<TypeId>,
        /// Source span.
        span: Span,
    },
}

impl Expr {
    /// Returns the source span of this expression.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Bool { span, .. }
            | Self::Int { span, .. }
            | Self::Str { span, .. }
            | Self::EnumMember { span, .. }
            | Self::Opaque { span, .. } => *span,
            Self::Composite(lit) => lit.span,
        }
    }

    /// Returns the folded boolean value, if this is a boolean constant.
    #[must_use]
    pub fn bool_value(&self) -> Option<bool> {
        match self {
            Self::Bool { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Returns the folded integer value, if this is an integer constant.
    #[must_use]
    pub fn int_value(&self) -> Option<i64> {
        match self {
            Self::Int { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Returns the folded string value, if this is a string constant.
    #[must_use]
    pub fn str_value(&self) -> Option<&str> {
        match self {
            Self::Str { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns the composite literal, if this is one.
    #[must_use]
    pub fn as_composite(&self) -> Option<&CompositeLit> {
        match self {
            Self::Composite(lit) => Some(lit),
            _ => None,
        }
    }
}

/// A composite literal: a typed collection of elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeLit {
    /// Resolved type of the literal.
    pub ty: ResolvedType,
    /// Elements in source order.
    #[serde(default)]
    pub elems: Vec<Element>,
    /// Source span of the whole literal.
    pub span: Span,
}

/// One element of a composite literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    /// A keyed element (struct field or map entry).
    KeyValue {
        /// Key expression (field names and map keys are lowered to strings).
        key: Expr,
        /// Value expression.
        value: Expr,
    },
    /// An unkeyed element.
    Positional {
        /// Value expression.
        value: Expr,
    },
}
