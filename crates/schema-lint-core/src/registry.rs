//! Registry of the target schema type identities.

use crate::program::TypeId;

/// Name of the schema struct type within the SDK module.
pub const TYPE_NAME_SCHEMA: &str = "Schema";

/// Name of the value-type enumeration within the SDK module.
pub const TYPE_NAME_VALUE_TYPE: &str = "ValueType";

/// Module path of the conventional provider SDK schema helpers.
pub const DEFAULT_SCHEMA_MODULE: &str = "example.com/provider-sdk/helper/schema";

/// Registry of fully-qualified type identities the classifier matches against.
///
/// Matching is always by post-resolution [`TypeId`] equality, never by the
/// spelling used at the literal site, so any import alias or re-export of the
/// schema type classifies identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRegistry {
    /// Identity of the schema struct type.
    pub schema: TypeId,
    /// Identity of the value-type enumeration.
    pub value_type: TypeId,
}

impl TypeRegistry {
    /// Creates a registry with explicit identities.
    #[must_use]
    pub fn new(schema: TypeId, value_type: TypeId) -> Self {
        Self { schema, value_type }
    }

    /// Creates a registry for an SDK rooted at `module`, using the
    /// conventional `Schema` / `ValueType` type names.
    #[must_use]
    pub fn for_module(module: &str) -> Self {
        Self {
            schema: TypeId::new(module, TYPE_NAME_SCHEMA),
            value_type: TypeId::new(module, TYPE_NAME_VALUE_TYPE),
        }
    }

    /// Returns true if `id` is the schema struct type.
    #[must_use]
    pub fn is_schema(&self, id: &TypeId) -> bool {
        *id == self.schema
    }

    /// Returns true if `id` is the value-type enumeration.
    #[must_use]
    pub fn is_value_type(&self, id: &TypeId) -> bool {
        *id == self.value_type
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::for_module(DEFAULT_SCHEMA_MODULE)
    }
}
