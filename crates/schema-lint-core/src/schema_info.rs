//! Extraction of schema literal fields into a structured semantic record.

use std::collections::HashMap;

use crate::program::{CompositeLit, Element, Expr};
use crate::registry::TypeRegistry;

/// The closed set of recognized schema fields.
///
/// Field access is a fixed lookup table over this enumeration; unrecognized
/// keys are ignored rather than recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaField {
    /// `AtLeastOneOf` marker field.
    AtLeastOneOf,
    /// `Computed` boolean field.
    Computed,
    /// `ComputedWhen` marker field.
    ComputedWhen,
    /// `ConfigMode` marker field.
    ConfigMode,
    /// `ConflictsWith` marker field.
    ConflictsWith,
    /// `Default` marker field (a default-value provider).
    Default,
    /// `DefaultFunc` marker field.
    DefaultFunc,
    /// `Deprecated` string field.
    Deprecated,
    /// `Description` string field.
    Description,
    /// `DiffSuppressFunc` marker field.
    DiffSuppressFunc,
    /// `Elem` marker field (the nested element schema).
    Elem,
    /// `ExactlyOneOf` marker field.
    ExactlyOneOf,
    /// `ForceNew` boolean field.
    ForceNew,
    /// `InputDefault` string field.
    InputDefault,
    /// `MaxItems` integer field.
    MaxItems,
    /// `MinItems` integer field.
    MinItems,
    /// `Optional` boolean field.
    Optional,
    /// `PromoteSingle` marker field.
    PromoteSingle,
    /// `Removed` string field.
    Removed,
    /// `Required` boolean field.
    Required,
    /// `Sensitive` boolean field.
    Sensitive,
    /// `Set` marker field (a custom set hash function).
    Set,
    /// `StateFunc` marker field.
    StateFunc,
    /// `Type` field, holding the declared value type.
    Type,
    /// `ValidateFunc` marker field.
    ValidateFunc,
}

impl SchemaField {
    /// All recognized fields.
    pub const ALL: [SchemaField; 25] = [
        Self::AtLeastOneOf,
        Self::Computed,
        Self::ComputedWhen,
        Self::ConfigMode,
        Self::ConflictsWith,
        Self::Default,
        Self::DefaultFunc,
        Self::Deprecated,
        Self::Description,
        Self::DiffSuppressFunc,
        Self::Elem,
        Self::ExactlyOneOf,
        Self::ForceNew,
        Self::InputDefault,
        Self::MaxItems,
        Self::MinItems,
        Self::Optional,
        Self::PromoteSingle,
        Self::Removed,
        Self::Required,
        Self::Sensitive,
        Self::Set,
        Self::StateFunc,
        Self::Type,
        Self::ValidateFunc,
    ];

    /// Returns the field for a source-level key name, if recognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "AtLeastOneOf" => Some(Self::AtLeastOneOf),
            "Computed" => Some(Self::Computed),
            "ComputedWhen" => Some(Self::ComputedWhen),
            "ConfigMode" => Some(Self::ConfigMode),
            "ConflictsWith" => Some(Self::ConflictsWith),
            "Default" => Some(Self::Default),
            "DefaultFunc" => Some(Self::DefaultFunc),
            "Deprecated" => Some(Self::Deprecated),
            "Description" => Some(Self::Description),
            "DiffSuppressFunc" => Some(Self::DiffSuppressFunc),
            "Elem" => Some(Self::Elem),
            "ExactlyOneOf" => Some(Self::ExactlyOneOf),
            "ForceNew" => Some(Self::ForceNew),
            "InputDefault" => Some(Self::InputDefault),
            "MaxItems" => Some(Self::MaxItems),
            "MinItems" => Some(Self::MinItems),
            "Optional" => Some(Self::Optional),
            "PromoteSingle" => Some(Self::PromoteSingle),
            "Removed" => Some(Self::Removed),
            "Required" => Some(Self::Required),
            "Sensitive" => Some(Self::Sensitive),
            "Set" => Some(Self::Set),
            "StateFunc" => Some(Self::StateFunc),
            "Type" => Some(Self::Type),
            "ValidateFunc" => Some(Self::ValidateFunc),
            _ => None,
        }
    }

    /// Returns the source-level key name of this field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AtLeastOneOf => "AtLeastOneOf",
            Self::Computed => "Computed",
            Self::ComputedWhen => "ComputedWhen",
            Self::ConfigMode => "ConfigMode",
            Self::ConflictsWith => "ConflictsWith",
            Self::Default => "Default",
            Self::DefaultFunc => "DefaultFunc",
            Self::Deprecated => "Deprecated",
            Self::Description => "Description",
            Self::DiffSuppressFunc => "DiffSuppressFunc",
            Self::Elem => "Elem",
            Self::ExactlyOneOf => "ExactlyOneOf",
            Self::ForceNew => "ForceNew",
            Self::InputDefault => "InputDefault",
            Self::MaxItems => "MaxItems",
            Self::MinItems => "MinItems",
            Self::Optional => "Optional",
            Self::PromoteSingle => "PromoteSingle",
            Self::Removed => "Removed",
            Self::Required => "Required",
            Self::Sensitive => "Sensitive",
            Self::Set => "Set",
            Self::StateFunc => "StateFunc",
            Self::Type => "Type",
            Self::ValidateFunc => "ValidateFunc",
        }
    }
}

/// The key-value element that wrote a field.
#[derive(Debug, Clone, Copy)]
pub struct FieldEntry<'p> {
    /// Key expression of the element.
    pub key: &'p Expr,
    /// Value expression of the element.
    pub value: &'p Expr,
}

/// Per-literal table of which recognized fields were explicitly written.
///
/// An absent key means the field was never written; it is not defaulted to a
/// value. A field written more than once keeps the later occurrence.
#[derive(Debug, Clone, Default)]
pub struct FieldRecord<'p> {
    fields: HashMap<SchemaField, FieldEntry<'p>>,
}

impl<'p> FieldRecord<'p> {
    /// Builds the record from a scalar schema literal's key-value elements.
    /// Positional elements are invalid for this schema shape and skipped.
    #[must_use]
    pub fn from_literal(lit: &'p CompositeLit) -> Self {
        let mut fields = HashMap::new();
        for elem in &lit.elems {
            let Element::KeyValue { key, value } = elem else {
                continue;
            };
            let Some(field) = key.str_value().and_then(SchemaField::from_name) else {
                continue;
            };
            // Last write wins.
            fields.insert(field, FieldEntry { key, value });
        }
        Self { fields }
    }

    /// Returns the element that wrote `field`, if declared.
    #[must_use]
    pub fn get(&self, field: SchemaField) -> Option<&FieldEntry<'p>> {
        self.fields.get(&field)
    }

    /// Returns true if `field` was explicitly written.
    #[must_use]
    pub fn declares(&self, field: SchemaField) -> bool {
        self.fields.contains_key(&field)
    }
}

/// Decoded state of a typed schema field.
///
/// "Declared but unresolved" is distinct from "not declared": several rules
/// test whether a boolean field was explicitly written as its zero value,
/// which is observably different from the field being absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldValue<T> {
    /// The field was never written.
    #[default]
    Absent,
    /// The field was written, but its value is not a foldable constant.
    Unresolved,
    /// The field was written with a constant-folded value.
    Value(T),
}

impl<T> FieldValue<T> {
    /// Returns true if the field was written at all.
    #[must_use]
    pub fn is_declared(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Returns the decoded value, if resolved.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldValue<bool> {
    /// Returns true if the field was explicitly written as `false`.
    #[must_use]
    pub fn declares_zero_value(&self) -> bool {
        matches!(self, Self::Value(false))
    }

    /// Returns true if the field decodes to `true`.
    #[must_use]
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Value(true))
    }
}

/// Declared value type of a schema: the fixed 7-way enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// `TypeBool`
    Bool,
    /// `TypeFloat`
    Float,
    /// `TypeInt`
    Int,
    /// `TypeList`
    List,
    /// `TypeMap`
    Map,
    /// `TypeSet`
    Set,
    /// `TypeString`
    String,
}

impl ValueType {
    /// Maps an enumeration member name to a value type.
    #[must_use]
    pub fn from_member(member: &str) -> Option<Self> {
        match member {
            "TypeBool" => Some(Self::Bool),
            "TypeFloat" => Some(Self::Float),
            "TypeInt" => Some(Self::Int),
            "TypeList" => Some(Self::List),
            "TypeMap" => Some(Self::Map),
            "TypeSet" => Some(Self::Set),
            "TypeString" => Some(Self::String),
            _ => None,
        }
    }

    /// Returns the enumeration member name of this value type.
    #[must_use]
    pub fn member_name(self) -> &'static str {
        match self {
            Self::Bool => "TypeBool",
            Self::Float => "TypeFloat",
            Self::Int => "TypeInt",
            Self::List => "TypeList",
            Self::Map => "TypeMap",
            Self::Set => "TypeSet",
            Self::String => "TypeString",
        }
    }
}

/// Semantic view of a scalar schema literal, derived from its [`FieldRecord`].
///
/// Extraction is a pure function of the literal: re-extracting the same
/// literal yields an identical record and info.
#[derive(Debug, Clone)]
pub struct SchemaInfo<'p> {
    record: FieldRecord<'p>,
    /// Decoded `Computed` field.
    pub computed: FieldValue<bool>,
    /// Decoded `ForceNew` field.
    pub force_new: FieldValue<bool>,
    /// Decoded `Optional` field.
    pub optional: FieldValue<bool>,
    /// Decoded `Required` field.
    pub required: FieldValue<bool>,
    /// Decoded `Sensitive` field.
    pub sensitive: FieldValue<bool>,
    /// Decoded `MaxItems` field.
    pub max_items: FieldValue<i64>,
    /// Decoded `MinItems` field.
    pub min_items: FieldValue<i64>,
    /// Decoded `Description` field.
    pub description: FieldValue<String>,
    /// Declared value type, when the `Type` entry's expression statically
    /// resolves to the value-type enumeration. Never inferred.
    pub value_type: Option<ValueType>,
}

impl<'p> SchemaInfo<'p> {
    /// Extracts the semantic record from a classified scalar schema literal.
    #[must_use]
    pub fn from_literal(lit: &'p CompositeLit, registry: &TypeRegistry) -> Self {
        let record = FieldRecord::from_literal(lit);
        let value_type = decode_value_type(&record, registry);
        Self {
            computed: decode_bool(&record, SchemaField::Computed),
            force_new: decode_bool(&record, SchemaField::ForceNew),
            optional: decode_bool(&record, SchemaField::Optional),
            required: decode_bool(&record, SchemaField::Required),
            sensitive: decode_bool(&record, SchemaField::Sensitive),
            max_items: decode_int(&record, SchemaField::MaxItems),
            min_items: decode_int(&record, SchemaField::MinItems),
            description: decode_str(&record, SchemaField::Description),
            value_type,
            record,
        }
    }

    /// Returns the underlying field record.
    #[must_use]
    pub fn record(&self) -> &FieldRecord<'p> {
        &self.record
    }

    /// Returns true if `field` was explicitly written. For marker fields
    /// (Default, ValidateFunc, ...) presence of any expression counts as
    /// declared, foldable or not.
    #[must_use]
    pub fn declares(&self, field: SchemaField) -> bool {
        self.record.declares(field)
    }

    /// Returns true if the declared value type matches.
    #[must_use]
    pub fn is_type(&self, value_type: ValueType) -> bool {
        self.value_type == Some(value_type)
    }

    /// Returns true if the declared value type is one of the given.
    #[must_use]
    pub fn is_one_of_types(&self, value_types: &[ValueType]) -> bool {
        self.value_type
            .is_some_and(|vt| value_types.contains(&vt))
    }
}

fn decode_bool(record: &FieldRecord<'_>, field: SchemaField) -> FieldValue<bool> {
    match record.get(field) {
        None => FieldValue::Absent,
        Some(entry) => match entry.value.bool_value() {
            Some(v) => FieldValue::Value(v),
            None => FieldValue::Unresolved,
        },
    }
}

fn decode_int(record: &FieldRecord<'_>, field: SchemaField) -> FieldValue<i64> {
    match record.get(field) {
        None => FieldValue::Absent,
        Some(entry) => match entry.value.int_value() {
            Some(v) => FieldValue::Value(v),
            None => FieldValue::Unresolved,
        },
    }
}

fn decode_str(record: &FieldRecord<'_>, field: SchemaField) -> FieldValue<String> {
    match record.get(field) {
        None => FieldValue::Absent,
        Some(entry) => match entry.value.str_value() {
            Some(v) => FieldValue::Value(v.to_string()),
            None => FieldValue::Unresolved,
        },
    }
}

/// Resolves the declared value type: the `Type` entry's expression must be an
/// enumeration member whose resolved type equals the value-type enumeration
/// identity. Absence or type mismatch yields `None`, never a guess.
fn decode_value_type(record: &FieldRecord<'_>, registry: &TypeRegistry) -> Option<ValueType> {
    let entry = record.get(SchemaField::Type)?;
    match entry.value {
        Expr::EnumMember { ty, member, .. } if registry.is_value_type(ty) => {
            ValueType::from_member(member)
        }
        _ => None,
    }
}
