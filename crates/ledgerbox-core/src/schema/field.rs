//! Field descriptors and record schemas.
//!
//! A [`Schema`] is an ordered, static table of [`FieldDescriptor`]s. Both the
//! validator and the field describer read these tables directly, so adding a
//! field to a model is a one-line change in the model's schema file.

/// Semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldType {
    /// A string value.
    String,
    /// A JSON number.
    Number,
    /// A list of strings; individual elements may be null.
    StringList,
    /// A list of nested records validated against another schema.
    Records(&'static Schema),
}

impl FieldType {
    /// Type name used in validation errors.
    pub fn expected(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::StringList => "array of strings",
            FieldType::Records(_) => "array of objects",
        }
    }

    /// Whether this is one of the list types.
    pub fn is_list(&self) -> bool {
        matches!(self, FieldType::StringList | FieldType::Records(_))
    }
}

/// What happens when a field is absent or null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Omit the field from the normalized record.
    NullableOptional,
    /// Emit the type's zero value: `""` for strings, `[]` for lists.
    DefaultOnMissing,
}

/// Description of a single field in a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    /// Field name as it appears on the wire.
    pub name: &'static str,
    /// Semantic type.
    pub field_type: FieldType,
    /// Missing-value policy.
    pub policy: Policy,
    /// Accept numbers and booleans and render them as strings.
    pub coerce: bool,
}

impl FieldDescriptor {
    const fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            policy: Policy::NullableOptional,
            coerce: false,
        }
    }

    /// Nullable-optional string field.
    pub const fn string(name: &'static str) -> Self {
        Self::new(name, FieldType::String)
    }

    /// Nullable-optional string field that coerces scalars (dates, amounts).
    pub const fn coerced(name: &'static str) -> Self {
        Self {
            coerce: true,
            ..Self::new(name, FieldType::String)
        }
    }

    /// Nullable-optional number field.
    pub const fn number(name: &'static str) -> Self {
        Self::new(name, FieldType::Number)
    }

    /// Nullable-optional list of strings.
    pub const fn string_list(name: &'static str) -> Self {
        Self::new(name, FieldType::StringList)
    }

    /// Nullable-optional list of nested records.
    pub const fn records(name: &'static str, schema: &'static Schema) -> Self {
        Self::new(name, FieldType::Records(schema))
    }

    /// Switch the field to default-on-missing.
    pub const fn or_default(self) -> Self {
        Self {
            policy: Policy::DefaultOnMissing,
            ..self
        }
    }
}

/// An ordered record schema.
#[derive(Debug, PartialEq)]
pub struct Schema {
    /// Record name, used in diagnostics.
    pub name: &'static str,
    /// Fields in output order.
    pub fields: &'static [FieldDescriptor],
}

impl Schema {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in schema order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
