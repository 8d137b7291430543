/// A generator-ready declaration produced by the type graph walker.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedType {
    Record(GeneratedRecord),
    Enum(GeneratedEnum),
}

impl GeneratedType {
    pub fn name(&self) -> &str {
        match self {
            GeneratedType::Record(r) => &r.name,
            GeneratedType::Enum(e) => &e.name,
        }
    }
}

/// A record type with one member per schema field, in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRecord {
    pub name: String,
    pub doc: Option<String>,
    pub fields: Vec<GeneratedField>,
}

/// One member of a generated record.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedField {
    /// Normalized identifier the member is declared under.
    pub property_name: String,
    /// Original wire name, used as the serialization key.
    pub source_name: String,
    pub field_type: FieldType,
    pub doc: Option<String>,
    pub deprecated: bool,
}

/// An enumeration type with one string-valued constant per schema value.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedEnum {
    pub name: String,
    pub doc: Option<String>,
    pub members: Vec<GeneratedEnumMember>,
}

/// One enumeration constant: a normalized variant name carrying the verbatim
/// wire-format literal.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedEnumMember {
    pub name: String,
    pub literal: String,
    pub deprecated: bool,
}

/// The resolved target type expression for a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Bool,
    Int,
    Float,
    String,
    /// A generic string-keyed JSON map (the `JSON` scalar).
    Json,
    DateTime,
    /// An untyped JSON value; the escape valve for cycle overrides.
    Opaque,
    List(Box<FieldType>),
    /// The generic pagination container, parameterized by its node type.
    Connection(Box<FieldType>),
    /// A reference to another generated declaration by name.
    Ref(String),
}
