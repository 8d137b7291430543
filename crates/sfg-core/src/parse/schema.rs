use serde::Deserialize;

/// Prefix marking introspection meta-types (`__Schema`, `__Type`, ...).
/// Types carrying it are never emitted.
pub const INTROSPECTION_PREFIX: &str = "__";

/// The kind discriminator used by both named types and type-modifier wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

/// The root introspection payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaDocument {
    #[serde(rename = "__schema")]
    pub schema: SchemaBody,
}

/// The `__schema` object: root operation names plus every declared type.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaBody {
    #[serde(rename = "queryType")]
    pub query_type: RootTypeName,

    #[serde(rename = "mutationType", default)]
    pub mutation_type: Option<RootTypeName>,

    #[serde(rename = "subscriptionType", default)]
    pub subscription_type: Option<serde_json::Value>,

    pub types: Vec<TypeDescriptor>,
}

/// Name of a root operation type.
#[derive(Debug, Clone, Deserialize)]
pub struct RootTypeName {
    pub name: String,
}

/// One named GraphQL type from the schema.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDescriptor {
    pub kind: TypeKind,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    // null for non-object kinds in the wire format
    #[serde(default)]
    fields: Option<Vec<FieldDescriptor>>,

    #[serde(rename = "enumValues", default)]
    enum_values: Option<Vec<EnumValueDescriptor>>,
}

impl TypeDescriptor {
    pub fn is_introspection(&self) -> bool {
        self.name.starts_with(INTROSPECTION_PREFIX)
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        self.fields.as_deref().unwrap_or_default()
    }

    pub fn enum_values(&self) -> &[EnumValueDescriptor] {
        self.enum_values.as_deref().unwrap_or_default()
    }
}

/// One field on an object or interface type.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "isDeprecated", default)]
    pub is_deprecated: bool,

    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

/// A (possibly wrapped) type reference. NonNull and List modifiers nest via
/// `of_type`; exactly one terminal named type sits at the bottom.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeRef {
    #[serde(default)]
    pub kind: Option<TypeKind>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "ofType", default)]
    pub of_type: Option<Box<TypeRef>>,
}

impl TypeRef {
    /// The kind one wrapper level down, if any.
    pub fn inner_kind(&self) -> Option<TypeKind> {
        self.of_type.as_ref().and_then(|t| t.kind)
    }
}

/// One declared enum member.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumValueDescriptor {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "isDeprecated", default)]
    pub is_deprecated: bool,
}
