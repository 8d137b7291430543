use sfg_core::ir::FieldType;

/// Map a resolved `FieldType` to its Rust type string representation.
pub fn field_type_to_rust(field_type: &FieldType) -> String {
    match field_type {
        FieldType::Bool => "bool".to_string(),
        FieldType::Int => "i64".to_string(),
        FieldType::Float => "f64".to_string(),
        FieldType::String => "String".to_string(),
        FieldType::Json => "serde_json::Map<String, serde_json::Value>".to_string(),
        FieldType::DateTime => "DateTime<Utc>".to_string(),
        FieldType::Opaque => "serde_json::Value".to_string(),
        FieldType::List(inner) => format!("Vec<{}>", field_type_to_rust(inner)),
        FieldType::Connection(node) => format!("Connection<{}>", field_type_to_rust(node)),
        FieldType::Ref(name) => name.clone(),
    }
}

/// The declared type of a generated member. Every member is optional so that
/// absent values round-trip, and bare references are boxed so self- and
/// forward-references keep the containing type finite.
pub fn field_decl_type(field_type: &FieldType) -> String {
    match field_type {
        FieldType::Ref(name) => format!("Option<Box<{name}>>"),
        other => format!("Option<{}>", field_type_to_rust(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives() {
        assert_eq!(field_type_to_rust(&FieldType::Bool), "bool");
        assert_eq!(field_type_to_rust(&FieldType::Int), "i64");
        assert_eq!(field_type_to_rust(&FieldType::Float), "f64");
        assert_eq!(field_type_to_rust(&FieldType::String), "String");
        assert_eq!(field_type_to_rust(&FieldType::DateTime), "DateTime<Utc>");
        assert_eq!(
            field_type_to_rust(&FieldType::Json),
            "serde_json::Map<String, serde_json::Value>"
        );
        assert_eq!(field_type_to_rust(&FieldType::Opaque), "serde_json::Value");
    }

    #[test]
    fn list() {
        assert_eq!(
            field_type_to_rust(&FieldType::List(Box::new(FieldType::String))),
            "Vec<String>"
        );
        assert_eq!(
            field_type_to_rust(&FieldType::List(Box::new(FieldType::Ref(
                "Node".to_string()
            )))),
            "Vec<Node>"
        );
    }

    #[test]
    fn connection() {
        assert_eq!(
            field_type_to_rust(&FieldType::Connection(Box::new(FieldType::Ref(
                "Product".to_string()
            )))),
            "Connection<Product>"
        );
        assert_eq!(
            field_type_to_rust(&FieldType::Connection(Box::new(FieldType::String))),
            "Connection<String>"
        );
    }

    #[test]
    fn declared_types_are_optional() {
        assert_eq!(field_decl_type(&FieldType::String), "Option<String>");
        assert_eq!(
            field_decl_type(&FieldType::Ref("Blog".to_string())),
            "Option<Box<Blog>>"
        );
        assert_eq!(
            field_decl_type(&FieldType::List(Box::new(FieldType::String))),
            "Option<Vec<String>>"
        );
        assert_eq!(field_decl_type(&FieldType::Opaque), "Option<serde_json::Value>");
    }
}
