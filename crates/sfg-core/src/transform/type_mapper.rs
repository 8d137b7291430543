use crate::config::NamingTables;
use crate::error::TransformError;
use crate::ir::FieldType;
use crate::parse::schema::{FieldDescriptor, TypeKind, TypeRef};

use super::name_normalizer::apply_acronyms;

/// NonNull/List wrappers nest at most this deep in the schemas we consume.
/// An observed bound, not a GraphQL guarantee; deeper nesting is a fatal
/// structural error.
pub const MAX_WRAPPER_DEPTH: usize = 3;

/// Resolve a field's type reference to its target type expression.
pub fn resolve(
    parent_type: &str,
    field: &FieldDescriptor,
    tables: &NamingTables,
) -> Result<FieldType, TransformError> {
    // Known cyclic references are forced to an opaque value.
    if tables.is_cycle_override(parent_type, &field.name) {
        log::info!(
            "note: {}.{} type set to an opaque value",
            parent_type,
            field.name
        );
        return Ok(FieldType::Opaque);
    }

    let type_ref = &field.type_ref;

    // Unions are flattened to plain strings.
    if type_ref.kind == Some(TypeKind::Union) || type_ref.inner_kind() == Some(TypeKind::Union) {
        return Ok(FieldType::String);
    }

    // A list at the outer or first wrapped level. The element's named type
    // sits further down the wrapper chain.
    if type_ref.kind == Some(TypeKind::List) || type_ref.inner_kind() == Some(TypeKind::List) {
        let element =
            list_element_name(type_ref).ok_or_else(|| TransformError::ListElementUnresolved {
                type_name: parent_type.to_string(),
                field: field.name.clone(),
                max_depth: MAX_WRAPPER_DEPTH,
            })?;
        return Ok(FieldType::List(Box::new(named_type(element, tables))));
    }

    let name = terminal_name(type_ref, MAX_WRAPPER_DEPTH).ok_or_else(|| {
        TransformError::TerminalTypeNotFound {
            type_name: parent_type.to_string(),
            field: field.name.clone(),
            max_depth: MAX_WRAPPER_DEPTH,
        }
    })?;

    Ok(named_type(name, tables))
}

/// Map a named type through the scalar table, the enum deny-list, and the
/// Connection convention, falling back to a reference by name.
fn named_type(name: &str, tables: &NamingTables) -> FieldType {
    if let Some(scalar) = scalar_type(name) {
        return scalar;
    }

    // Skipped enums are generated as plain strings.
    if tables.enum_skip.iter().any(|s| s == name) {
        return FieldType::String;
    }

    let name = apply_acronyms(name, tables);

    // Generic Connection types are pre-implemented; a `FooConnection`
    // reference becomes the container parameterized by `Foo`.
    if let Some(prefix) = name.strip_suffix("Connection")
        && !prefix.is_empty()
    {
        let node = if prefix == "String" {
            FieldType::String
        } else {
            FieldType::Ref(prefix.to_string())
        };
        return FieldType::Connection(Box::new(node));
    }

    FieldType::Ref(name)
}

fn scalar_type(name: &str) -> Option<FieldType> {
    let resolved = match name {
        "Boolean" => FieldType::Bool,
        "Int" => FieldType::Int,
        "Float" | "Decimal" => FieldType::Float,
        "ID" | "String" | "HTML" | "Money" | "URL" => FieldType::String,
        "JSON" => FieldType::Json,
        "DateTime" => FieldType::DateTime,
        _ => return None,
    };
    Some(resolved)
}

/// Unwrap modifiers until a named type appears, within the depth bound.
fn terminal_name(type_ref: &TypeRef, depth: usize) -> Option<&str> {
    if let Some(name) = type_ref.name.as_deref()
        && !name.is_empty()
    {
        return Some(name);
    }
    if depth == 0 {
        return None;
    }
    terminal_name(type_ref.of_type.as_deref()?, depth - 1)
}

/// Locate the list wrapper (outer or first wrapped level), then descend to
/// the first named type below it.
fn list_element_name(type_ref: &TypeRef) -> Option<&str> {
    let list_node = if type_ref.kind == Some(TypeKind::List) {
        type_ref
    } else {
        type_ref.of_type.as_deref()?
    };
    terminal_name(list_node.of_type.as_deref()?, MAX_WRAPPER_DEPTH - 1)
}
