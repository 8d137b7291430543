use crate::config::NamingTables;
use crate::error::TransformError;
use crate::ir::{
    GeneratedEnum, GeneratedEnumMember, GeneratedField, GeneratedRecord, GeneratedType,
};
use crate::parse::schema::{SchemaDocument, TypeDescriptor, TypeKind};

use super::comment::synthesize;
use super::name_normalizer::{apply_acronyms, to_property_name};
use super::type_mapper;

/// Walk every schema type and accumulate the declarations to generate, in
/// schema order. The first structural error aborts the whole walk; there is
/// no partial output.
pub fn emit(
    doc: &SchemaDocument,
    tables: &NamingTables,
) -> Result<Vec<GeneratedType>, TransformError> {
    let mut out = Vec::new();

    for t in &doc.schema.types {
        if t.is_introspection() {
            continue;
        }

        match t.kind {
            TypeKind::Object | TypeKind::Interface => {
                // Generic Connection and Edge types are pre-implemented;
                // generating them would introduce illegal cycles.
                if is_pagination_shape(&t.name) {
                    continue;
                }
                out.push(GeneratedType::Record(emit_record(t, tables)?));
            }
            TypeKind::Enum => {
                if tables.enum_skip.iter().any(|s| s == &t.name) {
                    continue;
                }
                out.push(GeneratedType::Enum(emit_enum(t, tables)));
            }
            // Scalars, unions, and input objects have no standalone
            // declaration.
            _ => {}
        }
    }

    Ok(out)
}

fn is_pagination_shape(name: &str) -> bool {
    name.ends_with("Connection") || name.ends_with("Edge")
}

fn emit_record(
    t: &TypeDescriptor,
    tables: &NamingTables,
) -> Result<GeneratedRecord, TransformError> {
    let mut fields = Vec::with_capacity(t.fields().len());

    for f in t.fields() {
        let field_type = type_mapper::resolve(&t.name, f, tables)?;
        let property_name = to_property_name(&f.name, tables);
        let doc = f
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(|d| synthesize(&property_name, d));

        fields.push(GeneratedField {
            property_name,
            source_name: f.name.clone(),
            field_type,
            doc,
            deprecated: f.is_deprecated,
        });
    }

    let name = apply_acronyms(&t.name, tables);
    let doc = type_doc(&name, t.description.as_deref());

    Ok(GeneratedRecord { name, doc, fields })
}

fn emit_enum(t: &TypeDescriptor, tables: &NamingTables) -> GeneratedEnum {
    let members = t
        .enum_values()
        .iter()
        .map(|v| GeneratedEnumMember {
            name: to_property_name(&v.name.to_lowercase(), tables),
            literal: v.name.clone(),
            deprecated: v.is_deprecated,
        })
        .collect();

    GeneratedEnum {
        name: t.name.clone(),
        doc: type_doc(&t.name, t.description.as_deref()),
        members,
    }
}

fn type_doc(name: &str, description: Option<&str>) -> Option<String> {
    description
        .filter(|d| !d.is_empty())
        .map(|d| format!("{name}: {d}"))
}
