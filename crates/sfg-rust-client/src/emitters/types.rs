use minijinja::{Environment, context};
use sfg_core::ir::{FieldType, GeneratedEnum, GeneratedField, GeneratedRecord, GeneratedType};

use crate::EmitError;
use crate::type_mapper::field_decl_type;

/// Emit `types.rs` containing every generated record and enumeration.
pub fn emit_types(types: &[GeneratedType]) -> Result<String, EmitError> {
    let mut env = Environment::new();
    env.add_template("types.rs.j2", include_str!("../../templates/types.rs.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("types.rs.j2").expect("template was just added");

    let ctx_types: Vec<_> = types.iter().map(type_to_ctx).collect();

    let rendered = tmpl.render(context! {
        types => ctx_types,
        uses_datetime => any_field(types, |t| matches!(t, FieldType::DateTime)),
        uses_connection => any_field(types, |t| matches!(t, FieldType::Connection(_))),
    })?;

    Ok(rendered)
}

fn type_to_ctx(generated: &GeneratedType) -> minijinja::Value {
    match generated {
        GeneratedType::Record(r) => record_to_ctx(r),
        GeneratedType::Enum(e) => enum_to_ctx(e),
    }
}

fn record_to_ctx(record: &GeneratedRecord) -> minijinja::Value {
    let fields: Vec<minijinja::Value> = record
        .fields
        .iter()
        .map(|f| {
            context! {
                name => f.property_name.clone(),
                wire_name => f.source_name.clone(),
                decl_type => field_decl_type(&f.field_type),
                doc_lines => field_doc_lines(f),
            }
        })
        .collect();

    context! {
        kind => "record",
        name => record.name.clone(),
        doc_lines => doc_lines(record.doc.as_deref()),
        fields => fields,
    }
}

fn enum_to_ctx(generated: &GeneratedEnum) -> minijinja::Value {
    let members: Vec<minijinja::Value> = generated
        .members
        .iter()
        .map(|m| {
            context! {
                name => m.name.clone(),
                literal => m.literal.clone(),
            }
        })
        .collect();

    context! {
        kind => "enum",
        name => generated.name.clone(),
        doc_lines => doc_lines(generated.doc.as_deref()),
        members => members,
    }
}

fn doc_lines(doc: Option<&str>) -> Vec<String> {
    doc.map(|d| d.lines().map(String::from).collect())
        .unwrap_or_default()
}

fn field_doc_lines(field: &GeneratedField) -> Vec<String> {
    let mut lines = doc_lines(field.doc.as_deref());
    if field.deprecated {
        match lines.first_mut() {
            Some(first) => *first = format!("Deprecated: {first}"),
            None => lines.push("Deprecated.".to_string()),
        }
    }
    lines
}

fn any_field(types: &[GeneratedType], probe: fn(&FieldType) -> bool) -> bool {
    types.iter().any(|t| match t {
        GeneratedType::Record(r) => r.fields.iter().any(|f| mentions(&f.field_type, probe)),
        GeneratedType::Enum(_) => false,
    })
}

fn mentions(field_type: &FieldType, probe: fn(&FieldType) -> bool) -> bool {
    if probe(field_type) {
        return true;
    }
    match field_type {
        FieldType::List(inner) | FieldType::Connection(inner) => mentions(inner, probe),
        _ => false,
    }
}
