pub mod schema;

use crate::error::ParseError;
use schema::SchemaDocument;

/// Parse a GraphQL introspection response from JSON.
pub fn from_json(input: &str) -> Result<SchemaDocument, ParseError> {
    let doc: SchemaDocument = serde_json::from_str(input)?;
    validate_roots(&doc)?;
    Ok(doc)
}

fn validate_roots(doc: &SchemaDocument) -> Result<(), ParseError> {
    if doc.schema.query_type.name.is_empty() {
        return Err(ParseError::MissingQueryRoot);
    }
    Ok(())
}
