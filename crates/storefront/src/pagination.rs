use serde::{Deserialize, Serialize};

/// A container for paginating through multiple objects: a list of edges,
/// whose nodes carry the object data. Every `*Connection` field in the
/// generated types deserializes into this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Connection<T> {
    /// A list of edges.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<Edge<T>>,

    /// A set of data to aid in pagination.
    #[serde(rename = "pageInfo", default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub page_info: serde_json::Map<String, serde_json::Value>,
}

/// A node/cursor pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    /// A cursor for use in pagination.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cursor: String,

    /// The item at the end of the edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_wire_shape() {
        let body = r#"{
            "edges": [
                { "cursor": "eyJsYXN0X2lkIjo1fQ==", "node": "first" },
                { "cursor": "eyJsYXN0X2lkIjo2fQ==", "node": "second" }
            ],
            "pageInfo": { "hasNextPage": false }
        }"#;

        let connection: Connection<String> = serde_json::from_str(body).unwrap();
        assert_eq!(connection.edges.len(), 2);
        assert_eq!(connection.edges[0].node.as_deref(), Some("first"));
        assert_eq!(
            connection.page_info.get("hasNextPage"),
            Some(&serde_json::Value::Bool(false))
        );
    }

    #[test]
    fn missing_members_default() {
        let connection: Connection<String> = serde_json::from_str("{}").unwrap();
        assert!(connection.edges.is_empty());
        assert!(connection.page_info.is_empty());
    }
}
