use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("schema document has no query root")]
    MissingQueryRoot,
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(
        "no terminal named type for field {type_name}.{field} within {max_depth} wrapper levels"
    )]
    TerminalTypeNotFound {
        type_name: String,
        field: String,
        max_depth: usize,
    },

    #[error(
        "no element type for list field {type_name}.{field} within {max_depth} wrapper levels"
    )]
    ListElementUnresolved {
        type_name: String,
        field: String,
        max_depth: usize,
    },

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read naming tables: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse naming tables: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
