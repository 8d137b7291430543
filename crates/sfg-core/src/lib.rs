pub mod config;
pub mod error;
pub mod ir;
pub mod parse;
pub mod transform;

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for code generators that render the walker's output into files.
pub trait CodeGenerator {
    type Error: std::error::Error;
    fn generate(
        &self,
        types: &[ir::GeneratedType],
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
