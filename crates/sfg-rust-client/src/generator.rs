use sfg_core::ir::GeneratedType;
use sfg_core::{CodeGenerator, GeneratedFile};

use crate::EmitError;
use crate::emitters;

/// Renders the walker's declarations into a single `types.rs` artifact.
pub struct RustClientGenerator;

impl CodeGenerator for RustClientGenerator {
    type Error = EmitError;

    fn generate(&self, types: &[GeneratedType]) -> Result<Vec<GeneratedFile>, EmitError> {
        let content = emitters::types::emit_types(types)?;
        Ok(vec![GeneratedFile {
            path: "types.rs".to_string(),
            content,
        }])
    }
}
