pub mod emitters;
pub mod generator;
pub mod type_mapper;

use thiserror::Error;

pub use generator::RustClientGenerator;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}
