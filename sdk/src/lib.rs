//! recordgen
//!
//! Umbrella crate tying the schema model and the compiler together:
//!
//! - re-exports of the schema and compiler types,
//! - parsing helpers for the `{ "apps": [...] }` JSON envelopes, and
//! - [`generate`], the one-shot call producing the full artifact pair.

pub use recordgen_compiler::{
    compile_service, compile_types, order, order_strict, verify_definitions, CompileError,
    ServiceOptions,
};
pub use recordgen_schema::{
    Batch, Definition, FieldKind, FieldSpec, MaterializationContext, MaterializedBatch,
    MaterializedDefinition, MaterializedField,
};

/// The complete output of one generation run: both documents plus the names
/// of the definitions they cover. Regenerated wholesale on every run, never
/// patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedArtifact {
    pub types:   String,
    pub service: String,
    pub covered: Vec<String>,
}

/// Parse the `{ "apps": [...] }` definition envelope.
pub fn parse_definitions(json: &str) -> Result<Vec<Definition>, CompileError> {
    let batch: Batch = serde_json::from_str(json)?;
    Ok(batch.apps)
}

/// Parse the `{ "apps": [...] }` materialized metadata envelope.
pub fn parse_materialized(json: &str) -> Result<Vec<MaterializedDefinition>, CompileError> {
    let batch: MaterializedBatch = serde_json::from_str(json)?;
    Ok(batch.apps)
}

/// Compile both generated documents from one materialized batch.
///
/// Either both documents are produced or the error surfaces before any
/// output exists; there is no partial artifact.
pub fn generate(
    batch: &[MaterializedDefinition],
    options: &ServiceOptions,
) -> Result<GeneratedArtifact, CompileError> {
    let types = compile_types(batch)?;
    let service = compile_service(batch, options)?;
    Ok(GeneratedArtifact {
        types,
        service,
        covered: batch.iter().map(|def| def.name.clone()).collect(),
    })
}

pub mod error {
    pub use recordgen_compiler::error::CompileError;
}

pub mod schema {
    pub use recordgen_schema::*;
}
