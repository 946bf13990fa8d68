use std::collections::HashSet;

use recordgen_schema::{Definition, FieldKind};

use crate::error::CompileError;

/// Returns `Ok(())` if the batch is well formed, or the first problem found.
///
/// The resolver itself never calls this: it falls back to the input order on
/// broken batches instead of blocking the pipeline. Callers that want hard
/// guarantees (the CLI `check` command, `order --strict`) run it up front.
pub fn verify_definitions(definitions: &[Definition]) -> Result<(), CompileError> {
    if definitions.is_empty() {
        return Err(CompileError::EmptyBatch);
    }

    // 1) Identifiers must be unique within the batch
    let mut identifiers: HashSet<&str> = HashSet::new();
    for def in definitions {
        if !identifiers.insert(def.identifier.as_str()) {
            return Err(CompileError::DuplicateIdentifier(def.identifier.clone()));
        }
    }

    // 2) Every lookup must point at an identifier in the batch.
    //    Self-references are legal.
    for def in definitions {
        for field in &def.fields {
            if field.kind != FieldKind::AppLookup {
                continue;
            }
            let Some(target) = field.reference.as_deref() else {
                continue;
            };
            if !identifiers.contains(target) {
                return Err(CompileError::UnknownReference {
                    field: format!("{}.{}", def.identifier, field.name),
                    target: target.to_owned(),
                });
            }
        }
    }

    Ok(())
}
