use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::def::{Definition, FieldKind};

/// A batch of materialized definitions, the JSON envelope handed to the
/// code generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterializedBatch {
    pub apps: Vec<MaterializedDefinition>,
}

/// A definition after remote persistence: the service has assigned it an
/// opaque `record_type_id`, and every lookup field carries the target's id
/// where it could be resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterializedDefinition {
    pub identifier:     String,
    pub name:           String,
    pub record_type_id: String,
    #[serde(default)]
    pub fields:         Vec<MaterializedField>,
}

/// One field of a materialized definition. `reference_id` is the resolved
/// target `record_type_id` for lookup fields, or `None` when the target was
/// unknown at materialization time (a degradation, not an error).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterializedField {
    pub name:         String,
    #[serde(rename = "fulltype")]
    pub kind:         FieldKind,
    pub label:        String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options:      Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
}

/// Accumulates `identifier -> record_type_id` assignments as definitions are
/// persisted in resolver order, and resolves each definition's lookup fields
/// against the assignments made so far.
///
/// Threading this context through the persistence loop keeps the resolver and
/// the generator pure: neither ever sees shared mutable state.
#[derive(Debug, Default)]
pub struct MaterializationContext {
    ids:   HashMap<String, String>,
    batch: Vec<MaterializedDefinition>,
}

impl MaterializationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id assigned to `identifier` so far, if any.
    pub fn record_type_id(&self, identifier: &str) -> Option<&str> {
        self.ids.get(identifier).map(String::as_str)
    }

    /// Register `record_type_id` for `def` and resolve its lookup fields.
    ///
    /// The definition's own id is registered before its fields are walked, so
    /// a self-referencing lookup resolves to the id assigned in this very
    /// step. Lookups whose target has not been materialized yet stay
    /// unresolved.
    pub fn materialize(
        &mut self,
        def: &Definition,
        record_type_id: impl Into<String>,
    ) -> &MaterializedDefinition {
        let record_type_id = record_type_id.into();
        self.ids.insert(def.identifier.clone(), record_type_id.clone());

        let fields = def
            .fields
            .iter()
            .map(|field| MaterializedField {
                name:         field.name.clone(),
                kind:         field.kind.clone(),
                label:        field.label.clone(),
                options:      field.options.clone(),
                reference_id: match (&field.kind, field.reference.as_deref()) {
                    (FieldKind::AppLookup, Some(target)) => self.ids.get(target).cloned(),
                    _ => None,
                },
            })
            .collect();

        self.batch.push(MaterializedDefinition {
            identifier: def.identifier.clone(),
            name: def.name.clone(),
            record_type_id,
            fields,
        });
        self.batch.last().unwrap()
    }

    /// The materialized definitions, in the order they were registered.
    pub fn into_batch(self) -> Vec<MaterializedDefinition> {
        self.batch
    }
}
