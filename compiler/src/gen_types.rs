use std::collections::HashMap;

use recordgen_schema::{FieldKind, MaterializedDefinition, MaterializedField};

use crate::doc::{Document, Item, Property, RecordInterface, TsType};
use crate::error::CompileError;
use crate::names;

pub const TYPES_HEADER: &str = "AUTOMATICALLY GENERATED TYPES - DO NOT EDIT";

/// Maps a field's kind to the TypeScript type it surfaces as. Total:
/// unrecognized kinds degrade to `string`, never to an error.
fn map_kind(field: &MaterializedField) -> TsType {
    match &field.kind {
        FieldKind::Number => TsType::Number,
        FieldKind::Bool => TsType::Boolean,
        // The remote service delivers dates as ISO strings
        FieldKind::Date | FieldKind::DateTime => TsType::String,
        FieldKind::Select => {
            if field.options.is_empty() {
                TsType::String
            } else {
                TsType::Union(field.options.clone())
            }
        }
        // Lookups travel as opaque record URLs
        FieldKind::AppLookup => TsType::String,
        FieldKind::Text | FieldKind::Other(_) => TsType::String,
    }
}

/// The inline note attached to date-like and lookup fields. A lookup whose
/// target id does not reverse-resolve gets the generic wording instead.
fn field_note(field: &MaterializedField, type_names: &HashMap<&str, String>) -> Option<String> {
    match &field.kind {
        FieldKind::Date | FieldKind::DateTime => {
            Some("Format: YYYY-MM-DD or ISO string".to_owned())
        }
        FieldKind::AppLookup => {
            let target = field
                .reference_id
                .as_deref()
                .and_then(|id| type_names.get(id));
            Some(match target {
                Some(name) => format!("lookup -> URL of a '{}' record", name),
                None => "lookup -> URL of a record".to_owned(),
            })
        }
        _ => None,
    }
}

/// Compiles the batch into the types document: one record interface per
/// definition (in batch order), the exported id lookup table, and one
/// projected `Create*` alias per definition.
pub fn compile_types(batch: &[MaterializedDefinition]) -> Result<String, CompileError> {
    if batch.is_empty() {
        return Err(CompileError::EmptyBatch);
    }

    // record_type_id -> generated type name, built once over the whole batch
    // so lookup notes always agree with the interface names.
    let type_names: HashMap<&str, String> = batch
        .iter()
        .map(|def| (def.record_type_id.as_str(), names::type_name(&def.identifier)))
        .collect();

    let mut doc = Document::new();
    doc.push(Item::Comment(TYPES_HEADER.to_owned()));
    doc.push(Item::Blank);

    for def in batch {
        let fields = def
            .fields
            .iter()
            .map(|field| Property {
                name:     field.name.clone(),
                ty:       map_kind(field),
                optional: true,
                note:     field_note(field, &type_names),
            })
            .collect();

        doc.push(Item::Interface(RecordInterface {
            name: names::type_name(&def.identifier),
            fields,
        }));
        doc.push(Item::Blank);
    }

    doc.push(Item::ConstTable {
        name:    "RECORD_TYPE_IDS".to_owned(),
        entries: batch
            .iter()
            .map(|def| (names::constant_name(&def.identifier), def.record_type_id.clone()))
            .collect(),
    });
    doc.push(Item::Blank);

    doc.push(Item::Comment("Helper types for creating new records".to_owned()));
    for def in batch {
        let name = names::type_name(&def.identifier);
        doc.push(Item::TypeAlias {
            name:   format!("Create{}", name),
            target: format!("{}['fields']", name),
        });
    }

    Ok(doc.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, kind: FieldKind) -> MaterializedField {
        MaterializedField {
            name: name.to_owned(),
            kind,
            label: name.to_owned(),
            options: vec![],
            reference_id: None,
        }
    }

    fn def(identifier: &str, id: &str, fields: Vec<MaterializedField>) -> MaterializedDefinition {
        MaterializedDefinition {
            identifier: identifier.to_owned(),
            name: identifier.to_owned(),
            record_type_id: id.to_owned(),
            fields,
        }
    }

    #[test]
    fn test_empty_batch_is_fatal() {
        assert!(matches!(compile_types(&[]), Err(CompileError::EmptyBatch)));
    }

    #[test]
    fn test_unrecognized_kind_degrades_to_string() {
        let batch = vec![def(
            "files",
            "F1",
            vec![field("scan", FieldKind::Other("file/signature".to_owned()))],
        )];
        let types = compile_types(&batch).unwrap();
        assert!(types.contains("scan?: string;"));
    }

    #[test]
    fn test_select_options_become_a_literal_union() {
        let mut size = field("size", FieldKind::Select);
        size.options = vec!["small".to_owned(), "large".to_owned()];
        let batch = vec![def("teams", "T1", vec![size, field("kind", FieldKind::Select)])];

        let types = compile_types(&batch).unwrap();
        assert!(types.contains("size?: 'small' | 'large';"));
        // Empty enumeration falls back to string
        assert!(types.contains("kind?: string;"));
    }

    #[test]
    fn test_date_fields_carry_a_format_note() {
        let batch = vec![def("logs", "L1", vec![field("day", FieldKind::Date)])];
        let types = compile_types(&batch).unwrap();
        assert!(types.contains("day?: string; // Format: YYYY-MM-DD or ISO string"));
    }

    #[test]
    fn test_lookup_note_names_the_resolved_target_type() {
        let mut lead = field("lead", FieldKind::AppLookup);
        lead.reference_id = Some("E1".to_owned());
        let mut ghost = field("ghost", FieldKind::AppLookup);
        ghost.reference_id = Some("X9".to_owned());

        let batch = vec![
            def("employees", "E1", vec![]),
            def("teams", "T1", vec![lead, ghost]),
        ];
        let types = compile_types(&batch).unwrap();

        assert!(types.contains("lead?: string; // lookup -> URL of a 'Employees' record"));
        // Unresolvable target id degrades to the generic note
        assert!(types.contains("ghost?: string; // lookup -> URL of a record"));
    }

    #[test]
    fn test_create_alias_projects_the_fields_shape() {
        let batch = vec![def("workout_logs", "W1", vec![])];
        let types = compile_types(&batch).unwrap();
        assert!(types.contains("export type CreateWorkoutLogs = WorkoutLogs['fields'];"));
    }

    #[test]
    fn test_constant_table_lists_every_definition() {
        let batch = vec![def("employees", "E1", vec![]), def("teams", "T1", vec![])];
        let types = compile_types(&batch).unwrap();
        assert!(types.contains("EMPLOYEES: 'E1',"));
        assert!(types.contains("TEAMS: 'T1',"));
    }
}
