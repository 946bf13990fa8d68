#![cfg(test)]

use recordgen::{
    generate, order, parse_definitions, parse_materialized, MaterializationContext,
    ServiceOptions,
};

const DEFINITIONS: &str = r#"
{
  "apps": [
    {
      "name": "Teams",
      "identifier": "teams",
      "fields": [
        { "name": "lead", "fulltype": "applookup/select", "label": "Lead", "reference": "employees" }
      ]
    },
    {
      "name": "Employees",
      "identifier": "employees",
      "fields": [
        { "name": "fullname", "fulltype": "string/text", "label": "Full name", "required": true }
      ]
    }
  ]
}
"#;

#[test]
fn test_parse_order_materialize_generate() {
    let definitions = parse_definitions(DEFINITIONS).expect("parse failed");
    let ordered = order(&definitions);
    assert_eq!(ordered[0].identifier, "employees");
    assert_eq!(ordered[1].identifier, "teams");

    let mut ctx = MaterializationContext::new();
    for (i, def) in ordered.iter().enumerate() {
        ctx.materialize(def, format!("id-{}", i));
    }

    let artifact = generate(&ctx.into_batch(), &ServiceOptions::default()).expect("generate failed");
    assert_eq!(artifact.covered, vec!["Employees", "Teams"]);
    assert!(artifact.types.contains("export interface Employees {"));
    assert!(artifact.service.contains("static async getTeam(id: string)"));
}

#[test]
fn test_parse_materialized_envelope() {
    let metadata = r#"
    {
      "apps": [
        {
          "identifier": "employees",
          "name": "Employees",
          "record_type_id": "E1",
          "fields": [
            { "name": "fullname", "fulltype": "string/text", "label": "Full name" }
          ]
        }
      ]
    }
    "#;

    let batch = parse_materialized(metadata).expect("parse failed");
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].record_type_id, "E1");

    let artifact = generate(&batch, &ServiceOptions::default()).expect("generate failed");
    assert!(artifact.types.contains("EMPLOYEES: 'E1',"));
}

#[test]
fn test_generate_produces_nothing_on_empty_batch() {
    assert!(generate(&[], &ServiceOptions::default()).is_err());
}
