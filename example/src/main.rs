// example/src/main.rs

use recordgen::{generate, order, verify_definitions, CompileError, ServiceOptions};
use recordgen_schema::{Definition, FieldKind, FieldSpec, MaterializationContext};

fn main() -> Result<(), CompileError> {
    // A deliberately shuffled batch: `teams` looks up `employees`, so the
    // resolver has to move `employees` first.
    let teams = Definition {
        name: "Teams".to_owned(),
        identifier: "teams".to_owned(),
        fields: vec![
            FieldSpec {
                name: "title".to_owned(),
                kind: FieldKind::Text,
                label: "Title".to_owned(),
                required: true,
                options: vec![],
                reference: None,
            },
            FieldSpec {
                name: "lead".to_owned(),
                kind: FieldKind::AppLookup,
                label: "Team lead".to_owned(),
                required: false,
                options: vec![],
                reference: Some("employees".to_owned()),
            },
        ],
    };

    let employees = Definition {
        name: "Employees".to_owned(),
        identifier: "employees".to_owned(),
        fields: vec![
            FieldSpec {
                name: "fullname".to_owned(),
                kind: FieldKind::Text,
                label: "Full name".to_owned(),
                required: true,
                options: vec![],
                reference: None,
            },
            FieldSpec {
                name: "level".to_owned(),
                kind: FieldKind::Select,
                label: "Level".to_owned(),
                required: false,
                options: vec!["junior".to_owned(), "senior".to_owned()],
                reference: None,
            },
            FieldSpec {
                name: "hired_on".to_owned(),
                kind: FieldKind::Date,
                label: "Hired on".to_owned(),
                required: false,
                options: vec![],
                reference: None,
            },
        ],
    };

    let definitions = vec![teams, employees];
    verify_definitions(&definitions)?;

    let ordered = order(&definitions);
    println!("Resolver order:");
    for def in &ordered {
        println!("  {}", def.identifier);
    }

    // Persisting the batch is a remote call per definition in real use; here
    // we just hand out ids in resolver order.
    let mut ctx = MaterializationContext::new();
    for (i, def) in ordered.iter().enumerate() {
        ctx.materialize(def, format!("id-{:04}", i + 1));
    }

    let artifact = generate(&ctx.into_batch(), &ServiceOptions::default())?;

    println!();
    println!("--- types document ---");
    println!("{}", artifact.types);
    println!("--- service document ---");
    println!("{}", artifact.service);
    println!("Covered: {}", artifact.covered.join(", "));

    Ok(())
}
