use std::collections::HashSet;

use recordgen_schema::Definition;

use crate::error::CompileError;

/// Orders definitions so that every lookup target appears before the
/// definitions that reference it.
///
/// Kahn's algorithm over the lookup graph; among simultaneously ready nodes
/// the one earliest in the input wins, so the output is deterministic. When
/// no valid order exists (a lookup cycle, or a reference to an identifier
/// absent from the batch) the original input sequence is returned unchanged
/// rather than failing; callers that require true ordering should use
/// [`order_strict`].
pub fn order(definitions: &[Definition]) -> Vec<Definition> {
    match linearize(definitions) {
        Some(ordered) => ordered,
        None => definitions.to_vec(),
    }
}

/// Like [`order`], but surfaces the fallback case as
/// [`CompileError::UnorderableBatch`] instead of silently returning the
/// input sequence.
pub fn order_strict(definitions: &[Definition]) -> Result<Vec<Definition>, CompileError> {
    linearize(definitions).ok_or(CompileError::UnorderableBatch)
}

fn linearize(definitions: &[Definition]) -> Option<Vec<Definition>> {
    let targets: Vec<HashSet<&str>> = definitions
        .iter()
        .map(|def| def.lookup_targets().into_iter().collect())
        .collect();

    // pending[i] = number of i's targets not yet emitted. Dangling targets
    // are never emitted, so their dependents never drain and the batch falls
    // back as a whole.
    let mut pending: Vec<usize> = targets.iter().map(HashSet::len).collect();
    let mut emitted = vec![false; definitions.len()];
    let mut ordered = Vec::with_capacity(definitions.len());

    loop {
        let ready = (0..definitions.len()).find(|&i| !emitted[i] && pending[i] == 0);
        let Some(next) = ready else { break };

        emitted[next] = true;
        ordered.push(definitions[next].clone());

        let done = definitions[next].identifier.as_str();
        for (i, deps) in targets.iter().enumerate() {
            if !emitted[i] && deps.contains(done) {
                pending[i] = pending[i].saturating_sub(1);
            }
        }
    }

    (ordered.len() == definitions.len()).then_some(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordgen_schema::{FieldKind, FieldSpec};

    fn def(identifier: &str, targets: &[&str]) -> Definition {
        Definition {
            name: identifier.to_owned(),
            identifier: identifier.to_owned(),
            fields: targets
                .iter()
                .map(|target| FieldSpec {
                    name: format!("ref_{}", target),
                    kind: FieldKind::AppLookup,
                    label: format!("Ref {}", target),
                    required: false,
                    options: vec![],
                    reference: Some((*target).to_owned()),
                })
                .collect(),
        }
    }

    fn identifiers(defs: &[Definition]) -> Vec<&str> {
        defs.iter().map(|d| d.identifier.as_str()).collect()
    }

    #[test]
    fn test_order_puts_targets_before_dependents() {
        let input = vec![def("teams", &["employees"]), def("employees", &[])];
        assert_eq!(identifiers(&order(&input)), vec!["employees", "teams"]);
    }

    #[test]
    fn test_order_is_a_dependency_respecting_permutation() {
        let input = vec![
            def("shifts", &["teams", "employees"]),
            def("teams", &["employees"]),
            def("employees", &[]),
            def("rooms", &[]),
        ];
        let ordered = order(&input);

        assert_eq!(ordered.len(), input.len());
        for (i, d) in ordered.iter().enumerate() {
            for target in d.lookup_targets() {
                let pos = ordered.iter().position(|o| o.identifier == target).unwrap();
                assert!(pos < i, "{} must precede {}", target, d.identifier);
            }
        }
    }

    #[test]
    fn test_order_breaks_ties_by_input_position() {
        let input = vec![def("b", &[]), def("a", &[]), def("c", &["b"])];
        assert_eq!(identifiers(&order(&input)), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_order_falls_back_on_cycle() {
        let input = vec![def("a", &["b"]), def("b", &["a"]), def("c", &[])];
        assert_eq!(identifiers(&order(&input)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_order_falls_back_on_dangling_reference() {
        let input = vec![def("teams", &["missing"]), def("employees", &[])];
        assert_eq!(identifiers(&order(&input)), vec!["teams", "employees"]);
    }

    #[test]
    fn test_self_reference_adds_no_edge() {
        let input = vec![def("categories", &["categories"]), def("employees", &[])];
        assert_eq!(identifiers(&order(&input)), vec!["categories", "employees"]);
    }

    #[test]
    fn test_order_strict_reports_the_fallback() {
        let input = vec![def("a", &["b"]), def("b", &["a"])];
        assert!(matches!(
            order_strict(&input),
            Err(CompileError::UnorderableBatch)
        ));

        let input = vec![def("teams", &["employees"]), def("employees", &[])];
        let ordered = order_strict(&input).unwrap();
        assert_eq!(identifiers(&ordered), vec!["employees", "teams"]);
    }

    #[test]
    fn test_duplicate_targets_count_once() {
        // Two lookups into the same target must not double-count the edge.
        let mut teams = def("teams", &["employees"]);
        teams.fields.push(FieldSpec {
            name: "deputy".to_owned(),
            kind: FieldKind::AppLookup,
            label: "Deputy".to_owned(),
            required: false,
            options: vec![],
            reference: Some("employees".to_owned()),
        });
        let input = vec![teams, def("employees", &[])];
        assert_eq!(identifiers(&order(&input)), vec!["employees", "teams"]);
    }
}
