use std::collections::HashMap;

use ahash::{AHashMap, AHashSet};
use itertools::Itertools;

use crate::graph::{ComponentKind, WorkflowDefinition};

/// Blocking whole-graph heuristics: disconnection, the restricted cycle
/// pattern, and input/output role coverage.
pub(super) fn check(workflow: &WorkflowDefinition) -> Vec<String> {
    let mut errors = Vec::new();

    // 1. Completely disconnected canvas.
    if workflow.components.len() > 1 && workflow.connections.is_empty() {
        errors.push("Multiple components exist but none are connected".to_string());
    }

    // 2. Back-and-forth connections.
    if has_reverse_pair(workflow) {
        errors.push("Workflow contains circular dependencies".to_string());
    }

    // 3. Role coverage, only once the graph is big enough to have a shape.
    if workflow.components.len() > 2 {
        let has_role = |predicate: fn(&ComponentKind) -> bool| {
            workflow
                .components
                .iter()
                .filter_map(|c| c.known_kind())
                .any(predicate)
        };

        if !has_role(|k| matches!(k, ComponentKind::Input(_))) {
            errors.push("Workflow should have at least one input component".to_string());
        }
        if !has_role(|k| matches!(k, ComponentKind::Output(_))) {
            errors.push("Workflow should have at least one output component".to_string());
        }
    }

    errors
}

/// Restricted cycle detection: any connection whose exact reverse also
/// exists. NOT a general cycle detector — cycles of length >= 3 pass through
/// untouched, and a self-loop counts as its own reverse. Both quirks are part
/// of the documented contract; the transitive DFS below is the opt-in
/// complement.
///
/// The offender set only decides emit/no-emit, so one error covers any number
/// of reverse pairs.
fn has_reverse_pair(workflow: &WorkflowDefinition) -> bool {
    let mut offenders: AHashSet<&str> = AHashSet::new();

    for connection in &workflow.connections {
        let reverse_exists = workflow
            .connections
            .iter()
            .any(|r| r.source == connection.target && r.target == connection.source);

        if reverse_exists {
            offenders.insert(connection.source.as_str());
        }
    }

    !offenders.is_empty()
}

/// Opt-in general cycle detection over the directed graph. Emits a single
/// error when a cycle of length >= 3 exists; shorter cycles are already the
/// restricted check's territory, so the two never report the same pair twice.
pub(super) fn transitive_cycles(workflow: &WorkflowDefinition) -> Vec<String> {
    let adjacency: HashMap<&str, Vec<&str>> = workflow
        .connections
        .iter()
        .filter(|c| !c.source.is_empty() && !c.target.is_empty())
        .map(|c| (c.source.as_str(), c.target.as_str()))
        .into_group_map();

    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut stack: Vec<&str> = Vec::new();
    let mut depths: AHashMap<&str, usize> = AHashMap::new();
    let mut found = false;

    let roots = workflow
        .components
        .iter()
        .map(|c| c.id.as_str())
        .chain(adjacency.keys().copied());

    for root in roots {
        if !visited.contains(root) {
            visit(root, &adjacency, &mut visited, &mut stack, &mut depths, &mut found);
        }
    }

    if found {
        vec!["Workflow contains transitive circular dependencies".to_string()]
    } else {
        vec![]
    }
}

fn visit<'a>(
    node: &'a str,
    adjacency: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut AHashSet<&'a str>,
    stack: &mut Vec<&'a str>,
    depths: &mut AHashMap<&'a str, usize>,
    found: &mut bool,
) {
    visited.insert(node);
    depths.insert(node, stack.len());
    stack.push(node);

    for &next in adjacency.get(node).into_iter().flatten() {
        if let Some(&depth) = depths.get(next) {
            // Back edge: the cycle spans everything above `next` on the stack.
            if stack.len() - depth >= 3 {
                *found = true;
            }
        } else if !visited.contains(next) {
            visit(next, adjacency, visited, stack, depths, found);
        }
    }

    stack.pop();
    depths.remove(node);
}
