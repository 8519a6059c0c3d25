use ahash::AHashSet;

use crate::graph::{KindTag, WorkflowDefinition};

/// Mandatory-field and referential-integrity checks. Every failure here is
/// blocking. Each element contributes at most its first matching component
/// rule (or connection presence rule) before the scan moves on.
pub(super) fn check(workflow: &WorkflowDefinition) -> Vec<String> {
    let mut errors = Vec::new();

    for component in &workflow.components {
        if component.id.is_empty() {
            errors.push("Component is missing ID".to_string());
            continue;
        }

        match &component.kind {
            None => {
                errors.push(format!("Component \"{}\" is missing type", component.id));
                continue;
            }
            Some(KindTag::Unknown(raw)) => {
                errors.push(format!("Component has invalid type: {raw}"));
            }
            Some(KindTag::Known(_)) => {}
        }
    }

    // Duplicate ids are deliberately tolerated: any occurrence satisfies a
    // reference, exactly as a linear scan over the component list would.
    let known_ids: AHashSet<&str> = workflow.components.iter().map(|c| c.id.as_str()).collect();

    for connection in &workflow.connections {
        if connection.source.is_empty() || connection.target.is_empty() {
            errors.push("Connection is missing source or target".to_string());
            continue;
        }

        if !known_ids.contains(connection.source.as_str()) {
            errors.push("Connection references missing source component".to_string());
        }

        if !known_ids.contains(connection.target.as_str()) {
            errors.push("Connection references missing target component".to_string());
        }

        if connection.source == connection.target {
            errors.push("Component cannot connect to itself".to_string());
        }
    }

    errors
}
