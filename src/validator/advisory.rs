use crate::graph::{ComponentKind, WorkflowDefinition};

/// Advisory configuration checks: one suggestion per component whose
/// kind-specific config field is still unset. Never blocking, and independent
/// of structural results — a component with a bad id but a recognized kind
/// still gets its suggestion.
pub(super) fn check(workflow: &WorkflowDefinition) -> Vec<String> {
    let mut warnings = Vec::new();

    for component in &workflow.components {
        let Some(kind) = component.known_kind() else {
            continue;
        };
        let label = component.display_label();

        match kind {
            ComponentKind::Input(config) if config.input_type.is_none() => {
                warnings.push(format!(
                    "Input \"{label}\" could benefit from specifying an input type"
                ));
            }
            ComponentKind::Process(config) if config.process_type.is_none() => {
                warnings.push(format!(
                    "Process \"{label}\" could benefit from specifying a process type"
                ));
            }
            ComponentKind::Output(config) if config.output_format.is_none() => {
                warnings.push(format!(
                    "Output \"{label}\" could benefit from specifying an output format"
                ));
            }
            ComponentKind::Condition(config) if config.condition.is_none() => {
                warnings.push(format!(
                    "Condition \"{label}\" could benefit from defining condition logic"
                ));
            }
            _ => {}
        }
    }

    warnings
}
