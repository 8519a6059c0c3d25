//! Common test utilities for building workflow definitions.
use kenshou::prelude::*;

/// An `input` component kind with no configuration set.
#[allow(dead_code)]
pub fn input() -> KindTag {
    KindTag::Known(ComponentKind::Input(InputConfig::default()))
}

/// A `process` component kind with no configuration set.
#[allow(dead_code)]
pub fn process() -> KindTag {
    KindTag::Known(ComponentKind::Process(ProcessConfig::default()))
}

/// An `output` component kind with no configuration set.
#[allow(dead_code)]
pub fn output() -> KindTag {
    KindTag::Known(ComponentKind::Output(OutputConfig::default()))
}

/// A `condition` component kind with no configuration set.
#[allow(dead_code)]
pub fn condition() -> KindTag {
    KindTag::Known(ComponentKind::Condition(ConditionConfig::default()))
}

/// An `input` kind with its input type configured, so no advisory fires.
#[allow(dead_code)]
pub fn configured_input(input_type: &str) -> KindTag {
    KindTag::Known(ComponentKind::Input(InputConfig {
        input_type: Some(input_type.to_string()),
    }))
}

/// A `process` kind with its process type configured.
#[allow(dead_code)]
pub fn configured_process(process_type: &str) -> KindTag {
    KindTag::Known(ComponentKind::Process(ProcessConfig {
        process_type: Some(process_type.to_string()),
    }))
}

/// An `output` kind with its output format configured.
#[allow(dead_code)]
pub fn configured_output(output_format: &str) -> KindTag {
    KindTag::Known(ComponentKind::Output(OutputConfig {
        output_format: Some(output_format.to_string()),
    }))
}

/// A `condition` kind with condition logic attached.
#[allow(dead_code)]
pub fn configured_condition(logic: &str) -> KindTag {
    KindTag::Known(ComponentKind::Condition(ConditionConfig {
        condition: Some(serde_json::Value::String(logic.to_string())),
    }))
}

/// A component with the given id and kind, no label or position.
#[allow(dead_code)]
pub fn component(id: &str, kind: KindTag) -> ComponentDefinition {
    ComponentDefinition {
        id: id.to_string(),
        kind: Some(kind),
        label: None,
        position: None,
    }
}

/// A component with an explicit display label.
#[allow(dead_code)]
pub fn labeled_component(id: &str, label: &str, kind: KindTag) -> ComponentDefinition {
    ComponentDefinition {
        id: id.to_string(),
        kind: Some(kind),
        label: Some(label.to_string()),
        position: None,
    }
}

/// A component whose `data.type` was never set.
#[allow(dead_code)]
pub fn untyped_component(id: &str) -> ComponentDefinition {
    ComponentDefinition {
        id: id.to_string(),
        kind: None,
        label: None,
        position: None,
    }
}

/// A directed connection between two component ids.
#[allow(dead_code)]
pub fn connection(source: &str, target: &str) -> ConnectionDefinition {
    ConnectionDefinition {
        id: format!("{source}->{target}"),
        source: source.to_string(),
        target: target.to_string(),
        source_handle: None,
        target_handle: None,
    }
}

/// Connections forming a chain over the given ids, in order.
#[allow(dead_code)]
pub fn chain(ids: &[&str]) -> Vec<ConnectionDefinition> {
    ids.windows(2).map(|w| connection(w[0], w[1])).collect()
}

/// A workflow over the given components and connections.
#[allow(dead_code)]
pub fn workflow(
    components: Vec<ComponentDefinition>,
    connections: Vec<ConnectionDefinition>,
) -> WorkflowDefinition {
    WorkflowDefinition {
        components,
        connections,
    }
}

/// Shorthand: validate with the default check set.
#[allow(dead_code)]
pub fn validate(workflow: WorkflowDefinition) -> ValidationReport {
    Validator::new(workflow).validate()
}
