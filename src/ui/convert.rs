use super::types::{UiComponent, UiConnection, UiWorkflow};
use crate::error::WorkflowConversionError;
use crate::graph::{
    ComponentDefinition, ComponentKind, ConditionConfig, ConnectionDefinition, InputConfig,
    IntoWorkflow, KindTag, OutputConfig, Position, ProcessConfig, WorkflowDefinition,
};

/// Drops empty strings so the canonical model only ever sees `None` for an
/// absent value. The editor serializes cleared fields as `""`.
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Same normalization for the free-form condition payload: `null` and `""`
/// both mean "no condition logic yet".
fn normalize_condition(value: Option<serde_json::Value>) -> Option<serde_json::Value> {
    value.filter(|v| match v {
        serde_json::Value::Null => false,
        serde_json::Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

fn convert_component(raw: UiComponent) -> ComponentDefinition {
    let (kind_name, label, config) = match raw.data {
        Some(data) => (normalize(data.kind), normalize(data.label), data.config),
        None => (None, None, None),
    };
    let config = config.unwrap_or_default();

    let kind = kind_name.map(|name| match name.as_str() {
        "input" => KindTag::Known(ComponentKind::Input(InputConfig {
            input_type: normalize(config.input_type),
        })),
        "process" => KindTag::Known(ComponentKind::Process(ProcessConfig {
            process_type: normalize(config.process_type),
        })),
        "output" => KindTag::Known(ComponentKind::Output(OutputConfig {
            output_format: normalize(config.output_format),
        })),
        "condition" => KindTag::Known(ComponentKind::Condition(ConditionConfig {
            condition: normalize_condition(config.condition),
        })),
        _ => KindTag::Unknown(name),
    });

    ComponentDefinition {
        id: raw.id,
        kind,
        label,
        position: raw.position.map(|p| Position { x: p.x, y: p.y }),
    }
}

fn convert_connection(raw: UiConnection) -> ConnectionDefinition {
    ConnectionDefinition {
        id: raw.id,
        source: raw.source,
        target: raw.target,
        source_handle: normalize(raw.source_handle),
        target_handle: normalize(raw.target_handle),
    }
}

impl IntoWorkflow for UiWorkflow {
    fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError> {
        Ok(WorkflowDefinition {
            components: self.components.into_iter().map(convert_component).collect(),
            connections: self
                .connections
                .into_iter()
                .map(convert_connection)
                .collect(),
        })
    }
}
