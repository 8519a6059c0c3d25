use serde::Deserialize;

use crate::error::WorkflowConversionError;

/// Complete workflow payload as sent by the visual editor: the request body
/// of a validate call. Unknown extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct UiWorkflow {
    #[serde(default)]
    pub components: Vec<UiComponent>,
    #[serde(default)]
    pub connections: Vec<UiConnection>,
}

impl UiWorkflow {
    /// Parses a workflow payload from its JSON wire format.
    pub fn from_json(json: &str) -> Result<Self, WorkflowConversionError> {
        serde_json::from_str(json)
            .map_err(|e| WorkflowConversionError::JsonParseError(e.to_string()))
    }
}

/// A raw component as drawn on the canvas.
#[derive(Debug, Deserialize)]
pub struct UiComponent {
    #[serde(default)]
    pub id: String,
    /// Legacy top-level type field. Accepted for compatibility, unused:
    /// the authoritative kind lives at `data.type`.
    #[serde(rename = "type", default)]
    pub legacy_type: Option<String>,
    pub data: Option<UiComponentData>,
    pub position: Option<UiPosition>,
}

/// The `data` envelope of a component: kind, label and configuration bag.
#[derive(Debug, Deserialize)]
pub struct UiComponentData {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub label: Option<String>,
    pub config: Option<UiComponentConfig>,
}

/// The per-kind configuration bag. All fields are optional; which one is
/// meaningful depends on `data.type`.
#[derive(Debug, Default, Deserialize)]
pub struct UiComponentConfig {
    #[serde(alias = "inputType")]
    pub input_type: Option<String>,
    #[serde(alias = "processType")]
    pub process_type: Option<String>,
    #[serde(alias = "outputFormat")]
    pub output_format: Option<String>,
    pub condition: Option<serde_json::Value>,
}

/// A raw edge connecting two components, optionally qualified by sub-ports.
#[derive(Debug, Deserialize)]
pub struct UiConnection {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub target: String,
    #[serde(alias = "sourceHandle")]
    pub source_handle: Option<String>,
    #[serde(alias = "targetHandle")]
    pub target_handle: Option<String>,
}

/// Canvas coordinate of a component.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct UiPosition {
    pub x: f64,
    pub y: f64,
}
