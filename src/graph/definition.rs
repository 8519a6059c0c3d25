/// The complete, canonical definition of a workflow graph, ready for validation.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default)]
pub struct WorkflowDefinition {
    pub components: Vec<ComponentDefinition>,
    pub connections: Vec<ConnectionDefinition>,
}

/// Defines a single typed component (a node) in the workflow graph.
#[derive(Debug, Clone)]
pub struct ComponentDefinition {
    pub id: String,
    /// The declared component kind. `None` models an absent `data.type`.
    pub kind: Option<KindTag>,
    /// Optional display label; falls back to `id` in diagnostics.
    pub label: Option<String>,
    /// Canvas coordinate. Carried through, never semantically checked.
    pub position: Option<Position>,
}

impl ComponentDefinition {
    /// The label shown in diagnostics: the display label if one is set,
    /// otherwise the component id.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }

    /// The component's kind when it is one of the recognized variants.
    pub fn known_kind(&self) -> Option<&ComponentKind> {
        match &self.kind {
            Some(KindTag::Known(kind)) => Some(kind),
            _ => None,
        }
    }
}

/// A declared `data.type` value: either one of the recognized kinds, or the
/// raw string preserved so diagnostics can echo it back.
#[derive(Debug, Clone, PartialEq)]
pub enum KindTag {
    Known(ComponentKind),
    Unknown(String),
}

/// The closed set of component kinds, each carrying its own optional
/// configuration record.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentKind {
    Input(InputConfig),
    Process(ProcessConfig),
    Output(OutputConfig),
    Condition(ConditionConfig),
}

impl ComponentKind {
    /// The kind's wire-format name.
    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::Input(_) => "input",
            ComponentKind::Process(_) => "process",
            ComponentKind::Output(_) => "output",
            ComponentKind::Condition(_) => "condition",
        }
    }
}

/// Configuration for an `input` component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputConfig {
    pub input_type: Option<String>,
}

/// Configuration for a `process` component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessConfig {
    pub process_type: Option<String>,
}

/// Configuration for an `output` component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputConfig {
    pub output_format: Option<String>,
}

/// Configuration for a `condition` component. The condition payload is
/// free-form: only its presence matters to validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionConfig {
    pub condition: Option<serde_json::Value>,
}

/// Defines a directed connection (an edge) between two components.
#[derive(Debug, Clone, Default)]
pub struct ConnectionDefinition {
    /// Edge id, carried through but never referentially checked.
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: Option<String>,
    pub target_handle: Option<String>,
}

/// A 2-D canvas coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}
