use super::definition::WorkflowDefinition;
use crate::error::WorkflowConversionError;

/// A trait for custom data models that can be converted into a kenshou
/// `WorkflowDefinition`.
///
/// This is the primary extension point for making kenshou format-agnostic. By
/// implementing this trait on your own graph structs, you provide a
/// translation layer that allows the validation engine to process your custom
/// workflow format. The crate ships one implementation out of the box:
/// [`crate::ui::UiWorkflow`], covering the visual-editor JSON wire format.
///
/// # Example
///
/// ```rust,no_run
/// use kenshou::prelude::*;
/// use kenshou::error::WorkflowConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyNode { id: String, role: String }
/// struct MyGraph { nodes: Vec<MyNode> }
///
/// // 2. Implement `IntoWorkflow` for your top-level struct.
/// impl IntoWorkflow for MyGraph {
///     fn into_workflow(self) -> std::result::Result<WorkflowDefinition, WorkflowConversionError> {
///         let components = self
///             .nodes
///             .into_iter()
///             .map(|node| ComponentDefinition {
///                 id: node.id,
///                 // Your logic to map `role` onto a `KindTag` goes here.
///                 kind: None,
///                 label: None,
///                 position: None,
///             })
///             .collect();
///
///         Ok(WorkflowDefinition {
///             components,
///             connections: vec![], // Convert your edges here as well
///         })
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a canonical workflow graph.
    fn into_workflow(self) -> Result<WorkflowDefinition, WorkflowConversionError>;
}
