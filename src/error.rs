use thiserror::Error;

/// Errors that can occur when converting a custom user format into a kenshou
/// `WorkflowDefinition`.
///
/// Validation verdicts are never surfaced here: a malformed *graph* (missing
/// ids, dangling references, cycles) is reported as data inside a
/// [`crate::report::ValidationReport`]. This type only covers the conversion
/// boundary in front of the engine.
#[derive(Error, Debug, Clone)]
pub enum WorkflowConversionError {
    #[error("Failed to parse workflow JSON: {0}")]
    JsonParseError(String),

    #[error("Invalid custom workflow data: {0}")]
    ValidationError(String),
}
