//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and traits from the kenshou crate.
//! Import this module to get access to the core functionality without having
//! to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use kenshou::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let payload = std::fs::read_to_string("path/to/workflow.json")?;
//! let workflow = UiWorkflow::from_json(&payload)?.into_workflow()?;
//!
//! let report = Validator::new(workflow).validate();
//! println!("valid: {}, findings: {}", report.valid, report.errors.len());
//! # Ok(())
//! # }
//! ```

// The engine
pub use crate::validator::{Validator, ValidatorBuilder};

// Canonical graph model and conversion trait
pub use crate::graph::{
    ComponentDefinition, ComponentKind, ConditionConfig, ConnectionDefinition, InputConfig,
    IntoWorkflow, KindTag, OutputConfig, Position, ProcessConfig, WorkflowDefinition,
};

// Wire-format types
pub use crate::ui::{UiComponent, UiConnection, UiWorkflow};

// Verdict
pub use crate::report::{ValidationReport, WARNING_PREFIX};

// Error types
pub use crate::error::WorkflowConversionError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
