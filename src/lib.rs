//! # Kenshou - Workflow Graph Validation Engine
//!
//! **Kenshou** is a structural validation engine for node-based visual
//! workflow graphs: directed graphs of typed components (`input`, `process`,
//! `output`, `condition`) connected by edges. Given a graph, it decides
//! structural validity, flags a restricted cycle pattern, and separates
//! blocking errors from advisory warnings — all as a pure, synchronous
//! transform with no I/O and no shared state.
//!
//! ## Core Workflow
//!
//! The engine is designed to be format-agnostic. It operates on a canonical
//! internal model of a workflow graph. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your workflow format into your own Rust
//!     structs, or use the bundled [`ui::UiWorkflow`] types for the visual
//!     editor's JSON wire format.
//! 2.  **Convert to Kenshou's Model**: Implement the [`graph::IntoWorkflow`]
//!     trait (already done for `UiWorkflow`) to translate into a
//!     [`graph::WorkflowDefinition`].
//! 3.  **Validate**: Build a [`validator::Validator`] over the definition and
//!     call `validate()` to obtain a [`report::ValidationReport`].
//!
//! The report is the exact `{valid, errors}` shape a validate endpoint
//! returns: blocking errors first, then advisory warnings prefixed with
//! [`report::WARNING_PREFIX`]. Warnings never flip `valid`.
//!
//! ## Quick Start
//!
//! ```rust
//! use kenshou::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let payload = r#"{
//!         "components": [
//!             { "id": "load",  "data": { "type": "input", "label": "Load CSV" } },
//!             { "id": "clean", "data": { "type": "process",
//!                                        "config": { "processType": "transform" } } },
//!             { "id": "save",  "data": { "type": "output",
//!                                        "config": { "outputFormat": "json" } } }
//!         ],
//!         "connections": [
//!             { "id": "e1", "source": "load",  "target": "clean" },
//!             { "id": "e2", "source": "clean", "target": "save" }
//!         ]
//!     }"#;
//!
//!     let workflow = UiWorkflow::from_json(payload)?.into_workflow()?;
//!     let report = Validator::new(workflow).validate();
//!
//!     assert!(report.valid);
//!     // One advisory: the input never declared an input type.
//!     assert_eq!(report.warnings().count(), 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Known Limitation
//!
//! The default cycle check only catches back-and-forth pairs (`A -> B` plus
//! `B -> A`); longer cycles pass through untouched. This is the documented
//! contract, not an oversight. General DFS-based detection is available as an
//! opt-in extra via
//! [`validator::ValidatorBuilder::with_transitive_cycle_check`].

pub mod error;
pub mod graph;
pub mod prelude;
pub mod report;
pub mod ui;
pub mod validator;
