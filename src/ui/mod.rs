//! Serde types for the visual editor's JSON wire format, plus the
//! `IntoWorkflow` conversion into the canonical graph model.

mod convert;
pub mod types;

pub use types::*;
