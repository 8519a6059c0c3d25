//! The validation engine: a single-pass, stateless transform from a
//! [`WorkflowDefinition`] to a [`ValidationReport`].
//!
//! Validation runs in phases over the same two input collections, all pure:
//!
//! 1. **structural** — mandatory fields and referential integrity (blocking);
//! 2. **advisory** — missing optional per-kind configuration (warnings);
//! 3. **topology** — disconnection, the restricted cycle pattern, and role
//!    coverage (blocking).
//!
//! The phases never mutate their input and keep no state between calls, so
//! validating the same graph twice yields byte-identical reports.

use crate::graph::WorkflowDefinition;
use crate::report::ValidationReport;

mod advisory;
mod structural;
mod topology;

/// The configured validation engine. Construct via [`Validator::new`] for the
/// default checks or [`Validator::builder`] to opt into extras.
pub struct Validator {
    workflow: WorkflowDefinition,
    transitive_cycle_check: bool,
}

/// Builder for a [`Validator`].
pub struct ValidatorBuilder {
    workflow: WorkflowDefinition,
    transitive_cycle_check: bool,
}

impl ValidatorBuilder {
    pub fn new(workflow: WorkflowDefinition) -> Self {
        Self {
            workflow,
            transitive_cycle_check: false,
        }
    }

    /// Additionally run general cycle detection (DFS) and report cycles of
    /// length >= 3, which the default restricted check deliberately misses.
    /// Off by default so the default verdict stays contract-stable.
    pub fn with_transitive_cycle_check(mut self) -> Self {
        self.transitive_cycle_check = true;
        self
    }

    pub fn build(self) -> Validator {
        Validator {
            workflow: self.workflow,
            transitive_cycle_check: self.transitive_cycle_check,
        }
    }
}

impl Validator {
    /// An engine with the default check set.
    pub fn new(workflow: WorkflowDefinition) -> Self {
        Self::builder(workflow).build()
    }

    pub fn builder(workflow: WorkflowDefinition) -> ValidatorBuilder {
        ValidatorBuilder::new(workflow)
    }

    /// The workflow this engine was built over.
    pub fn workflow(&self) -> &WorkflowDefinition {
        &self.workflow
    }

    /// Runs every phase and merges their outputs into one verdict.
    ///
    /// An empty component list short-circuits: no other phase runs and the
    /// report carries exactly one error.
    pub fn validate(&self) -> ValidationReport {
        if self.workflow.components.is_empty() {
            return ValidationReport::fatal("Workflow must have at least one component");
        }

        let structural = structural::check(&self.workflow);
        let warnings = advisory::check(&self.workflow);
        let mut critical = topology::check(&self.workflow);
        if self.transitive_cycle_check {
            critical.extend(topology::transitive_cycles(&self.workflow));
        }

        ValidationReport::aggregate(structural, critical, warnings)
    }
}
