use serde::{Deserialize, Serialize};

/// Marker prepended to advisory warnings in the flat `errors` list, so the
/// editor can render them differently without a schema change.
pub const WARNING_PREFIX: &str = "⚠️ ";

/// The verdict of a validation pass, in the exact shape the validate endpoint
/// returns: a single flag and a flat, ordered list of human-readable strings.
///
/// Blocking errors come first (structural, then topological), advisory
/// warnings are appended last with [`WARNING_PREFIX`]. Warnings never affect
/// `valid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Merges the phase outputs into a single verdict. Concatenation order is
    /// part of the contract: structural errors, then critical (topological)
    /// errors, then prefixed warnings.
    pub fn aggregate(
        structural: Vec<String>,
        critical: Vec<String>,
        warnings: Vec<String>,
    ) -> Self {
        let valid = structural.is_empty() && critical.is_empty();
        let mut errors = structural;
        errors.extend(critical);
        errors.extend(warnings.into_iter().map(|w| format!("{WARNING_PREFIX}{w}")));
        Self { valid, errors }
    }

    /// A report that refuses the workflow outright with a single error.
    pub(crate) fn fatal(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            errors: vec![error.into()],
        }
    }

    /// The blocking errors, i.e. every entry that is not a prefixed warning.
    pub fn blocking(&self) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .map(String::as_str)
            .filter(|e| !e.starts_with(WARNING_PREFIX))
    }

    /// The advisory warnings with their marker prefix stripped.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .filter_map(|e| e.strip_prefix(WARNING_PREFIX))
    }
}
