//! Violation records and the per-run violation list.

use crate::Parameters;
use assay_core::Value;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// A single failed check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Interpolated message.
    pub message: String,
    /// Template the message was produced from.
    pub message_template: String,
    /// Placeholder values used for interpolation.
    pub parameters: Parameters,
    /// Value the run started from.
    #[serde(skip)]
    pub root: Arc<Value>,
    /// Location of the invalid value relative to the root.
    pub property_path: String,
    /// The offending value.
    pub invalid_value: Value,
    /// Count used for plural message selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural: Option<i64>,
    /// Machine-readable error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Violation {
    /// Check if this violation carries the given code.
    pub fn has_code(&self, code: &str) -> bool {
        self.code.as_deref() == Some(code)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\n    {}", self.property_path, self.message)
    }
}

/// Ordered, append-only list of violations produced by one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ViolationList {
    violations: Vec<Violation>,
}

impl ViolationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Append every violation of another list, keeping order.
    pub fn extend(&mut self, other: ViolationList) {
        self.violations.extend(other.violations);
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Violation> {
        self.violations.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// All violations as a slice.
    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    /// Check if any violation carries the given code.
    pub fn has(&self, code: &str) -> bool {
        self.violations.iter().any(|v| v.has_code(code))
    }

    /// Violations carrying the given code.
    pub fn by_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations.iter().filter(move |v| v.has_code(code))
    }

    /// Violations reported at exactly this property path.
    pub fn by_path<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations
            .iter()
            .filter(move |v| v.property_path == path)
    }
}

impl fmt::Display for ViolationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for violation in &self.violations {
            writeln!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl IntoIterator for ViolationList {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ViolationList {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
