//! Identity types for Assay.
//!
//! Identifiers are small integers that are:
//! - Unique within their namespace
//! - Immutable once assigned
//! - Independent of where the identified value lives in memory

use serde::Serialize;
use std::fmt;

/// Identity of an object stored in an [`ObjectGraph`](crate::ObjectGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// Create a new ObjectId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "o{}", self.0)
    }
}

/// Identity of a constructed constraint.
///
/// Clones of a constraint share its id, so dedupe tables keyed by it treat
/// them as the same rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ConstraintId(pub u32);

impl ConstraintId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}
