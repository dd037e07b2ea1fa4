//! Validation groups.
//!
//! A group is an opaque name selecting a subset of constraints. `Default` is
//! the sentinel every unconfigured constraint belongs to.

use serde::Serialize;
use std::fmt;

/// Name of a validation group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GroupName(String);

impl GroupName {
    /// The sentinel group.
    pub const DEFAULT: &'static str = "Default";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The `Default` group.
    pub fn default_group() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GroupName {
    fn default() -> Self {
        Self::default_group()
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for GroupName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Ordered list of group batches.
///
/// Batches are evaluated in order; once a batch produces a violation the
/// remaining batches are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupSequence {
    batches: Vec<Vec<GroupName>>,
}

impl GroupSequence {
    /// A sequence where every batch holds a single group.
    pub fn new<I, G>(groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<GroupName>,
    {
        Self {
            batches: groups.into_iter().map(|g| vec![g.into()]).collect(),
        }
    }

    /// A sequence of explicit batches.
    pub fn from_batches(batches: Vec<Vec<GroupName>>) -> Self {
        Self { batches }
    }

    /// Append a batch of groups evaluated together.
    pub fn then<I, G>(mut self, batch: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<GroupName>,
    {
        self.batches.push(batch.into_iter().map(Into::into).collect());
        self
    }

    pub fn batches(&self) -> &[Vec<GroupName>] {
        &self.batches
    }

    /// Iterate over every group named anywhere in the sequence.
    pub fn groups(&self) -> impl Iterator<Item = &GroupName> {
        self.batches.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

/// Groups requested for a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSpec {
    /// Groups evaluated together in one batch.
    Groups(Vec<GroupName>),
    /// Groups evaluated batch by batch with short-circuit.
    Sequence(GroupSequence),
}

impl GroupSpec {
    /// Requested groups as a flat list, in order.
    pub fn names(&self) -> Vec<GroupName> {
        match self {
            GroupSpec::Groups(groups) => groups.clone(),
            GroupSpec::Sequence(sequence) => sequence.groups().cloned().collect(),
        }
    }
}

impl Default for GroupSpec {
    fn default() -> Self {
        GroupSpec::Groups(vec![GroupName::default_group()])
    }
}

impl From<&str> for GroupSpec {
    fn from(name: &str) -> Self {
        GroupSpec::Groups(vec![GroupName::new(name)])
    }
}

impl From<GroupName> for GroupSpec {
    fn from(name: GroupName) -> Self {
        GroupSpec::Groups(vec![name])
    }
}

impl From<Vec<&str>> for GroupSpec {
    fn from(names: Vec<&str>) -> Self {
        GroupSpec::Groups(names.into_iter().map(GroupName::new).collect())
    }
}

impl From<Vec<GroupName>> for GroupSpec {
    fn from(names: Vec<GroupName>) -> Self {
        GroupSpec::Groups(names)
    }
}

impl From<GroupSequence> for GroupSpec {
    fn from(sequence: GroupSequence) -> Self {
        GroupSpec::Sequence(sequence)
    }
}
