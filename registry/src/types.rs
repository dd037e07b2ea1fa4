//! Metadata definition types.

use crate::Constraint;
use assay_core::{GroupName, GroupSequence};

/// How traversal descends past a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cascade {
    /// Validate the value itself only.
    #[default]
    None,
    /// Descend into the referenced object.
    Object,
    /// Descend into each element of a list or map.
    Collection {
        /// Also expand collections nested inside the elements.
        deep: bool,
    },
}

impl Cascade {
    pub fn is_none(&self) -> bool {
        matches!(self, Cascade::None)
    }
}

/// Property metadata within a class.
#[derive(Debug, Clone)]
pub struct PropertyMetadata {
    /// Property name.
    pub name: String,
    /// Constraints on the property value, in declaration order.
    pub constraints: Vec<Constraint>,
    /// Cascade directive for the property value.
    pub cascade: Cascade,
}

impl PropertyMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
            cascade: Cascade::None,
        }
    }

    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn cascade(mut self, cascade: Cascade) -> Self {
        self.cascade = cascade;
        self
    }
}

/// Class metadata: class-level constraints, properties and group sequence.
#[derive(Debug, Clone)]
pub struct ClassMetadata {
    /// Class name, also its implicit group.
    pub name: String,
    /// Class-level constraints, in declaration order.
    pub constraints: Vec<Constraint>,
    /// Properties, in declaration order.
    pub properties: Vec<PropertyMetadata>,
    /// Ordered replacement for the `Default` group.
    pub group_sequence: Option<GroupSequence>,
}

impl ClassMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
            properties: Vec::new(),
            group_sequence: None,
        }
    }

    /// Get a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyMetadata> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Check if this class declares a property.
    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    /// The group named after this class.
    pub fn implicit_group(&self) -> GroupName {
        GroupName::new(self.name.clone())
    }

    /// Every constraint on the class and its properties.
    pub fn all_constraints(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints
            .iter()
            .chain(self.properties.iter().flat_map(|p| p.constraints.iter()))
    }
}
