//! RegistryBuilder for constructing an immutable MetadataRegistry.

use crate::{Cascade, ClassMetadata, Constraint, MetadataRegistry, PropertyMetadata};
use assay_core::{GroupName, GroupSequence};
use std::collections::HashSet;
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate class name: {0}")]
    DuplicateClassName(String),

    #[error("Duplicate property {property} on class {class}")]
    DuplicateProperty { class: String, property: String },

    #[error("Group sequence of class {0} contains \"Default\"; use the class name instead")]
    DefaultInGroupSequence(String),

    #[error("Group sequence of class {0} is empty or has an empty batch")]
    EmptyGroupSequence(String),
}

/// Builder for constructing an immutable MetadataRegistry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Classes being built.
    classes: Vec<ClassMetadata>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class definition.
    pub fn add_class(&mut self, name: impl Into<String>) -> ClassBuilder<'_> {
        ClassBuilder {
            builder: self,
            class: ClassMetadata::new(name),
        }
    }

    /// Build the immutable registry. Every class was checked by
    /// [`ClassBuilder::done`].
    pub fn build(self) -> MetadataRegistry {
        MetadataRegistry::new(self.classes)
    }
}

/// Builder for a class definition.
pub struct ClassBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    class: ClassMetadata,
}

impl<'a> ClassBuilder<'a> {
    /// Add a class-level constraint.
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.class.constraints.push(constraint);
        self
    }

    /// Add a property.
    pub fn property(mut self, property: PropertyMetadata) -> Self {
        self.class.properties.push(property);
        self
    }

    /// Cascade into `property`, declaring it when the class has no such property yet.
    pub fn cascade(mut self, property: &str, cascade: Cascade) -> Self {
        match self.class.properties.iter_mut().find(|p| p.name == property) {
            Some(existing) => existing.cascade = cascade,
            None => self
                .class
                .properties
                .push(PropertyMetadata::new(property).cascade(cascade)),
        }
        self
    }

    /// Replace the `Default` group of this class with an ordered sequence.
    pub fn group_sequence(mut self, sequence: GroupSequence) -> Self {
        self.class.group_sequence = Some(sequence);
        self
    }

    /// Finish building this class.
    pub fn done(self) -> Result<(), RegistryError> {
        let mut class = self.class;

        // Check for duplicate name
        if self.builder.classes.iter().any(|c| c.name == class.name) {
            return Err(RegistryError::DuplicateClassName(class.name));
        }

        let mut seen = HashSet::new();
        for property in &class.properties {
            if !seen.insert(property.name.as_str()) {
                return Err(RegistryError::DuplicateProperty {
                    class: class.name.clone(),
                    property: property.name.clone(),
                });
            }
        }

        if let Some(sequence) = &class.group_sequence {
            if sequence.is_empty() || sequence.batches().iter().any(Vec::is_empty) {
                return Err(RegistryError::EmptyGroupSequence(class.name));
            }
            if sequence.groups().any(GroupName::is_default) {
                return Err(RegistryError::DefaultInGroupSequence(class.name));
            }
        }

        // Default-group constraints also answer to the class name
        let implicit = class.implicit_group();
        for constraint in &mut class.constraints {
            constraint.add_implicit_group(&implicit);
        }
        for property in &mut class.properties {
            for constraint in &mut property.constraints {
                constraint.add_implicit_group(&implicit);
            }
        }

        self.builder.classes.push(class);
        Ok(())
    }
}
