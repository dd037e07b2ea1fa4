//! The Registry - immutable metadata lookup.

use crate::ClassMetadata;
use std::collections::HashMap;

/// Read-only source of class metadata.
pub trait MetadataProvider: Send + Sync {
    /// Get the metadata for a type name.
    fn metadata_for(&self, type_name: &str) -> Option<&ClassMetadata>;

    /// Check whether a type has metadata.
    fn has_metadata_for(&self, type_name: &str) -> bool {
        self.metadata_for(type_name).is_some()
    }

    /// Every class this provider knows.
    fn classes(&self) -> Vec<&ClassMetadata>;
}

/// The MetadataRegistry provides runtime lookup of class metadata.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct MetadataRegistry {
    /// Class metadata in registration order.
    classes: Vec<ClassMetadata>,
    /// Class index lookup by name.
    class_names: HashMap<String, usize>,
}

impl MetadataRegistry {
    /// Create a registry (use RegistryBuilder for construction).
    pub(crate) fn new(classes: Vec<ClassMetadata>) -> Self {
        let class_names = classes
            .iter()
            .enumerate()
            .map(|(i, class)| (class.name.clone(), i))
            .collect();
        Self {
            classes,
            class_names,
        }
    }

    /// Get class metadata by name.
    pub fn get_class(&self, name: &str) -> Option<&ClassMetadata> {
        self.class_names.get(name).map(|&i| &self.classes[i])
    }

    /// Get the number of classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}

impl MetadataProvider for MetadataRegistry {
    fn metadata_for(&self, type_name: &str) -> Option<&ClassMetadata> {
        self.get_class(type_name)
    }

    fn classes(&self) -> Vec<&ClassMetadata> {
        self.classes.iter().collect()
    }
}
