//! Assay Registry
//!
//! Constraint descriptors and the read-only metadata store. Single source of
//! truth for which constraints are attached to which class and property, and
//! how traversal cascades through them. The registry is immutable after
//! construction via RegistryBuilder.

mod builder;
mod constraint;
pub mod kinds;
mod registry;
pub mod rules;
mod types;

pub use builder::{ClassBuilder, RegistryBuilder, RegistryError};
pub use constraint::{
    Constraint, ConstraintBuilder, ConstraintKind, Field, FieldRule, OptionValue,
};
pub use registry::{MetadataProvider, MetadataRegistry};
pub use types::*;
