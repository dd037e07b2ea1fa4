//! Assay Core Types
//!
//! This crate provides the foundational types used throughout Assay:
//! - Identity types (ObjectId, ConstraintId)
//! - Value types (the Value enum with scalar, collection and reference variants)
//! - The object arena (Object, ObjectGraph)
//! - Validation groups (GroupName, GroupSequence, GroupSpec)
//! - The fatal error type

mod entity;
mod error;
mod group;
mod id;
mod value;

pub use entity::*;
pub use error::*;
pub use group::*;
pub use id::*;
pub use value::*;
