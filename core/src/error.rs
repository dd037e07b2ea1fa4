//! Fatal error types for Assay.
//!
//! These are configuration and caller-contract failures. They abort the
//! current validation call and never appear in a violation list.

use crate::ObjectId;
use thiserror::Error;

/// Errors that abort a validation call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The value's shape does not match what a rule or cascade requires.
    #[error("Type mismatch at '{path}': expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// A constraint's own options are malformed.
    #[error("Invalid configuration for constraint {constraint}: {message}")]
    InvalidRuleConfiguration { constraint: String, message: String },

    /// A retired entry point was called.
    #[error("Unsupported operation: {operation}")]
    UnsupportedOperation { operation: String },

    /// An object's type has no metadata.
    #[error("No metadata for type: {type_name}")]
    NoMetadata { type_name: String },

    /// A reference points outside the object graph.
    #[error("Object not found: {0}")]
    UnknownObject(ObjectId),

    /// A property is not declared on its type.
    #[error("Unknown property: {property} on type {type_name}")]
    UnknownProperty { type_name: String, property: String },

    /// A constraint kind has no registered checker.
    #[error("No checker registered for constraint: {kind}")]
    UnknownChecker { kind: String },

    /// Traversal went deeper than the configured limit.
    #[error("Maximum traversal depth ({depth}) exceeded at '{path}'")]
    DepthLimitExceeded { depth: usize, path: String },
}

impl ValidationError {
    pub fn type_mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_rule_configuration(
        constraint: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidRuleConfiguration {
            constraint: constraint.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_operation(operation: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            operation: operation.into(),
        }
    }

    pub fn no_metadata(type_name: impl Into<String>) -> Self {
        Self::NoMetadata {
            type_name: type_name.into(),
        }
    }

    pub fn unknown_property(type_name: impl Into<String>, property: impl Into<String>) -> Self {
        Self::UnknownProperty {
            type_name: type_name.into(),
            property: property.into(),
        }
    }

    pub fn unknown_checker(kind: impl Into<String>) -> Self {
        Self::UnknownChecker { kind: kind.into() }
    }

    pub fn depth_limit_exceeded(depth: usize, path: impl Into<String>) -> Self {
        Self::DepthLimitExceeded {
            depth,
            path: path.into(),
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
