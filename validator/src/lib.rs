//! Assay Validator
//!
//! Walk a value's structure, apply the constraints of the active groups and
//! collect violations.
//!
//! Responsibilities:
//! - Expand objects into properties and collections into elements
//! - Resolve requested groups, including ordered group sequences
//! - Dispatch constraints to their checkers
//! - Protect against cycles and duplicate checks on shared references
//! - Report violations with their property paths and interpolated messages
//!
//! # Module Structure
//!
//! - `validator` - Public entry points
//! - `traverser` - The node work queue
//! - `node` - Node model and expansion
//! - `groups` - Group resolution
//! - `context` - Run state and the positioned context handed to checkers
//! - `dispatch` - Checker trait and registry
//! - `checkers/` - Built-in checkers
//! - `violation` - Violation records
//! - `message` - Message parameters and interpolation
//! - `config` - Validator configuration

pub mod checkers;
mod config;
mod context;
mod dispatch;
mod groups;
mod message;
mod node;
pub mod path;
mod traverser;
mod validator;
mod violation;

pub use config::{ConfigError, ValidatorConfig};
pub use context::{CheckContext, ExecutionContext, ViolationBuilder};
pub use dispatch::{CheckerRegistry, ConstraintChecker};
pub use groups::{resolve_groups, Batch};
pub use message::{MessageInterpolator, Parameters, PlaceholderInterpolator};
pub use node::{Node, ObjectNode, PropertyNode, ValueNode};
pub use validator::{Validator, ValidatorBuilder};
pub use violation::{Violation, ViolationList};

pub use assay_core::{GroupName, GroupSequence, GroupSpec, ValidationError, ValidationResult};
