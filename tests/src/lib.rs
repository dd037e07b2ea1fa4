//! Assay Integration Test Framework
//!
//! Provides a fluent API for writing integration tests against Assay.
//!
//! A scenario pairs a validator and an object graph with named steps. Each
//! step runs one validation call and checks its outcome. Every step is run
//! twice; both runs must agree.
//!
//! # Example
//!
//! ```ignore
//! use assay_tests::prelude::*;
//!
//! let library = fixtures::library();
//! let alice = library.alice;
//!
//! Scenario::new("valid_library")
//!     .validator(fixtures::library_validator())
//!     .graph(library.graph)
//!     .step("validate_alice", move |v, g| v.validate_object(g, alice, GroupSpec::default()), |a| a.none())
//!     .run()
//!     .unwrap();
//! ```

mod assertion;
mod error;
pub mod fixtures;

pub use assertion::{Assertion, AssertionBuilder};
pub use error::{ScenarioError, ScenarioResult};
pub use scenario::{Scenario, Step};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::assertion::{Assertion, AssertionBuilder};
    pub use crate::error::{ScenarioError, ScenarioResult};
    pub use crate::fixtures;
    pub use crate::scenario::Scenario;
    pub use assay_core::{map, GroupName, GroupSequence, GroupSpec, Map, ObjectGraph, ObjectId, Value};
    pub use assay_registry::{rules, Cascade, Constraint, Field, PropertyMetadata, RegistryBuilder};
    pub use assay_validator::checkers::*;
    pub use assay_validator::{
        CheckerRegistry, ValidationError, Validator, ValidatorConfig, ViolationList,
    };
}
