//! Error types for the scenario framework.

use thiserror::Error;

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur when running scenarios.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Assertion failed.
    #[error("assertion failed for step '{step}': {message}")]
    AssertionFailed { step: String, message: String },

    /// Two runs of the same step disagreed.
    #[error("step '{step}' is not repeatable")]
    Unstable { step: String },

    /// Scenario has no validator.
    #[error("validator not specified for scenario '{scenario}'")]
    MissingValidator { scenario: String },
}

impl ScenarioError {
    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }

    pub fn unstable(step: impl Into<String>) -> Self {
        Self::Unstable { step: step.into() }
    }

    pub fn missing_validator(scenario: impl Into<String>) -> Self {
        Self::MissingValidator {
            scenario: scenario.into(),
        }
    }
}
