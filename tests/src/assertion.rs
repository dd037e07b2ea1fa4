//! Assertion types and builders for verifying step results.

use crate::error::{ScenarioError, ScenarioResult};
use assay_core::ValidationResult;
use assay_validator::ViolationList;

/// A complete assertion for a step result.
#[derive(Default)]
pub struct Assertion {
    // Violation count
    pub violations: Option<usize>,

    // Violation placement
    pub paths: Option<Vec<String>>,
    pub codes_at: Vec<(String, String)>,
    pub clean_paths: Vec<String>,

    // Violation content
    pub messages: Vec<String>,
    pub codes: Vec<String>,

    // Error assertions
    pub error: Option<String>,
    pub error_pattern: Option<String>,

    // Custom assertion function
    #[allow(clippy::type_complexity)]
    pub custom: Option<Box<dyn Fn(&ViolationList) -> bool>>,
}

impl std::fmt::Debug for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assertion")
            .field("violations", &self.violations)
            .field("paths", &self.paths)
            .field("codes_at", &self.codes_at)
            .field("clean_paths", &self.clean_paths)
            .field("messages", &self.messages)
            .field("codes", &self.codes)
            .field("error", &self.error)
            .field("error_pattern", &self.error_pattern)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Assertion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the assertion against a result.
    pub fn verify(&self, step: &str, result: &ValidationResult<ViolationList>) -> ScenarioResult<()> {
        // Check error expectations first
        if let Some(ref expected) = self.error {
            return match result {
                Err(e) if e.to_string().contains(expected.as_str()) => Ok(()),
                Err(e) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error containing '{}', got: {}", expected, e),
                )),
                Ok(list) => Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected error containing '{}', but step produced {} violation(s)",
                        expected,
                        list.len()
                    ),
                )),
            };
        }

        if let Some(ref pattern) = self.error_pattern {
            let re = regex_lite::Regex::new(pattern).map_err(|e| {
                ScenarioError::assertion_failed(step, format!("invalid regex pattern: {}", e))
            })?;
            return match result {
                Err(e) if re.is_match(&e.to_string()) => Ok(()),
                Err(e) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error matching '{}', got: {}", pattern, e),
                )),
                Ok(_) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error matching '{}', but step succeeded", pattern),
                )),
            };
        }

        let list = result
            .as_ref()
            .map_err(|e| ScenarioError::assertion_failed(step, format!("step failed: {}", e)))?;

        if let Some(ref custom) = self.custom {
            if !custom(list) {
                return Err(ScenarioError::assertion_failed(step, "custom assertion failed"));
            }
        }

        self.verify_violations(step, list)
    }

    fn verify_violations(&self, step: &str, list: &ViolationList) -> ScenarioResult<()> {
        if let Some(expected) = self.violations {
            if list.len() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} violation(s), got {}:\n{}", expected, list.len(), list),
                ));
            }
        }

        if let Some(ref expected) = self.paths {
            let actual: Vec<&str> = list.iter().map(|v| v.property_path.as_str()).collect();
            if actual != *expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected paths {:?}, got {:?}", expected, actual),
                ));
            }
        }

        for (path, code) in &self.codes_at {
            if !list.by_path(path).any(|v| v.has_code(code)) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected '{}' at '{}', got:\n{}", code, path, list),
                ));
            }
        }

        for path in &self.clean_paths {
            if list.by_path(path).next().is_some() {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected no violation at '{}', got:\n{}", path, list),
                ));
            }
        }

        for message in &self.messages {
            if !list.iter().any(|v| v.message == *message) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected message '{}', got:\n{}", message, list),
                ));
            }
        }

        for code in &self.codes {
            if !list.has(code) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected code '{}', got:\n{}", code, list),
                ));
            }
        }

        Ok(())
    }
}

/// Builder for assertions.
#[derive(Debug, Default)]
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assert the exact number of violations.
    pub fn violations(mut self, count: usize) -> Self {
        self.assertion.violations = Some(count);
        self
    }

    /// Assert that the run is clean.
    pub fn none(self) -> Self {
        self.violations(0)
    }

    /// Assert the exact ordered list of violation paths.
    pub fn paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assertion.paths = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    /// Assert a violation with `code` at `path`.
    pub fn code_at(mut self, path: impl Into<String>, code: impl Into<String>) -> Self {
        self.assertion.codes_at.push((path.into(), code.into()));
        self
    }

    /// Assert that nothing was reported at `path`.
    pub fn clean_at(mut self, path: impl Into<String>) -> Self {
        self.assertion.clean_paths.push(path.into());
        self
    }

    /// Assert a violation with exactly this message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.assertion.messages.push(message.into());
        self
    }

    /// Assert a violation with this code anywhere.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.assertion.codes.push(code.into());
        self
    }

    /// Assert that the call fails with an error containing `message`.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.assertion.error = Some(message.into());
        self
    }

    /// Assert that the call fails with an error matching a regex.
    pub fn error_matching(mut self, pattern: impl Into<String>) -> Self {
        self.assertion.error_pattern = Some(pattern.into());
        self
    }

    /// Add a custom check over the violation list.
    pub fn custom<F>(mut self, f: F) -> Self
    where
        F: Fn(&ViolationList) -> bool + 'static,
    {
        self.assertion.custom = Some(Box::new(f));
        self
    }

    pub fn build(self) -> Assertion {
        self.assertion
    }
}
