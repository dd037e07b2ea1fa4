use crate::{CheckContext, ConstraintChecker, Parameters};
use assay_core::{ConstraintId, ValidationError, ValidationResult, Value};
use assay_registry::Constraint;
use regex_lite::Regex;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

pub const REGEX_FAILED_ERROR: &str = "regex.failed";

/// Matches a string against a pattern.
///
/// With `match = false` the value must not match instead. Patterns are
/// compiled on first use and kept per constraint.
#[derive(Debug, Default)]
pub struct RegexChecker {
    compiled: Mutex<HashMap<ConstraintId, Arc<Regex>>>,
}

impl RegexChecker {
    pub fn new() -> Self {
        Self::default()
    }

    fn regex(&self, constraint: &Constraint) -> ValidationResult<Arc<Regex>> {
        let mut compiled = self.compiled.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(regex) = compiled.get(&constraint.id()) {
            return Ok(Arc::clone(regex));
        }

        let pattern = constraint.str_option("pattern")?.ok_or_else(|| {
            ValidationError::invalid_rule_configuration(constraint.name(), "missing pattern")
        })?;
        let regex = Regex::new(pattern).map_err(|e| {
            ValidationError::invalid_rule_configuration(
                constraint.name(),
                format!("invalid pattern {:?}: {}", pattern, e),
            )
        })?;
        let regex = Arc::new(regex);
        compiled.insert(constraint.id(), Arc::clone(&regex));
        Ok(regex)
    }
}

impl ConstraintChecker for RegexChecker {
    fn check(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut CheckContext<'_, '_>,
    ) -> ValidationResult<()> {
        let regex = self.regex(constraint)?;
        let should_match = constraint.bool_option("match", true)?;

        let subject = match value {
            Value::Null => return Ok(()),
            Value::String(s) => s.clone(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            other => {
                return Err(ValidationError::type_mismatch(
                    ctx.path(),
                    "string",
                    other.type_name(),
                ))
            }
        };

        if regex.is_match(&subject) != should_match {
            ctx.build_violation(constraint.message("message"))
                .parameters(Parameters::new().with("value", value.to_parameter_string()))
                .code(REGEX_FAILED_ERROR)
                .add();
        }
        Ok(())
    }
}
