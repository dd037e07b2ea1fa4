use crate::{CheckContext, ConstraintChecker, Parameters};
use assay_core::{ValidationResult, Value};
use assay_registry::Constraint;

pub const IS_NULL_ERROR: &str = "not_null.is_null";

/// Rejects `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotNullChecker;

impl ConstraintChecker for NotNullChecker {
    fn check(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut CheckContext<'_, '_>,
    ) -> ValidationResult<()> {
        if value.is_null() {
            ctx.build_violation(constraint.message("message"))
                .parameters(Parameters::new().with("value", value.to_parameter_string()))
                .code(IS_NULL_ERROR)
                .add();
        }
        Ok(())
    }
}
