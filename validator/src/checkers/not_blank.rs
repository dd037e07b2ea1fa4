use crate::{CheckContext, ConstraintChecker, Parameters};
use assay_core::{ValidationResult, Value};
use assay_registry::Constraint;

pub const IS_BLANK_ERROR: &str = "not_blank.is_blank";

/// Rejects `null`, `false`, the empty string and empty collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotBlankChecker;

impl ConstraintChecker for NotBlankChecker {
    fn check(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut CheckContext<'_, '_>,
    ) -> ValidationResult<()> {
        let allow_null = constraint.bool_option("allowNull", false)?;
        let blank = match value {
            Value::Null => !allow_null,
            Value::Bool(b) => !b,
            Value::String(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Map(map) => map.is_empty(),
            Value::Int(_) | Value::Float(_) | Value::Ref(_) => false,
        };

        if blank {
            ctx.build_violation(constraint.message("message"))
                .parameters(Parameters::new().with("value", value.to_parameter_string()))
                .code(IS_BLANK_ERROR)
                .add();
        }
        Ok(())
    }
}
