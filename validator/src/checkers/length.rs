use crate::{CheckContext, ConstraintChecker, Parameters};
use assay_core::{ValidationError, ValidationResult, Value};
use assay_registry::Constraint;

pub const TOO_SHORT_ERROR: &str = "length.too_short";
pub const TOO_LONG_ERROR: &str = "length.too_long";
pub const NOT_EQUAL_LENGTH_ERROR: &str = "length.not_equal";

/// Bounds the character count of a string.
///
/// Numbers are measured by their decimal rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthChecker;

impl ConstraintChecker for LengthChecker {
    fn check(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut CheckContext<'_, '_>,
    ) -> ValidationResult<()> {
        let min = constraint.int_option("min")?;
        let max = constraint.int_option("max")?;
        if min.is_none() && max.is_none() {
            return Err(ValidationError::invalid_rule_configuration(
                constraint.name(),
                "either option \"min\" or \"max\" must be given",
            ));
        }

        let length = match value {
            Value::Null => return Ok(()),
            Value::String(s) => s.chars().count() as i64,
            Value::Int(i) => i.to_string().len() as i64,
            Value::Float(f) => f.to_string().len() as i64,
            other => {
                return Err(ValidationError::type_mismatch(
                    ctx.path(),
                    "string",
                    other.type_name(),
                ))
            }
        };

        let params = |limit: i64| {
            Parameters::new()
                .with("value", value.to_parameter_string())
                .with("limit", limit.to_string())
        };

        if min.is_some() && min == max && Some(length) != min {
            let limit = min.unwrap_or_default();
            ctx.build_violation(constraint.message("exactMessage"))
                .parameters(params(limit))
                .plural(limit)
                .code(NOT_EQUAL_LENGTH_ERROR)
                .add();
            return Ok(());
        }

        if let Some(max) = max.filter(|&max| length > max) {
            ctx.build_violation(constraint.message("maxMessage"))
                .parameters(params(max))
                .plural(max)
                .code(TOO_LONG_ERROR)
                .add();
            return Ok(());
        }

        if let Some(min) = min.filter(|&min| length < min) {
            ctx.build_violation(constraint.message("minMessage"))
                .parameters(params(min))
                .plural(min)
                .code(TOO_SHORT_ERROR)
                .add();
        }
        Ok(())
    }
}
