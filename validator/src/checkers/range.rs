use crate::{CheckContext, ConstraintChecker, Parameters};
use assay_core::{ValidationError, ValidationResult, Value};
use assay_registry::Constraint;

pub const TOO_LOW_ERROR: &str = "range.too_low";
pub const TOO_HIGH_ERROR: &str = "range.too_high";
pub const INVALID_NUMBER_ERROR: &str = "range.invalid_number";

/// Bounds a number, inclusive on both ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeChecker;

impl ConstraintChecker for RangeChecker {
    fn check(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut CheckContext<'_, '_>,
    ) -> ValidationResult<()> {
        let min = constraint.number_option("min")?;
        let max = constraint.number_option("max")?;
        if min.is_none() && max.is_none() {
            return Err(ValidationError::invalid_rule_configuration(
                constraint.name(),
                "either option \"min\" or \"max\" must be given",
            ));
        }

        if value.is_null() {
            return Ok(());
        }

        let Some(number) = value.as_f64() else {
            ctx.build_violation(constraint.message("invalidMessage"))
                .parameters(Parameters::new().with("value", value.to_parameter_string()))
                .code(INVALID_NUMBER_ERROR)
                .add();
            return Ok(());
        };

        let limit = |name: &str| -> ValidationResult<String> {
            Ok(constraint
                .value_option(name)?
                .map(Value::to_parameter_string)
                .unwrap_or_default())
        };

        if min.is_some_and(|min| number < min) {
            let params = Parameters::new()
                .with("value", value.to_parameter_string())
                .with("limit", limit("min")?);
            ctx.build_violation(constraint.message("minMessage"))
                .parameters(params)
                .code(TOO_LOW_ERROR)
                .add();
        } else if max.is_some_and(|max| number > max) {
            let params = Parameters::new()
                .with("value", value.to_parameter_string())
                .with("limit", limit("max")?);
            ctx.build_violation(constraint.message("maxMessage"))
                .parameters(params)
                .code(TOO_HIGH_ERROR)
                .add();
        }
        Ok(())
    }
}
