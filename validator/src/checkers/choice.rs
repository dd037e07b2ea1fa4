use crate::{CheckContext, ConstraintChecker, Parameters};
use assay_core::{ValidationError, ValidationResult, Value};
use assay_registry::Constraint;

pub const NO_SUCH_CHOICE_ERROR: &str = "choice.no_such_choice";

/// Requires the value to equal one of a fixed list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChoiceChecker;

impl ConstraintChecker for ChoiceChecker {
    fn check(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut CheckContext<'_, '_>,
    ) -> ValidationResult<()> {
        let choices = match constraint.value_option("choices")? {
            Some(Value::List(choices)) => choices,
            other => {
                return Err(ValidationError::invalid_rule_configuration(
                    constraint.name(),
                    format!(
                        "\"choices\" must be a list, got {}",
                        other.map_or("nothing", Value::type_name)
                    ),
                ))
            }
        };

        if !value.is_null() && !choices.contains(value) {
            ctx.build_violation(constraint.message("message"))
                .parameters(Parameters::new().with("value", value.to_parameter_string()))
                .code(NO_SUCH_CHOICE_ERROR)
                .add();
        }
        Ok(())
    }
}
