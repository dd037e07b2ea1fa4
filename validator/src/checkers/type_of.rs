use crate::{CheckContext, ConstraintChecker, Parameters};
use assay_core::{ValidationError, ValidationResult, Value};
use assay_registry::Constraint;

pub const INVALID_TYPE_ERROR: &str = "type.invalid_type";

/// Checks the shape of a value by type name.
///
/// Accepted names: `bool`, `int`, `float`, `number`, `string`, `scalar`,
/// `list`, `map`, `array` (list or map) and `object`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeChecker;

fn is_type(value: &Value, type_name: &str) -> Option<bool> {
    let matches = match type_name {
        "bool" => matches!(value, Value::Bool(_)),
        "int" => matches!(value, Value::Int(_)),
        "float" => matches!(value, Value::Float(_)),
        "number" => value.is_number(),
        "string" => value.is_string(),
        "scalar" => matches!(
            value,
            Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_)
        ),
        "list" => matches!(value, Value::List(_)),
        "map" => matches!(value, Value::Map(_)),
        "array" => value.is_collection(),
        "object" => value.is_ref(),
        _ => return None,
    };
    Some(matches)
}

impl ConstraintChecker for TypeChecker {
    fn check(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut CheckContext<'_, '_>,
    ) -> ValidationResult<()> {
        let type_name = constraint.str_option("type")?.ok_or_else(|| {
            ValidationError::invalid_rule_configuration(constraint.name(), "missing type")
        })?;
        let matches = is_type(value, type_name).ok_or_else(|| {
            ValidationError::invalid_rule_configuration(
                constraint.name(),
                format!("unknown type \"{}\"", type_name),
            )
        })?;

        if !value.is_null() && !matches {
            let params = Parameters::new()
                .with("value", value.to_parameter_string())
                .with("type", type_name);
            ctx.build_violation(constraint.message("message"))
                .parameters(params)
                .code(INVALID_TYPE_ERROR)
                .add();
        }
        Ok(())
    }
}
