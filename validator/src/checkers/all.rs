use crate::{path, CheckContext, ConstraintChecker};
use assay_core::{ValidationError, ValidationResult, Value};
use assay_registry::Constraint;

/// Applies nested constraints to every element of a list or map.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllChecker;

impl ConstraintChecker for AllChecker {
    fn check(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut CheckContext<'_, '_>,
    ) -> ValidationResult<()> {
        if value.is_null() {
            return Ok(());
        }
        let entries = value.entries().ok_or_else(|| {
            ValidationError::type_mismatch(ctx.path(), "collection", value.type_name())
        })?;
        let rules = constraint.rules_option("constraints")?;
        let group = ctx.group().clone();

        for (key, element) in entries {
            ctx.validate_sub_value(element, rules, &path::element(&key), group.clone())?;
        }
        Ok(())
    }
}
