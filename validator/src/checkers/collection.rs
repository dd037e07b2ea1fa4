//! The structured-map checker.
//!
//! Policy for a declared field:
//!
//! | field rule | present        | absent                               |
//! |------------|----------------|--------------------------------------|
//! | Required   | nested rules   | missing violation                    |
//! | Optional   | nested rules   | nothing                              |
//! | Implicit   | nested rules   | missing violation unless allowed     |
//!
//! Keys with no declared field are violations unless `allowExtraFields`.

use crate::{path, CheckContext, ConstraintChecker};
use assay_core::{ValidationError, ValidationResult, Value};
use assay_registry::{Constraint, FieldRule};

pub const MISSING_FIELD_ERROR: &str = "collection.missing_field";
pub const NO_SUCH_FIELD_ERROR: &str = "collection.no_such_field";

/// Validates a map (or list, keyed by index) against declared fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionChecker;

impl ConstraintChecker for CollectionChecker {
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
            ValidationError::type_mismatch(ctx.path(), "map or list", value.type_name())
        })?;

        let fields = constraint.fields_option("fields")?;
        let allow_extra = constraint.bool_option("allowExtraFields", false)?;
        let allow_missing = constraint.bool_option("allowMissingFields", false)?;
        let group = ctx.group().clone();

        for field in fields {
            let sub_path = path::element(&field.name);
            let present = entries.iter().find(|(key, _)| *key == field.name);

            match present {
                Some((_, field_value)) => {
                    ctx.validate_sub_value(
                        field_value,
                        field.rule.constraints(),
                        &sub_path,
                        group.clone(),
                    )?;
                }
                None => {
                    let missing = match field.rule {
                        FieldRule::Required(_) => true,
                        FieldRule::Optional(_) => false,
                        FieldRule::Implicit(_) => !allow_missing,
                    };
                    if missing {
                        ctx.build_violation(constraint.message("missingFieldsMessage"))
                            .parameter("field", field.name.as_str())
                            .at_path(sub_path)
                            .invalid_value(Value::Null)
                            .code(MISSING_FIELD_ERROR)
                            .add();
                    }
                }
            }
        }

        if !allow_extra {
            for (key, extra) in &entries {
                if fields.iter().any(|field| field.name == *key) {
                    continue;
                }
                ctx.build_violation(constraint.message("extraFieldsMessage"))
                    .parameter("field", key.as_str())
                    .at_path(path::element(key))
                    .invalid_value((*extra).clone())
                    .code(NO_SUCH_FIELD_ERROR)
                    .add();
            }
        }
        Ok(())
    }
}
