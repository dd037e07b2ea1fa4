//! Shorthand constructors for built-in constraints in the `Default` group.
//!
//! Use [`Constraint::builder`] for groups, message overrides or options these
//! helpers do not expose.

use crate::kinds::{ALL, CHOICE, COLLECTION, LENGTH, NOT_BLANK, NOT_NULL, RANGE, REGEX, TYPE};
use crate::{Constraint, Field};
use assay_core::Value;

pub fn not_null() -> Constraint {
    Constraint::builder(&NOT_NULL).finish()
}

pub fn not_blank() -> Constraint {
    Constraint::builder(&NOT_BLANK).finish()
}

pub fn min_length(min: i64) -> Constraint {
    Constraint::builder(&LENGTH).option("min", min).finish()
}

pub fn max_length(max: i64) -> Constraint {
    Constraint::builder(&LENGTH).option("max", max).finish()
}

pub fn length(min: i64, max: i64) -> Constraint {
    Constraint::builder(&LENGTH)
        .option("min", min)
        .option("max", max)
        .finish()
}

pub fn min(min: impl Into<Value>) -> Constraint {
    Constraint::builder(&RANGE).option("min", min.into()).finish()
}

pub fn max(max: impl Into<Value>) -> Constraint {
    Constraint::builder(&RANGE).option("max", max.into()).finish()
}

pub fn range(min: impl Into<Value>, max: impl Into<Value>) -> Constraint {
    Constraint::builder(&RANGE)
        .option("min", min.into())
        .option("max", max.into())
        .finish()
}

pub fn regex(pattern: &str) -> Constraint {
    Constraint::builder(&REGEX).default_option(pattern).finish()
}

pub fn type_of(type_name: &str) -> Constraint {
    Constraint::builder(&TYPE).default_option(type_name).finish()
}

pub fn choice(choices: Vec<Value>) -> Constraint {
    Constraint::builder(&CHOICE)
        .default_option(Value::List(choices))
        .finish()
}

pub fn all(rules: Vec<Constraint>) -> Constraint {
    Constraint::builder(&ALL).default_option(rules).finish()
}

/// Structured-map rule with default policy: no extra fields, no missing fields.
pub fn collection(fields: Vec<Field>) -> Constraint {
    Constraint::builder(&COLLECTION).default_option(fields).finish()
}
