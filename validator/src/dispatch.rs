//! Checker trait and the kind-to-checker registry.

use crate::checkers;
use crate::CheckContext;
use assay_core::{ValidationError, ValidationResult, Value};
use assay_registry::{kinds, Constraint, ConstraintKind};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Validation logic for one constraint kind.
///
/// Checkers are stateless; everything a check needs arrives through its
/// arguments. Violations go to `ctx`, fatal errors are returned.
pub trait ConstraintChecker: Send + Sync {
    fn check(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut CheckContext<'_, '_>,
    ) -> ValidationResult<()>;
}

struct FnChecker<F>(F);

impl<F> ConstraintChecker for FnChecker<F>
where
    F: Fn(&Value, &Constraint, &mut CheckContext<'_, '_>) -> ValidationResult<()> + Send + Sync,
{
    fn check(
        &self,
        value: &Value,
        constraint: &Constraint,
        ctx: &mut CheckContext<'_, '_>,
    ) -> ValidationResult<()> {
        (self.0)(value, constraint, ctx)
    }
}

/// Maps constraint kinds to their checkers.
#[derive(Clone, Default)]
pub struct CheckerRegistry {
    checkers: HashMap<&'static str, Arc<dyn ConstraintChecker>>,
}

impl CheckerRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with a checker for every built-in kind.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register(&kinds::NOT_NULL, checkers::NotNullChecker)
            .register(&kinds::NOT_BLANK, checkers::NotBlankChecker)
            .register(&kinds::LENGTH, checkers::LengthChecker)
            .register(&kinds::RANGE, checkers::RangeChecker)
            .register(&kinds::REGEX, checkers::RegexChecker::new())
            .register(&kinds::TYPE, checkers::TypeChecker)
            .register(&kinds::CHOICE, checkers::ChoiceChecker)
            .register(&kinds::ALL, checkers::AllChecker)
            .register(&kinds::COLLECTION, checkers::CollectionChecker);
        registry
    }

    /// Register (or replace) the checker for a kind.
    pub fn register(
        &mut self,
        kind: &'static ConstraintKind,
        checker: impl ConstraintChecker + 'static,
    ) -> &mut Self {
        self.checkers.insert(kind.name, Arc::new(checker));
        self
    }

    /// Register a closure as the checker for a kind.
    pub fn register_fn<F>(&mut self, kind: &'static ConstraintKind, check: F) -> &mut Self
    where
        F: Fn(&Value, &Constraint, &mut CheckContext<'_, '_>) -> ValidationResult<()>
            + Send
            + Sync
            + 'static,
    {
        self.register(kind, FnChecker(check))
    }

    pub fn contains(&self, kind: &ConstraintKind) -> bool {
        self.checkers.contains_key(kind.name)
    }

    /// Get the checker for a kind.
    pub fn resolve(&self, kind: &ConstraintKind) -> ValidationResult<&dyn ConstraintChecker> {
        self.checkers
            .get(kind.name)
            .map(|checker| checker.as_ref())
            .ok_or_else(|| ValidationError::unknown_checker(kind.name))
    }

    /// Fail on the first constraint (nested ones included) whose kind has no
    /// checker.
    pub fn verify<'c>(&self, constraints: impl IntoIterator<Item = &'c Constraint>) -> ValidationResult<()> {
        for constraint in constraints {
            self.resolve(constraint.kind())?;
            for nested in constraint.nested() {
                self.resolve(nested.kind())?;
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}

impl fmt::Debug for CheckerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.checkers.keys().collect();
        kinds.sort();
        f.debug_struct("CheckerRegistry").field("kinds", &kinds).finish()
    }
}
