//! Run state and the context handed to checkers.

use crate::traverser::NodeTraverser;
use crate::{
    path, CheckerRegistry, MessageInterpolator, Node, Parameters, ValidatorConfig, ValueNode,
    Violation, ViolationList,
};
use assay_core::{
    ConstraintId, GroupName, GroupSpec, ObjectGraph, ObjectId, ValidationResult, Value,
};
use assay_registry::{Cascade, Constraint, MetadataProvider};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::trace;

/// Mutable state of a single validation run.
///
/// Owns the violation list and the bookkeeping that keeps cyclic and shared
/// references from being checked twice. Created per call, discarded after.
pub struct ExecutionContext<'g> {
    graph: &'g ObjectGraph,
    metadata: &'g dyn MetadataProvider,
    checkers: &'g CheckerRegistry,
    interpolator: &'g dyn MessageInterpolator,
    config: &'g ValidatorConfig,
    root: Arc<Value>,
    violations: ViolationList,
    /// Groups each object has been traversed in.
    validated_objects: HashMap<ObjectId, HashSet<GroupName>>,
    /// Class constraints already evaluated per object.
    validated_class_constraints: HashMap<ObjectId, HashSet<ConstraintId>>,
    /// Property constraints already evaluated per object property.
    validated_property_constraints: HashMap<(ObjectId, String), HashSet<ConstraintId>>,
}

impl<'g> ExecutionContext<'g> {
    pub(crate) fn new(
        graph: &'g ObjectGraph,
        metadata: &'g dyn MetadataProvider,
        checkers: &'g CheckerRegistry,
        interpolator: &'g dyn MessageInterpolator,
        config: &'g ValidatorConfig,
        root: Value,
    ) -> Self {
        Self {
            graph,
            metadata,
            checkers,
            interpolator,
            config,
            root: Arc::new(root),
            violations: ViolationList::new(),
            validated_objects: HashMap::new(),
            validated_class_constraints: HashMap::new(),
            validated_property_constraints: HashMap::new(),
        }
    }

    pub fn graph(&self) -> &'g ObjectGraph {
        self.graph
    }

    pub fn metadata(&self) -> &'g dyn MetadataProvider {
        self.metadata
    }

    pub(crate) fn checkers(&self) -> &'g CheckerRegistry {
        self.checkers
    }

    pub fn config(&self) -> &'g ValidatorConfig {
        self.config
    }

    /// The value the run started from.
    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn violations(&self) -> &ViolationList {
        &self.violations
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    pub(crate) fn into_violations(self) -> ViolationList {
        self.violations
    }

    /// Check if an object was already traversed in `group`.
    pub fn is_object_validated(&self, id: ObjectId, group: &GroupName) -> bool {
        self.validated_objects
            .get(&id)
            .is_some_and(|groups| groups.contains(group))
    }

    /// Record that an object is being traversed in `groups`.
    ///
    /// Returns false when every group was already recorded.
    pub(crate) fn mark_object(&mut self, id: ObjectId, groups: &GroupSpec) -> bool {
        let seen = self.validated_objects.entry(id).or_default();
        let mut fresh = false;
        for group in groups.names() {
            fresh |= seen.insert(group);
        }
        fresh
    }

    /// Returns false when the class constraint already ran on this object.
    pub(crate) fn mark_class_constraint(&mut self, id: ObjectId, constraint: ConstraintId) -> bool {
        self.validated_class_constraints
            .entry(id)
            .or_default()
            .insert(constraint)
    }

    /// Returns false when the property constraint already ran on this property.
    pub(crate) fn mark_property_constraint(
        &mut self,
        id: ObjectId,
        property: &str,
        constraint: ConstraintId,
    ) -> bool {
        self.validated_property_constraints
            .entry((id, property.to_string()))
            .or_default()
            .insert(constraint)
    }

    pub(crate) fn push_violation(
        &mut self,
        template: &str,
        parameters: Parameters,
        property_path: String,
        invalid_value: Value,
        plural: Option<i64>,
        code: Option<String>,
    ) {
        let message = self.interpolator.interpolate(template, &parameters);
        trace!(path = %property_path, %message, "violation added");
        self.violations.push(Violation {
            message,
            message_template: template.to_string(),
            parameters,
            root: Arc::clone(&self.root),
            property_path,
            invalid_value,
            plural,
            code,
        });
    }
}

/// Where the traversal currently stands.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'c> {
    pub value: &'c Value,
    pub path: &'c str,
    pub group: &'c GroupName,
    pub object: Option<ObjectId>,
    pub class: Option<&'c str>,
    pub property: Option<&'c str>,
    pub constraint: &'c Constraint,
    pub depth: usize,
}

/// The run state positioned at one (value, constraint, group) triple.
///
/// Checkers report through this and nothing else.
pub struct CheckContext<'c, 'g> {
    exec: &'c mut ExecutionContext<'g>,
    cursor: Cursor<'c>,
}

impl<'c, 'g> CheckContext<'c, 'g> {
    pub(crate) fn new(exec: &'c mut ExecutionContext<'g>, cursor: Cursor<'c>) -> Self {
        Self { exec, cursor }
    }

    /// The value under check.
    pub fn value(&self) -> &Value {
        self.cursor.value
    }

    /// Property path of the value under check.
    pub fn path(&self) -> &str {
        self.cursor.path
    }

    /// The group this constraint is being evaluated for.
    pub fn group(&self) -> &GroupName {
        self.cursor.group
    }

    pub fn constraint(&self) -> &Constraint {
        self.cursor.constraint
    }

    /// Object owning the value, if any.
    pub fn object(&self) -> Option<ObjectId> {
        self.cursor.object
    }

    pub fn class_name(&self) -> Option<&str> {
        self.cursor.class
    }

    pub fn property_name(&self) -> Option<&str> {
        self.cursor.property
    }

    pub fn root(&self) -> &Value {
        self.exec.root()
    }

    pub fn graph(&self) -> &'g ObjectGraph {
        self.exec.graph()
    }

    pub fn violation_count(&self) -> usize {
        self.exec.violation_count()
    }

    /// Report a violation at the current path for the current value.
    pub fn add_violation(&mut self, template: &str, parameters: Parameters) {
        self.exec.push_violation(
            template,
            parameters,
            self.cursor.path.to_string(),
            self.cursor.value.clone(),
            None,
            None,
        );
    }

    /// Start a violation that needs more than a message and parameters.
    pub fn build_violation(&mut self, template: &str) -> ViolationBuilder<'_, 'c, 'g> {
        ViolationBuilder {
            ctx: self,
            template: template.to_string(),
            parameters: Parameters::new(),
            sub_path: None,
            invalid_value: None,
            plural: None,
            code: None,
        }
    }

    /// Validate a nested value against `constraints` in `groups`, as part of
    /// this run.
    ///
    /// Violations land in the shared list under the current path extended by
    /// `sub_path`.
    pub fn validate_sub_value(
        &mut self,
        value: &Value,
        constraints: &[Constraint],
        sub_path: &str,
        groups: impl Into<GroupSpec>,
    ) -> ValidationResult<()> {
        let node = Node::Value(ValueNode {
            value,
            constraints,
            cascade: Cascade::None,
            path: path::append(self.cursor.path, sub_path),
            groups: groups.into(),
            depth: self.cursor.depth + 1,
        });
        NodeTraverser::traverse(&mut *self.exec, vec![node])
    }
}

/// Violation under construction. Nothing is recorded until [`add`](Self::add).
#[must_use = "a violation is only recorded by calling add()"]
pub struct ViolationBuilder<'b, 'c, 'g> {
    ctx: &'b mut CheckContext<'c, 'g>,
    template: String,
    parameters: Parameters,
    sub_path: Option<String>,
    invalid_value: Option<Value>,
    plural: Option<i64>,
    code: Option<String>,
}

impl<'b, 'c, 'g> ViolationBuilder<'b, 'c, 'g> {
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name, value);
        self
    }

    pub fn parameters(mut self, parameters: Parameters) -> Self {
        for (name, value) in parameters.iter() {
            self.parameters.insert(name, value);
        }
        self
    }

    /// Report below the current path.
    pub fn at_path(mut self, sub_path: impl Into<String>) -> Self {
        self.sub_path = Some(sub_path.into());
        self
    }

    /// Report a value other than the one under check.
    pub fn invalid_value(mut self, value: Value) -> Self {
        self.invalid_value = Some(value);
        self
    }

    pub fn plural(mut self, count: i64) -> Self {
        self.plural = Some(count);
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Record the violation.
    pub fn add(mut self) {
        let cursor = self.ctx.cursor;
        let property_path = match &self.sub_path {
            Some(sub) => path::append(cursor.path, sub),
            None => cursor.path.to_string(),
        };
        let invalid_value = self
            .invalid_value
            .unwrap_or_else(|| cursor.value.clone());
        self.ctx.exec.push_violation(
            &self.template,
            self.parameters,
            property_path,
            invalid_value,
            self.plural,
            self.code,
        );
    }
}
