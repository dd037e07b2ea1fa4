//! Public validation entry points.

use crate::node::{object_node, NULL};
use crate::traverser::NodeTraverser;
use crate::{
    path, CheckerRegistry, ExecutionContext, MessageInterpolator, Node, PlaceholderInterpolator,
    PropertyNode, ValidatorConfig, ValueNode, ViolationList,
};
use assay_core::{GroupSpec, ObjectGraph, ObjectId, ValidationError, ValidationResult, Value};
use assay_registry::{Cascade, Constraint, MetadataProvider, MetadataRegistry};
use tracing::debug;

/// Validates values and object graphs against constraints and class
/// metadata.
///
/// Immutable once built; every call starts a fresh run, so one validator can
/// serve concurrent callers.
pub struct Validator {
    metadata: Box<dyn MetadataProvider>,
    checkers: CheckerRegistry,
    interpolator: Box<dyn MessageInterpolator>,
    config: ValidatorConfig,
}

impl Validator {
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn metadata(&self) -> &dyn MetadataProvider {
        self.metadata.as_ref()
    }

    /// Validate a bare value against explicit constraints.
    pub fn validate(
        &self,
        value: &Value,
        constraints: &[Constraint],
        groups: impl Into<GroupSpec>,
    ) -> ValidationResult<ViolationList> {
        self.validate_in(&ObjectGraph::new(), value, constraints, groups)
    }

    /// Validate a value that may reference objects of `graph`.
    ///
    /// A root object reference is also validated against its class metadata.
    pub fn validate_in(
        &self,
        graph: &ObjectGraph,
        value: &Value,
        constraints: &[Constraint],
        groups: impl Into<GroupSpec>,
    ) -> ValidationResult<ViolationList> {
        self.checkers.verify(constraints)?;
        let groups = groups.into();
        debug!(constraints = constraints.len(), ?groups, "validating value");

        let cascade = if value.is_ref() {
            Cascade::Object
        } else {
            Cascade::None
        };
        let ctx = self.context(graph, value.clone());
        let node = Node::Value(ValueNode {
            value,
            constraints,
            cascade,
            path: self.config.root_path.clone(),
            groups,
            depth: 0,
        });
        self.run(ctx, node)
    }

    /// Validate an object of `graph` against its class metadata, cascading
    /// into referenced objects.
    pub fn validate_object(
        &self,
        graph: &ObjectGraph,
        id: ObjectId,
        groups: impl Into<GroupSpec>,
    ) -> ValidationResult<ViolationList> {
        let groups = groups.into();
        debug!(object = %id, ?groups, "validating object");

        let ctx = self.context(graph, Value::Ref(id));
        let node = object_node(&ctx, id, self.config.root_path.clone(), groups, 0)?;
        self.run(ctx, Node::Object(node))
    }

    /// Validate one declared property of an object.
    pub fn validate_property(
        &self,
        graph: &ObjectGraph,
        id: ObjectId,
        property: &str,
        groups: impl Into<GroupSpec>,
    ) -> ValidationResult<ViolationList> {
        let object = graph.get(id).ok_or(ValidationError::UnknownObject(id))?;
        let value = object.get(property).unwrap_or(&NULL);
        self.property_run(graph, id, property, value, groups.into())
    }

    /// Validate a candidate value as if it were assigned to a property,
    /// without touching the object.
    pub fn validate_property_value(
        &self,
        graph: &ObjectGraph,
        id: ObjectId,
        property: &str,
        value: &Value,
        groups: impl Into<GroupSpec>,
    ) -> ValidationResult<ViolationList> {
        self.property_run(graph, id, property, value, groups.into())
    }

    /// Removed single-value entry point.
    #[deprecated(note = "use `validate` instead")]
    pub fn validate_value(
        &self,
        _value: &Value,
        _constraints: &[Constraint],
        _groups: impl Into<GroupSpec>,
    ) -> ValidationResult<ViolationList> {
        Err(ValidationError::unsupported_operation(
            "validate_value has been removed, use validate instead",
        ))
    }

    fn property_run(
        &self,
        graph: &ObjectGraph,
        id: ObjectId,
        property: &str,
        value: &Value,
        groups: GroupSpec,
    ) -> ValidationResult<ViolationList> {
        debug!(object = %id, property, ?groups, "validating property");

        let ctx = self.context(graph, Value::Ref(id));
        let object = object_node(&ctx, id, String::new(), GroupSpec::default(), 0)?;
        let metadata = object
            .class
            .property(property)
            .ok_or_else(|| ValidationError::unknown_property(&object.class.name, property))?;
        let node = Node::Property(PropertyNode {
            owner: id,
            class: object.class,
            metadata,
            value,
            path: path::append(&self.config.root_path, property),
            groups,
            depth: 0,
        });
        self.run(ctx, node)
    }

    fn context<'g>(&'g self, graph: &'g ObjectGraph, root: Value) -> ExecutionContext<'g> {
        ExecutionContext::new(
            graph,
            self.metadata.as_ref(),
            &self.checkers,
            self.interpolator.as_ref(),
            &self.config,
            root,
        )
    }

    fn run<'g: 'n, 'n>(
        &self,
        mut ctx: ExecutionContext<'g>,
        node: Node<'n>,
    ) -> ValidationResult<ViolationList> {
        NodeTraverser::traverse(&mut ctx, vec![node])?;
        let violations = ctx.into_violations();
        debug!(violations = violations.len(), "validation finished");
        Ok(violations)
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("checkers", &self.checkers)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for a [`Validator`].
#[derive(Default)]
pub struct ValidatorBuilder {
    metadata: Option<Box<dyn MetadataProvider>>,
    checkers: Option<CheckerRegistry>,
    interpolator: Option<Box<dyn MessageInterpolator>>,
    config: ValidatorConfig,
}

impl ValidatorBuilder {
    /// Class metadata source. Defaults to an empty registry.
    pub fn metadata(mut self, provider: impl MetadataProvider + 'static) -> Self {
        self.metadata = Some(Box::new(provider));
        self
    }

    /// Checker registry. Defaults to the built-in checkers.
    pub fn checkers(mut self, checkers: CheckerRegistry) -> Self {
        self.checkers = Some(checkers);
        self
    }

    /// Message interpolator. Defaults to [`PlaceholderInterpolator`].
    pub fn interpolator(mut self, interpolator: impl MessageInterpolator + 'static) -> Self {
        self.interpolator = Some(Box::new(interpolator));
        self
    }

    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the validator.
    ///
    /// Fails with `UnknownChecker` when any metadata constraint has no
    /// registered checker.
    pub fn build(self) -> ValidationResult<Validator> {
        let metadata = self
            .metadata
            .unwrap_or_else(|| Box::new(MetadataRegistry::default()));
        let checkers = self.checkers.unwrap_or_else(CheckerRegistry::with_builtins);

        for class in metadata.classes() {
            checkers.verify(class.all_constraints())?;
        }

        Ok(Validator {
            metadata,
            checkers,
            interpolator: self
                .interpolator
                .unwrap_or_else(|| Box::new(PlaceholderInterpolator)),
            config: self.config,
        })
    }
}
