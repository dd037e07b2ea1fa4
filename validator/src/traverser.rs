//! The node work queue.
//!
//! Nodes are processed depth-first: children of a node are pushed to the
//! front of the queue so a subtree finishes before its next sibling starts.

use crate::context::Cursor;
use crate::groups::{cascade_groups, resolve_groups, Batch};
use crate::node::{cascade_children, Node, ObjectNode, PropertyNode, ValueNode};
use crate::{CheckContext, ExecutionContext};
use assay_core::{ValidationError, ValidationResult, Value};
use std::collections::VecDeque;
use tracing::{debug, trace, warn};

pub(crate) struct NodeTraverser;

impl NodeTraverser {
    /// Process `nodes` and everything they expand into.
    pub(crate) fn traverse<'g: 'n, 'n>(
        ctx: &mut ExecutionContext<'g>,
        nodes: Vec<Node<'n>>,
    ) -> ValidationResult<()> {
        let mut queue: VecDeque<Node<'n>> = nodes.into();

        while let Some(node) = queue.pop_front() {
            let max_depth = ctx.config().max_depth;
            if node.depth() > max_depth {
                warn!(path = node.path(), max_depth, "traversal depth limit exceeded");
                return Err(ValidationError::depth_limit_exceeded(max_depth, node.path()));
            }

            let children = match &node {
                Node::Object(n) => Self::visit_object(ctx, n)?,
                Node::Property(n) => Self::visit_property(ctx, n)?,
                Node::Value(n) => Self::visit_value(ctx, n)?,
            };

            for child in children.into_iter().rev() {
                queue.push_front(child);
            }
        }

        Ok(())
    }

    fn visit_object<'g: 'n, 'n>(
        ctx: &mut ExecutionContext<'g>,
        node: &ObjectNode<'n>,
    ) -> ValidationResult<Vec<Node<'n>>> {
        // Seen groups already ran their constraints here and queued these children
        if !ctx.mark_object(node.id, &node.groups) {
            debug!(object = %node.id, path = %node.path, "object already traversed");
            return Ok(Vec::new());
        }
        trace!(object = %node.id, class = %node.class.name, path = %node.path, "visiting object");

        let class = node.class;
        let properties = node.properties();
        let object_value = Value::Ref(node.id);

        for batch in resolve_groups(&node.groups, Some(class)) {
            let before = ctx.violation_count();

            for constraint in &class.constraints {
                let Some(group) = constraint.matching_group(&batch.groups) else {
                    continue;
                };
                if !ctx.mark_class_constraint(node.id, constraint.id()) {
                    continue;
                }
                let cursor = Cursor {
                    value: &object_value,
                    path: &node.path,
                    group,
                    object: Some(node.id),
                    class: Some(&class.name),
                    property: None,
                    constraint,
                    depth: node.depth,
                };
                Self::dispatch(ctx, cursor)?;
            }

            for property in &properties {
                Self::check_property(ctx, property, &batch)?;
            }

            if Self::stops_sequence(ctx, &batch, before) {
                debug!(object = %node.id, path = %node.path, "group sequence stopped");
                break;
            }
        }

        let groups = cascade_groups(&node.groups, class);
        let mut children = Vec::new();
        for property in &properties {
            children.extend(cascade_children(
                ctx,
                property.value,
                property.metadata.cascade,
                &property.path,
                &groups,
                property.depth + 1,
            )?);
        }
        Ok(children)
    }

    fn visit_property<'g: 'n, 'n>(
        ctx: &mut ExecutionContext<'g>,
        node: &PropertyNode<'n>,
    ) -> ValidationResult<Vec<Node<'n>>> {
        trace!(object = %node.owner, path = %node.path, "visiting property");

        for batch in resolve_groups(&node.groups, Some(node.class)) {
            let before = ctx.violation_count();
            Self::check_property(ctx, node, &batch)?;
            if Self::stops_sequence(ctx, &batch, before) {
                debug!(path = %node.path, "group sequence stopped");
                break;
            }
        }

        cascade_children(
            ctx,
            node.value,
            node.metadata.cascade,
            &node.path,
            &cascade_groups(&node.groups, node.class),
            node.depth + 1,
        )
    }

    fn visit_value<'g: 'n, 'n>(
        ctx: &mut ExecutionContext<'g>,
        node: &ValueNode<'n>,
    ) -> ValidationResult<Vec<Node<'n>>> {
        trace!(path = %node.path, "visiting value");

        for batch in resolve_groups(&node.groups, None) {
            let before = ctx.violation_count();
            for constraint in node.constraints {
                let Some(group) = constraint.matching_group(&batch.groups) else {
                    continue;
                };
                let cursor = Cursor {
                    value: node.value,
                    path: &node.path,
                    group,
                    object: None,
                    class: None,
                    property: None,
                    constraint,
                    depth: node.depth,
                };
                Self::dispatch(ctx, cursor)?;
            }
            if Self::stops_sequence(ctx, &batch, before) {
                debug!(path = %node.path, "group sequence stopped");
                break;
            }
        }

        cascade_children(
            ctx,
            node.value,
            node.cascade,
            &node.path,
            &node.groups,
            node.depth + 1,
        )
    }

    /// Run a property's constraints for one batch, once per object property.
    fn check_property(
        ctx: &mut ExecutionContext<'_>,
        property: &PropertyNode<'_>,
        batch: &Batch,
    ) -> ValidationResult<()> {
        for constraint in &property.metadata.constraints {
            let Some(group) = constraint.matching_group(&batch.groups) else {
                continue;
            };
            if !ctx.mark_property_constraint(property.owner, property.name(), constraint.id()) {
                continue;
            }
            let cursor = Cursor {
                value: property.value,
                path: &property.path,
                group,
                object: Some(property.owner),
                class: Some(&property.class.name),
                property: Some(property.name()),
                constraint,
                depth: property.depth,
            };
            Self::dispatch(ctx, cursor)?;
        }
        Ok(())
    }

    fn stops_sequence(ctx: &ExecutionContext<'_>, batch: &Batch, before: usize) -> bool {
        batch.sequenced && ctx.violation_count() > before
    }

    fn dispatch(ctx: &mut ExecutionContext<'_>, cursor: Cursor<'_>) -> ValidationResult<()> {
        let checker = ctx.checkers().resolve(cursor.constraint.kind())?;
        trace!(
            constraint = %cursor.constraint,
            group = %cursor.group,
            path = cursor.path,
            "dispatching constraint"
        );
        let mut check = CheckContext::new(ctx, cursor);
        checker.check(cursor.value, cursor.constraint, &mut check)
    }
}
