//! Traversal nodes.
//!
//! A node is a value at a path, together with what to check on it and how to
//! descend past it. Nodes borrow from the object graph, the metadata and the
//! caller's constraints; they never own validated data.

use crate::path;
use crate::ExecutionContext;
use assay_core::{GroupSpec, ObjectId, Object, ValidationError, ValidationResult, Value};
use assay_registry::{Cascade, ClassMetadata, Constraint, PropertyMetadata};

pub(crate) static NULL: Value = Value::Null;

/// A unit of traversal work.
#[derive(Debug, Clone)]
pub enum Node<'a> {
    Object(ObjectNode<'a>),
    Property(PropertyNode<'a>),
    Value(ValueNode<'a>),
}

impl<'a> Node<'a> {
    pub fn path(&self) -> &str {
        match self {
            Node::Object(n) => &n.path,
            Node::Property(n) => &n.path,
            Node::Value(n) => &n.path,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Node::Object(n) => n.depth,
            Node::Property(n) => n.depth,
            Node::Value(n) => n.depth,
        }
    }

    pub fn groups(&self) -> &GroupSpec {
        match self {
            Node::Object(n) => &n.groups,
            Node::Property(n) => &n.groups,
            Node::Value(n) => &n.groups,
        }
    }
}

/// An object with its class metadata.
#[derive(Debug, Clone)]
pub struct ObjectNode<'a> {
    pub id: ObjectId,
    pub object: &'a Object,
    pub class: &'a ClassMetadata,
    pub path: String,
    pub groups: GroupSpec,
    pub depth: usize,
}

impl<'a> ObjectNode<'a> {
    /// One property node per declared property, in declaration order.
    ///
    /// Properties absent from the object read as `null`.
    pub fn properties(&self) -> Vec<PropertyNode<'a>> {
        self.class
            .properties
            .iter()
            .map(|metadata| PropertyNode {
                owner: self.id,
                class: self.class,
                metadata,
                value: self.object.get(&metadata.name).unwrap_or(&NULL),
                path: path::append(&self.path, &metadata.name),
                groups: self.groups.clone(),
                depth: self.depth + 1,
            })
            .collect()
    }
}

/// A declared property of an object.
#[derive(Debug, Clone)]
pub struct PropertyNode<'a> {
    pub owner: ObjectId,
    pub class: &'a ClassMetadata,
    pub metadata: &'a PropertyMetadata,
    pub value: &'a Value,
    pub path: String,
    pub groups: GroupSpec,
    pub depth: usize,
}

impl<'a> PropertyNode<'a> {
    pub fn name(&self) -> &'a str {
        &self.metadata.name
    }
}

/// A value checked against an explicit constraint list.
#[derive(Debug, Clone)]
pub struct ValueNode<'a> {
    pub value: &'a Value,
    pub constraints: &'a [Constraint],
    pub cascade: Cascade,
    pub path: String,
    pub groups: GroupSpec,
    pub depth: usize,
}

/// Resolve an object reference into an object node.
pub(crate) fn object_node<'g>(
    ctx: &ExecutionContext<'g>,
    id: ObjectId,
    path: String,
    groups: GroupSpec,
    depth: usize,
) -> ValidationResult<ObjectNode<'g>> {
    let object = ctx
        .graph()
        .get(id)
        .ok_or(ValidationError::UnknownObject(id))?;
    let class = ctx
        .metadata()
        .metadata_for(&object.type_name)
        .ok_or_else(|| ValidationError::no_metadata(object.type_name.clone()))?;
    Ok(ObjectNode {
        id,
        object,
        class,
        path,
        groups,
        depth,
    })
}

/// Child nodes produced by cascading past `value`.
///
/// `null` never cascades. An object cascade over a list or map walks its
/// elements one level deep.
pub(crate) fn cascade_children<'g: 'n, 'n>(
    ctx: &ExecutionContext<'g>,
    value: &'n Value,
    cascade: Cascade,
    base: &str,
    groups: &GroupSpec,
    depth: usize,
) -> ValidationResult<Vec<Node<'n>>> {
    if value.is_null() {
        return Ok(Vec::new());
    }

    match cascade {
        Cascade::None => Ok(Vec::new()),
        Cascade::Object => match value {
            Value::Ref(id) => Ok(vec![Node::Object(object_node(
                ctx,
                *id,
                base.to_string(),
                groups.clone(),
                depth,
            )?)]),
            Value::List(_) | Value::Map(_) => elements(ctx, value, false, base, groups, depth),
            other => Err(ValidationError::type_mismatch(
                base,
                "object or collection",
                other.type_name(),
            )),
        },
        Cascade::Collection { deep } => elements(ctx, value, deep, base, groups, depth),
    }
}

fn elements<'g: 'n, 'n>(
    ctx: &ExecutionContext<'g>,
    value: &'n Value,
    deep: bool,
    base: &str,
    groups: &GroupSpec,
    depth: usize,
) -> ValidationResult<Vec<Node<'n>>> {
    let entries = value
        .entries()
        .ok_or_else(|| ValidationError::type_mismatch(base, "collection", value.type_name()))?;

    let mut children = Vec::with_capacity(entries.len());
    for (key, element) in entries {
        let path = path::append(base, &path::element(&key));
        match element {
            Value::Ref(id) => children.push(Node::Object(object_node(
                ctx,
                *id,
                path,
                groups.clone(),
                depth,
            )?)),
            Value::List(_) | Value::Map(_) if deep => children.push(Node::Value(ValueNode {
                value: element,
                constraints: &[],
                cascade: Cascade::Collection { deep: true },
                path,
                groups: groups.clone(),
                depth,
            })),
            _ => {}
        }
    }
    Ok(children)
}
