//! Object structures for Assay.
//!
//! Objects live in an arena and refer to each other through
//! [`Value::Ref`], so cyclic and shared references are plain data.

use crate::{Map, ObjectId, Value};

/// A typed object with named properties.
#[derive(Debug, Clone)]
pub struct Object {
    /// Unique identifier for this object.
    pub id: ObjectId,
    /// Name of the type whose metadata describes this object.
    pub type_name: String,
    /// Property values.
    pub properties: Map,
}

impl Object {
    /// Create a new object with the given properties.
    pub fn new(id: ObjectId, type_name: impl Into<String>, properties: Map) -> Self {
        Self {
            id,
            type_name: type_name.into(),
            properties,
        }
    }

    /// Get a property value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

/// Arena owning every object reachable from a validated value.
#[derive(Debug, Clone, Default)]
pub struct ObjectGraph {
    objects: Vec<Object>,
}

impl ObjectGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object and return its identity.
    pub fn insert(&mut self, type_name: impl Into<String>, properties: Map) -> ObjectId {
        let id = ObjectId::new(self.objects.len() as u64 + 1);
        self.objects.push(Object::new(id, type_name, properties));
        id
    }

    /// Get an object by id.
    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        let index = id.raw().checked_sub(1)?;
        self.objects.get(usize::try_from(index).ok()?)
    }

    /// Set a property on an existing object. Returns false if the object does not exist.
    ///
    /// This is how back-references are wired after both ends are inserted.
    pub fn set(&mut self, id: ObjectId, name: impl Into<String>, value: Value) -> bool {
        let Some(index) = id
            .raw()
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
        else {
            return false;
        };
        match self.objects.get_mut(index) {
            Some(object) => {
                object.properties.insert(name, value);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
