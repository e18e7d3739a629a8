use std::collections::HashMap;

use super::{CommitPointer, Error, ObjectStore, Result};
use crate::object::{Id, Object};

/// An in-memory, `HashMap`-based object store.
///
/// Objects are cloned on read and write. Everything is lost when the
/// store is dropped.
#[derive(Debug, Default)]
pub struct MemoryObjects {
    objects: HashMap<Id, Object>,
}

impl MemoryObjects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectStore for MemoryObjects {
    fn put_object(&mut self, object: &Object) -> Result<()> {
        self.objects
            .entry(object.id().clone())
            .or_insert_with(|| object.clone());
        Ok(())
    }

    fn get_object(&self, id: &Id) -> Result<Object> {
        self.objects
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    fn contains(&self, id: &Id) -> Result<bool> {
        Ok(self.objects.contains_key(id))
    }
}

/// An in-memory latest-commit pointer.
#[derive(Debug, Default)]
pub struct MemoryPointer {
    latest: Option<Id>,
}

impl MemoryPointer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CommitPointer for MemoryPointer {
    fn read(&self) -> Result<Option<Id>> {
        Ok(self.latest.clone())
    }

    fn write(&mut self, id: &Id) -> Result<()> {
        self.latest = Some(id.clone());
        Ok(())
    }
}
