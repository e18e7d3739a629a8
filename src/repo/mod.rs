//! Represents an abstract repository.
//!
//! ## Design Goals
//!
//! Objects and the latest-commit pointer can live in different storage
//! mechanisms. The built-in on-disk repository (see `mygit::repo::on_disk`)
//! keeps both under a `.mygit` directory; the in-memory implementations in
//! this module keep everything in process memory, which is handy for tests
//! and for embedding.

mod error;
pub use error::{Error, Result};

mod memory;
pub use memory::{MemoryObjects, MemoryPointer};

pub mod on_disk;

use crate::object::{Id, Kind, Object};

/// A struct that implements the `ObjectStore` trait represents a particular
/// mechanism for storing and retrieving objects by ID.
///
/// The required methods are the primitive operations a storage backend must
/// define. The provided methods build on them.
///
/// Objects are never modified or removed once written. Writing an object
/// that already exists leaves the store unchanged.
pub trait ObjectStore {
    /// Write an object to the store.
    fn put_object(&mut self, object: &Object) -> Result<()>;

    /// Read the object with the given ID.
    ///
    /// Fails with `Error::NotFound` if there is no such object.
    fn get_object(&self, id: &Id) -> Result<Object>;

    /// Returns true if an object with the given ID exists.
    fn contains(&self, id: &Id) -> Result<bool>;

    /// Create an object from `kind` and `content`, write it, and return its ID.
    fn put(&mut self, kind: Kind, content: Vec<u8>) -> Result<Id> {
        let object = Object::new(kind, content);
        self.put_object(&object)?;
        Ok(object.id().clone())
    }

    /// Read an object named by a hex string.
    ///
    /// A string that isn't a valid object ID can't name an object,
    /// so it is reported as `Error::NotFound`.
    fn get_hex(&self, hex: &str) -> Result<Object> {
        let id = Id::from_hex(hex).map_err(|_| Error::NotFound(hex.to_string()))?;
        self.get_object(&id)
    }
}

/// Holds the ID of the most recent commit, if any.
///
/// This is the only mutable state in a repository.
pub trait CommitPointer {
    /// Return the latest commit, or `None` if nothing has been committed yet.
    fn read(&self) -> Result<Option<Id>>;

    /// Replace the latest commit.
    fn write(&mut self, id: &Id) -> Result<()>;
}
