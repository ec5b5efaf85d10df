//! Represents an abstract object repository.
//!
//! ## Design Goals
//!
//! Sprig intends to allow repositories to be stored in multiple different mechanisms.
//! The `sprig_on_disk` crate provides local on-disk repositories that use git's
//! `.git` folder layout, but you could envision repositories stored entirely in
//! memory, or on a remote file system or database.

mod error;
pub use error::{Error, Result};

use crate::object::{Id, Object};

/// A struct that implements the `Repo` trait represents a particular mechanism
/// for storing and accessing objects.
///
/// Objects are content-addressed: the ID returned by `put_object` is a pure
/// function of the object's content, and storing the same content twice is
/// indistinguishable from storing it once.
pub trait Repo {
    /// Store an object and return its ID. No-op if the object is already present.
    fn put_object(&mut self, object: &Object) -> Result<Id>;

    /// Read the object with the given ID.
    ///
    /// Returns `Error::ObjectNotFound` if there is no such object.
    fn get_object(&self, id: &Id) -> Result<Object>;

    /// Returns true if an object with the given ID is stored.
    fn has_object(&self, id: &Id) -> Result<bool>;
}
