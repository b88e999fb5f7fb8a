//! Represents an abstract object database.
//!
//! ## Design Goals
//!
//! Object storage is kept behind the `Repo` trait so that it can live in
//! more than one place. This crate includes a local on-disk implementation
//! (see `loose_odb::repo::on_disk`) that uses git's loose object layout.

mod error;
pub use error::{Error, Result};

pub mod on_disk;

use crate::object::{Id, Object};

/// A struct that implements the `Repo` trait represents a particular mechanism
/// for storing and retrieving object frames by their ID.
///
/// The required methods on this trait are the primitive operations a storage
/// mechanism must define. They deal only in uncompressed frames.
///
/// The provided methods layer object encoding and decoding on top of them.
pub trait Repo {
    /// Store an encoded object frame and return its ID.
    ///
    /// Storing the same frame twice is not an error and yields the same ID.
    fn put_frame(&self, frame: &[u8]) -> Result<Id>;

    /// Retrieve the encoded frame for the given ID.
    fn get_frame(&self, id: &Id) -> Result<Vec<u8>>;

    /// Returns true if an object with the given ID is stored.
    fn contains(&self, id: &Id) -> bool;

    /// Encode and store an object, returning its ID.
    ///
    /// Analogous to [`git hash-object -w`](https://git-scm.com/docs/git-hash-object).
    fn write_object(&self, object: &Object) -> Result<Id> {
        self.put_frame(&object.to_frame())
    }

    /// Retrieve and decode the object with the given ID.
    fn read_object(&self, id: &Id) -> Result<Object> {
        let frame = self.get_frame(id)?;
        Ok(Object::from_frame(&frame)?)
    }
}
