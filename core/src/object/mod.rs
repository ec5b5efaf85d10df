//! Represents the git concept of an "object": a typed payload identified by
//! the SHA-1 hash of its framed content.

mod blob;
pub use blob::Blob;

mod commit;
pub use commit::Commit;

pub mod envelope;

mod error;
pub use error::{Error, Result};

mod file_mode;
pub use file_mode::FileMode;

mod headers;
pub use headers::Headers;

mod id;
pub use id::{Id, ParseIdError};

mod kind;
pub use kind::Kind;

pub(crate) mod parse_utils;

mod tag;
pub use tag::Tag;

mod tree;
pub use tree::{Tree, TreeEntry};

/// Describes a single object stored (or about to be stored) in a repository.
///
/// Each variant owns the structured form of its payload. Converting to and
/// from bytes is exact: parsing a payload and serializing it again yields
/// the same bytes, and therefore the same ID.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Object {
    Blob(Blob),
    Tree(Tree),
    Commit(Commit),
    Tag(Tag),
}

impl Object {
    /// Return the kind of the object.
    pub fn kind(&self) -> Kind {
        match self {
            Object::Blob(_) => Kind::Blob,
            Object::Tree(_) => Kind::Tree,
            Object::Commit(_) => Kind::Commit,
            Object::Tag(_) => Kind::Tag,
        }
    }

    /// Returns the payload bytes (without the envelope).
    pub fn serialize(&self) -> Vec<u8> {
        match self {
            Object::Blob(blob) => blob.serialize(),
            Object::Tree(tree) => tree.serialize(),
            Object::Commit(commit) => commit.serialize(),
            Object::Tag(tag) => tag.serialize(),
        }
    }

    /// Parses a payload as an object of the given kind.
    pub fn deserialize(kind: Kind, payload: &[u8]) -> Result<Object> {
        Ok(match kind {
            Kind::Blob => Object::Blob(Blob::deserialize(payload)),
            Kind::Tree => Object::Tree(Tree::deserialize(payload)?),
            Kind::Commit => Object::Commit(Commit::deserialize(payload)?),
            Kind::Tag => Object::Tag(Tag::deserialize(payload)?),
        })
    }

    /// Returns the full envelope: type, length, and payload.
    pub fn to_envelope(&self) -> Vec<u8> {
        envelope::frame(self.kind(), &self.serialize())
    }

    /// Parses an envelope, dispatching on its type tag.
    pub fn from_envelope(bytes: &[u8]) -> Result<Object> {
        let (kind, payload) = envelope::parse(bytes)?;
        Object::deserialize(kind, payload)
    }

    /// Computes the object's ID from its content, size, and type.
    ///
    /// This is functionally equivalent to the
    /// [`git hash-object`](https://git-scm.com/docs/git-hash-object) command
    /// without the `-w` option that would write the object to the repo.
    pub fn id(&self) -> Id {
        envelope::digest(&self.to_envelope())
    }
}

impl From<Blob> for Object {
    fn from(blob: Blob) -> Object {
        Object::Blob(blob)
    }
}

impl From<Tree> for Object {
    fn from(tree: Tree) -> Object {
        Object::Tree(tree)
    }
}

impl From<Commit> for Object {
    fn from(commit: Commit) -> Object {
        Object::Commit(commit)
    }
}

impl From<Tag> for Object {
    fn from(tag: Tag) -> Object {
        Object::Tag(tag)
    }
}
