use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::object::{self, Id};

/// Describes the potential error conditions that might arise from `Repo` operations.
///
/// Wherever possible, the error names the path or object ID involved.
#[derive(Debug, Error)]
pub enum Error {
    #[error("work dir `{0}` doesn't exist")]
    WorkDirDoesntExist(PathBuf),

    #[error("git dir `{0}` doesn't exist")]
    GitDirDoesntExist(PathBuf),

    #[error("`{0}` is not an empty directory")]
    InvalidTarget(PathBuf),

    #[error("not a repository (or any parent up to the file system root): `{0}`")]
    RepositoryNotFound(PathBuf),

    #[error("invalid config `{path}`: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("unsupported repositoryformatversion {version} in `{path}`")]
    UnsupportedFormat { path: PathBuf, version: u32 },

    #[error("object {0} not found")]
    ObjectNotFound(Id),

    #[error("object {id} is corrupt: {reason}")]
    CorruptStore { id: Id, reason: String },

    #[error("object {id} is malformed: {reason}")]
    MalformedObject { id: Id, reason: String },

    #[error("object {id} has unknown type `{kind}`")]
    UnknownObjectType { id: Id, kind: String },

    #[error("I/O error on `{path}`: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Returns a closure for `map_err` that tags an I/O error with `path`.
    pub fn io<P: AsRef<Path>>(path: P) -> impl FnOnce(io::Error) -> Error {
        let path = path.as_ref().to_path_buf();
        move |source| Error::IoError { path, source }
    }

    /// Attach the ID of the object being read to a parse error.
    pub fn from_object_error(id: Id, err: object::Error) -> Error {
        match err {
            object::Error::Malformed(reason) => Error::MalformedObject { id, reason },
            object::Error::UnknownKind(kind) => Error::UnknownObjectType { id, kind },
        }
    }
}

/// A specialized `Result` type for `Repo` operations.
pub type Result<T> = std::result::Result<T, Error>;
