use thiserror::Error;

/// Describes why an object's bytes could not be understood.
///
/// These errors don't know which object they came from. The repository layer
/// attaches the object ID when it lifts them into [`crate::repo::Error`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// The envelope or payload doesn't follow the format for its type.
    #[error("malformed object: {0}")]
    Malformed(String),

    /// The envelope names a type other than blob, tree, commit, or tag.
    #[error("unknown object type `{0}`")]
    UnknownKind(String),
}

impl Error {
    pub(crate) fn malformed<S: Into<String>>(reason: S) -> Error {
        Error::Malformed(reason.into())
    }
}

/// A specialized `Result` type for object parsing.
pub type Result<T> = std::result::Result<T, Error>;
