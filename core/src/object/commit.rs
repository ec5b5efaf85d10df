use super::{headers, parse_utils, Error, Headers, Id, Result};

/// A commit: ordered headers (`tree`, `parent`, `author`, `committer`, ...)
/// followed by a free-form message.
///
/// A `tree` header is required. `tree` and `parent` values must be object IDs.
/// Other headers are carried through untouched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commit {
    headers: Headers,
    message: Vec<u8>,
    tree: Id,
    parents: Vec<Id>,
}

impl Commit {
    /// Create a commit from a complete header list.
    pub fn new<M: Into<Vec<u8>>>(headers: Headers, message: M) -> Result<Commit> {
        let tree = headers
            .get("tree")
            .ok_or_else(|| Error::malformed("commit has no tree header"))?;
        let tree = parse_utils::hex_id(tree, "commit tree")?;

        let parents = headers
            .get_all("parent")
            .map(|p| parse_utils::hex_id(p, "commit parent"))
            .collect::<Result<Vec<Id>>>()?;

        Ok(Commit {
            headers,
            message: message.into(),
            tree,
            parents,
        })
    }

    /// Create a commit with the conventional header layout.
    pub fn with_tree(
        tree: &Id,
        parents: &[Id],
        author: &str,
        committer: &str,
        message: &str,
    ) -> Result<Commit> {
        let mut headers = Headers::new();
        headers.push("tree", tree.to_string())?;
        for parent in parents {
            headers.push("parent", parent.to_string())?;
        }
        headers.push("author", author)?;
        headers.push("committer", committer)?;

        Commit::new(headers, message)
    }

    pub fn tree(&self) -> &Id {
        &self.tree
    }

    pub fn parents(&self) -> &[Id] {
        &self.parents
    }

    pub fn author(&self) -> Option<&[u8]> {
        self.headers.get("author")
    }

    pub fn committer(&self) -> Option<&[u8]> {
        self.headers.get("committer")
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn message(&self) -> &[u8] {
        &self.message
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut payload = Vec::new();
        headers::write(&self.headers, &self.message, &mut payload);
        payload
    }

    pub fn deserialize(payload: &[u8]) -> Result<Commit> {
        let (headers, message) = headers::parse(payload)?;
        Commit::new(headers, message)
    }
}
