use super::{parse_utils, Error, FileMode, Id, Result};

/// One named child of a tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeEntry {
    mode: String,
    name: String,
    id: Id,
}

impl TreeEntry {
    /// Create a tree entry.
    ///
    /// `mode` must be a non-empty string of octal digits. `name` must be a single
    /// path segment: non-empty, with no `/` and no NUL.
    pub fn new(mode: &str, name: &str, id: Id) -> Result<TreeEntry> {
        if mode.is_empty() || !mode.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
            return Err(Error::malformed(format!("invalid mode `{}`", mode)));
        }

        if name.is_empty() {
            return Err(Error::malformed("tree entry has an empty name"));
        }

        if name.contains('/') || name.contains('\0') {
            return Err(Error::malformed(format!(
                "tree entry name `{}` is not a single path segment",
                name.escape_debug()
            )));
        }

        Ok(TreeEntry {
            mode: mode.to_owned(),
            name: name.to_owned(),
            id,
        })
    }

    /// Create a tree entry with one of the standard file modes.
    pub fn with_file_mode(mode: FileMode, name: &str, id: Id) -> Result<TreeEntry> {
        TreeEntry::new(mode.as_octal(), name, id)
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Interprets the mode, if it is one of the standard ones.
    pub fn file_mode(&self) -> Option<FileMode> {
        FileMode::from_octal(&self.mode)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &Id {
        &self.id
    }
}

/// A tree is an ordered list of entries, each naming a blob or a nested tree.
///
/// Entry order is preserved exactly as given or as parsed. Sorting is the
/// caller's concern, since re-ordering would change the tree's ID.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn new(entries: Vec<TreeEntry>) -> Tree {
        Tree { entries }
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    /// Finds the first entry with the given name.
    pub fn entry(&self, name: &str) -> Option<&TreeEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut payload = Vec::new();

        for entry in &self.entries {
            payload.extend_from_slice(entry.mode.as_bytes());
            payload.push(b' ');
            payload.extend_from_slice(entry.name.as_bytes());
            payload.push(0);
            payload.extend_from_slice(entry.id.as_bytes());
        }

        payload
    }

    pub fn deserialize(payload: &[u8]) -> Result<Tree> {
        let mut entries = Vec::new();
        let mut rest = payload;

        while !rest.is_empty() {
            let (mode, after_mode) = parse_utils::split_once(rest, b' ')
                .ok_or_else(|| Error::malformed("tree entry has no mode terminator"))?;

            let (name, after_name) = parse_utils::split_once(after_mode, 0)
                .ok_or_else(|| Error::malformed("tree entry has no name terminator"))?;

            let mode = parse_utils::utf8(mode, "tree entry mode")?;
            let name = parse_utils::utf8(name, "tree entry name")?;

            if after_name.len() < 20 {
                return Err(Error::malformed(format!(
                    "tree entry `{}` has a truncated object ID",
                    name
                )));
            }

            let (id, after_id) = after_name.split_at(20);
            let id = Id::new(id).map_err(|err| Error::malformed(err.to_string()))?;

            entries.push(TreeEntry::new(mode, name, id)?);
            rest = after_id;
        }

        Ok(Tree { entries })
    }
}
