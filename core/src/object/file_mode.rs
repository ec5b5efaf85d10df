/// Describes the file type recorded in a tree entry.
///
/// Git uses a variation on the Unix file permissions flags to denote an entry's
/// intended type on disk. The following values are recognized:
///
/// * `100644` - normal file
/// * `100755` - executable file
/// * `120000` - symbolic link
/// * `40000` - tree (subdirectory)
/// * `160000` - submodule (aka gitlink)
///
/// Trees written by older tools may carry other modes, so [`TreeEntry`]
/// keeps the raw mode string and only interprets it on request.
///
/// [`TreeEntry`]: struct.TreeEntry.html
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FileMode {
    Normal,
    Executable,
    SymbolicLink,
    Tree,
    Submodule,
}

impl FileMode {
    /// Convert from the octal text used in a tree entry.
    ///
    /// Returns `None` if the value is not one of the recognized constants.
    pub fn from_octal(mode: &str) -> Option<FileMode> {
        match mode {
            "100644" => Some(FileMode::Normal),
            "100755" => Some(FileMode::Executable),
            "120000" => Some(FileMode::SymbolicLink),
            "40000" => Some(FileMode::Tree),
            "160000" => Some(FileMode::Submodule),
            _ => None,
        }
    }

    /// Convert to the octal text written in a tree entry.
    pub fn as_octal(self) -> &'static str {
        match self {
            FileMode::Normal => "100644",
            FileMode::Executable => "100755",
            FileMode::SymbolicLink => "120000",
            FileMode::Tree => "40000",
            FileMode::Submodule => "160000",
        }
    }
}
