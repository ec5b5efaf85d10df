use std::{
    fs, io,
    path::{Path, PathBuf},
};

use sprig_core::repo::{Error, Result};
use tracing::{debug, trace};

use crate::config::Config;

mod init;
mod objects;

/// The only repository format this crate understands.
pub const SUPPORTED_FORMAT_VERSION: u32 = 0;

/// Implementation of `sprig_core::repo::Repo` that stores content on the local file system.
///
/// _IMPORTANT NOTE:_ This is intended as a reference implementation largely
/// for testing purposes and may not necessarily handle all of the edge cases that
/// the traditional `git` command-line interface will handle.
///
/// That said, it does intentionally use the same `.git` folder format as command-line
/// `git` so that objects written by one can be read by the other.
///
/// The struct holds no state beyond what it read from `.git/config` when it was
/// opened. Changes made to the config afterwards are not seen until the
/// repository is opened again.
#[derive(Debug)]
pub struct OnDiskRepo {
    work_dir: PathBuf,
    git_dir: PathBuf,
    format_version: u32,
}

impl OnDiskRepo {
    /// Open an existing on-disk repository.
    ///
    /// `work_dir` should be the top-level working directory. A `.git` directory should
    /// exist at this path. Use the `init` function to create an empty on-disk repository
    /// if necessary, or `discover` to search for one.
    pub fn open(work_dir: &Path) -> Result<Self> {
        let work_dir = work_dir.to_path_buf();
        if !work_dir.is_dir() {
            return Err(Error::WorkDirDoesntExist(work_dir));
        }

        let git_dir = work_dir.join(".git");
        if !git_dir.is_dir() {
            return Err(Error::GitDirDoesntExist(git_dir));
        }

        let format_version = read_format_version(&git_dir)?;

        Ok(OnDiskRepo {
            work_dir,
            git_dir,
            format_version,
        })
    }

    /// Find the repository containing `start`.
    ///
    /// Looks for a `.git` directory in `start` and then in each of its parents,
    /// stopping at the first one found. Symbolic links and relative segments in
    /// `start` are resolved before the search begins.
    pub fn discover(start: &Path) -> Result<Self> {
        let start = fs::canonicalize(start).map_err(Error::io(start))?;
        let mut path = start.as_path();

        loop {
            trace!(path = %path.display(), "looking for repository");

            if path.join(".git").is_dir() {
                debug!(work_dir = %path.display(), "discovered repository");
                return OnDiskRepo::open(path);
            }

            // The root of the file system is the only path with no parent.
            match path.parent() {
                Some(parent) => path = parent,
                None => return Err(Error::RepositoryNotFound(start.clone())),
            }
        }
    }

    /// Return the working directory for this repo.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    /// Return the path to the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.git_dir.as_path()
    }

    /// Return the format version recorded in the repo's config.
    pub fn format_version(&self) -> u32 {
        self.format_version
    }

    /// Return the path to the loose object store.
    pub fn objects_dir(&self) -> PathBuf {
        self.git_dir.join("objects")
    }
}

fn read_format_version(git_dir: &Path) -> Result<u32> {
    let path = git_dir.join("config");

    let invalid = |reason: String| Error::InvalidConfig {
        path: path.clone(),
        reason,
    };

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(invalid("file is missing".to_owned()));
        }
        Err(err) => return Err(Error::io(&path)(err)),
    };

    let config = Config::parse(&text).map_err(|err| invalid(err.to_string()))?;

    let version = config
        .get("core", "repositoryformatversion")
        .ok_or_else(|| invalid("core.repositoryformatversion is not set".to_owned()))?;

    let version: u32 = version.parse().map_err(|_| {
        invalid(format!(
            "core.repositoryformatversion `{}` is not an integer",
            version
        ))
    })?;

    if version != SUPPORTED_FORMAT_VERSION {
        return Err(Error::UnsupportedFormat { path, version });
    }

    Ok(version)
}

#[cfg(test)]
mod tests;
