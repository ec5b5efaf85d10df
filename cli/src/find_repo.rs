use std::{env, path::Path};

use sprig_core::repo::{Error, Result};
use sprig_on_disk::OnDiskRepo;

// Find the repo containing the given path.
//
// The path itself and then each of its parents is checked for a
// `.git` directory; the nearest one wins. Returns
// `sprig_core::repo::Error::RepositoryNotFound` if the search reaches
// the file system root without finding one.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<OnDiskRepo> {
    OnDiskRepo::discover(path.as_ref())
}

// Find the repo containing the current working directory.
#[cfg(not(tarpaulin_include))]
pub fn from_current_dir() -> Result<OnDiskRepo> {
    // This function is excluded from code coverage because we can't
    // be sure of the execution environment while testing. So we keep
    // it as simple as possible.
    let path = env::current_dir().map_err(Error::io("."))?;
    from_path(path)
}
