use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::OnDiskRepo;

/// A `TempRepo` creates a temporary, empty repository. It is used
/// in unit and integration tests that need a real repository on disk.
///
/// Because this struct is intended for testing, its functions
/// panic instead of returning Result structs.
pub struct TempRepo {
    #[allow(dead_code)] // tempdir is only used for RAII
    tempdir: tempfile::TempDir,
    repo: OnDiskRepo,
}

impl TempRepo {
    // Create a new repo in a temporary directory.
    // This directory will be deleted when the struct is dropped.
    pub fn new() -> TempRepo {
        let tempdir = tempfile::tempdir().unwrap();
        let repo = OnDiskRepo::init(tempdir.path()).unwrap();

        TempRepo { tempdir, repo }
    }

    // Return the path for this repo's root (working directory).
    pub fn path(&self) -> &Path {
        self.repo.work_dir()
    }

    pub fn repo(&self) -> &OnDiskRepo {
        &self.repo
    }

    pub fn repo_mut(&mut self) -> &mut OnDiskRepo {
        &mut self.repo
    }

    // List every file under `.git/objects`, sorted, relative to that directory.
    pub fn loose_objects(&self) -> Vec<PathBuf> {
        let objects_dir = self.repo.objects_dir();
        let mut found = Vec::new();

        for dir in fs::read_dir(&objects_dir).unwrap() {
            let dir = dir.unwrap().path();
            if !dir.is_dir() {
                continue;
            }

            for file in fs::read_dir(&dir).unwrap() {
                let file = file.unwrap().path();
                found.push(file.strip_prefix(&objects_dir).unwrap().to_path_buf());
            }
        }

        found.sort();
        found
    }
}

impl Default for TempRepo {
    fn default() -> Self {
        TempRepo::new()
    }
}
