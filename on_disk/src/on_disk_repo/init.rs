use std::{fs, io, path::Path};

use sprig_core::repo::{Error, Result};
use tracing::debug;

use super::{OnDiskRepo, SUPPORTED_FORMAT_VERSION};

impl OnDiskRepo {
    /// Creates a new, empty repository on the local file system.
    ///
    /// `work_dir` must either not exist or be an empty directory. That is checked
    /// before anything is written, so a rejected target is left untouched.
    ///
    /// Analogous to [`git init`](https://git-scm.com/docs/git-init).
    pub fn init(work_dir: &Path) -> Result<Self> {
        check_target(work_dir)?;

        fs::create_dir_all(work_dir).map_err(Error::io(work_dir))?;

        let git_dir = work_dir.join(".git");
        fs::create_dir(&git_dir).map_err(Error::io(&git_dir))?;

        create_config(&git_dir)?;
        create_description(&git_dir)?;
        create_head(&git_dir)?;
        create_objects_dir(&git_dir)?;
        create_refs_dir(&git_dir)?;

        debug!(work_dir = %work_dir.display(), "initialized repository");

        Ok(OnDiskRepo {
            work_dir: work_dir.to_path_buf(),
            git_dir,
            format_version: SUPPORTED_FORMAT_VERSION,
        })
    }
}

fn check_target(work_dir: &Path) -> Result<()> {
    match fs::metadata(work_dir) {
        Ok(metadata) => {
            let is_empty_dir = metadata.is_dir()
                && fs::read_dir(work_dir)
                    .map_err(Error::io(work_dir))?
                    .next()
                    .is_none();

            if !is_empty_dir {
                Err(Error::InvalidTarget(work_dir.to_path_buf()))
            } else {
                Ok(())
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(Error::io(work_dir)(err)),
    }
}

fn create_config(git_dir: &Path) -> Result<()> {
    let config_path = git_dir.join("config");
    let config_txt = format!(
        "[core]\n\trepositoryformatversion = {}\n\tfilemode = true\n\tbare = false\n\tlogallrefupdates = true\n",
        SUPPORTED_FORMAT_VERSION
    );

    fs::write(&config_path, config_txt).map_err(Error::io(&config_path))
}

fn create_description(git_dir: &Path) -> Result<()> {
    let desc_path = git_dir.join("description");
    let desc_txt = "Unnamed repository; edit this file 'description' to name the repository.\n";

    fs::write(&desc_path, desc_txt).map_err(Error::io(&desc_path))
}

// HEAD names the default branch, which won't exist until something is committed to it.
fn create_head(git_dir: &Path) -> Result<()> {
    let head_path = git_dir.join("HEAD");
    let head_txt = "ref: refs/heads/master\n";

    fs::write(&head_path, head_txt).map_err(Error::io(&head_path))
}

fn create_objects_dir(git_dir: &Path) -> Result<()> {
    let objects_dir = git_dir.join("objects");
    fs::create_dir_all(&objects_dir).map_err(Error::io(&objects_dir))
}

fn create_refs_dir(git_dir: &Path) -> Result<()> {
    let heads_dir = git_dir.join("refs/heads");
    fs::create_dir_all(&heads_dir).map_err(Error::io(&heads_dir))?;

    let tags_dir = git_dir.join("refs/tags");
    fs::create_dir_all(&tags_dir).map_err(Error::io(&tags_dir))
}
