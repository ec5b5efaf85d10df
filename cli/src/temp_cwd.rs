use std::{
    env,
    path::{Path, PathBuf},
};

/// Switches the process working directory for the lifetime of the guard.
///
/// Commands such as `hash-object -w` find their repository from the
/// working directory, so in-process tests point it at a `TempRepo`.
/// The directory is shared by every thread in the test binary; tests
/// that create a `TempCwd` must be `#[serial]`.
pub(crate) struct TempCwd {
    restore_to: PathBuf,
}

impl TempCwd {
    pub fn new<P: AsRef<Path>>(path: P) -> TempCwd {
        let restore_to = env::current_dir().unwrap();
        env::set_current_dir(path.as_ref()).unwrap();

        TempCwd { restore_to }
    }
}

impl Drop for TempCwd {
    fn drop(&mut self) {
        env::set_current_dir(&self.restore_to).unwrap();
    }
}
