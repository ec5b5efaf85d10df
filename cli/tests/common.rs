use std::path::Path;

use assert_cmd::Command;

// Build a command that runs the `sprig` binary in `path`.
#[allow(dead_code)]
pub fn sprig_in(path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sprig").unwrap();
    cmd.current_dir(path);
    cmd
}

// Create an empty repository in `path` using the `sprig` binary itself.
#[allow(dead_code)]
pub fn init_empty_repo(path: &Path) {
    sprig_in(path).arg("init").assert().success();
}
