use std::fs;

use super::super::*;

#[test]
fn creates_layout() {
    let temp = tempfile::tempdir().unwrap();
    let work_dir = temp.path().join("r");

    let r = OnDiskRepo::init(&work_dir).unwrap();
    assert_eq!(r.work_dir(), work_dir.as_path());
    assert_eq!(r.git_dir(), work_dir.join(".git").as_path());
    assert_eq!(r.format_version(), 0);

    let git_dir = work_dir.join(".git");
    assert!(git_dir.join("objects").is_dir());
    assert!(git_dir.join("refs/heads").is_dir());
    assert!(git_dir.join("refs/tags").is_dir());
    assert!(git_dir.join("description").is_file());

    assert_eq!(
        fs::read_to_string(git_dir.join("HEAD")).unwrap(),
        "ref: refs/heads/master\n"
    );

    // The default branch is unborn until something is committed to it.
    assert!(!git_dir.join("refs/heads/master").exists());

    assert_eq!(fs::read_dir(git_dir.join("objects")).unwrap().count(), 0);
    assert_eq!(fs::read_dir(git_dir.join("refs/heads")).unwrap().count(), 0);
    assert_eq!(fs::read_dir(git_dir.join("refs/tags")).unwrap().count(), 0);
}

#[test]
fn config_can_be_read_back() {
    let temp = tempfile::tempdir().unwrap();
    OnDiskRepo::init(temp.path()).unwrap();

    let text = fs::read_to_string(temp.path().join(".git/config")).unwrap();
    let config = Config::parse(&text).unwrap();
    assert_eq!(config.get("core", "repositoryformatversion"), Some("0"));

    let r = OnDiskRepo::open(temp.path()).unwrap();
    assert_eq!(r.format_version(), SUPPORTED_FORMAT_VERSION);
}

#[test]
fn into_existing_empty_dir() {
    let temp = tempfile::tempdir().unwrap();
    let r = OnDiskRepo::init(temp.path()).unwrap();
    assert_eq!(r.work_dir(), temp.path());
    assert!(temp.path().join(".git").is_dir());
}

#[test]
fn creates_missing_parents() {
    let temp = tempfile::tempdir().unwrap();
    let work_dir = temp.path().join("a/b/c");

    OnDiskRepo::init(&work_dir).unwrap();
    assert!(work_dir.join(".git/objects").is_dir());
}

#[test]
fn err_if_git_dir_exists() {
    let temp = tempfile::tempdir().unwrap();
    let git_dir = temp.path().join(".git");
    fs::create_dir_all(&git_dir).unwrap();

    let err = OnDiskRepo::init(temp.path()).unwrap_err();
    if let Error::InvalidTarget(path) = err {
        assert_eq!(path, temp.path());
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn err_if_dir_not_empty() {
    let temp = tempfile::tempdir().unwrap();
    let existing = temp.path().join("README");
    fs::write(&existing, "hello").unwrap();

    let err = OnDiskRepo::init(temp.path()).unwrap_err();
    if let Error::InvalidTarget(_) = err {
        // expected
    } else {
        panic!("wrong error: {:?}", err);
    }

    // Nothing was touched.
    assert!(!temp.path().join(".git").exists());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    assert_eq!(fs::read_to_string(&existing).unwrap(), "hello");
}

#[test]
fn err_if_target_is_file() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("file");
    fs::write(&file, "").unwrap();

    let err = OnDiskRepo::init(&file).unwrap_err();
    if let Error::InvalidTarget(path) = err {
        assert_eq!(path, file);
    } else {
        panic!("wrong error: {:?}", err);
    }
}
