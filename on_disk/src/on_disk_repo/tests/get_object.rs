use std::fs;

use super::super::*;

use crate::{codec, TempRepo};

use sprig_core::{
    object::{envelope, Blob, Commit, Id, Kind, Object, Tag, Tree, TreeEntry},
    repo::Repo,
};

const MISSING: &str = "3cd9329ac53613a0bfa198ae28f3af957e49573c";

// Store raw envelope bytes under their true ID, bypassing `put_object`'s checks.
fn store_raw(tr: &TempRepo, envelope_bytes: &[u8]) -> Id {
    let id = envelope::digest(envelope_bytes);
    let path = tr.repo().object_path(&id);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, codec::encode(envelope_bytes).unwrap()).unwrap();
    id
}

#[test]
fn hello_round_trip() {
    let mut tr = TempRepo::new();

    let id = tr.repo_mut().put_object(&Object::from(Blob::new("hello"))).unwrap();
    assert_eq!(id.to_string(), "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0");

    match tr.repo().get_object(&id).unwrap() {
        Object::Blob(blob) => assert_eq!(blob.data(), b"hello"),
        o => panic!("expected a blob, got {:?}", o),
    }
}

#[test]
fn every_kind_round_trips() {
    let mut tr = TempRepo::new();

    let blob = Object::from(Blob::new(vec![0u8, 1, 2, 255]));
    let tree = Object::from(Tree::new(vec![TreeEntry::new("100644", "bin", blob.id()).unwrap()]));
    let commit = Object::from(
        Commit::with_tree(&tree.id(), &[], "A <a@b> 1 +0000", "A <a@b> 1 +0000", "msg\n").unwrap(),
    );
    let tag = Object::from(
        Tag::for_object(&commit.id(), Kind::Commit, "v1", "A <a@b> 1 +0000", "v1\n").unwrap(),
    );

    for o in &[blob, tree, commit, tag] {
        let id = tr.repo_mut().put_object(o).unwrap();
        let read = tr.repo().get_object(&id).unwrap();
        assert_eq!(&read, o);
        assert_eq!(read.kind(), o.kind());
    }
}

#[test]
fn reads_objects_written_elsewhere() {
    let tr = TempRepo::new();
    let id = store_raw(&tr, b"blob 11\0Hello World");
    assert_eq!(id.to_string(), "5e1c309dae7f45e0f39b1bf3ac3cd9db12e7d689");

    let o = tr.repo().get_object(&id).unwrap();
    assert_eq!(o.serialize(), b"Hello World".to_vec());
}

#[test]
fn error_not_found() {
    let tr = TempRepo::new();
    let id = Id::from_hex(MISSING).unwrap();

    assert!(!tr.repo().has_object(&id).unwrap());

    let err = tr.repo().get_object(&id).unwrap_err();
    if let Error::ObjectNotFound(err_id) = err {
        assert_eq!(err_id, id);
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn error_truncated_file() {
    let mut tr = TempRepo::new();
    let id = tr.repo_mut().put_object(&Object::from(Blob::new("hello"))).unwrap();

    let path = tr.repo().object_path(&id);
    let mut stored = fs::read(&path).unwrap();
    stored.pop();
    fs::write(&path, &stored).unwrap();

    match tr.repo().get_object(&id).unwrap_err() {
        Error::CorruptStore { id: err_id, .. } => assert_eq!(err_id, id),
        Error::MalformedObject { id: err_id, .. } => assert_eq!(err_id, id),
        err => panic!("wrong error: {:?}", err),
    }
}

#[test]
fn error_not_zlib() {
    let tr = TempRepo::new();
    let id = Id::from_hex(MISSING).unwrap();

    let path = tr.repo().object_path(&id);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "sand in the gears").unwrap();

    let err = tr.repo().get_object(&id).unwrap_err();
    if let Error::CorruptStore { id: err_id, .. } = err {
        assert_eq!(err_id, id);
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn error_content_doesnt_match_id() {
    let tr = TempRepo::new();
    let id = Id::from_hex(MISSING).unwrap();

    let path = tr.repo().object_path(&id);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, codec::encode(b"blob 5\0hello").unwrap()).unwrap();

    let err = tr.repo().get_object(&id).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "object {} is corrupt: content hashes to b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0",
            MISSING
        )
    );
}

#[test]
fn error_length_mismatch() {
    let tr = TempRepo::new();
    let id = store_raw(&tr, b"blob 6\0hello");

    let err = tr.repo().get_object(&id).unwrap_err();
    if let Error::MalformedObject { id: err_id, reason } = err {
        assert_eq!(err_id, id);
        assert_eq!(reason, "bad length: header says 6 bytes, payload has 5");
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn error_unknown_type() {
    let tr = TempRepo::new();
    let id = store_raw(&tr, b"note 5\0hello");

    let err = tr.repo().get_object(&id).unwrap_err();
    if let Error::UnknownObjectType { id: err_id, kind } = err {
        assert_eq!(err_id, id);
        assert_eq!(kind, "note");
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn error_malformed_payload() {
    let tr = TempRepo::new();
    let id = store_raw(&tr, b"commit 12\0author x\n\nhi");

    let err = tr.repo().get_object(&id).unwrap_err();
    if let Error::MalformedObject { reason, .. } = err {
        assert_eq!(reason, "commit has no tree header");
    } else {
        panic!("wrong error: {:?}", err);
    }
}
