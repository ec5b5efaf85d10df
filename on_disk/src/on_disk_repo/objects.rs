use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use sprig_core::{
    object::{envelope, Id, Object},
    repo::{Error, Repo, Result},
};
use tempfile::NamedTempFile;
use tracing::debug;

use super::OnDiskRepo;
use crate::codec;

impl OnDiskRepo {
    /// Return the path where the loose object with the given ID is stored.
    ///
    /// The first two hex digits of the ID name a subdirectory of `.git/objects`;
    /// the remaining 38 name the file within it.
    pub fn object_path(&self, id: &Id) -> PathBuf {
        let hex = id.to_string();
        let (dir, file) = hex.split_at(2);
        self.objects_dir().join(dir).join(file)
    }
}

impl Repo for OnDiskRepo {
    /// Writes the object as a loose object.
    ///
    /// The compressed envelope is written to a temporary file next to its final
    /// location and then moved into place, so a partially written object is
    /// never visible under its ID. If the object already exists (or another
    /// writer gets there first), nothing is written.
    fn put_object(&mut self, object: &Object) -> Result<Id> {
        let envelope = object.to_envelope();
        let id = envelope::digest(&envelope);

        let path = self.object_path(&id);
        if path.is_file() {
            debug!(%id, "object already stored");
            return Ok(id);
        }

        let hex = id.to_string();
        let dir = self.objects_dir().join(&hex[..2]);
        fs::create_dir_all(&dir).map_err(Error::io(&dir))?;

        let compressed = codec::encode(&envelope).map_err(Error::io(&path))?;

        let mut temp = NamedTempFile::new_in(&dir).map_err(Error::io(&dir))?;
        temp.write_all(&compressed).map_err(Error::io(temp.path()))?;

        match temp.persist_noclobber(&path) {
            Ok(_) => {
                debug!(%id, kind = %object.kind(), path = %path.display(), "wrote object");
            }
            Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => {
                debug!(%id, "object stored by a concurrent writer");
            }
            Err(err) => return Err(Error::io(&path)(err.error)),
        }

        Ok(id)
    }

    /// Reads a loose object.
    ///
    /// The decompressed envelope must hash to `id`, declare the correct length,
    /// and parse as its declared type.
    fn get_object(&self, id: &Id) -> Result<Object> {
        let path = self.object_path(id);

        let compressed = match fs::read(&path) {
            Ok(compressed) => compressed,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ObjectNotFound(*id));
            }
            Err(err) => return Err(Error::io(&path)(err)),
        };

        let envelope = codec::decode(&compressed).map_err(|err| Error::CorruptStore {
            id: *id,
            reason: err.to_string(),
        })?;

        let actual = envelope::digest(&envelope);
        if actual != *id {
            return Err(Error::CorruptStore {
                id: *id,
                reason: format!("content hashes to {}", actual),
            });
        }

        let object =
            Object::from_envelope(&envelope).map_err(|err| Error::from_object_error(*id, err))?;

        debug!(%id, kind = %object.kind(), "read object");
        Ok(object)
    }

    fn has_object(&self, id: &Id) -> Result<bool> {
        Ok(self.object_path(id).is_file())
    }
}
