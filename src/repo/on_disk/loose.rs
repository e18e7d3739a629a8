use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::object::{Id, Object};
use crate::repo::{Error, ObjectStore, Result};

/// Objects stored one file per object, zlib-compressed, under
/// `<objects dir>/<first 2 hex digits>/<remaining 38 hex digits>`.
///
/// Splitting on the first byte of the ID keeps any one directory
/// down to a manageable size.
#[derive(Debug)]
pub struct LooseObjects {
    objects_dir: PathBuf,
}

impl LooseObjects {
    pub fn new<P: Into<PathBuf>>(objects_dir: P) -> LooseObjects {
        LooseObjects {
            objects_dir: objects_dir.into(),
        }
    }

    pub fn objects_dir(&self) -> &Path {
        &self.objects_dir
    }

    /// Return the path where the object with the given ID is (or would be) stored.
    pub fn object_path(&self, id: &Id) -> PathBuf {
        let (bucket, entry) = id.bucket_and_entry();
        self.objects_dir.join(bucket).join(entry)
    }
}

impl ObjectStore for LooseObjects {
    fn put_object(&mut self, object: &Object) -> Result<()> {
        let path = self.object_path(object.id());

        // Every object path has a bucket directory as its parent.
        let bucket_dir = path.parent().unwrap_or(&self.objects_dir);
        fs::create_dir_all(bucket_dir)?;

        // Compress into a temporary file and move it into place, so a reader
        // never sees a partially written object. If the object already
        // exists, it is replaced with identical bytes.
        let mut temp = NamedTempFile::new_in(bucket_dir)?;
        {
            let mut encoder = ZlibEncoder::new(&mut temp, Compression::default());
            encoder.write_all(&object.stored_form())?;
            encoder.finish()?;
        }
        super::set_file_permissions(temp.as_file())?;
        temp.persist(&path).map_err(|err| err.error)?;

        debug!(id = %object.id(), kind = %object.kind(), len = object.len(), "wrote object");
        Ok(())
    }

    fn get_object(&self, id: &Id) -> Result<Object> {
        let path = self.object_path(id);

        let compressed = match fs::read(&path) {
            Ok(compressed) => compressed,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::NotFound(id.to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        let mut stored = Vec::new();
        ZlibDecoder::new(compressed.as_slice())
            .read_to_end(&mut stored)
            .map_err(|err| Error::CorruptObject {
                id: id.clone(),
                reason: err.to_string(),
            })?;

        let object = Object::from_stored_form(id, stored)?;

        debug!(id = %id, kind = %object.kind(), len = object.len(), "read object");
        Ok(object)
    }

    fn contains(&self, id: &Id) -> Result<bool> {
        Ok(self.object_path(id).is_file())
    }
}
