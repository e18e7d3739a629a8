use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::object::Id;
use crate::repo::{CommitPointer, Error, Result};

/// The latest-commit pointer, kept as a single-value file.
///
/// The file holds the 40-digit ID of the latest commit, or nothing at all
/// if there are no commits yet.
#[derive(Debug)]
pub struct LatestCommitFile {
    dir: PathBuf,
    path: PathBuf,
}

impl LatestCommitFile {
    /// Name of the pointer file within the repository directory.
    pub const FILE_NAME: &'static str = "LATEST_COMMIT";

    pub fn new(repo_dir: &Path) -> LatestCommitFile {
        LatestCommitFile {
            dir: repo_dir.to_path_buf(),
            path: repo_dir.join(Self::FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the pointer file with no commit recorded.
    pub(crate) fn create_empty(&self) -> Result<()> {
        fs::write(&self.path, "").map_err(|e| e.into())
    }
}

impl CommitPointer for LatestCommitFile {
    fn read(&self) -> Result<Option<Id>> {
        let text = fs::read_to_string(&self.path).map_err(|err| Error::Config {
            path: self.path.clone(),
            reason: err.to_string(),
        })?;

        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        Id::from_hex(text).map(Some).map_err(|err| Error::Config {
            path: self.path.clone(),
            reason: format!("invalid commit ID `{}`: {}", text, err),
        })
    }

    fn write(&mut self, id: &Id) -> Result<()> {
        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(id.to_string().as_bytes())?;
        super::set_file_permissions(temp.as_file())?;
        temp.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}
