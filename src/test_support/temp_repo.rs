use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::repo::on_disk::OnDisk;

/// A `TempRepo` creates an empty repository in a temporary
/// directory. The directory is deleted when the struct is dropped.
///
/// Because this struct is intended for testing, its functions
/// panic instead of returning Result structs.
pub(crate) struct TempRepo {
    #[allow(dead_code)] // tempdir is only used for RAII
    tempdir: tempfile::TempDir,
    path: PathBuf,
    repo: OnDisk,
}

impl TempRepo {
    pub const COMMITTER: &'static str = "A. U. Thor";

    pub fn new() -> TempRepo {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().to_path_buf();
        let repo = OnDisk::init(&path, Self::COMMITTER).unwrap();

        TempRepo {
            tempdir,
            path,
            repo,
        }
    }

    // Return the path for this repo's working directory.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    pub fn repo(&self) -> &OnDisk {
        &self.repo
    }

    pub fn repo_mut(&mut self) -> &mut OnDisk {
        &mut self.repo
    }

    // Write a file (creating directories as needed) relative to the
    // working directory and return the TempRepo for method chaining.
    pub fn write_file<C: AsRef<[u8]>>(&mut self, rel_path: &str, content: C) -> &mut TempRepo {
        let path = self.path.join(rel_path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::TempRepo;

    #[test]
    fn temp_path() {
        let path = {
            let mut r = TempRepo::new();
            r.write_file("a/b.txt", "b");

            let path = r.path().to_path_buf();
            assert!(path.join(".mygit").is_dir());
            assert!(path.join("a/b.txt").is_file());

            path
        };

        assert!(!path.is_dir());
    }
}
