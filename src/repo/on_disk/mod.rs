//! A repository that stores content on the local file system.
//!
//! Everything lives in a `.mygit` directory at the top of the working
//! directory:
//!
//! ```text
//! .mygit/
//!     objects/ab/cdef...   zlib-compressed objects
//!     LATEST_COMMIT        ID of the latest commit, or empty
//!     CONFIG               `name = <committer>`
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::{Error, ObjectStore, Result};
use crate::chain::{self, History};
use crate::config::{Config, COMMITTER_KEY};
use crate::object::{Commit, Id, Kind};
use crate::snapshot::snapshot;

mod loose;
pub use loose::LooseObjects;

mod pointer;
pub use pointer::LatestCommitFile;

/// Name of the repository directory within the working directory.
pub const REPO_DIR_NAME: &str = ".mygit";

/// Name of the config file within the repository directory.
pub const CONFIG_FILE_NAME: &str = "CONFIG";

/// Give a temporary file the permissions of a normally created file
/// before it is persisted. `NamedTempFile` creates files readable only
/// by the owner.
#[cfg(unix)]
pub(crate) fn set_file_permissions(file: &fs::File) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(FILE_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
pub(crate) fn set_file_permissions(_file: &fs::File) -> Result<()> {
    Ok(())
}

/// Mode of object and pointer files.
#[cfg(unix)]
pub(crate) const FILE_MODE: u32 = 0o644;

/// A repository rooted in a working directory on the local file system.
#[derive(Debug)]
pub struct OnDisk {
    work_dir: PathBuf,
    repo_dir: PathBuf,
    objects: LooseObjects,
    latest_commit: LatestCommitFile,
}

impl OnDisk {
    /// Open an existing on-disk repository.
    ///
    /// `work_dir` should be the top-level working directory. A `.mygit` directory
    /// should exist at this path. Use the `init` function to create an empty
    /// repository if necessary.
    pub fn new<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        let work_dir = work_dir.as_ref().to_path_buf();
        if !work_dir.is_dir() {
            return Err(Error::WorkDirDoesntExist(work_dir));
        }

        let repo_dir = work_dir.join(REPO_DIR_NAME);
        if !repo_dir.is_dir() {
            return Err(Error::RepoDirDoesntExist(repo_dir));
        }

        Ok(OnDisk::at(work_dir, repo_dir))
    }

    /// Create a new, empty repository in `work_dir`, recording `committer`
    /// as the name to put on commits.
    ///
    /// `work_dir` is created if it doesn't exist. A blank or multi-line
    /// `committer` is rejected with `Error::Config` before anything is created.
    pub fn init<P: AsRef<Path>>(work_dir: P, committer: &str) -> Result<Self> {
        let work_dir = work_dir.as_ref().to_path_buf();

        let repo_dir = work_dir.join(REPO_DIR_NAME);
        if repo_dir.exists() {
            return Err(Error::RepoDirShouldntExist(repo_dir));
        }

        let repo = OnDisk::at(work_dir, repo_dir);

        Commit::check_committer(committer).map_err(|reason| Error::Config {
            path: repo.config_path(),
            reason: format!("{} `{}`: {}", COMMITTER_KEY, committer.escape_debug(), reason),
        })?;

        fs::create_dir_all(repo.objects.objects_dir())?;
        repo.latest_commit.create_empty()?;
        Config::with_committer(committer).save(&repo.config_path())?;

        info!(repo_dir = %repo.repo_dir.display(), committer, "initialized repository");
        Ok(repo)
    }

    fn at(work_dir: PathBuf, repo_dir: PathBuf) -> Self {
        OnDisk {
            objects: LooseObjects::new(repo_dir.join("objects")),
            latest_commit: LatestCommitFile::new(&repo_dir),
            work_dir,
            repo_dir,
        }
    }

    /// Return the working directory for this repo.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    /// Return the path to the `.mygit` directory.
    pub fn repo_dir(&self) -> &Path {
        self.repo_dir.as_path()
    }

    /// Return the path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.repo_dir.join(CONFIG_FILE_NAME)
    }

    pub fn objects(&self) -> &LooseObjects {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut LooseObjects {
        &mut self.objects
    }

    pub fn latest_commit(&self) -> &LatestCommitFile {
        &self.latest_commit
    }

    /// Read the repository's config file.
    pub fn config(&self) -> Result<Config> {
        Config::load(&self.config_path())
    }

    /// Store the file at `path` as a blob and return its ID.
    ///
    /// Analogous to `git hash-object -w`.
    pub fn hash_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Id> {
        let content = fs::read(path)?;
        self.objects.put(Kind::Blob, content)
    }

    /// Snapshot the working directory as a tree and return its ID.
    ///
    /// Analogous to `git write-tree`, except that the snapshot is taken
    /// straight from the working directory.
    pub fn write_tree(&mut self) -> Result<Id> {
        snapshot(&mut self.objects, &self.work_dir)
    }

    /// Snapshot the working directory and commit it, using the committer
    /// name from the config file.
    pub fn commit(&mut self, message: &str) -> Result<Id> {
        let config_path = self.config_path();
        let config = Config::load(&config_path)?;
        let committer = config.committer(&config_path)?;

        chain::commit(
            &mut self.objects,
            &mut self.latest_commit,
            &self.work_dir,
            message,
            committer,
        )
    }

    /// Walk the history back from the latest commit.
    pub fn log(&self) -> Result<History<'_, LooseObjects>> {
        chain::log(&self.objects, &self.latest_commit)
    }
}
