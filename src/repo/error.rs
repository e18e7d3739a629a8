use std::path::PathBuf;

use thiserror::Error;

use crate::object::{Id, Kind};

/// Describes the potential error conditions that might arise from repository operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("work dir doesn't exist: {}", .0.display())]
    WorkDirDoesntExist(PathBuf),

    #[error("not a mygit repository (no {})", .0.display())]
    RepoDirDoesntExist(PathBuf),

    #[error("repository already exists: {}", .0.display())]
    RepoDirShouldntExist(PathBuf),

    #[error("no object named {0}")]
    NotFound(String),

    /// The stored bytes could not be inflated or don't carry a valid header.
    #[error("corrupt object {id}: {reason}")]
    CorruptObject { id: Id, reason: String },

    /// The object was found, but isn't a well-formed object of the expected kind.
    #[error("malformed {kind} {id}: {reason}")]
    MalformedObject { id: Id, kind: Kind, reason: String },

    /// A committer name that can't be recorded on a commit.
    #[error("invalid committer name {name:?}: {reason}")]
    InvalidCommitter { name: String, reason: &'static str },

    /// A config or pointer file is missing, unreadable, or malformed.
    #[error("invalid configuration in {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("unable to read directory {}: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file name that can't be written into a tree entry.
    #[error("unsupported file name: {}", .0.display())]
    UnsupportedFileName(PathBuf),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// A specialized `Result` type for repository operations.
pub type Result<T> = std::result::Result<T, Error>;
