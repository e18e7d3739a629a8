//! Creates commits and walks the chain of commits back from the latest one.

use std::path::Path;

use tracing::info;

use crate::object::{Commit, Id};
use crate::repo::{CommitPointer, Error, ObjectStore, Result};
use crate::snapshot::snapshot;

/// Snapshot `root` and commit it.
///
/// See [`commit_tree`]. If the snapshot fails, no commit is written and the
/// pointer is left alone. An invalid committer is rejected before the
/// snapshot is taken.
pub fn commit<S, P>(
    store: &mut S,
    pointer: &mut P,
    root: &Path,
    message: &str,
    committer: &str,
) -> Result<Id>
where
    S: ObjectStore + ?Sized,
    P: CommitPointer + ?Sized,
{
    check_committer(committer)?;

    let tree = snapshot(store, root)?;
    commit_tree(store, pointer, tree, message, committer)
}

/// Write a commit for an already-stored tree and move the pointer to it.
///
/// The current pointer value (if any) becomes the new commit's parent.
/// The commit object is written before the pointer is updated, so the
/// pointer never names a commit that isn't in the store.
///
/// Fails with `Error::InvalidCommitter`, before anything is written, if
/// `committer` is blank or spans more than one line.
pub fn commit_tree<S, P>(
    store: &mut S,
    pointer: &mut P,
    tree: Id,
    message: &str,
    committer: &str,
) -> Result<Id>
where
    S: ObjectStore + ?Sized,
    P: CommitPointer + ?Sized,
{
    check_committer(committer)?;

    let parent = pointer.read()?;
    let object = Commit::new(tree, parent, committer, message).to_object();

    store.put_object(&object)?;
    pointer.write(object.id())?;

    info!(id = %object.id(), committer, "created commit");
    Ok(object.id().clone())
}

fn check_committer(committer: &str) -> Result<()> {
    Commit::check_committer(committer).map_err(|reason| Error::InvalidCommitter {
        name: committer.to_string(),
        reason,
    })
}

/// Walk the commit chain starting at `start`.
///
/// See [`History`].
pub fn history<S: ObjectStore + ?Sized>(store: &S, start: Id) -> History<'_, S> {
    History {
        store,
        next: Some(start),
    }
}

/// Walk the commit chain starting at whatever `pointer` names.
///
/// The history is empty if nothing has been committed yet.
pub fn log<'a, S, P>(store: &'a S, pointer: &P) -> Result<History<'a, S>>
where
    S: ObjectStore + ?Sized,
    P: CommitPointer + ?Sized,
{
    Ok(History {
        store,
        next: pointer.read()?,
    })
}

/// Lazily yields `(id, commit)` for each commit in a chain, newest first,
/// ending with the commit that has no parent.
///
/// A commit that can't be read or parsed yields an error, after which the
/// iterator is exhausted.
#[derive(Debug)]
pub struct History<'a, S: ?Sized> {
    store: &'a S,
    next: Option<Id>,
}

impl<'a, S: ObjectStore + ?Sized> Iterator for History<'a, S> {
    type Item = Result<(Id, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;

        let commit = self
            .store
            .get_object(&id)
            .and_then(|object| Commit::from_object(&object));

        Some(commit.map(|commit| {
            self.next = commit.parent().cloned();
            (id, commit)
        }))
    }
}
