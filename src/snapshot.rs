//! Records a directory, recursively, as tree objects.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::object::{Id, Kind, Tree, TreeEntry};
use crate::repo::{on_disk::REPO_DIR_NAME, Error, ObjectStore, Result};

/// Directory names that are never part of a snapshot, at any depth.
pub const IGNORED_NAMES: &[&str] = &[REPO_DIR_NAME, ".git"];

/// Store the directory at `dir` as a tree object and return its ID.
///
/// Each regular file becomes a blob entry and each subdirectory becomes a
/// tree entry pointing at its own (recursively built) tree object. Anything
/// else (symlinks, sockets, devices) is skipped. Entries are sorted by name,
/// so identical directories always produce the same ID.
///
/// If this fails partway, the blobs and subtrees stored before the failure
/// remain in the store.
pub fn snapshot<S: ObjectStore + ?Sized>(store: &mut S, dir: &Path) -> Result<Id> {
    let unreadable = |source: io::Error| Error::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();

    for dir_entry in fs::read_dir(dir).map_err(unreadable)? {
        let dir_entry = dir_entry.map_err(unreadable)?;
        let path = dir_entry.path();

        let name = match dir_entry.file_name().to_str() {
            Some(name) if !name.contains('\n') => name.to_string(),
            _ => return Err(Error::UnsupportedFileName(path)),
        };

        if IGNORED_NAMES.contains(&name.as_str()) {
            continue;
        }

        let file_type = dir_entry.file_type().map_err(unreadable)?;

        if file_type.is_dir() {
            let id = snapshot(store, &path)?;
            entries.push(TreeEntry::new(name, id, Kind::Tree));
        } else if file_type.is_file() {
            let id = store.put(Kind::Blob, fs::read(&path)?)?;
            entries.push(TreeEntry::new(name, id, Kind::Blob));
        } else {
            debug!(path = %path.display(), "skipping entry that is neither a file nor a directory");
        }
    }

    let object = Tree::new(entries).to_object();
    store.put_object(&object)?;

    debug!(id = %object.id(), dir = %dir.display(), "wrote tree");
    Ok(object.id().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::tempdir;

    use crate::repo::MemoryObjects;

    fn write(root: &Path, rel: &str, content: &[u8]) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn tree(store: &MemoryObjects, id: &Id) -> Tree {
        Tree::from_object(&store.get_object(id).unwrap()).unwrap()
    }

    #[test]
    fn flat_directory() {
        let dir = tempdir().unwrap();
        write(dir.path(), "b.txt", b"bee");
        write(dir.path(), "a.txt", b"ay");

        let mut store = MemoryObjects::new();
        let id = snapshot(&mut store, dir.path()).unwrap();

        let t = tree(&store, &id);
        assert_eq!(t.len(), 2);

        let a = t.get("a.txt").unwrap();
        assert_eq!(a.kind(), Kind::Blob);
        assert_eq!(store.get_object(a.id()).unwrap().content(), b"ay");

        let names: Vec<&str> = t.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);

        // Two blobs and one tree.
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn nested_directories() {
        let dir = tempdir().unwrap();
        write(dir.path(), "top.txt", b"top");
        write(dir.path(), "one/mid.txt", b"mid");
        write(dir.path(), "one/two/three/deep.txt", b"deep");

        let mut store = MemoryObjects::new();
        let id = snapshot(&mut store, dir.path()).unwrap();

        let root = tree(&store, &id);
        assert_eq!(root.len(), 2);

        let one = root.get("one").unwrap();
        assert_eq!(one.kind(), Kind::Tree);

        let one = tree(&store, one.id());
        assert_eq!(one.len(), 2);
        assert_eq!(one.get("mid.txt").unwrap().kind(), Kind::Blob);

        let two = tree(&store, one.get("two").unwrap().id());
        let three = tree(&store, two.get("three").unwrap().id());
        let deep = three.get("deep.txt").unwrap();
        assert_eq!(store.get_object(deep.id()).unwrap().content(), b"deep");
    }

    #[test]
    fn identical_subtrees_share_an_id() {
        let dir = tempdir().unwrap();
        write(dir.path(), "left/x/file.txt", b"same");
        write(dir.path(), "right/y/file.txt", b"same");
        write(dir.path(), "right/other.txt", b"different");

        let mut store = MemoryObjects::new();
        let id = snapshot(&mut store, dir.path()).unwrap();

        let root = tree(&store, &id);
        let left = tree(&store, root.get("left").unwrap().id());
        let right = tree(&store, root.get("right").unwrap().id());

        assert_ne!(root.get("left").unwrap().id(), root.get("right").unwrap().id());
        assert_eq!(left.get("x").unwrap().id(), right.get("y").unwrap().id());
    }

    #[test]
    fn same_content_same_id() {
        let a = tempdir().unwrap();
        let b = tempdir().unwrap();

        // Create the files in opposite orders.
        for name in &["1", "2", "3", "sub/4"] {
            write(a.path(), name, name.as_bytes());
        }
        for name in &["sub/4", "3", "2", "1"] {
            write(b.path(), name, name.as_bytes());
        }

        let mut store = MemoryObjects::new();
        let id_a = snapshot(&mut store, a.path()).unwrap();
        let id_b = snapshot(&mut store, b.path()).unwrap();
        assert_eq!(id_a, id_b);
    }

    #[test]
    fn empty_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("empty")).unwrap();

        let mut store = MemoryObjects::new();
        let id = snapshot(&mut store, dir.path()).unwrap();

        let root = tree(&store, &id);
        let empty = root.get("empty").unwrap();
        assert_eq!(empty.kind(), Kind::Tree);
        assert!(tree(&store, empty.id()).is_empty());
    }

    #[test]
    fn skips_repo_dirs() {
        let dir = tempdir().unwrap();
        write(dir.path(), "file.txt", b"content");
        write(dir.path(), ".mygit/LATEST_COMMIT", b"");
        write(dir.path(), ".git/HEAD", b"ref: refs/heads/master\n");
        write(dir.path(), "sub/.mygit/CONFIG", b"name = me");

        let mut store = MemoryObjects::new();
        let id = snapshot(&mut store, dir.path()).unwrap();

        let root = tree(&store, &id);
        assert_eq!(root.len(), 2);
        assert!(root.get(".mygit").is_none());
        assert!(root.get(".git").is_none());

        let sub = tree(&store, root.get("sub").unwrap().id());
        assert!(sub.is_empty());
    }

    #[test]
    fn hidden_files_are_included() {
        let dir = tempdir().unwrap();
        write(dir.path(), ".gitignore", b"target\n");

        let mut store = MemoryObjects::new();
        let id = snapshot(&mut store, dir.path()).unwrap();
        assert!(tree(&store, &id).get(".gitignore").is_some());
    }

    #[cfg(unix)]
    #[test]
    fn skips_symlinks() {
        let dir = tempdir().unwrap();
        write(dir.path(), "real.txt", b"real");
        std::os::unix::fs::symlink(dir.path().join("real.txt"), dir.path().join("link.txt"))
            .unwrap();

        let mut store = MemoryObjects::new();
        let id = snapshot(&mut store, dir.path()).unwrap();

        let root = tree(&store, &id);
        assert_eq!(root.len(), 1);
        assert!(root.get("link.txt").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn error_newline_in_name() {
        let dir = tempdir().unwrap();
        write(dir.path(), "bad\nname", b"x");

        let mut store = MemoryObjects::new();
        match snapshot(&mut store, dir.path()).unwrap_err() {
            Error::UnsupportedFileName(path) => assert_eq!(path, dir.path().join("bad\nname")),
            err => panic!("Unexpected error {:?}", err),
        }
    }

    #[test]
    fn error_directory_unreadable() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");

        let mut store = MemoryObjects::new();
        match snapshot(&mut store, &missing).unwrap_err() {
            Error::DirectoryUnreadable { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            err => panic!("Unexpected error {:?}", err),
        }
        assert!(store.is_empty());
    }
}
