//! A minimal content-addressable version-control backend.
//!
//! File contents, directory snapshots, and commits are stored as
//! zlib-compressed objects named by the SHA-1 digest of their content.
//! A single "latest commit" pointer is the head of a singly-linked
//! chain of commits that can be walked back to the first one.
//!
//! The pieces, leaves first:
//!
//! - [`repo::ObjectStore`]: put and get objects by ID.
//! - [`snapshot`]: record a directory (recursively) as tree objects.
//! - [`chain`]: create commits and walk their history.
//! - [`repo::on_disk::OnDisk`]: a repository in a `.mygit` directory.

pub mod chain;
pub mod config;
pub mod object;
pub mod repo;
pub mod snapshot;

#[cfg(test)]
mod test_support;
