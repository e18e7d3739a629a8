//! Represents the concept of an "object" which is a tuple of
//! object kind and binary data identified by the hash of both.
//!
//! The stored form of an object is `<kind> <length>\0<content>`. The object's
//! ID is the SHA-1 digest of that stored form, which keeps the kind attached
//! to the content: an empty blob and an empty tree are different objects.

use crate::repo::{Error, Result};

mod commit;
pub use commit::Commit;

mod id;
pub use id::{Id, ParseIdError};

mod kind;
pub use kind::Kind;

pub(crate) mod parse_utils;

mod tree;
pub use tree::{Tree, TreeEntry};

/// Describes a single object stored (or about to be stored) in a repository.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    id: Id,
    kind: Kind,
    content: Vec<u8>,
}

impl Object {
    /// Create a new Object and compute its ID.
    pub fn new(kind: Kind, content: Vec<u8>) -> Object {
        let id = Id::for_content(&stored_form(kind, &content));
        Object { id, kind, content }
    }

    /// Return the ID of the object.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Return the kind of the object.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Return the content (payload) of the object.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Consume the object and return its content.
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }

    /// Return the size (in bytes) of the content.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the header-prefixed bytes whose digest is this object's ID.
    pub fn stored_form(&self) -> Vec<u8> {
        stored_form(self.kind, &self.content)
    }

    /// Reconstruct an object from its stored form.
    ///
    /// `id` is the ID the stored form was looked up by. It is used only to
    /// describe a failure; the content is not re-hashed.
    pub fn from_stored_form(id: &Id, stored: Vec<u8>) -> Result<Object> {
        let corrupt = |reason: String| Error::CorruptObject {
            id: id.clone(),
            reason,
        };

        let nul = stored
            .iter()
            .position(|b| *b == 0)
            .ok_or_else(|| corrupt("missing header terminator".to_string()))?;

        let header = std::str::from_utf8(&stored[..nul])
            .map_err(|_| corrupt("header is not valid UTF-8".to_string()))?;

        let (kind, len) = header
            .split_once(' ')
            .ok_or_else(|| corrupt(format!("malformed header `{}`", header)))?;

        let kind: Kind = kind.parse().map_err(corrupt)?;

        let len = parse_utils::decimal_len(len)
            .ok_or_else(|| corrupt(format!("invalid length `{}`", len)))?;

        let content = stored[nul + 1..].to_vec();
        if content.len() != len {
            return Err(corrupt(format!(
                "header says {} bytes, found {}",
                len,
                content.len()
            )));
        }

        Ok(Object {
            id: id.clone(),
            kind,
            content,
        })
    }

    /// Fail with `MalformedObject` unless this object has the given kind.
    pub(crate) fn expect_kind(&self, kind: Kind) -> Result<()> {
        if self.kind == kind {
            Ok(())
        } else {
            Err(Error::MalformedObject {
                id: self.id.clone(),
                kind,
                reason: format!("object is a {}", self.kind),
            })
        }
    }
}

fn stored_form(kind: Kind, content: &[u8]) -> Vec<u8> {
    let header = format!("{} {}\0", kind, content.len());

    let mut stored = Vec::with_capacity(header.len() + content.len());
    stored.extend_from_slice(header.as_bytes());
    stored.extend_from_slice(content);
    stored
}
