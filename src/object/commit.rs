use super::{parse_utils, Id, Kind, Object};
use crate::repo::{Error, Result};

/// A commit record: one tree, an optional parent commit, who made it, and why.
///
/// Serialized as:
///
/// ```text
/// tree: <id>
/// parent: <id>
/// committer: <name>
///
/// message: <text>
/// ```
///
/// The `parent` line is omitted for the first commit in a chain.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commit {
    tree: Id,
    parent: Option<Id>,
    committer: String,
    message: String,
}

impl Commit {
    pub fn new<C, M>(tree: Id, parent: Option<Id>, committer: C, message: M) -> Commit
    where
        C: Into<String>,
        M: Into<String>,
    {
        Commit {
            tree,
            parent,
            committer: committer.into(),
            message: message.into(),
        }
    }

    /// Check that `name` can be written on a commit's `committer` line.
    ///
    /// Returns the reason it can't: the name must not be blank and must
    /// stay on one line.
    pub fn check_committer(name: &str) -> std::result::Result<(), &'static str> {
        if name.trim().is_empty() {
            Err("name is empty")
        } else if name.contains(|c| c == '\n' || c == '\r') {
            Err("name contains a line break")
        } else {
            Ok(())
        }
    }

    pub fn tree(&self) -> &Id {
        &self.tree
    }

    pub fn parent(&self) -> Option<&Id> {
        self.parent.as_ref()
    }

    pub fn committer(&self) -> &str {
        &self.committer
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Serialize this commit as a commit object.
    pub fn to_object(&self) -> Object {
        let mut content = format!("tree: {}\n", self.tree);

        if let Some(parent) = &self.parent {
            content.push_str(&format!("parent: {}\n", parent));
        }

        content.push_str(&format!("committer: {}\n", self.committer));
        content.push_str(&format!("\nmessage: {}\n", self.message));

        Object::new(Kind::Commit, content.into_bytes())
    }

    /// Parse a commit object.
    pub fn from_object(object: &Object) -> Result<Commit> {
        object.expect_kind(Kind::Commit)?;

        let malformed = |reason: String| Error::MalformedObject {
            id: object.id().clone(),
            kind: Kind::Commit,
            reason,
        };

        let content = std::str::from_utf8(object.content())
            .map_err(|_| malformed("content is not valid UTF-8".to_string()))?;

        let (headers, body) = content
            .split_once("\n\n")
            .ok_or_else(|| malformed("missing message".to_string()))?;

        let mut lines = headers.lines();

        let tree = lines
            .next()
            .and_then(|line| parse_utils::id_header(line, "tree"))
            .ok_or_else(|| malformed("missing tree".to_string()))?
            .map_err(malformed)?;

        let mut line = lines.next();

        let parent = match line.and_then(|l| parse_utils::id_header(l, "parent")) {
            Some(parent) => {
                line = lines.next();
                Some(parent.map_err(malformed)?)
            }
            None => None,
        };

        let committer = line
            .and_then(|l| parse_utils::header(l, "committer"))
            .ok_or_else(|| malformed("missing committer".to_string()))?;

        if let Some(extra) = lines.next() {
            return Err(malformed(format!("unexpected line `{}`", extra)));
        }

        let message = parse_utils::header(body, "message")
            .or_else(|| body.strip_prefix("message:"))
            .ok_or_else(|| malformed("missing message".to_string()))?;

        let message = message.strip_suffix('\n').unwrap_or(message);

        Ok(Commit::new(tree, parent, committer, message))
    }
}
