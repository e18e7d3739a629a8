use super::{Id, Kind, Object};
use crate::repo::{Error, Result};

/// One line of a tree object: a named reference to a blob or a subtree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeEntry {
    name: String,
    id: Id,
    kind: Kind,
}

impl TreeEntry {
    pub fn new<S: Into<String>>(name: S, id: Id, kind: Kind) -> TreeEntry {
        TreeEntry {
            name: name.into(),
            id,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }
}

/// The listing of one directory snapshot.
///
/// Serialized as one `<name>: <id> (<kind>)` line per entry,
/// each terminated by a newline.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Create a tree from the given entries, sorted by name so the
    /// resulting object doesn't depend on the order they were found in.
    pub fn new(mut entries: Vec<TreeEntry>) -> Tree {
        entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
        Tree { entries }
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&TreeEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Serialize this tree as a tree object.
    pub fn to_object(&self) -> Object {
        let mut content = String::new();
        for entry in &self.entries {
            content.push_str(&format!("{}: {} ({})\n", entry.name, entry.id, entry.kind));
        }

        Object::new(Kind::Tree, content.into_bytes())
    }

    /// Parse a tree object.
    pub fn from_object(object: &Object) -> Result<Tree> {
        object.expect_kind(Kind::Tree)?;

        let malformed = |reason: String| Error::MalformedObject {
            id: object.id().clone(),
            kind: Kind::Tree,
            reason,
        };

        let content = std::str::from_utf8(object.content())
            .map_err(|_| malformed("content is not valid UTF-8".to_string()))?;

        if content.is_empty() {
            return Ok(Tree::default());
        }

        let content = content
            .strip_suffix('\n')
            .ok_or_else(|| malformed("last entry is not terminated".to_string()))?;

        let entries = content
            .split('\n')
            .map(|line| parse_entry(line).ok_or_else(|| malformed(format!("bad entry `{}`", line))))
            .collect::<Result<Vec<TreeEntry>>>()?;

        Ok(Tree { entries })
    }
}

fn parse_entry(line: &str) -> Option<TreeEntry> {
    let (rest, kind) = line.strip_suffix(')')?.rsplit_once(" (")?;

    let kind = match kind {
        "blob" => Kind::Blob,
        "tree" => Kind::Tree,
        _ => return None,
    };

    let (name, id) = rest.rsplit_once(": ")?;
    if name.is_empty() {
        return None;
    }

    let id = Id::from_hex(id).ok()?;
    Some(TreeEntry::new(name, id, kind))
}
