//! Typed commits, trees and blobs decoded from `git cat-file` output.
//!
//! Parsing is kept separate from fetching: [`Commit::parse`] and [`Tree::parse`] are
//! pure functions over plumbing text, while the lookups that run `git` live on
//! [`GitRepo`](crate::core::git::GitRepo).
//!
//! # Public API
//! - [`ObjectId`]: Content-addressed identifier, a plain string value
//! - [`ObjectKind`]: The three object kinds this tool decodes
//! - [`Commit`], [`Tree`], [`TreeEntry`], [`Blob`]: Decoded records

use crate::core::error::{GitoscopeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a git object (a SHA or anything `git cat-file` resolves)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        ObjectId(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier can be handed to `git` as a positional argument
    pub fn is_passable(&self) -> bool {
        !self.0.is_empty() && !self.0.starts_with('-')
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        ObjectId::new(id)
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        ObjectId::new(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Commit,
    Tree,
    Blob,
}

impl ObjectKind {
    /// The type name `git cat-file -t` prints
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Commit => "commit",
            ObjectKind::Tree => "tree",
            ObjectKind::Blob => "blob",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded commit.
///
/// `author` and `committer` are kept verbatim (`Name <email> timestamp tz`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    pub id: ObjectId,
    pub tree_id: ObjectId,
    pub parent_ids: Vec<ObjectId>,
    pub author: String,
    pub committer: Option<String>,
    pub message: String,
}

impl Commit {
    /// Parses the output of `git cat-file -p <commit>`.
    ///
    /// ```text
    /// tree <sha>
    /// parent <sha>        (zero or more)
    /// author <signature>
    /// committer <signature>
    ///
    /// <message, possibly with blank lines>
    /// ```
    ///
    /// Headers end at the first empty line. Unrecognized headers (`gpgsig`,
    /// `encoding`, ...) and their continuation lines are ignored.
    pub fn parse(id: ObjectId, text: &str) -> Result<Self> {
        let (headers, body) = match text.split_once("\n\n") {
            Some((headers, body)) => (headers, body),
            None => (text.strip_suffix('\n').unwrap_or(text), ""),
        };

        let mut tree_id = None;
        let mut parent_ids = Vec::new();
        let mut author = None;
        let mut committer = None;

        for line in headers.lines() {
            if let Some(value) = line.strip_prefix("tree ") {
                if tree_id.is_some() {
                    return Err(GitoscopeError::malformed_object(
                        id.as_str(),
                        ObjectKind::Commit,
                        "more than one tree header",
                    ));
                }
                tree_id = Some(ObjectId::new(value));
            } else if let Some(value) = line.strip_prefix("parent ") {
                parent_ids.push(ObjectId::new(value));
            } else if let Some(value) = line.strip_prefix("author ") {
                author = Some(value.trim().to_string());
            } else if let Some(value) = line.strip_prefix("committer ") {
                committer = Some(value.trim().to_string());
            }
        }

        let tree_id = tree_id.filter(|t| !t.as_str().is_empty()).ok_or_else(|| {
            GitoscopeError::malformed_object(id.as_str(), ObjectKind::Commit, "missing tree header")
        })?;

        Ok(Commit {
            id,
            tree_id,
            parent_ids,
            author: author.unwrap_or_default(),
            committer,
            message: body.trim().to_string(),
        })
    }

    /// Renders the header block and message back into `cat-file -p` form
    pub fn to_raw(&self) -> String {
        let mut raw = format!("tree {}\n", self.tree_id);
        for parent in &self.parent_ids {
            raw.push_str(&format!("parent {parent}\n"));
        }
        raw.push_str(&format!("author {}\n", self.author));
        if let Some(committer) = &self.committer {
            raw.push_str(&format!("committer {committer}\n"));
        }
        raw.push('\n');
        raw.push_str(&self.message);
        raw.push('\n');
        raw
    }

    pub fn is_root(&self) -> bool {
        self.parent_ids.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parent_ids.len() > 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Tree,
    Blob,
}

/// One line of a tree listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEntry {
    pub mode: String,
    pub kind: EntryKind,
    pub sha: ObjectId,
    pub name: String,
}

impl TreeEntry {
    pub fn is_tree(&self) -> bool {
        self.kind == EntryKind::Tree
    }

    pub fn is_blob(&self) -> bool {
        self.kind == EntryKind::Blob
    }

    /// Parses `<mode> <type> <sha>\t<name>`. Returns `None` for lines without four
    /// fields and for entry types other than tree and blob.
    fn parse_line(line: &str) -> Option<Self> {
        let (mode, rest) = next_field(line)?;
        let (kind, rest) = next_field(rest)?;
        let (sha, rest) = next_field(rest)?;
        let raw_name = rest.trim_start().trim_end_matches(['\n', '\r']);
        if raw_name.is_empty() {
            return None;
        }
        let name = if raw_name.starts_with('"') {
            unquote_c_style(raw_name).unwrap_or_else(|| raw_name.to_string())
        } else {
            raw_name.to_string()
        };

        let kind = match kind {
            "tree" => EntryKind::Tree,
            "blob" => EntryKind::Blob,
            other => {
                log::debug!("Skipping {other} entry '{name}' in tree listing");
                return None;
            }
        };

        Some(TreeEntry {
            mode: mode.to_string(),
            kind,
            sha: ObjectId::new(sha),
            name,
        })
    }
}

/// Undoes git's C-style path quoting, so `"say \"hi\".txt"` becomes `say "hi".txt`.
/// Returns `None` when the text is not a well-formed quoted path.
fn unquote_c_style(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    let mut bytes = Vec::with_capacity(inner.len());
    let mut rest = inner.bytes();

    while let Some(b) = rest.next() {
        if b != b'\\' {
            bytes.push(b);
            continue;
        }
        let unescaped = match rest.next()? {
            b'a' => 0x07,
            b'b' => 0x08,
            b't' => b'\t',
            b'n' => b'\n',
            b'v' => 0x0b,
            b'f' => 0x0c,
            b'r' => b'\r',
            b'"' => b'"',
            b'\\' => b'\\',
            // Three octal digits, the first at most 3
            first @ b'0'..=b'3' => {
                let second = rest.next().filter(|d| (b'0'..=b'7').contains(d))?;
                let third = rest.next().filter(|d| (b'0'..=b'7').contains(d))?;
                (first - b'0') * 64 + (second - b'0') * 8 + (third - b'0')
            }
            _ => return None,
        };
        bytes.push(unescaped);
    }

    Some(String::from_utf8_lossy(&bytes).into_owned())
}

/// Splits off the next whitespace-delimited token, returning it and the remainder
fn next_field(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    let (field, rest) = s.split_once(char::is_whitespace)?;
    Some((field, rest))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tree {
    pub id: ObjectId,
    pub entries: Vec<TreeEntry>,
}

impl Tree {
    /// Parses the output of `git cat-file -p <tree>`, one entry per line.
    /// Lines that do not carry four fields are skipped.
    pub fn parse(id: ObjectId, text: &str) -> Self {
        let entries = text.lines().filter_map(TreeEntry::parse_line).collect();
        Tree { id, entries }
    }

    pub fn find(&self, name: &str) -> Option<&TreeEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub id: ObjectId,
    pub raw_content: Vec<u8>,
    pub raw_size: u64,
}

impl Blob {
    /// The content is authoritative; a disagreeing `raw_size` is only reported.
    pub fn new(id: ObjectId, raw_content: Vec<u8>, raw_size: u64) -> Self {
        let blob = Blob {
            id,
            raw_content,
            raw_size,
        };
        if !blob.size_matches() {
            log::warn!(
                "Blob {} reports {} bytes but {} were read",
                blob.id,
                blob.raw_size,
                blob.raw_content.len()
            );
        }
        blob
    }

    pub fn size_matches(&self) -> bool {
        self.raw_content.len() as u64 == self.raw_size
    }

    /// Content as text, with invalid UTF-8 replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.raw_content).into_owned()
    }
}

/// Parses the output of `git cat-file -s`
pub(crate) fn parse_size(id: &ObjectId, text: &str) -> Result<u64> {
    text.trim().parse().map_err(|_| {
        GitoscopeError::malformed_object(
            id.as_str(),
            ObjectKind::Blob,
            format!("unreadable size '{}'", text.trim()),
        )
    })
}
