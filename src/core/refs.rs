//! Reference records and `git show-ref` parsing.
//!
//! The listing itself runs on [`GitRepo::list_references`](crate::core::git::GitRepo::list_references);
//! this module holds the record type and the pure parsers it uses.

use crate::core::objects::ObjectId;
use serde::Serialize;

pub const TAG_PREFIX: &str = "refs/tags/";
pub const BRANCH_PREFIX: &str = "refs/heads/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub name: String,
    pub target: ObjectId,
    pub is_tag: bool,
    pub is_branch: bool,
    pub is_head: bool,
    pub is_symbolic: bool,
}

impl Reference {
    /// A concrete ref, classified by its name prefix
    pub fn concrete(name: impl Into<String>, target: ObjectId) -> Self {
        let name = name.into();
        Self {
            is_tag: name.starts_with(TAG_PREFIX),
            is_branch: name.starts_with(BRANCH_PREFIX),
            is_head: false,
            is_symbolic: false,
            name,
            target,
        }
    }

    /// HEAD while it aliases a branch: named after the branch it points at
    pub fn symbolic_head(aliased: impl Into<String>, target: ObjectId) -> Self {
        let name = aliased.into();
        Self {
            is_tag: false,
            is_branch: name.starts_with(BRANCH_PREFIX),
            is_head: true,
            is_symbolic: true,
            name,
            target,
        }
    }

    /// HEAD pointing straight at a commit
    pub fn detached_head(target: ObjectId) -> Self {
        Self {
            name: "HEAD".to_string(),
            target,
            is_tag: false,
            is_branch: false,
            is_head: true,
            is_symbolic: false,
        }
    }

    /// Name without its `refs/heads/` or `refs/tags/` prefix
    pub fn short_name(&self) -> &str {
        self.name
            .strip_prefix(BRANCH_PREFIX)
            .or_else(|| self.name.strip_prefix(TAG_PREFIX))
            .unwrap_or(&self.name)
    }
}

/// Parses `git show-ref` output, one `<sha> <name>` pair per line.
/// Lines without both fields are skipped.
pub fn parse_show_ref(text: &str) -> Vec<Reference> {
    text.lines()
        .filter_map(|line| {
            let (sha, name) = line.trim().split_once(char::is_whitespace)?;
            let name = name.trim();
            if sha.is_empty() || name.is_empty() {
                return None;
            }
            Some(Reference::concrete(name, ObjectId::new(sha)))
        })
        .collect()
}
