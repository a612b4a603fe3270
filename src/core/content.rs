//! Content sources for a repository path.
//!
//! A path can be read from three places: the tree of the last commit, the index
//! (cache), and the working copy. Lookups are best effort and return empty bytes when
//! the path is missing; the lookups themselves live on
//! [`GitRepo`](crate::core::git::GitRepo).

use crate::core::error::{GitoscopeError, Result};
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentSource {
    Tree,
    Cache,
    WorkingCopy,
}

impl ContentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentSource::Tree => "tree",
            ContentSource::Cache => "cache",
            ContentSource::WorkingCopy => "working",
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentSource {
    type Err = GitoscopeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tree" | "head" => Ok(ContentSource::Tree),
            "cache" | "index" => Ok(ContentSource::Cache),
            "working" | "working-copy" => Ok(ContentSource::WorkingCopy),
            other => Err(GitoscopeError::invalid_content_source(other)),
        }
    }
}

/// Whether a user-supplied path stays inside the repository root.
/// Absolute paths and `..` components are refused.
pub fn is_contained(path: &str) -> bool {
    !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
