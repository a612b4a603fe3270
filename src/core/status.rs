//! Three-way status reconciliation.
//!
//! Classifies every path by its presence in the working copy, the index (cache) and
//! the tree of the last commit, and derives two coarse change labels from that:
//! [`WorkingDiff`] (working copy against cache) and [`CachedDiff`] (cache against tree).
//!
//! The input is the raw status of changed paths plus the list of committed paths.
//! Committed paths that status does not mention are unchanged and still show up in
//! the result, present everywhere with empty labels.
//!
//! A blank code carries no presence signal of its own: a blank index code means the
//! index matches the tree, and a blank working code means the working copy matches
//! the index. A `D` in the working column always means absent from the working copy.

use crate::core::git_status::{RawStatusEntry, StatusCode};
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Working copy against cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorkingDiff {
    #[default]
    None,
    Untracked,
    Deleted,
    Modified,
}

impl WorkingDiff {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkingDiff::None => "",
            WorkingDiff::Untracked => "untracked",
            WorkingDiff::Deleted => "deleted",
            WorkingDiff::Modified => "modified",
        }
    }
}

/// Cache against the tree of the last commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CachedDiff {
    #[default]
    None,
    New,
    Deleted,
    Modified,
}

impl CachedDiff {
    pub fn as_str(&self) -> &'static str {
        match self {
            CachedDiff::None => "",
            CachedDiff::New => "new",
            CachedDiff::Deleted => "deleted",
            CachedDiff::Modified => "modified",
        }
    }
}

impl fmt::Display for WorkingDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CachedDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for WorkingDiff {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for CachedDiff {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Finer signal read straight off the two status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStatus {
    pub in_working_tree: bool,
    pub in_index: bool,
    pub is_deleted: bool,
    pub is_new: bool,
    pub is_modified: bool,
}

impl RawStatus {
    pub fn from_codes(index: StatusCode, worktree: StatusCode) -> Self {
        let carries_change = |code: StatusCode| {
            !matches!(
                code,
                StatusCode::Unmodified | StatusCode::Untracked | StatusCode::Unknown
            )
        };

        Self {
            in_working_tree: carries_change(worktree),
            in_index: carries_change(index),
            is_deleted: worktree == StatusCode::Deleted,
            is_new: index == StatusCode::Added || worktree == StatusCode::Untracked,
            is_modified: index == StatusCode::Modified || worktree == StatusCode::Modified,
        }
    }
}

/// Reconciled state of one path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStatus {
    pub path: String,
    pub is_in_working_copy: bool,
    pub is_in_cache: bool,
    pub is_in_tree: bool,
    pub raw_status: RawStatus,
    pub diff_string: WorkingDiff,
    pub diff_cached_string: CachedDiff,
}

impl FileStatus {
    /// A committed path that status did not report: present everywhere, no labels
    pub fn unchanged(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_in_working_copy: true,
            is_in_cache: true,
            is_in_tree: true,
            raw_status: RawStatus::default(),
            diff_string: WorkingDiff::None,
            diff_cached_string: CachedDiff::None,
        }
    }

    fn from_entry(entry: &RawStatusEntry, is_in_tree: bool) -> Self {
        let is_in_cache = match entry.index {
            StatusCode::Deleted | StatusCode::Untracked | StatusCode::Unknown => false,
            StatusCode::Unmodified => is_in_tree,
            _ => true,
        };
        let is_in_working_copy = match entry.worktree {
            StatusCode::Deleted | StatusCode::Unknown => false,
            StatusCode::Unmodified => is_in_cache,
            _ => true,
        };
        let raw_status = RawStatus::from_codes(entry.index, entry.worktree);

        let mut status = Self {
            path: entry.path.clone(),
            is_in_working_copy,
            is_in_cache,
            is_in_tree,
            raw_status,
            diff_string: WorkingDiff::None,
            diff_cached_string: CachedDiff::None,
        };
        status.diff_string = status.working_diff();
        status.diff_cached_string = status.cached_diff();
        status
    }

    fn working_diff(&self) -> WorkingDiff {
        if self.is_in_working_copy && !self.is_in_cache {
            return WorkingDiff::Untracked;
        }
        if !self.is_in_working_copy && self.is_in_cache {
            return WorkingDiff::Deleted;
        }
        let raw = &self.raw_status;
        if raw.in_working_tree && !raw.is_deleted && !raw.is_new {
            return WorkingDiff::Modified;
        }
        WorkingDiff::None
    }

    fn cached_diff(&self) -> CachedDiff {
        if self.is_in_cache && !self.is_in_tree {
            return CachedDiff::New;
        }
        if !self.is_in_cache && self.is_in_tree {
            return CachedDiff::Deleted;
        }
        if self.raw_status.in_index && self.raw_status.is_modified {
            return CachedDiff::Modified;
        }
        CachedDiff::None
    }

    /// Whether neither label reports a change
    pub fn is_clean(&self) -> bool {
        self.diff_string == WorkingDiff::None && self.diff_cached_string == CachedDiff::None
    }
}

/// Combine raw status entries with the committed paths into one entry per path.
///
/// Never fails. If status reports the same path twice, the last report wins.
pub fn reconcile<S: AsRef<str>>(
    entries: &[RawStatusEntry],
    tree_paths: &[S],
) -> BTreeMap<String, FileStatus> {
    let committed: HashSet<&str> = tree_paths.iter().map(|p| p.as_ref()).collect();
    let mut result = BTreeMap::new();

    for entry in entries {
        let is_in_tree = committed.contains(entry.path.as_str());
        result.insert(entry.path.clone(), FileStatus::from_entry(entry, is_in_tree));
    }

    for path in tree_paths {
        let path = path.as_ref();
        if !result.contains_key(path) {
            result.insert(path.to_string(), FileStatus::unchanged(path));
        }
    }

    log::debug!(
        "Reconciled {} status entries against {} committed paths into {} files",
        entries.len(),
        committed.len(),
        result.len()
    );

    result
}
