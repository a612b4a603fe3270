//! Type-safe per-source status codes.
//!
//! This module defines [`StatusCode`], which replaces the single-letter porcelain codes
//! (`M`, `A`, `D`, `?`, space, ...) with a proper enumeration. A status record carries
//! one code for the index and one for the working tree; both are decoded once at the
//! boundary and pattern-matched everywhere else.
//!
//! # Public API
//! - [`StatusCode`]: Enumeration of the state of one path in one source
//! - [`RawStatusEntry`]: A changed path with its index and working-tree codes
//!
//! # Key Features
//! - **git2 integration**: Direct conversion from `git2::Status` flags, per source
//! - **Porcelain letters**: Lossless conversion to and from the letter codes
//! - **Lenient decoding**: Unrecognized letters become [`StatusCode::Unknown`]

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a path in one source (index or working tree), relative to the
/// source before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    /// No change relative to the previous source (space)
    Unmodified,
    /// Modified (M)
    Modified,
    /// Added (A)
    Added,
    /// Deleted (D)
    Deleted,
    /// Renamed (R)
    Renamed,
    /// Copied (C)
    Copied,
    /// Type changed (T)
    TypeChanged,
    /// Untracked (?)
    Untracked,
    /// Unmerged/conflicted (U)
    Unmerged,
    /// Any letter this tool does not recognize
    Unknown,
}

impl StatusCode {
    /// Decode the index half of a git2 status flag set
    pub fn from_git2_index(flags: git2::Status) -> StatusCode {
        if flags.contains(git2::Status::CONFLICTED) {
            return StatusCode::Unmerged;
        }
        if flags.contains(git2::Status::INDEX_NEW) {
            return StatusCode::Added;
        }
        if flags.contains(git2::Status::INDEX_MODIFIED) {
            return StatusCode::Modified;
        }
        if flags.contains(git2::Status::INDEX_DELETED) {
            return StatusCode::Deleted;
        }
        if flags.contains(git2::Status::INDEX_RENAMED) {
            return StatusCode::Renamed;
        }
        if flags.contains(git2::Status::INDEX_TYPECHANGE) {
            return StatusCode::TypeChanged;
        }
        // Porcelain reports untracked files as "??", both columns
        if flags.contains(git2::Status::WT_NEW) {
            return StatusCode::Untracked;
        }

        StatusCode::Unmodified
    }

    /// Decode the working-tree half of a git2 status flag set
    pub fn from_git2_worktree(flags: git2::Status) -> StatusCode {
        if flags.contains(git2::Status::CONFLICTED) {
            return StatusCode::Unmerged;
        }
        if flags.contains(git2::Status::WT_NEW) {
            return StatusCode::Untracked;
        }
        if flags.contains(git2::Status::WT_MODIFIED) {
            return StatusCode::Modified;
        }
        if flags.contains(git2::Status::WT_DELETED) {
            return StatusCode::Deleted;
        }
        if flags.contains(git2::Status::WT_RENAMED) {
            return StatusCode::Renamed;
        }
        if flags.contains(git2::Status::WT_TYPECHANGE) {
            return StatusCode::TypeChanged;
        }

        StatusCode::Unmodified
    }

    /// The porcelain letter for this code
    pub fn as_char(&self) -> char {
        match self {
            StatusCode::Unmodified => ' ',
            StatusCode::Modified => 'M',
            StatusCode::Added => 'A',
            StatusCode::Deleted => 'D',
            StatusCode::Renamed => 'R',
            StatusCode::Copied => 'C',
            StatusCode::TypeChanged => 'T',
            StatusCode::Untracked => '?',
            StatusCode::Unmerged => 'U',
            StatusCode::Unknown => 'X',
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<char> for StatusCode {
    fn from(code: char) -> Self {
        match code {
            ' ' => StatusCode::Unmodified,
            'M' => StatusCode::Modified,
            'A' => StatusCode::Added,
            'D' => StatusCode::Deleted,
            'R' => StatusCode::Renamed,
            'C' => StatusCode::Copied,
            'T' => StatusCode::TypeChanged,
            '?' => StatusCode::Untracked,
            'U' => StatusCode::Unmerged,
            _ => StatusCode::Unknown,
        }
    }
}

/// One path reported as changed by the status primitive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStatusEntry {
    pub path: String,
    pub index: StatusCode,
    pub worktree: StatusCode,
}

impl RawStatusEntry {
    pub fn new(path: impl Into<String>, index: StatusCode, worktree: StatusCode) -> Self {
        Self {
            path: path.into(),
            index,
            worktree,
        }
    }

    /// Build an entry from a two-letter porcelain code such as `"??"` or `" M"`.
    /// Missing letters decode as unmodified.
    pub fn from_code(path: impl Into<String>, code: &str) -> Self {
        let mut letters = code.chars();
        let index = letters.next().map(StatusCode::from).unwrap_or(StatusCode::Unmodified);
        let worktree = letters.next().map(StatusCode::from).unwrap_or(StatusCode::Unmodified);
        Self::new(path, index, worktree)
    }
}
