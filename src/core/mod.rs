//! Core functionality for the gitoscope inspector.
//!
//! This module provides the repository inspection engine: status reconciliation,
//! object decoding, reference listing and content access, plus the error, config
//! and output plumbing around them.

pub mod config;
pub mod content;
pub mod dirs;
pub mod error;
pub mod git;
pub mod git_status;
pub mod objects;
pub mod output;
pub mod refs;
pub mod status;

// === Error handling ===
pub use error::{GitoscopeError, Result};

// === Repository handle ===
// Every inspection goes through a GitRepo opened once per process
pub use git::GitRepo;

// === Status ===
// Typed per-source codes and the three-way reconciliation built on them
pub use git_status::{RawStatusEntry, StatusCode};
pub use status::{reconcile, CachedDiff, FileStatus, RawStatus, WorkingDiff};

// === Objects and references ===
pub use objects::{Blob, Commit, EntryKind, ObjectId, ObjectKind, Tree, TreeEntry};
pub use refs::{parse_show_ref, Reference};

// === Content ===
pub use content::ContentSource;

// === Configuration ===
pub use config::GitoscopeConfig;

// === Output formatting ===
pub use output::{print_error, print_json, print_section_header, strip_ansi_codes};
