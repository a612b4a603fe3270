//! Gitoscope - a read-only inspector for a git repository's state and object graph.
//!
//! The library classifies every file by its presence in the working copy, the index
//! and the last commit, decodes commits, trees and blobs from plumbing output, lists
//! references, and reads a path's content from any of the three sources. It never
//! writes to the repository.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`GitRepo`]: Repository handle all lookups go through
//! - [`FileStatus`] and [`reconcile`]: Three-way status reconciliation
//! - [`Commit`], [`Tree`], [`Blob`], [`Reference`]: Decoded records
//! - [`GitoscopeError`] and [`Result`]: Error handling

pub mod commands;
pub mod core;

pub use crate::core::{
    reconcile,
    Blob,
    CachedDiff,
    Commit,
    ContentSource,
    FileStatus,
    GitRepo,
    GitoscopeConfig,
    GitoscopeError,
    ObjectId,
    ObjectKind,
    RawStatusEntry,
    Reference,
    Result,
    StatusCode,
    Tree,
    TreeEntry,
    WorkingDiff,
};
