//! Repository handle and plumbing access.
//!
//! This module provides the [`GitRepo`] struct, the single handle every inspection goes
//! through. It discovers the repository with `git2`, reads raw status through `git2`,
//! and runs `git` plumbing commands (`cat-file`, `ls-tree`, `show-ref`, `rev-parse`,
//! `symbolic-ref`) for everything else. Nothing here writes to the repository.
//!
//! # Public API
//! - [`GitRepo`]: Main interface for repository inspection
//!
//! # Key Features
//! - **Status**: Raw per-source codes reconciled against the committed paths
//! - **Objects**: Commits, trees and blobs decoded from `cat-file` output
//! - **References**: Concrete refs plus a synthesized HEAD entry
//! - **Content**: A path's content in the tree, the index or the working copy
//!
//! Every call re-reads the repository; there is no caching between calls.

use crate::core::{
    content::{is_contained, ContentSource},
    error::{GitoscopeError, Result},
    git_status::{RawStatusEntry, StatusCode},
    objects::{parse_size, Blob, Commit, ObjectId, ObjectKind, Tree},
    refs::{parse_show_ref, Reference},
    status::{reconcile, FileStatus},
};
use git2::{Repository, StatusOptions};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

pub struct GitRepo {
    repo: Repository,
    workdir: PathBuf,
}

impl GitRepo {
    /// Opens the repository containing `path`. Bare repositories are refused since
    /// there is no working copy to inspect.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(not_in_repo_when_missing)?;
        let workdir = repo
            .workdir()
            .ok_or(GitoscopeError::NotInGitRepo)?
            .to_path_buf();
        log::debug!("Opened repository at {}", workdir.display());
        Ok(GitRepo { repo, workdir })
    }

    /// Root of the working copy; every plumbing call runs here
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Runs a git command in the working copy and returns its stdout
    pub fn run_git(&self, args: &[&str]) -> Result<Vec<u8>> {
        log::debug!("git {}", args.join(" "));

        let output = Command::new("git")
            .args(["-c", "core.quotePath=false"])
            .args(args)
            .current_dir(&self.workdir)
            .env("GIT_OPTIONAL_LOCKS", "0")
            .output()?;

        if !output.status.success() {
            return Err(GitoscopeError::git_command_failed(args, &output.stderr));
        }

        Ok(output.stdout)
    }

    /// Changed paths with their index and working-tree codes
    pub fn raw_status(&self) -> Result<Vec<RawStatusEntry>> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.recurse_untracked_dirs(true);
        opts.include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        let mut entries = Vec::new();

        for entry in statuses.iter() {
            let path = match entry.path() {
                Some(path) => path.to_string(),
                None => {
                    let lossy = String::from_utf8_lossy(entry.path_bytes()).into_owned();
                    log::warn!("Path is not valid UTF-8, reporting it as '{lossy}'");
                    lossy
                }
            };
            let flags = entry.status();

            let index = StatusCode::from_git2_index(flags);
            let worktree = StatusCode::from_git2_worktree(flags);
            if index == StatusCode::Unmodified && worktree == StatusCode::Unmodified {
                continue;
            }

            entries.push(RawStatusEntry::new(path, index, worktree));
        }

        Ok(entries)
    }

    /// Every path recorded in the HEAD commit; empty when there are no commits
    pub fn tree_paths(&self) -> Vec<String> {
        match self.run_git(&["ls-tree", "-r", "-z", "--name-only", "HEAD"]) {
            Ok(stdout) => stdout
                .split(|b| *b == 0)
                .filter(|p| !p.is_empty())
                .map(|p| String::from_utf8_lossy(p).into_owned())
                .collect(),
            Err(e) => {
                log::debug!("No committed paths: {e}");
                Vec::new()
            }
        }
    }

    /// Three-way status of every changed or committed path.
    ///
    /// Never fails: if raw status cannot be read, the committed paths are still
    /// reported as unchanged.
    pub fn status(&self) -> BTreeMap<String, FileStatus> {
        let entries = self.raw_status().unwrap_or_else(|e| {
            log::warn!("Could not read repository status: {e}");
            Vec::new()
        });
        let tree_paths = self.tree_paths();
        reconcile(&entries, &tree_paths)
    }

    /// Fails with `ObjectNotFound` unless `id` names an object of `kind`
    fn require_kind(&self, id: &ObjectId, kind: ObjectKind) -> Result<()> {
        if !id.is_passable() {
            return Err(GitoscopeError::object_not_found(id.as_str(), kind));
        }

        let actual = self
            .run_git(&["cat-file", "-t", id.as_str()])
            .map_err(|e| not_found_on_failure(e, id, kind))?;
        let actual = String::from_utf8_lossy(&actual);

        if actual.trim() != kind.as_str() {
            log::debug!("{id} is a {}, not a {kind}", actual.trim());
            return Err(GitoscopeError::object_not_found(id.as_str(), kind));
        }

        Ok(())
    }

    fn read_object(&self, id: &ObjectId, kind: ObjectKind) -> Result<Vec<u8>> {
        self.require_kind(id, kind)?;
        self.run_git(&["cat-file", "-p", id.as_str()])
            .map_err(|e| not_found_on_failure(e, id, kind))
    }

    pub fn decode_commit(&self, id: &ObjectId) -> Result<Commit> {
        let raw = self.read_object(id, ObjectKind::Commit)?;
        Commit::parse(id.clone(), &String::from_utf8_lossy(&raw))
    }

    pub fn decode_tree(&self, id: &ObjectId) -> Result<Tree> {
        let raw = self.read_object(id, ObjectKind::Tree)?;
        Ok(Tree::parse(id.clone(), &String::from_utf8_lossy(&raw)))
    }

    /// Reads the content and the declared size in two sequential calls
    pub fn decode_blob(&self, id: &ObjectId) -> Result<Blob> {
        let content = self.read_object(id, ObjectKind::Blob)?;
        let size = self
            .run_git(&["cat-file", "-s", id.as_str()])
            .map_err(|e| not_found_on_failure(e, id, ObjectKind::Blob))?;
        let size = parse_size(id, &String::from_utf8_lossy(&size))?;
        Ok(Blob::new(id.clone(), content, size))
    }

    /// All concrete refs followed by HEAD, when HEAD resolves to a commit.
    ///
    /// Never fails; an unreadable ref namespace yields an empty list.
    pub fn list_references(&self) -> Vec<Reference> {
        let listing = match self.run_git(&["show-ref"]) {
            Ok(stdout) => stdout,
            Err(e) => {
                log::debug!("No references listed: {e}");
                return Vec::new();
            }
        };

        let mut references = parse_show_ref(&String::from_utf8_lossy(&listing));
        if let Some(head) = self.resolve_head() {
            references.push(head);
        }
        references
    }

    fn resolve_head(&self) -> Option<Reference> {
        let target = match self.run_git(&["rev-parse", "--verify", "-q", "HEAD"]) {
            Ok(stdout) => ObjectId::new(String::from_utf8_lossy(&stdout)),
            Err(_) => {
                log::debug!("HEAD does not resolve to a commit yet");
                return None;
            }
        };

        match self.run_git(&["symbolic-ref", "-q", "HEAD"]) {
            Ok(stdout) => {
                let aliased = String::from_utf8_lossy(&stdout).trim().to_string();
                Some(Reference::symbolic_head(aliased, target))
            }
            Err(_) => {
                log::debug!("HEAD is detached at {target}");
                Some(Reference::detached_head(target))
            }
        }
    }

    /// Bytes of `path` in the HEAD commit, or empty
    pub fn tree_content(&self, path: &str) -> Vec<u8> {
        self.read_indexed_blob(&format!("HEAD:{path}"), path)
            .unwrap_or_default()
    }

    /// Content of `path` in the index, falling back to the HEAD commit
    pub fn cache_content(&self, path: &str) -> Vec<u8> {
        self.read_indexed_blob(&format!(":{path}"), path)
            .unwrap_or_else(|| self.tree_content(path))
    }

    /// Bytes of `path` on disk, or empty
    pub fn working_copy_content(&self, path: &str) -> Vec<u8> {
        if !is_contained(path) {
            log::debug!("Refusing to read '{path}' outside the working copy");
            return Vec::new();
        }

        std::fs::read(self.workdir.join(path)).unwrap_or_else(|e| {
            log::debug!("Could not read '{path}' from the working copy: {e}");
            Vec::new()
        })
    }

    /// Content is returned as stored; binary files are not re-encoded
    pub fn content(&self, source: ContentSource, path: &str) -> Vec<u8> {
        match source {
            ContentSource::Tree => self.tree_content(path),
            ContentSource::Cache => self.cache_content(path),
            ContentSource::WorkingCopy => self.working_copy_content(path),
        }
    }

    fn read_indexed_blob(&self, revision: &str, path: &str) -> Option<Vec<u8>> {
        if !is_contained(path) {
            return None;
        }

        match self.run_git(&["cat-file", "blob", revision]) {
            Ok(stdout) => Some(stdout),
            Err(e) => {
                log::debug!("No blob at {revision}: {e}");
                None
            }
        }
    }
}

/// Discovery finding nothing is `NotInGitRepo`; any other git2 failure (permissions,
/// a corrupt repository) keeps its own message.
fn not_in_repo_when_missing(err: git2::Error) -> GitoscopeError {
    if err.code() == git2::ErrorCode::NotFound {
        GitoscopeError::NotInGitRepo
    } else {
        GitoscopeError::GitRepo(err)
    }
}

/// A failed plumbing call means the object could not be looked up; anything
/// else (git missing, I/O) is passed through unchanged.
fn not_found_on_failure(err: GitoscopeError, id: &ObjectId, kind: ObjectKind) -> GitoscopeError {
    match err {
        GitoscopeError::GitCommandFailed { stderr, .. } => {
            log::debug!("Lookup of {kind} {id} failed: {stderr}");
            GitoscopeError::object_not_found(id.as_str(), kind)
        }
        other => other,
    }
}
