//! Git repository management and setup utilities
//!
//! Provides functions for creating test repositories and changing their state with
//! the `git` binary, so the inspector is always tested against what git really writes.

#![allow(dead_code)]

use gitoscope::core::error::{GitoscopeError, Result};
use gitoscope::core::git::GitRepo;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the repository through the library
    pub fn open(&self) -> Result<GitRepo> {
        GitRepo::open(&self.path)
    }
}

/// Runs git in the repository, failing when git exits non-zero
pub fn git(repo_path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(GitoscopeError::Io)?;

    if !output.status.success() {
        return Err(GitoscopeError::git_command_failed(args, &output.stderr));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Sets up a fresh git repository with local identity configured
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(GitoscopeError::Io)?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;
    git(&repo_path, &["config", "commit.gpgsign", "false"])?;
    git(&repo_path, &["config", "tag.gpgsign", "false"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Writes a file (creating parent directories) relative to the repository root
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    let full = repo_path.join(filename);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(full, content)?;
    Ok(())
}

pub fn remove_file(repo_path: &Path, filename: &str) -> Result<()> {
    fs::remove_file(repo_path.join(filename))?;
    Ok(())
}

pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", "--", filename])?;
    Ok(())
}

pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])?;
    Ok(())
}

/// Full SHA of a revision
pub fn rev_parse(repo_path: &Path, rev: &str) -> Result<String> {
    git(repo_path, &["rev-parse", rev])
}
