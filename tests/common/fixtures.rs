//! Predefined repository scenarios

#![allow(dead_code)]

use super::repository::*;
use gitoscope::core::error::Result;

pub const README_CONTENT: &str = "# Test Repo\n";

/// Scenario: one commit containing README.md, nothing uncommitted
pub fn create_single_commit_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;
    create_file(&repo.path, "README.md", README_CONTENT)?;
    git_add(&repo.path, "README.md")?;
    git_commit(&repo.path, "Initial commit")?;
    Ok(repo)
}

/// Scenario: two commits, the second adding a nested file and a name with spaces
pub fn create_two_commit_repo() -> Result<TestRepo> {
    let repo = create_single_commit_repo()?;
    create_file(&repo.path, "src/main.txt", "fn main() {}\n")?;
    create_file(&repo.path, "my notes.txt", "remember\n")?;
    git_add(&repo.path, ".")?;
    git(
        &repo.path,
        &["commit", "-m", "Add sources", "-m", "Second paragraph of the body."],
    )?;
    Ok(repo)
}
