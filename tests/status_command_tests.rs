use assert_cmd::prelude::*;
use gitoscope::core::status::{CachedDiff, WorkingDiff};
use std::process::Command;

mod common;
use common::{assertions, fixtures::*, repository::*};

#[cfg(test)]
mod status_command_tests {
    use super::*;

    #[test]
    fn test_clean_committed_file_is_present_everywhere() -> anyhow::Result<()> {
        let repo = create_single_commit_repo()?;
        let status = repo.open()?.status();

        assert_eq!(status.len(), 1);
        let readme = &status["README.md"];
        assert!(readme.is_in_working_copy);
        assert!(readme.is_in_cache);
        assert!(readme.is_in_tree);
        assert_eq!(readme.diff_string, WorkingDiff::None);
        assert_eq!(readme.diff_cached_string, CachedDiff::None);

        Ok(())
    }

    #[test]
    fn test_edit_on_disk_is_modified_but_not_staged() -> anyhow::Result<()> {
        let repo = create_single_commit_repo()?;
        create_file(&repo.path, "README.md", "# Edited\n")?;

        let status = repo.open()?.status();
        let readme = &status["README.md"];

        assert!(readme.is_in_working_copy);
        assert!(readme.is_in_cache);
        assert!(readme.is_in_tree);
        assert_eq!(readme.diff_string, WorkingDiff::Modified);
        assert_eq!(readme.diff_cached_string, CachedDiff::None);

        Ok(())
    }

    #[test]
    fn test_untracked_file() -> anyhow::Result<()> {
        let repo = create_single_commit_repo()?;
        create_file(&repo.path, "new.txt", "New content\n")?;

        let status = repo.open()?.status();
        let new_file = &status["new.txt"];

        assert!(new_file.is_in_working_copy);
        assert!(!new_file.is_in_cache);
        assert!(!new_file.is_in_tree);
        assert_eq!(new_file.diff_string, WorkingDiff::Untracked);
        assert!(status["README.md"].is_clean());

        Ok(())
    }

    #[test]
    fn test_staged_new_file() -> anyhow::Result<()> {
        let repo = create_single_commit_repo()?;
        create_file(&repo.path, "staged.txt", "Staged content\n")?;
        git_add(&repo.path, "staged.txt")?;

        let status = repo.open()?.status();
        let staged = &status["staged.txt"];

        assert!(staged.is_in_cache);
        assert!(!staged.is_in_tree);
        assert_eq!(staged.diff_cached_string, CachedDiff::New);
        assert_eq!(staged.diff_string, WorkingDiff::None);

        Ok(())
    }

    #[test]
    fn test_staged_modification() -> anyhow::Result<()> {
        let repo = create_single_commit_repo()?;
        create_file(&repo.path, "README.md", "# Staged edit\n")?;
        git_add(&repo.path, "README.md")?;

        let status = repo.open()?.status();
        let readme = &status["README.md"];

        assert_eq!(readme.diff_string, WorkingDiff::None);
        assert_eq!(readme.diff_cached_string, CachedDiff::Modified);

        Ok(())
    }

    #[test]
    fn test_file_removed_from_disk() -> anyhow::Result<()> {
        let repo = create_single_commit_repo()?;
        remove_file(&repo.path, "README.md")?;

        let status = repo.open()?.status();
        let readme = &status["README.md"];

        assert!(!readme.is_in_working_copy);
        assert!(readme.is_in_cache);
        assert!(readme.is_in_tree);
        assert_eq!(readme.diff_string, WorkingDiff::Deleted);
        assert_eq!(readme.diff_cached_string, CachedDiff::None);

        Ok(())
    }

    #[test]
    fn test_staged_removal() -> anyhow::Result<()> {
        let repo = create_single_commit_repo()?;
        git(&repo.path, &["rm", "-q", "README.md"])?;

        let status = repo.open()?.status();
        let readme = &status["README.md"];

        assert!(!readme.is_in_working_copy);
        assert!(!readme.is_in_cache);
        assert!(readme.is_in_tree);
        assert_eq!(readme.diff_cached_string, CachedDiff::Deleted);

        Ok(())
    }

    #[test]
    fn test_repository_without_commits() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        create_file(&repo.path, "first.txt", "first\n")?;
        git_add(&repo.path, "first.txt")?;
        create_file(&repo.path, "loose.txt", "loose\n")?;

        let git_repo = repo.open()?;
        assert!(git_repo.tree_paths().is_empty());

        let status = git_repo.status();
        assert_eq!(status["first.txt"].diff_cached_string, CachedDiff::New);
        assert_eq!(status["loose.txt"].diff_string, WorkingDiff::Untracked);

        Ok(())
    }

    #[test]
    fn test_unchanged_files_in_subdirectories_are_listed() -> anyhow::Result<()> {
        let repo = create_two_commit_repo()?;
        let status = repo.open()?.status();

        let paths: Vec<&str> = status.keys().map(|k| k.as_str()).collect();
        assert_eq!(paths, vec!["README.md", "my notes.txt", "src/main.txt"]);
        assert!(status.values().all(|s| s.is_clean()));

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_does_not_hide_other_changes() -> anyhow::Result<()> {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let repo = create_single_commit_repo()?;
        create_file(&repo.path, "README.md", "# Edited\n")?;
        std::fs::write(repo.path.join(OsStr::from_bytes(b"bad\xff.txt")), "odd\n")?;

        let status = repo.open()?.status();

        assert_eq!(status["README.md"].diff_string, WorkingDiff::Modified);
        let odd = &status["bad\u{fffd}.txt"];
        assert_eq!(odd.diff_string, WorkingDiff::Untracked);
        assert!(!odd.is_in_tree);

        Ok(())
    }

    #[test]
    fn test_status_json_output() -> anyhow::Result<()> {
        let repo = create_single_commit_repo()?;
        create_file(&repo.path, "new.txt", "New content\n")?;

        let output = Command::cargo_bin("gitoscope")?
            .args(["status", "--json"])
            .current_dir(&repo.path)
            .env_remove("GITOSCOPE_REPO")
            .output()?;
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(json["new.txt"]["diffString"], "untracked");
        assert_eq!(json["new.txt"]["isInTree"], false);
        assert_eq!(json["README.md"]["diffString"], "");
        assert_eq!(json["README.md"]["isInTree"], true);

        Ok(())
    }

    #[test]
    fn test_status_table_output() -> anyhow::Result<()> {
        let repo = create_single_commit_repo()?;
        create_file(&repo.path, "README.md", "# Edited\n")?;

        Command::cargo_bin("gitoscope")?
            .arg("status")
            .arg("--repo")
            .arg(&repo.path)
            .assert()
            .success()
            .stdout(predicates::str::contains("README.md"))
            .stdout(predicates::str::contains("modified"));

        Ok(())
    }

    #[test]
    fn test_status_outside_repository() -> anyhow::Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        if git2::Repository::discover(temp_dir.path()).is_ok() {
            return Ok(());
        }

        Command::cargo_bin("gitoscope")?
            .arg("status")
            .current_dir(temp_dir.path())
            .env_remove("GITOSCOPE_REPO")
            .assert()
            .failure()
            .stderr(assertions::not_in_git_repo());

        Ok(())
    }
}
