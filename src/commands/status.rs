use crate::core::{
    error::Result,
    git::GitRepo,
    output::{print_json, print_section_header},
    status::{CachedDiff, FileStatus, WorkingDiff},
};
use colored::*;

pub fn execute_status(git_repo: &GitRepo, json: bool) -> Result<()> {
    let files = git_repo.status();

    if json {
        return print_json(&files);
    }

    print_section_header(&format!("Repository {}", git_repo.workdir().display()));

    if files.is_empty() {
        println!("  {}", "- no files -".bright_black());
        println!();
        return Ok(());
    }

    let width = files.keys().map(|p| p.chars().count()).max().unwrap_or(0);
    println!(
        "  {}  {}  {}",
        "W C T".bright_black(),
        format!("{:<width$}", "path").as_str().bright_black(),
        "working / cached".bright_black(),
    );
    for status in files.values() {
        println!("{}", format_status_line(status, width));
    }
    println!();

    Ok(())
}

/// One table row: presence flags, padded path, then both change labels
pub fn format_status_line(status: &FileStatus, width: usize) -> String {
    let presence = [
        presence_flag(status.is_in_working_copy, "W"),
        presence_flag(status.is_in_cache, "C"),
        presence_flag(status.is_in_tree, "T"),
    ]
    .join(" ");

    format!(
        "  {}  {:<width$}  {} / {}",
        presence,
        status.path,
        colored_working_diff(status.diff_string),
        colored_cached_diff(status.diff_cached_string),
    )
}

fn presence_flag(present: bool, letter: &str) -> String {
    if present {
        letter.green().to_string()
    } else {
        "-".bright_black().to_string()
    }
}

fn colored_working_diff(diff: WorkingDiff) -> ColoredString {
    match diff {
        WorkingDiff::None => "-".bright_black(),
        WorkingDiff::Untracked => diff.as_str().red(),
        WorkingDiff::Deleted => diff.as_str().red(),
        WorkingDiff::Modified => diff.as_str().yellow(),
    }
}

fn colored_cached_diff(diff: CachedDiff) -> ColoredString {
    match diff {
        CachedDiff::None => "-".bright_black(),
        CachedDiff::New => diff.as_str().green(),
        CachedDiff::Deleted => diff.as_str().red(),
        CachedDiff::Modified => diff.as_str().yellow(),
    }
}
