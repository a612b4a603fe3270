use crate::core::{content::ContentSource, error::Result, git::GitRepo};
use std::io::Write;

/// Writes the content of `path` in `source` to stdout, unmodified
pub fn execute_show(git_repo: &GitRepo, source: &str, path: &str) -> Result<()> {
    let source: ContentSource = source.parse()?;
    let content = git_repo.content(source, path);
    if content.is_empty() {
        log::debug!("No {source} content for '{path}'");
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&content)?;
    stdout.flush()?;
    Ok(())
}
