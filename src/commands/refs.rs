use crate::core::{error::Result, git::GitRepo, output::print_json};

pub fn execute_refs(git_repo: &GitRepo) -> Result<()> {
    let references = git_repo.list_references();
    log::debug!("Listed {} references", references.len());
    print_json(&references)
}
