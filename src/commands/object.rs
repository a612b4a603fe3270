use crate::core::{
    error::Result,
    git::GitRepo,
    objects::ObjectId,
    output::print_json,
};
use serde_json::json;

pub fn execute_commit(git_repo: &GitRepo, id: &str) -> Result<()> {
    let commit = git_repo.decode_commit(&ObjectId::new(id))?;
    print_json(&commit)
}

pub fn execute_tree(git_repo: &GitRepo, id: &str) -> Result<()> {
    let tree = git_repo.decode_tree(&ObjectId::new(id))?;
    print_json(&tree)
}

pub fn execute_blob(git_repo: &GitRepo, id: &str) -> Result<()> {
    let blob = git_repo.decode_blob(&ObjectId::new(id))?;
    print_json(&json!({
        "id": blob.id,
        "rawSize": blob.raw_size,
        "sizeMatches": blob.size_matches(),
        "content": blob.text(),
    }))
}
