//! Fixture repositories for tests

use std::path::Path;

use git2::{Repository, Signature, Time};
use tempfile::TempDir;

use crate::repository::GitRepo;

/// A commit to create: message, unix seconds, offset in minutes
pub type FixtureCommit<'a> = (&'a str, i64, i32);

/// Create a repository with one commit per entry, oldest first
pub fn setup_repo(commits: &[FixtureCommit<'_>]) -> (TempDir, GitRepo) {
    let temp = TempDir::new().unwrap();
    let repo = Repository::init(temp.path()).unwrap();

    for (i, (message, seconds, offset)) in commits.iter().enumerate() {
        let sig = Signature::new("Test", "test@example.com", &Time::new(*seconds, *offset)).unwrap();

        let file = format!("file{}.txt", i);
        std::fs::write(temp.path().join(&file), message).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(&file)).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap();
    }

    let git_repo = GitRepo::discover(temp.path()).unwrap();
    (temp, git_repo)
}

/// Whether the `git` binary is available to tests that shell out
pub fn git_available() -> bool {
    which::which("git").is_ok()
}
