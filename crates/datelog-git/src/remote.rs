//! Remote operations

use tracing::debug;

use crate::repository::{GitRepo, Result};
use datelog_core::error::GitError;

impl GitRepo {
    /// Get the URL for a remote
    pub fn remote_url(&self, name: &str) -> Result<String> {
        match self.repo.find_remote(name) {
            Ok(remote) => {
                let url = remote
                    .url()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| GitError::RemoteUrlMissing(name.to_string()))?;
                debug!(remote = name, url = %url, "resolved remote url");
                Ok(url)
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                Err(GitError::RemoteNotFound(name.to_string()))
            }
            Err(e) if e.code() == git2::ErrorCode::InvalidSpec => {
                Err(GitError::RemoteNotFound(name.to_string()))
            }
            Err(e) => Err(GitError::Git2(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::setup_repo;

    #[test]
    fn test_remote_not_found() {
        let (_temp, repo) = setup_repo(&[]);
        let result = repo.remote_url("nonexistent");
        assert!(matches!(result, Err(GitError::RemoteNotFound(_))));
    }

    #[test]
    fn test_remote_url() {
        let (_temp, repo) = setup_repo(&[]);
        repo.repo
            .remote("origin", "https://example.com/repo.git")
            .unwrap();
        repo.repo
            .remote("upstream", "git@example.com:team/repo.git")
            .unwrap();

        assert_eq!(
            repo.remote_url("origin").unwrap(),
            "https://example.com/repo.git"
        );
        assert_eq!(
            repo.remote_url("upstream").unwrap(),
            "git@example.com:team/repo.git"
        );
    }
}
