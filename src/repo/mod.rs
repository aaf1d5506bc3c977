//! Repository Checkout
//!
//! Shallow `git clone` of a remote repository into a scratch directory.
//! The checkout lives as long as the returned [`Checkout`] and is removed
//! when it drops.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use tempfile::TempDir;
use tokio::process::Command;
use tracing::{debug, info};

use crate::types::{DocError, Result};

const FALLBACK_REPO_NAME: &str = "repository";

/// Repository name from a clone URL: the last path segment without `.git`.
///
/// Trailing slashes are ignored. Returns `"repository"` when nothing is left.
pub fn repo_name_from_url(url: &str) -> String {
    let segment = url
        .trim()
        .trim_end_matches('/')
        .rsplit(['/', ':'])
        .next()
        .unwrap_or_default();
    let name = segment.strip_suffix(".git").unwrap_or(segment);

    if name.is_empty() {
        FALLBACK_REPO_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// A cloned repository inside a temporary directory
#[derive(Debug)]
pub struct Checkout {
    _dir: TempDir,
    path: PathBuf,
}

impl Checkout {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Clone `url` with `--depth 1` into `<dest_dir>/<repo name>`
pub async fn clone_repository(url: &str, dest_dir: &Path) -> Result<PathBuf> {
    let target = dest_dir.join(repo_name_from_url(url));
    info!("Cloning {} into {}", url, target.display());

    let output = Command::new("git")
        .args(["clone", "--depth", "1", "--"])
        .arg(url)
        .arg(&target)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| DocError::Clone {
            url: url.to_string(),
            reason: format!("failed to run git: {}", e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = if stderr.trim().is_empty() {
            format!("git exited with {}", output.status)
        } else {
            stderr.trim().to_string()
        };
        return Err(DocError::Clone {
            url: url.to_string(),
            reason,
        });
    }

    debug!("Clone finished: {}", target.display());
    Ok(target)
}

/// Clone into a fresh temporary directory
pub async fn clone_to_temp(url: &str) -> Result<Checkout> {
    let dir = tempfile::Builder::new().prefix("docweave-").tempdir()?;
    let path = clone_repository(url, dir.path()).await?;
    Ok(Checkout { _dir: dir, path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_name_from_url() {
        assert_eq!(
            repo_name_from_url("https://github.com/acme/billing-service.git"),
            "billing-service"
        );
        assert_eq!(repo_name_from_url("https://github.com/acme/tool"), "tool");
        assert_eq!(repo_name_from_url("https://github.com/acme/tool/"), "tool");
        assert_eq!(repo_name_from_url("git@github.com:acme/api.git"), "api");
        assert_eq!(repo_name_from_url("git@host:api.git"), "api");
    }

    #[test]
    fn test_repo_name_fallback() {
        assert_eq!(repo_name_from_url(""), "repository");
        assert_eq!(repo_name_from_url("https://host/.git"), "repository");
        assert_eq!(repo_name_from_url("///"), "repository");
    }

    #[tokio::test]
    async fn test_clone_failure_is_clone_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("no-such-repo");
        let url = missing.display().to_string();

        let err = clone_repository(&url, temp.path()).await.unwrap_err();
        match err {
            DocError::Clone { url: reported, reason } => {
                assert_eq!(reported, url);
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_clone_to_temp_reports_failure() {
        let err = clone_to_temp("/definitely/not/a/repo.git").await.unwrap_err();
        assert!(matches!(err, DocError::Clone { .. }));
    }
}
