//! # Repository Discovery
//!
//! Finds the repository enclosing a directory by walking towards the
//! filesystem root and opens it for the lifetime of a session.

use std::env;
use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::debug;

use crate::consts;
use crate::error::LocateError;

/// The repository a session operates on.
///
/// The root is fixed when the handle is created; later changes of the
/// process working directory do not affect it. Dropping the handle releases
/// the underlying libgit2 repository.
pub struct RepositoryHandle {
  root: PathBuf,
  repo: Repository,
}

impl RepositoryHandle {
  /// Directory holding the `.git` entry.
  pub fn root(&self) -> &Path {
    &self.root
  }

  /// The opened repository.
  pub fn repo(&self) -> &Repository {
    &self.repo
  }
}

impl Drop for RepositoryHandle {
  fn drop(&mut self) {
    debug!("Releasing repository at {}", self.root.display());
  }
}

/// Locate the repository enclosing the current working directory.
pub fn locate_from_current_dir() -> Result<RepositoryHandle, LocateError> {
  let current_dir = env::current_dir().map_err(LocateError::CurrentDir)?;
  locate(current_dir)
}

/// Locate the repository enclosing `start` and open it.
pub fn locate<P: AsRef<Path>>(start: P) -> Result<RepositoryHandle, LocateError> {
  let start = std::path::absolute(start.as_ref()).map_err(LocateError::CurrentDir)?;

  let root = find_repository_root(&start).ok_or_else(|| LocateError::NotFound { start: start.clone() })?;
  debug!("Found repository root at {}", root.display());

  let repo = Repository::open(&root).map_err(|source| LocateError::Open {
    path: root.clone(),
    source,
  })?;

  Ok(RepositoryHandle { root, repo })
}

/// Return the nearest directory at or above `start` that contains a `.git`
/// entry. Worktrees and submodules use a `.git` file rather than a
/// directory; both count.
pub fn find_repository_root(start: &Path) -> Option<PathBuf> {
  start
    .ancestors()
    .find(|dir| dir.join(consts::GIT_DIR).exists())
    .map(Path::to_path_buf)
}
