//! Remote-tracking fixtures
//!
//! Two flavours are offered. [`track_remote_branch`] and
//! [`forget_remote_branch`] fabricate remote-tracking refs directly, which is
//! enough for anything that only reads the local ref store. [`BareRemote`]
//! backs a remote with a real bare repository on disk so the `git`
//! executable can fetch and prune against it.

use std::path::Path;

use anyhow::{Context, Result};
use git2::{BranchType, Repository};
use tempfile::TempDir;

/// Point `branch` at a remote-tracking ref `<remote>/<branch>` that sits on
/// the same commit as the local branch, registering `remote` first if needed.
pub fn track_remote_branch(repo: &Repository, branch: &str, remote: &str) -> Result<()> {
  if repo.find_remote(remote).is_err() {
    repo.remote(remote, &format!("https://example.invalid/{remote}.git"))?;
  }

  let tip = repo
    .find_branch(branch, BranchType::Local)?
    .get()
    .target()
    .context("Branch has no target commit")?;
  repo.reference(
    &format!("refs/remotes/{remote}/{branch}"),
    tip,
    true,
    "test: fabricate remote-tracking ref",
  )?;

  let mut local = repo.find_branch(branch, BranchType::Local)?;
  local.set_upstream(Some(&format!("{remote}/{branch}")))?;
  Ok(())
}

/// Delete the remote-tracking ref `<remote>/<branch>` while leaving the local
/// branch's upstream configuration untouched, which is exactly what
/// `git fetch --prune` leaves behind after the remote branch is deleted.
pub fn forget_remote_branch(repo: &Repository, remote: &str, branch: &str) -> Result<()> {
  let mut reference = repo.find_reference(&format!("refs/remotes/{remote}/{branch}"))?;
  reference.delete()?;
  Ok(())
}

/// A bare repository in a temporary directory acting as a remote.
pub struct BareRemote {
  /// The temporary directory holding the bare repository
  pub temp_dir: TempDir,
  /// The bare repository itself
  pub repo: Repository,
}

impl BareRemote {
  /// Create an empty bare repository.
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let repo = Repository::init_bare(temp_dir.path()).expect("Failed to initialize bare repository");
    Self { temp_dir, repo }
  }

  /// Location of the bare repository, usable as a remote URL.
  pub fn path(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Register this bare repository as `name` in `repo`.
  pub fn attach(&self, repo: &Repository, name: &str) -> Result<()> {
    let url = self.path().to_str().context("Remote path is not valid UTF-8")?;
    repo.remote(name, url)?;
    Ok(())
  }

  /// Push `branch` from `repo` to this remote (registered as `remote`) and
  /// make it the branch's upstream.
  pub fn publish(&self, repo: &Repository, remote: &str, branch: &str) -> Result<()> {
    let refspec = format!("refs/heads/{branch}:refs/heads/{branch}");
    repo.find_remote(remote)?.push(&[refspec.as_str()], None)?;

    let tip = repo
      .find_branch(branch, BranchType::Local)?
      .get()
      .target()
      .context("Branch has no target commit")?;
    repo.reference(
      &format!("refs/remotes/{remote}/{branch}"),
      tip,
      true,
      "test: record pushed branch",
    )?;

    let mut local = repo.find_branch(branch, BranchType::Local)?;
    local.set_upstream(Some(&format!("{remote}/{branch}")))?;
    Ok(())
  }

  /// Delete `branch` on the remote side only.
  pub fn delete_branch(&self, branch: &str) -> Result<()> {
    let mut reference = self.repo.find_reference(&format!("refs/heads/{branch}"))?;
    reference.delete()?;
    Ok(())
  }

  /// Whether the remote currently has `branch`.
  pub fn has_branch(&self, branch: &str) -> bool {
    self.repo.find_reference(&format!("refs/heads/{branch}")).is_ok()
  }
}

impl Default for BareRemote {
  fn default() -> Self {
    Self::new()
  }
}
