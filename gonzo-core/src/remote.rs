//! # Remote Sync
//!
//! Fetch, pull and push are handed to the `git` executable so that
//! credential helpers, hooks and transport configuration behave exactly as
//! they do on the command line.

use std::path::Path;

use anyhow::{Result, bail};
use git2::Repository;
use tracing::info;

use crate::catalog::current_branch_name;
use crate::process::{DelegatedCommand, Delegate};

/// Delegates network operations for one repository.
pub struct RemoteSync<'a> {
  root: &'a Path,
  repo: &'a Repository,
  delegate: &'a dyn Delegate,
  remote: String,
}

impl<'a> RemoteSync<'a> {
  pub fn new(root: &'a Path, repo: &'a Repository, delegate: &'a dyn Delegate, remote: impl Into<String>) -> Self {
    Self {
      root,
      repo,
      delegate,
      remote: remote.into(),
    }
  }

  /// `git fetch -p --all --quiet`
  pub fn fetch(&self) -> Result<()> {
    self.delegate_git("fetch", &["fetch", "-p", "--all", "--quiet"])
  }

  /// `git pull -p --quiet`
  pub fn pull(&self) -> Result<()> {
    self.delegate_git("pull", &["pull", "-p", "--quiet"])
  }

  /// Publish the current branch and make it track the remote copy.
  pub fn push(&self) -> Result<()> {
    let branch = self.branch_to_push()?;
    self.delegate_git("push", &["push", "--set-upstream", &self.remote, &branch])
  }

  /// Like [`RemoteSync::push`], but overwrites the remote branch as long as
  /// it still matches the local remote-tracking ref.
  pub fn push_force(&self) -> Result<()> {
    let branch = self.branch_to_push()?;
    self.delegate_git(
      "push",
      &["push", "--force-with-lease", "--set-upstream", &self.remote, &branch],
    )
  }

  fn branch_to_push(&self) -> Result<String> {
    match current_branch_name(self.repo) {
      Some(branch) => Ok(branch),
      None => bail!("HEAD is detached; check out a branch before pushing"),
    }
  }

  fn delegate_git(&self, label: &str, args: &[&str]) -> Result<()> {
    let command = DelegatedCommand::git(args);
    info!("Delegating {} to `{}`", label, command);
    crate::output::print_info(&format!("{label} ..."));
    self.delegate.run(self.root, &command)?;
    crate::output::print_info(&format!("... {label} done"));
    Ok(())
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use std::cell::RefCell;
  use std::path::PathBuf;

  use gonzo_test_utils::GitRepoTestGuard;

  use super::*;
  use crate::error::DelegationError;

  /// Records every command instead of running it.
  #[derive(Default)]
  pub(crate) struct RecordingDelegate {
    pub calls: RefCell<Vec<(PathBuf, DelegatedCommand)>>,
    pub fail: bool,
  }

  impl RecordingDelegate {
    pub(crate) fn failing() -> Self {
      Self {
        fail: true,
        ..Self::default()
      }
    }

    pub(crate) fn argv(&self) -> Vec<Vec<String>> {
      self
        .calls
        .borrow()
        .iter()
        .map(|(_, cmd)| {
          let mut argv = vec![cmd.program.clone()];
          argv.extend(cmd.args.iter().cloned());
          argv
        })
        .collect()
    }
  }

  impl Delegate for RecordingDelegate {
    fn run(&self, dir: &Path, command: &DelegatedCommand) -> Result<(), DelegationError> {
      self.calls.borrow_mut().push((dir.to_path_buf(), command.clone()));
      if self.fail {
        return Err(DelegationError::TimedOut {
          command: command.to_string(),
          timeout: std::time::Duration::from_secs(1),
        });
      }
      Ok(())
    }
  }

  fn git(args: &[&str]) -> Vec<String> {
    let mut argv = vec![crate::consts::GIT_EXECUTABLE.to_string()];
    argv.extend(args.iter().map(|a| a.to_string()));
    argv
  }

  #[test]
  fn fetch_and_pull_use_fixed_argv_in_root() {
    let guard = GitRepoTestGuard::with_initial_commit();
    let delegate = RecordingDelegate::default();
    let sync = RemoteSync::new(guard.path(), &guard.repo, &delegate, "origin");

    sync.fetch().unwrap();
    sync.pull().unwrap();

    assert_eq!(
      delegate.argv(),
      vec![git(&["fetch", "-p", "--all", "--quiet"]), git(&["pull", "-p", "--quiet"])]
    );
    assert!(delegate.calls.borrow().iter().all(|(dir, _)| dir == guard.path()));
  }

  #[test]
  fn push_targets_current_branch_on_configured_remote() {
    let guard = GitRepoTestGuard::with_initial_commit();
    let delegate = RecordingDelegate::default();
    let sync = RemoteSync::new(guard.path(), &guard.repo, &delegate, "fork");

    sync.push().unwrap();
    sync.push_force().unwrap();

    assert_eq!(
      delegate.argv(),
      vec![
        git(&["push", "--set-upstream", "fork", "main"]),
        git(&["push", "--force-with-lease", "--set-upstream", "fork", "main"]),
      ]
    );
  }

  #[test]
  fn push_refuses_detached_head() {
    let guard = GitRepoTestGuard::with_initial_commit();
    let oid = guard.repo.head().unwrap().target().unwrap();
    guard.repo.set_head_detached(oid).unwrap();
    let delegate = RecordingDelegate::default();
    let sync = RemoteSync::new(guard.path(), &guard.repo, &delegate, "origin");

    let err = sync.push().unwrap_err();

    assert!(err.to_string().contains("detached"));
    assert!(delegate.calls.borrow().is_empty());
  }

  #[test]
  fn delegation_failure_is_reported_once() {
    let guard = GitRepoTestGuard::with_initial_commit();
    let delegate = RecordingDelegate::failing();
    let sync = RemoteSync::new(guard.path(), &guard.repo, &delegate, "origin");

    let err = sync.fetch().unwrap_err();

    assert!(err.downcast_ref::<DelegationError>().is_some());
    assert_eq!(delegate.calls.borrow().len(), 1);
  }
}
