//! # Branch Lifecycle
//!
//! Switching, creating and deleting local branches. Index-addressed
//! operations always resolve the index against a freshly computed catalog,
//! and every validation happens before the repository is touched.

use anyhow::{Context, Result, bail};
use git2::{Branch, BranchType, ErrorCode, Oid, Repository};
use tracing::{debug, warn};

use crate::catalog::{BranchEntry, BranchRef, list_branches};
use crate::error::SelectionError;
use crate::output::{print_error, print_header, print_info, print_success, print_warning};
use crate::prompt::{LineSource, confirm};
use crate::remote::RemoteSync;

/// How a single-branch delete ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
  /// The branch no longer exists.
  Deleted,
  /// The branch was not fully merged and the user declined to force it.
  Aborted,
}

/// Result of one delete attempt before any confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
  Deleted,
  NotMerged,
}

/// How a gone-branch cleanup ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoneCleanup {
  /// No deletable gone branches; nothing was asked.
  NothingToDelete,
  /// The batch prompt was declined; nothing was deleted.
  Declined { candidates: Vec<String> },
  /// The batch was confirmed. Each candidate lands in exactly one list.
  Completed {
    deleted: Vec<String>,
    aborted: Vec<String>,
    failed: Vec<String>,
  },
}

/// Parse a user-supplied selection index.
pub fn parse_index(raw: &str) -> Result<usize, SelectionError> {
  raw
    .parse::<usize>()
    .ok()
    .ok_or_else(|| SelectionError::NotAnIndex(raw.to_string()))
}

/// Look up `index` in a listing, checking bounds against its length.
pub fn select(entries: &[BranchEntry], index: usize) -> Result<&BranchEntry, SelectionError> {
  entries.get(index).ok_or(SelectionError::OutOfRange {
    index,
    len: entries.len(),
  })
}

/// Name of a ticket branch: `<user>/<ticket>/<topic>`.
pub fn ticket_branch_name(user: &str, ticket: &str, topic: &str) -> String {
  format!("{user}/{ticket}/{topic}")
}

/// Branch mutations for one repository, asking confirmations through a line
/// source.
pub struct BranchLifecycle<'a> {
  repo: &'a Repository,
  lines: &'a mut dyn LineSource,
}

impl<'a> BranchLifecycle<'a> {
  pub fn new(repo: &'a Repository, lines: &'a mut dyn LineSource) -> Self {
    Self { repo, lines }
  }

  /// Check out the branch at `index` in the current listing. Returns its
  /// short name.
  pub fn switch_to(&mut self, index: usize) -> Result<String> {
    let entries = list_branches(self.repo)?;
    let entry = select(&entries, index)?;
    checkout_branch(self.repo, &entry.branch.short_name)?;
    Ok(entry.branch.short_name.clone())
  }

  /// Delete the branch at `index` in the current listing, asking before
  /// deleting unmerged work.
  pub fn delete(&mut self, index: usize) -> Result<DeleteOutcome> {
    let entries = list_branches(self.repo)?;
    let entry = select(&entries, index)?;
    if entry.branch.is_current {
      return Err(SelectionError::CurrentBranch(entry.branch.short_name.clone()).into());
    }
    self.delete_branch(&entry.branch)
  }

  /// Fetch with pruning, then offer to delete every branch whose upstream
  /// has disappeared. A failed fetch is reported and the cleanup continues
  /// with whatever the local refs say.
  pub fn delete_gone(&mut self, sync: &RemoteSync<'_>) -> Result<GoneCleanup> {
    if let Err(e) = sync.fetch() {
      warn!("Fetch before gone cleanup failed: {:#}", e);
      print_warning(&format!("fetch failed, continuing with local state: {e:#}"));
    }

    let candidates: Vec<BranchRef> = list_branches(self.repo)?
      .into_iter()
      .filter(|entry| entry.status.is_gone() && !entry.branch.is_current)
      .map(|entry| entry.branch)
      .collect();
    let names: Vec<String> = candidates.iter().map(|b| b.short_name.clone()).collect();

    if candidates.is_empty() {
      print_info("NO GONE BRANCHES TO DELETE");
      return Ok(GoneCleanup::NothingToDelete);
    }

    print_header("Deleting GONE branches:");
    for name in &names {
      print_info(name);
    }
    if !confirm(self.lines, "Confirm delete?  Y/[N] ")? {
      return Ok(GoneCleanup::Declined { candidates: names });
    }

    let mut deleted = Vec::new();
    let mut aborted = Vec::new();
    let mut failed = Vec::new();
    for branch in &candidates {
      match self.delete_branch(branch) {
        Ok(DeleteOutcome::Deleted) => deleted.push(branch.short_name.clone()),
        Ok(DeleteOutcome::Aborted) => aborted.push(branch.short_name.clone()),
        Err(e) => {
          print_error(&format!("failed to delete {}: {e:#}", branch.short_name));
          failed.push(branch.short_name.clone());
        }
      }
    }

    Ok(GoneCleanup::Completed {
      deleted,
      aborted,
      failed,
    })
  }

  /// Create `name` at HEAD and check it out. No upstream is configured.
  pub fn create(&mut self, name: &str) -> Result<()> {
    if !Branch::name_is_valid(name).unwrap_or(false) {
      bail!("'{name}' is not a valid branch name");
    }
    if self.repo.find_branch(name, BranchType::Local).is_ok() {
      bail!("a branch named '{name}' already exists");
    }

    let refname = format!("refs/heads/{name}");
    match self.repo.head() {
      Ok(head) => {
        let commit = head.peel_to_commit().context("Failed to resolve HEAD commit")?;
        self
          .repo
          .branch(name, &commit, false)
          .with_context(|| format!("Failed to create branch '{name}'"))?;
      }
      Err(e) if e.code() == ErrorCode::UnbornBranch => {
        debug!("HEAD is unborn; '{}' will be created by the first commit", name);
      }
      Err(e) => return Err(e).context("Failed to resolve HEAD"),
    }

    // The new branch sits on HEAD's commit, so only HEAD needs to move.
    self
      .repo
      .set_head(&refname)
      .with_context(|| format!("Failed to set HEAD to branch '{name}'"))?;
    Ok(())
  }

  fn delete_branch(&mut self, branch: &BranchRef) -> Result<DeleteOutcome> {
    match self.attempt_delete(branch, false)? {
      Attempt::Deleted => Ok(DeleteOutcome::Deleted),
      Attempt::NotMerged => {
        let prompt = format!("branch {} not merged, delete anyway? Y/[N] ", branch.short_name);
        if confirm(self.lines, &prompt)? {
          self.attempt_delete(branch, true)?;
          Ok(DeleteOutcome::Deleted)
        } else {
          debug!("Kept unmerged branch {}", branch.short_name);
          Ok(DeleteOutcome::Aborted)
        }
      }
    }
  }

  fn attempt_delete(&self, branch: &BranchRef, force: bool) -> Result<Attempt> {
    let tip = self
      .repo
      .refname_to_id(&branch.full_name)
      .with_context(|| format!("Branch '{}' not found", branch.short_name))?;
    if !force && !is_merged(self.repo, branch, tip)? {
      return Ok(Attempt::NotMerged);
    }

    delete_local_branch(self.repo, &branch.short_name)?;
    let short_oid: String = tip.to_string().chars().take(7).collect();
    print_success(&format!("Deleted branch {} (was {short_oid})", branch.short_name));
    Ok(Attempt::Deleted)
  }
}

/// Whether `tip` is reachable from the branch's upstream, or from HEAD when
/// the upstream does not resolve.
fn is_merged(repo: &Repository, branch: &BranchRef, tip: Oid) -> Result<bool> {
  let upstream = repo
    .branch_upstream_name(&branch.full_name)
    .ok()
    .and_then(|buf| buf.as_str().map(str::to_string))
    .and_then(|name| repo.refname_to_id(&name).ok());

  let base = match upstream {
    Some(oid) => oid,
    None => match repo.head().ok().and_then(|head| head.target()) {
      Some(oid) => oid,
      None => return Ok(false),
    },
  };

  Ok(!has_unique_commits(repo, tip, base)?)
}

/// Whether `tip` has at least one commit not reachable from `base`.
fn has_unique_commits(repo: &Repository, tip: Oid, base: Oid) -> Result<bool> {
  if tip == base {
    return Ok(false);
  }

  let mut revwalk = repo.revwalk()?;
  revwalk.push(tip)?;
  revwalk.hide(base)?;

  Ok(revwalk.next().is_some())
}

/// Checkout an existing local branch.
pub fn checkout_branch(repo: &Repository, branch_name: &str) -> Result<()> {
  // Update the working tree and index before moving HEAD so the index never
  // goes stale.
  let commit = repo
    .find_branch(branch_name, BranchType::Local)
    .with_context(|| format!("Branch '{branch_name}' not found"))?
    .into_reference()
    .peel_to_commit()
    .with_context(|| format!("Failed to peel branch '{branch_name}' to commit"))?;

  repo
    .checkout_tree(commit.as_object(), Some(git2::build::CheckoutBuilder::new().safe()))
    .with_context(|| format!("Failed to checkout tree for branch '{branch_name}'"))?;

  repo
    .set_head(&format!("refs/heads/{branch_name}"))
    .with_context(|| format!("Failed to set HEAD to branch '{branch_name}'"))?;

  Ok(())
}

/// Delete a local branch by name.
///
/// libgit2 can report an error while cleaning up config entries that do
/// not exist (`could not find key 'branch.<name>.<key>' to delete`) even
/// though the ref itself is gone. In that case the deletion is treated as
/// successful once the branch is confirmed missing.
///
/// See: <https://github.com/libgit2/libgit2/issues/4247>
fn delete_local_branch(repo: &Repository, branch_name: &str) -> Result<()> {
  let mut branch = repo
    .find_branch(branch_name, BranchType::Local)
    .with_context(|| format!("Branch '{branch_name}' not found"))?;

  match branch.delete() {
    Ok(()) => Ok(()),
    Err(e) => {
      let is_config_key_error = e.class() == git2::ErrorClass::Config && e.message().contains("could not find key");

      if is_config_key_error
        && let Err(lookup_err) = repo.find_branch(branch_name, BranchType::Local)
        && lookup_err.code() == ErrorCode::NotFound
      {
        return Ok(());
      }

      Err(e).with_context(|| format!("Failed to delete branch '{branch_name}'"))
    }
  }
}

#[cfg(test)]
mod tests {
  use gonzo_test_utils::{
    GitRepoTestGuard, checkout_branch as force_checkout, create_branch, create_commit, forget_remote_branch,
    track_remote_branch,
  };

  use super::*;
  use crate::prompt::ScriptedLines;
  use crate::remote::tests::RecordingDelegate;

  const NOT_MERGED_TOPIC: &str = "branch topic not merged, delete anyway? Y/[N] ";

  /// `main` plus a `topic` branch carrying one commit that `main` lacks.
  /// `main` is checked out.
  fn repo_with_unmerged_topic() -> GitRepoTestGuard {
    let guard = GitRepoTestGuard::with_initial_commit();
    create_branch(&guard.repo, "topic", None).unwrap();
    force_checkout(&guard.repo, "topic").unwrap();
    create_commit(&guard.repo, "topic.txt", "work\n", "topic work").unwrap();
    force_checkout(&guard.repo, "main").unwrap();
    guard
  }

  fn index_of(repo: &Repository, short: &str) -> usize {
    list_branches(repo)
      .unwrap()
      .iter()
      .position(|e| e.branch.short_name == short)
      .unwrap()
  }

  fn selection_error(err: &anyhow::Error) -> Option<&SelectionError> {
    err.downcast_ref::<SelectionError>()
  }

  #[test]
  fn parse_index_accepts_only_non_negative_integers() {
    assert_eq!(parse_index("0"), Ok(0));
    assert_eq!(parse_index("12"), Ok(12));
    assert_eq!(parse_index("-1"), Err(SelectionError::NotAnIndex("-1".to_string())));
    assert_eq!(parse_index("two"), Err(SelectionError::NotAnIndex("two".to_string())));
    assert_eq!(parse_index(""), Err(SelectionError::NotAnIndex(String::new())));
  }

  #[test]
  fn switch_checks_out_selected_branch() {
    let guard = GitRepoTestGuard::with_initial_commit();
    create_branch(&guard.repo, "feature", None).unwrap();
    let mut lines = ScriptedLines::default();
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

    let switched = lifecycle.switch_to(1).unwrap();

    assert_eq!(switched, "feature");
    assert_eq!(guard.head_branch().as_deref(), Some("feature"));
  }

  #[test]
  fn switch_out_of_range_does_not_mutate() {
    let guard = GitRepoTestGuard::with_initial_commit();
    create_branch(&guard.repo, "feature", None).unwrap();
    let mut lines = ScriptedLines::default();
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

    let err = lifecycle.switch_to(2).unwrap_err();

    assert_eq!(
      selection_error(&err),
      Some(&SelectionError::OutOfRange { index: 2, len: 2 })
    );
    assert_eq!(guard.head_branch().as_deref(), Some("main"));
  }

  #[test]
  fn switch_materializes_branch_files() {
    let guard = repo_with_unmerged_topic();
    let mut lines = ScriptedLines::default();
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);
    assert!(!guard.path().join("topic.txt").exists());

    lifecycle.switch_to(index_of(&guard.repo, "topic")).unwrap();

    assert!(guard.path().join("topic.txt").exists());
  }

  #[test]
  fn delete_out_of_range_does_not_mutate() {
    let guard = GitRepoTestGuard::with_initial_commit();
    create_branch(&guard.repo, "feature", None).unwrap();
    let mut lines = ScriptedLines::default();
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

    let err = lifecycle.delete(7).unwrap_err();

    assert!(matches!(selection_error(&err), Some(SelectionError::OutOfRange { .. })));
    assert!(guard.has_branch("feature"));
    assert!(lines.prompts().is_empty());
  }

  #[test]
  fn deleting_current_branch_is_rejected() {
    let guard = GitRepoTestGuard::with_initial_commit();
    create_branch(&guard.repo, "feature", None).unwrap();
    let mut lines = ScriptedLines::default();
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

    let err = lifecycle.delete(0).unwrap_err();

    assert_eq!(
      selection_error(&err),
      Some(&SelectionError::CurrentBranch("main".to_string()))
    );
    assert!(guard.has_branch("main"));
  }

  #[test]
  fn merged_branch_is_deleted_without_prompt() {
    let guard = GitRepoTestGuard::with_initial_commit();
    create_branch(&guard.repo, "done", None).unwrap();
    let mut lines = ScriptedLines::default();
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

    let outcome = lifecycle.delete(index_of(&guard.repo, "done")).unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert!(!guard.has_branch("done"));
    assert!(lines.prompts().is_empty());
  }

  #[test]
  fn unmerged_branch_declined_with_n_is_kept() {
    let guard = repo_with_unmerged_topic();
    let mut lines = ScriptedLines::new(["N"]);
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

    let outcome = lifecycle.delete(index_of(&guard.repo, "topic")).unwrap();

    assert_eq!(outcome, DeleteOutcome::Aborted);
    assert!(guard.has_branch("topic"));
    assert_eq!(lines.prompts(), [NOT_MERGED_TOPIC]);
  }

  #[test]
  fn unmerged_branch_kept_on_anything_but_exact_y() {
    for answer in ["y", "yes", "", " Y"] {
      let guard = repo_with_unmerged_topic();
      let mut lines = ScriptedLines::new([answer]);
      let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

      let outcome = lifecycle.delete(index_of(&guard.repo, "topic")).unwrap();

      assert_eq!(outcome, DeleteOutcome::Aborted, "answer {answer:?}");
      assert!(guard.has_branch("topic"));
    }
  }

  #[test]
  fn unmerged_branch_forced_on_y() {
    let guard = repo_with_unmerged_topic();
    let mut lines = ScriptedLines::new(["Y"]);
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

    let outcome = lifecycle.delete(index_of(&guard.repo, "topic")).unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert!(!guard.has_branch("topic"));
  }

  #[test]
  fn branch_merged_into_its_upstream_needs_no_prompt() {
    let guard = repo_with_unmerged_topic();
    // The remote copy holds the topic commit even though HEAD does not.
    track_remote_branch(&guard.repo, "topic", "origin").unwrap();
    let mut lines = ScriptedLines::default();
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

    let outcome = lifecycle.delete(index_of(&guard.repo, "topic")).unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert!(lines.prompts().is_empty());
  }

  #[test]
  fn delete_gone_with_no_candidates_never_prompts() {
    let guard = GitRepoTestGuard::with_initial_commit();
    create_branch(&guard.repo, "local-only", None).unwrap();
    let delegate = RecordingDelegate::default();
    let sync = RemoteSync::new(guard.path(), &guard.repo, &delegate, "origin");
    let mut lines = ScriptedLines::new(["Y"]);
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

    let cleanup = lifecycle.delete_gone(&sync).unwrap();

    assert_eq!(cleanup, GoneCleanup::NothingToDelete);
    assert!(lines.prompts().is_empty());
    assert_eq!(lines.remaining(), 1);
    assert!(guard.has_branch("local-only"));
    assert_eq!(delegate.calls.borrow().len(), 1);
  }

  #[test]
  fn delete_gone_removes_gone_branches_after_one_confirmation() {
    let guard = GitRepoTestGuard::with_initial_commit();
    for name in ["feature/x", "feature/y", "kept"] {
      create_branch(&guard.repo, name, None).unwrap();
    }
    for name in ["main", "feature/x", "feature/y", "kept"] {
      track_remote_branch(&guard.repo, name, "origin").unwrap();
    }
    forget_remote_branch(&guard.repo, "origin", "feature/x").unwrap();
    forget_remote_branch(&guard.repo, "origin", "feature/y").unwrap();

    let delegate = RecordingDelegate::default();
    let sync = RemoteSync::new(guard.path(), &guard.repo, &delegate, "origin");
    let mut lines = ScriptedLines::new(["Y"]);
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

    let cleanup = lifecycle.delete_gone(&sync).unwrap();

    assert_eq!(
      cleanup,
      GoneCleanup::Completed {
        deleted: vec!["feature/x".to_string(), "feature/y".to_string()],
        aborted: vec![],
        failed: vec![],
      }
    );
    assert_eq!(lines.prompts(), ["Confirm delete?  Y/[N] "]);
    assert!(guard.has_branch("kept"));
    assert!(guard.has_branch("main"));
  }

  #[test]
  fn delete_gone_skips_current_branch() {
    let guard = GitRepoTestGuard::with_initial_commit();
    create_branch(&guard.repo, "feature/x", None).unwrap();
    track_remote_branch(&guard.repo, "feature/x", "origin").unwrap();
    forget_remote_branch(&guard.repo, "origin", "feature/x").unwrap();
    force_checkout(&guard.repo, "feature/x").unwrap();

    let delegate = RecordingDelegate::default();
    let sync = RemoteSync::new(guard.path(), &guard.repo, &delegate, "origin");
    let mut lines = ScriptedLines::new(["Y"]);
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

    let cleanup = lifecycle.delete_gone(&sync).unwrap();

    assert_eq!(cleanup, GoneCleanup::NothingToDelete);
    assert!(guard.has_branch("feature/x"));
  }

  #[test]
  fn delete_gone_declined_deletes_nothing() {
    let guard = GitRepoTestGuard::with_initial_commit();
    create_branch(&guard.repo, "feature/x", None).unwrap();
    track_remote_branch(&guard.repo, "feature/x", "origin").unwrap();
    forget_remote_branch(&guard.repo, "origin", "feature/x").unwrap();

    let delegate = RecordingDelegate::default();
    let sync = RemoteSync::new(guard.path(), &guard.repo, &delegate, "origin");
    let mut lines = ScriptedLines::new(["n"]);
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

    let cleanup = lifecycle.delete_gone(&sync).unwrap();

    assert_eq!(
      cleanup,
      GoneCleanup::Declined {
        candidates: vec!["feature/x".to_string()]
      }
    );
    assert!(guard.has_branch("feature/x"));
  }

  #[test]
  fn delete_gone_asks_again_for_unmerged_candidates() {
    let guard = repo_with_unmerged_topic();
    track_remote_branch(&guard.repo, "topic", "origin").unwrap();
    forget_remote_branch(&guard.repo, "origin", "topic").unwrap();

    let delegate = RecordingDelegate::default();
    let sync = RemoteSync::new(guard.path(), &guard.repo, &delegate, "origin");
    let mut lines = ScriptedLines::new(["Y", "N"]);
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

    let cleanup = lifecycle.delete_gone(&sync).unwrap();

    assert_eq!(
      cleanup,
      GoneCleanup::Completed {
        deleted: vec![],
        aborted: vec!["topic".to_string()],
        failed: vec![],
      }
    );
    assert_eq!(lines.prompts(), ["Confirm delete?  Y/[N] ", NOT_MERGED_TOPIC]);
    assert!(guard.has_branch("topic"));
  }

  #[test]
  fn delete_gone_continues_when_fetch_fails() {
    let guard = GitRepoTestGuard::with_initial_commit();
    create_branch(&guard.repo, "feature/x", None).unwrap();
    track_remote_branch(&guard.repo, "feature/x", "origin").unwrap();
    forget_remote_branch(&guard.repo, "origin", "feature/x").unwrap();

    let delegate = RecordingDelegate::failing();
    let sync = RemoteSync::new(guard.path(), &guard.repo, &delegate, "origin");
    let mut lines = ScriptedLines::new(["Y"]);
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

    let cleanup = lifecycle.delete_gone(&sync).unwrap();

    assert!(matches!(cleanup, GoneCleanup::Completed { ref deleted, .. } if deleted == &["feature/x"]));
    assert!(!guard.has_branch("feature/x"));
  }

  #[test]
  fn create_checks_out_new_branch_without_upstream() {
    let guard = GitRepoTestGuard::with_initial_commit();
    let head = guard.repo.head().unwrap().target().unwrap();
    let mut lines = ScriptedLines::default();
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

    lifecycle.create("feature/new").unwrap();

    assert_eq!(guard.head_branch().as_deref(), Some("feature/new"));
    let branch = guard.repo.find_branch("feature/new", BranchType::Local).unwrap();
    assert_eq!(branch.get().target(), Some(head));
    assert!(branch.upstream().is_err());
  }

  #[test]
  fn create_rejects_invalid_and_existing_names() {
    let guard = GitRepoTestGuard::with_initial_commit();
    let mut lines = ScriptedLines::default();
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

    assert!(lifecycle.create("bad..name").is_err());
    assert!(lifecycle.create("main").is_err());
    assert_eq!(guard.head_branch().as_deref(), Some("main"));
  }

  #[test]
  fn create_in_unborn_repository_moves_head() {
    let guard = GitRepoTestGuard::new();
    let mut lines = ScriptedLines::default();
    let mut lifecycle = BranchLifecycle::new(&guard.repo, &mut lines);

    lifecycle.create("first").unwrap();

    assert_eq!(guard.head_branch().as_deref(), Some("first"));
  }

  #[test]
  fn ticket_branch_name_joins_segments() {
    assert_eq!(ticket_branch_name("jdoe", "ABC-12", "login"), "jdoe/ABC-12/login");
  }
}
