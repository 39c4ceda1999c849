//! # Commit
//!
//! Stage-everything-and-commit, with the ticket id of `<user>/<ticket>/<topic>`
//! branches prepended to the message.

use std::path::Path;

use anyhow::{Context, Result};
use git2::{ErrorCode, IndexAddOption, Oid, Repository};
use tracing::debug;

use crate::catalog::current_branch_name;
use crate::process::{DelegatedCommand, Delegate};

/// Ticket segment of a `<user>/<ticket>/<topic>` branch name.
pub fn ticket_prefix(branch: &str) -> Option<&str> {
  let segments: Vec<&str> = branch.split('/').collect();
  match segments.as_slice() {
    [_, ticket, _] => Some(ticket),
    _ => None,
  }
}

/// The message actually recorded for a commit made on `branch`.
pub fn commit_message(branch: Option<&str>, message: &str) -> String {
  match branch.and_then(ticket_prefix) {
    Some(ticket) => format!("{ticket} {message}"),
    None => message.to_string(),
  }
}

/// Run the configured formatter in the repository root. An empty argv is a
/// no-op.
pub fn run_formatter(delegate: &dyn Delegate, root: &Path, argv: &[String]) -> Result<()> {
  let Some(command) = DelegatedCommand::from_argv(argv) else {
    return Ok(());
  };
  debug!("Running formatter `{}` before commit", command);
  delegate
    .run(root, &command)
    .context("Formatter failed; nothing was committed")
}

/// Stage every change in the working tree (new, modified and deleted files,
/// ignores honoured) and commit it on HEAD. With `amend` the HEAD commit is
/// replaced instead. Returns the new commit id.
pub fn commit_all(repo: &Repository, message: &str, amend: bool) -> Result<Oid> {
  let mut index = repo.index().context("Failed to open the index")?;
  index
    .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
    .context("Failed to stage changes")?;
  index
    .update_all(["*"].iter(), None)
    .context("Failed to stage deletions")?;
  index.write().context("Failed to write the index")?;

  let tree_id = index.write_tree().context("Failed to write tree")?;
  let tree = repo.find_tree(tree_id)?;
  let message = commit_message(current_branch_name(repo).as_deref(), message);

  let parent = match repo.head() {
    Ok(head) => Some(head.peel_to_commit().context("Failed to resolve HEAD commit")?),
    Err(e) if e.code() == ErrorCode::UnbornBranch => None,
    Err(e) => return Err(e).context("Failed to resolve HEAD"),
  };

  if amend {
    let head = parent.context("Nothing to amend: the current branch has no commits")?;
    let oid = head
      .amend(Some("HEAD"), None, None, None, Some(&message), Some(&tree))
      .context("Failed to amend HEAD")?;
    debug!("Amended HEAD to {}", oid);
    return Ok(oid);
  }

  let signature = repo.signature().context("Failed to determine commit author")?;
  let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
  let oid = repo
    .commit(Some("HEAD"), &signature, &signature, &message, &tree, &parents)
    .context("Failed to create commit")?;
  debug!("Created commit {}", oid);
  Ok(oid)
}
