//! # Branch Catalog
//!
//! Enumerates local branches together with their upstream tracking status
//! and orders them for display. Every call reads the repository afresh;
//! nothing here is cached, so a listing taken after a mutation always
//! reflects the mutation.

use std::cmp::Ordering;

use anyhow::{Context, Result};
use git2::{BranchType, ErrorCode, Oid, Repository};
use tracing::{debug, trace};

use crate::consts::{LOCAL_BRANCH_PREFIX, PRIORITY_BRANCHES, REMOTE_BRANCH_PREFIX};

/// A local branch as seen by one catalog query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRef {
  /// Fully qualified ref name, e.g. `refs/heads/feature/x`.
  pub full_name: String,
  /// Display name, e.g. `feature/x`.
  pub short_name: String,
  /// Whether HEAD pointed at this branch when the query ran.
  pub is_current: bool,
}

/// Relationship between a local branch and its configured upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingStatus {
  /// No upstream is configured.
  NoUpstream,
  /// An upstream is configured but no longer resolves locally.
  Gone { upstream: String },
  /// The upstream resolves; counts are commits only on the local side
  /// (`ahead`) and only on the upstream side (`behind`).
  Tracking {
    upstream: String,
    remote_name: String,
    ahead: usize,
    behind: usize,
  },
}

impl TrackingStatus {
  pub fn is_gone(&self) -> bool {
    matches!(self, TrackingStatus::Gone { .. })
  }
}

/// One row of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchEntry {
  pub branch: BranchRef,
  pub status: TrackingStatus,
}

/// List every local branch with its tracking status, in display order.
pub fn list_branches(repo: &Repository) -> Result<Vec<BranchEntry>> {
  let head = current_branch_ref(repo);
  trace!("HEAD resolves to {:?}", head);

  let mut entries = Vec::new();
  for branch_result in repo
    .branches(Some(BranchType::Local))
    .context("Failed to enumerate local branches")?
  {
    let (branch, _) = branch_result.context("Failed to read local branch")?;
    let Some(full_name) = branch.get().name() else {
      debug!("Skipping branch with a non UTF-8 name");
      continue;
    };

    let branch = BranchRef {
      full_name: full_name.to_string(),
      short_name: short_branch_name(full_name).to_string(),
      is_current: head.as_deref() == Some(full_name),
    };
    let status = tracking_status(repo, &branch)?;
    entries.push(BranchEntry { branch, status });
  }

  sort_display_order(&mut entries);
  debug!("Catalog lists {} local branches", entries.len());
  Ok(entries)
}

/// Full ref name HEAD points at, or `None` when HEAD is detached. An unborn
/// HEAD still names its branch.
pub fn current_branch_ref(repo: &Repository) -> Option<String> {
  let head = repo.find_reference("HEAD").ok()?;
  head.symbolic_target().map(str::to_string)
}

/// Short name of the branch HEAD points at.
pub fn current_branch_name(repo: &Repository) -> Option<String> {
  current_branch_ref(repo).map(|full| short_branch_name(&full).to_string())
}

/// Compute the tracking status of a single branch.
pub fn tracking_status(repo: &Repository, branch: &BranchRef) -> Result<TrackingStatus> {
  let upstream = match repo.branch_upstream_name(&branch.full_name) {
    Ok(buf) => buf.as_str().map(str::to_string),
    Err(e) if e.code() == ErrorCode::NotFound => None,
    Err(e) => {
      return Err(e).with_context(|| format!("Failed to read upstream of '{}'", branch.short_name));
    }
  };

  let Some(upstream) = upstream else {
    // libgit2 also reports NotFound when the configured remote itself was
    // removed; the merge entry survives in that case.
    return Ok(match configured_upstream(repo, &branch.short_name) {
      Some(merge) => TrackingStatus::Gone { upstream: merge },
      None => TrackingStatus::NoUpstream,
    });
  };

  let upstream_oid = match repo.refname_to_id(&upstream) {
    Ok(oid) => oid,
    Err(e) if e.code() == ErrorCode::NotFound => return Ok(TrackingStatus::Gone { upstream }),
    Err(e) => return Err(e).with_context(|| format!("Failed to resolve '{upstream}'")),
  };

  let local_oid = repo
    .refname_to_id(&branch.full_name)
    .with_context(|| format!("Failed to resolve '{}'", branch.full_name))?;
  let (ahead, behind) = ahead_behind(repo, local_oid, upstream_oid)?;

  let remote_name = repo
    .branch_upstream_remote(&branch.full_name)
    .ok()
    .and_then(|buf| buf.as_str().map(str::to_string))
    .unwrap_or_default();

  Ok(TrackingStatus::Tracking {
    upstream,
    remote_name,
    ahead,
    behind,
  })
}

/// Number of commits reachable from `local` but not `upstream`, and the
/// reverse.
pub fn ahead_behind(repo: &Repository, local: Oid, upstream: Oid) -> Result<(usize, usize)> {
  if local == upstream {
    return Ok((0, 0));
  }
  repo
    .graph_ahead_behind(local, upstream)
    .context("Failed to compare branch with its upstream")
}

/// Remote-tracking ref a branch's config still points at, built from
/// `branch.<name>.remote` and `branch.<name>.merge`. Without a usable remote
/// entry the raw merge ref is returned.
fn configured_upstream(repo: &Repository, short_name: &str) -> Option<String> {
  let config = repo.config().ok()?;
  let merge = config.get_string(&format!("branch.{short_name}.merge")).ok()?;
  let remote = config
    .get_string(&format!("branch.{short_name}.remote"))
    .ok()
    .filter(|remote| !remote.is_empty() && remote != ".");
  Some(match (remote, merge.strip_prefix(LOCAL_BRANCH_PREFIX)) {
    (Some(remote), Some(branch)) => format!("{REMOTE_BRANCH_PREFIX}{remote}/{branch}"),
    _ => merge,
  })
}

/// Strip `refs/heads/` from a local branch ref.
pub fn short_branch_name(full_name: &str) -> &str {
  full_name.strip_prefix(LOCAL_BRANCH_PREFIX).unwrap_or(full_name)
}

/// Strip `refs/remotes/` from a remote-tracking ref, e.g. `origin/main`.
pub fn short_upstream_name(upstream: &str) -> &str {
  upstream.strip_prefix(REMOTE_BRANCH_PREFIX).unwrap_or(upstream)
}

/// Compare two full branch names in display order: `develop`, `main` and
/// `master` first in that order, everything else lexicographically after.
pub fn display_order(a: &str, b: &str) -> Ordering {
  display_key(a).cmp(&display_key(b))
}

fn display_key(full_name: &str) -> (usize, &str) {
  let short = full_name.strip_prefix(LOCAL_BRANCH_PREFIX);
  let rank = PRIORITY_BRANCHES
    .iter()
    .position(|priority| short == Some(*priority))
    .unwrap_or(PRIORITY_BRANCHES.len());
  (rank, full_name)
}

/// Sort catalog entries in display order.
pub fn sort_display_order(entries: &mut [BranchEntry]) {
  entries.sort_by(|a, b| display_order(&a.branch.full_name, &b.branch.full_name));
}
