//! # Error Types
//!
//! Typed errors for the failures callers need to tell apart. Everything else
//! travels as [`anyhow::Error`] with context attached at the operation
//! boundary.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Errors produced while discovering the repository for a session.
#[derive(Debug, Error)]
pub enum LocateError {
  /// Neither the start directory nor any of its ancestors holds a `.git`
  /// entry.
  #[error("no git repository found in {} or any parent directory", .start.display())]
  NotFound { start: PathBuf },
  /// The working directory could not be determined.
  #[error("failed to determine the current directory")]
  CurrentDir(#[source] io::Error),
  /// A `.git` entry was found but libgit2 refused to open it.
  #[error("failed to open git repository at {}", .path.display())]
  Open {
    path: PathBuf,
    #[source]
    source: git2::Error,
  },
}

/// Validation failures for index-addressed branch commands. None of these
/// touch the repository.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
  /// The argument is not a non-negative integer.
  #[error("bad index {0}")]
  NotAnIndex(String),
  /// The index does not address a branch in the freshly computed listing.
  #[error("bad index {index} (there are {len} branches)")]
  OutOfRange { index: usize, len: usize },
  /// The selected branch is checked out and cannot be deleted.
  #[error("cannot delete selected branch {0}")]
  CurrentBranch(String),
}

/// Failures of a delegated external command.
#[derive(Debug, Error)]
pub enum DelegationError {
  #[error("failed to launch `{command}`")]
  Spawn {
    command: String,
    #[source]
    source: io::Error,
  },
  #[error("failed while waiting for `{command}`")]
  Wait {
    command: String,
    #[source]
    source: io::Error,
  },
  #[error("`{command}` exited with {status}")]
  Failed { command: String, status: ExitStatus },
  #[error("`{command}` did not finish within {}s", .timeout.as_secs())]
  TimedOut { command: String, timeout: Duration },
}
