//! # Command Delegation
//!
//! Runs the `git` executable (or a configured formatter) as a child process
//! in the repository root with inherited output and a hard wait ceiling.

use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use tracing::{debug, warn};
use wait_timeout::ChildExt;

use crate::consts::GIT_EXECUTABLE;
use crate::error::DelegationError;

/// A fixed argv handed to a child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegatedCommand {
  pub program: String,
  pub args: Vec<String>,
}

impl DelegatedCommand {
  pub fn new<S: Into<String>>(program: S, args: Vec<String>) -> Self {
    Self {
      program: program.into(),
      args,
    }
  }

  /// A `git` invocation with the given arguments.
  pub fn git(args: &[&str]) -> Self {
    Self::new(GIT_EXECUTABLE, args.iter().map(|a| a.to_string()).collect())
  }

  /// Build a command from an argv list; `None` for an empty list.
  pub fn from_argv(argv: &[String]) -> Option<Self> {
    let (program, args) = argv.split_first()?;
    Some(Self::new(program.clone(), args.to_vec()))
  }
}

impl fmt::Display for DelegatedCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program)?;
    for arg in &self.args {
      write!(f, " {arg}")?;
    }
    Ok(())
  }
}

/// Something that can run a delegated command to completion.
pub trait Delegate {
  fn run(&self, dir: &Path, command: &DelegatedCommand) -> Result<(), DelegationError>;
}

/// Spawns real child processes.
#[derive(Debug, Clone)]
pub struct ProcessDelegate {
  timeout: Duration,
}

impl ProcessDelegate {
  pub fn new(timeout: Duration) -> Self {
    Self { timeout }
  }
}

impl Delegate for ProcessDelegate {
  fn run(&self, dir: &Path, command: &DelegatedCommand) -> Result<(), DelegationError> {
    let rendered = command.to_string();
    debug!("Running `{}` in {}", rendered, dir.display());

    let mut child = Command::new(&command.program)
      .args(&command.args)
      .current_dir(dir)
      .stdin(Stdio::null())
      .stdout(Stdio::inherit())
      .stderr(Stdio::inherit())
      .spawn()
      .map_err(|source| DelegationError::Spawn {
        command: rendered.clone(),
        source,
      })?;

    match child.wait_timeout(self.timeout) {
      Ok(Some(status)) if status.success() => Ok(()),
      Ok(Some(status)) => Err(DelegationError::Failed {
        command: rendered,
        status,
      }),
      Ok(None) => {
        warn!("`{}` exceeded {:?}, killing it", rendered, self.timeout);
        let _ = child.kill();
        let _ = child.wait();
        Err(DelegationError::TimedOut {
          command: rendered,
          timeout: self.timeout,
        })
      }
      Err(source) => Err(DelegationError::Wait {
        command: rendered,
        source,
      }),
    }
  }
}
