//! # Interactive Shell
//!
//! Reads one command line at a time, checks the word count against the
//! command table and dispatches to the catalog, the branch lifecycle or the
//! remote delegations. After anything that may have changed the repository
//! the branch listing is printed again.

pub mod commands;

use anyhow::{Context, Result};
use gonzo_core::commit::{commit_all, run_formatter};
use gonzo_core::lifecycle::{parse_index, ticket_branch_name};
use gonzo_core::{
  BranchLifecycle, Delegate, GoneCleanup, LineSource, RemoteSync, RepositoryHandle, SelectionError, Settings,
  list_branches, print_branches, print_error, print_info, print_success,
};
use tracing::debug;

use self::commands::{CommandKind, CommandSpec};

/// Prompt shown before each command line.
pub const PROMPT: &str = "?> ";

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
  Continue,
  Quit,
}

/// One session against one repository.
pub struct Shell<'a> {
  handle: &'a RepositoryHandle,
  settings: &'a Settings,
  delegate: &'a dyn Delegate,
  lines: &'a mut dyn LineSource,
}

impl<'a> Shell<'a> {
  pub fn new(
    handle: &'a RepositoryHandle,
    settings: &'a Settings,
    delegate: &'a dyn Delegate,
    lines: &'a mut dyn LineSource,
  ) -> Self {
    Self {
      handle,
      settings,
      delegate,
      lines,
    }
  }

  /// Show the listing, then read and run commands until `q` or end of
  /// input.
  pub fn run(&mut self) -> Result<()> {
    self.show_branches();
    loop {
      let Some(line) = self.lines.read_line(PROMPT).context("Failed to read command")? else {
        debug!("Input exhausted, ending session");
        return Ok(());
      };

      let words: Vec<&str> = line.split_whitespace().collect();
      if words.is_empty() {
        continue;
      }
      if self.execute(&words) == Flow::Quit {
        return Ok(());
      }
    }
  }

  /// Run a single command given as words. Problems are reported to the
  /// user; they never end the session.
  pub fn execute(&mut self, words: &[&str]) -> Flow {
    let Some((token, args)) = words.split_first() else {
      return Flow::Continue;
    };
    let Some(spec) = commands::find(token) else {
      print_error(&format!("unknown command '{token}', type ? for usage"));
      return Flow::Continue;
    };
    if !spec.accepts(args.len()) {
      let usage = format!("Wrong # args:  {} {}", spec.title, spec.usage_params());
      print_error(usage.trim_end());
      return Flow::Continue;
    }
    if spec.kind == CommandKind::Quit {
      return Flow::Quit;
    }

    debug!("Running '{}' with {:?}", spec.token, args);
    if let Err(e) = self.dispatch(spec, args) {
      if let Some(selection) = e.downcast_ref::<SelectionError>() {
        // Nothing was touched; the previous listing is still accurate.
        print_error(&selection.to_string());
        return Flow::Continue;
      }
      print_error(&format!("{e:#}"));
    }

    if spec.redisplays() {
      self.show_branches();
    }
    Flow::Continue
  }

  fn dispatch(&mut self, spec: &CommandSpec, args: &[&str]) -> Result<()> {
    let handle = self.handle;
    let repo = handle.repo();
    let sync = RemoteSync::new(handle.root(), repo, self.delegate, self.settings.remote.as_str());

    match spec.kind {
      CommandKind::List => self.show_branches(),
      CommandKind::Checkout => {
        let index = parse_index(args[0])?;
        let name = BranchLifecycle::new(repo, &mut *self.lines).switch_to(index)?;
        print_success(&format!("Switched to branch '{name}'"));
      }
      CommandKind::Delete => {
        let index = parse_index(args[0])?;
        BranchLifecycle::new(repo, &mut *self.lines).delete(index)?;
      }
      CommandKind::Fetch => sync.fetch()?,
      CommandKind::Pull => sync.pull()?,
      CommandKind::Push => sync.push()?,
      CommandKind::PushForce => sync.push_force()?,
      CommandKind::DeleteGone => {
        let cleanup = BranchLifecycle::new(repo, &mut *self.lines).delete_gone(&sync)?;
        report_cleanup(&cleanup);
      }
      CommandKind::Create => self.create_branch(args[0])?,
      CommandKind::Ticket => {
        let user = self
          .settings
          .resolve_branch_user()
          .context("Cannot tell whose ticket branch this is; set branch_user in config.toml")?;
        self.create_branch(&ticket_branch_name(&user, args[0], args[1]))?;
      }
      CommandKind::Commit => self.commit(&args.join(" "), false)?,
      CommandKind::Amend => self.commit(&args.join(" "), true)?,
      CommandKind::Help => print_usage(),
      CommandKind::Quit => {}
    }
    Ok(())
  }

  fn create_branch(&mut self, name: &str) -> Result<()> {
    BranchLifecycle::new(self.handle.repo(), &mut *self.lines).create(name)?;
    print_success(&format!("Switched to a new branch '{name}'"));
    Ok(())
  }

  fn commit(&self, message: &str, amend: bool) -> Result<()> {
    if let Some(argv) = &self.settings.format_command {
      run_formatter(self.delegate, self.handle.root(), argv)?;
    }
    let oid = commit_all(self.handle.repo(), message, amend)?;
    let short: String = oid.to_string().chars().take(7).collect();
    print_success(&format!("Committed {short}"));
    Ok(())
  }

  fn show_branches(&self) {
    match list_branches(self.handle.repo()) {
      Ok(entries) => print_branches(&entries),
      Err(e) => print_error(&format!("{e:#}")),
    }
  }
}

fn report_cleanup(cleanup: &GoneCleanup) {
  match cleanup {
    // Already announced while looking for candidates.
    GoneCleanup::NothingToDelete => {}
    GoneCleanup::Declined { .. } => print_info("Nothing deleted"),
    GoneCleanup::Completed {
      deleted,
      aborted,
      failed,
    } => {
      debug!(
        "Gone cleanup: {} deleted, {} kept, {} failed",
        deleted.len(),
        aborted.len(),
        failed.len()
      );
      if !aborted.is_empty() {
        print_info(&format!("Kept: {}", aborted.join(", ")));
      }
      if !failed.is_empty() {
        print_error(&format!("Could not delete: {}", failed.join(", ")));
      }
    }
  }
}

#[allow(clippy::print_stdout)]
fn print_usage() {
  println!("Usage: ");
  for line in commands::usage_lines() {
    println!("{line}");
  }
  println!();
}
