//! # Command Line Interface
//!
//! Defines the top-level arguments and starts a shell session against the
//! repository enclosing the working directory.

use std::process::ExitCode;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser};
use gonzo_core::{
  ColorMode, ConfigDirs, ProcessDelegate, Settings, StdinLines, locate_from_current_dir, print_error, print_warning,
};
use tracing::debug;

use crate::shell::Shell;

/// Exit code used when no repository encloses the working directory.
pub const EXIT_NO_REPOSITORY: u8 = 2;

/// Top-level CLI command for gonzo
#[derive(Parser)]
#[command(name = "gonzo")]
#[command(display_name = "Gonzo")]
#[command(about = "An interactive shell for everyday local branch work")]
#[command(
  long_about = "Gonzo lists local branches with their upstream status and lets you switch,\n\
        create and delete them, clean up branches whose upstream is gone, and hand\n\
        fetch, pull, push and commit to git.\n\n\
        Without a command an interactive session starts; type ? for the command list.\n\
        With a command (for example `gonzo d 3`) that single command runs and gonzo exits."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// A single shell command to run instead of starting a session
  #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
  pub command: Vec<String>,
}

pub fn handle_cli(cli: Cli) -> Result<ExitCode> {
  cli.colors.apply();

  let handle = match locate_from_current_dir() {
    Ok(handle) => handle,
    Err(e) => {
      print_error(&format!("{:#}", anyhow::Error::from(e)));
      return Ok(ExitCode::from(EXIT_NO_REPOSITORY));
    }
  };
  debug!("Session rooted at {}", handle.root().display());

  let settings = load_settings();
  let delegate = ProcessDelegate::new(settings.timeout());
  let mut lines = StdinLines;
  let mut shell = Shell::new(&handle, &settings, &delegate, &mut lines);

  if cli.command.is_empty() {
    shell.run()?;
  } else {
    let words: Vec<&str> = cli.command.iter().map(String::as_str).collect();
    shell.execute(&words);
  }

  Ok(ExitCode::SUCCESS)
}

/// Settings from the config file. Problems with the file are reported and
/// the defaults are used instead.
fn load_settings() -> Settings {
  match ConfigDirs::new().and_then(|dirs| dirs.load_settings()) {
    Ok(settings) => settings,
    Err(e) => {
      print_warning(&format!("{e:#}; using default settings"));
      Settings::default()
    }
  }
}
