//! # Output Formatting
//!
//! Provides formatted output functions with colors, emojis, and consistent
//! styling for user-facing messages, plus the branch listing shown after
//! every command.

use owo_colors::{OwoColorize, Stream};
use {clap, emojis};

use crate::catalog::{BranchEntry, TrackingStatus, short_upstream_name};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply this mode as the global owo-colors override.
  pub fn apply(self) {
    match self {
      ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
      ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
      // Leave terminal detection to owo-colors
      ColorMode::Auto => {}
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
#[allow(clippy::print_stdout)]
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("white_check_mark", "✓");
  println!("{} {}", check.if_supports_color(Stream::Stdout, |t| t.green()), message);
}

/// Print an error message
#[allow(clippy::print_stderr)]
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("x", "✗");
  eprintln!(
    "{} {}",
    cross.if_supports_color(Stream::Stderr, |t| t.red()),
    message.if_supports_color(Stream::Stderr, |t| t.red())
  );
}

/// Print a warning message
#[allow(clippy::print_stdout)]
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!(
    "{} {}",
    warning.if_supports_color(Stream::Stdout, |t| t.yellow()),
    message
  );
}

/// Print an info message
#[allow(clippy::print_stdout)]
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information_source", "ℹ");
  println!("{} {}", info.if_supports_color(Stream::Stdout, |t| t.blue()), message);
}

/// Print a section header
#[allow(clippy::print_stdout)]
pub fn print_header(header: &str) {
  println!("\n{}", header.if_supports_color(Stream::Stdout, |t| t.blue()));
}

/// One rendered listing row and the style it is printed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineStyle {
  Plain,
  Current,
  Gone,
  Tracking,
}

const DETAIL_INDENT: &str = "         ";

fn listing_lines(entries: &[BranchEntry]) -> Vec<(String, LineStyle)> {
  let mut lines = Vec::with_capacity(entries.len() * 2);
  for (index, entry) in entries.iter().enumerate() {
    let (marker, style) = if entry.branch.is_current {
      (" * ", LineStyle::Current)
    } else {
      ("   ", LineStyle::Plain)
    };
    lines.push((format!("{index})  {marker}  {}", entry.branch.short_name), style));

    match &entry.status {
      TrackingStatus::NoUpstream => {}
      TrackingStatus::Gone { upstream } => lines.push((
        format!("{DETAIL_INDENT}-> (GONE) {}", short_upstream_name(upstream)),
        LineStyle::Gone,
      )),
      TrackingStatus::Tracking {
        upstream,
        ahead,
        behind,
        ..
      } => lines.push((
        format!(
          "{DETAIL_INDENT}-> {}, ahead {ahead}, behind {behind}",
          short_upstream_name(upstream)
        ),
        LineStyle::Tracking,
      )),
    }
  }
  lines
}

/// Render the numbered branch listing as plain text, one entry per line.
/// The numbers are the indices accepted by `c` and `d`.
pub fn render_branch_listing(entries: &[BranchEntry]) -> Vec<String> {
  listing_lines(entries).into_iter().map(|(line, _)| line).collect()
}

/// Print the branch listing preceded by a blank line.
#[allow(clippy::print_stdout)]
pub fn print_branches(entries: &[BranchEntry]) {
  println!();
  for (line, style) in listing_lines(entries) {
    match style {
      LineStyle::Plain => println!("{line}"),
      LineStyle::Current => println!("{}", line.if_supports_color(Stream::Stdout, |t| t.green())),
      LineStyle::Gone => println!("{}", line.if_supports_color(Stream::Stdout, |t| t.red())),
      LineStyle::Tracking => println!("{}", line.if_supports_color(Stream::Stdout, |t| t.dimmed())),
    }
  }
}
