//! # Line Input
//!
//! Blocking, one-line-at-a-time input shared by the command loop and the
//! confirmation prompts. Keeping both behind one trait means a scripted
//! source can drive an entire session in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::consts::CONFIRM_TOKEN;

/// A source of input lines.
pub trait LineSource {
  /// Show `prompt` (which may be empty) and read one line without its line
  /// terminator. `Ok(None)` means the input is exhausted.
  fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Reads lines from the process's standard input, printing prompts to
/// standard output.
#[derive(Debug, Default)]
pub struct StdinLines;

impl LineSource for StdinLines {
  #[allow(clippy::print_stdout)]
  fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
    if !prompt.is_empty() {
      print!("{prompt}");
      io::stdout().flush()?;
    }

    next_line(&mut io::stdin().lock())
  }
}

/// Read one line from `reader`. Bytes that are not UTF-8 are replaced rather
/// than rejected, so a stray byte reads as an unknown command or a declined
/// confirmation instead of failing the session.
fn next_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
  let mut buf = Vec::new();
  if reader.read_until(b'\n', &mut buf)? == 0 {
    return Ok(None);
  }
  Ok(Some(strip_line_ending(String::from_utf8_lossy(&buf).into_owned())))
}

/// Canned answers, for tests and one-shot invocations. Every prompt shown is
/// recorded.
#[derive(Debug, Default)]
pub struct ScriptedLines {
  answers: VecDeque<String>,
  prompts: Vec<String>,
}

impl ScriptedLines {
  pub fn new<I, S>(answers: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      answers: answers.into_iter().map(Into::into).collect(),
      prompts: Vec::new(),
    }
  }

  /// Prompts shown so far, in order.
  pub fn prompts(&self) -> &[String] {
    &self.prompts
  }

  /// Answers not consumed yet.
  pub fn remaining(&self) -> usize {
    self.answers.len()
  }
}

impl LineSource for ScriptedLines {
  fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
    self.prompts.push(prompt.to_string());
    Ok(self.answers.pop_front())
  }
}

/// Ask a yes/no question. Only the exact answer `Y` confirms; anything else,
/// including an empty line, a lowercase `y` or end of input, declines.
pub fn confirm(lines: &mut dyn LineSource, prompt: &str) -> io::Result<bool> {
  let answer = lines.read_line(prompt)?;
  Ok(answer.as_deref() == Some(CONFIRM_TOKEN))
}

fn strip_line_ending(mut line: String) -> String {
  if line.ends_with('\n') {
    line.pop();
    if line.ends_with('\r') {
      line.pop();
    }
  }
  line
}
