//! The command table.

/// What a command does once its arguments have been counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
  List,
  Checkout,
  Delete,
  Fetch,
  Pull,
  Push,
  PushForce,
  DeleteGone,
  Create,
  Ticket,
  Commit,
  Amend,
  Help,
  Quit,
}

/// Number of words a command accepts after its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
  /// Exactly one word per named parameter.
  Exact,
  /// At least one word per named parameter; the rest are joined into the
  /// last one.
  Rest,
}

/// One row of the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
  pub token: &'static str,
  pub title: &'static str,
  pub params: &'static [&'static str],
  pub arity: Arity,
  pub kind: CommandKind,
}

impl CommandSpec {
  const fn exact(token: &'static str, title: &'static str, params: &'static [&'static str], kind: CommandKind) -> Self {
    Self {
      token,
      title,
      params,
      arity: Arity::Exact,
      kind,
    }
  }

  const fn rest(token: &'static str, title: &'static str, params: &'static [&'static str], kind: CommandKind) -> Self {
    Self {
      token,
      title,
      params,
      arity: Arity::Rest,
      kind,
    }
  }

  /// Whether `count` words after the token satisfy this command.
  pub fn accepts(&self, count: usize) -> bool {
    match self.arity {
      Arity::Exact => count == self.params.len(),
      Arity::Rest => count >= self.params.len(),
    }
  }

  /// Parameter names as shown in usage lines.
  pub fn usage_params(&self) -> String {
    self.params.join(" ")
  }

  /// Whether the branch listing is shown again after this command runs.
  pub fn redisplays(&self) -> bool {
    !matches!(self.kind, CommandKind::List | CommandKind::Help | CommandKind::Quit)
  }
}

pub const COMMANDS: &[CommandSpec] = &[
  CommandSpec::exact("ls", "show branches", &[], CommandKind::List),
  CommandSpec::exact("c", "select branch", &["Branch"], CommandKind::Checkout),
  CommandSpec::exact("d", "delete branch", &["Branch"], CommandKind::Delete),
  CommandSpec::exact("f", "fetch", &[], CommandKind::Fetch),
  CommandSpec::exact("pd", "pull", &[], CommandKind::Pull),
  CommandSpec::exact("pu", "push", &[], CommandKind::Push),
  CommandSpec::exact("pushf", "force push", &[], CommandKind::PushForce),
  CommandSpec::exact("g", "delete gone branches", &[], CommandKind::DeleteGone),
  CommandSpec::exact("b", "create branch", &["Name"], CommandKind::Create),
  CommandSpec::exact("ticket", "create ticket branch", &["Ticket", "Topic"], CommandKind::Ticket),
  CommandSpec::rest("commit", "commit all changes", &["Message"], CommandKind::Commit),
  CommandSpec::rest("amend", "amend last commit", &["Message"], CommandKind::Amend),
  CommandSpec::exact("?", "show usage", &[], CommandKind::Help),
  CommandSpec::exact("q", "quit", &[], CommandKind::Quit),
];

/// Find a command by its token.
pub fn find(token: &str) -> Option<&'static CommandSpec> {
  COMMANDS.iter().find(|spec| spec.token == token)
}

/// Usage text for every command, one line each.
pub fn usage_lines() -> Vec<String> {
  COMMANDS
    .iter()
    .map(|spec| {
      if spec.params.is_empty() {
        format!("  {} : {}", spec.token, spec.title)
      } else {
        format!("  {} {} : {}", spec.token, spec.usage_params(), spec.title)
      }
    })
    .collect()
}
