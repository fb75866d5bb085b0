//! Typed statements produced by the compiler.

use std::fmt;

use crate::platform::Arch;

/// The right-hand side of a `$name=value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignValue {
  Literal(String),
  /// A single `$name` token, looked up when the line runs.
  Reference(String),
}

/// An in-process builtin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
  Match,
  FileMan,
}

impl Builtin {
  pub fn as_str(self) -> &'static str {
    match self {
      Builtin::Match => "match",
      Builtin::FileMan => "fileMan",
    }
  }

  pub fn from_token(token: &str) -> Option<Self> {
    match token {
      "match" => Some(Builtin::Match),
      "fileMan" => Some(Builtin::FileMan),
      _ => None,
    }
  }
}

impl fmt::Display for Builtin {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One compiled script line (or guarded block).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
  /// `$name=value`
  Assign { name: String, value: AssignValue },
  /// `@name="cmd args..."`
  Capture { name: String, tokens: Vec<String> },
  /// `amd64:` / `arm64:` followed by a double-tab indented body.
  ArchGuard { tag: Arch, body: Vec<Statement> },
  /// `match ...` or `fileMan ...`; `tokens[0]` is the builtin name.
  Builtin { kind: Builtin, tokens: Vec<String> },
  /// Any other line.
  Command { tokens: Vec<String> },
}

/// Comparison operators accepted by `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
  Eq,
  Lt,
  Gt,
  Ne,
}

impl Op {
  pub fn parse(token: &str) -> Option<Self> {
    match token {
      "==" => Some(Op::Eq),
      "<" => Some(Op::Lt),
      ">" => Some(Op::Gt),
      "!=" => Some(Op::Ne),
      _ => None,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Op::Eq => "==",
      Op::Lt => "<",
      Op::Gt => ">",
      Op::Ne => "!=",
    }
  }

  /// Byte-wise string comparison.
  pub fn eval(self, left: &str, right: &str) -> bool {
    match self {
      Op::Eq => left == right,
      Op::Lt => left < right,
      Op::Gt => left > right,
      Op::Ne => left != right,
    }
  }
}

impl fmt::Display for Op {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
