//! `match` and `fileMan`, evaluated in-process.
//!
//! Both receive their tokens after sigil substitution, builtin name first.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::info;

use super::ast::Op;
use super::compile::strip_quotes;
use super::error::ScriptError;

/// A parsed `match <left> <op> <right...>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
  pub left: String,
  pub op: Op,
  pub right: String,
}

impl Comparison {
  /// Parse the tokens of a `match` invocation. The right operand is every
  /// remaining token joined by single spaces; each operand loses one pair of
  /// surrounding quotes.
  pub fn parse(tokens: &[String]) -> Result<Self, ScriptError> {
    let missing = |argument| ScriptError::MissingArgument {
      builtin: "match",
      argument,
    };

    let left = tokens.get(1).ok_or_else(|| missing("left operand"))?;
    let op_token = tokens.get(2).ok_or_else(|| missing("operator"))?;
    let op = Op::parse(op_token).ok_or_else(|| ScriptError::InvalidOperator(op_token.clone()))?;
    if tokens.len() < 4 {
      return Err(missing("right operand"));
    }
    let right = tokens[3..].join(" ");

    Ok(Self {
      left: strip_quotes(left).to_string(),
      op,
      right: strip_quotes(&right).to_string(),
    })
  }

  pub fn holds(&self) -> bool {
    self.op.eval(&self.left, &self.right)
  }

  /// `Ok(())` when the comparison holds, otherwise the assertion failure.
  pub fn assert(self) -> Result<(), ScriptError> {
    if self.holds() {
      return Ok(());
    }
    Err(ScriptError::AssertionFailed {
      left: self.left,
      op: self.op.to_string(),
      right: self.right,
    })
  }
}

/// How `fileMan` opens its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
  Write,
  Append,
}

impl FromStr for FileMode {
  type Err = ScriptError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "write" => Ok(FileMode::Write),
      "append" => Ok(FileMode::Append),
      other => Err(ScriptError::InvalidFileMode(other.to_string())),
    }
  }
}

/// Run `fileMan <write|append> <path> <content...>`.
///
/// Relative paths are taken from `working_dir`. Returns the path written.
pub fn file_man(tokens: &[String], working_dir: &Path) -> Result<PathBuf, ScriptError> {
  let missing = |argument| ScriptError::MissingArgument {
    builtin: "fileMan",
    argument,
  };

  let mode: FileMode = tokens.get(1).ok_or_else(|| missing("mode"))?.parse()?;
  let path = working_dir.join(tokens.get(2).ok_or_else(|| missing("path"))?);

  let joined = tokens.get(3..).map(|rest| rest.join(" ")).unwrap_or_default();
  let content = strip_quotes(&joined).replace("\\n", "\n");

  let mut options = OpenOptions::new();
  options.create(true);
  match mode {
    FileMode::Write => options.write(true).truncate(true),
    FileMode::Append => options.append(true),
  };

  let file_err = |source| ScriptError::File {
    path: path.clone(),
    source,
  };
  let mut file = options.open(&path).map_err(file_err)?;
  file.write_all(content.as_bytes()).map_err(file_err)?;

  info!(path = %path.display(), mode = ?mode, bytes = content.len(), "wrote file");
  Ok(path)
}
