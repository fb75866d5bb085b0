use std::path::PathBuf;

use thiserror::Error;

use crate::execute::ExecuteError;

/// Fatal conditions raised while running a script body.
#[derive(Debug, Error)]
pub enum ScriptError {
  #[error(transparent)]
  Execute(#[from] ExecuteError),

  #[error("assertion failed: {left:?} {op} {right:?}")]
  AssertionFailed { left: String, op: String, right: String },

  #[error("invalid match operator '{0}' (expected one of ==, <, >, !=)")]
  InvalidOperator(String),

  #[error("invalid fileMan mode '{0}' (expected 'write' or 'append')")]
  InvalidFileMode(String),

  #[error("{builtin}: missing {argument}")]
  MissingArgument {
    builtin: &'static str,
    argument: &'static str,
  },

  #[error("failed to write {}: {source}", path.display())]
  File {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}
