//! Error type for external command execution.

use thiserror::Error;

/// Errors surfaced by an [`Executor`](super::Executor).
#[derive(Debug, Error)]
pub enum ExecuteError {
  /// The argument vector was empty.
  #[error("no command given")]
  EmptyCommand,

  /// The program could not be launched.
  #[error("failed to launch '{cmd}': {source}")]
  Spawn {
    cmd: String,
    #[source]
    source: std::io::Error,
  },

  /// The program ran and exited unsuccessfully.
  #[error("command failed with exit code {}: {cmd}", display_code(.code))]
  CmdFailed { cmd: String, code: Option<i32> },
}

fn display_code(code: &Option<i32>) -> String {
  match code {
    Some(code) => code.to_string(),
    None => "none (terminated by signal)".to_string(),
  }
}
