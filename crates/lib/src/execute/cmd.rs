//! Process-backed executor.
//!
//! Runs programs directly (no shell) with the package working directory.
//! Blocks until the child exits.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use super::Executor;
use super::types::ExecuteError;

/// Executes commands as child processes of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
  fn execute(&mut self, argv: &[String], working_dir: &Path, capture: bool) -> Result<String, ExecuteError> {
    execute_cmd(argv, working_dir, capture)
  }
}

/// Run `argv[0]` with the remaining tokens as arguments.
///
/// With `capture` set, stdout is collected and returned trimmed while stderr
/// still goes to the terminal. Otherwise both streams are inherited and the
/// returned string is empty.
///
/// # Errors
///
/// [`ExecuteError::Spawn`] if the program cannot be launched and
/// [`ExecuteError::CmdFailed`] if it exits unsuccessfully.
pub fn execute_cmd(argv: &[String], working_dir: &Path, capture: bool) -> Result<String, ExecuteError> {
  let (program, args) = argv.split_first().ok_or(ExecuteError::EmptyCommand)?;
  let cmd = argv.join(" ");

  info!(cmd = %cmd, "executing command");
  debug!(working_dir = %working_dir.display(), capture, "spawning process");

  let mut command = Command::new(program);
  command.args(args).current_dir(working_dir);

  let spawn_err = |source| ExecuteError::Spawn {
    cmd: cmd.clone(),
    source,
  };

  if !capture {
    let status = command.status().map_err(spawn_err)?;
    if !status.success() {
      return Err(ExecuteError::CmdFailed {
        cmd,
        code: status.code(),
      });
    }
    return Ok(String::new());
  }

  let output = command
    .stdout(Stdio::piped())
    .stderr(Stdio::inherit())
    .output()
    .map_err(spawn_err)?;

  if !output.status.success() {
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.is_empty() {
      debug!(stdout = %stdout, "command stdout");
    }
    return Err(ExecuteError::CmdFailed {
      cmd,
      code: output.status.code(),
    });
  }

  let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
  if !stdout.is_empty() {
    debug!(stdout = %stdout, "command output");
  }

  Ok(stdout)
}
