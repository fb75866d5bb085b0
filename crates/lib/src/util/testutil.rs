//! Test utilities for fermenter-lib.
//!
//! Provides a recording [`Executor`] so interpreter and runner tests can
//! observe the commands a script would launch without spawning processes.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::execute::{ExecuteError, Executor};

/// A complete descriptor for a package named `hello`.
pub const MINIMAL_DESCRIPTOR: &str = "pkgname=hello
version=1.0.0
desc=\"Says hello\"
arch=amd64,arm64
source=https://example.com/hello-1.0.0.tar.gz

build() {
\techo building $pkgname $version
}

install() {
\techo installing
}

test() {
\tmatch $version == 1.0.0
}
";

/// Turn string literals into an owned argument vector.
pub fn argv(tokens: &[&str]) -> Vec<String> {
  tokens.iter().map(|t| t.to_string()).collect()
}

/// One call made to a [`RecordingExecutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
  pub argv: Vec<String>,
  pub working_dir: PathBuf,
  pub capture: bool,
}

/// Records every call instead of running it.
///
/// Captured calls return the output registered for the full command line
/// (empty when none was). Programs registered with [`failing`] exit with
/// status 1.
///
/// [`failing`]: RecordingExecutor::failing
#[derive(Debug, Default)]
pub struct RecordingExecutor {
  pub calls: Vec<RecordedCall>,
  outputs: HashMap<String, String>,
  failing: HashSet<String>,
}

impl RecordingExecutor {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_output(mut self, cmd: &str, output: &str) -> Self {
    self.outputs.insert(cmd.to_string(), output.to_string());
    self
  }

  pub fn failing(mut self, program: &str) -> Self {
    self.failing.insert(program.to_string());
    self
  }

  /// Every recorded call as a space-joined command line.
  pub fn commands(&self) -> Vec<String> {
    self.calls.iter().map(|c| c.argv.join(" ")).collect()
  }
}

impl Executor for RecordingExecutor {
  fn execute(&mut self, argv: &[String], working_dir: &Path, capture: bool) -> Result<String, ExecuteError> {
    let program = argv.first().ok_or(ExecuteError::EmptyCommand)?;
    let cmd = argv.join(" ");

    self.calls.push(RecordedCall {
      argv: argv.to_vec(),
      working_dir: working_dir.to_path_buf(),
      capture,
    });

    if self.failing.contains(program) {
      return Err(ExecuteError::CmdFailed { cmd, code: Some(1) });
    }

    if capture {
      Ok(self.outputs.get(&cmd).cloned().unwrap_or_default())
    } else {
      Ok(String::new())
    }
  }
}
