//! External command execution.
//!
//! The interpreter talks to the outside world only through the [`Executor`]
//! trait, so its logic can be exercised without spawning processes.

pub mod cmd;
pub mod types;

use std::path::Path;

pub use cmd::{SystemExecutor, execute_cmd};
pub use types::ExecuteError;

/// Launches external programs on behalf of a script.
pub trait Executor {
  /// Run `argv` in `working_dir`, blocking until it exits.
  ///
  /// Returns the trimmed stdout when `capture` is set, otherwise an empty
  /// string with the output going to the terminal.
  fn execute(&mut self, argv: &[String], working_dir: &Path, capture: bool) -> Result<String, ExecuteError>;
}

impl<E: Executor + ?Sized> Executor for &mut E {
  fn execute(&mut self, argv: &[String], working_dir: &Path, capture: bool) -> Result<String, ExecuteError> {
    (**self).execute(argv, working_dir, capture)
  }
}
