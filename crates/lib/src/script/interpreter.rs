//! Statement execution.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::ast::{AssignValue, Builtin, Statement};
use super::builtins::{Comparison, file_man};
use super::error::ScriptError;
use crate::descriptor::Action;
use crate::environment::Environment;
use crate::execute::Executor;
use crate::platform::Arch;

/// How a script body finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  /// Every statement ran.
  Completed,
  /// A `match` assertion in a test action held, ending the script.
  Asserted,
  /// `fileMan` wrote the file, ending the script.
  FileWritten { path: PathBuf },
}

/// Runs compiled statements against an environment.
///
/// `arch` is the architecture guards are compared with; `None` means the
/// host is unsupported and no guard body ever runs.
pub struct Interpreter<E> {
  executor: E,
  arch: Option<Arch>,
}

impl<E: Executor> Interpreter<E> {
  pub fn new(executor: E, arch: Option<Arch>) -> Self {
    Self { executor, arch }
  }

  /// Execute `statements` in order until they run out or one ends the
  /// script. Any error aborts immediately; nothing already done is undone.
  pub fn run(
    &mut self,
    statements: &[Statement],
    env: &mut Environment,
    action: Action,
    working_dir: &Path,
  ) -> Result<Outcome, ScriptError> {
    let outcome = self.run_block(statements, env, action, working_dir)?;
    Ok(outcome.unwrap_or(Outcome::Completed))
  }

  /// `Some` when a statement terminated the script.
  fn run_block(
    &mut self,
    statements: &[Statement],
    env: &mut Environment,
    action: Action,
    working_dir: &Path,
  ) -> Result<Option<Outcome>, ScriptError> {
    for statement in statements {
      if let Some(outcome) = self.step(statement, env, action, working_dir)? {
        return Ok(Some(outcome));
      }
    }
    Ok(None)
  }

  fn step(
    &mut self,
    statement: &Statement,
    env: &mut Environment,
    action: Action,
    working_dir: &Path,
  ) -> Result<Option<Outcome>, ScriptError> {
    match statement {
      Statement::Assign { name, value } => {
        let value = match value {
          AssignValue::Literal(s) => s.clone(),
          AssignValue::Reference(token) => env.resolve(token),
        };
        env.define(name.as_str(), value);
      }

      Statement::Capture { name, tokens } => {
        let argv = env.resolve_all(tokens);
        if argv.first().and_then(|t| Builtin::from_token(t)) == Some(Builtin::Match) {
          let flag = Comparison::parse(&argv)?.holds();
          env.define_flag(name.as_str(), flag);
        } else {
          let output = self.executor.execute(&argv, working_dir, true)?;
          env.define(name.as_str(), output);
        }
      }

      Statement::ArchGuard { tag, body } => {
        if self.arch == Some(*tag) {
          debug!(tag = %tag, "entering architecture guard");
          return self.run_block(body, env, action, working_dir);
        }
        debug!(tag = %tag, statements = body.len(), "skipping architecture guard");
      }

      Statement::Builtin {
        kind: Builtin::Match,
        tokens,
      } if action == Action::Test => {
        let comparison = Comparison::parse(&env.resolve_all(tokens))?;
        let summary = format!("{} {} {}", comparison.left, comparison.op, comparison.right);
        comparison.assert()?;
        info!(assertion = %summary, "assertion passed");
        return Ok(Some(Outcome::Asserted));
      }

      Statement::Builtin {
        kind: Builtin::FileMan,
        tokens,
      } => {
        let path = file_man(&env.resolve_all(tokens), working_dir)?;
        return Ok(Some(Outcome::FileWritten { path }));
      }

      Statement::Builtin { tokens, .. } | Statement::Command { tokens } => {
        let argv = env.resolve_all(tokens);
        self.executor.execute(&argv, working_dir, false)?;
      }
    }

    Ok(None)
  }
}
