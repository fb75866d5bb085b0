//! Driving one action of a package.

use std::path::PathBuf;
use std::time::Instant;

use thiserror::Error;
use tracing::{info, warn};

use crate::descriptor::{Action, PackageDescriptor};
use crate::environment::Environment;
use crate::execute::Executor;
use crate::platform::{Arch, paths};
use crate::script::{Interpreter, Outcome, ScriptError, compile};

#[derive(Debug, Error)]
pub enum RunError {
  #[error("failed to prepare working directory {}: {source}", path.display())]
  WorkingDir {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("{action} script for '{package}' failed: {source}")]
  Script {
    package: String,
    action: Action,
    #[source]
    source: ScriptError,
  },
}

/// Runs a descriptor's scripts under one install root.
pub struct ActionRunner<E> {
  install_root: PathBuf,
  arch: Option<Arch>,
  executor: E,
}

impl<E: Executor> ActionRunner<E> {
  pub fn new(install_root: impl Into<PathBuf>, arch: Option<Arch>, executor: E) -> Self {
    Self {
      install_root: install_root.into(),
      arch,
      executor,
    }
  }

  pub fn executor(&self) -> &E {
    &self.executor
  }

  /// Where `descriptor`'s commands run.
  pub fn working_dir(&self, descriptor: &PackageDescriptor) -> PathBuf {
    paths::installed_dir(&self.install_root, &descriptor.name)
  }

  /// Run one action with a fresh environment.
  ///
  /// The working directory is created when missing. The environment starts
  /// with `version` and `pkgname` and is dropped when the script ends.
  pub fn run(&mut self, descriptor: &PackageDescriptor, action: Action) -> Result<Outcome, RunError> {
    let working_dir = self.working_dir(descriptor);
    std::fs::create_dir_all(&working_dir).map_err(|source| RunError::WorkingDir {
      path: working_dir.clone(),
      source,
    })?;

    if let Some(arch) = self.arch
      && !descriptor.supports_arch(arch.as_str())
    {
      warn!(package = %descriptor.name, arch = %arch, "package does not list this architecture");
    }

    let mut env = Environment::new();
    env.define("version", descriptor.version.as_str());
    env.define("pkgname", descriptor.name.as_str());

    let statements = compile(descriptor.script(action));
    info!(
      package = %descriptor.name,
      action = %action,
      statements = statements.len(),
      working_dir = %working_dir.display(),
      "running script"
    );

    let start = Instant::now();
    let mut interpreter = Interpreter::new(&mut self.executor, self.arch);
    let outcome = interpreter
      .run(&statements, &mut env, action, &working_dir)
      .map_err(|source| RunError::Script {
        package: descriptor.name.clone(),
        action,
        source,
      })?;

    info!(
      package = %descriptor.name,
      action = %action,
      outcome = ?outcome,
      bindings = env.len(),
      duration_ms = start.elapsed().as_millis() as u64,
      "script finished"
    );
    Ok(outcome)
  }
}
