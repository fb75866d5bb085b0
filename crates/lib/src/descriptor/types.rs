//! Parsed package descriptor and the action selector.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// A fully validated package descriptor.
///
/// Produced only by [`parse`](super::parse); every required field is
/// guaranteed to be non-empty. Immutable after parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageDescriptor {
  pub name: String,
  pub version: String,
  pub description: String,
  pub license: String,
  pub caveats: String,
  pub aliases: Vec<String>,
  pub architectures: Vec<String>,
  pub dependencies: Vec<String>,
  pub build_dependencies: Vec<String>,
  pub sources: Vec<String>,
  pub build_script: String,
  pub install_script: String,
  pub test_script: String,
}

impl PackageDescriptor {
  /// The script body an action runs.
  pub fn script(&self, action: Action) -> &str {
    match action {
      Action::Build => &self.build_script,
      Action::Install => &self.install_script,
      Action::Test => &self.test_script,
    }
  }

  /// Returns true if `arch` appears in the declared architectures.
  pub fn supports_arch(&self, arch: &str) -> bool {
    self.architectures.iter().any(|a| a == arch)
  }
}

/// Selects which script body of a descriptor is run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
  Build,
  Install,
  Test,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action '{0}' (expected build, install or test)")]
pub struct UnknownAction(pub String);

impl Action {
  pub const ALL: [Action; 3] = [Action::Build, Action::Install, Action::Test];

  pub fn as_str(&self) -> &'static str {
    match self {
      Action::Build => "build",
      Action::Install => "install",
      Action::Test => "test",
    }
  }
}

impl fmt::Display for Action {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Action {
  type Err = UnknownAction;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|a| a.as_str() == s)
      .ok_or_else(|| UnknownAction(s.to_string()))
  }
}
