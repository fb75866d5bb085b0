use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// CPU architectures a script can gate on.
///
/// The string forms are the literal tags used in script bodies (`amd64:` and
/// `arm64:`), not the Rust target names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
  Amd64,
  Arm64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown architecture '{0}' (expected amd64 or arm64)")]
pub struct UnknownArch(pub String);

impl Arch {
  pub const ALL: [Arch; 2] = [Arch::Amd64, Arch::Arm64];

  /// Detect the current CPU architecture at runtime
  ///
  /// Returns `None` on hosts that are neither x86_64 nor aarch64.
  pub fn current() -> Option<Self> {
    Self::from_target(std::env::consts::ARCH)
  }

  /// Map a Rust target architecture name to its tag.
  pub fn from_target(arch: &str) -> Option<Self> {
    match arch {
      "x86_64" => Some(Self::Amd64),
      "aarch64" => Some(Self::Arm64),
      _ => None,
    }
  }

  /// Returns the tag string for this architecture
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Amd64 => "amd64",
      Self::Arm64 => "arm64",
    }
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Arch {
  type Err = UnknownArch;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|arch| arch.as_str() == s)
      .ok_or_else(|| UnknownArch(s.to_string()))
  }
}
