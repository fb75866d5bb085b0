//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Get path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

/// Read fixture content.
pub fn fixture_content(name: &str) -> String {
  std::fs::read_to_string(fixture_path(name)).unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Isolated test environment.
///
/// Each test gets its own barrels directory and install root.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Create an environment whose barrels directory holds the named fixtures.
  pub fn with_barrels(names: &[&str]) -> Self {
    let env = Self {
      temp: TempDir::new().unwrap(),
    };
    for name in names {
      std::fs::write(env.barrels_path().join(name), fixture_content(name)).unwrap();
    }
    env
  }

  /// Barrels directory (isolated per test).
  pub fn barrels_path(&self) -> PathBuf {
    let p = self.temp.path().join("Barrels");
    std::fs::create_dir_all(&p).unwrap();
    dunce::canonicalize(&p).unwrap_or(p)
  }

  /// Install root (isolated per test).
  pub fn root_path(&self) -> PathBuf {
    let p = self.temp.path().join("root");
    std::fs::create_dir_all(&p).unwrap();
    dunce::canonicalize(&p).unwrap_or(p)
  }

  /// Working directory of `package` under the install root.
  pub fn workdir(&self, package: &str) -> PathBuf {
    self.root_path().join("Installed").join(package)
  }

  /// Get a pre-configured Command for the fermenter binary.
  ///
  /// Sets environment variables for isolated testing:
  /// - `FERMENTER_ROOT`: Isolated install root
  /// - `FERMENTER_BARRELS`: Isolated barrels directory
  pub fn fermenter_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("fermenter");
    cmd.env("FERMENTER_ROOT", self.root_path());
    cmd.env("FERMENTER_BARRELS", self.barrels_path());
    cmd.env_remove("RUST_LOG");
    cmd
  }
}
