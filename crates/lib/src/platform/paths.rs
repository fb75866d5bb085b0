use std::path::{Path, PathBuf};

use crate::consts::{BARRELS_DIR, BARRELS_ENV, DEFAULT_INSTALL_ROOT, INSTALLED_DIR, ROOT_ENV};

/// Returns the install root.
///
/// `FERMENTER_ROOT` takes precedence over the built-in default.
pub fn install_root() -> PathBuf {
  std::env::var_os(ROOT_ENV)
    .filter(|v| !v.is_empty())
    .map(PathBuf::from)
    .unwrap_or_else(|| PathBuf::from(DEFAULT_INSTALL_ROOT))
}

/// Returns the directory holding package descriptors.
///
/// `FERMENTER_BARRELS` takes precedence. Otherwise this is the `Barrels`
/// directory next to the running executable, or `./Barrels` if the
/// executable location is unknown.
pub fn barrels_dir() -> PathBuf {
  if let Some(dir) = std::env::var_os(BARRELS_ENV).filter(|v| !v.is_empty()) {
    return PathBuf::from(dir);
  }

  std::env::current_exe()
    .ok()
    .and_then(|exe| exe.parent().map(|dir| dir.join(BARRELS_DIR)))
    .unwrap_or_else(|| PathBuf::from(BARRELS_DIR))
}

/// Working directory for every command a package's scripts run:
/// `<root>/Installed/<package>`.
pub fn installed_dir(root: &Path, package: &str) -> PathBuf {
  root.join(INSTALLED_DIR).join(package)
}
