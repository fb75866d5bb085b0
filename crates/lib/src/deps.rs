//! Classification of declared dependencies.
//!
//! Each dependency is looked up three ways: as an executable on `PATH`, as a
//! package already installed under `<root>/Installed/<name>`, and as a barrel
//! that could build it. A dependency is present when either of the first two
//! holds. Nothing here installs anything.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::descriptor::{PackageDescriptor, barrel_path, readable_name};
use crate::platform::paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
  /// `dependencies=`
  Runtime,
  /// `Dbuild=`
  Build,
}

impl DependencyKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      DependencyKind::Runtime => "runtime",
      DependencyKind::Build => "build",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyStatus {
  pub name: String,
  pub kind: DependencyKind,
  /// Where the executable was found on `PATH`.
  pub path: Option<PathBuf>,
  /// `<root>/Installed/<readable name>` exists.
  pub installed: bool,
  /// Barrel that describes the dependency, if there is one.
  pub barrel: Option<PathBuf>,
}

impl DependencyStatus {
  pub fn is_present(&self) -> bool {
    self.path.is_some() || self.installed
  }

  /// Missing, but a barrel exists to build it from.
  pub fn is_buildable(&self) -> bool {
    !self.is_present() && self.barrel.is_some()
  }
}

/// Where installed packages and barrels live.
#[derive(Debug, Clone, Copy)]
pub struct DependencyContext<'a> {
  pub install_root: &'a Path,
  pub barrels: &'a Path,
}

/// Check every runtime then build dependency against the process `PATH`,
/// the install root and the barrels directory.
pub fn check_dependencies(descriptor: &PackageDescriptor, ctx: DependencyContext<'_>) -> Vec<DependencyStatus> {
  check_with(descriptor, ctx, |name| which::which(name).ok())
}

/// Like [`check_dependencies`] but searching the given `PATH` value.
pub fn check_dependencies_in<P: AsRef<OsStr>>(
  descriptor: &PackageDescriptor,
  ctx: DependencyContext<'_>,
  search_path: P,
  cwd: &Path,
) -> Vec<DependencyStatus> {
  let search_path = search_path.as_ref();
  check_with(descriptor, ctx, |name| which::which_in(name, Some(search_path), cwd).ok())
}

fn check_with(
  descriptor: &PackageDescriptor,
  ctx: DependencyContext<'_>,
  mut find: impl FnMut(&str) -> Option<PathBuf>,
) -> Vec<DependencyStatus> {
  let runtime = descriptor.dependencies.iter().map(|d| (d, DependencyKind::Runtime));
  let build = descriptor.build_dependencies.iter().map(|d| (d, DependencyKind::Build));

  runtime
    .chain(build)
    .filter(|(name, _)| !name.trim().is_empty())
    .map(|(name, kind)| {
      let name = name.trim();
      let path = find(name);
      let installed = paths::installed_dir(ctx.install_root, &readable_name(name)).is_dir();
      let barrel = Some(barrel_path(name, ctx.barrels)).filter(|p| p.is_file());

      debug!(
        dependency = name,
        kind = kind.as_str(),
        on_path = path.is_some(),
        installed,
        barrel = barrel.is_some(),
        "checked dependency"
      );
      DependencyStatus {
        name: name.to_string(),
        kind,
        path,
        installed,
        barrel,
      }
    })
    .collect()
}
