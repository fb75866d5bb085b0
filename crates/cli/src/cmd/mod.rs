mod deps;
mod info;
mod run;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use fermenter_lib::deps::DependencyContext;
use fermenter_lib::descriptor::{self, PackageDescriptor};
use fermenter_lib::platform::{self, Arch, paths};

pub use deps::cmd_deps;
pub use info::cmd_info;
pub use run::cmd_run;

/// Locations and architecture after applying flags over environment defaults.
#[derive(Debug, Clone)]
pub struct Settings {
  pub barrels: PathBuf,
  pub root: PathBuf,
  pub arch: Option<Arch>,
}

impl Settings {
  pub fn resolve(barrels: Option<PathBuf>, root: Option<PathBuf>, arch: Option<Arch>) -> Self {
    let settings = Self {
      barrels: barrels.unwrap_or_else(paths::barrels_dir),
      root: root.unwrap_or_else(paths::install_root),
      arch: arch.or_else(platform::host_arch),
    };
    debug!(?settings, "resolved settings");
    settings
  }

  pub fn dependency_context(&self) -> DependencyContext<'_> {
    DependencyContext {
      install_root: &self.root,
      barrels: &self.barrels,
    }
  }
}

/// Find and parse the barrel for `package`.
fn load_package(settings: &Settings, package: &str) -> Result<(PathBuf, PackageDescriptor)> {
  let path = descriptor::locate(package, &settings.barrels)?;
  let desc = descriptor::load(&path)?;
  Ok((path, desc))
}

fn display_path(path: &Path) -> String {
  path.display().to_string()
}
