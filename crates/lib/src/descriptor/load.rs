//! Locating and reading barrels on disk.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::parse::{DescriptorError, parse};
use super::types::PackageDescriptor;
use crate::consts::BARREL_EXTENSION;

#[derive(Debug, Error)]
pub enum LoadError {
  #[error("package '{name}' not found in {}", barrels.display())]
  NotFound { name: String, barrels: PathBuf },

  #[error("failed to read {}: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("{}: {source}", path.display())]
  Descriptor {
    path: PathBuf,
    #[source]
    source: DescriptorError,
  },
}

/// Normalize a package name the way barrel files are named: lower-case with
/// `-`, `_`, `.` and spaces removed.
pub fn readable_name(name: &str) -> String {
  name
    .chars()
    .filter(|c| !matches!(c, '-' | '_' | '.' | ' '))
    .flat_map(char::to_lowercase)
    .collect()
}

/// Where the barrel for package `name` lives inside `barrels`, whether or not
/// it exists.
pub fn barrel_path(name: &str, barrels: &Path) -> PathBuf {
  barrels.join(format!("{}.{}", readable_name(name), BARREL_EXTENSION))
}

/// Resolve a package argument to a descriptor path.
///
/// An argument naming an existing file is used as-is. Anything else is
/// treated as a package name and looked up as `<barrels>/<readable>.barrel`.
pub fn locate(package: &str, barrels: &Path) -> Result<PathBuf, LoadError> {
  let direct = Path::new(package);
  if direct.is_file() {
    return Ok(direct.to_path_buf());
  }

  let candidate = barrel_path(package, barrels);
  debug!(package, path = %candidate.display(), "looking up barrel");
  if candidate.is_file() {
    Ok(candidate)
  } else {
    Err(LoadError::NotFound {
      name: package.to_string(),
      barrels: barrels.to_path_buf(),
    })
  }
}

/// Read and parse the descriptor at `path`.
pub fn load(path: &Path) -> Result<PackageDescriptor, LoadError> {
  let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
    path: path.to_path_buf(),
    source,
  })?;
  parse(&text).map_err(|source| LoadError::Descriptor {
    path: path.to_path_buf(),
    source,
  })
}
