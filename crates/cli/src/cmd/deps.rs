//! Implementation of `fermenter deps`.

use anyhow::Result;

use fermenter_lib::deps::check_dependencies;

use super::{Settings, load_package};
use crate::output::{OutputFormat, print_dependency, print_info, print_json};

/// Print which dependencies are present. Missing ones are not an error.
pub fn cmd_deps(settings: &Settings, package: &str, format: OutputFormat) -> Result<()> {
  let (_, desc) = load_package(settings, package)?;
  let report = check_dependencies(&desc, settings.dependency_context());

  if format.is_json() {
    return print_json(&report);
  }

  if report.is_empty() {
    print_info(&format!("{} declares no dependencies", desc.name));
    return Ok(());
  }

  report.iter().for_each(print_dependency);

  let found = report.iter().filter(|s| s.is_present()).count();
  let buildable = report.iter().filter(|s| s.is_buildable()).count();
  print_info(&format!("{found} of {} dependencies found", report.len()));
  if buildable > 0 {
    print_info(&format!("{buildable} missing dependencies have a barrel"));
  }

  Ok(())
}
