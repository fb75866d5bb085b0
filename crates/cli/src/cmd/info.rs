//! Implementation of `fermenter info`.

use anyhow::Result;

use super::{Settings, display_path, load_package};
use crate::output::{OutputFormat, format_list, print_info, print_json, print_stat};

pub fn cmd_info(settings: &Settings, package: &str, format: OutputFormat) -> Result<()> {
  let (path, desc) = load_package(settings, package)?;

  if format.is_json() {
    return print_json(&desc);
  }

  print_info(&format!("{} {}", desc.name, desc.version));
  print_stat("Description", &desc.description);
  print_stat("Barrel", &display_path(&path));
  if !desc.license.is_empty() {
    print_stat("License", &desc.license);
  }
  print_stat("Aliases", &format_list(&desc.aliases));
  print_stat("Architectures", &format_list(&desc.architectures));
  print_stat("Dependencies", &format_list(&desc.dependencies));
  print_stat("Build dependencies", &format_list(&desc.build_dependencies));
  print_stat("Sources", &format_list(&desc.sources));
  if !desc.caveats.is_empty() {
    print_stat("Caveats", &desc.caveats);
  }

  Ok(())
}
