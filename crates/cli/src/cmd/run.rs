//! Implementation of `fermenter build`, `install` and `test`.

use std::time::Instant;

use anyhow::Result;
use tracing::info;

use fermenter_lib::deps::check_dependencies;
use fermenter_lib::descriptor::Action;
use fermenter_lib::execute::SystemExecutor;
use fermenter_lib::runner::ActionRunner;

use super::{Settings, display_path, load_package};
use crate::output::{dependency_detail, format_duration, print_action, print_info, print_stat, print_success, print_warning};

/// Run `actions` of `package` in order, stopping at the first failure.
///
/// Missing dependencies are reported but do not stop the run.
pub fn cmd_run(settings: &Settings, package: &str, actions: &[Action]) -> Result<()> {
  let (path, desc) = load_package(settings, package)?;
  print_info(&format!("{} {} ({})", desc.name, desc.version, display_path(&path)));

  for dep in check_dependencies(&desc, settings.dependency_context())
    .iter()
    .filter(|d| !d.is_present())
  {
    print_warning(&format!(
      "missing {} dependency: {} ({})",
      dep.kind.as_str(),
      dep.name,
      dependency_detail(dep)
    ));
  }

  match settings.arch {
    Some(arch) if !desc.supports_arch(arch.as_str()) => {
      print_warning(&format!("{} does not list {} as a supported architecture", desc.name, arch));
    }
    Some(_) => {}
    None => print_warning("unsupported host architecture; amd64:/arm64: blocks will be skipped"),
  }

  let mut runner = ActionRunner::new(&settings.root, settings.arch, SystemExecutor);
  print_stat("Working directory", &display_path(&runner.working_dir(&desc)));

  let start = Instant::now();
  for &action in actions {
    let step = Instant::now();
    info!(package = %desc.name, action = %action, "starting action");
    let outcome = runner.run(&desc, action)?;

    println!();
    print_action(&desc.name, action, &outcome, step.elapsed());
  }

  if actions.len() > 1 {
    println!();
    print_success(&format!(
      "All {} actions succeeded in {}",
      actions.len(),
      format_duration(start.elapsed())
    ));
  }

  Ok(())
}
