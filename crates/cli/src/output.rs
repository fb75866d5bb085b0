//! Terminal output for fermenter commands.
//!
//! Status lines go to stdout, warnings and errors to stderr. Colors are only
//! emitted when the target stream supports them.

use std::time::Duration;

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

use fermenter_lib::deps::DependencyStatus;
use fermenter_lib::descriptor::Action;
use fermenter_lib::script::Outcome;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
  pub const ARROW: &str = "→";
}

#[derive(Debug, Clone, Copy)]
enum Level {
  Success,
  Info,
  Warning,
  Error,
}

fn status_line(level: Level, message: &str) {
  match level {
    Level::Success => println!(
      "{} {message}",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
    ),
    Level::Info => println!(
      "{} {message}",
      symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue())
    ),
    Level::Warning => eprintln!(
      "{} {}",
      symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
      message.if_supports_color(Stream::Stderr, |s| s.yellow())
    ),
    Level::Error => eprintln!(
      "{} {}",
      symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
      message.if_supports_color(Stream::Stderr, |s| s.red())
    ),
  }
}

pub fn print_success(message: &str) {
  status_line(Level::Success, message);
}

pub fn print_info(message: &str) {
  status_line(Level::Info, message);
}

pub fn print_warning(message: &str) {
  status_line(Level::Warning, message);
}

pub fn print_error(message: &str) {
  status_line(Level::Error, message);
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{json}");
  Ok(())
}

/// Report a finished action and how its script ended.
pub fn print_action(package: &str, action: Action, outcome: &Outcome, elapsed: Duration) {
  print_success(&format!("{package} {action} finished in {}", format_duration(elapsed)));
  match outcome {
    Outcome::Completed => {}
    Outcome::Asserted => print_stat("Assertion", "passed"),
    Outcome::FileWritten { path } => print_stat("Wrote", &path.display().to_string()),
  }
}

/// One line per dependency: success when present, warning otherwise.
pub fn print_dependency(status: &DependencyStatus) {
  let line = format!("{} ({}) {}", status.name, status.kind.as_str(), dependency_detail(status));
  if status.is_present() {
    print_success(&line);
  } else {
    print_warning(&line);
  }
}

/// How a dependency was found, or why it could not be.
pub fn dependency_detail(status: &DependencyStatus) -> String {
  match (&status.path, status.installed, &status.barrel) {
    (Some(path), _, _) => format!("{} {}", symbols::ARROW, path.display()),
    (None, true, _) => "installed by fermenter".to_string(),
    (None, false, Some(barrel)) => format!("not found, can be built from {}", barrel.display()),
    (None, false, None) => "not found, no barrel to build it from".to_string(),
  }
}

pub fn format_duration(duration: Duration) -> String {
  let secs = duration.as_secs();
  let millis = duration.subsec_millis();

  match secs {
    60.. => format!("{}m {}s", secs / 60, secs % 60),
    1.. => format!("{secs}.{:02}s", millis / 10),
    0 => format!("{millis}ms"),
  }
}

/// Join list values for a single `print_stat` line.
pub fn format_list(items: &[String]) -> String {
  if items.is_empty() {
    "-".to_string()
  } else {
    items.join(", ")
  }
}
