//! Line-oriented descriptor parser.
//!
//! A descriptor is a sequence of `key=value` lines and `name() { ... }`
//! function blocks. Anything else is skipped. Parsing is all-or-nothing: a
//! descriptor is only returned once every required field is populated.

use thiserror::Error;
use tracing::{debug, trace};

use super::types::PackageDescriptor;

/// Errors that make a descriptor unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
  /// One or more required fields are absent or empty. Names are the
  /// descriptor keys (`pkgname`, `arch`, `build`, ...).
  #[error("malformed descriptor: missing required field(s): {}", .0.join(", "))]
  MissingFields(Vec<&'static str>),

  /// A function block has no line containing `}`.
  #[error("malformed descriptor: function block '{name}' opened on line {line} is never closed")]
  UnterminatedBlock { name: String, line: usize },
}

/// The header of a function block.
struct BlockHeader<'a> {
  name: &'a str,
  /// Text following `{` on the header line, if the brace is there.
  inline: Option<&'a str>,
}

/// Parse descriptor text.
///
/// # Errors
///
/// Returns [`DescriptorError::MissingFields`] listing every required field
/// that is absent, or [`DescriptorError::UnterminatedBlock`] if a function
/// block is never closed.
pub fn parse(text: &str) -> Result<PackageDescriptor, DescriptorError> {
  let lines: Vec<&str> = text.lines().collect();
  let mut desc = PackageDescriptor::default();
  let mut i = 0;

  while i < lines.len() {
    let line = lines[i];

    if let Some(header) = block_header(line) {
      let (body, next) = read_block(&lines, i, &header)?;
      trace!(block = header.name, lines = body.lines().count(), "read function block");
      match header.name {
        "build" => desc.build_script = body,
        "install" => desc.install_script = body,
        "test" => desc.test_script = body,
        other => debug!(block = other, "ignoring unknown function block"),
      }
      i = next;
      continue;
    }

    if let Some((key, value)) = line.split_once('=') {
      set_field(&mut desc, key.trim(), value);
    }
    i += 1;
  }

  validate(desc)
}

/// Recognize `identifier()` optionally followed by `{`.
fn block_header(line: &str) -> Option<BlockHeader<'_>> {
  let trimmed = line.trim();
  let (name, rest) = trimmed.split_once("()")?;

  let mut chars = name.chars();
  let first = chars.next()?;
  if !(first.is_ascii_alphabetic() || first == '_') || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
    return None;
  }

  let rest = rest.trim_start();
  if rest.is_empty() {
    Some(BlockHeader { name, inline: None })
  } else {
    rest.strip_prefix('{').map(|after| BlockHeader {
      name,
      inline: Some(after),
    })
  }
}

/// Read the body of the block whose header is on line `start`.
///
/// Returns the body and the index of the first line after the block.
fn read_block(lines: &[&str], start: usize, header: &BlockHeader<'_>) -> Result<(String, usize), DescriptorError> {
  let mut body: Vec<&str> = Vec::new();
  let mut from = start + 1;

  match header.inline {
    // `name() { ... }` on a single line
    Some(after) if after.contains('}') => {
      let end = after.rfind('}').unwrap_or(after.len());
      return Ok((after[..end].trim().to_string(), from));
    }
    Some(after) if !after.trim().is_empty() => body.push(after.trim_start()),
    Some(_) => {}
    // Brace on its own line below the header
    None => {
      if lines.get(from).is_some_and(|l| l.trim() == "{") {
        from += 1;
      }
    }
  }

  let close = lines[from.min(lines.len())..]
    .iter()
    .position(|l| l.contains('}'))
    .map(|offset| from + offset)
    .ok_or_else(|| DescriptorError::UnterminatedBlock {
      name: header.name.to_string(),
      line: start + 1,
    })?;

  body.extend_from_slice(&lines[from..close]);
  Ok((body.join("\n"), close + 1))
}

fn set_field(desc: &mut PackageDescriptor, key: &str, raw: &str) {
  let value: String = raw.chars().filter(|c| *c != '"' && *c != '\'').collect();

  match key {
    "pkgname" => desc.name = value,
    "version" => desc.version = value,
    "desc" => desc.description = value,
    "license" => desc.license = value,
    "caveats" => desc.caveats = value,
    "alias" => desc.aliases = split_list(&value),
    "arch" => desc.architectures = split_list(&value),
    "dependencies" => desc.dependencies = split_list(&value),
    "Dbuild" => desc.build_dependencies = split_list(&value),
    "source" => desc.sources = split_list(&value),
    other => trace!(key = other, "ignoring unknown key"),
  }
}

/// Split a list value on `,` without trimming the entries.
fn split_list(value: &str) -> Vec<String> {
  if value.is_empty() {
    return Vec::new();
  }
  value.split(',').map(String::from).collect()
}

fn validate(desc: PackageDescriptor) -> Result<PackageDescriptor, DescriptorError> {
  let checks: [(&'static str, bool); 8] = [
    ("pkgname", desc.name.is_empty()),
    ("version", desc.version.is_empty()),
    ("desc", desc.description.is_empty()),
    ("arch", desc.architectures.is_empty()),
    ("source", desc.sources.is_empty()),
    ("build", desc.build_script.trim().is_empty()),
    ("install", desc.install_script.trim().is_empty()),
    ("test", desc.test_script.trim().is_empty()),
  ];

  let missing: Vec<&'static str> = checks.iter().filter(|(_, absent)| *absent).map(|(key, _)| *key).collect();

  if missing.is_empty() {
    Ok(desc)
  } else {
    Err(DescriptorError::MissingFields(missing))
  }
}
