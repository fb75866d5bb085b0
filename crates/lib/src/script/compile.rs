//! Line classification.
//!
//! A script body is compiled once into [`Statement`]s before anything runs,
//! so architecture guards carry their body structurally instead of being
//! skipped by scanning ahead at run time.

use tracing::warn;

use super::ast::{AssignValue, Builtin, Statement};
use crate::environment::SIGIL;
use crate::platform::Arch;

/// Prefix that places a line inside the preceding architecture guard.
pub const GUARD_INDENT: &str = "\t\t";

const CAPTURE_MARK: char = '@';

/// Compile a script body into statements.
///
/// Blank lines and `#` comments are dropped. Every other line is trimmed and
/// classified; a guard header swallows the double-tab indented lines that
/// follow it, including blank lines between them.
pub fn compile(body: &str) -> Vec<Statement> {
  let lines: Vec<&str> = body.lines().collect();
  compile_lines(&lines)
}

fn compile_lines(lines: &[&str]) -> Vec<Statement> {
  let mut statements = Vec::new();
  let mut i = 0;

  while i < lines.len() {
    let line = lines[i].trim();
    i += 1;

    if line.is_empty() || line.starts_with('#') {
      continue;
    }

    if let Some((tag, rest)) = guard_header(line) {
      if !rest.trim().is_empty() {
        warn!(tag = %tag, text = rest.trim(), "ignoring text after architecture tag");
      }

      let start = i;
      i = guard_end(lines, start);
      let body: Vec<&str> = lines[start..i]
        .iter()
        .map(|l| l.strip_prefix(GUARD_INDENT).unwrap_or(""))
        .collect();

      statements.push(Statement::ArchGuard {
        tag,
        body: compile_lines(&body),
      });
      continue;
    }

    statements.push(classify(line));
  }

  statements
}

/// Index one past the last indented line of a guard body starting at
/// `start`. Blank lines between indented lines stay inside the body.
fn guard_end(lines: &[&str], start: usize) -> usize {
  let mut end = start;
  for (offset, line) in lines[start..].iter().enumerate() {
    if line.starts_with(GUARD_INDENT) {
      end = start + offset + 1;
    } else if !line.trim().is_empty() {
      break;
    }
  }
  end
}

fn guard_header(line: &str) -> Option<(Arch, &str)> {
  Arch::ALL.into_iter().find_map(|arch| {
    let rest = line.strip_prefix(arch.as_str())?.strip_prefix(':')?;
    Some((arch, rest))
  })
}

/// Classify one trimmed, non-empty line.
fn classify(line: &str) -> Statement {
  if let Some((name, value)) = binding_line(line, SIGIL) {
    let value = strip_quotes(value.trim());
    let value = if value.starts_with(SIGIL) && !value.contains(char::is_whitespace) {
      AssignValue::Reference(value.to_string())
    } else {
      AssignValue::Literal(value.to_string())
    };
    return Statement::Assign {
      name: name.to_string(),
      value,
    };
  }

  if let Some((name, command)) = binding_line(line, CAPTURE_MARK) {
    return Statement::Capture {
      name: name.to_string(),
      tokens: tokenize(strip_quotes(command.trim())),
    };
  }

  let tokens = tokenize(line);
  match tokens.first().and_then(|t| Builtin::from_token(t)) {
    Some(kind) => Statement::Builtin { kind, tokens },
    None => Statement::Command { tokens },
  }
}

/// Split `<mark>name=rest`. The name must be non-empty and contain no
/// whitespace, so `$HOME/bin/tool --opt=1` stays a command.
fn binding_line(line: &str, mark: char) -> Option<(&str, &str)> {
  let (name, rest) = line.strip_prefix(mark)?.split_once('=')?;
  let name = name.trim();
  if name.is_empty() || name.contains(char::is_whitespace) {
    return None;
  }
  Some((name, rest))
}

fn tokenize(text: &str) -> Vec<String> {
  text.split_whitespace().map(String::from).collect()
}

/// Remove one leading and one trailing `"`.
pub(crate) fn strip_quotes(s: &str) -> &str {
  let s = s.strip_prefix('"').unwrap_or(s);
  s.strip_suffix('"').unwrap_or(s)
}
