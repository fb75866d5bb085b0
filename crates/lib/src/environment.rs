//! Variable bindings visible to a running script.
//!
//! The environment is an append-only, ordered list of bindings. Looking a
//! name up returns the most recently appended binding with that name; older
//! bindings stay in the list but are shadowed for good. An index from name to
//! latest position keeps lookups constant-time without changing that
//! contract.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

/// Marker that turns a token into a variable reference.
pub const SIGIL: char = '$';

/// The value carried by a binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingValue {
  /// From an assignment or a captured command.
  Str(String),
  /// From a `match` comparison under `@name=`.
  Flag(bool),
}

impl fmt::Display for BindingValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BindingValue::Str(s) => f.write_str(s),
      BindingValue::Flag(b) => write!(f, "{b}"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
  pub name: String,
  pub value: BindingValue,
}

/// Ordered bindings with shadow-by-recency lookup.
#[derive(Debug, Clone, Default)]
pub struct Environment {
  bindings: Vec<Binding>,
  latest: HashMap<String, usize>,
}

impl Environment {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a string binding.
  pub fn define(&mut self, name: impl Into<String>, value: impl Into<String>) {
    self.push(name.into(), BindingValue::Str(value.into()));
  }

  /// Append a flag binding.
  pub fn define_flag(&mut self, name: impl Into<String>, flag: bool) {
    self.push(name.into(), BindingValue::Flag(flag));
  }

  fn push(&mut self, name: String, value: BindingValue) {
    debug!(name = %name, value = %value, "define");
    self.latest.insert(name.clone(), self.bindings.len());
    self.bindings.push(Binding { name, value });
  }

  /// The value of the most recent binding named `name`.
  pub fn lookup(&self, name: &str) -> Option<&BindingValue> {
    self.latest.get(name).map(|&i| &self.bindings[i].value)
  }

  /// Substitute a single token.
  ///
  /// Tokens without the sigil are returned unchanged. A sigil token is
  /// replaced by the bound value. An unbound sigil token becomes its bare
  /// name: `$undefined` resolves to `undefined`, never to an error.
  pub fn resolve(&self, token: &str) -> String {
    let Some(name) = token.strip_prefix(SIGIL) else {
      return token.to_string();
    };

    match self.lookup(name) {
      Some(value) => value.to_string(),
      None => {
        debug!(name, "unresolved reference, using bare name");
        name.to_string()
      }
    }
  }

  /// Substitute every token.
  pub fn resolve_all<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
    tokens.iter().map(|t| self.resolve(t.as_ref())).collect()
  }

  /// All bindings in definition order, shadowed ones included.
  pub fn bindings(&self) -> &[Binding] {
    &self.bindings
  }

  pub fn len(&self) -> usize {
    self.bindings.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bindings.is_empty()
  }
}
