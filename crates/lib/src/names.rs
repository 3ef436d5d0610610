//! Name derivation for component-scoped objects.
//!
//! Buckets owned by a component are named by combining the component name
//! with a role. The component called `main` is special-cased so that its
//! buckets get the bare role names (`implementation`, `api`) that users
//! expect from a single-component project.

/// Name of the component whose derived names carry no prefix.
const MAIN: &str = "main";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Names {
  name: String,
}

impl Names {
  pub fn of(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  fn is_main(&self) -> bool {
    self.name == MAIN
  }

  /// `mylib` + `implementation` → `mylibImplementation`; `main` → `implementation`.
  pub fn with_suffix(&self, suffix: &str) -> String {
    if self.is_main() {
      uncapitalize(suffix)
    } else {
      format!("{}{}", self.name, capitalize(suffix))
    }
  }
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

fn uncapitalize(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_lowercase().chain(chars).collect(),
    None => String::new(),
  }
}
