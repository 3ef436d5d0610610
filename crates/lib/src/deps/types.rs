use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DependencyError {
  #[error("invalid module notation '{notation}': expected 'group:name' or 'group:name:version'")]
  InvalidNotation { notation: String },
}

/// What a dependency points at. Opaque to this crate beyond rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DependencyTarget {
  /// Another project in the same build, optionally narrowed to one library.
  Project { path: String, library: Option<String> },

  /// A library in the current project.
  Library { name: String },

  /// An external module coordinate.
  Module {
    group: String,
    name: String,
    version: Option<String>,
  },
}

impl DependencyTarget {
  /// Parse `group:name` or `group:name:version`.
  pub fn parse_module(notation: &str) -> Result<Self, DependencyError> {
    let invalid = || DependencyError::InvalidNotation {
      notation: notation.to_string(),
    };
    let parts: Vec<&str> = notation.split(':').collect();
    if parts.iter().any(|p| p.trim().is_empty()) {
      return Err(invalid());
    }
    match parts.as_slice() {
      [group, name] => Ok(DependencyTarget::Module {
        group: group.to_string(),
        name: name.to_string(),
        version: None,
      }),
      [group, name, version] => Ok(DependencyTarget::Module {
        group: group.to_string(),
        name: name.to_string(),
        version: Some(version.to_string()),
      }),
      _ => Err(invalid()),
    }
  }
}

impl fmt::Display for DependencyTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DependencyTarget::Project { path, library: None } => write!(f, "project '{}'", path),
      DependencyTarget::Project {
        path,
        library: Some(library),
      } => write!(f, "project '{}' library '{}'", path, library),
      DependencyTarget::Library { name } => write!(f, "library '{}'", name),
      DependencyTarget::Module {
        group,
        name,
        version: None,
      } => write!(f, "module '{}:{}'", group, name),
      DependencyTarget::Module {
        group,
        name,
        version: Some(version),
      } => write!(f, "module '{}:{}:{}'", group, name, version),
    }
  }
}

/// One dependency declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySpec {
  pub target: DependencyTarget,

  /// Declared role of the dependency (`"api"`, `"implementation"`, ...).
  /// `None` leaves the choice to whoever resolves it.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub scope: Option<String>,
}

impl DependencySpec {
  pub fn new(target: DependencyTarget) -> Self {
    Self { target, scope: None }
  }

  pub fn project(path: impl Into<String>) -> Self {
    Self::new(DependencyTarget::Project {
      path: path.into(),
      library: None,
    })
  }

  pub fn library(name: impl Into<String>) -> Self {
    Self::new(DependencyTarget::Library { name: name.into() })
  }

  pub fn module(notation: &str) -> Result<Self, DependencyError> {
    Ok(Self::new(DependencyTarget::parse_module(notation)?))
  }

  pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
    self.scope = Some(scope.into());
    self
  }

  /// Narrow a project dependency to one of its libraries. No effect on other
  /// targets.
  pub fn with_library(mut self, name: impl Into<String>) -> Self {
    if let DependencyTarget::Project { library, .. } = &mut self.target {
      *library = Some(name.into());
    }
    self
  }
}

impl fmt::Display for DependencySpec {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.scope {
      Some(scope) => write!(f, "{} ({})", self.target, scope),
      None => write!(f, "{}", self.target),
    }
  }
}
