//! Opaque references to nodes of the external task graph.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A handle to an upstream build-graph node, e.g. `":generateHeaders"`.
///
/// The core never interprets the path; it only records which nodes a source
/// set or directory collection is built by, so the task graph can wire
/// execution-order edges.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskRef(String);

impl TaskRef {
  pub fn new(path: impl Into<String>) -> Self {
    Self(path.into())
  }

  pub fn path(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for TaskRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "task '{}'", self.0)
  }
}

impl From<&str> for TaskRef {
  fn from(path: &str) -> Self {
    TaskRef::new(path)
  }
}

impl From<String> for TaskRef {
  fn from(path: String) -> Self {
    TaskRef(path)
  }
}

/// Append `tasks` to `into`, skipping references already present.
pub(crate) fn extend_unique(into: &mut Vec<TaskRef>, tasks: impl IntoIterator<Item = TaskRef>) {
  for task in tasks {
    if !into.contains(&task) {
      into.push(task);
    }
  }
}
