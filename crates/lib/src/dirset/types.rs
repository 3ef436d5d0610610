use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::trace;

use crate::task::{TaskRef, extend_unique};

#[derive(Debug, Default)]
struct CollectionState {
  roots: Vec<PathBuf>,
  built_by: Vec<TaskRef>,
}

/// An ordered, mutable list of directory roots.
///
/// Clones share the same backing list: the component keeps one handle, the
/// view another, and the front end mutates through a third.
#[derive(Debug, Clone, Default)]
pub struct DirectoryCollection {
  state: Rc<RefCell<CollectionState>>,
}

impl DirectoryCollection {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append one root. Paths are kept as given; relative paths are resolved
  /// against the project root only when files are materialized.
  pub fn add(&self, root: impl Into<PathBuf>) -> &Self {
    self.state.borrow_mut().roots.push(root.into());
    self
  }

  pub fn add_all<I, P>(&self, roots: I) -> &Self
  where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
  {
    self.state.borrow_mut().roots.extend(roots.into_iter().map(Into::into));
    self
  }

  /// Replace all roots.
  pub fn set_from<I, P>(&self, roots: I) -> &Self
  where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
  {
    self.state.borrow_mut().roots = roots.into_iter().map(Into::into).collect();
    self
  }

  pub fn clear(&self) -> &Self {
    self.state.borrow_mut().roots.clear();
    self
  }

  /// Snapshot of the explicitly configured roots.
  pub fn roots(&self) -> Vec<PathBuf> {
    self.state.borrow().roots.clone()
  }

  pub fn is_empty(&self) -> bool {
    self.state.borrow().roots.is_empty()
  }

  pub fn len(&self) -> usize {
    self.state.borrow().roots.len()
  }

  /// Record tasks that produce the contents of these directories.
  pub fn built_by(&self, tasks: impl IntoIterator<Item = TaskRef>) -> &Self {
    extend_unique(&mut self.state.borrow_mut().built_by, tasks);
    self
  }

  pub fn build_dependencies(&self) -> Vec<TaskRef> {
    self.state.borrow().built_by.clone()
  }

  /// Whether both handles share one backing list.
  pub fn ptr_eq(&self, other: &DirectoryCollection) -> bool {
    Rc::ptr_eq(&self.state, &other.state)
  }
}

/// A read-only view over a [`DirectoryCollection`] with a convention
/// fallback.
#[derive(Debug, Clone)]
pub struct DirectorySetView {
  dirs: DirectoryCollection,
  convention: PathBuf,
}

impl DirectorySetView {
  pub fn new(dirs: DirectoryCollection, convention: impl Into<PathBuf>) -> Self {
    Self {
      dirs,
      convention: convention.into(),
    }
  }

  /// The current roots: the explicit ones if any were configured, otherwise
  /// the convention path alone. Never merged.
  pub fn resolve(&self) -> Vec<PathBuf> {
    if self.dirs.is_empty() {
      trace!(convention = %self.convention.display(), "no explicit roots, using convention");
      return vec![self.convention.clone()];
    }
    self.dirs.roots()
  }

  /// True once any explicit root has been configured.
  pub fn is_explicit(&self) -> bool {
    !self.dirs.is_empty()
  }

  pub fn convention(&self) -> &Path {
    &self.convention
  }

  pub fn collection(&self) -> &DirectoryCollection {
    &self.dirs
  }
}
