use std::fmt;

use crate::deps::DependencySpecContainer;
use crate::dirset::{DirectoryCollection, DirectorySetView, FileTree};
use crate::names::capitalize;
use crate::task::{TaskRef, extend_unique};

use super::LanguageKind;

/// One named collection of inputs for one component.
#[derive(Debug, Clone)]
pub struct LanguageSourceSet {
  name: String,
  parent_name: String,
  full_name: String,
  display_name: String,
  kind: LanguageKind,
  source: DirectorySetView,
  dependencies: DependencySpecContainer,
  built_by: Vec<TaskRef>,
  generated: bool,
  generator_task: Option<TaskRef>,
}

impl LanguageSourceSet {
  pub fn new(name: impl Into<String>, parent_name: impl Into<String>, kind: LanguageKind, source: DirectorySetView) -> Self {
    let name = name.into();
    let parent_name = parent_name.into();
    Self {
      full_name: format!("{}{}", parent_name, capitalize(&name)),
      display_name: format!("{} '{}:{}'", kind.type_name(), parent_name, name),
      name,
      parent_name,
      kind,
      source,
      dependencies: DependencySpecContainer::new(),
      built_by: Vec::new(),
      generated: false,
      generator_task: None,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn parent_name(&self) -> &str {
    &self.parent_name
  }

  /// `parent` + capitalized `name`, unique within the parent's namespace.
  pub fn full_name(&self) -> &str {
    &self.full_name
  }

  pub fn display_name(&self) -> &str {
    &self.display_name
  }

  pub fn kind(&self) -> LanguageKind {
    self.kind
  }

  /// Configure the explicit source directories.
  pub fn source(&mut self, configure: impl FnOnce(&DirectoryCollection)) -> &mut Self {
    configure(self.source.collection());
    self
  }

  pub fn source_dirs(&self) -> &DirectorySetView {
    &self.source
  }

  /// The source directories filtered to files of this set's kind.
  pub fn source_tree(&self) -> FileTree {
    FileTree::new(vec![self.source.clone()], self.kind.patterns())
  }

  /// Record upstream tasks that produce this source set. Marks the set as
  /// generated: authored inputs never need a producing task.
  pub fn built_by<I, T>(&mut self, tasks: I) -> &mut Self
  where
    I: IntoIterator<Item = T>,
    T: Into<TaskRef>,
  {
    self.generated = true;
    extend_unique(&mut self.built_by, tasks.into_iter().map(Into::into));
    self
  }

  /// Associate the canonical generator task. Adds no build dependency.
  pub fn generated_by(&mut self, task: impl Into<TaskRef>) -> &mut Self {
    self.generator_task = Some(task.into());
    self
  }

  pub fn generator_task(&self) -> Option<&TaskRef> {
    self.generator_task.as_ref()
  }

  pub fn is_generated(&self) -> bool {
    self.generated
  }

  /// True if the set is generated or has explicitly configured directories.
  ///
  /// The convention directory is never consulted: whether it exists is for
  /// the file walker to find out.
  pub fn may_have_sources(&self) -> bool {
    self.generated || self.source.is_explicit()
  }

  /// Tasks that must run before this set's files are available: those given
  /// to [`Self::built_by`] followed by those recorded on the directories.
  pub fn build_dependencies(&self) -> Vec<TaskRef> {
    let mut tasks = self.built_by.clone();
    extend_unique(&mut tasks, self.source.collection().build_dependencies());
    tasks
  }

  pub fn dependencies(&self) -> &DependencySpecContainer {
    &self.dependencies
  }

  pub fn dependencies_mut(&mut self) -> &mut DependencySpecContainer {
    &mut self.dependencies
  }

  /// Apply a configuration block to the dependency declarations.
  pub fn configure_dependencies(
    &mut self,
    action: impl FnOnce(&mut DependencySpecContainer),
  ) -> &mut DependencySpecContainer {
    self.dependencies.configure(action)
  }
}

impl fmt::Display for LanguageSourceSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.display_name)
  }
}
