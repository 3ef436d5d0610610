//! Project scope.
//!
//! A [`Project`] is one build's worth of state: the project root, the bucket
//! namespace shared by every component, and the components themselves. It
//! is created when a build script is evaluated and dropped when the build is
//! done, taking its namespace with it.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::bucket::BucketRegistry;
use crate::component::{Component, ComponentError, ComponentKind};
use crate::consts::PROJECT_DIR_ENV;
use crate::dirset::{FileTree, FileTreeError};
use crate::walk::FileWalker;

#[derive(Debug, Error)]
pub enum ProjectError {
  #[error(transparent)]
  Component(#[from] ComponentError),

  #[error("project has no component named '{0}'")]
  UnknownComponent(String),

  #[error(transparent)]
  FileTree(#[from] FileTreeError),
}

#[derive(Debug)]
pub struct Project {
  root: PathBuf,
  registry: BucketRegistry,
  components: Vec<Component>,
}

impl Project {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      registry: BucketRegistry::new(),
      components: Vec::new(),
    }
  }

  /// Directory that relative source roots are resolved against.
  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn registry(&self) -> &BucketRegistry {
    &self.registry
  }

  pub fn add_component(&mut self, name: &str, kind: ComponentKind) -> Result<&mut Component, ProjectError> {
    let component = Component::new(name, kind, &mut self.registry)?;
    info!(component = %name, kind = %kind, "declared component");
    self.components.push(component);
    let index = self.components.len() - 1;
    Ok(&mut self.components[index])
  }

  pub fn components(&self) -> &[Component] {
    &self.components
  }

  pub fn component(&self, name: &str) -> Option<&Component> {
    self.components.iter().find(|c| c.name() == name)
  }

  pub fn component_mut(&mut self, name: &str) -> Option<&mut Component> {
    self.components.iter_mut().find(|c| c.name() == name)
  }

  pub fn require_component(&self, name: &str) -> Result<&Component, ProjectError> {
    self
      .component(name)
      .ok_or_else(|| ProjectError::UnknownComponent(name.to_string()))
  }

  pub fn require_component_mut(&mut self, name: &str) -> Result<&mut Component, ProjectError> {
    self
      .component_mut(name)
      .ok_or_else(|| ProjectError::UnknownComponent(name.to_string()))
  }

  /// Freeze every component. Called once configuration is over.
  pub fn finalize(&self) {
    for component in &self.components {
      component.finalize();
    }
  }

  /// Materialize `tree` relative to the project root.
  pub fn files(&self, tree: &FileTree, walker: &dyn FileWalker) -> Result<Vec<PathBuf>, ProjectError> {
    Ok(tree.files(walker, &self.root)?)
  }
}

/// The project root for a build script: `SRCMODEL_PROJECT_DIR` when set,
/// otherwise the directory containing the script.
pub fn project_root(script: &Path) -> io::Result<PathBuf> {
  if let Ok(dir) = std::env::var(PROJECT_DIR_ENV)
    && !dir.is_empty()
  {
    return dunce::canonicalize(dir);
  }

  let parent = match script.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };
  dunce::canonicalize(parent)
}
