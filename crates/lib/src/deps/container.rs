use serde::Serialize;

use super::{DependencyError, DependencySpec};

/// Declared dependencies in declaration order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencySpecContainer {
  specs: Vec<DependencySpec>,
}

impl DependencySpecContainer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add(&mut self, spec: DependencySpec) -> &mut Self {
    self.specs.push(spec);
    self
  }

  pub fn project(&mut self, path: impl Into<String>) -> &mut Self {
    self.add(DependencySpec::project(path))
  }

  pub fn library(&mut self, name: impl Into<String>) -> &mut Self {
    self.add(DependencySpec::library(name))
  }

  pub fn module(&mut self, notation: &str) -> Result<&mut Self, DependencyError> {
    let spec = DependencySpec::module(notation)?;
    Ok(self.add(spec))
  }

  /// Apply a configuration block to this container.
  pub fn configure(&mut self, action: impl FnOnce(&mut DependencySpecContainer)) -> &mut Self {
    action(self);
    self
  }

  pub fn all(&self) -> &[DependencySpec] {
    &self.specs
  }

  pub fn iter(&self) -> std::slice::Iter<'_, DependencySpec> {
    self.specs.iter()
  }

  pub fn len(&self) -> usize {
    self.specs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.specs.is_empty()
  }
}

impl Extend<DependencySpec> for DependencySpecContainer {
  fn extend<I: IntoIterator<Item = DependencySpec>>(&mut self, iter: I) {
    self.specs.extend(iter);
  }
}

impl<'a> IntoIterator for &'a DependencySpecContainer {
  type Item = &'a DependencySpec;
  type IntoIter = std::slice::Iter<'a, DependencySpec>;

  fn into_iter(self) -> Self::IntoIter {
    self.specs.iter()
  }
}
