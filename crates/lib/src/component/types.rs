use std::fmt;
use std::path::{Component as PathComponent, Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::ComponentKind;
use crate::bucket::{BucketRegistry, BucketRole, ConfigurationBucket, RegistryError};
use crate::consts::{CONVENTION_ROOT, HEADER_PATTERN};
use crate::deps::DependencySpecContainer;
use crate::dirset::{DirectoryCollection, DirectorySetView, FileTree, PatternSet};
use crate::names::{Names, capitalize};
use crate::property::{Property, PropertyError};
use crate::source_set::{LanguageKind, LanguageSourceSet};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComponentError {
  /// Raised through the bucket namespace: bucket names derive from the
  /// component name, so a second component with the same name collides.
  #[error("a component named '{name}' already exists (configuration '{bucket}' is already registered)")]
  DuplicateComponent { name: String, bucket: String },

  #[error("cannot derive a convention path for component '{name}': {reason}")]
  InvalidConventionPath { name: String, reason: &'static str },

  #[error("component '{component}' has no source set named '{name}'")]
  UnknownSourceSet { component: String, name: String },

  #[error("component '{component}' already has a source set named '{name}'")]
  DuplicateSourceSet { component: String, name: String },

  #[error("component '{component}' has no '{role}' configuration")]
  UnknownBucket { component: String, role: BucketRole },

  #[error(transparent)]
  Property(#[from] PropertyError),
}

/// `src/<component>/<dir>`, rejecting names that cannot form a single path
/// segment.
pub fn convention_path(component: &str, dir: &str) -> Result<PathBuf, ComponentError> {
  let invalid = |reason| ComponentError::InvalidConventionPath {
    name: component.to_string(),
    reason,
  };
  if component.trim().is_empty() {
    return Err(invalid("component name is empty"));
  }
  let mut segments = Path::new(component).components();
  match (segments.next(), segments.next()) {
    (Some(PathComponent::Normal(_)), None) => {}
    _ => return Err(invalid("component name must be a single path segment")),
  }
  if dir.trim().is_empty() {
    return Err(invalid("role directory is empty"));
  }
  Ok(Path::new(CONVENTION_ROOT).join(component).join(dir))
}

/// A language component and everything it owns.
#[derive(Debug, Clone)]
pub struct Component {
  name: String,
  kind: ComponentKind,
  names: Names,
  base_name: Property<String>,
  source_sets: Vec<LanguageSourceSet>,
  buckets: Vec<ConfigurationBucket>,
}

impl Component {
  /// Build a component of `kind`, registering its buckets in `registry`.
  ///
  /// Either the whole component is created or nothing is registered.
  pub fn new(name: impl Into<String>, kind: ComponentKind, registry: &mut BucketRegistry) -> Result<Self, ComponentError> {
    let name = name.into();

    // Validate every convention before touching the shared namespace.
    let source_sets = kind
      .source_roles()
      .iter()
      .map(|role| {
        let convention = convention_path(&name, role.dir)?;
        let view = DirectorySetView::new(DirectoryCollection::new(), convention);
        Ok(LanguageSourceSet::new(role.name, name.as_str(), role.kind, view))
      })
      .collect::<Result<Vec<_>, ComponentError>>()?;

    let names = Names::of(name.as_str());
    let mut buckets = registry
      .create_all(&names, kind.bucket_roles())
      .map_err(|err| match err {
        RegistryError::DuplicateBucket { name: bucket } => ComponentError::DuplicateComponent {
          name: name.clone(),
          bucket,
        },
      })?;

    for index in 0..buckets.len() {
      let parent = buckets[index]
        .role()
        .and_then(BucketRole::parent)
        .and_then(|parent| buckets.iter().find(|b| b.role() == Some(parent)))
        .cloned();
      if let Some(parent) = parent {
        buckets[index].extend_from(&parent);
      }
    }

    debug!(
      component = %name,
      kind = %kind,
      source_sets = source_sets.len(),
      buckets = buckets.len(),
      "created component"
    );

    Ok(Self {
      base_name: Property::new(format!("{}.baseName", name)),
      name,
      kind,
      names,
      source_sets,
      buckets,
    })
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn kind(&self) -> ComponentKind {
    self.kind
  }

  pub fn names(&self) -> &Names {
    &self.names
  }

  pub fn display_name(&self) -> String {
    format!("{} '{}'", self.kind.type_name(), self.name)
  }

  /// The base name, or the component name while none is set.
  pub fn base_name(&self) -> String {
    self.base_name.get_or(|| self.name.clone())
  }

  pub fn set_base_name(&self, base_name: impl Into<String>) -> Result<(), ComponentError> {
    Ok(self.base_name.set(base_name.into())?)
  }

  /// Freeze values the build graph is about to read.
  pub fn finalize(&self) {
    self.base_name.finalize_value();
  }

  pub fn source_sets(&self) -> &[LanguageSourceSet] {
    &self.source_sets
  }

  pub fn source_set(&self, name: &str) -> Option<&LanguageSourceSet> {
    self.source_sets.iter().find(|s| s.name() == name)
  }

  pub fn source_set_mut(&mut self, name: &str) -> Option<&mut LanguageSourceSet> {
    self.source_sets.iter_mut().find(|s| s.name() == name)
  }

  /// Like [`Self::source_set_mut`] but failing with a descriptive error.
  pub fn require_source_set(&mut self, name: &str) -> Result<&mut LanguageSourceSet, ComponentError> {
    let component = self.name.clone();
    self
      .source_set_mut(name)
      .ok_or_else(|| ComponentError::UnknownSourceSet {
        component,
        name: name.to_string(),
      })
  }

  /// Add a source set beyond the ones the kind creates, using the
  /// convention `src/<component>/<name>`.
  pub fn add_source_set(&mut self, name: &str, kind: LanguageKind) -> Result<&mut LanguageSourceSet, ComponentError> {
    let full_name = format!("{}{}", self.name, capitalize(name));
    if self.source_sets.iter().any(|s| s.name() == name || s.full_name() == full_name) {
      return Err(ComponentError::DuplicateSourceSet {
        component: self.name.clone(),
        name: name.to_string(),
      });
    }
    let convention = convention_path(&self.name, name)?;
    let view = DirectorySetView::new(DirectoryCollection::new(), convention);
    debug!(component = %self.name, source_set = %name, "added source set");
    self
      .source_sets
      .push(LanguageSourceSet::new(name, self.name.as_str(), kind, view));
    let index = self.source_sets.len() - 1;
    Ok(&mut self.source_sets[index])
  }

  pub fn buckets(&self) -> &[ConfigurationBucket] {
    &self.buckets
  }

  pub fn bucket(&self, role: BucketRole) -> Option<&ConfigurationBucket> {
    self.buckets.iter().find(|b| b.role() == Some(role))
  }

  pub fn bucket_mut(&mut self, role: BucketRole) -> Option<&mut ConfigurationBucket> {
    self.buckets.iter_mut().find(|b| b.role() == Some(role))
  }

  pub fn implementation_dependencies(&self) -> Option<&ConfigurationBucket> {
    self.bucket(BucketRole::Implementation)
  }

  /// Apply a configuration block to the declarations of the `role` bucket.
  pub fn dependencies(
    &mut self,
    role: BucketRole,
    action: impl FnOnce(&mut DependencySpecContainer),
  ) -> Result<&mut DependencySpecContainer, ComponentError> {
    let component = self.name.clone();
    let bucket = self
      .bucket_mut(role)
      .ok_or(ComponentError::UnknownBucket { component, role })?;
    Ok(bucket.dependencies_mut().configure(action))
  }

  /// Configure the private header directories.
  pub fn private_headers(&mut self, configure: impl FnOnce(&DirectoryCollection)) -> Result<(), ComponentError> {
    self.require_source_set("headers")?.source(configure);
    Ok(())
  }

  /// Configure the public header directories (libraries only).
  pub fn public_headers(&mut self, configure: impl FnOnce(&DirectoryCollection)) -> Result<(), ComponentError> {
    self.require_source_set("public")?.source(configure);
    Ok(())
  }

  /// All header directory views: private first, then public.
  pub fn header_dirs(&self) -> FileTree {
    FileTree::new(self.header_views(), PatternSet::new())
  }

  /// The header directories projected onto `**/*.h`.
  ///
  /// The returned tree holds views, not paths, so a tree obtained before a
  /// header root is added still sees it when materialized.
  pub fn header_files(&self) -> FileTree {
    FileTree::new(self.header_views(), PatternSet::new().include(HEADER_PATTERN))
  }

  fn header_views(&self) -> Vec<DirectorySetView> {
    self
      .source_sets
      .iter()
      .filter(|s| s.kind().is_header())
      .map(|s| s.source_dirs().clone())
      .collect()
  }
}

impl fmt::Display for Component {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.display_name())
  }
}
