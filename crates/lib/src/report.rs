//! Serializable snapshots of a configured project.
//!
//! A report is what a collaborator sees when it pulls from the model: every
//! directory set resolved once, at the time the report is taken.

use std::path::PathBuf;

use serde::Serialize;

use crate::bucket::ConfigurationBucket;
use crate::component::{Component, ComponentKind};
use crate::deps::DependencySpecContainer;
use crate::project::Project;
use crate::source_set::{LanguageKind, LanguageSourceSet};
use crate::task::TaskRef;

#[derive(Debug, Serialize)]
pub struct ProjectReport {
  pub root: PathBuf,
  pub components: Vec<ComponentReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentReport {
  pub name: String,
  pub kind: ComponentKind,
  pub base_name: String,
  pub source_sets: Vec<SourceSetReport>,
  pub header_dirs: Vec<PathBuf>,
  pub buckets: Vec<ConfigurationBucket>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSetReport {
  pub name: String,
  pub full_name: String,
  pub display_name: String,
  pub kind: LanguageKind,
  pub roots: Vec<PathBuf>,
  /// False while the roots are the convention fallback.
  pub explicit: bool,
  pub generated: bool,
  pub may_have_sources: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub generator_task: Option<TaskRef>,
  pub build_dependencies: Vec<TaskRef>,
  pub dependencies: DependencySpecContainer,
}

impl From<&LanguageSourceSet> for SourceSetReport {
  fn from(set: &LanguageSourceSet) -> Self {
    Self {
      name: set.name().to_string(),
      full_name: set.full_name().to_string(),
      display_name: set.display_name().to_string(),
      kind: set.kind(),
      roots: set.source_dirs().resolve(),
      explicit: set.source_dirs().is_explicit(),
      generated: set.is_generated(),
      may_have_sources: set.may_have_sources(),
      generator_task: set.generator_task().cloned(),
      build_dependencies: set.build_dependencies(),
      dependencies: set.dependencies().clone(),
    }
  }
}

impl From<&Component> for ComponentReport {
  fn from(component: &Component) -> Self {
    Self {
      name: component.name().to_string(),
      kind: component.kind(),
      base_name: component.base_name(),
      source_sets: component.source_sets().iter().map(SourceSetReport::from).collect(),
      header_dirs: component.header_dirs().roots(),
      buckets: component.buckets().to_vec(),
    }
  }
}

impl From<&Project> for ProjectReport {
  fn from(project: &Project) -> Self {
    Self {
      root: project.root().to_path_buf(),
      components: project.components().iter().map(ComponentReport::from).collect(),
    }
  }
}
