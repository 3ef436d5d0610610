use std::collections::BTreeSet;

use thiserror::Error;
use tracing::debug;

use super::{BucketRole, ConfigurationBucket};
use crate::names::Names;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
  #[error("cannot add configuration '{name}' as a configuration with that name already exists")]
  DuplicateBucket { name: String },
}

/// The bucket namespace of one build.
///
/// Components are handed the registry by `&mut` reference when they are
/// constructed. It records names only; the buckets it creates belong to the
/// caller.
#[derive(Debug, Default)]
pub struct BucketRegistry {
  names: BTreeSet<String>,
}

impl BucketRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register `name` and return a fresh bucket with default flags.
  pub fn create(&mut self, name: impl Into<String>) -> Result<ConfigurationBucket, RegistryError> {
    let name = name.into();
    if !self.names.insert(name.clone()) {
      return Err(RegistryError::DuplicateBucket { name });
    }
    debug!(bucket = %name, "registered configuration bucket");
    Ok(ConfigurationBucket::new(name))
  }

  /// Register the bucket for `role` of the component called `names`.
  pub fn create_for_role(&mut self, names: &Names, role: BucketRole) -> Result<ConfigurationBucket, RegistryError> {
    Ok(self.create(names.with_suffix(role.suffix()))?.with_role(role))
  }

  /// Register one bucket per role, or none at all.
  ///
  /// Every name is checked before any is inserted, so a collision leaves the
  /// namespace exactly as it was.
  pub fn create_all(&mut self, names: &Names, roles: &[BucketRole]) -> Result<Vec<ConfigurationBucket>, RegistryError> {
    let mut pending: BTreeSet<String> = BTreeSet::new();
    for role in roles {
      let name = names.with_suffix(role.suffix());
      if self.names.contains(&name) || !pending.insert(name.clone()) {
        return Err(RegistryError::DuplicateBucket { name });
      }
    }

    roles.iter().map(|role| self.create_for_role(names, *role)).collect()
  }

  pub fn contains(&self, name: &str) -> bool {
    self.names.contains(name)
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.names.iter().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.names.len()
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }
}
