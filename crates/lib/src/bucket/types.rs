use std::fmt;

use serde::Serialize;

use crate::deps::DependencySpecContainer;

/// The part a bucket plays for its component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BucketRole {
  /// Dependencies exposed to consumers of the component.
  Api,
  /// Dependencies needed to build the component but not exposed.
  Implementation,
  /// Resolvable view used to compile the component.
  CompileClasspath,
  /// Outgoing variant other components consume.
  ApiElements,
}

impl BucketRole {
  /// Suffix appended to the component name.
  pub fn suffix(self) -> &'static str {
    match self {
      BucketRole::Api => "api",
      BucketRole::Implementation => "implementation",
      BucketRole::CompileClasspath => "compileClasspath",
      BucketRole::ApiElements => "apiElements",
    }
  }

  /// Inverse of [`Self::suffix`].
  pub fn from_suffix(suffix: &str) -> Option<Self> {
    [
      BucketRole::Api,
      BucketRole::Implementation,
      BucketRole::CompileClasspath,
      BucketRole::ApiElements,
    ]
    .into_iter()
    .find(|role| role.suffix() == suffix)
  }

  pub fn can_be_consumed(self) -> bool {
    matches!(self, BucketRole::ApiElements)
  }

  pub fn can_be_resolved(self) -> bool {
    matches!(self, BucketRole::CompileClasspath)
  }

  /// Whether the bucket only collects declarations.
  pub fn is_declaration(self) -> bool {
    !self.can_be_consumed() && !self.can_be_resolved()
  }

  /// The role whose bucket this role's bucket inherits declarations from.
  pub fn parent(self) -> Option<BucketRole> {
    match self {
      BucketRole::Api => None,
      BucketRole::Implementation | BucketRole::ApiElements => Some(BucketRole::Api),
      BucketRole::CompileClasspath => Some(BucketRole::Implementation),
    }
  }

  pub fn description(self) -> &'static str {
    match self {
      BucketRole::Api => "API dependencies",
      BucketRole::Implementation => "Implementation only dependencies",
      BucketRole::CompileClasspath => "Compile classpath",
      BucketRole::ApiElements => "API elements for consumers",
    }
  }
}

impl fmt::Display for BucketRole {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.suffix())
  }
}

/// A named dependency bucket owned by one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationBucket {
  name: String,
  role: Option<BucketRole>,
  description: Option<String>,
  can_be_consumed: bool,
  can_be_resolved: bool,
  extends_from: Vec<String>,
  dependencies: DependencySpecContainer,
}

impl ConfigurationBucket {
  /// A bucket with no role: consumable and resolvable until told otherwise.
  pub(crate) fn new(name: String) -> Self {
    Self {
      name,
      role: None,
      description: None,
      can_be_consumed: true,
      can_be_resolved: true,
      extends_from: Vec::new(),
      dependencies: DependencySpecContainer::new(),
    }
  }

  /// Apply the flag policy and description of `role`.
  pub(crate) fn with_role(mut self, role: BucketRole) -> Self {
    self.role = Some(role);
    self.can_be_consumed = role.can_be_consumed();
    self.can_be_resolved = role.can_be_resolved();
    self.description = Some(role.description().to_string());
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn role(&self) -> Option<BucketRole> {
    self.role
  }

  pub fn description(&self) -> Option<&str> {
    self.description.as_deref()
  }

  pub fn can_be_consumed(&self) -> bool {
    self.can_be_consumed
  }

  pub fn can_be_resolved(&self) -> bool {
    self.can_be_resolved
  }

  /// Names of buckets whose declarations this bucket inherits.
  pub fn extends_from(&self) -> &[String] {
    &self.extends_from
  }

  pub fn extend_from(&mut self, parent: &ConfigurationBucket) {
    if parent.name != self.name && !self.extends_from.contains(&parent.name) {
      self.extends_from.push(parent.name.clone());
    }
  }

  pub fn dependencies(&self) -> &DependencySpecContainer {
    &self.dependencies
  }

  pub fn dependencies_mut(&mut self) -> &mut DependencySpecContainer {
    &mut self.dependencies
  }
}

impl fmt::Display for ConfigurationBucket {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "configuration '{}'", self.name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn declaration_roles_are_neither_consumable_nor_resolvable() {
    for role in [BucketRole::Api, BucketRole::Implementation] {
      let bucket = ConfigurationBucket::new("x".to_string()).with_role(role);
      assert!(!bucket.can_be_consumed(), "{} should not be consumable", role);
      assert!(!bucket.can_be_resolved(), "{} should not be resolvable", role);
      assert!(role.is_declaration());
    }
  }

  #[test]
  fn resolvable_and_consumable_roles() {
    let classpath = ConfigurationBucket::new("cp".to_string()).with_role(BucketRole::CompileClasspath);
    assert!(classpath.can_be_resolved());
    assert!(!classpath.can_be_consumed());

    let elements = ConfigurationBucket::new("el".to_string()).with_role(BucketRole::ApiElements);
    assert!(elements.can_be_consumed());
    assert!(!elements.can_be_resolved());
  }

  #[test]
  fn parents_follow_declaration_then_view_order() {
    assert_eq!(BucketRole::Api.parent(), None);
    assert_eq!(BucketRole::Implementation.parent(), Some(BucketRole::Api));
    assert_eq!(BucketRole::CompileClasspath.parent(), Some(BucketRole::Implementation));
    assert_eq!(BucketRole::ApiElements.parent(), Some(BucketRole::Api));
  }

  #[test]
  fn from_suffix_inverts_suffix() {
    assert_eq!(BucketRole::from_suffix("implementation"), Some(BucketRole::Implementation));
    assert_eq!(BucketRole::from_suffix("compileClasspath"), Some(BucketRole::CompileClasspath));
    assert_eq!(BucketRole::from_suffix("runtimeOnly"), None);
  }

  #[test]
  fn extend_from_skips_self_and_repeats() {
    let api = ConfigurationBucket::new("libApi".to_string());
    let mut implementation = ConfigurationBucket::new("libImplementation".to_string());
    let self_ref = implementation.clone();

    implementation.extend_from(&api);
    implementation.extend_from(&api);
    implementation.extend_from(&self_ref);

    assert_eq!(implementation.extends_from(), ["libApi".to_string()]);
  }
}
