use serde::Serialize;

use crate::consts::HEADER_PATTERN;
use crate::dirset::PatternSet;

/// The language of a source set's files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LanguageKind {
  Cpp,
  CHeader,
  Java,
  JvmResources,
}

impl LanguageKind {
  pub const ALL: [LanguageKind; 4] = [
    LanguageKind::Cpp,
    LanguageKind::CHeader,
    LanguageKind::Java,
    LanguageKind::JvmResources,
  ];

  /// Identifier used by build scripts.
  pub fn id(self) -> &'static str {
    match self {
      LanguageKind::Cpp => "cpp",
      LanguageKind::CHeader => "c_header",
      LanguageKind::Java => "java",
      LanguageKind::JvmResources => "resources",
    }
  }

  pub fn from_id(id: &str) -> Option<Self> {
    LanguageKind::ALL.into_iter().find(|kind| kind.id() == id)
  }

  /// Type name used in display names: `C++ source 'mylib:cpp'`.
  pub fn type_name(self) -> &'static str {
    match self {
      LanguageKind::Cpp => "C++ source",
      LanguageKind::CHeader => "C header",
      LanguageKind::Java => "Java source",
      LanguageKind::JvmResources => "JVM resources",
    }
  }

  /// Include patterns for files of this kind. Resources take everything.
  pub fn patterns(self) -> PatternSet {
    match self {
      LanguageKind::Cpp => PatternSet::new().include("**/*.cpp").include("**/*.c++"),
      LanguageKind::CHeader => PatternSet::new().include(HEADER_PATTERN),
      LanguageKind::Java => PatternSet::new().include("**/*.java"),
      LanguageKind::JvmResources => PatternSet::new(),
    }
  }

  pub fn is_header(self) -> bool {
    matches!(self, LanguageKind::CHeader)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::path::Path;

  #[test]
  fn cpp_accepts_both_extensions() {
    let matcher = LanguageKind::Cpp.patterns().compile().unwrap();
    assert!(matcher.matches(Path::new("a/main.cpp")));
    assert!(matcher.matches(Path::new("util.c++")));
    assert!(!matcher.matches(Path::new("util.h")));
  }

  #[test]
  fn ids_are_recognized() {
    for kind in LanguageKind::ALL {
      assert_eq!(LanguageKind::from_id(kind.id()), Some(kind));
    }
    assert_eq!(LanguageKind::from_id("rust"), None);
  }

  #[test]
  fn resources_accept_anything() {
    let matcher = LanguageKind::JvmResources.patterns().compile().unwrap();
    assert!(matcher.matches(Path::new("META-INF/services/x")));
  }
}
