use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::bucket::BucketRole;
use crate::source_set::LanguageKind;

/// A source set every component of a kind gets at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRole {
  /// Source set name within the component.
  pub name: &'static str,
  /// Directory under `src/<component>/` used as the convention.
  pub dir: &'static str,
  pub kind: LanguageKind,
}

const CPP_SOURCE: SourceRole = SourceRole {
  name: "cpp",
  dir: "cpp",
  kind: LanguageKind::Cpp,
};

const PRIVATE_HEADERS: SourceRole = SourceRole {
  name: "headers",
  dir: "headers",
  kind: LanguageKind::CHeader,
};

const PUBLIC_HEADERS: SourceRole = SourceRole {
  name: "public",
  dir: "public",
  kind: LanguageKind::CHeader,
};

const JAVA_SOURCE: SourceRole = SourceRole {
  name: "java",
  dir: "java",
  kind: LanguageKind::Java,
};

const JVM_RESOURCES: SourceRole = SourceRole {
  name: "resources",
  dir: "resources",
  kind: LanguageKind::JvmResources,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
  CppApplication,
  CppLibrary,
  JvmLibrary,
}

impl ComponentKind {
  pub const ALL: [ComponentKind; 3] = [
    ComponentKind::CppApplication,
    ComponentKind::CppLibrary,
    ComponentKind::JvmLibrary,
  ];

  pub fn type_name(self) -> &'static str {
    match self {
      ComponentKind::CppApplication => "C++ application",
      ComponentKind::CppLibrary => "C++ library",
      ComponentKind::JvmLibrary => "JVM library",
    }
  }

  /// Identifier used by build scripts: `project.cpp_library(...)`.
  pub fn id(self) -> &'static str {
    match self {
      ComponentKind::CppApplication => "cpp_application",
      ComponentKind::CppLibrary => "cpp_library",
      ComponentKind::JvmLibrary => "jvm_library",
    }
  }

  pub fn source_roles(self) -> &'static [SourceRole] {
    match self {
      ComponentKind::CppApplication => &[CPP_SOURCE, PRIVATE_HEADERS],
      ComponentKind::CppLibrary => &[CPP_SOURCE, PRIVATE_HEADERS, PUBLIC_HEADERS],
      ComponentKind::JvmLibrary => &[JAVA_SOURCE, JVM_RESOURCES],
    }
  }

  /// Buckets created at construction, in creation order.
  pub fn bucket_roles(self) -> &'static [BucketRole] {
    match self {
      ComponentKind::CppApplication => &[BucketRole::Implementation, BucketRole::CompileClasspath],
      ComponentKind::CppLibrary | ComponentKind::JvmLibrary => &[
        BucketRole::Api,
        BucketRole::Implementation,
        BucketRole::CompileClasspath,
        BucketRole::ApiElements,
      ],
    }
  }
}

impl fmt::Display for ComponentKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.type_name())
  }
}

impl FromStr for ComponentKind {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ComponentKind::ALL
      .into_iter()
      .find(|kind| kind.id() == s)
      .ok_or_else(|| format!("unknown component kind '{}'", s))
  }
}
