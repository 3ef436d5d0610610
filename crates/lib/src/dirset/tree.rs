use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use thiserror::Error;
use tracing::debug;

use super::DirectorySetView;
use crate::walk::FileWalker;

#[derive(Debug, Error)]
pub enum FileTreeError {
  #[error("invalid include pattern '{pattern}': {source}")]
  InvalidPattern {
    pattern: String,
    #[source]
    source: glob::PatternError,
  },

  #[error("failed to walk '{}': {source}", .root.display())]
  Walk {
    root: PathBuf,
    #[source]
    source: walkdir::Error,
  },
}

/// Include patterns applied to paths relative to each walked root.
///
/// An empty set includes everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
  includes: Vec<String>,
}

impl PatternSet {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn include(mut self, pattern: impl Into<String>) -> Self {
    self.includes.push(pattern.into());
    self
  }

  pub fn includes(&self) -> &[String] {
    &self.includes
  }

  pub fn compile(&self) -> Result<PatternMatcher, FileTreeError> {
    let patterns = self
      .includes
      .iter()
      .map(|p| {
        Pattern::new(p).map_err(|source| FileTreeError::InvalidPattern {
          pattern: p.clone(),
          source,
        })
      })
      .collect::<Result<Vec<_>, _>>()?;
    Ok(PatternMatcher { patterns })
  }
}

/// A compiled [`PatternSet`].
#[derive(Debug, Clone)]
pub struct PatternMatcher {
  patterns: Vec<Pattern>,
}

impl PatternMatcher {
  const OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
  };

  pub fn matches(&self, relative: &Path) -> bool {
    self.patterns.is_empty()
      || self
        .patterns
        .iter()
        .any(|p| p.matches_path_with(relative, Self::OPTIONS))
  }
}

/// A union of directory views filtered by a pattern set.
///
/// Holds views, not paths: both [`FileTree::roots`] and [`FileTree::files`]
/// re-resolve every view on each call.
#[derive(Debug, Clone)]
pub struct FileTree {
  views: Vec<DirectorySetView>,
  patterns: PatternSet,
}

impl FileTree {
  pub fn new(views: Vec<DirectorySetView>, patterns: PatternSet) -> Self {
    Self { views, patterns }
  }

  pub fn empty() -> Self {
    Self::new(Vec::new(), PatternSet::new())
  }

  pub fn patterns(&self) -> &PatternSet {
    &self.patterns
  }

  pub fn views(&self) -> &[DirectorySetView] {
    &self.views
  }

  /// Current roots of all views, first occurrence wins.
  pub fn roots(&self) -> Vec<PathBuf> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    self
      .views
      .iter()
      .flat_map(DirectorySetView::resolve)
      .filter(|root| seen.insert(root.clone()))
      .collect()
  }

  /// Materialize the tree. Relative roots are joined onto `base_dir`.
  pub fn files(&self, walker: &dyn FileWalker, base_dir: &Path) -> Result<Vec<PathBuf>, FileTreeError> {
    let matcher = self.patterns.compile()?;
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut files: Vec<PathBuf> = Vec::new();
    for root in self.roots() {
      let root = base_dir.join(root);
      for file in walker.walk(&root, &matcher)? {
        if seen.insert(file.clone()) {
          files.push(file);
        }
      }
    }
    debug!(
      roots = self.views.len(),
      files = files.len(),
      patterns = ?self.patterns.includes(),
      "materialized file tree"
    );
    Ok(files)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dirset::DirectoryCollection;

  mod pattern_set {
    use super::*;

    #[test]
    fn recursive_pattern_matches_top_level_and_nested() {
      let matcher = PatternSet::new().include("**/*.h").compile().unwrap();

      assert!(matcher.matches(Path::new("api.h")));
      assert!(matcher.matches(Path::new("nested/deeper/api.h")));
      assert!(!matcher.matches(Path::new("api.hpp")));
      assert!(!matcher.matches(Path::new("nested/api.cpp")));
    }

    #[test]
    fn single_star_does_not_cross_directories() {
      let matcher = PatternSet::new().include("*.h").compile().unwrap();

      assert!(matcher.matches(Path::new("api.h")));
      assert!(!matcher.matches(Path::new("nested/api.h")));
    }

    #[test]
    fn empty_set_matches_everything() {
      let matcher = PatternSet::new().compile().unwrap();
      assert!(matcher.matches(Path::new("anything/at/all.txt")));
    }

    #[test]
    fn invalid_pattern_is_reported() {
      let err = PatternSet::new().include("[unclosed").compile().unwrap_err();
      assert!(matches!(err, FileTreeError::InvalidPattern { ref pattern, .. } if pattern == "[unclosed"));
    }
  }

  mod file_tree {
    use super::*;

    #[test]
    fn roots_union_views_without_duplicates() {
      let private = DirectoryCollection::new();
      private.add("include").add("shared");
      let public = DirectoryCollection::new();
      public.add("shared");

      let tree = FileTree::new(
        vec![
          DirectorySetView::new(private, "src/lib/headers"),
          DirectorySetView::new(public, "src/lib/public"),
          DirectorySetView::new(DirectoryCollection::new(), "src/lib/extra"),
        ],
        PatternSet::new(),
      );

      assert_eq!(
        tree.roots(),
        vec![
          PathBuf::from("include"),
          PathBuf::from("shared"),
          PathBuf::from("src/lib/extra"),
        ]
      );
    }

    /// Walker that reports the same files under every root.
    struct OverlappingWalker;

    impl FileWalker for OverlappingWalker {
      fn walk(&self, root: &Path, _patterns: &PatternMatcher) -> Result<Vec<PathBuf>, FileTreeError> {
        let shared = PathBuf::from("/work/shared/common.h");
        Ok(vec![shared.clone(), root.join("own.h"), shared])
      }
    }

    #[test]
    fn files_keep_first_occurrence_across_roots() {
      let dirs = DirectoryCollection::new();
      dirs.add("a").add("b").add("a");
      let tree = FileTree::new(
        vec![DirectorySetView::new(dirs, "unused")],
        PatternSet::new().include("**/*.h"),
      );

      let files = tree.files(&OverlappingWalker, Path::new("/work")).unwrap();

      assert_eq!(
        files,
        vec![
          PathBuf::from("/work/shared/common.h"),
          PathBuf::from("/work/a/own.h"),
          PathBuf::from("/work/b/own.h"),
        ]
      );
    }

    #[test]
    fn empty_tree_has_no_roots() {
      assert!(FileTree::empty().roots().is_empty());
    }
  }
}
