//! File-system walking.
//!
//! The object model only ever produces root directories and include
//! patterns. Turning those into concrete files is the job of a
//! [`FileWalker`]; [`FsWalker`] is the default, `walkdir` backed one.

use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use crate::dirset::{FileTreeError, PatternMatcher};

pub trait FileWalker {
  /// Return every file under `root` whose path relative to `root` matches.
  ///
  /// A missing root is not an error: a configured or conventional directory
  /// that does not exist simply contributes no files.
  fn walk(&self, root: &Path, patterns: &PatternMatcher) -> Result<Vec<PathBuf>, FileTreeError>;
}

/// Walks the real file system, following symlinks, in file-name order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWalker;

impl FileWalker for FsWalker {
  fn walk(&self, root: &Path, patterns: &PatternMatcher) -> Result<Vec<PathBuf>, FileTreeError> {
    if !root.is_dir() {
      trace!(root = %root.display(), "root does not exist, skipping");
      return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
      let entry = entry.map_err(|source| FileTreeError::Walk {
        root: root.to_path_buf(),
        source,
      })?;
      if !entry.file_type().is_file() {
        continue;
      }
      let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
      if patterns.matches(relative) {
        files.push(entry.into_path());
      }
    }
    Ok(files)
  }
}
