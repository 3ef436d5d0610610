//! Implementation of the `srcmodel files` command.
//!
//! Materializes one source set, or a component's header tree, with the
//! file-system walker and prints the resulting files.

use std::path::Path;

use anyhow::{Context, Result};

use srcmodel_lib::walk::FsWalker;

use super::load_project;
use crate::output::{OutputFormat, print_info, print_json};

pub fn cmd_files(
  script: &Path,
  project_dir: Option<&Path>,
  component: &str,
  source_set: Option<&str>,
  output: OutputFormat,
) -> Result<()> {
  let project = load_project(script, project_dir)?;
  let target = project.require_component(component)?;

  let tree = match source_set {
    Some(name) => target
      .source_set(name)
      .with_context(|| format!("Component '{}' has no source set '{}'", component, name))?
      .source_tree(),
    None => target.header_files(),
  };

  let files = project
    .files(&tree, &FsWalker)
    .with_context(|| format!("Failed to list files for '{}'", component))?;

  if output.is_json() {
    return print_json(&files);
  }

  if files.is_empty() {
    print_info("No files found.");
    return Ok(());
  }
  for file in &files {
    let display = file.strip_prefix(project.root()).unwrap_or(file);
    println!("{}", display.display());
  }
  Ok(())
}
