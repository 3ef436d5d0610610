mod files;
mod info;
mod inspect;

use std::path::Path;

use anyhow::{Context, Result};

use srcmodel_lib::eval::{evaluate_script, evaluate_script_at};
use srcmodel_lib::project::Project;

pub use files::cmd_files;
pub use info::cmd_info;
pub use inspect::cmd_inspect;

/// Evaluate `script`, rooting the project at `project_dir` when one is given.
fn load_project(script: &Path, project_dir: Option<&Path>) -> Result<Project> {
  let result = match project_dir {
    Some(dir) => {
      let root = dunce::canonicalize(dir).with_context(|| format!("Invalid project directory: {}", dir.display()))?;
      evaluate_script_at(script, root)
    }
    None => evaluate_script(script),
  };
  result.with_context(|| format!("Failed to evaluate build script: {}", script.display()))
}
