//! Build script evaluation.
//!
//! [`evaluate_script`] runs a Lua build script against a fresh [`Project`]
//! and hands the configured project back. Evaluation is the configuration
//! phase: once it returns, every component is finalized and read-only as far
//! as the build graph is concerned.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use mlua::prelude::*;
use tracing::{debug, info};

use crate::lua::runtime;
use crate::project::{Project, project_root};

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
  #[error("lua error: {0}")]
  Lua(#[from] LuaError),

  #[error("cannot determine project root for '{}': {source}", .script.display())]
  ProjectRoot {
    script: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// Evaluate the build script at `path`. The project root comes from
/// [`project_root`].
pub fn evaluate_script(path: &Path) -> Result<Project, EvalError> {
  let root = project_root(path).map_err(|source| EvalError::ProjectRoot {
    script: path.to_path_buf(),
    source,
  })?;
  evaluate_script_at(path, root)
}

/// Evaluate the build script at `path` against an explicit project root.
pub fn evaluate_script_at(path: &Path, root: impl Into<PathBuf>) -> Result<Project, EvalError> {
  let root = root.into();
  info!(script = %path.display(), root = %root.display(), "evaluating build script");
  evaluate_with(root, |lua| runtime::load_file(lua, path).map(|_| ()))
}

/// Evaluate an in-memory script against a project rooted at `root`.
pub fn evaluate_str(name: &str, source: &str, root: impl Into<PathBuf>) -> Result<Project, EvalError> {
  evaluate_with(root.into(), |lua| runtime::load_str(lua, name, source).map(|_| ()))
}

fn evaluate_with(root: PathBuf, run: impl FnOnce(&Lua) -> LuaResult<()>) -> Result<Project, EvalError> {
  let project = Rc::new(RefCell::new(Project::new(root.clone())));
  {
    let lua = runtime::create_runtime(Rc::clone(&project))?;
    run(&lua)?;
  }

  // Dropping the VM releases every handle; fall back to swapping the project
  // out if a handle somehow outlived it.
  let project = match Rc::try_unwrap(project) {
    Ok(cell) => cell.into_inner(),
    Err(shared) => shared.replace(Project::new(root)),
  };

  project.finalize();
  debug!(components = project.components().len(), "build script evaluated");
  Ok(project)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bucket::BucketRole;
  use crate::task::TaskRef;

  #[test]
  fn declares_and_configures_components() {
    let project = evaluate_str(
      "build.lua",
      r#"
        local lib = project.cpp_library("mylib")
        lib:set_base_name("my")
        lib:private_headers(function(dirs) dirs:from("include", "gen/include") end)
        lib:source_set("cpp"):built_by(":generateSources")
        lib:dependencies("implementation", function(deps)
          deps:project(":utils", { library = "core" })
          deps:module("org.zlib:zlib:1.3")
        end)
      "#,
      "/work",
    )
    .unwrap();

    let lib = project.require_component("mylib").unwrap();
    assert_eq!(lib.base_name(), "my");
    assert_eq!(
      lib.source_set("headers").unwrap().source_dirs().resolve(),
      vec![PathBuf::from("include"), PathBuf::from("gen/include")]
    );

    let cpp = lib.source_set("cpp").unwrap();
    assert!(cpp.is_generated());
    assert_eq!(cpp.build_dependencies(), vec![TaskRef::from(":generateSources")]);

    let implementation = lib.bucket(BucketRole::Implementation).unwrap();
    let rendered: Vec<String> = implementation.dependencies().iter().map(ToString::to_string).collect();
    assert_eq!(
      rendered,
      vec!["project ':utils' library 'core'", "module 'org.zlib:zlib:1.3'"]
    );
  }

  #[test]
  fn duplicate_component_is_a_lua_error() {
    let err = evaluate_str(
      "build.lua",
      r#"
        project.cpp_library("mylib")
        project.jvm_library("mylib")
      "#,
      "/work",
    )
    .unwrap_err();

    assert!(
      err.to_string().contains("a component named 'mylib' already exists"),
      "unexpected error: {}",
      err
    );
  }

  #[test]
  fn base_name_is_final_after_evaluation() {
    let project = evaluate_str("build.lua", r#"project.cpp_application("app")"#, "/work").unwrap();
    let app = project.require_component("app").unwrap();

    assert!(app.set_base_name("late").is_err());
    assert_eq!(app.base_name(), "app");
  }
}
