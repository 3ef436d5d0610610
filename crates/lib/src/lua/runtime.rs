use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use mlua::prelude::*;

use crate::lua::globals;
use crate::project::Project;

/// Create a Lua VM with the `project` global bound to `project`.
pub fn create_runtime(project: Rc<RefCell<Project>>) -> LuaResult<Lua> {
  let lua = Lua::new();
  globals::register_globals(&lua, project)?;
  Ok(lua)
}

/// Load and execute the build script at `path`.
pub fn load_file(lua: &Lua, path: &Path) -> LuaResult<LuaValue> {
  let canonical_path = dunce::canonicalize(path)
    .map_err(|e| LuaError::external(format!("cannot canonicalize '{}': {}", path.display(), e)))?;
  let content = std::fs::read_to_string(&canonical_path)
    .map_err(|e| LuaError::external(format!("cannot read '{}': {}", canonical_path.display(), e)))?;

  lua
    .load(&content)
    .set_name(format!("@{}", canonical_path.display()))
    .eval::<LuaValue>()
}

/// Execute an in-memory chunk under `name`.
pub fn load_str(lua: &Lua, name: &str, source: &str) -> LuaResult<LuaValue> {
  lua.load(source).set_name(format!("={}", name)).eval::<LuaValue>()
}
