//! Shared helpers for front-end tests.

use std::cell::RefCell;
use std::rc::Rc;

use mlua::prelude::*;
use srcmodel_lib::lua::runtime::create_runtime;
use srcmodel_lib::project::Project;

/// A Lua VM bound to an empty project rooted at `/work`.
pub fn create_test_runtime() -> LuaResult<(Lua, Rc<RefCell<Project>>)> {
  let project = Rc::new(RefCell::new(Project::new("/work")));
  let lua = create_runtime(Rc::clone(&project))?;
  Ok((lua, project))
}
