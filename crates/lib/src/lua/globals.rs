//! The `project` global table.
//!
//! - `project.dir` - absolute project root
//! - `project.cpp_application(name [, configure])`
//! - `project.cpp_library(name [, configure])`
//! - `project.jvm_library(name [, configure])`
//! - `project.component(name)` - handle to an already declared component
//!
//! Constructors return a component handle and, when given a function, call
//! it with that handle before returning.

use std::cell::RefCell;
use std::rc::Rc;

use mlua::prelude::*;

use super::handles::ComponentHandle;
use crate::component::ComponentKind;
use crate::project::Project;

pub fn register_globals(lua: &Lua, project: Rc<RefCell<Project>>) -> LuaResult<()> {
  let table = lua.create_table()?;
  table.set("dir", project.borrow().root().to_string_lossy().into_owned())?;

  for kind in ComponentKind::ALL {
    let project = Rc::clone(&project);
    let constructor = lua.create_function(move |_, (name, configure): (String, Option<LuaFunction>)| {
      project
        .borrow_mut()
        .add_component(&name, kind)
        .map_err(LuaError::external)?;

      let handle = ComponentHandle::new(Rc::clone(&project), name);
      if let Some(configure) = configure {
        configure.call::<()>(handle.clone())?;
      }
      Ok(handle)
    })?;
    table.set(kind.id(), constructor)?;
  }

  let lookup_project = Rc::clone(&project);
  let lookup = lua.create_function(move |_, name: String| {
    lookup_project
      .borrow()
      .require_component(&name)
      .map_err(LuaError::external)?;
    Ok(ComponentHandle::new(Rc::clone(&lookup_project), name))
  })?;
  table.set("component", lookup)?;

  lua.globals().set("project", table)?;
  Ok(())
}
