//! Userdata handles exposed to build scripts.
//!
//! Handles carry names, not references: every call looks its target up in
//! the shared [`Project`] and releases the borrow before any Lua callback
//! runs, so configuration blocks are free to reach back into the project.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use mlua::prelude::*;

use crate::bucket::BucketRole;
use crate::component::Component;
use crate::deps::{DependencySpec, DependencySpecContainer};
use crate::dirset::DirectoryCollection;
use crate::project::Project;
use crate::source_set::{LanguageKind, LanguageSourceSet};
use crate::task::TaskRef;

fn path_strings(paths: impl IntoIterator<Item = impl AsRef<Path>>) -> Vec<String> {
  paths
    .into_iter()
    .map(|p| p.as_ref().to_string_lossy().into_owned())
    .collect()
}

/// Run `configure` against a fresh dependency block and return what it
/// declared.
fn collect_dependencies(lua: &Lua, configure: LuaFunction) -> LuaResult<DependencySpecContainer> {
  let block = lua.create_userdata(DependencySpecContainer::new())?;
  configure.call::<()>(&block)?;
  block.take::<DependencySpecContainer>()
}

#[derive(Clone)]
pub struct ComponentHandle {
  project: Rc<RefCell<Project>>,
  name: String,
}

impl ComponentHandle {
  pub fn new(project: Rc<RefCell<Project>>, name: String) -> Self {
    Self { project, name }
  }

  fn with<R>(&self, f: impl FnOnce(&Component) -> LuaResult<R>) -> LuaResult<R> {
    let project = self.project.borrow();
    let component = project.require_component(&self.name).map_err(LuaError::external)?;
    f(component)
  }

  fn with_mut<R>(&self, f: impl FnOnce(&mut Component) -> LuaResult<R>) -> LuaResult<R> {
    let mut project = self.project.borrow_mut();
    let component = project
      .require_component_mut(&self.name)
      .map_err(LuaError::external)?;
    f(component)
  }

  fn source_set(&self, name: &str) -> LuaResult<SourceSetHandle> {
    self.with(|c| {
      if c.source_set(name).is_none() {
        return Err(LuaError::external(format!(
          "component '{}' has no source set named '{}'",
          c.name(),
          name
        )));
      }
      Ok(())
    })?;
    Ok(SourceSetHandle {
      project: Rc::clone(&self.project),
      component: self.name.clone(),
      name: name.to_string(),
    })
  }
}

impl LuaUserData for ComponentHandle {
  fn add_fields<F: LuaUserDataFields<Self>>(fields: &mut F) {
    fields.add_field_method_get("name", |_, this| Ok(this.name.clone()));
    fields.add_field_method_get("kind", |_, this| this.with(|c| Ok(c.kind().id())));
    fields.add_field_method_get("base_name", |_, this| this.with(|c| Ok(c.base_name())));
  }

  fn add_methods<M: LuaUserDataMethods<Self>>(methods: &mut M) {
    methods.add_method("set_base_name", |_, this, base_name: String| {
      this.with(|c| c.set_base_name(base_name).map_err(LuaError::external))
    });

    methods.add_method("source_set", |_, this, name: String| this.source_set(&name));

    methods.add_method("add_source_set", |_, this, (name, kind): (String, String)| {
      let kind = LanguageKind::from_id(&kind)
        .ok_or_else(|| LuaError::external(format!("unknown source set kind '{}'", kind)))?;
      this.with_mut(|c| c.add_source_set(&name, kind).map(|_| ()).map_err(LuaError::external))?;
      this.source_set(&name)
    });

    methods.add_method("private_headers", |_, this, configure: LuaFunction| {
      let dirs = this.source_set("headers")?.directories()?;
      configure.call::<()>(dirs)
    });

    methods.add_method("public_headers", |_, this, configure: LuaFunction| {
      let dirs = this.source_set("public")?.directories()?;
      configure.call::<()>(dirs)
    });

    methods.add_method("dependencies", |lua, this, (role, configure): (String, LuaFunction)| {
      let role = BucketRole::from_suffix(&role)
        .ok_or_else(|| LuaError::external(format!("unknown configuration role '{}'", role)))?;
      let declared = collect_dependencies(lua, configure)?;
      this.with_mut(|c| {
        c.dependencies(role, |deps| deps.extend(declared.all().iter().cloned()))
          .map(|_| ())
          .map_err(LuaError::external)
      })
    });

    methods.add_method("header_dirs", |_, this, ()| {
      this.with(|c| Ok(path_strings(c.header_dirs().roots())))
    });

    methods.add_method("source_sets", |_, this, ()| {
      this.with(|c| Ok(c.source_sets().iter().map(|s| s.name().to_string()).collect::<Vec<_>>()))
    });
  }
}

#[derive(Clone)]
pub struct SourceSetHandle {
  project: Rc<RefCell<Project>>,
  component: String,
  name: String,
}

impl SourceSetHandle {
  fn with<R>(&self, f: impl FnOnce(&LanguageSourceSet) -> R) -> LuaResult<R> {
    let project = self.project.borrow();
    let component = project
      .require_component(&self.component)
      .map_err(LuaError::external)?;
    let set = component.source_set(&self.name).ok_or_else(|| {
      LuaError::external(format!(
        "component '{}' has no source set named '{}'",
        self.component, self.name
      ))
    })?;
    Ok(f(set))
  }

  fn with_mut<R>(&self, f: impl FnOnce(&mut LanguageSourceSet) -> R) -> LuaResult<R> {
    let mut project = self.project.borrow_mut();
    let component = project
      .require_component_mut(&self.component)
      .map_err(LuaError::external)?;
    let set = component.require_source_set(&self.name).map_err(LuaError::external)?;
    Ok(f(set))
  }

  /// A handle on the backing directory collection, shared with the set.
  fn directories(&self) -> LuaResult<DirectoryCollection> {
    self.with(|s| s.source_dirs().collection().clone())
  }
}

impl LuaUserData for SourceSetHandle {
  fn add_fields<F: LuaUserDataFields<Self>>(fields: &mut F) {
    fields.add_field_method_get("name", |_, this| Ok(this.name.clone()));
    fields.add_field_method_get("full_name", |_, this| this.with(|s| s.full_name().to_string()));
    fields.add_field_method_get("display_name", |_, this| {
      this.with(|s| s.display_name().to_string())
    });
  }

  fn add_methods<M: LuaUserDataMethods<Self>>(methods: &mut M) {
    methods.add_method("source", |_, this, configure: LuaFunction| {
      let dirs = this.directories()?;
      configure.call::<()>(dirs)
    });

    methods.add_method("built_by", |_, this, tasks: LuaVariadic<String>| {
      this.with_mut(|s| {
        s.built_by(tasks.iter().map(|t| TaskRef::new(t.as_str())));
      })
    });

    methods.add_method("generated_by", |_, this, task: String| {
      this.with_mut(|s| {
        s.generated_by(task);
      })
    });

    methods.add_method("generator_task", |_, this, ()| {
      this.with(|s| s.generator_task().map(|t| t.path().to_string()))
    });

    methods.add_method("is_generated", |_, this, ()| this.with(LanguageSourceSet::is_generated));

    methods.add_method("may_have_sources", |_, this, ()| {
      this.with(LanguageSourceSet::may_have_sources)
    });

    methods.add_method("resolve", |_, this, ()| {
      this.with(|s| path_strings(s.source_dirs().resolve()))
    });

    methods.add_method("dependencies", |lua, this, configure: LuaFunction| {
      let declared = collect_dependencies(lua, configure)?;
      this.with_mut(|s| {
        s.configure_dependencies(|deps| deps.extend(declared.all().iter().cloned()));
      })
    });
  }
}

impl LuaUserData for DirectoryCollection {
  fn add_methods<M: LuaUserDataMethods<Self>>(methods: &mut M) {
    methods.add_method("from", |_, this, roots: LuaVariadic<String>| {
      this.add_all(roots.iter());
      Ok(())
    });

    methods.add_method("set_from", |_, this, roots: Vec<String>| {
      this.set_from(roots);
      Ok(())
    });

    methods.add_method("clear", |_, this, ()| {
      this.clear();
      Ok(())
    });

    methods.add_method("built_by", |_, this, tasks: LuaVariadic<String>| {
      this.built_by(tasks.iter().map(|t| TaskRef::new(t.as_str())));
      Ok(())
    });

    methods.add_method("roots", |_, this, ()| Ok(path_strings(this.roots())));

    methods.add_method("is_empty", |_, this, ()| Ok(this.is_empty()));
  }
}

/// Options accepted after the target: `{ scope = "api", library = "core" }`.
fn apply_options(mut spec: DependencySpec, options: Option<LuaTable>) -> LuaResult<DependencySpec> {
  if let Some(options) = options {
    if let Some(library) = options.get::<Option<String>>("library")? {
      spec = spec.with_library(library);
    }
    if let Some(scope) = options.get::<Option<String>>("scope")? {
      spec = spec.with_scope(scope);
    }
  }
  Ok(spec)
}

impl LuaUserData for DependencySpecContainer {
  fn add_methods<M: LuaUserDataMethods<Self>>(methods: &mut M) {
    methods.add_method_mut("project", |_, this, (path, options): (String, Option<LuaTable>)| {
      this.add(apply_options(DependencySpec::project(path), options)?);
      Ok(())
    });

    methods.add_method_mut("library", |_, this, (name, options): (String, Option<LuaTable>)| {
      this.add(apply_options(DependencySpec::library(name), options)?);
      Ok(())
    });

    methods.add_method_mut("module", |_, this, (notation, options): (String, Option<LuaTable>)| {
      let spec = DependencySpec::module(&notation).map_err(LuaError::external)?;
      this.add(apply_options(spec, options)?);
      Ok(())
    });

    methods.add_method("count", |_, this, ()| Ok(this.len()));
  }
}
