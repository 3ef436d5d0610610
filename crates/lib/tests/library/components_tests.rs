//! Tests for `project.*` constructors and component handles.

use mlua::prelude::*;
use srcmodel_lib::bucket::BucketRole;
use srcmodel_lib::component::ComponentKind;

use super::common::create_test_runtime;

mod constructors {
  use super::*;

  #[test]
  fn each_kind_has_a_constructor() -> LuaResult<()> {
    let (lua, project) = create_test_runtime()?;

    lua
      .load(
        r#"
          project.cpp_application("app")
          project.cpp_library("lib")
          project.jvm_library("core")
        "#,
      )
      .exec()?;

    let p = project.borrow();
    let kinds: Vec<ComponentKind> = p.components().iter().map(|c| c.kind()).collect();
    assert_eq!(
      kinds,
      vec![
        ComponentKind::CppApplication,
        ComponentKind::CppLibrary,
        ComponentKind::JvmLibrary
      ]
    );
    Ok(())
  }

  #[test]
  fn configure_block_runs_with_the_handle() -> LuaResult<()> {
    let (lua, project) = create_test_runtime()?;

    let seen: String = lua
      .load(
        r#"
          local seen
          project.cpp_library("lib", function(lib)
            seen = lib.name .. ":" .. lib.kind
            lib:set_base_name("renamed")
          end)
          return seen
        "#,
      )
      .eval()?;

    assert_eq!(seen, "lib:cpp_library");
    assert_eq!(project.borrow().require_component("lib").unwrap().base_name(), "renamed");
    Ok(())
  }

  #[test]
  fn duplicate_name_fails_without_adding_a_component() -> LuaResult<()> {
    let (lua, project) = create_test_runtime()?;

    let result = lua
      .load(
        r#"
          project.cpp_library("lib")
          project.cpp_application("lib")
        "#,
      )
      .exec();

    let err = result.unwrap_err().to_string();
    assert!(err.contains("already exists"), "unexpected error: {}", err);
    assert_eq!(project.borrow().components().len(), 1);
    Ok(())
  }

  #[test]
  fn empty_name_is_rejected() -> LuaResult<()> {
    let (lua, _) = create_test_runtime()?;

    let err = lua.load(r#"project.cpp_application("")"#).exec().unwrap_err().to_string();
    assert!(err.contains("component name is empty"), "unexpected error: {}", err);
    Ok(())
  }

  #[test]
  fn lookup_returns_existing_component() -> LuaResult<()> {
    let (lua, _) = create_test_runtime()?;

    let base: String = lua
      .load(
        r#"
          project.cpp_application("app")
          return project.component("app").base_name
        "#,
      )
      .eval()?;
    assert_eq!(base, "app");

    assert!(lua.load(r#"project.component("ghost")"#).exec().is_err());
    Ok(())
  }

  #[test]
  fn project_dir_is_exposed() -> LuaResult<()> {
    let (lua, _) = create_test_runtime()?;
    let dir: String = lua.load("return project.dir").eval()?;
    assert_eq!(dir, "/work");
    Ok(())
  }
}

mod headers {
  use super::*;

  #[test]
  fn header_dirs_follow_convention_until_configured() -> LuaResult<()> {
    let (lua, _) = create_test_runtime()?;

    let (before, after): (Vec<String>, Vec<String>) = lua
      .load(
        r#"
          local lib = project.cpp_library("lib")
          local before = lib:header_dirs()
          lib:public_headers(function(dirs) dirs:from("api") end)
          return before, lib:header_dirs()
        "#,
      )
      .eval()?;

    assert_eq!(before, vec!["src/lib/headers", "src/lib/public"]);
    assert_eq!(after, vec!["src/lib/headers", "api"]);
    Ok(())
  }

  #[test]
  fn application_has_no_public_headers() -> LuaResult<()> {
    let (lua, _) = create_test_runtime()?;

    let result = lua
      .load(
        r#"
          local app = project.cpp_application("app")
          app:public_headers(function(dirs) dirs:from("api") end)
        "#,
      )
      .exec();

    assert!(result.is_err());
    Ok(())
  }
}

mod dependencies {
  use super::*;

  #[test]
  fn declarations_land_in_the_role_bucket() -> LuaResult<()> {
    let (lua, project) = create_test_runtime()?;

    lua
      .load(
        r#"
          local lib = project.jvm_library("core")
          lib:dependencies("api", function(deps)
            deps:module("com.google.guava:guava:33.0")
          end)
          lib:dependencies("implementation", function(deps)
            deps:project(":utils")
            deps:project(":utils")
            deps:library("net", { scope = "runtime" })
          end)
        "#,
      )
      .exec()?;

    let p = project.borrow();
    let core = p.require_component("core").unwrap();
    assert_eq!(core.bucket(BucketRole::Api).unwrap().dependencies().len(), 1);

    let implementation = core.bucket(BucketRole::Implementation).unwrap();
    let rendered: Vec<String> = implementation.dependencies().iter().map(ToString::to_string).collect();
    assert_eq!(
      rendered,
      vec!["project ':utils'", "project ':utils'", "library 'net' (runtime)"]
    );
    Ok(())
  }

  #[test]
  fn unknown_role_is_rejected() -> LuaResult<()> {
    let (lua, _) = create_test_runtime()?;

    let err = lua
      .load(
        r#"
          local app = project.cpp_application("app")
          app:dependencies("api", function(deps) deps:library("x") end)
        "#,
      )
      .exec()
      .unwrap_err()
      .to_string();

    assert!(err.contains("has no 'api' configuration"), "unexpected error: {}", err);
    Ok(())
  }

  #[test]
  fn invalid_module_notation_is_rejected() -> LuaResult<()> {
    let (lua, project) = create_test_runtime()?;

    let result = lua
      .load(
        r#"
          local app = project.cpp_application("app")
          app:dependencies("implementation", function(deps) deps:module("zlib") end)
        "#,
      )
      .exec();

    assert!(result.is_err());
    let p = project.borrow();
    assert!(
      p.require_component("app")
        .unwrap()
        .implementation_dependencies()
        .unwrap()
        .dependencies()
        .is_empty()
    );
    Ok(())
  }
}
