//! Tests for source-set handles and directory blocks.

use mlua::prelude::*;
use srcmodel_lib::task::TaskRef;

use super::common::create_test_runtime;

#[test]
fn identity_fields() -> LuaResult<()> {
  let (lua, _) = create_test_runtime()?;

  let (name, full_name, display_name): (String, String, String) = lua
    .load(
      r#"
        local cpp = project.cpp_application("app"):source_set("cpp")
        return cpp.name, cpp.full_name, cpp.display_name
      "#,
    )
    .eval()?;

  assert_eq!(name, "cpp");
  assert_eq!(full_name, "appCpp");
  assert_eq!(display_name, "C++ source 'app:cpp'");
  Ok(())
}

#[test]
fn source_block_overrides_convention() -> LuaResult<()> {
  let (lua, _) = create_test_runtime()?;

  let (before, may_before, after, may_after): (Vec<String>, bool, Vec<String>, bool) = lua
    .load(
      r#"
        local cpp = project.cpp_application("app"):source_set("cpp")
        local before, may_before = cpp:resolve(), cpp:may_have_sources()
        cpp:source(function(dirs) dirs:from("native", "third_party/native") end)
        return before, may_before, cpp:resolve(), cpp:may_have_sources()
      "#,
    )
    .eval()?;

  assert_eq!(before, vec!["src/app/cpp"]);
  assert!(!may_before);
  assert_eq!(after, vec!["native", "third_party/native"]);
  assert!(may_after);
  Ok(())
}

#[test]
fn set_from_and_clear_restore_convention() -> LuaResult<()> {
  let (lua, _) = create_test_runtime()?;

  let roots: Vec<String> = lua
    .load(
      r#"
        local cpp = project.cpp_application("app"):source_set("cpp")
        cpp:source(function(dirs)
          dirs:set_from({ "a", "b" })
          dirs:clear()
        end)
        return cpp:resolve()
      "#,
    )
    .eval()?;

  assert_eq!(roots, vec!["src/app/cpp"]);
  Ok(())
}

#[test]
fn built_by_marks_generated() -> LuaResult<()> {
  let (lua, project) = create_test_runtime()?;

  let (generated, may_have_sources): (bool, bool) = lua
    .load(
      r#"
        local headers = project.cpp_library("lib"):source_set("headers")
        headers:built_by(":generateHeaders", ":unpackHeaders")
        return headers:is_generated(), headers:may_have_sources()
      "#,
    )
    .eval()?;

  assert!(generated);
  assert!(may_have_sources);

  let p = project.borrow();
  let headers = p.require_component("lib").unwrap().source_set("headers").unwrap();
  assert_eq!(
    headers.build_dependencies(),
    vec![TaskRef::from(":generateHeaders"), TaskRef::from(":unpackHeaders")]
  );
  Ok(())
}

#[test]
fn generated_by_does_not_mark_generated() -> LuaResult<()> {
  let (lua, _) = create_test_runtime()?;

  let (task, generated): (String, bool) = lua
    .load(
      r#"
        local cpp = project.cpp_application("app"):source_set("cpp")
        cpp:generated_by(":protoc")
        return cpp:generator_task(), cpp:is_generated()
      "#,
    )
    .eval()?;

  assert_eq!(task, ":protoc");
  assert!(!generated);
  Ok(())
}

#[test]
fn add_source_set_with_kind() -> LuaResult<()> {
  let (lua, _) = create_test_runtime()?;

  let (display_name, roots, names): (String, Vec<String>, Vec<String>) = lua
    .load(
      r#"
        local lib = project.jvm_library("core")
        local extra = lib:add_source_set("generated", "java")
        return extra.display_name, extra:resolve(), lib:source_sets()
      "#,
    )
    .eval()?;

  assert_eq!(display_name, "Java source 'core:generated'");
  assert_eq!(roots, vec!["src/core/generated"]);
  assert_eq!(names, vec!["java", "resources", "generated"]);

  let err = lua
    .load(r#"project.component("core"):add_source_set("x", "cobol")"#)
    .exec()
    .unwrap_err()
    .to_string();
  assert!(err.contains("unknown source set kind 'cobol'"), "unexpected error: {}", err);
  Ok(())
}

#[test]
fn source_set_dependencies_are_separate_from_buckets() -> LuaResult<()> {
  let (lua, project) = create_test_runtime()?;

  lua
    .load(
      r#"
        local cpp = project.cpp_application("app"):source_set("cpp")
        cpp:dependencies(function(deps) deps:library("net") end)
      "#,
    )
    .exec()?;

  let p = project.borrow();
  let app = p.require_component("app").unwrap();
  assert_eq!(app.source_set("cpp").unwrap().dependencies().len(), 1);
  assert!(app.implementation_dependencies().unwrap().dependencies().is_empty());
  Ok(())
}

#[test]
fn configure_blocks_may_reach_back_into_the_project() -> LuaResult<()> {
  let (lua, project) = create_test_runtime()?;

  lua
    .load(
      r#"
        local app = project.cpp_application("app")
        app:private_headers(function(dirs)
          dirs:from("include")
          project.component("app"):source_set("cpp"):built_by(":gen")
        end)
      "#,
    )
    .exec()?;

  let p = project.borrow();
  let app = p.require_component("app").unwrap();
  assert!(app.source_set("cpp").unwrap().is_generated());
  assert!(app.source_set("headers").unwrap().may_have_sources());
  Ok(())
}
