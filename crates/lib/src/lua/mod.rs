//! Lua front end.
//!
//! Build scripts declare components through the `project` global and
//! configure them with nested blocks:
//!
//! ```lua
//! local lib = project.cpp_library("mylib")
//! lib:private_headers(function(dirs) dirs:from("include") end)
//! lib:dependencies("implementation", function(deps)
//!   deps:project(":utils")
//! end)
//! ```
//!
//! # Submodules
//!
//! - [`globals`] - the `project` table and its component constructors
//! - [`handles`] - userdata handles for components, source sets, directories
//!   and dependency blocks
//! - [`runtime`] - Lua VM creation and script loading

pub mod globals;
pub mod handles;
pub mod runtime;
