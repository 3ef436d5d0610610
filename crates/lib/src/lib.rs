//! srcmodel-lib: the language-component object model.
//!
//! This crate decides, lazily, which directories make up a component's
//! inputs and which dependency buckets it exposes:
//! - `Component`: a C++ application, C++ library or JVM library
//! - `LanguageSourceSet`: one named group of inputs with its generation status
//! - `DirectorySetView`: explicit roots with a convention fallback, re-read on
//!   every pull
//! - `ConfigurationBucket`: a role-scoped holder of dependency declarations
//!
//! Build scripts reach the model through the Lua front end in [`lua`] and
//! [`eval`].

pub mod bucket;
pub mod component;
pub mod consts;
pub mod deps;
pub mod dirset;
pub mod eval;
pub mod lua;
pub mod names;
pub mod project;
pub mod property;
pub mod report;
pub mod source_set;
pub mod task;
pub mod walk;
